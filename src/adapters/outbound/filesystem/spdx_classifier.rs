use crate::ports::outbound::Classifier;
use crate::report_generation::domain::LicenseMatch;
use crate::shared::error::ClassificationError;
use crate::shared::security::{read_regular_file, MAX_LICENSE_FILE_SIZE};
use std::path::Path;

/// Default minimum confidence for accepting a license match
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.9;

const SPDX_TAG: &str = "SPDX-License-Identifier:";

/// Non-blank lines at the top of a file that count as its header
const HEADER_LINES: usize = 3;

/// Confidence factor for a tag found below the file header
const LATE_TAG_FACTOR: f64 = 0.8;

/// Confidence factor for an expression naming a non-standard license
const NONSTANDARD_LICENSE_FACTOR: f64 = 0.7;

/// SPDX identifiers accepted at full confidence, compared case-insensitively
const KNOWN_LICENSES: &[&str] = &[
    "0BSD",
    "AGPL-3.0",
    "AGPL-3.0-only",
    "AGPL-3.0-or-later",
    "Apache-1.1",
    "Apache-2.0",
    "Artistic-2.0",
    "BSD-2-Clause",
    "BSD-2-Clause-Patent",
    "BSD-3-Clause",
    "BSL-1.0",
    "CC-BY-4.0",
    "CC0-1.0",
    "CDDL-1.0",
    "EPL-1.0",
    "EPL-2.0",
    "GPL-2.0",
    "GPL-2.0-only",
    "GPL-2.0-or-later",
    "GPL-3.0",
    "GPL-3.0-only",
    "GPL-3.0-or-later",
    "ISC",
    "LGPL-2.1",
    "LGPL-2.1-only",
    "LGPL-2.1-or-later",
    "LGPL-3.0",
    "LGPL-3.0-only",
    "LGPL-3.0-or-later",
    "MIT",
    "MIT-0",
    "MPL-2.0",
    "OFL-1.1",
    "Python-2.0",
    "Unicode-3.0",
    "Unicode-DFS-2016",
    "Unlicense",
    "WTFPL",
    "Zlib",
];

/// SpdxTagClassifier adapter identifying licenses by their SPDX tag
///
/// Looks for the first `SPDX-License-Identifier:` line in a license file and
/// reports its expression. A tag in the file header naming only well-known
/// SPDX licenses is a certain match. A tag further down the file, or one
/// naming a license outside that list (`LicenseRef-*` included), is scored
/// lower and may fall below the threshold. Files without a tag are reported
/// as unrecognised; free-form license text is not analysed.
#[derive(Debug, Clone)]
pub struct SpdxTagClassifier {
    confidence_threshold: f64,
}

impl SpdxTagClassifier {
    /// Creates a classifier accepting matches at or above `confidence_threshold`
    ///
    /// # Errors
    /// Returns [`ClassificationError::InvalidThreshold`] if the threshold is
    /// not within `0.0..=1.0`.
    pub fn new(confidence_threshold: f64) -> Result<Self, ClassificationError> {
        if !(0.0..=1.0).contains(&confidence_threshold) {
            return Err(ClassificationError::InvalidThreshold {
                threshold: confidence_threshold,
            });
        }
        Ok(Self {
            confidence_threshold,
        })
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }
}

impl Classifier for SpdxTagClassifier {
    fn identify(&self, path: &Path) -> Result<LicenseMatch, ClassificationError> {
        let content = read_regular_file(path, "license file", MAX_LICENSE_FILE_SIZE).map_err(
            |e| ClassificationError::FileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            },
        )?;

        let tag = find_spdx_tag(&content).ok_or_else(|| ClassificationError::Unrecognized {
            path: path.to_path_buf(),
        })?;
        let confidence = tag.confidence();

        if confidence < self.confidence_threshold {
            return Err(ClassificationError::BelowThreshold {
                path: path.to_path_buf(),
                license: tag.expression.to_string(),
                confidence,
                threshold: self.confidence_threshold,
            });
        }

        Ok(LicenseMatch::new(tag.expression, confidence))
    }
}

/// An SPDX tag and where it was found
#[derive(Debug, PartialEq)]
struct SpdxTag<'a> {
    expression: &'a str,
    in_header: bool,
}

impl SpdxTag<'_> {
    fn confidence(&self) -> f64 {
        let mut confidence = 1.0;
        if !self.in_header {
            confidence *= LATE_TAG_FACTOR;
        }
        if !is_standard_expression(self.expression) {
            confidence *= NONSTANDARD_LICENSE_FACTOR;
        }
        confidence
    }
}

/// Extracts the license expression of the first SPDX tag
///
/// Comment leaders before the tag (`//`, `#`, `/*`, ...) and a trailing
/// `*/` are tolerated.
fn find_spdx_tag(content: &str) -> Option<SpdxTag<'_>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .find_map(|(idx, line)| {
            let (_, rest) = line.split_once(SPDX_TAG)?;
            let expression = rest.trim().trim_end_matches("*/").trim();
            (!expression.is_empty()).then_some(SpdxTag {
                expression,
                in_header: idx < HEADER_LINES,
            })
        })
}

/// True when every license in the expression is a well-known SPDX identifier
///
/// `AND`/`OR` operators and parentheses are skipped, the exception after
/// `WITH` is not checked, and a trailing `+` is allowed.
fn is_standard_expression(expression: &str) -> bool {
    let mut tokens = expression
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|token| !token.is_empty());

    let mut licenses = 0;
    while let Some(token) = tokens.next() {
        if token.eq_ignore_ascii_case("AND") || token.eq_ignore_ascii_case("OR") {
            continue;
        }
        if token.eq_ignore_ascii_case("WITH") {
            tokens.next();
            continue;
        }
        let id = token.strip_suffix('+').unwrap_or(token);
        if !KNOWN_LICENSES.iter().any(|known| known.eq_ignore_ascii_case(id)) {
            return false;
        }
        licenses += 1;
    }
    licenses > 0
}
