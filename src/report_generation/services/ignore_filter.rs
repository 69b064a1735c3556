use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of ignore patterns
const MAX_IGNORE_PATTERNS: usize = 64;

/// Maximum length of a single ignore pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// IgnoreFilter - Decides which dependencies are left out of a report
///
/// A pattern without wildcards matches a dependency name exactly or as a path
/// prefix (`github.com/acme` matches `github.com/acme/tool`, not
/// `github.com/acmecorp`). A pattern containing `*` is matched against the
/// whole name, with `*` standing for any run of characters.
#[derive(Debug)]
pub struct IgnoreFilter {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreFilter {
    /// Creates a new IgnoreFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_IGNORE_PATTERNS)
    /// - Invalid pattern format (empty, length, characters, only wildcards)
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.len() > MAX_IGNORE_PATTERNS {
            anyhow::bail!(
                "Too many ignore patterns: {} (maximum: {})",
                patterns.len(),
                MAX_IGNORE_PATTERNS
            );
        }

        let patterns = patterns
            .iter()
            .map(|p| IgnorePattern::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns true if the dependency name matches any ignore pattern
    pub fn is_ignored(&self, name: &str) -> bool {
        // Every pattern is evaluated so unmatched-pattern reporting stays accurate
        self.patterns
            .iter()
            .fold(false, |ignored, p| p.matches(name) || ignored)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the patterns that have not matched any name so far
    pub fn unmatched_patterns(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.as_str())
            .collect()
    }
}

#[derive(Debug)]
struct IgnorePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl IgnorePattern {
    fn new(pattern: &str) -> Result<Self> {
        validate_pattern(pattern)?;

        Ok(Self {
            original: pattern.to_string(),
            matcher: compile_pattern(pattern),
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.matcher.matches(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "github.com/acme" -> the name itself or anything below it
    PathPrefix(String),
    /// "github.com/*/internal*" -> anchored wildcard parts
    Wildcard(Vec<String>),
}

impl PatternMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::PathPrefix(prefix) => {
                name == prefix
                    || name
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            PatternMatcher::Wildcard(parts) => wildcard_match(parts, name),
        }
    }
}

/// Matches `name` against pattern parts split on `*`
///
/// The first part must be a prefix and the last part a suffix; the parts in
/// between must appear in order without overlapping.
fn wildcard_match(parts: &[String], name: &str) -> bool {
    let (first, rest) = match parts.split_first() {
        Some(split) => split,
        None => return true,
    };
    let Some(mut remaining) = name.strip_prefix(first.as_str()) else {
        return false;
    };

    let (last, middle) = match rest.split_last() {
        Some(split) => split,
        None => return remaining.is_empty(),
    };

    for part in middle {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }

    remaining.len() >= last.len() && remaining.ends_with(last.as_str())
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Ignore pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Ignore pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|&c| !is_valid_pattern_char(c)) {
        anyhow::bail!(
            "Ignore pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric characters and - _ . / ~ @ + * are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!("Ignore pattern cannot contain only wildcards: '{}'", pattern);
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '~' | '@' | '+' | '*')
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    if pattern.contains('*') {
        PatternMatcher::Wildcard(pattern.split('*').map(str::to_string).collect())
    } else {
        PatternMatcher::PathPrefix(pattern.trim_end_matches('/').to_string())
    }
}
