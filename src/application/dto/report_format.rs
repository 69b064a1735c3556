use crate::shared::error::ConfigError;

/// Output format of a license report
///
/// Exactly one format is active per run. The CLI exposes the two table
/// formats as flags; selecting neither means delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Comma-separated values, one record per line (default)
    #[default]
    Delimited,
    /// Fixed-width table with ASCII borders
    Table,
    /// Markdown pipe table
    MarkdownTable,
}

impl ReportFormat {
    /// Name of the table flag / config value
    pub const TABLE: &'static str = "table";
    /// Name of the markdown table flag / config value
    pub const MARKDOWN_TABLE: &'static str = "md-table";

    /// Resolves the mutually exclusive format flags
    ///
    /// Returns `Ok(None)` when neither flag is set so that a configured
    /// default can still apply.
    ///
    /// # Errors
    /// Returns [`ConfigError::ConflictingFormats`] when both flags are set.
    pub fn from_flags(table: bool, markdown_table: bool) -> Result<Option<Self>, ConfigError> {
        match (table, markdown_table) {
            (true, true) => Err(ConfigError::ConflictingFormats {
                first: Self::TABLE,
                second: Self::MARKDOWN_TABLE,
            }),
            (true, false) => Ok(Some(ReportFormat::Table)),
            (false, true) => Ok(Some(ReportFormat::MarkdownTable)),
            (false, false) => Ok(None),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" | "delimited" => Ok(ReportFormat::Delimited),
            Self::TABLE => Ok(ReportFormat::Table),
            Self::MARKDOWN_TABLE | "markdown" | "md" => Ok(ReportFormat::MarkdownTable),
            _ => Err(ConfigError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Delimited => write!(f, "csv"),
            ReportFormat::Table => write!(f, "{}", Self::TABLE),
            ReportFormat::MarkdownTable => write!(f, "{}", Self::MARKDOWN_TABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_flags_none_selected() {
        assert_eq!(ReportFormat::from_flags(false, false).unwrap(), None);
    }

    #[test]
    fn test_from_flags_table() {
        assert_eq!(
            ReportFormat::from_flags(true, false).unwrap(),
            Some(ReportFormat::Table)
        );
    }

    #[test]
    fn test_from_flags_markdown_table() {
        assert_eq!(
            ReportFormat::from_flags(false, true).unwrap(),
            Some(ReportFormat::MarkdownTable)
        );
    }

    #[test]
    fn test_from_flags_both_selected_is_rejected() {
        let err = ReportFormat::from_flags(true, true).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConflictingFormats {
                first: "table",
                second: "md-table"
            }
        ));
    }

    #[test]
    fn test_default_is_delimited() {
        assert_eq!(ReportFormat::default(), ReportFormat::Delimited);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(ReportFormat::from_str("CSV").unwrap(), ReportFormat::Delimited);
        assert_eq!(ReportFormat::from_str("Table").unwrap(), ReportFormat::Table);
        assert_eq!(
            ReportFormat::from_str("md-table").unwrap(),
            ReportFormat::MarkdownTable
        );
        assert_eq!(
            ReportFormat::from_str("markdown").unwrap(),
            ReportFormat::MarkdownTable
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let err = ReportFormat::from_str("xml").unwrap_err();
        assert!(err.to_string().contains("xml"));
        assert!(err.to_string().contains("md-table"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in [
            ReportFormat::Delimited,
            ReportFormat::Table,
            ReportFormat::MarkdownTable,
        ] {
            assert_eq!(ReportFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
