// BizDir - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Per-record defects have no variant: the enricher defaults them.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all BizDir operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DirectoryError {
    /// Loading the data file failed.
    Load(LoadError),

    /// A query parameter could not be interpreted.
    Query(QueryError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Query(e) => write!(f, "Query error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Query(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while fetching and decoding the data file.
///
/// Every variant is fatal to the current load; recovery is a full reload.
#[derive(Debug)]
pub enum LoadError {
    /// The data file could not be read (missing, permissions, ...).
    Transport { path: PathBuf, source: io::Error },

    /// The data file exceeds the configured size limit.
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The content is not valid JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The content is valid JSON but not an array of records.
    NotAnArray { path: PathBuf },
}

impl LoadError {
    /// Single human-readable message for the presentation layer.
    ///
    /// Transport failures are surfaced verbatim; decoding failures collapse
    /// to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { source, .. } => format!("Data fetch failed: {source}"),
            Self::TooLarge { size, max_size, .. } => {
                format!("Data file is {size} bytes, exceeds maximum of {max_size} bytes")
            }
            Self::Parse { .. } | Self::NotAnArray { .. } => {
                "An unknown error occurred while reading the business data.".to_string()
            }
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { path, source } => {
                write!(f, "Cannot read data file '{}': {source}", path.display())
            }
            Self::TooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Data file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Parse { path, source } => {
                write!(f, "Invalid JSON in '{}': {source}", path.display())
            }
            Self::NotAnArray { path } => write!(
                f,
                "Data file '{}' must contain a JSON array of records",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for DirectoryError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Query errors
// ---------------------------------------------------------------------------

/// Errors related to interpreting query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A textual sort option did not name any known mode.
    UnknownSortOption { value: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSortOption { value } => write!(
                f,
                "Unknown sort option '{value}'. Expected one of: rank_asc, rank_desc, \
                 employees_asc, employees_desc, yearFounded_asc, yearFounded_desc, \
                 name_asc, name_desc (or empty for default)"
            ),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<QueryError> for DirectoryError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed maximum entry count.
    TooManyEntries { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyEntries { count, max } => write!(
                f,
                "Export of {count} businesses exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for DirectoryError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for DirectoryError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for BizDir results.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_is_verbatim() {
        let err = LoadError::Transport {
            path: PathBuf::from("data/businesses.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.user_message(), "Data fetch failed: no such file");
    }

    #[test]
    fn test_parse_message_is_generic() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = LoadError::Parse {
            path: PathBuf::from("data/businesses.json"),
            source,
        };
        assert!(!err.user_message().contains("oops"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_top_level_wraps_source() {
        let err: DirectoryError = QueryError::UnknownSortOption {
            value: "size".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Query error: Unknown sort option 'size'"));
    }
}
