use crate::json_kind::JsonKind;
use fieldcheck_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using FieldCheckError
pub type Result<T> = std::result::Result<T, FieldCheckError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events, CLI output
/// and tests. Missing fields found by the comparator are not errors and
/// have no kind here; they are reported as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Caller input
    EmptyInput,
    InvalidJson,
    InvalidInput,

    // Template / configuration
    InvalidTemplate,
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyInput => "ERR_EMPTY_INPUT",
            ExErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidTemplate => "ERR_INVALID_TEMPLATE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context a
/// caller needs to point the user at the problem (operation, source line)
/// and to find the matching log events (request and trace ids).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    line: Option<usize>,
    column: Option<usize>,
    line_text: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            line: None,
            column: None,
            line_text: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the 1-based source line the error refers to
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add the text of the offending source line
    pub fn with_line_text(mut self, text: impl Into<String>) -> Self {
        self.line_text = Some(text.into());
        self
    }

    /// Add the ids of the request the error belongs to
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn line_text(&self) -> Option<&str> {
        self.line_text.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, " (line: {}, column: {})", line, column)?,
            (Some(line), None) => write!(f, " (line: {})", line)?,
            _ => {}
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for fieldcheck operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldCheckError {
    /// Candidate text was empty or whitespace only
    #[error("Please enter JSON to compare")]
    EmptyInput,

    /// Candidate text is not valid JSON
    #[error("Invalid JSON input: {message}")]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
        line_text: Option<String>,
    },

    /// Template text is not valid JSON
    #[error("Invalid template: {reason}")]
    InvalidTemplate { reason: String },

    /// Template root must be an object describing required keys
    #[error("Template root must be an object, found {found}")]
    TemplateNotObject { found: JsonKind },

    /// Filesystem access failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Sample name not recognised
    #[error("Unknown sample '{name}', expected 'correct' or 'incorrect'")]
    UnknownSample { name: String },

    /// Output format name not recognised
    #[error("Unknown output format '{name}', expected 'text' or 'json'")]
    UnknownFormat { name: String },
}

impl FieldCheckError {
    /// Build an `Io` error from a path and the underlying I/O error
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        FieldCheckError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from FieldCheckError to ExError
impl From<FieldCheckError> for ExError {
    fn from(err: FieldCheckError) -> Self {
        let message = err.to_string();
        match err {
            FieldCheckError::EmptyInput => {
                ExError::new(ExErrorKind::EmptyInput).with_message(message)
            }

            FieldCheckError::InvalidJson {
                line,
                column,
                line_text,
                ..
            } => {
                let ex = ExError::new(ExErrorKind::InvalidJson)
                    .with_message(message)
                    .with_line(line)
                    .with_column(column);
                match line_text {
                    Some(text) => ex.with_line_text(text),
                    None => ex,
                }
            }

            FieldCheckError::InvalidTemplate { .. } | FieldCheckError::TemplateNotObject { .. } => {
                ExError::new(ExErrorKind::InvalidTemplate).with_message(message)
            }

            FieldCheckError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            FieldCheckError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            FieldCheckError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            FieldCheckError::UnknownSample { .. } | FieldCheckError::UnknownFormat { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to FieldCheckError
impl From<serde_json::Error> for FieldCheckError {
    fn from(err: serde_json::Error) -> Self {
        FieldCheckError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FieldCheckError {
    fn from(err: toml::de::Error) -> Self {
        FieldCheckError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::EmptyInput,
            ExErrorKind::InvalidJson,
            ExErrorKind::InvalidInput,
            ExErrorKind::InvalidTemplate,
            ExErrorKind::InvalidConfig,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_op_and_line() {
        let err = ExError::new(ExErrorKind::InvalidJson)
            .with_op("parse_candidate")
            .with_message("expected value")
            .with_line(3)
            .with_column(7);
        assert_eq!(
            err.to_string(),
            "[ERR_INVALID_JSON] in operation 'parse_candidate': expected value (line: 3, column: 7)"
        );
    }

    #[test]
    fn test_display_minimal() {
        let err = ExError::new(ExErrorKind::Io);
        assert_eq!(err.to_string(), "[ERR_IO]");
    }

    #[test]
    fn test_invalid_json_message_leaves_location_to_display() {
        let err: ExError = FieldCheckError::InvalidJson {
            message: "key must be a string".to_string(),
            line: 3,
            column: 6,
            line_text: Some("    {,}".to_string()),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "[ERR_INVALID_JSON]: Invalid JSON input: key must be a string (line: 3, column: 6)"
        );
    }

    #[test]
    fn test_toml_error_maps_to_invalid_config() {
        let err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let converted: FieldCheckError = err.into();
        assert!(matches!(converted, FieldCheckError::InvalidConfig { .. }));
    }
}
