//! Error handling types for wrapref
//!
//! `RefactorError` covers the edit computation; `HostError` covers the
//! reference TypeScript host, configuration loading and the CLI.

use thiserror::Error;

use crate::syntax::SyntaxKind;

/// Failures raised while computing the wrap-function-reference edit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefactorError {
    /// The locus is not an identifier passed to a call expression
    #[error("Refactor precondition failed at offset {offset}: {reason}")]
    Precondition { offset: usize, reason: String },

    /// The resolved call signature declares no parameters
    #[error("Expected parameter but got none for call to `{callee}`")]
    NoParameter { callee: String },

    /// The first parameter symbol is not declared by a parameter node
    #[error("Expected type to be parameter, found {found}")]
    NotAParameter { found: String },

    /// The parameter type is not a plain function type
    #[error("Parameter type is not a function: {found}")]
    UnsupportedParameterType { found: String },
}

/// Result type for refactor operations
pub type RefactorResult<T> = Result<T, RefactorError>;

impl RefactorError {
    /// Create a precondition error
    pub fn precondition(offset: usize, reason: impl Into<String>) -> Self {
        RefactorError::Precondition {
            offset,
            reason: reason.into(),
        }
    }

    /// Create a no-parameter error
    pub fn no_parameter(callee: impl Into<String>) -> Self {
        RefactorError::NoParameter {
            callee: callee.into(),
        }
    }

    /// Create a not-a-parameter error from the declaration kind found
    pub fn not_a_parameter(found: Option<SyntaxKind>) -> Self {
        RefactorError::NotAParameter {
            found: describe_kind(found),
        }
    }

    /// Create an unsupported parameter type error from the type kind found
    pub fn unsupported_parameter_type(found: Option<SyntaxKind>) -> Self {
        RefactorError::UnsupportedParameterType {
            found: describe_kind(found),
        }
    }
}

fn describe_kind(kind: Option<SyntaxKind>) -> String {
    kind.map_or_else(|| "missing".to_string(), |kind| kind.to_string())
}

/// Errors from the reference host, configuration and CLI
#[derive(Debug, Error)]
pub enum HostError {
    /// Source file is not part of the program
    #[error("File not found in program: {file_name}")]
    UnknownFile { file_name: String },

    /// Tree-sitter language could not be loaded
    #[error("Language setup failed: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Tree-sitter returned no tree
    #[error("Failed to parse {file_name}")]
    Parse { file_name: String },

    /// Cursor position could not be interpreted
    #[error("Invalid position `{input}`: {message}")]
    Position { input: String, message: String },

    /// Configuration decoding failed
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Refactor failed
    #[error(transparent)]
    Refactor(#[from] RefactorError),
}

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;

impl HostError {
    /// Create an unknown file error
    pub fn unknown_file(file_name: impl Into<String>) -> Self {
        HostError::UnknownFile {
            file_name: file_name.into(),
        }
    }

    /// Create a parse error
    pub fn parse(file_name: impl Into<String>) -> Self {
        HostError::Parse {
            file_name: file_name.into(),
        }
    }

    /// Create a position error
    pub fn position(input: impl Into<String>, message: impl Into<String>) -> Self {
        HostError::Position {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        HostError::Config {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for HostError {
    fn from(err: toml::de::Error) -> Self {
        HostError::config(err.to_string())
    }
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        HostError::config(err.to_string())
    }
}
