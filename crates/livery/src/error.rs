//! Error types for theme loading and wiring.
//!
//! Value accessors never fail. Only the operations that read documents from
//! storage or connect themes into a hierarchy return [`ThemeError`].

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading themes or wiring parent relationships.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The document could not be parsed.
    #[error("Failed to parse theme document{}: {message}", display_path(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// The document could not be read from disk.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No theme document with the given name exists in any search directory.
    #[error("Theme document '{name}' not found (searched: {})", display_dirs(.searched))]
    NotFound { name: String, searched: Vec<PathBuf> },

    /// The file extension is not a recognized document format.
    #[error("Unsupported theme document format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A theme names a parent that is not part of the same registry.
    #[error("Theme '{theme}' inherits from unknown theme '{parent}'")]
    UnknownParent { theme: String, parent: String },

    /// Assigning the parent would make a theme its own ancestor.
    #[error("Theme '{theme}' cannot inherit from '{parent}': parent chain would form a cycle")]
    CyclicParent { theme: String, parent: String },

    /// The parent of a theme can be assigned only once.
    #[error("Theme '{theme}' already has a parent")]
    ParentAlreadySet { theme: String },

    /// The process-wide registry was already installed.
    #[error("Shared theme registry is already installed")]
    AlreadyInstalled,
}

impl ThemeError {
    /// Create a parse error without a source path.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// Attach a source path to a parse error. Other variants pass through.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse { path: None, message } => Self::Parse {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::parse(err.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::parse(err.to_string())
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

fn display_dirs(dirs: &[PathBuf]) -> String {
    if dirs.is_empty() {
        return "no directories".to_string();
    }
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
