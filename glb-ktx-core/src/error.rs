//! Error types for GLB texture conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, GlbKtxError>;

/// Main error type for the conversion batch
#[derive(Error, Debug)]
pub enum GlbKtxError {
    /// IO errors when reading/writing files or console output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The assets directory could not be listed
    #[error("Failed to read assets directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A compression setting is outside its accepted range
    #[error("Invalid setting '{name}': {message}")]
    InvalidSetting { name: String, message: String },

    /// The converter program could not be started
    #[error("Failed to launch '{command}': {source}")]
    ToolLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The converter ran but did not exit successfully
    #[error("Command failed: {command}{}", stderr_suffix(.stderr))]
    ToolFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

impl GlbKtxError {
    /// Create a directory listing error
    pub fn read_dir<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid setting error
    pub fn invalid_setting<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::InvalidSetting {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a launch error for the converter program
    pub fn tool_launch<S: Into<String>>(command: S, source: io::Error) -> Self {
        Self::ToolLaunch {
            command: command.into(),
            source,
        }
    }

    /// Create a failed-run error for the converter program
    pub fn tool_failed<S: Into<String>, E: Into<String>>(
        command: S,
        status: Option<i32>,
        stderr: E,
    ) -> Self {
        Self::ToolFailed {
            command: command.into(),
            status,
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failed_message_includes_stderr() {
        let err = GlbKtxError::tool_failed("npx gltf-transform etc1s a b", Some(1), "boom\n");
        assert_eq!(err.to_string(), "Command failed: npx gltf-transform etc1s a b\nboom");
    }

    #[test]
    fn test_tool_failed_message_without_stderr() {
        let err = GlbKtxError::tool_failed("npx x", Some(2), "  \n");
        assert_eq!(err.to_string(), "Command failed: npx x");
    }

    #[test]
    fn test_read_dir_message() {
        let err = GlbKtxError::read_dir("assets", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("Failed to read assets directory assets: "));
    }
}
