use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the editor session
#[derive(Debug, Error)]
pub enum EditorError {
    /// The document could not be read at startup
    #[error("cannot open {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The terminal could not be set up, read from, or written to
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message_names_path() {
        let err = EditorError::Load {
            path: PathBuf::from("/tmp/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "cannot open /tmp/missing.txt: No such file or directory"
        );
    }
}
