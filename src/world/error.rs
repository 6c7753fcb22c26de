use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal evaluation errors. Everything else degrades with a warning.
#[derive(Error, Debug)]
pub enum WorldError {
    #[error("failed to read status file {}", .path.display())]
    StatusUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
