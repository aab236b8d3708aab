// One variant per failure site; the shell fills in the message with map_err.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
    #[error("frame count must be at least 1, got {0}")]
    FrameCount(usize),
}
