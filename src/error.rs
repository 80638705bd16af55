use std::io;
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("Window creation error: {0}")]
    CreateWindow(#[from] OsError),
}
