use crate::cli::Minutes;
use crate::error::LaunchError;
use crate::window::{WindowHost, WindowSpec};
use log::debug;
use std::io::Write;

pub fn start_message(minutes: &Minutes) -> String {
    format!("Starting {minutes} minutes timer")
}

pub fn finish_message(minutes: &Minutes) -> String {
    format!("Finished {minutes} minutes timer")
}

/// Print the start banner, show the timer window, print the finish banner.
///
/// Nothing waits on `minutes`: once the host has shown the window the
/// finish banner follows straight away. The window is left open.
pub fn run<H: WindowHost, W: Write>(
    minutes: &Minutes,
    host: &mut H,
    out: &mut W,
) -> Result<(), LaunchError> {
    writeln!(out, "{}", start_message(minutes))?;
    out.flush()?;

    let spec: WindowSpec = WindowSpec::timer();
    host.show(&spec)?;
    debug!("Window shown for {minutes} minutes");

    writeln!(out, "{}", finish_message(minutes))?;
    out.flush()?;
    Ok(())
}
