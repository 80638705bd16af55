use clap::Parser;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Open a floating, borderless window between a start and a finish banner
///
/// ## Examples
/// ```sh
/// floating-timer 5
/// floating-timer abc
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Minutes shown in the banners, taken verbatim
    #[arg(required = true, allow_hyphen_values = true, allow_negative_numbers = true)]
    pub minutes: Minutes,

    /// Anything after the minutes is ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

/// The minutes token. Never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minutes(String);

impl Minutes {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl FromStr for Minutes {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
