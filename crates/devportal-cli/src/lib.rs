//! Library components of the `devportal` command-line tool.

pub mod logging;
pub mod output;
