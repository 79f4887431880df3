//! Control-flow walkthrough
//!
//! A fixed sequence of ten demonstrations covering `if`/`else if` chains,
//! counted and conditional loops, comparison operators and
//! increment/decrement. The binary writes the transcript to stdout; the
//! library exposes each branch chain on its own so it can be checked with
//! values other than the built-in literals.

pub mod bindings;
pub mod demo;
pub mod diagnostics;
pub mod steps;

pub use bindings::Bindings;
pub use demo::{run, transcript};
pub use steps::Step;

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum DemoError {
        #[error(transparent)]
        Io(#[from] std::io::Error),

        #[error("Transcript is not valid UTF-8")]
        Encoding(#[from] std::string::FromUtf8Error),
    }

    pub type Result<T> = std::result::Result<T, DemoError>;
}

pub use error::{DemoError, Result};
