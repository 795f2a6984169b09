//! Errors and error-related utilities.

use std::path::Path;
use std::{error, fmt, result};

/// The error type used throughout this library.
pub type Error = Box<dyn error::Error + Send + Sync>;

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Error>;

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument or option value.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

/// Missing corpus directory or data file.
#[derive(Debug)]
pub struct InputNotFound(pub String);

/// A document that cannot be placed in any decade.
#[derive(Debug)]
pub struct UnresolvableYear(pub String);

/// Mean or summary requested over zero eligible values.
#[derive(Debug)]
pub struct EmptyScoreSet(pub String);

/// Unrecognized normalization option.
#[derive(Debug)]
pub struct UnknownConfigOption(pub String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl fmt::Display for InputNotFound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "input not found: {}", self.0)
    }
}

impl fmt::Display for UnresolvableYear {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no year known for document '{}'", self.0)
    }
}

impl fmt::Display for EmptyScoreSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "nothing to score: {}", self.0)
    }
}

impl fmt::Display for UnknownConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown normalization option '{}'", self.0)
    }
}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

impl error::Error for InputNotFound {}

impl error::Error for UnresolvableYear {}

impl error::Error for EmptyScoreSet {}

impl error::Error for UnknownConfigOption {}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Error {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Error {
    InvalidArgument(s).into()
}

/// A helper for constructing [InputNotFound].
pub fn input_not_found(path: &Path) -> Error {
    InputNotFound(path.display().to_string()).into()
}

/// A helper for constructing [UnresolvableYear].
pub fn unresolvable_year(id: &str) -> Error {
    UnresolvableYear(id.to_owned()).into()
}

/// A helper for constructing [EmptyScoreSet].
pub fn empty_score_set(what: &str) -> Error {
    EmptyScoreSet(what.to_owned()).into()
}

/// A helper for constructing [UnknownConfigOption].
pub fn unknown_config_option(key: &str) -> Error {
    UnknownConfigOption(key.to_owned()).into()
}
