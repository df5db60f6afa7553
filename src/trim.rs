//! What to strip from the input before reducing it.
//!
//! Input files usually end in a newline. A newline never reacts, so leaving
//! it in adds one to the reduced length.

use error;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A policy for cleaning up input before reduction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trim {
    /// Reduce every character of the input, exactly as read.
    None,

    /// Strip leading and trailing whitespace.
    Whitespace,

    /// Keep only alphabetic characters.
    Letters,
}

impl Default for Trim {
    fn default() -> Trim {
        Trim::Whitespace
    }
}

impl Trim {
    /// The names accepted by `FromStr`.
    pub const NAMES: &'static [&'static str] = &["none", "whitespace", "letters"];

    /// Apply this policy to `input`.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match *self {
            Trim::None => Cow::Borrowed(input),
            Trim::Whitespace => Cow::Borrowed(input.trim()),
            Trim::Letters => {
                if input.chars().all(char::is_alphabetic) {
                    Cow::Borrowed(input)
                } else {
                    Cow::Owned(input.chars().filter(|c| c.is_alphabetic()).collect())
                }
            }
        }
    }
}

impl FromStr for Trim {
    type Err = error::Error;

    fn from_str(s: &str) -> error::Result<Trim> {
        match s {
            "none" => Ok(Trim::None),
            "whitespace" => Ok(Trim::Whitespace),
            "letters" => Ok(Trim::Letters),
            otherwise => Err(error::Error::Trim(otherwise.into())),
        }
    }
}

impl fmt::Display for Trim {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Trim::None => "none",
            Trim::Whitespace => "whitespace",
            Trim::Letters => "letters",
        };
        f.write_str(name)
    }
}
