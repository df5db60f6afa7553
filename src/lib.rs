//! Reduce polymers read from files, and report what is left.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

extern crate polymer_units;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

#[cfg(test)]
extern crate tempdir;

pub mod error;
pub mod logger;
pub mod options;
pub mod report;
pub mod trim;

pub use options::Options;
pub use report::{Improvement, Report};
pub use trim::Trim;
