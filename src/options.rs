//! Configuring and running a reduction.

use error;
use logger::Logger;
use polymer_units;
use report::{Improvement, Report};
use std::fs;
use std::path;
use trim::Trim;

/// Options for reducing a polymer read from a file.
///
/// ```
/// extern crate polymer;
/// use polymer::{Options, Trim};
///
/// fn main() {
///     let report = Options::new("input.txt")
///         .trim(Trim::Letters)
///         .improve(true)
///         .reduce_str("dabAcCaCBAcCcaDA\n");
///     assert_eq!(report.length, 10);
///     assert_eq!(report.improvement.map(|i| i.length), Some(4));
/// }
/// ```
#[derive(Debug)]
pub struct Options {
    input: path::PathBuf,
    trim: Trim,
    improve: bool,
    logger: Logger,
}

impl Options {
    /// Construct new `Options` for the polymer in the `input` file.
    pub fn new<P>(input: P) -> Options
    where
        P: AsRef<path::Path>,
    {
        Options {
            input: input.as_ref().to_path_buf(),
            trim: Trim::default(),
            improve: false,
            logger: Logger::disabled(),
        }
    }

    /// Set the policy for cleaning up the input before reduction.
    pub fn trim(mut self, trim: Trim) -> Self {
        self.trim = trim;
        self
    }

    /// Also find the unit type whose removal gives the shortest polymer.
    pub fn improve(mut self, improve: bool) -> Self {
        self.improve = improve;
        self
    }

    /// Log progress to stderr.
    pub fn verbose(self, verbose: bool) -> Self {
        if verbose {
            self.logger(Logger::stderr())
        } else {
            self.logger(Logger::disabled())
        }
    }

    /// Send log messages to the given logger.
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Read the input file and reduce its contents.
    pub fn run(mut self) -> error::Result<Report> {
        let contents = fs::read_to_string(&self.input)?;
        self.logger
            .read_input(&self.input, contents.chars().count());
        Ok(self.reduce_str(&contents))
    }

    /// Reduce `contents` as if it had been read from the input file.
    pub fn reduce_str(&mut self, contents: &str) -> Report {
        let trimmed = self.trim.apply(contents);
        let units: Vec<char> = trimmed.chars().collect();
        self.logger
            .trimmed(self.trim, contents.chars().count(), units.len());

        let reduced = polymer_units::reduce(units.iter().cloned());
        self.logger
            .reduced(units.len(), reduced.len(), reduced.cancellations());

        let improvement = if self.improve {
            self.find_improvement(reduced.as_slice())
        } else {
            None
        };

        Report {
            input_length: units.len(),
            length: reduced.len(),
            cancellations: reduced.cancellations(),
            improvement,
        }
    }

    fn find_improvement(&mut self, reduced: &[char]) -> Option<Improvement> {
        let shortest = {
            let logger = &mut self.logger;
            polymer_units::removals(reduced)
                .inspect(|&(ty, ref without)| logger.tried_removing(ty, without.len()))
                .min_by_key(|&(_, ref without)| without.len())
        };

        match shortest {
            Some((unit, without)) => {
                self.logger.best_removal(unit, without.len());
                Some(Improvement {
                    unit,
                    length: without.len(),
                })
            }
            None => {
                self.logger.no_unit_types();
                None
            }
        }
    }
}
