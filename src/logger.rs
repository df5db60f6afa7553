//! The logger receives log messages and writes them to a log sink.

use std::fmt;
use std::io::{self, Write};
use std::path;

/// The different kinds of log messages.
#[derive(Debug)]
enum LoggerMessage {
    ReadInput(path::PathBuf, usize),
    Trimmed(String, usize, usize),
    Reduced(usize, usize, usize),
    TriedRemoving(char, usize),
    BestRemoval(char, usize),
    NoUnitTypes,
}

fn percent_reduced(new_size: usize, orig_size: usize) -> f64 {
    assert!(new_size <= orig_size);
    if orig_size == 0 {
        100.0
    } else {
        ((orig_size - new_size) as f64) / (orig_size as f64) * 100.0
    }
}

impl fmt::Display for LoggerMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoggerMessage::ReadInput(ref path, size) => {
                write!(f, "Input: read {} units from {}", size, path.display())
            }
            LoggerMessage::Trimmed(ref policy, before, after) => write!(
                f,
                "Input: trim policy '{}' kept {} of {} units",
                policy,
                after,
                before
            ),
            LoggerMessage::Reduced(input_size, final_size, cancellations) => write!(
                f,
                "Reducer: {} units reduced to {} after {} cancellations ({:.2}% reduced)",
                input_size,
                final_size,
                cancellations,
                percent_reduced(final_size, input_size)
            ),
            LoggerMessage::TriedRemoving(unit, size) => write!(
                f,
                "Reducer: without '{}' units the polymer reduces to {}",
                unit,
                size
            ),
            LoggerMessage::BestRemoval(unit, size) => write!(
                f,
                "Reducer: removing '{}' units gives the shortest polymer: {} units",
                unit,
                size
            ),
            LoggerMessage::NoUnitTypes => {
                write!(f, "Reducer: no letters left; nothing to remove")
            }
        }
    }
}

/// Writes log messages, one per line, to a sink. A disabled logger drops
/// every message.
pub struct Logger {
    sink: Option<Box<dyn Write>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.sink.is_some())
            .finish()
    }
}

impl Logger {
    /// Construct a `Logger` writing to the given `Write`able.
    pub fn new<W>(to: W) -> Logger
    where
        W: 'static + Write,
    {
        Logger {
            sink: Some(Box::new(to)),
        }
    }

    /// Construct a `Logger` that writes to stderr.
    pub fn stderr() -> Logger {
        Logger::new(io::stderr())
    }

    /// Construct a `Logger` that discards everything.
    pub fn disabled() -> Logger {
        Logger { sink: None }
    }

    fn log(&mut self, msg: LoggerMessage) {
        if let Some(ref mut sink) = self.sink {
            // A broken log sink must not abort the reduction.
            let _ = writeln!(sink, "{}", msg);
        }
    }

    /// Log that the input was read.
    pub fn read_input(&mut self, path: &path::Path, size: usize) {
        self.log(LoggerMessage::ReadInput(path.to_path_buf(), size));
    }

    /// Log how many units survived trimming.
    pub fn trimmed<P: fmt::Display>(&mut self, policy: P, before: usize, after: usize) {
        self.log(LoggerMessage::Trimmed(policy.to_string(), before, after));
    }

    /// Log the outcome of a reduction.
    pub fn reduced(&mut self, input_size: usize, final_size: usize, cancellations: usize) {
        self.log(LoggerMessage::Reduced(input_size, final_size, cancellations));
    }

    /// Log the reduced size of the polymer with one unit type removed.
    pub fn tried_removing(&mut self, unit: char, size: usize) {
        self.log(LoggerMessage::TriedRemoving(unit, size));
    }

    /// Log the best unit type to remove.
    pub fn best_removal(&mut self, unit: char, size: usize) {
        self.log(LoggerMessage::BestRemoval(unit, size));
    }

    /// Log that there was no unit type to try removing.
    pub fn no_unit_types(&mut self) {
        self.log(LoggerMessage::NoUnitTypes);
    }
}
