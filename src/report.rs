//! The result of reducing one polymer.

use error;
use serde_json;
use std::io::Write;

/// The unit type whose removal gives the shortest polymer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Improvement {
    /// The removed unit type, in lowercase.
    pub unit: char,

    /// The reduced length once every unit of that type is gone.
    pub length: usize,
}

/// Everything we learned from one reduction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of units fed to the reducer, after trimming.
    pub input_length: usize,

    /// Number of units left once no more reactions are possible.
    pub length: usize,

    /// Number of reacting pairs destroyed.
    pub cancellations: usize,

    /// The best single unit type to remove, if that was requested and the
    /// polymer has any letters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<Improvement>,
}

impl Report {
    /// Write the reduced length, then the improved length if there is one,
    /// each on its own line.
    pub fn write_plain<W: Write>(&self, to: &mut W) -> error::Result<()> {
        writeln!(to, "{}", self.length)?;
        if let Some(improvement) = self.improvement {
            writeln!(to, "{}", improvement.length)?;
        }
        Ok(())
    }

    /// Write this report as a single line of JSON.
    pub fn write_json<W: Write>(&self, to: &mut W) -> error::Result<()> {
        serde_json::to_writer(&mut *to, self)?;
        writeln!(to)?;
        Ok(())
    }
}
