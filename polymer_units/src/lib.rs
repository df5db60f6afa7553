//! Reduce a polymer by cancelling adjacent reacting units.
//!
//! A unit is a single `char`. Two units react when they are the same letter
//! in opposite cases, like `a` and `A`. Reacting neighbors annihilate each
//! other, which may bring a new reacting pair together, so reduction keeps
//! the surviving units on a stack and compares each incoming unit against
//! the top.
//!
//! ### Example
//!
//! ```
//! extern crate polymer_units;
//! use polymer_units::reduce;
//!
//! fn main() {
//!     let units = reduce("dabAcCaCBAcCcaDA".chars());
//!     assert_eq!(units.len(), 10);
//!     assert_eq!(units.to_string(), "dabCBAcaDA");
//! }
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

use std::collections::{btree_set, BTreeSet};
use std::fmt;
use std::iter::FromIterator;

/// Do `a` and `b` annihilate each other when adjacent?
///
/// Only the same letter in differing cases reacts. Identical units never do.
pub fn reacts(a: char, b: char) -> bool {
    a != b && a.to_uppercase().eq(b.to_uppercase())
}

/// The case-insensitive type of `unit`, or `None` if `unit` is not a letter.
pub fn unit_type(unit: char) -> Option<char> {
    if unit.is_alphabetic() {
        unit.to_lowercase().next()
    } else {
        None
    }
}

fn is_type(unit: char, ty: char) -> bool {
    unit.to_uppercase().eq(ty.to_uppercase())
}

/// A fully reduced sequence of units.
///
/// No two adjacent units in a `Units` ever react: every `add` restores that
/// before returning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Units {
    stack: Vec<char>,
    cancellations: usize,
}

impl Units {
    /// Construct an empty `Units`.
    pub fn new() -> Units {
        Units::default()
    }

    /// Add `unit` to the end of the polymer.
    ///
    /// If the current last unit reacts with `unit`, both are destroyed.
    /// Otherwise `unit` becomes the new last unit.
    pub fn add(&mut self, unit: char) {
        match self.stack.last() {
            Some(&top) if reacts(top, unit) => {
                self.stack.pop();
                self.cancellations += 1;
            }
            _ => self.stack.push(unit),
        }
    }

    /// The number of surviving units.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Did every unit cancel out?
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// How many reacting pairs have been destroyed so far.
    pub fn cancellations(&self) -> usize {
        self.cancellations
    }

    /// The surviving units, in order.
    pub fn as_slice(&self) -> &[char] {
        &self.stack
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for unit in &self.stack {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

impl Extend<char> for Units {
    fn extend<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = char>,
    {
        for unit in units {
            self.add(unit);
        }
    }
}

impl FromIterator<char> for Units {
    fn from_iter<I>(units: I) -> Units
    where
        I: IntoIterator<Item = char>,
    {
        let mut reduced = Units::new();
        reduced.extend(units);
        reduced
    }
}

/// Reduce `units` in a single left-to-right pass.
pub fn reduce<I>(units: I) -> Units
where
    I: IntoIterator<Item = char>,
{
    units.into_iter().collect()
}

/// The set of unit types present in `units`, in sorted order.
pub fn unit_types(units: &[char]) -> BTreeSet<char> {
    units.iter().filter_map(|&u| unit_type(u)).collect()
}

/// Reduce `units` after removing every unit of type `ty`, in either case.
pub fn reduce_without(units: &[char], ty: char) -> Units {
    reduce(units.iter().cloned().filter(|&u| !is_type(u, ty)))
}

/// An iterator over each unit type in a polymer, paired with the polymer
/// reduced without that type.
///
/// Created by `removals`.
#[derive(Debug)]
pub struct Removals<'a> {
    units: &'a [char],
    types: btree_set::IntoIter<char>,
}

impl<'a> Iterator for Removals<'a> {
    type Item = (char, Units);

    fn next(&mut self) -> Option<(char, Units)> {
        let units = self.units;
        self.types.next().map(|ty| (ty, reduce_without(units, ty)))
    }
}

/// Try removing each unit type from `units`, in sorted order.
pub fn removals(units: &[char]) -> Removals {
    Removals {
        units,
        types: unit_types(units).into_iter(),
    }
}

/// Find the unit type whose removal leaves the shortest reduced polymer.
///
/// Ties go to the first type in sorted order. Returns `None` if `units` has
/// no letters at all.
pub fn shortest_without_any(units: &[char]) -> Option<(char, Units)> {
    removals(units).min_by_key(|&(_, ref reduced)| reduced.len())
}
