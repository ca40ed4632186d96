//! The animal data model.
//!
//! This module provides the `Animal` base record shared by all variants,
//! the `Dog` variant with its fixed capability lines, and the `Species`
//! selector used to pick a variant by name.

use crate::capability::{emit_line, Speaks, Walkable};
use crate::error::{Error, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Line emitted by a walking dog.
const DOG_WALK_LINE: &str = "Walks on 4 legs on land!";

/// Line emitted by a speaking dog.
const DOG_SPEAK_LINE: &str = "Bark!!";

/// Base record shared by all animal variants.
///
/// Holds the animal's name, set at construction and immutable thereafter.
/// Any string value is accepted, including the empty string; no validation
/// is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    /// The animal's name.
    name: String,
}

impl Animal {
    /// Create a new base record with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use critter_core::Animal;
    ///
    /// let animal = Animal::new("Rex");
    /// assert_eq!(animal.name(), "Rex");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the animal's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A dog.
///
/// Embeds the `Animal` base record and satisfies both the [`Walkable`]
/// and [`Speaks`] capabilities with fixed outputs. Carries no state of
/// its own, so both capability operations are idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    /// The embedded base record.
    base: Animal,
}

impl Dog {
    /// Create a new dog with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use critter_core::{Dog, Speaks, Walkable};
    ///
    /// let dog = Dog::new("Rex");
    /// assert_eq!(dog.name(), "Rex");
    ///
    /// let mut out = Vec::new();
    /// dog.speak_to(&mut out).unwrap();
    /// assert_eq!(out, b"Bark!!\n");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: Animal::new(name),
        }
    }

    /// Get the dog's name.
    pub fn name(&self) -> &str {
        self.base.name()
    }
}

impl Walkable for Dog {
    fn walk_to(&self, out: &mut dyn Write) -> Result<()> {
        emit_line(out, "walk", DOG_WALK_LINE)
    }
}

impl Speaks for Dog {
    fn speak_to(&self, out: &mut dyn Write) -> Result<()> {
        emit_line(out, "speak", DOG_SPEAK_LINE)
    }
}

/// Selector for the available animal variants.
///
/// There is exactly one variant in scope. The enum exists so callers
/// resolve a species by name through one fallible path instead of
/// matching on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    /// A dog.
    Dog,
}

impl FromStr for Species {
    type Err = Error;

    /// Parse a species name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            _ => Err(Error::unknown_species(s)),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Dog => write!(f, "dog"),
        }
    }
}
