//! Critter core library
//!
//! This crate provides the data model for named animals: the shared
//! [`Animal`] base record, the [`Walkable`] and [`Speaks`] capability
//! traits, and the [`Dog`] variant that satisfies both.

pub mod animal;
pub mod capability;
pub mod error;

pub use animal::{Animal, Dog, Species};
pub use capability::{Speaks, Walkable};
pub use error::{Error, Result};
