//! Immutable grids.
//!
//! [`ImmutableGrid::copy_of`] picks the smallest specialization that fits the source: empty,
//! a single cell, a dense buffer or a sorted sparse array.

mod eq;
mod factory;
mod immutable;
mod policy;

pub use self::factory::*;
pub use self::immutable::*;
pub use self::policy::*;
