#![warn(missing_docs)]
#![deny(unsafe_code)]
//! Core types and traits for `cellgrid`.
//!
//! This crate provides the [`Grid`] interface shared by every storage strategy, the [`Cell`]
//! triple, and the live views a grid hands out.

mod bounds;
mod cell;
mod compare;
mod error;
mod grid;
mod key;
pub mod views;

pub use crate::bounds::*;
pub use crate::cell::*;
pub use crate::compare::*;
pub use crate::error::*;
pub use crate::grid::*;
pub use crate::key::*;
