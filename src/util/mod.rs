//! Utility types for accessor decoding.
//!
//! This module contains fundamental types used throughout the library:
//! - [`ComponentType`] - Enum of scalar component storage types
//! - [`ShapeType`] / [`ElementType`] - Element structure (shape + component)
//! - [`Error`] / [`Result`] - Error handling
//! - Math type re-exports from glam

mod component;
mod element;
mod error;
mod math;

pub use component::*;
pub use element::*;
pub use error::*;
pub use math::*;
