//! Core types for the Eddy fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! square [`Grid`] with its one-cell boundary ring, the field buffers that
//! live on it ([`ScalarField`], [`VectorField`]), the [`FieldKind`] tag the
//! boundary rules dispatch on, and the cell-addressing error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;

pub use error::OutOfRangeError;
pub use field::{FieldKind, ScalarField, VectorField};
pub use grid::Grid;
