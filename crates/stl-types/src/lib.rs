//! Core value types for STL conversion.
//!
//! This crate provides the in-memory representation of an STL file:
//!
//! - [`Triangle`] - One facet: normal, three vertices, attribute word
//! - [`StlModel`] - A named, ordered sequence of facets
//!
//! # Precision
//!
//! All coordinates are `f32`. Both STL representations store 32-bit
//! floats (binary by layout, ASCII by convention here), so keeping the
//! in-memory model at `f32` makes numeric round-trips between the two
//! representations lossless.
//!
//! # Coordinate System
//!
//! The types are unit- and convention-agnostic. Vertex order is
//! preserved exactly as decoded; normals are carried through unmodified
//! and never recomputed, even when degenerate.
//!
//! # Example
//!
//! ```
//! use stl_types::{Point3, StlModel, Triangle, Vector3};
//!
//! let facet = Triangle::new(
//!     Vector3::new(0.0, 0.0, 1.0),
//!     [
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     0,
//! );
//!
//! let model = StlModel::new("cube", vec![facet]);
//! assert_eq!(model.triangle_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod model;
mod triangle;

pub use model::StlModel;
pub use triangle::Triangle;

// Re-export the nalgebra types used in the public API.
pub use nalgebra::{Point3, Vector3};
