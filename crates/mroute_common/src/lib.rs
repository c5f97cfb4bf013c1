//! Exact integer-grid geometry shared across the mroute workspace.
//!
//! This crate provides the primitives the router consumes: points and vectors,
//! fixpoint transformations (displacement, 90° rotation, mirror), boxes, edges,
//! and the opaque endpoint identifier used to key bundle results. All
//! coordinates are `i64` grid units ("dbu"); no floating point is involved.

#![warn(missing_docs)]

pub mod bbox;
pub mod edge;
pub mod ids;
pub mod point;
pub mod trans;

pub use bbox::BBox;
pub use edge::Edge;
pub use ids::PortId;
pub use point::{Point, Vector};
pub use trans::Trans;
