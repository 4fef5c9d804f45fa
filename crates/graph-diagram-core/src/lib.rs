//! Graph Diagram Core Types
//!
//! This crate provides the foundational types for drawing node-and-relationship
//! graphs. It includes:
//!
//! - **Geometry**: Points, bounds and the arrow outline ([`geometry`] module)
//! - **Model**: Nodes, relationships and coordinate scaling ([`model`] module)
//!
//! Everything here is pure computation: no I/O, and no operation can fail.
//! Malformed numbers are carried as NaN.

pub mod geometry;
pub mod model;

use model::Model;

/// Creates an empty [`Model`] with unit scales.
pub fn create_model() -> Model {
    Model::new()
}
