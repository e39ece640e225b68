//! Host-side helpers around the serialized document.
//!
//! The serializer only builds an in-memory [`RootDocument`]. This module
//! provides a trait for sinks that encode it to any `std::io::Write`, a plain
//! JSON implementation, and the source-file metadata the command-line tool
//! attaches under `metadata`.

pub mod json;
pub mod metadata;

pub use json::JsonWriter;
pub use metadata::Metadata;

use crate::mesh_error::MeshError;
use crate::serialize::document::RootDocument;
use std::io::Write;

/// Trait for sinks that encode a serialized document.
pub trait DocumentWriter {
    /// Encode `document` into `writer`.
    fn write<W: Write>(&self, writer: W, document: &RootDocument) -> Result<(), MeshError>;
}
