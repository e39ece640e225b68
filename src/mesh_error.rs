//! MeshError: Unified error type for mesh-vtkjs public APIs
//!
//! Every fallible construction and serialization path returns this type.
//! Recoverable conditions (narrowing, skipped entries) are logged instead and
//! never surface here.

use crate::topology::cell_array::CellGroup;
use thiserror::Error;

/// Unified error type for mesh-vtkjs operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// An array was declared with zero components per tuple.
    #[error("array `{0}` must have at least one component per tuple")]
    ComponentCountZero(String),
    /// A dense buffer length is not a whole number of tuples.
    #[error("array `{name}`: buffer of {len} values is not a multiple of {components} components")]
    BufferLengthMismatch {
        name: String,
        len: usize,
        components: usize,
    },
    /// Component planes disagree on element type or length.
    #[error("array `{name}`: component plane {plane} has {found}, expected {expected}")]
    AccessorShapeMismatch {
        name: String,
        plane: usize,
        expected: String,
        found: String,
    },
    /// Point coordinates must be 3-component tuples.
    #[error("points must have 3 components per tuple, found {0}")]
    PointComponents(usize),
    /// A point index does not fit the connectivity storage width.
    #[error("point index {0} does not fit the cell index storage")]
    CellIndexOverflow(usize),
    /// A cell referenced a point that the mesh does not have.
    #[error("{group} cell {cell} references point {index}, but the mesh has {points} points")]
    CellPointOutOfRange {
        group: CellGroup,
        cell: usize,
        index: i64,
        points: usize,
    },
    /// An active role was assigned to an array index that does not exist.
    #[error("active {role} index {index} is out of range for {len} arrays")]
    RoleIndexOutOfRange {
        role: &'static str,
        index: usize,
        len: usize,
    },
    /// Underlying I/O failure while writing a document or reading metadata.
    #[error("I/O error: {0}")]
    Io(String),
    /// JSON encoding failure.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for MeshError {
    fn from(e: std::io::Error) -> Self {
        MeshError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for MeshError {
    fn from(e: serde_json::Error) -> Self {
        MeshError::Json(e.to_string())
    }
}
