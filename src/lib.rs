//! # mesh-vtkjs
//!
//! mesh-vtkjs serializes an in-memory polygonal mesh into the nested document
//! layout read by vtk.js (`vtkPolyData` JSON). It covers the data model side
//! only: loading mesh files and choosing a binary container are left to the
//! host.
//!
//! ## Features
//! - Typed numeric arrays with dense interleaved or per-component storage
//! - The four polygonal cell groups (verts, lines, polys, strips) in legacy
//!   `(count, ids...)` layout
//! - Point/cell attribute sets with active-role bookkeeping, and field data
//! - Deterministic, stateless assembly into a serde-serializable document
//!
//! ## Narrowing
//!
//! vtk.js has no 64-bit integer arrays. `Int64`/`UInt64` arrays are emitted as
//! `Int32`/`UInt32`, keeping the low 32 bits of every value, and a warning is
//! logged through the `log` facade.
//!
//! ## Usage
//!
//! ```
//! use mesh_vtkjs::prelude::*;
//!
//! let points = Points::from_f32(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
//! let mesh = Mesh::new(points).with_polys(CellArray::from_cells([[0usize, 1, 2]])?);
//! let doc = DocumentAssembler::new(SerializeOptions::full()).assemble(&mesh)?;
//! assert_eq!(doc.polys.size(), 4);
//! # Ok::<(), mesh_vtkjs::mesh_error::MeshError>(())
//! ```

pub mod data;
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod serialize;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::array::{AbstractArray, ComponentAccessor, StringArray, TypedArray};
    pub use crate::data::attributes::{AttributeRole, AttributeSet, FieldData};
    pub use crate::data::scalar::{ArrayBuffer, DataType, Scalar};
    pub use crate::io::{DocumentWriter, JsonWriter, Metadata};
    pub use crate::mesh::{Mesh, Points};
    pub use crate::mesh_error::MeshError;
    pub use crate::serialize::{DocumentAssembler, RootDocument, SerializeOptions, serialize};
    pub use crate::topology::cell_array::{CellArray, CellGroup};
}
