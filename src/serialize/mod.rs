//! Mesh → vtk.js document serialization.
//!
//! [`DocumentAssembler`] drives the per-part serializers:
//! - [`data_array`] for any numeric array (type mapping and narrowing),
//! - [`cells`] for the four connectivity groups,
//! - [`points`] for coordinates and their bounds,
//! - [`attributes`] for point, cell and field data.
//!
//! Every call builds fresh fragments; nothing is cached between calls.

pub mod assembler;
pub mod attributes;
pub mod cells;
pub mod data_array;
pub mod document;
pub mod points;

pub use assembler::{DocumentAssembler, SerializeOptions, serialize};
pub use document::{
    ArrayValues, AttributeSetFragment, AxisRange, CellArrayFragment, DataArrayFragment,
    FieldDataFragment, PointsFragment, RootDocument, TypeName, VtkClass,
};
