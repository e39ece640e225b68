//! vtk.js PolyData document fragments.
//!
//! Field order of every struct is the key order on the wire. Key names follow
//! the vtk.js JSON layout and must not change.

use crate::mesh_error::MeshError;
use serde::Serialize;
use serde_json::{Map, Value};

/// `vtkClass` tag of a fragment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum VtkClass {
    #[serde(rename = "vtkDataArray")]
    DataArray,
    #[serde(rename = "vtkPoints")]
    Points,
    #[serde(rename = "vtkCellsArray")]
    CellArray,
    #[serde(rename = "vtkDataSetAttributes")]
    DataSetAttributes,
    #[serde(rename = "vtkPolyData")]
    PolyData,
}

/// Typed-array name used by vtk.js; serialized with the `Array` suffix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum TypeName {
    #[serde(rename = "Float32Array")]
    Float32,
    #[serde(rename = "Float64Array")]
    Float64,
    #[serde(rename = "Int8Array")]
    Int8,
    #[serde(rename = "Int16Array")]
    Int16,
    #[serde(rename = "Int32Array")]
    Int32,
    #[serde(rename = "UInt8Array")]
    UInt8,
    #[serde(rename = "UInt16Array")]
    UInt16,
    #[serde(rename = "UInt32Array")]
    UInt32,
}

impl TypeName {
    /// Bare type name, e.g. `"Float32"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Float32 => "Float32",
            TypeName::Float64 => "Float64",
            TypeName::Int8 => "Int8",
            TypeName::Int16 => "Int16",
            TypeName::Int32 => "Int32",
            TypeName::UInt8 => "UInt8",
            TypeName::UInt16 => "UInt16",
            TypeName::UInt32 => "UInt32",
        }
    }

    /// The `dataType` field value, e.g. `"Float32Array"`.
    pub fn array_name(self) -> String {
        format!("{}Array", self.as_str())
    }
}

/// Flat values of an array, already converted to the wire element type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrayValues {
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
}

impl ArrayValues {
    pub fn type_name(&self) -> TypeName {
        match self {
            ArrayValues::Float32(_) => TypeName::Float32,
            ArrayValues::Float64(_) => TypeName::Float64,
            ArrayValues::Int8(_) => TypeName::Int8,
            ArrayValues::Int16(_) => TypeName::Int16,
            ArrayValues::Int32(_) => TypeName::Int32,
            ArrayValues::UInt8(_) => TypeName::UInt8,
            ArrayValues::UInt16(_) => TypeName::UInt16,
            ArrayValues::UInt32(_) => TypeName::UInt32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ArrayValues::Float32(v) => v.len(),
            ArrayValues::Float64(v) => v.len(),
            ArrayValues::Int8(v) => v.len(),
            ArrayValues::Int16(v) => v.len(),
            ArrayValues::Int32(v) => v.len(),
            ArrayValues::UInt8(v) => v.len(),
            ArrayValues::UInt16(v) => v.len(),
            ArrayValues::UInt32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values widened to `f64`, in order.
    pub fn iter_f64(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            ArrayValues::Float32(v) => Box::new(v.iter().map(|&x| x as f64)),
            ArrayValues::Float64(v) => Box::new(v.iter().copied()),
            ArrayValues::Int8(v) => Box::new(v.iter().map(|&x| x as f64)),
            ArrayValues::Int16(v) => Box::new(v.iter().map(|&x| x as f64)),
            ArrayValues::Int32(v) => Box::new(v.iter().map(|&x| x as f64)),
            ArrayValues::UInt8(v) => Box::new(v.iter().map(|&x| x as f64)),
            ArrayValues::UInt16(v) => Box::new(v.iter().map(|&x| x as f64)),
            ArrayValues::UInt32(v) => Box::new(v.iter().map(|&x| x as f64)),
        }
    }
}

/// One serialized numeric array.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataArrayFragment {
    #[serde(rename = "vtkClass")]
    pub vtk_class: VtkClass,
    pub name: String,
    pub number_of_components: usize,
    pub size: usize,
    pub data_type: TypeName,
    /// Always `null`; values travel inline in `values`.
    pub buffer: Option<Vec<u8>>,
    pub values: ArrayValues,
}

/// Serialized connectivity of one cell group (`numberOfComponents == 1`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CellArrayFragment(pub DataArrayFragment);

impl CellArrayFragment {
    #[inline]
    pub fn size(&self) -> usize {
        self.0.size
    }

    #[inline]
    pub fn values(&self) -> &ArrayValues {
        &self.0.values
    }
}

/// Per-axis coordinate bounds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub component: usize,
    pub name: String,
}

/// Serialized point coordinates with their bounds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointsFragment {
    #[serde(flatten)]
    pub array: DataArrayFragment,
    pub ranges: [AxisRange; 3],
}

/// Serialized point or cell attribute set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSetFragment {
    #[serde(rename = "vtkClass")]
    pub vtk_class: VtkClass,
    pub arrays: Vec<DataArrayFragment>,
    pub active_global_ids: i64,
    pub active_normals: i64,
    pub active_pedigree_ids: i64,
    pub active_scalars: i64,
    #[serde(rename = "activeTCoords")]
    pub active_tcoords: i64,
    pub active_tensors: i64,
    pub active_vectors: i64,
    pub copy_field_flags: Vec<String>,
    pub do_all_copy_on: bool,
    pub do_all_copy_off: bool,
}

/// Serialized field data: arrays only, no role bookkeeping.
///
/// Tagged `vtkDataSetAttributes` like point and cell data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDataFragment {
    #[serde(rename = "vtkClass")]
    pub vtk_class: VtkClass,
    pub arrays: Vec<DataArrayFragment>,
}

/// The complete PolyData document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootDocument {
    #[serde(rename = "vtkClass")]
    pub vtk_class: VtkClass,
    pub points: PointsFragment,
    pub verts: CellArrayFragment,
    pub lines: CellArrayFragment,
    pub polys: CellArrayFragment,
    pub strips: CellArrayFragment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_data: Option<AttributeSetFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_data: Option<AttributeSetFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_data: Option<FieldDataFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl RootDocument {
    /// Merge host-supplied key/value pairs under `metadata`.
    ///
    /// Later calls overwrite keys set by earlier ones.
    pub fn with_metadata<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.metadata.get_or_insert_with(Map::new).extend(entries);
        self
    }

    /// The document as a generic nested JSON value.
    pub fn to_value(&self) -> Result<Value, MeshError> {
        Ok(serde_json::to_value(self)?)
    }
}
