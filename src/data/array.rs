//! Named numeric arrays with two access patterns.
//!
//! A [`TypedArray`] is either backed by a dense interleaved [`ArrayBuffer`]
//! (`components` contiguous values per tuple) or by a [`ComponentAccessor`]
//! that answers one `(tuple, component)` query at a time, for storage that is
//! not contiguous (e.g. one plane per component).

use crate::data::scalar::{ArrayBuffer, DataType, Scalar};
use crate::mesh_error::MeshError;
use std::fmt::Debug;
use std::sync::Arc;

/// Generic per-element read access to a numeric array.
pub trait ComponentAccessor: Debug + Send + Sync {
    /// Element type tag of the stored values.
    fn data_type(&self) -> DataType;
    /// Number of components per tuple.
    fn number_of_components(&self) -> usize;
    /// Number of tuples.
    fn number_of_tuples(&self) -> usize;
    /// Value of `component` in `tuple`.
    ///
    /// Callers only ask for `tuple < number_of_tuples()` and
    /// `component < number_of_components()`.
    fn component(&self, tuple: usize, component: usize) -> Scalar;
}

/// Backing storage of a [`TypedArray`].
#[derive(Clone, Debug)]
pub enum ArrayStorage {
    /// Dense, interleaved: tuple-major, component-minor.
    Interleaved(ArrayBuffer),
    /// Anything else, read through the accessor.
    Accessor(Arc<dyn ComponentAccessor>),
}

/// A named numeric array.
#[derive(Clone, Debug)]
pub struct TypedArray {
    name: Option<String>,
    data_type: DataType,
    number_of_components: usize,
    number_of_tuples: usize,
    storage: ArrayStorage,
}

impl TypedArray {
    /// Wrap a dense interleaved buffer.
    ///
    /// The buffer length must be a whole multiple of `components`.
    pub fn interleaved(
        name: Option<&str>,
        components: usize,
        buffer: impl Into<ArrayBuffer>,
    ) -> Result<Self, MeshError> {
        let buffer = buffer.into();
        let label = name.unwrap_or_default().to_string();
        if components == 0 {
            return Err(MeshError::ComponentCountZero(label));
        }
        if buffer.len() % components != 0 {
            return Err(MeshError::BufferLengthMismatch {
                name: label,
                len: buffer.len(),
                components,
            });
        }
        Ok(Self {
            name: name.map(str::to_string),
            data_type: buffer.data_type(),
            number_of_components: components,
            number_of_tuples: buffer.len() / components,
            storage: ArrayStorage::Interleaved(buffer),
        })
    }

    /// Unnamed dense array from a buffer already made of whole tuples.
    pub(crate) fn from_whole_tuples(components: usize, buffer: ArrayBuffer) -> Self {
        debug_assert!(components > 0 && buffer.len() % components == 0);
        Self {
            name: None,
            data_type: buffer.data_type(),
            number_of_components: components,
            number_of_tuples: buffer.len() / components,
            storage: ArrayStorage::Interleaved(buffer),
        }
    }

    /// Wrap a per-element accessor.
    pub fn with_accessor(
        name: Option<&str>,
        accessor: Arc<dyn ComponentAccessor>,
    ) -> Result<Self, MeshError> {
        if accessor.number_of_components() == 0 {
            return Err(MeshError::ComponentCountZero(
                name.unwrap_or_default().to_string(),
            ));
        }
        Ok(Self {
            name: name.map(str::to_string),
            data_type: accessor.data_type(),
            number_of_components: accessor.number_of_components(),
            number_of_tuples: accessor.number_of_tuples(),
            storage: ArrayStorage::Accessor(accessor),
        })
    }

    /// Override the element type tag.
    ///
    /// Used for arrays whose declared type differs from the native storage,
    /// e.g. `vtkIdType` arrays held in an `i64` buffer.
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    #[inline]
    pub fn number_of_components(&self) -> usize {
        self.number_of_components
    }

    #[inline]
    pub fn number_of_tuples(&self) -> usize {
        self.number_of_tuples
    }

    /// Total number of values (`components * tuples`).
    #[inline]
    pub fn size(&self) -> usize {
        self.number_of_components * self.number_of_tuples
    }

    #[inline]
    pub fn storage(&self) -> &ArrayStorage {
        &self.storage
    }

    /// Value of `component` in `tuple`, regardless of storage.
    pub fn component(&self, tuple: usize, component: usize) -> Option<Scalar> {
        if tuple >= self.number_of_tuples || component >= self.number_of_components {
            return None;
        }
        match &self.storage {
            ArrayStorage::Interleaved(buf) => buf.get(tuple * self.number_of_components + component),
            ArrayStorage::Accessor(acc) => Some(acc.component(tuple, component)),
        }
    }
}

/// Struct-of-arrays storage: one dense plane per component.
#[derive(Clone, Debug)]
pub struct ComponentPlanes {
    planes: Vec<ArrayBuffer>,
    data_type: DataType,
    tuples: usize,
}

impl ComponentPlanes {
    /// Build from one buffer per component.
    ///
    /// All planes must share the element type and length.
    pub fn new(planes: Vec<ArrayBuffer>) -> Result<Self, MeshError> {
        let first = planes
            .first()
            .ok_or_else(|| MeshError::ComponentCountZero(String::new()))?;
        let data_type = first.data_type();
        let tuples = first.len();
        for (plane, buf) in planes.iter().enumerate().skip(1) {
            if buf.data_type() != data_type {
                return Err(MeshError::AccessorShapeMismatch {
                    name: String::new(),
                    plane,
                    expected: data_type.as_str().to_string(),
                    found: buf.data_type().as_str().to_string(),
                });
            }
            if buf.len() != tuples {
                return Err(MeshError::AccessorShapeMismatch {
                    name: String::new(),
                    plane,
                    expected: format!("{tuples} values"),
                    found: format!("{} values", buf.len()),
                });
            }
        }
        Ok(Self {
            planes,
            data_type,
            tuples,
        })
    }
}

impl ComponentAccessor for ComponentPlanes {
    fn data_type(&self) -> DataType {
        self.data_type
    }

    fn number_of_components(&self) -> usize {
        self.planes.len()
    }

    fn number_of_tuples(&self) -> usize {
        self.tuples
    }

    fn component(&self, tuple: usize, component: usize) -> Scalar {
        // Shape is validated at construction.
        self.planes[component]
            .get(tuple)
            .unwrap_or(Scalar::I32(0))
    }
}

/// A named array of strings; has no numeric interpretation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringArray {
    pub name: Option<String>,
    pub values: Vec<String>,
}

/// One entry of an attribute collection.
#[derive(Clone, Debug)]
pub enum AbstractArray {
    Data(TypedArray),
    Strings(StringArray),
}

impl AbstractArray {
    pub fn name(&self) -> Option<&str> {
        match self {
            AbstractArray::Data(a) => a.name(),
            AbstractArray::Strings(s) => s.name.as_deref(),
        }
    }

    /// The numeric array, if this entry is one.
    pub fn as_data(&self) -> Option<&TypedArray> {
        match self {
            AbstractArray::Data(a) => Some(a),
            AbstractArray::Strings(_) => None,
        }
    }
}

impl From<TypedArray> for AbstractArray {
    fn from(a: TypedArray) -> Self {
        AbstractArray::Data(a)
    }
}

impl From<StringArray> for AbstractArray {
    fn from(s: StringArray) -> Self {
        AbstractArray::Strings(s)
    }
}
