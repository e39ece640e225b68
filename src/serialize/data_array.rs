//! Numeric array → `vtkDataArray` fragment, including type narrowing.
//!
//! Narrowing policy: `Int64` becomes `Int32` and `UInt64` becomes `UInt32` by
//! keeping the low 32 bits of every value (two's-complement truncation, the
//! `as` cast). Tags outside the numeric set are emitted as `Int32` with values
//! converted by `as` cast (floats saturate, NaN becomes 0).

use crate::data::array::{ArrayStorage, ComponentAccessor, TypedArray};
use crate::data::scalar::{DataType, Element, FromScalar, with_buffer};
use crate::serialize::document::{ArrayValues, DataArrayFragment, TypeName, VtkClass};
use num_traits::AsPrimitive;
use std::fmt;

/// Lossy type mapping applied while resolving a wire type name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Narrowing {
    /// `Int64` emitted as `Int32`.
    Int64ToInt32,
    /// `UInt64` emitted as `UInt32`.
    UInt64ToUInt32,
    /// Unsupported tag (raw VTK code) emitted as `Int32`.
    Unsupported(i32),
}

impl fmt::Display for Narrowing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narrowing::Int64ToInt32 => f.write_str("Int64 array is narrowed to Int32"),
            Narrowing::UInt64ToUInt32 => f.write_str("UInt64 array is narrowed to UInt32"),
            Narrowing::Unsupported(code) => {
                write!(f, "unsupported element type {code} is emitted as Int32")
            }
        }
    }
}

/// Wire type name for an element tag, plus the narrowing applied, if any.
pub fn resolve_type_name(data_type: DataType) -> (TypeName, Option<Narrowing>) {
    match data_type {
        DataType::Float32 => (TypeName::Float32, None),
        DataType::Float64 => (TypeName::Float64, None),
        DataType::Int8 => (TypeName::Int8, None),
        DataType::Int16 => (TypeName::Int16, None),
        DataType::Int32 => (TypeName::Int32, None),
        DataType::Int64 => (TypeName::Int32, Some(Narrowing::Int64ToInt32)),
        DataType::UInt8 => (TypeName::UInt8, None),
        DataType::UInt16 => (TypeName::UInt16, None),
        DataType::UInt32 => (TypeName::UInt32, None),
        DataType::UInt64 => (TypeName::UInt32, Some(Narrowing::UInt64ToUInt32)),
        DataType::Other(code) => (TypeName::Int32, Some(Narrowing::Unsupported(code))),
    }
}

/// Serialize `array` under its own name (empty when unnamed).
pub fn serialize_data_array(array: &TypedArray) -> DataArrayFragment {
    serialize_named(array, array.name().unwrap_or_default())
}

/// Serialize `array` under an explicit `name`.
pub fn serialize_named(array: &TypedArray, name: &str) -> DataArrayFragment {
    let (type_name, narrowing) = resolve_type_name(array.data_type());
    if let Some(narrowing) = narrowing {
        log::warn!("array `{name}`: {narrowing}");
    }
    let values = flatten(array, type_name);
    debug_assert_eq!(values.len(), array.size());
    DataArrayFragment {
        vtk_class: VtkClass::DataArray,
        name: name.to_string(),
        number_of_components: array.number_of_components(),
        size: array.size(),
        data_type: type_name,
        buffer: None,
        values,
    }
}

/// Flatten tuple-major, component-minor into `target` values.
pub fn flatten(array: &TypedArray, target: TypeName) -> ArrayValues {
    match array.storage() {
        ArrayStorage::Interleaved(buf) => {
            with_buffer!(buf, data => convert_dense(data.as_slice(), target))
        }
        ArrayStorage::Accessor(acc) => convert_gathered(
            acc.as_ref(),
            array.number_of_tuples(),
            array.number_of_components(),
            target,
        ),
    }
}

#[inline]
fn cast_slice<S, T>(src: &[S]) -> Vec<T>
where
    S: AsPrimitive<T>,
    T: Copy + 'static,
{
    src.iter().map(|&v| v.as_()).collect()
}

// One dispatch per array; the copy loop itself is monomorphic.
fn convert_dense<S: Element>(src: &[S], target: TypeName) -> ArrayValues {
    match target {
        TypeName::Float32 => ArrayValues::Float32(cast_slice(src)),
        TypeName::Float64 => ArrayValues::Float64(cast_slice(src)),
        TypeName::Int8 => ArrayValues::Int8(cast_slice(src)),
        TypeName::Int16 => ArrayValues::Int16(cast_slice(src)),
        TypeName::Int32 => ArrayValues::Int32(cast_slice(src)),
        TypeName::UInt8 => ArrayValues::UInt8(cast_slice(src)),
        TypeName::UInt16 => ArrayValues::UInt16(cast_slice(src)),
        TypeName::UInt32 => ArrayValues::UInt32(cast_slice(src)),
    }
}

fn gather<T: FromScalar>(acc: &dyn ComponentAccessor, tuples: usize, components: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(tuples * components);
    for t in 0..tuples {
        for c in 0..components {
            out.push(T::from_scalar(acc.component(t, c)));
        }
    }
    out
}

fn convert_gathered(
    acc: &dyn ComponentAccessor,
    tuples: usize,
    components: usize,
    target: TypeName,
) -> ArrayValues {
    match target {
        TypeName::Float32 => ArrayValues::Float32(gather(acc, tuples, components)),
        TypeName::Float64 => ArrayValues::Float64(gather(acc, tuples, components)),
        TypeName::Int8 => ArrayValues::Int8(gather(acc, tuples, components)),
        TypeName::Int16 => ArrayValues::Int16(gather(acc, tuples, components)),
        TypeName::Int32 => ArrayValues::Int32(gather(acc, tuples, components)),
        TypeName::UInt8 => ArrayValues::UInt8(gather(acc, tuples, components)),
        TypeName::UInt16 => ArrayValues::UInt16(gather(acc, tuples, components)),
        TypeName::UInt32 => ArrayValues::UInt32(gather(acc, tuples, components)),
    }
}
