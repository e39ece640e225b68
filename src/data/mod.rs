//! Data module: typed arrays and attribute collections

pub mod array;
pub mod attributes;
pub mod scalar;

pub use array::{
    AbstractArray, ArrayStorage, ComponentAccessor, ComponentPlanes, StringArray, TypedArray,
};
pub use attributes::{AttributeRole, AttributeSet, FieldData};
pub use scalar::{ArrayBuffer, DataType, Scalar};
