//! Element type tags and tagged numeric buffers.
//!
//! `DataType` mirrors the numeric type codes of VTK data arrays. Anything
//! outside the fixed numeric set is kept as `DataType::Other` with its raw
//! code so it can still be carried through and reported.

use num_traits::AsPrimitive;

/// Element type tag of a numeric array.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DataType {
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    /// Any other VTK type code (`char`, `long`, `vtkIdType`, bit arrays, ...).
    Other(i32),
}

impl DataType {
    /// Returns a stable string label for the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Float32 => "f32",
            DataType::Float64 => "f64",
            DataType::Int8 => "i8",
            DataType::Int16 => "i16",
            DataType::Int32 => "i32",
            DataType::Int64 => "i64",
            DataType::UInt8 => "u8",
            DataType::UInt16 => "u16",
            DataType::UInt32 => "u32",
            DataType::UInt64 => "u64",
            DataType::Other(_) => "other",
        }
    }
}

/// Numeric primitive that can be cast to every wire element type.
pub trait Element:
    Copy
    + Send
    + Sync
    + 'static
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + AsPrimitive<i8>
    + AsPrimitive<i16>
    + AsPrimitive<i32>
    + AsPrimitive<u8>
    + AsPrimitive<u16>
    + AsPrimitive<u32>
{
}

impl<T> Element for T where
    T: Copy
        + Send
        + Sync
        + 'static
        + AsPrimitive<f32>
        + AsPrimitive<f64>
        + AsPrimitive<i8>
        + AsPrimitive<i16>
        + AsPrimitive<i32>
        + AsPrimitive<u8>
        + AsPrimitive<u16>
        + AsPrimitive<u32>
{
}

/// A single component value as returned by a [`ComponentAccessor`](crate::data::array::ComponentAccessor).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl Scalar {
    /// Cast to `T` with `as` semantics (integers truncate, floats saturate).
    #[inline]
    pub fn cast<T>(self) -> T
    where
        T: Copy + 'static,
        f32: AsPrimitive<T>,
        f64: AsPrimitive<T>,
        i8: AsPrimitive<T>,
        i16: AsPrimitive<T>,
        i32: AsPrimitive<T>,
        i64: AsPrimitive<T>,
        u8: AsPrimitive<T>,
        u16: AsPrimitive<T>,
        u32: AsPrimitive<T>,
        u64: AsPrimitive<T>,
    {
        match self {
            Scalar::F32(v) => v.as_(),
            Scalar::F64(v) => v.as_(),
            Scalar::I8(v) => v.as_(),
            Scalar::I16(v) => v.as_(),
            Scalar::I32(v) => v.as_(),
            Scalar::I64(v) => v.as_(),
            Scalar::U8(v) => v.as_(),
            Scalar::U16(v) => v.as_(),
            Scalar::U32(v) => v.as_(),
            Scalar::U64(v) => v.as_(),
        }
    }
}

/// Wire element type that a [`Scalar`] can be converted into.
pub trait FromScalar: Copy + 'static {
    fn from_scalar(value: Scalar) -> Self;
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl FromScalar for $ty {
                #[inline]
                fn from_scalar(value: Scalar) -> Self {
                    value.cast::<$ty>()
                }
            }
        )*
    };
}

impl_from_scalar!(f32, f64, i8, i16, i32, u8, u16, u32);

/// Tagged, dense, interleaved value buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayBuffer {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
}

/// Dispatch `$body` once over the typed slice inside an [`ArrayBuffer`].
macro_rules! with_buffer {
    ($buf:expr, $slice:ident => $body:expr) => {
        match $buf {
            $crate::data::scalar::ArrayBuffer::F32($slice) => $body,
            $crate::data::scalar::ArrayBuffer::F64($slice) => $body,
            $crate::data::scalar::ArrayBuffer::I8($slice) => $body,
            $crate::data::scalar::ArrayBuffer::I16($slice) => $body,
            $crate::data::scalar::ArrayBuffer::I32($slice) => $body,
            $crate::data::scalar::ArrayBuffer::I64($slice) => $body,
            $crate::data::scalar::ArrayBuffer::U8($slice) => $body,
            $crate::data::scalar::ArrayBuffer::U16($slice) => $body,
            $crate::data::scalar::ArrayBuffer::U32($slice) => $body,
            $crate::data::scalar::ArrayBuffer::U64($slice) => $body,
        }
    };
}
pub(crate) use with_buffer;

impl ArrayBuffer {
    /// Element type tag for this buffer.
    pub fn data_type(&self) -> DataType {
        match self {
            ArrayBuffer::F32(_) => DataType::Float32,
            ArrayBuffer::F64(_) => DataType::Float64,
            ArrayBuffer::I8(_) => DataType::Int8,
            ArrayBuffer::I16(_) => DataType::Int16,
            ArrayBuffer::I32(_) => DataType::Int32,
            ArrayBuffer::I64(_) => DataType::Int64,
            ArrayBuffer::U8(_) => DataType::UInt8,
            ArrayBuffer::U16(_) => DataType::UInt16,
            ArrayBuffer::U32(_) => DataType::UInt32,
            ArrayBuffer::U64(_) => DataType::UInt64,
        }
    }

    /// Length of the underlying flat buffer.
    pub fn len(&self) -> usize {
        with_buffer!(self, data => data.len())
    }

    /// Return true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at flat position `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Scalar> {
        match self {
            ArrayBuffer::F32(d) => d.get(index).copied().map(Scalar::F32),
            ArrayBuffer::F64(d) => d.get(index).copied().map(Scalar::F64),
            ArrayBuffer::I8(d) => d.get(index).copied().map(Scalar::I8),
            ArrayBuffer::I16(d) => d.get(index).copied().map(Scalar::I16),
            ArrayBuffer::I32(d) => d.get(index).copied().map(Scalar::I32),
            ArrayBuffer::I64(d) => d.get(index).copied().map(Scalar::I64),
            ArrayBuffer::U8(d) => d.get(index).copied().map(Scalar::U8),
            ArrayBuffer::U16(d) => d.get(index).copied().map(Scalar::U16),
            ArrayBuffer::U32(d) => d.get(index).copied().map(Scalar::U32),
            ArrayBuffer::U64(d) => d.get(index).copied().map(Scalar::U64),
        }
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ArrayBuffer {
                fn from(v: Vec<$ty>) -> Self {
                    ArrayBuffer::$variant(v)
                }
            }
        )*
    };
}

impl_from_vec!(
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);
