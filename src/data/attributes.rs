//! Attribute collections attached to points, cells and the whole dataset.

use crate::data::array::AbstractArray;
use crate::mesh_error::MeshError;
use std::fmt;

/// Rendering roles an array of an [`AttributeSet`] can be designated for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum AttributeRole {
    GlobalIds,
    Normals,
    PedigreeIds,
    Scalars,
    TCoords,
    Tensors,
    Vectors,
}

impl AttributeRole {
    /// All roles, in document key order.
    pub const ALL: [AttributeRole; 7] = [
        AttributeRole::GlobalIds,
        AttributeRole::Normals,
        AttributeRole::PedigreeIds,
        AttributeRole::Scalars,
        AttributeRole::TCoords,
        AttributeRole::Tensors,
        AttributeRole::Vectors,
    ];

    /// Slot index of this role in [`AttributeRole::ALL`].
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeRole::GlobalIds => "globalIds",
            AttributeRole::Normals => "normals",
            AttributeRole::PedigreeIds => "pedigreeIds",
            AttributeRole::Scalars => "scalars",
            AttributeRole::TCoords => "tcoords",
            AttributeRole::Tensors => "tensors",
            AttributeRole::Vectors => "vectors",
        }
    }
}

impl fmt::Display for AttributeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of named arrays without role semantics.
#[derive(Clone, Debug, Default)]
pub struct FieldData {
    arrays: Vec<AbstractArray>,
}

impl FieldData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an array and return its position.
    pub fn add_array(&mut self, array: impl Into<AbstractArray>) -> usize {
        self.arrays.push(array.into());
        self.arrays.len() - 1
    }

    #[inline]
    pub fn arrays(&self) -> &[AbstractArray] {
        &self.arrays
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Position of the first array named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.arrays.iter().position(|a| a.name() == Some(name))
    }
}

impl FromIterator<AbstractArray> for FieldData {
    fn from_iter<I: IntoIterator<Item = AbstractArray>>(iter: I) -> Self {
        Self {
            arrays: iter.into_iter().collect(),
        }
    }
}

/// Per-point or per-cell arrays plus active-role bookkeeping.
#[derive(Clone, Debug)]
pub struct AttributeSet {
    fields: FieldData,
    active: [Option<usize>; 7],
    copy_all: [bool; 7],
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            fields: FieldData::default(),
            active: [None; 7],
            copy_all: [true; 7],
        }
    }
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an array and return its position.
    pub fn add_array(&mut self, array: impl Into<AbstractArray>) -> usize {
        self.fields.add_array(array)
    }

    #[inline]
    pub fn arrays(&self) -> &[AbstractArray] {
        self.fields.arrays()
    }

    #[inline]
    pub fn field_data(&self) -> &FieldData {
        &self.fields
    }

    /// Designate the array at `index` for `role`.
    pub fn set_active(&mut self, role: AttributeRole, index: usize) -> Result<(), MeshError> {
        if index >= self.fields.len() {
            return Err(MeshError::RoleIndexOutOfRange {
                role: role.as_str(),
                index,
                len: self.fields.len(),
            });
        }
        self.active[role.slot()] = Some(index);
        Ok(())
    }

    /// Append an array and make it the active one for `role`.
    pub fn add_active_array(
        &mut self,
        role: AttributeRole,
        array: impl Into<AbstractArray>,
    ) -> usize {
        let index = self.fields.add_array(array);
        self.active[role.slot()] = Some(index);
        index
    }

    pub fn clear_active(&mut self, role: AttributeRole) {
        self.active[role.slot()] = None;
    }

    #[inline]
    pub fn active(&self, role: AttributeRole) -> Option<usize> {
        self.active[role.slot()]
    }

    /// Set the copy-on-all flag of `role`.
    pub fn set_copy_all(&mut self, role: AttributeRole, on: bool) {
        self.copy_all[role.slot()] = on;
    }

    #[inline]
    pub fn copy_all(&self, role: AttributeRole) -> bool {
        self.copy_all[role.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::array::{StringArray, TypedArray};

    #[test]
    fn roles_default_to_unset_and_copy_on() {
        let set = AttributeSet::new();
        for role in AttributeRole::ALL {
            assert_eq!(set.active(role), None);
            assert!(set.copy_all(role));
        }
    }

    #[test]
    fn set_active_checks_bounds() {
        let mut set = AttributeSet::new();
        let idx = set.add_array(TypedArray::interleaved(Some("t"), 1, vec![1.0f64]).unwrap());
        set.set_active(AttributeRole::Scalars, idx).unwrap();
        assert_eq!(set.active(AttributeRole::Scalars), Some(0));
        assert!(set.set_active(AttributeRole::Vectors, 3).is_err());
    }

    #[test]
    fn position_finds_strings_too() {
        let mut fd = FieldData::new();
        fd.add_array(StringArray {
            name: Some("labels".into()),
            values: vec!["a".into()],
        });
        assert_eq!(fd.position("labels"), Some(0));
        assert_eq!(fd.position("missing"), None);
    }
}
