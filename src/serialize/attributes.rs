//! Attribute sets and field data → `vtkDataSetAttributes` fragments.

use crate::data::array::AbstractArray;
use crate::data::attributes::{AttributeRole, AttributeSet, FieldData};
use crate::serialize::data_array::serialize_data_array;
use crate::serialize::document::{
    AttributeSetFragment, DataArrayFragment, FieldDataFragment, VtkClass,
};

/// Serialized arrays plus, for every source entry, its position in them.
struct SerializedArrays {
    arrays: Vec<DataArrayFragment>,
    positions: Vec<Option<usize>>,
}

fn serialize_arrays(entries: &[AbstractArray]) -> SerializedArrays {
    let mut arrays = Vec::with_capacity(entries.len());
    let mut positions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.as_data() {
            Some(array) => {
                positions.push(Some(arrays.len()));
                arrays.push(serialize_data_array(array));
            }
            None => {
                log::warn!(
                    "Abstract array at index {index} with name `{}` is skipped",
                    entry.name().unwrap_or_default()
                );
                positions.push(None);
            }
        }
    }
    SerializedArrays { arrays, positions }
}

/// Serialize point or cell data, including active roles and copy flags.
///
/// Active-role indices are positions into the emitted `arrays`; `-1` when the
/// role is unset or its array was skipped.
pub fn serialize_attribute_set(set: &AttributeSet) -> AttributeSetFragment {
    let SerializedArrays { arrays, positions } = serialize_arrays(set.arrays());
    let active = |role: AttributeRole| -> i64 {
        let Some(index) = set.active(role) else {
            return -1;
        };
        match positions.get(index).copied().flatten() {
            Some(position) => position as i64,
            None => {
                log::warn!("active {role} array at index {index} was skipped; emitted as -1");
                -1
            }
        }
    };
    AttributeSetFragment {
        vtk_class: VtkClass::DataSetAttributes,
        active_global_ids: active(AttributeRole::GlobalIds),
        active_normals: active(AttributeRole::Normals),
        active_pedigree_ids: active(AttributeRole::PedigreeIds),
        active_scalars: active(AttributeRole::Scalars),
        active_tcoords: active(AttributeRole::TCoords),
        active_tensors: active(AttributeRole::Tensors),
        active_vectors: active(AttributeRole::Vectors),
        copy_field_flags: Vec::new(),
        do_all_copy_on: AttributeRole::ALL.iter().all(|&r| set.copy_all(r)),
        do_all_copy_off: AttributeRole::ALL.iter().all(|&r| !set.copy_all(r)),
        arrays,
    }
}

/// Serialize field data: arrays only.
pub fn serialize_field_data(fields: &FieldData) -> FieldDataFragment {
    FieldDataFragment {
        vtk_class: VtkClass::DataSetAttributes,
        arrays: serialize_arrays(fields.arrays()).arrays,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::array::{StringArray, TypedArray};

    fn scalars(name: &str) -> TypedArray {
        TypedArray::interleaved(Some(name), 1, vec![1.0f32, 2.0]).unwrap()
    }

    #[test]
    fn unset_roles_are_minus_one() {
        let frag = serialize_attribute_set(&AttributeSet::new());
        assert!(frag.arrays.is_empty());
        for v in [
            frag.active_global_ids,
            frag.active_normals,
            frag.active_pedigree_ids,
            frag.active_scalars,
            frag.active_tcoords,
            frag.active_tensors,
            frag.active_vectors,
        ] {
            assert_eq!(v, -1);
        }
        assert!(frag.do_all_copy_on);
        assert!(!frag.do_all_copy_off);
    }

    #[test]
    fn roles_point_into_arrays() {
        let mut set = AttributeSet::new();
        set.add_array(scalars("a"));
        set.add_active_array(AttributeRole::Normals, scalars("n"));
        let frag = serialize_attribute_set(&set);
        assert_eq!(frag.arrays.len(), 2);
        assert_eq!(frag.active_normals, 1);
        assert_eq!(frag.arrays[1].name, "n");
    }

    #[test]
    fn string_arrays_are_skipped_and_roles_remapped() {
        let mut set = AttributeSet::new();
        set.add_array(StringArray {
            name: Some("labels".into()),
            values: vec!["x".into(), "y".into()],
        });
        let t = set.add_array(scalars("temp"));
        set.set_active(AttributeRole::Scalars, t).unwrap();
        set.set_active(AttributeRole::PedigreeIds, 0).unwrap();
        let frag = serialize_attribute_set(&set);
        assert_eq!(frag.arrays.len(), 1);
        assert_eq!(frag.arrays[0].name, "temp");
        assert_eq!(frag.active_scalars, 0);
        assert_eq!(frag.active_pedigree_ids, -1);
    }

    #[test]
    fn copy_flags_aggregate_all_roles() {
        let mut set = AttributeSet::new();
        set.set_copy_all(AttributeRole::Tensors, false);
        let frag = serialize_attribute_set(&set);
        assert!(!frag.do_all_copy_on);
        assert!(!frag.do_all_copy_off);

        for role in AttributeRole::ALL {
            set.set_copy_all(role, false);
        }
        let frag = serialize_attribute_set(&set);
        assert!(!frag.do_all_copy_on);
        assert!(frag.do_all_copy_off);
    }

    #[test]
    fn field_data_keeps_order() {
        let mut fields = FieldData::new();
        fields.add_array(scalars("first"));
        fields.add_array(StringArray::default());
        fields.add_array(scalars("second"));
        let frag = serialize_field_data(&fields);
        assert_eq!(frag.vtk_class, VtkClass::DataSetAttributes);
        let names: Vec<&str> = frag.arrays.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
