//! Cell group → legacy-layout `vtkCellsArray` fragment.

use crate::data::array::TypedArray;
use crate::serialize::data_array::serialize_named;
use crate::serialize::document::{CellArrayFragment, VtkClass};
use crate::topology::cell_array::{CellArray, CellGroup};

/// Flatten `cells` into `(count, index × count)*` runs.
///
/// The fragment is named `_<group>`; an empty group yields `size == 0`.
pub fn serialize_cells(group: CellGroup, cells: &CellArray) -> CellArrayFragment {
    let legacy = TypedArray::from_whole_tuples(1, cells.export_legacy());
    let mut fragment = serialize_named(&legacy, &format!("_{group}"));
    fragment.vtk_class = VtkClass::CellArray;
    CellArrayFragment(fragment)
}
