//! Point coordinates → `vtkPoints` fragment with per-axis ranges.

use crate::mesh::Points;
use crate::serialize::data_array::serialize_named;
use crate::serialize::document::{ArrayValues, AxisRange, PointsFragment, VtkClass};
use itertools::{Itertools, MinMaxResult};

const AXES: [&str; 3] = ["X", "Y", "Z"];

/// Serialize coordinates as `_points` plus X/Y/Z bounds.
pub fn serialize_points(points: &Points) -> PointsFragment {
    let mut array = serialize_named(points.data(), "_points");
    array.vtk_class = VtkClass::Points;
    let ranges = axis_ranges(&array.values);
    PointsFragment { array, ranges }
}

/// Min/max of each axis over interleaved xyz values; `0..0` when empty.
pub fn axis_ranges(values: &ArrayValues) -> [AxisRange; 3] {
    std::array::from_fn(|component| {
        let (min, max) = match values.iter_f64().skip(component).step_by(3).minmax() {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        AxisRange {
            min,
            max,
            component,
            name: AXES[component].to_string(),
        }
    })
}
