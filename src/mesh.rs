//! In-memory polygonal mesh: points, four cell groups and attribute data.

use crate::data::array::TypedArray;
use crate::data::attributes::{AttributeSet, FieldData};
use crate::data::scalar::ArrayBuffer;
use crate::mesh_error::MeshError;
use crate::topology::cell_array::{CellArray, CellGroup};

/// Point coordinates, a 3-component [`TypedArray`].
#[derive(Clone, Debug)]
pub struct Points {
    data: TypedArray,
}

impl Points {
    /// Wrap an existing array; it must have exactly 3 components.
    pub fn from_array(data: TypedArray) -> Result<Self, MeshError> {
        if data.number_of_components() != 3 {
            return Err(MeshError::PointComponents(data.number_of_components()));
        }
        Ok(Self { data })
    }

    /// Single-precision coordinates.
    pub fn from_f32(coords: &[[f32; 3]]) -> Self {
        let flat: Vec<f32> = coords.iter().flatten().copied().collect();
        Self::dense(flat.into())
    }

    /// Double-precision coordinates.
    pub fn from_f64(coords: &[[f64; 3]]) -> Self {
        let flat: Vec<f64> = coords.iter().flatten().copied().collect();
        Self::dense(flat.into())
    }

    fn dense(buffer: ArrayBuffer) -> Self {
        Self {
            data: TypedArray::from_whole_tuples(3, buffer),
        }
    }

    #[inline]
    pub fn data(&self) -> &TypedArray {
        &self.data
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.number_of_tuples()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::from_f32(&[])
    }
}

/// A polygonal dataset.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub points: Points,
    pub verts: CellArray,
    pub lines: CellArray,
    pub polys: CellArray,
    pub strips: CellArray,
    pub point_data: AttributeSet,
    pub cell_data: AttributeSet,
    pub field_data: FieldData,
}

impl Mesh {
    /// Mesh with the given points and no cells or attributes.
    pub fn new(points: Points) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn with_verts(mut self, cells: CellArray) -> Self {
        self.verts = cells;
        self
    }

    pub fn with_lines(mut self, cells: CellArray) -> Self {
        self.lines = cells;
        self
    }

    pub fn with_polys(mut self, cells: CellArray) -> Self {
        self.polys = cells;
        self
    }

    pub fn with_strips(mut self, cells: CellArray) -> Self {
        self.strips = cells;
        self
    }

    /// Cells of one group.
    pub fn cells(&self, group: CellGroup) -> &CellArray {
        match group {
            CellGroup::Verts => &self.verts,
            CellGroup::Lines => &self.lines,
            CellGroup::Polys => &self.polys,
            CellGroup::Strips => &self.strips,
        }
    }

    /// Total number of cells over all groups.
    pub fn number_of_cells(&self) -> usize {
        CellGroup::ALL
            .iter()
            .map(|g| self.cells(*g).number_of_cells())
            .sum()
    }

    /// Check that every cell only references existing points.
    pub fn validate(&self) -> Result<(), MeshError> {
        let points = self.points.len();
        for group in CellGroup::ALL {
            for (cell, ids) in self.cells(group).iter().enumerate() {
                if let Some(&index) = ids.iter().find(|&&i| i < 0 || i as usize >= points) {
                    return Err(MeshError::CellPointOutOfRange {
                        group,
                        cell,
                        index,
                        points,
                    });
                }
            }
        }
        Ok(())
    }
}
