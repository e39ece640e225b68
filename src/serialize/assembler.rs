//! Mesh → PolyData document.

use crate::mesh::Mesh;
use crate::mesh_error::MeshError;
use crate::serialize::attributes::{serialize_attribute_set, serialize_field_data};
use crate::serialize::cells::serialize_cells;
use crate::serialize::document::{RootDocument, VtkClass};
use crate::serialize::points::serialize_points;
use crate::topology::cell_array::CellGroup;
use serde::{Deserialize, Serialize};

/// Serialization profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Emit `pointData`, `cellData` and `fieldData`.
    pub include_attribute_data: bool,
}

impl SerializeOptions {
    /// Points and cells only.
    pub fn geometry_only() -> Self {
        Self {
            include_attribute_data: false,
        }
    }

    /// Points, cells and all attribute data.
    pub fn full() -> Self {
        Self {
            include_attribute_data: true,
        }
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self::full()
    }
}

/// Builds a [`RootDocument`] from a [`Mesh`].
///
/// Holds no state besides its options; one assembler can serve any number of
/// meshes, from any number of threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentAssembler {
    options: SerializeOptions,
}

impl DocumentAssembler {
    pub fn new(options: SerializeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> SerializeOptions {
        self.options
    }

    /// Serialize `mesh`.
    ///
    /// Fails if a cell references a point the mesh does not have. Empty
    /// meshes and empty cell groups are fine.
    pub fn assemble(&self, mesh: &Mesh) -> Result<RootDocument, MeshError> {
        mesh.validate()?;
        log::debug!(
            "serializing {} points, {} cells (attributes: {})",
            mesh.points.len(),
            mesh.number_of_cells(),
            self.options.include_attribute_data
        );

        let [verts, lines, polys, strips] =
            CellGroup::ALL.map(|group| serialize_cells(group, mesh.cells(group)));
        let include = self.options.include_attribute_data;

        Ok(RootDocument {
            vtk_class: VtkClass::PolyData,
            points: serialize_points(&mesh.points),
            verts,
            lines,
            polys,
            strips,
            point_data: include.then(|| serialize_attribute_set(&mesh.point_data)),
            cell_data: include.then(|| serialize_attribute_set(&mesh.cell_data)),
            field_data: include.then(|| serialize_field_data(&mesh.field_data)),
            metadata: None,
        })
    }
}

/// Serialize `mesh` with the full profile.
pub fn serialize(mesh: &Mesh) -> Result<RootDocument, MeshError> {
    DocumentAssembler::default().assemble(mesh)
}
