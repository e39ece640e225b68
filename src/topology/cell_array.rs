//! Cell connectivity storage for the four polygonal cell groups.
//!
//! Cells are stored as offsets into a flat connectivity list. Connectivity is
//! held either in 32-bit or 64-bit integers, like VTK's two cell-array storage
//! widths; the width decides the element type of the exported legacy array.

use crate::data::scalar::ArrayBuffer;
use crate::mesh_error::MeshError;
use std::fmt;

/// The four cell groups of a polygonal mesh.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellGroup {
    Verts,
    Lines,
    Polys,
    Strips,
}

impl CellGroup {
    /// All groups, in document key order.
    pub const ALL: [CellGroup; 4] = [
        CellGroup::Verts,
        CellGroup::Lines,
        CellGroup::Polys,
        CellGroup::Strips,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CellGroup::Verts => "verts",
            CellGroup::Lines => "lines",
            CellGroup::Polys => "polys",
            CellGroup::Strips => "strips",
        }
    }
}

impl fmt::Display for CellGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Connectivity {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
}

/// Ordered sequence of cells, each an ordered list of point indices.
#[derive(Clone, Debug, PartialEq)]
pub struct CellArray {
    // offsets[i]..offsets[i + 1] is cell i; always starts with 0.
    offsets: Vec<usize>,
    connectivity: Connectivity,
}

impl Default for CellArray {
    fn default() -> Self {
        Self::new()
    }
}

impl CellArray {
    /// Empty cell array with 32-bit index storage.
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            connectivity: Connectivity::Int32(Vec::new()),
        }
    }

    /// Empty cell array with 64-bit index storage.
    pub fn new_64bit() -> Self {
        Self {
            offsets: vec![0],
            connectivity: Connectivity::Int64(Vec::new()),
        }
    }

    /// Build a cell array with 32-bit storage from a list of cells.
    pub fn from_cells<C, I>(cells: C) -> Result<Self, MeshError>
    where
        C: IntoIterator<Item = I>,
        I: AsRef<[usize]>,
    {
        let mut out = Self::new();
        for cell in cells {
            out.push_cell(cell.as_ref())?;
        }
        Ok(out)
    }

    /// Whether connectivity is stored in 64-bit integers.
    pub fn is_storage_64bit(&self) -> bool {
        matches!(self.connectivity, Connectivity::Int64(_))
    }

    /// Append one cell.
    pub fn push_cell(&mut self, points: &[usize]) -> Result<(), MeshError> {
        match &mut self.connectivity {
            Connectivity::Int32(conn) => {
                let converted = points
                    .iter()
                    .map(|&p| i32::try_from(p).map_err(|_| MeshError::CellIndexOverflow(p)))
                    .collect::<Result<Vec<_>, _>>()?;
                conn.extend(converted);
                self.offsets.push(conn.len());
            }
            Connectivity::Int64(conn) => {
                let converted = points
                    .iter()
                    .map(|&p| i64::try_from(p).map_err(|_| MeshError::CellIndexOverflow(p)))
                    .collect::<Result<Vec<_>, _>>()?;
                conn.extend(converted);
                self.offsets.push(conn.len());
            }
        }
        Ok(())
    }

    /// Number of cells.
    #[inline]
    pub fn number_of_cells(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.number_of_cells() == 0
    }

    /// Total number of point references over all cells.
    #[inline]
    pub fn connectivity_len(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// Point indices of cell `cell`, widened to `i64`.
    pub fn cell(&self, cell: usize) -> Option<Vec<i64>> {
        let start = *self.offsets.get(cell)?;
        let end = *self.offsets.get(cell + 1)?;
        Some(match &self.connectivity {
            Connectivity::Int32(conn) => conn[start..end].iter().map(|&p| p as i64).collect(),
            Connectivity::Int64(conn) => conn[start..end].to_vec(),
        })
    }

    /// Iterate cells in order.
    pub fn iter(&self) -> impl Iterator<Item = Vec<i64>> + '_ {
        (0..self.number_of_cells()).filter_map(move |c| self.cell(c))
    }

    /// Flatten into the legacy `(count, index × count)*` layout.
    ///
    /// The element type follows the storage width.
    pub fn export_legacy(&self) -> ArrayBuffer {
        let cells = self.offsets.windows(2);
        let total = self.number_of_cells() + self.connectivity_len();
        match &self.connectivity {
            Connectivity::Int32(conn) => {
                let mut out = Vec::with_capacity(total);
                for w in cells {
                    out.push((w[1] - w[0]) as i32);
                    out.extend_from_slice(&conn[w[0]..w[1]]);
                }
                ArrayBuffer::I32(out)
            }
            Connectivity::Int64(conn) => {
                let mut out = Vec::with_capacity(total);
                for w in cells {
                    out.push((w[1] - w[0]) as i64);
                    out.extend_from_slice(&conn[w[0]..w[1]]);
                }
                ArrayBuffer::I64(out)
            }
        }
    }
}
