//! Source-file metadata merged under the document's `metadata` key.

use crate::mesh_error::MeshError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// File name and byte size of the mesh source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub size: u64,
}

impl Metadata {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Metadata of the file at `path`: its final component and length.
    pub fn for_file(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let size = fs::metadata(path)?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, size })
    }

    /// Key/value pairs for [`RootDocument::with_metadata`](crate::serialize::RootDocument::with_metadata).
    pub fn entries(&self) -> Vec<(String, Value)> {
        vec![
            ("name".to_string(), Value::from(self.name.clone())),
            ("size".to_string(), Value::from(self.size)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn for_file_reads_name_and_length() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("mesh_vtkjs_meta_{}.vtp", std::process::id()));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"0123456789").unwrap();
        drop(f);
        let meta = Metadata::for_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(meta.size, 10);
        assert!(meta.name.starts_with("mesh_vtkjs_meta_"));
        assert!(meta.name.ends_with(".vtp"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Metadata::for_file("/definitely/not/here.vtk").unwrap_err();
        assert!(matches!(err, MeshError::Io(_)));
    }

    #[test]
    fn entries_are_name_then_size() {
        let keys: Vec<String> = Metadata::new("a.vtk", 3)
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, ["name", "size"]);
    }
}
