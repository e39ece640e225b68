//! Plain JSON text output.

use crate::io::DocumentWriter;
use crate::mesh_error::MeshError;
use crate::serialize::document::RootDocument;
use std::io::Write;

/// Writes the document as JSON text, compact unless `pretty` is set.
#[derive(Debug, Default, Clone)]
pub struct JsonWriter {
    pub pretty: bool,
}

impl JsonWriter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode into a `String`.
    pub fn to_json_string(&self, document: &RootDocument) -> Result<String, MeshError> {
        let mut out = Vec::new();
        self.write(&mut out, document)?;
        String::from_utf8(out).map_err(|e| MeshError::Json(e.to_string()))
    }
}

impl DocumentWriter for JsonWriter {
    fn write<W: Write>(&self, mut writer: W, document: &RootDocument) -> Result<(), MeshError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, document)?;
        } else {
            serde_json::to_writer(&mut writer, document)?;
        }
        writer.flush()?;
        Ok(())
    }
}
