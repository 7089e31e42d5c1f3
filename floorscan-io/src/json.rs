//! JSON scene documents
//!
//! The only format that keeps the full node hierarchy, transforms included.

use crate::error::{IoError, Result};
use crate::{SceneReader, SceneWriter};
use floorscan_core::SceneNode;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const SCENE_DOCUMENT_FORMAT: &str = "floorscan-scene";
pub const SCENE_DOCUMENT_VERSION: u32 = 1;

pub struct JsonSceneReader;
pub struct JsonSceneWriter;

/// Top-level JSON document wrapping a scene root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub format: String,
    pub version: u32,
    pub root: SceneNode,
}

impl SceneDocument {
    pub fn new(root: SceneNode) -> Self {
        Self {
            format: SCENE_DOCUMENT_FORMAT.to_string(),
            version: SCENE_DOCUMENT_VERSION,
            root,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: SceneDocument = serde_json::from_reader(reader)?;
        if document.format != SCENE_DOCUMENT_FORMAT {
            return Err(IoError::invalid(format!(
                "expected format '{}', found '{}'",
                SCENE_DOCUMENT_FORMAT, document.format
            )));
        }
        if document.version > SCENE_DOCUMENT_VERSION {
            return Err(IoError::invalid(format!(
                "scene document version {} is newer than supported version {}",
                document.version, SCENE_DOCUMENT_VERSION
            )));
        }
        Ok(document)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl SceneReader for JsonSceneReader {
    fn read_scene<P: AsRef<Path>>(path: P) -> Result<SceneNode> {
        let file = File::open(path)?;
        Ok(SceneDocument::from_reader(BufReader::new(file))?.root)
    }
}

impl SceneWriter for JsonSceneWriter {
    fn write_scene<P: AsRef<Path>>(root: &SceneNode, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        SceneDocument::new(root.clone()).to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
