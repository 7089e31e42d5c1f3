//! Composite scene built from posed scans

use floorscan_core::{Pose3, SceneNode};

/// One scan placed in the composite
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeEntry {
    /// Position of the scan in the input lists
    pub source_index: usize,
    /// Where the scan was loaded from, for messages
    pub source_name: String,
    /// `scan_<i>` container holding the cloned subtree, pose applied
    pub container: SceneNode,
    pub pose: Pose3,
}

/// Posed scans in input order, under a single named root
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeScene {
    pub root_name: String,
    pub entries: Vec<CompositeEntry>,
}

impl CompositeScene {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: CompositeEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CompositeEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositeEntry> {
        self.entries.iter()
    }

    /// Build the node tree handed to writers
    pub fn to_scene_node(&self) -> SceneNode {
        let mut root = SceneNode::named(self.root_name.clone());
        for entry in &self.entries {
            root.add_child(entry.container.clone());
        }
        root
    }

    pub fn into_scene_node(self) -> SceneNode {
        let mut root = SceneNode::named(self.root_name);
        root.children = self.entries.into_iter().map(|e| e.container).collect();
        root
    }
}
