//! Scene node hierarchies and loaded mesh assets

use crate::mesh::TriangleMesh;
use crate::point::Point3d;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A node in a scene hierarchy
///
/// Each node carries a transform relative to its parent and optionally a
/// mesh whose vertices are expressed in the node's local space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub transform: Transform3D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<TriangleMesh>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

/// A node reached during traversal, with its accumulated world transform
#[derive(Debug, Clone, Copy)]
pub struct WorldNode<'a> {
    pub node: &'a SceneNode,
    pub world: Transform3D,
    pub depth: usize,
}

impl SceneNode {
    /// Create an empty, unnamed node
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty node with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_mesh(mut self, mesh: TriangleMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Depth-first pre-order traversal starting at this node
    ///
    /// `parent_world` is the world transform of this node's parent.
    pub fn walk(&self, parent_world: Transform3D) -> Vec<WorldNode<'_>> {
        let mut out = Vec::new();
        let mut stack = vec![(self, parent_world * self.transform, 0usize)];
        while let Some((node, world, depth)) = stack.pop() {
            out.push(WorldNode { node, world, depth });
            // Reverse so the first child is visited first
            for child in node.children.iter().rev() {
                stack.push((child, world * child.transform, depth + 1));
            }
        }
        out
    }

    /// Total number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Number of nodes in this subtree that carry a mesh
    pub fn mesh_count(&self) -> usize {
        self.walk(Transform3D::identity())
            .iter()
            .filter(|n| n.node.mesh.is_some())
            .count()
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&SceneNode> {
        self.children.iter().find(|c| c.name.as_deref() == Some(name))
    }
}

/// A loaded 3D asset: a node hierarchy plus where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAsset {
    pub source: Option<PathBuf>,
    pub root: SceneNode,
}

impl MeshAsset {
    pub fn new(root: SceneNode) -> Self {
        Self { source: None, root }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Convenience constructor for an asset with one mesh node under the root
    pub fn from_mesh(name: impl Into<String>, mesh: TriangleMesh) -> Self {
        Self::new(SceneNode::new().with_child(SceneNode::named(name).with_mesh(mesh)))
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Human-readable origin for messages
    pub fn display_name(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<in-memory asset>".to_string())
    }

    /// Every node of the hierarchy with its world transform
    pub fn nodes(&self) -> Vec<WorldNode<'_>> {
        self.root.walk(Transform3D::identity())
    }

    /// All mesh vertices transformed into world space
    pub fn world_vertices(&self) -> Vec<Point3d> {
        self.nodes()
            .into_iter()
            .filter_map(|n| n.node.mesh.as_ref().map(|mesh| (mesh, n.world)))
            .flat_map(|(mesh, world)| mesh.vertices.iter().map(move |v| world.transform_point(v)))
            .collect()
    }

    /// Total vertex count across all meshes
    pub fn vertex_count(&self) -> usize {
        self.nodes()
            .iter()
            .filter_map(|n| n.node.mesh.as_ref())
            .map(TriangleMesh::vertex_count)
            .sum()
    }

    /// Deep copy of the root-level children; the asset itself is untouched
    pub fn clone_subtree(&self) -> Vec<SceneNode> {
        self.root.children.clone()
    }
}
