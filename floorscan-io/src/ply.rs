//! PLY format support
//!
//! PLY has no node hierarchy: reading yields a single mesh node and writing
//! flattens the scene into one mesh in world space.

use crate::error::{IoError, Result};
use crate::{SceneReader, SceneWriter};
use floorscan_core::{Point3d, SceneNode, Transform3D, Transformable, TriangleMesh, Vector3d};
use ply_rs::{
    parser::Parser,
    ply::{Addable, DefaultElement, ElementDef, Ply, Property, PropertyDef, PropertyType, ScalarType},
    writer::Writer,
};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct PlyReader;
pub struct PlyWriter;

impl PlyReader {
    /// Parse a PLY stream into a mesh
    pub fn read_mesh_from<R: BufRead>(reader: &mut R) -> Result<TriangleMesh> {
        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(reader)?;

        let mut vertices = Vec::new();
        let mut normals = Vec::new();
        let mut has_normals = true;
        if let Some(vertex_element) = ply.payload.get("vertex") {
            for vertex in vertex_element {
                let x = extract_property_value(vertex, "x")?;
                let y = extract_property_value(vertex, "y")?;
                let z = extract_property_value(vertex, "z")?;
                vertices.push(Point3d::new(x, y, z));

                if has_normals {
                    match (
                        extract_property_value(vertex, "nx"),
                        extract_property_value(vertex, "ny"),
                        extract_property_value(vertex, "nz"),
                    ) {
                        (Ok(nx), Ok(ny), Ok(nz)) => normals.push(Vector3d::new(nx, ny, nz)),
                        _ => has_normals = false,
                    }
                }
            }
        }

        let mut mesh = TriangleMesh::from_vertices_and_faces(vertices, Vec::new());
        if let Some(face_element) = ply.payload.get("face") {
            for face in face_element {
                let indices = extract_face_indices(face)?;
                if let Some(&bad) = indices.iter().find(|&&i| i >= mesh.vertex_count()) {
                    return Err(IoError::invalid(format!("face index {} out of range", bad)));
                }
                // Fan triangulation for quads and larger polygons
                for i in 1..indices.len().saturating_sub(1) {
                    mesh.add_face([indices[0], indices[i], indices[i + 1]]);
                }
            }
        }

        if has_normals && !normals.is_empty() {
            mesh.set_normals(normals);
        }
        Ok(mesh)
    }

    /// Read a PLY file as a scene with one mesh node named after the file
    pub fn read_scene_from<R: BufRead>(reader: &mut R, name: &str) -> Result<SceneNode> {
        let mesh = Self::read_mesh_from(reader)?;
        Ok(SceneNode::new().with_child(SceneNode::named(name).with_mesh(mesh)))
    }
}

impl SceneReader for PlyReader {
    fn read_scene<P: AsRef<Path>>(path: P) -> Result<SceneNode> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("mesh")
            .to_string();
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_scene_from(&mut reader, &name)
    }
}

impl PlyWriter {
    /// Merge every mesh of the scene into one world-space mesh
    pub fn flatten(root: &SceneNode) -> TriangleMesh {
        let mut merged = TriangleMesh::new();
        let mut first = true;
        for entry in root.walk(Transform3D::identity()) {
            let Some(mesh) = &entry.node.mesh else {
                continue;
            };
            let mut world_mesh = mesh.clone();
            world_mesh.transform(&entry.world);
            if first {
                merged = world_mesh;
                first = false;
            } else {
                merged.append(&world_mesh);
            }
        }
        merged
    }

    /// Write a mesh as ASCII PLY with double precision coordinates
    pub fn write_mesh_to<W: Write>(mesh: &TriangleMesh, writer: &mut W) -> Result<()> {
        let mut ply = Ply::<DefaultElement>::new();

        let mut vertex_element = ElementDef::new("vertex".to_string());
        vertex_element.count = mesh.vertices.len();
        let mut coordinate_names = vec!["x", "y", "z"];
        if mesh.normals.is_some() {
            coordinate_names.extend(["nx", "ny", "nz"]);
        }
        for name in &coordinate_names {
            vertex_element.properties.add(PropertyDef::new(
                name.to_string(),
                PropertyType::Scalar(ScalarType::Double),
            ));
        }
        ply.header.elements.add(vertex_element);

        let mut face_element = ElementDef::new("face".to_string());
        face_element.count = mesh.faces.len();
        face_element.properties.add(PropertyDef::new(
            "vertex_indices".to_string(),
            PropertyType::List(ScalarType::UChar, ScalarType::Int),
        ));
        ply.header.elements.add(face_element);

        let mut vertices = Vec::with_capacity(mesh.vertices.len());
        for (i, vertex) in mesh.vertices.iter().enumerate() {
            let mut element = DefaultElement::new();
            element.insert("x".to_string(), Property::Double(vertex.x));
            element.insert("y".to_string(), Property::Double(vertex.y));
            element.insert("z".to_string(), Property::Double(vertex.z));
            if let Some(normal) = mesh.normals.as_ref().and_then(|n| n.get(i)) {
                element.insert("nx".to_string(), Property::Double(normal.x));
                element.insert("ny".to_string(), Property::Double(normal.y));
                element.insert("nz".to_string(), Property::Double(normal.z));
            }
            vertices.push(element);
        }
        ply.payload.insert("vertex".to_string(), vertices);

        let mut faces = Vec::with_capacity(mesh.faces.len());
        for face in &mesh.faces {
            let indices = face
                .iter()
                .map(|&i| {
                    i32::try_from(i).map_err(|_| IoError::WriteError {
                        message: format!("vertex index {} does not fit in a PLY int", i),
                    })
                })
                .collect::<Result<Vec<i32>>>()?;
            let mut element = DefaultElement::new();
            element.insert("vertex_indices".to_string(), Property::ListInt(indices));
            faces.push(element);
        }
        ply.payload.insert("face".to_string(), faces);

        Writer::new().write_ply(writer, &mut ply)?;
        Ok(())
    }
}

impl SceneWriter for PlyWriter {
    fn write_scene<P: AsRef<Path>>(root: &SceneNode, path: P) -> Result<()> {
        let mesh = Self::flatten(root);
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_mesh_to(&mesh, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Extract a scalar property as f64 from a PLY element
fn extract_property_value(element: &DefaultElement, name: &str) -> Result<f64> {
    match element.get(name) {
        Some(Property::Double(val)) => Ok(*val),
        Some(Property::Float(val)) => Ok(f64::from(*val)),
        Some(Property::Int(val)) => Ok(f64::from(*val)),
        Some(Property::UInt(val)) => Ok(f64::from(*val)),
        Some(Property::Short(val)) => Ok(f64::from(*val)),
        Some(Property::UShort(val)) => Ok(f64::from(*val)),
        Some(Property::Char(val)) => Ok(f64::from(*val)),
        Some(Property::UChar(val)) => Ok(f64::from(*val)),
        _ => Err(IoError::invalid(format!(
            "property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract face indices from a PLY face element
fn extract_face_indices(element: &DefaultElement) -> Result<Vec<usize>> {
    let indices: Vec<i64> = match element.get("vertex_indices").or_else(|| element.get("vertex_index")) {
        Some(Property::ListInt(indices)) => indices.iter().map(|&i| i64::from(i)).collect(),
        Some(Property::ListUInt(indices)) => indices.iter().map(|&i| i64::from(i)).collect(),
        Some(Property::ListShort(indices)) => indices.iter().map(|&i| i64::from(i)).collect(),
        Some(Property::ListUShort(indices)) => indices.iter().map(|&i| i64::from(i)).collect(),
        Some(Property::ListUChar(indices)) => indices.iter().map(|&i| i64::from(i)).collect(),
        _ => return Err(IoError::invalid("face indices not found")),
    };
    indices
        .into_iter()
        .map(|i| usize::try_from(i).map_err(|_| IoError::invalid(format!("negative face index {}", i))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const QUAD_PLY: &str = "ply
format ascii 1.0
element vertex 4
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
0 0 0
2 0 0
2 0 1
0 0 1
4 0 1 2 3
";

    #[test]
    fn test_read_ascii_quad() {
        let mut bytes = QUAD_PLY.as_bytes();
        let scene = PlyReader::read_scene_from(&mut bytes, "room").unwrap();

        let mesh = scene.child("room").unwrap().mesh.as_ref().unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 2, 3]]);
        assert!(mesh.normals.is_none());
        assert_relative_eq!(mesh.vertices[2], Point3d::new(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_out_of_range_face_rejected() {
        let text = QUAD_PLY.replace("4 0 1 2 3", "3 0 1 9");
        let mut bytes = text.as_bytes();
        assert!(PlyReader::read_mesh_from(&mut bytes).is_err());
    }

    #[test]
    fn test_flatten_and_write_round_trip() {
        let tile = TriangleMesh::from_vertices_and_faces(
            vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(1.0, 0.0, 0.0), Point3d::new(0.0, 0.0, 1.0)],
            vec![[0, 1, 2]],
        );
        let root = SceneNode::named("combined")
            .with_child(SceneNode::named("scan_0").with_mesh(tile.clone()))
            .with_child(
                SceneNode::named("scan_1")
                    .with_transform(Transform3D::translation(Vector3d::new(1.5, 0.0, 0.0)))
                    .with_mesh(tile),
            );

        let flat = PlyWriter::flatten(&root);
        assert_eq!(flat.vertex_count(), 6);
        assert_eq!(flat.faces, vec![[0, 1, 2], [3, 4, 5]]);

        let mut out = Vec::new();
        PlyWriter::write_mesh_to(&flat, &mut out).unwrap();
        let mut bytes = out.as_slice();
        let reread = PlyReader::read_mesh_from(&mut bytes).unwrap();

        assert_eq!(reread.faces, flat.faces);
        assert_relative_eq!(reread.vertices[4], Point3d::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_flatten_empty_scene() {
        assert!(PlyWriter::flatten(&SceneNode::new()).is_empty());
    }
}
