//! OBJ format support
//!
//! Each `o` or `g` statement starts a new root-level node. Vertex positions
//! are global in OBJ, so every node gets its own compacted vertex list.
//! Vertices no face references stay with the group they were declared in.
//! Texture coordinates, normals and materials are ignored on read.

use crate::error::{IoError, Result};
use crate::{SceneReader, SceneWriter};
use floorscan_core::{Point3d, SceneNode, Transform3D, Transformable, TriangleMesh};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct ObjReader;
pub struct ObjWriter;

/// One named group of polygon faces, indices into the global position list
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    pub faces: Vec<Vec<usize>>,
    /// Positions declared while this group was current
    pub declared: Vec<usize>,
}

impl Group {
    fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.faces.is_empty() && self.declared.is_empty()
    }
}

/// Parsed OBJ content before conversion to a scene
#[derive(Debug, Clone, Default)]
pub struct ObjData {
    pub vertices: Vec<Point3d>,
    pub groups: Vec<Group>,
}

impl ObjData {
    /// Parse OBJ text from a reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut data = ObjData::default();
        let mut current = Group::named("default");

        for (line_index, line) in reader.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line?;
            let content = line.split('#').next().unwrap_or("").trim();
            let mut tokens = content.split_whitespace();
            let Some(keyword) = tokens.next() else {
                continue;
            };

            match keyword {
                "v" => {
                    let coords = tokens
                        .take(3)
                        .map(|t| parse_float(t, line_number))
                        .collect::<Result<Vec<f64>>>()?;
                    if coords.len() < 3 {
                        return Err(IoError::parse(line_number, "vertex needs 3 coordinates"));
                    }
                    current.declared.push(data.vertices.len());
                    data.vertices.push(Point3d::new(coords[0], coords[1], coords[2]));
                }
                "f" => {
                    let face = tokens
                        .map(|t| resolve_index(t, data.vertices.len(), line_number))
                        .collect::<Result<Vec<usize>>>()?;
                    if face.len() < 3 {
                        return Err(IoError::parse(line_number, "face needs at least 3 vertices"));
                    }
                    current.faces.push(face);
                }
                "o" | "g" => {
                    let name = tokens.collect::<Vec<_>>().join(" ");
                    let name = if name.is_empty() { "default".to_string() } else { name };
                    if current.is_empty() {
                        current.name = name;
                    } else {
                        let finished = std::mem::replace(&mut current, Group::named(name));
                        data.groups.push(finished);
                    }
                }
                // vt, vn, usemtl, mtllib, s, l, p and friends carry nothing we need
                _ => {}
            }
        }

        if !current.is_empty() {
            data.groups.push(current);
        }
        Ok(data)
    }

    /// Convert to a scene: one root-level node per non-empty group
    ///
    /// Each node holds the vertices its faces use, followed by any vertex
    /// declared in the group that no face in the file references. Point-only
    /// scans and faceless objects therefore keep their geometry.
    pub fn into_scene(self) -> SceneNode {
        let mut root = SceneNode::new();

        let mut referenced = vec![false; self.vertices.len()];
        for &index in self.groups.iter().flat_map(|g| g.faces.iter().flatten()) {
            referenced[index] = true;
        }

        for group in &self.groups {
            let mut mesh = TriangleMesh::new();
            let mut local: HashMap<usize, usize> = HashMap::new();
            for face in &group.faces {
                let indices: Vec<usize> = face
                    .iter()
                    .map(|&global| {
                        *local
                            .entry(global)
                            .or_insert_with(|| mesh.add_vertex(self.vertices[global]))
                    })
                    .collect();
                // Fan triangulation
                for i in 1..indices.len() - 1 {
                    mesh.add_face([indices[0], indices[i], indices[i + 1]]);
                }
            }
            for &loose in group.declared.iter().filter(|&&i| !referenced[i]) {
                mesh.add_vertex(self.vertices[loose]);
            }
            if mesh.is_empty() {
                continue;
            }
            root.add_child(SceneNode::named(group.name.clone()).with_mesh(mesh));
        }
        root
    }
}

fn parse_float(token: &str, line: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| IoError::parse(line, format!("invalid number '{}'", token)))
}

/// Resolve a `v`, `v/vt`, `v//vn` or `v/vt/vn` reference to a 0-based position index
fn resolve_index(token: &str, vertex_count: usize, line: usize) -> Result<usize> {
    let position = token.split('/').next().unwrap_or("");
    let raw: i64 = position
        .parse()
        .map_err(|_| IoError::parse(line, format!("invalid face index '{}'", token)))?;

    let resolved = if raw > 0 {
        raw - 1
    } else if raw < 0 {
        vertex_count as i64 + raw
    } else {
        return Err(IoError::parse(line, "face index 0 is not valid"));
    };

    if resolved < 0 || resolved as usize >= vertex_count {
        return Err(IoError::parse(
            line,
            format!("face index {} out of range ({} vertices)", raw, vertex_count),
        ));
    }
    Ok(resolved as usize)
}

impl SceneReader for ObjReader {
    fn read_scene<P: AsRef<Path>>(path: P) -> Result<SceneNode> {
        let file = File::open(path)?;
        let data = ObjData::parse(BufReader::new(file))?;
        Ok(data.into_scene())
    }
}

impl ObjWriter {
    /// Write every mesh node with its world transform baked into the vertices
    pub fn write_to<W: Write>(root: &SceneNode, writer: &mut W) -> Result<()> {
        writeln!(writer, "# floorscan OBJ export")?;

        let mut offset = 1usize;
        let mut unnamed = 0usize;
        let mut path: Vec<String> = Vec::new();

        for entry in root.walk(Transform3D::identity()) {
            path.truncate(entry.depth);
            let segment = match &entry.node.name {
                Some(name) => name.clone(),
                None => String::new(),
            };
            path.push(segment);

            let Some(mesh) = &entry.node.mesh else {
                continue;
            };

            let mut name = path
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join("/");
            if name.is_empty() {
                name = format!("mesh_{}", unnamed);
                unnamed += 1;
            }

            let mut world_mesh = mesh.clone();
            world_mesh.transform(&entry.world);

            writeln!(writer, "o {}", name)?;
            for v in &world_mesh.vertices {
                writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
            }
            for f in &world_mesh.faces {
                writeln!(writer, "f {} {} {}", f[0] + offset, f[1] + offset, f[2] + offset)?;
            }
            offset += world_mesh.vertex_count();
        }
        Ok(())
    }
}

impl SceneWriter for ObjWriter {
    fn write_scene<P: AsRef<Path>>(root: &SceneNode, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(root, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorscan_core::{MeshAsset, Vector3d};

    const TWO_OBJECTS: &str = "\
# two objects
v 0 0 0
v 1 0 0
v 1 0 1
v 0 0 1
v 0 2 0
o Floor
f 1 2 3 4
o Pillar
vn 0 1 0
f 1/1/1 2//1 -1
";

    #[test]
    fn test_parse_objects_and_fan_triangulate() {
        let data = ObjData::parse(TWO_OBJECTS.as_bytes()).unwrap();
        assert_eq!(data.vertices.len(), 5);
        // The positions are declared in the implicit group, used by the others
        assert_eq!(data.groups.len(), 3);
        assert_eq!(data.groups[0].declared, vec![0, 1, 2, 3, 4]);

        let scene = data.into_scene();
        assert_eq!(scene.children.len(), 2);

        let floor = scene.child("Floor").unwrap().mesh.as_ref().unwrap();
        assert_eq!(floor.vertex_count(), 4);
        assert_eq!(floor.faces, vec![[0, 1, 2], [0, 2, 3]]);

        let pillar = scene.child("Pillar").unwrap().mesh.as_ref().unwrap();
        assert_eq!(pillar.vertex_count(), 3);
        assert_eq!(pillar.vertices[2], Point3d::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_vertices_without_faces_become_one_node() {
        let scene = ObjData::parse("v 0 0 0\nv 1 0 0\nv 0 0 1\n".as_bytes())
            .unwrap()
            .into_scene();
        assert_eq!(scene.children.len(), 1);
        assert_eq!(MeshAsset::new(scene).world_vertices().len(), 3);
    }

    #[test]
    fn test_unreferenced_vertices_stay_in_their_group() {
        let text = "\
o Walls
v 0 0 0
v 1 0 0
v 1 2 0
f 1 2 3
o FloorPoints
v 0 0 1
v 1 0 1
v 5 0 5
f 1 3 2
";
        let scene = ObjData::parse(text.as_bytes()).unwrap().into_scene();
        let walls = scene.child("Walls").unwrap().mesh.as_ref().unwrap();
        assert_eq!(walls.vertex_count(), 3);

        // Its face reuses the wall positions, so only its own points remain loose
        let floor = scene.child("FloorPoints").unwrap().mesh.as_ref().unwrap();
        assert_eq!(floor.vertex_count(), 6);
        assert_eq!(floor.faces.len(), 1);
        assert_eq!(
            floor.vertices[3..].to_vec(),
            vec![Point3d::new(0.0, 0.0, 1.0), Point3d::new(1.0, 0.0, 1.0), Point3d::new(5.0, 0.0, 5.0)]
        );
        assert_eq!(MeshAsset::new(scene).world_vertices().len(), 9);
    }

    #[test]
    fn test_faceless_node_survives_write_and_read() {
        let points = TriangleMesh::from_vertices_and_faces(
            vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(2.0, 0.0, 0.0), Point3d::new(0.0, 0.0, 2.0)],
            Vec::new(),
        );
        let room = TriangleMesh::from_vertices_and_faces(
            vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(1.0, 0.0, 0.0), Point3d::new(0.0, 0.0, 1.0)],
            vec![[0, 1, 2]],
        );
        let root = SceneNode::named("combined")
            .with_child(SceneNode::named("scan_0").with_mesh(points))
            .with_child(SceneNode::named("scan_1").with_mesh(room));
        let before = MeshAsset::new(root.clone()).world_vertices();

        let mut out = Vec::new();
        ObjWriter::write_to(&root, &mut out).unwrap();
        let reread = ObjData::parse(out.as_slice()).unwrap().into_scene();

        let scan_0 = reread.child("combined/scan_0").unwrap().mesh.as_ref().unwrap();
        assert_eq!(scan_0.vertex_count(), 3);
        assert!(scan_0.faces.is_empty());
        let scan_1 = reread.child("combined/scan_1").unwrap().mesh.as_ref().unwrap();
        assert_eq!(scan_1.faces, vec![[0, 1, 2]]);

        let after = MeshAsset::new(reread).world_vertices();
        assert_eq!(after.len(), before.len());
        assert_eq!(after, before);
    }

    #[test]
    fn test_empty_file_has_no_nodes() {
        let scene = ObjData::parse("# nothing here\n".as_bytes()).unwrap().into_scene();
        assert!(scene.children.is_empty());
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = ObjData::parse("v 0 0 0\nv 1 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::ParseError { line: 2, .. }));

        let err = ObjData::parse("v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 7\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::ParseError { line: 4, .. }));

        let err = ObjData::parse("v 0 0 x\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid number 'x'"));

        let err = ObjData::parse("v 0 0 0\nf 0 1 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_writer_bakes_world_transforms() {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(1.0, 0.0, 0.0), Point3d::new(0.0, 0.0, 1.0)],
            vec![[0, 1, 2]],
        );
        let root = SceneNode::named("combined").with_child(
            SceneNode::named("scan_0")
                .with_transform(Transform3D::translation(Vector3d::new(2.0, 0.0, 0.0)))
                .with_child(SceneNode::named("room").with_mesh(mesh.clone()))
                .with_child(SceneNode::new().with_mesh(mesh)),
        );

        let mut out = Vec::new();
        ObjWriter::write_to(&root, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("o combined/scan_0/room\n"));
        assert!(text.contains("o combined/scan_0\n"));
        assert!(text.contains("v 3 0 0\n"));
        assert!(text.contains("f 4 5 6\n"));

        let reread = ObjData::parse(text.as_bytes()).unwrap().into_scene();
        assert_eq!(reread.children.len(), 2);
        assert_eq!(MeshAsset::new(reread).world_vertices()[1], Point3d::new(3.0, 0.0, 0.0));
    }
}
