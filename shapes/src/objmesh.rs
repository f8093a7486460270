//! Wavefront OBJ meshes

use crate::{Geometry, Group, ShapeStore, Triangle};
use core::common::Float;
use core::geometry::{point, Tuple};
use core::intersection::ShapeId;
use std::fs;

/// Result of parsing an OBJ file: the root group holding every triangle,
/// plus parse statistics.
#[derive(Clone, Debug)]
pub struct ObjMesh {
    /// Group containing all parsed geometry, ready to be placed in a
    /// scene.
    pub root: ShapeId,

    /// Vertices in file order (1-based in face statements).
    pub vertices: Vec<Tuple>,

    /// Number of lines that were not recognized and skipped.
    pub ignored: usize,
}

/// Reads and parses an OBJ file, adding its triangles to the arena.
///
/// * `path`  - The file path.
/// * `store` - The shape arena to build into.
pub fn load_obj_file(path: &str, store: &mut ShapeStore) -> Result<ObjMesh, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Error reading '{path}': {e}"))?;
    let mesh = parse_obj(&content, store)?;
    info!(
        "Loaded '{}': {} vertices, {} ignored lines",
        path,
        mesh.vertices.len(),
        mesh.ignored
    );
    Ok(mesh)
}

/// Parses OBJ text. `v` statements add vertices, `f` statements add
/// fan-triangulated polygons, `g` statements start a named child group.
/// Anything else is counted and skipped.
///
/// * `content` - The OBJ text.
/// * `store`   - The shape arena to build into.
pub fn parse_obj(content: &str, store: &mut ShapeStore) -> Result<ObjMesh, String> {
    let root = store.add(Geometry::Group(Group::new()));
    let mut current_group = root;
    let mut vertices: Vec<Tuple> = vec![];
    let mut ignored = 0;

    for (line_number, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.split_first() {
            Some((&"v", rest)) if rest.len() >= 3 => {
                let x = parse_float(rest[0], line_number)?;
                let y = parse_float(rest[1], line_number)?;
                let z = parse_float(rest[2], line_number)?;
                vertices.push(point(x, y, z));
            }
            Some((&"f", rest)) if rest.len() >= 3 => {
                let indices = rest
                    .iter()
                    .map(|f| parse_index(f, vertices.len(), line_number))
                    .collect::<Result<Vec<usize>, String>>()?;

                // Fan triangulation anchored at the first vertex.
                for window in indices.windows(2).skip(1) {
                    let triangle = Triangle::new(
                        vertices[indices[0]],
                        vertices[window[0]],
                        vertices[window[1]],
                    );
                    let id = store.add(Geometry::Triangle(triangle));
                    store.add_child(current_group, id);
                }
            }
            Some((&"g", rest)) if !rest.is_empty() => {
                let group = store.add(Geometry::Group(Group::new()));
                store.add_child(root, group);
                current_group = group;
            }
            _ => {
                if !line.trim().is_empty() {
                    warn!("Ignoring OBJ line {}: '{}'", line_number + 1, line);
                }
                ignored += 1;
            }
        }
    }

    Ok(ObjMesh {
        root,
        vertices,
        ignored,
    })
}

/// Parses one float field.
///
/// * `field`       - The text field.
/// * `line_number` - Zero-based line number, for error reporting.
fn parse_float(field: &str, line_number: usize) -> Result<Float, String> {
    field
        .parse::<Float>()
        .map_err(|e| format!("Invalid number '{}' on line {}: {}", field, line_number + 1, e))
}

/// Parses one face index, ignoring texture/normal references after a
/// slash, and converts it from 1-based to 0-based.
///
/// * `field`        - The text field (`7`, `7/1`, `7//3`, ...).
/// * `vertex_count` - Number of vertices seen so far.
/// * `line_number`  - Zero-based line number, for error reporting.
fn parse_index(field: &str, vertex_count: usize, line_number: usize) -> Result<usize, String> {
    let index_text = field.split('/').next().unwrap_or(field);
    let index = index_text.parse::<usize>().map_err(|e| {
        format!(
            "Invalid face index '{}' on line {}: {}",
            field,
            line_number + 1,
            e
        )
    })?;
    if index == 0 || index > vertex_count {
        return Err(format!(
            "Face index {} out of range on line {}",
            index,
            line_number + 1
        ));
    }
    Ok(index - 1)
}
