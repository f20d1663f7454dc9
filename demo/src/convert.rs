use meshmath::math::*;
use meshmath::mesh::*;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use wavefront_obj::obj::{self, Primitive};

#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Face in object '{object}' references missing {kind} {index}")]
    BadIndex { object: String, kind: &'static str, index: usize },

    #[error("Mesh has more vertices than a u32 index can address")]
    TooManyVertices,
}

pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<MeshData, ObjError> {
    let source = std::fs::read_to_string(path)?;
    obj_to_mesh(&source)
}

/// Builds a single indexed mesh out of every triangle in every object.
///
/// Corners sharing a (position, normal) pair become one vertex. Corners with
/// no normal get the area-weighted average of their faces' normals. Lines and
/// points are skipped.
pub fn obj_to_mesh(source: &str) -> Result<MeshData, ObjError> {
    let set = obj::parse(source.to_string()).map_err(|e| ObjError::Parse { line: e.line_number, message: e.message })?;

    let mut vertices: Vec<Vertex> = Vec::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();
    let mut needs_normal: Vec<bool> = Vec::new();
    let mut skipped = 0usize;

    for object in &set.objects {
        let mut lookup: HashMap<(usize, Option<usize>), u32> = HashMap::new();
        let bad_index = |kind, index| ObjError::BadIndex { object: object.name.clone(), kind, index };

        for shape in object.geometry.iter().flat_map(|g| g.shapes.iter()) {
            let Primitive::Triangle(a, b, c) = shape.primitive else {
                skipped += 1;
                continue;
            };

            let mut tri = [0u32; 3];
            for (slot, (vi, _, ni)) in tri.iter_mut().zip([a, b, c]) {
                if let Some(&index) = lookup.get(&(vi, ni)) {
                    *slot = index;
                    continue;
                }

                let p = object.vertices.get(vi).ok_or_else(|| bad_index("vertex", vi))?;
                let normal = match ni {
                    Some(ni) => {
                        let n = object.normals.get(ni).ok_or_else(|| bad_index("normal", ni))?;
                        Some(Vec3::new(n.x as f32, n.y as f32, n.z as f32))
                    }
                    None => None,
                };

                let index = u32::try_from(vertices.len()).map_err(|_| ObjError::TooManyVertices)?;
                vertices.push(Vertex::new(Vec3::new(p.x as f32, p.y as f32, p.z as f32), normal.unwrap_or(Vec3::ZERO)));
                needs_normal.push(normal.is_none());
                lookup.insert((vi, ni), index);
                *slot = index;
            }
            triangles.push(tri);
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} non-triangle primitives", skipped);
    }

    let generated = fill_missing_normals(&mut vertices, &triangles, &needs_normal);
    if generated > 0 {
        log::info!("Generated normals for {} vertices", generated);
    }

    Ok(MeshData::new(vertices, triangles))
}

// Returns the number of vertices that received a generated normal.
fn fill_missing_normals(vertices: &mut [Vertex], triangles: &[[u32; 3]], needs_normal: &[bool]) -> usize {
    if !needs_normal.contains(&true) {
        return 0;
    }

    for tri in triangles {
        let [a, b, c] = tri.map(|i| vertices[i as usize].position);
        // |cross| is twice the triangle area, which gives the weighting for free
        let face = cross(b - a, c - a);
        for &i in tri {
            if needs_normal[i as usize] {
                vertices[i as usize].normal += face;
            }
        }
    }

    let mut generated = 0;
    let mut degenerate = 0;
    for (v, _) in vertices.iter_mut().zip(needs_normal).filter(|(_, needs)| **needs) {
        if v.normal.length_squared() > 0.0 {
            v.normal = v.normal.normalized();
            generated += 1;
        } else {
            degenerate += 1;
        }
    }
    if degenerate > 0 {
        log::warn!("{} vertices only touch degenerate faces, their normals stay zero", degenerate);
    }
    generated
}
