// Triangle meshes for the decorations: the JSON model format and the
// procedural placeholders used when a model cannot be loaded.

use super::object::DecorObject;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("mesh has no triangles")]
    Empty,
    #[error("{positions} positions but {normals} normals")]
    LengthMismatch { positions: usize, normals: usize },
    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
    #[error("index count {0} is not a multiple of 3")]
    NotTriangles(usize),
    #[error("invalid model JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Indexed triangle list with per-vertex normals, in model units (~1 unit long).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn from_json(json: &str) -> Result<Self, MeshError> {
        let mesh: MeshData = serde_json::from_str(json)?;
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        if self.positions.is_empty() || self.indices.is_empty() {
            return Err(MeshError::Empty);
        }
        if self.positions.len() != self.normals.len() {
            return Err(MeshError::LengthMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::NotTriangles(self.indices.len()));
        }
        let vertices = self.positions.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertices) {
            return Err(MeshError::IndexOutOfRange { index, vertices });
        }
        Ok(())
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned box centered on the origin, with flat face normals.
    pub fn cuboid(size: [f32; 3]) -> Self {
        let [hx, hy, hz] = size.map(|s| s * 0.5);
        // (normal, u axis, v axis) per face; corners are n ± u ± v
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ];
        let half = [hx, hy, hz];
        let mut mesh = MeshData::default();
        for (n, u, v) in faces {
            let base = mesh.positions.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let mut p = [0.0f32; 3];
                for axis in 0..3 {
                    p[axis] = (n[axis] + su * u[axis] + sv * v[axis]) * half[axis];
                }
                mesh.positions.push(p);
                mesh.normals.push(n);
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }

    /// Stand-in shape for a decoration whose model failed to load.
    pub fn placeholder(object: DecorObject) -> Self {
        match object {
            // long thin stick
            DecorObject::Pencil => Self::cuboid([0.14, 1.0, 0.14]),
            DecorObject::Eraser => Self::cuboid([0.5, 0.22, 0.3]),
            DecorObject::Sharpener => Self::cuboid([0.3, 0.3, 0.22]),
        }
    }
}
