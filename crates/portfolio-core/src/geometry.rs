//! Wireframe geometry for the floating solids.

use fnv::FnvHashSet;
use glam::Vec3;

/// Edge list of a polyhedron: unit-radius vertices plus index pairs.
#[derive(Clone, Debug)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u16; 2]>,
}

impl Wireframe {
    /// Flattened `u16` index list suitable for a line-list draw.
    pub fn line_indices(&self) -> Vec<u16> {
        self.edges.iter().flat_map(|e| [e[0], e[1]]).collect()
    }
}

const ICOSAHEDRON_FACES: [[u16; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Icosahedron (no subdivision) with every vertex on the unit sphere.
pub fn icosahedron() -> Wireframe {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let vertices = raw.iter().map(|v| Vec3::from_array(*v).normalize()).collect();
    Wireframe {
        vertices,
        edges: unique_edges(&ICOSAHEDRON_FACES),
    }
}

// Shared triangle edges appear twice; keep the first occurrence.
fn unique_edges(faces: &[[u16; 3]]) -> Vec<[u16; 2]> {
    let mut seen = FnvHashSet::default();
    let mut edges = Vec::with_capacity(faces.len() * 3 / 2);
    for f in faces {
        for (a, b) in [(f[0], f[1]), (f[1], f[2]), (f[2], f[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                edges.push([key.0, key.1]);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosahedron_has_expected_topology() {
        let ico = icosahedron();
        assert_eq!(ico.vertices.len(), 12);
        assert_eq!(ico.edges.len(), 30);
        assert_eq!(ico.line_indices().len(), 60);
    }

    #[test]
    fn icosahedron_vertices_lie_on_unit_sphere() {
        for v in icosahedron().vertices {
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn icosahedron_edges_share_one_length() {
        let ico = icosahedron();
        let len = |e: &[u16; 2]| {
            (ico.vertices[e[0] as usize] - ico.vertices[e[1] as usize]).length()
        };
        let first = len(&ico.edges[0]);
        for e in &ico.edges {
            assert!((len(e) - first).abs() < 1e-5, "edge {:?} differs", e);
        }
    }

    #[test]
    fn every_vertex_has_five_neighbours() {
        let ico = icosahedron();
        let mut degree = [0usize; 12];
        for e in &ico.edges {
            degree[e[0] as usize] += 1;
            degree[e[1] as usize] += 1;
        }
        assert!(degree.iter().all(|d| *d == 5));
    }
}
