//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use ptrace_math::{Ray, Vec3};

use crate::hittable::{HitRecord, Hittable, INTERSECT_EPSILON};

/// A triangle with per-vertex shading normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Vec3; 3],
    normals: [Vec3; 3],
}

impl Triangle {
    /// Create a flat-shaded triangle; every vertex gets the face normal.
    pub fn new(vertices: [Vec3; 3]) -> Self {
        let face_normal = (vertices[1] - vertices[0])
            .cross(vertices[2] - vertices[0])
            .normalize();
        Self {
            vertices,
            normals: [face_normal; 3],
        }
    }

    /// Create a triangle with explicit vertex normals (for smooth shading).
    pub fn with_normals(vertices: [Vec3; 3], normals: [Vec3; 3]) -> Self {
        Self { vertices, normals }
    }

    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vec3; 3] {
        &self.normals
    }

    /// Edge from the first to the second vertex.
    pub fn face_u(&self) -> Vec3 {
        self.vertices[1] - self.vertices[0]
    }

    /// Edge from the first to the third vertex.
    pub fn face_v(&self) -> Vec3 {
        self.vertices[2] - self.vertices[0]
    }

    /// Geometric normal following the vertex winding.
    pub fn face_normal(&self) -> Vec3 {
        self.face_u().cross(self.face_v()).normalize()
    }

    /// Barycentric blend of the vertex normals.
    fn shading_normal(&self, u: f64, v: f64) -> Vec3 {
        let [n0, n1, n2] = self.normals;
        (n0 + (n1 - n0) * u + (n2 - n0) * v).normalize()
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let edge_u = self.face_u();
        let edge_v = self.face_v();

        let p = ray.direction.cross(edge_v);
        let det = edge_u.dot(p);

        // Ray is parallel to triangle
        if det.abs() < INTERSECT_EPSILON {
            return None;
        }
        let is_backface = det < INTERSECT_EPSILON;

        let s = ray.origin - self.vertices[0];
        let u = s.dot(p) / det;

        let q = s.cross(edge_u);
        let v = ray.direction.dot(q) / det;

        if u < 0.0 || u > 1.0 || v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge_v.dot(q) / det;
        if t < INTERSECT_EPSILON {
            return None;
        }

        let mut normal = self.shading_normal(u, v);
        if is_backface {
            normal = -normal;
        }

        Some(HitRecord::new(t, ray.at(t), is_backface, normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptrace_math::is_close;

    fn cw() -> Triangle {
        Triangle::new([
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 1.0, 3.0),
            Vec3::new(1.0, 1.0, 3.0),
        ])
    }

    fn ccw() -> Triangle {
        Triangle::new([
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(1.0, 1.0, 3.0),
            Vec3::new(0.0, 1.0, 3.0),
        ])
    }

    #[test]
    fn test_triangle_new() {
        let tri = Triangle::new([Vec3::ZERO, Vec3::Y, Vec3::X]);
        assert_eq!(tri.vertices()[0], Vec3::ZERO);
        assert_eq!(tri.face_u(), Vec3::Y);
        assert_eq!(tri.face_v(), Vec3::X);
        assert_eq!(tri.normals()[1], -Vec3::Z);
    }

    #[test]
    fn test_triangle_misses() {
        for tri in [cw(), ccw()] {
            assert!(tri.intersect(&Ray::from_points(Vec3::ZERO, Vec3::Y)).is_none());
            assert!(tri.intersect(&Ray::from_points(Vec3::ZERO, -Vec3::Z)).is_none());
        }
    }

    #[test]
    fn test_triangle_hit_clockwise() {
        let hit = cw().intersect(&Ray::from_points(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-9);
        assert!(is_close(hit.position, Vec3::new(0.0, 0.0, 3.0), 1e-9));
        assert!(is_close(hit.normal, -Vec3::Z, 1e-9));
        assert!(!hit.is_inside);
    }

    #[test]
    fn test_triangle_hit_counter_clockwise() {
        let hit = ccw().intersect(&Ray::from_points(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-9);
        assert!(is_close(hit.position, Vec3::new(0.0, 0.0, 3.0), 1e-9));
        // Back face: normal flipped so it still faces the ray
        assert!(is_close(hit.normal, -Vec3::Z, 1e-9));
        assert!(hit.is_inside);
    }

    #[test]
    fn test_triangle_interior_hit_both_windings() {
        let ray = Ray::from_points(Vec3::new(0.2, 0.7, 0.0), Vec3::new(0.2, 0.7, 1.0));
        let a = cw().intersect(&ray).unwrap();
        let b = ccw().intersect(&ray).unwrap();
        assert!((a.distance - b.distance).abs() < 1e-9);
        assert!(a.normal.dot(ray.direction) < 0.0);
        assert!(b.normal.dot(ray.direction) < 0.0);
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::X);
        assert!(cw().intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_smooth_normals() {
        let normals = [
            Vec3::new(-1.0, 0.0, 1.0).normalize(),
            Vec3::new(1.0, 0.0, 1.0).normalize(),
            Vec3::Z,
        ];
        let tri = Triangle::with_normals(
            [Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 2.0), Vec3::new(0.0, 1.0, 2.0)],
            normals,
        );

        // Midpoint of the first edge blends the first two normals into +Z,
        // then the back-face hit flips it towards the ray
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Z);
        let hit = tri.intersect(&ray).unwrap();
        assert!(hit.is_inside);
        assert!((hit.normal.length() - 1.0).abs() < 1e-9);
        assert!(is_close(hit.normal, -Vec3::Z, 1e-9));

        // Off the edge midpoint the third normal pulls the blend off axis
        let ray = Ray::new(Vec3::new(0.3, 0.3, 0.0), Vec3::Z);
        let hit = tri.intersect(&ray).unwrap();
        assert!(hit.normal.x < 0.0);
        assert!((hit.normal.length() - 1.0).abs() < 1e-9);
    }
}
