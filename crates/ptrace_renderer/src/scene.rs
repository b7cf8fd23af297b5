//! Scene storage and nearest-hit queries.

use ptrace_core::{Color, MaterialData};
use ptrace_math::{Ray, Vec3};

use crate::{HitRecord, Hittable, Material, RenderResult, Sphere, Triangle};

/// Geometry of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
        }
    }
}

/// A shape together with the material it owns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    shape: Shape,
    material: Material,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        self.shape.intersect(ray)
    }
}

/// Nearest intersection found in a scene.
#[derive(Debug, Clone, Copy)]
pub struct SceneHit<'a> {
    pub record: HitRecord,
    pub material: &'a Material,
}

/// Primitives plus the colour seen by rays that escape them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    environment: Color,
}

impl Scene {
    /// Create an empty scene with the given environment colour.
    pub fn new(environment: Color) -> Self {
        Self {
            primitives: Vec::new(),
            environment,
        }
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn environment(&self) -> Color {
        self.environment
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Find the closest primitive hit by the ray (linear scan).
    pub fn intersect(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        let mut closest: Option<SceneHit<'_>> = None;

        for primitive in &self.primitives {
            if let Some(record) = primitive.intersect(ray) {
                let closer = closest
                    .as_ref()
                    .map_or(true, |best| record.distance < best.record.distance);
                if closer && record.distance.is_finite() {
                    closest = Some(SceneHit {
                        record,
                        material: primitive.material(),
                    });
                }
            }
        }

        closest
    }
}

/// Builds a [`Scene`] from shape parameters and material settings.
///
/// The material variant is chosen from each [`MaterialData`].
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Start an empty scene with the given environment colour.
    pub fn new(environment: Color) -> Self {
        Self {
            scene: Scene::new(environment),
        }
    }

    /// Add a sphere. Fails on a negative radius.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f64,
        material: MaterialData,
    ) -> RenderResult<&mut Self> {
        let sphere = Sphere::new(center, radius)?;
        self.scene.add(Primitive::new(
            Shape::Sphere(sphere),
            Material::from_data(material),
        ));
        Ok(self)
    }

    /// Add a flat-shaded triangle.
    pub fn add_triangle(&mut self, vertices: [Vec3; 3], material: MaterialData) -> &mut Self {
        self.push_triangle(Triangle::new(vertices), material)
    }

    /// Add a triangle with explicit vertex normals.
    pub fn add_smooth_triangle(
        &mut self,
        vertices: [Vec3; 3],
        normals: [Vec3; 3],
        material: MaterialData,
    ) -> &mut Self {
        self.push_triangle(Triangle::with_normals(vertices, normals), material)
    }

    /// Add a planar quad as two triangles (corners in winding order).
    pub fn add_quad(&mut self, corners: [Vec3; 4], material: MaterialData) -> &mut Self {
        let [a, b, c, d] = corners;
        self.add_triangle([a, b, c], material);
        self.add_triangle([a, c, d], material)
    }

    fn push_triangle(&mut self, triangle: Triangle, material: MaterialData) -> &mut Self {
        self.scene.add(Primitive::new(
            Shape::Triangle(triangle),
            Material::from_data(material),
        ));
        self
    }

    /// Finish building.
    pub fn build(self) -> Scene {
        log::debug!("Built scene with {} primitives", self.scene.len());
        self.scene
    }
}
