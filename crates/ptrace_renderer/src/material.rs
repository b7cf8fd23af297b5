//! Surface scattering.
//!
//! Both variants choose between a specular and a diffuse bounce with a single
//! probability draw instead of blending the two. The selection probability
//! already carries the specular weight, so the specular branch returns the
//! sampled radiance as is.

use ptrace_core::{Color, MaterialData};
use ptrace_math::{reflect, reflectance, sample_cone, sample_hemisphere, OrthonormalBasis, Ray};

use crate::HitRecord;

/// Index of refraction of the medium surrounding every surface.
const AMBIENT_IOR: f64 = 1.0;

/// Scattering model attached to a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Specular probability from Fresnel reflectance
    Matte(MaterialData),
    /// Specular probability fixed by `reflectivity`
    Shiny(MaterialData),
}

impl Material {
    /// Pick the scattering model for the given settings.
    pub fn from_data(data: MaterialData) -> Self {
        if data.has_forced_reflectivity() {
            Material::Shiny(data)
        } else {
            Material::Matte(data)
        }
    }

    pub fn data(&self) -> &MaterialData {
        match self {
            Material::Matte(data) | Material::Shiny(data) => data,
        }
    }

    /// Raw diffuse colour, used by preview renders.
    pub fn preview_colour(&self) -> Color {
        self.data().diffuse
    }

    /// Light leaving the surface given the light it scatters.
    pub fn total_emission(&self, inbound: Color) -> Color {
        self.data().emission + inbound
    }

    /// Probability of taking the specular branch for this hit.
    pub fn specular_probability(&self, hit: &HitRecord, incoming: &Ray) -> f64 {
        match self {
            Material::Shiny(data) => data.reflectivity,
            Material::Matte(data) => {
                let (ior_from, ior_to) = if hit.is_inside {
                    (data.refraction_index, AMBIENT_IOR)
                } else {
                    (AMBIENT_IOR, data.refraction_index)
                };
                reflectance(hit.normal, incoming.direction, ior_from, ior_to)
            }
        }
    }

    /// Scatter one sample off the surface.
    ///
    /// `radiance` traces a bounced ray one level deeper. `u` and `v` pick the
    /// outgoing direction and `prob` selects the branch; all three are
    /// uniform in [0, 1). Emission is not included.
    pub fn sample(
        &self,
        hit: &HitRecord,
        incoming: &Ray,
        radiance: &mut dyn FnMut(&Ray) -> Color,
        u: f64,
        v: f64,
        prob: f64,
    ) -> Color {
        let data = self.data();

        if prob < self.specular_probability(hit, incoming) {
            let mirror = reflect(hit.normal, incoming.direction);
            let direction = sample_cone(mirror, data.reflection_cone_angle, u, v);
            return radiance(&Ray::new(hit.position, direction));
        }

        let basis = OrthonormalBasis::from_z_axis(hit.normal);
        let direction = sample_hemisphere(&basis, u, v);
        data.diffuse * radiance(&Ray::new(hit.position, direction))
    }
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Self::from_data(data)
    }
}
