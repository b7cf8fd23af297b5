//! Surface settings attached to scene geometry.

use ptrace_math::Vec3;

use crate::Color;

/// Physical description of a surface.
///
/// The renderer picks the scattering model from `reflectivity`: a value in
/// [0, 1] forces that specular probability ("shiny"), a negative value
/// derives it per sample from the Fresnel equations ("matte").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialData {
    /// Light emitted by the surface
    pub emission: Color,

    /// Diffuse colour, also used for previews
    pub diffuse: Color,

    /// Index of refraction (1.0 = no Fresnel reflection)
    pub refraction_index: f64,

    /// Forced specular probability, negative to use Fresnel reflectance
    pub reflectivity: f64,

    /// Half-angle of the specular reflection cone, in radians
    pub reflection_cone_angle: f64,
}

impl Default for MaterialData {
    fn default() -> Self {
        Self {
            emission: Color::ZERO,
            diffuse: Color::ZERO,
            refraction_index: 1.0,
            reflectivity: -1.0,
            reflection_cone_angle: 0.0,
        }
    }
}

impl MaterialData {
    /// Plain diffuse surface.
    pub fn diffuse(colour: Color) -> Self {
        Self {
            diffuse: colour,
            ..Default::default()
        }
    }

    /// Diffuse surface with Fresnel highlights of the given refraction index.
    pub fn specular(colour: Color, refraction_index: f64) -> Self {
        Self {
            diffuse: colour,
            refraction_index,
            ..Default::default()
        }
    }

    /// Light source of the given colour.
    pub fn light(colour: Color) -> Self {
        Self {
            emission: colour,
            ..Default::default()
        }
    }

    /// Fresnel surface whose reflections spread over a cone (angle in degrees).
    pub fn glossy(colour: Color, refraction_index: f64, cone_angle_deg: f64) -> Self {
        Self {
            diffuse: colour,
            refraction_index,
            reflection_cone_angle: cone_angle_deg.to_radians(),
            ..Default::default()
        }
    }

    /// Surface reflecting with a fixed probability (cone angle in degrees).
    pub fn reflective(colour: Color, reflectivity: f64, cone_angle_deg: f64) -> Self {
        Self {
            diffuse: colour,
            reflectivity,
            reflection_cone_angle: cone_angle_deg.to_radians(),
            ..Default::default()
        }
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission.length_squared() > 0.0
    }

    /// True when the specular probability is fixed rather than Fresnel based.
    pub fn has_forced_reflectivity(&self) -> bool {
        self.reflectivity >= 0.0
    }

    /// Builder-style setter for the reflection cone (angle in radians).
    pub fn with_cone_angle(mut self, radians: f64) -> Self {
        self.reflection_cone_angle = radians;
        self
    }

    /// Builder-style setter for the refraction index.
    pub fn with_refraction_index(mut self, refraction_index: f64) -> Self {
        self.refraction_index = refraction_index;
        self
    }
}

impl From<Vec3> for MaterialData {
    fn from(colour: Vec3) -> Self {
        Self::diffuse(colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_defaults() {
        let data = MaterialData::default();
        assert_eq!(data.refraction_index, 1.0);
        assert!(data.reflectivity < 0.0);
        assert_eq!(data.reflection_cone_angle, 0.0);
        assert!(!data.is_emissive());
        assert!(!data.has_forced_reflectivity());
    }

    #[test]
    fn test_presets() {
        let colour = Color::new(0.1, 0.2, 0.3);

        assert_eq!(MaterialData::diffuse(colour).diffuse, colour);
        assert!(MaterialData::light(colour).is_emissive());
        assert_eq!(MaterialData::specular(colour, 1.3).refraction_index, 1.3);

        let glossy = MaterialData::glossy(colour, 1.5, 90.0);
        assert!((glossy.reflection_cone_angle - PI / 2.0).abs() < 1e-12);
        assert!(!glossy.has_forced_reflectivity());

        let mirror = MaterialData::reflective(colour, 0.5, 180.0);
        assert!(mirror.has_forced_reflectivity());
        assert!((mirror.reflection_cone_angle - PI).abs() < 1e-12);
    }

    #[test]
    fn test_builders() {
        let data = MaterialData::from(Color::splat(0.2))
            .with_refraction_index(1.3)
            .with_cone_angle(0.05);
        assert_eq!(data.diffuse, Color::splat(0.2));
        assert_eq!(data.refraction_index, 1.3);
        assert_eq!(data.reflection_cone_angle, 0.05);
    }
}
