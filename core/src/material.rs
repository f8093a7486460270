//! Materials

#![allow(dead_code)]
use crate::color::{Color, BLACK, WHITE};
use crate::common::*;
use crate::geometry::{Matrix4x4, Tuple};
use crate::light::PointLight;
use crate::pattern::Pattern;

/// Phong surface parameters plus the reflection/refraction coefficients.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Flat surface color, used when no pattern is attached.
    pub color: Color,

    /// Optional procedural pattern overriding the flat color.
    pub pattern: Option<Pattern>,

    /// Ambient reflection in [0, 1].
    pub ambient: Float,

    /// Diffuse reflection in [0, 1].
    pub diffuse: Float,

    /// Specular reflection in [0, 1].
    pub specular: Float,

    /// Specular highlight exponent; larger is tighter.
    pub shininess: Float,

    /// Reflectivity in [0, 1]; 0 disables reflection rays.
    pub reflective: Float,

    /// Transparency in [0, 1]; 0 disables refraction rays.
    pub transparency: Float,

    /// Refractive index (> 0, 1.0 = vacuum).
    pub refractive_index: Float,
}

impl Default for Material {
    /// A matte white material.
    fn default() -> Self {
        Self {
            color: WHITE,
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Creates the default material.
    pub fn new() -> Self {
        Self::default()
    }

    /// A glass-like material: fully transparent with a refractive index of
    /// 1.5.
    pub fn glass() -> Self {
        Self {
            transparency: 1.0,
            refractive_index: 1.5,
            ..Self::default()
        }
    }
}

/// Evaluates the Phong lighting equation at a point on a surface. The
/// result is unclamped; channels above 1 are resolved at image encoding.
///
/// * `material`        - The surface material.
/// * `world_to_object` - The object's world-to-object transform, needed to
///                       evaluate patterns in pattern space.
/// * `light`           - The light source.
/// * `point`           - The world-space point being shaded.
/// * `eyev`            - Vector from the point toward the eye.
/// * `normalv`         - Surface normal at the point.
/// * `in_shadow`       - True if the point is shadowed; suppresses the
///                       diffuse and specular contributions.
pub fn lighting(
    material: &Material,
    world_to_object: &Matrix4x4,
    light: &PointLight,
    point: Tuple,
    eyev: Tuple,
    normalv: Tuple,
    in_shadow: bool,
) -> Color {
    let color = match &material.pattern {
        Some(pattern) => pattern.color_at_object(world_to_object, point),
        None => material.color,
    };

    let effective_color = color * light.intensity;
    let ambient = effective_color * material.ambient;
    if in_shadow {
        return ambient;
    }

    let lightv = (light.position - point).normalize();
    let light_dot_normal = lightv.dot(&normalv);
    if light_dot_normal < 0.0 {
        // Surface faces away from the light.
        return ambient;
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflectv = (-lightv).reflect(&normalv);
    let reflect_dot_eye = reflectv.dot(&eyev);
    let specular = if reflect_dot_eye <= 0.0 {
        BLACK
    } else {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point, vector, IDENTITY_MATRIX};
    use crate::pattern::Pattern;

    fn background() -> (Material, Tuple) {
        (Material::default(), point(0.0, 0.0, 0.0))
    }

    #[test]
    fn default_material() {
        let m = Material::default();
        assert_eq!(m.color, WHITE);
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.9);
        assert_eq!(m.specular, 0.9);
        assert_eq!(m.shininess, 200.0);
        assert_eq!(m.reflective, 0.0);
        assert_eq!(m.transparency, 0.0);
        assert_eq!(m.refractive_index, 1.0);
    }

    #[test]
    fn lighting_with_eye_between_light_and_surface() {
        let (m, position) = background();
        let eyev = vector(0.0, 0.0, -1.0);
        let normalv = vector(0.0, 0.0, -1.0);
        let light = PointLight::new(point(0.0, 0.0, -10.0), WHITE);
        let result = lighting(
            &m,
            &IDENTITY_MATRIX,
            &light,
            position,
            eyev,
            normalv,
            false,
        );
        assert_eq!(result, Color::new(1.9, 1.9, 1.9));
    }

    #[test]
    fn lighting_with_eye_offset_45_degrees() {
        let (m, position) = background();
        let s = (2.0 as Float).sqrt() / 2.0;
        let eyev = vector(0.0, s, -s);
        let normalv = vector(0.0, 0.0, -1.0);
        let light = PointLight::new(point(0.0, 0.0, -10.0), WHITE);
        let result = lighting(
            &m,
            &IDENTITY_MATRIX,
            &light,
            position,
            eyev,
            normalv,
            false,
        );
        assert_eq!(result, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn lighting_with_light_offset_45_degrees() {
        let (m, position) = background();
        let eyev = vector(0.0, 0.0, -1.0);
        let normalv = vector(0.0, 0.0, -1.0);
        let light = PointLight::new(point(0.0, 10.0, -10.0), WHITE);
        let result = lighting(
            &m,
            &IDENTITY_MATRIX,
            &light,
            position,
            eyev,
            normalv,
            false,
        );
        assert_eq!(result, Color::new(0.7364, 0.7364, 0.7364));
    }

    #[test]
    fn lighting_with_eye_in_path_of_reflection() {
        let (m, position) = background();
        let s = (2.0 as Float).sqrt() / 2.0;
        let eyev = vector(0.0, -s, -s);
        let normalv = vector(0.0, 0.0, -1.0);
        let light = PointLight::new(point(0.0, 10.0, -10.0), WHITE);
        let result = lighting(
            &m,
            &IDENTITY_MATRIX,
            &light,
            position,
            eyev,
            normalv,
            false,
        );
        assert_eq!(result, Color::new(1.6364, 1.6364, 1.6364));
    }

    #[test]
    fn lighting_with_light_behind_surface() {
        let (m, position) = background();
        let eyev = vector(0.0, 0.0, -1.0);
        let normalv = vector(0.0, 0.0, -1.0);
        let light = PointLight::new(point(0.0, 0.0, 10.0), WHITE);
        let result = lighting(
            &m,
            &IDENTITY_MATRIX,
            &light,
            position,
            eyev,
            normalv,
            false,
        );
        assert_eq!(result, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn lighting_with_surface_in_shadow() {
        let (m, position) = background();
        let eyev = vector(0.0, 0.0, -1.0);
        let normalv = vector(0.0, 0.0, -1.0);
        let light = PointLight::new(point(0.0, 0.0, -10.0), WHITE);
        let result = lighting(&m, &IDENTITY_MATRIX, &light, position, eyev, normalv, true);
        assert_eq!(result, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn lighting_with_a_pattern_applied() {
        let mut m = Material::default();
        m.pattern = Some(Pattern::stripe(WHITE, BLACK));
        m.ambient = 1.0;
        m.diffuse = 0.0;
        m.specular = 0.0;
        let eyev = vector(0.0, 0.0, -1.0);
        let normalv = vector(0.0, 0.0, -1.0);
        let light = PointLight::new(point(0.0, 0.0, -10.0), WHITE);
        let c1 = lighting(
            &m,
            &IDENTITY_MATRIX,
            &light,
            point(0.9, 0.0, 0.0),
            eyev,
            normalv,
            false,
        );
        let c2 = lighting(
            &m,
            &IDENTITY_MATRIX,
            &light,
            point(1.1, 0.0, 0.0),
            eyev,
            normalv,
            false,
        );
        assert_eq!(c1, WHITE);
        assert_eq!(c2, BLACK);
    }
}
