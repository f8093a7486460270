//! Scene

use core::color::{Color, BLACK};
use core::geometry::{Ray, Tuple};
use core::intersection::IntersectionList;
use core::light::PointLight;
use core::material::lighting;
use shapes::{Computations, ShapeStore};

/// The world being rendered: a light source and an arena of shapes.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The single point light illuminating the scene.
    pub light: PointLight,

    /// The shape arena.
    pub shapes: ShapeStore,
}

impl Scene {
    /// Creates an empty scene lit by the given light.
    ///
    /// * `light` - The light source.
    pub fn new(light: PointLight) -> Self {
        Self {
            light,
            shapes: ShapeStore::new(),
        }
    }

    /// Refreshes cached group bounds. Call once after the scene is built,
    /// before rendering.
    pub fn finalize(&mut self) {
        self.shapes.refresh_bounds();
    }

    /// Intersects the ray with every top-level shape and returns the
    /// combined list sorted ascending by t.
    ///
    /// * `ray` - The ray in world space.
    pub fn intersect(&self, ray: &Ray) -> IntersectionList {
        let mut xs = IntersectionList::new();
        for id in self.shapes.roots() {
            self.shapes.intersect(id, ray, &mut xs);
        }
        xs.sort();
        xs
    }

    /// Returns true if an object lies between the point and the light.
    ///
    /// * `point` - The world-space point (typically an over point).
    pub fn is_shadowed(&self, point: Tuple) -> bool {
        let to_light = self.light.position - point;
        let distance = to_light.magnitude();
        let ray = Ray::new(point, to_light.normalize());

        match self.intersect(&ray).hit() {
            Some(hit) => hit.t < distance,
            None => false,
        }
    }

    /// Returns the color seen along the ray, or black if it hits nothing.
    ///
    /// * `ray`       - The ray in world space.
    /// * `remaining` - Remaining recursion depth for secondary rays.
    pub fn color_at(&self, ray: &Ray, remaining: usize) -> Color {
        let xs = self.intersect(ray);
        match xs.hit() {
            Some(hit) => {
                let comps = Computations::prepare(&self.shapes, &hit, ray, &xs);
                self.shade_hit(&comps, remaining)
            }
            None => BLACK,
        }
    }

    /// Shades an intersection: surface lighting plus reflected and
    /// refracted contributions. On surfaces that are both reflective and
    /// transparent, the two secondary colors are blended by the Fresnel
    /// reflectance.
    ///
    /// * `comps`     - Precomputed state of the intersection.
    /// * `remaining` - Remaining recursion depth for secondary rays.
    pub fn shade_hit(&self, comps: &Computations, remaining: usize) -> Color {
        let shape = self.shapes.get(comps.object);
        let in_shadow = self.is_shadowed(comps.over_point);
        let world_to_object = self.shapes.world_to_object_transform(comps.object);

        let surface = lighting(
            &shape.material,
            &world_to_object,
            &self.light,
            comps.over_point,
            comps.eyev,
            comps.normalv,
            in_shadow,
        );

        let reflected = self.reflected_color(comps, remaining);
        let refracted = self.refracted_color(comps, remaining);

        if shape.material.reflective > 0.0 && shape.material.transparency > 0.0 {
            let reflectance = comps.schlick();
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    /// Returns the color arriving along the reflection of the incoming
    /// ray, scaled by the surface's reflectivity. Black when the surface
    /// is not reflective or the recursion budget is spent.
    ///
    /// * `comps`     - Precomputed state of the intersection.
    /// * `remaining` - Remaining recursion depth.
    pub fn reflected_color(&self, comps: &Computations, remaining: usize) -> Color {
        let reflective = self.shapes.get(comps.object).material.reflective;
        if remaining < 1 || reflective == 0.0 {
            return BLACK;
        }

        let reflect_ray = Ray::new(comps.over_point, comps.reflectv);
        self.color_at(&reflect_ray, remaining - 1) * reflective
    }

    /// Returns the color arriving through the surface along the refracted
    /// ray, scaled by the surface's transparency. Black for opaque
    /// surfaces, a spent recursion budget, or total internal reflection.
    ///
    /// * `comps`     - Precomputed state of the intersection.
    /// * `remaining` - Remaining recursion depth.
    pub fn refracted_color(&self, comps: &Computations, remaining: usize) -> Color {
        let transparency = self.shapes.get(comps.object).material.transparency;
        if remaining < 1 || transparency == 0.0 {
            return BLACK;
        }

        // Snell's law, checking for total internal reflection.
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(&comps.normalv);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return BLACK;
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normalv * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);

        self.color_at(&refract_ray, remaining - 1) * transparency
    }
}

/// A two-sphere scene used throughout the tests: an outer green-ish
/// sphere containing a half-size inner sphere, lit from the upper left.
#[cfg(test)]
pub(crate) fn default_scene() -> Scene {
    use core::color::WHITE;
    use core::geometry::{point, scaling};
    use core::material::Material;
    use shapes::{Geometry, Sphere};

    let light = PointLight::new(point(-10.0, 10.0, -10.0), WHITE);
    let mut scene = Scene::new(light);

    let s1 = scene.shapes.add(Geometry::Sphere(Sphere));
    scene.shapes.get_mut(s1).material = Material {
        color: Color::new(0.8, 1.0, 0.6),
        diffuse: 0.7,
        specular: 0.2,
        ..Material::new()
    };

    let s2 = scene.shapes.add(Geometry::Sphere(Sphere));
    scene
        .shapes
        .get_mut(s2)
        .set_transform(scaling(0.5, 0.5, 0.5));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::color::WHITE;
    use core::common::{Float, EPSILON};
    use float_cmp::*;
    use core::geometry::{point, translation, vector};
    use core::intersection::{Intersection, ShapeId};
    use core::material::Material;
    use shapes::{Geometry, Plane, Sphere};

    #[test]
    fn intersect_scene_with_a_ray() {
        let scene = default_scene();
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = scene.intersect(&r);
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[0].t, 4.0);
        assert_eq!(xs[1].t, 4.5);
        assert_eq!(xs[2].t, 5.5);
        assert_eq!(xs[3].t, 6.0);
    }

    #[test]
    fn shading_an_intersection() {
        let scene = default_scene();
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let hit = Intersection::new(4.0, scene.shapes.get(ShapeId(0)).id());
        let xs = IntersectionList::from_vec(vec![hit]);
        let comps = Computations::prepare(&scene.shapes, &hit, &r, &xs);
        let c = scene.shade_hit(&comps, 5);
        assert_eq!(c, Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn shading_an_intersection_from_the_inside() {
        let mut scene = default_scene();
        scene.light = PointLight::new(point(0.0, 0.25, 0.0), WHITE);
        let r = Ray::new(point(0.0, 0.0, 0.0), vector(0.0, 0.0, 1.0));
        let hit = Intersection::new(0.5, ShapeId(1));
        let xs = IntersectionList::from_vec(vec![hit]);
        let comps = Computations::prepare(&scene.shapes, &hit, &r, &xs);
        let c = scene.shade_hit(&comps, 5);
        assert_eq!(c, Color::new(0.90498, 0.90498, 0.90498));
    }

    #[test]
    fn color_when_a_ray_misses() {
        let scene = default_scene();
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 1.0, 0.0));
        assert_eq!(scene.color_at(&r, 5), BLACK);
    }

    #[test]
    fn color_when_a_ray_hits() {
        let scene = default_scene();
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        assert_eq!(scene.color_at(&r, 5), Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn color_with_an_intersection_behind_the_ray() {
        let mut scene = default_scene();
        scene.shapes.get_mut(ShapeId(0)).material.ambient = 1.0;
        scene.shapes.get_mut(ShapeId(1)).material.ambient = 1.0;
        let inner_color = scene.shapes.get(ShapeId(1)).material.color;

        let r = Ray::new(point(0.0, 0.0, 0.75), vector(0.0, 0.0, -1.0));
        assert_eq!(scene.color_at(&r, 5), inner_color);
    }

    #[test]
    fn no_shadow_when_nothing_blocks_the_light() {
        let scene = default_scene();
        assert!(!scene.is_shadowed(point(0.0, 10.0, 0.0)));
    }

    #[test]
    fn shadow_when_an_object_is_between_point_and_light() {
        let scene = default_scene();
        assert!(scene.is_shadowed(point(10.0, -10.0, 10.0)));
    }

    #[test]
    fn no_shadow_when_the_object_is_behind_the_light() {
        let scene = default_scene();
        assert!(!scene.is_shadowed(point(-20.0, 20.0, -20.0)));
    }

    #[test]
    fn no_shadow_when_the_object_is_behind_the_point() {
        let scene = default_scene();
        assert!(!scene.is_shadowed(point(-2.0, 2.0, -2.0)));
    }

    #[test]
    fn shade_hit_with_a_shadowed_intersection() {
        let light = PointLight::new(point(0.0, 0.0, -10.0), WHITE);
        let mut scene = Scene::new(light);
        scene.shapes.add(Geometry::Sphere(Sphere));
        let s2 = scene.shapes.add(Geometry::Sphere(Sphere));
        scene
            .shapes
            .get_mut(s2)
            .set_transform(translation(0.0, 0.0, 10.0));

        let r = Ray::new(point(0.0, 0.0, 5.0), vector(0.0, 0.0, 1.0));
        let hit = Intersection::new(4.0, s2);
        let xs = IntersectionList::from_vec(vec![hit]);
        let comps = Computations::prepare(&scene.shapes, &hit, &r, &xs);
        let c = scene.shade_hit(&comps, 5);
        assert_eq!(c, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn reflected_color_for_a_nonreflective_material() {
        let mut scene = default_scene();
        scene.shapes.get_mut(ShapeId(1)).material.ambient = 1.0;

        let r = Ray::new(point(0.0, 0.0, 0.0), vector(0.0, 0.0, 1.0));
        let hit = Intersection::new(1.0, ShapeId(1));
        let xs = IntersectionList::from_vec(vec![hit]);
        let comps = Computations::prepare(&scene.shapes, &hit, &r, &xs);
        assert_eq!(scene.reflected_color(&comps, 5), BLACK);
    }

    #[test]
    fn reflected_color_for_a_reflective_material() {
        let mut scene = default_scene();
        let floor = scene.shapes.add(Geometry::Plane(Plane));
        scene.shapes.get_mut(floor).material.reflective = 0.5;
        scene
            .shapes
            .get_mut(floor)
            .set_transform(translation(0.0, -1.0, 0.0));

        let s = (2.0 as core::common::Float).sqrt() / 2.0;
        let r = Ray::new(point(0.0, 0.0, -3.0), vector(0.0, -s, s));
        let hit = Intersection::new(2.0 * s, floor);
        let xs = IntersectionList::from_vec(vec![hit]);
        let comps = Computations::prepare(&scene.shapes, &hit, &r, &xs);
        let c = scene.reflected_color(&comps, 5);
        assert!(approx_eq!(Float, c.r, 0.19032, epsilon = 0.0001));
        assert!(approx_eq!(Float, c.g, 0.2379, epsilon = 0.0001));
        assert!(approx_eq!(Float, c.b, 0.14274, epsilon = 0.0001));
    }

    #[test]
    fn shade_hit_with_a_reflective_material() {
        let mut scene = default_scene();
        let floor = scene.shapes.add(Geometry::Plane(Plane));
        scene.shapes.get_mut(floor).material.reflective = 0.5;
        scene
            .shapes
            .get_mut(floor)
            .set_transform(translation(0.0, -1.0, 0.0));

        let s = (2.0 as core::common::Float).sqrt() / 2.0;
        let r = Ray::new(point(0.0, 0.0, -3.0), vector(0.0, -s, s));
        let hit = Intersection::new(2.0 * s, floor);
        let xs = IntersectionList::from_vec(vec![hit]);
        let comps = Computations::prepare(&scene.shapes, &hit, &r, &xs);
        let c = scene.shade_hit(&comps, 5);
        assert!(approx_eq!(Float, c.r, 0.87677, epsilon = 0.0001));
        assert!(approx_eq!(Float, c.g, 0.92436, epsilon = 0.0001));
        assert!(approx_eq!(Float, c.b, 0.82918, epsilon = 0.0001));
    }

    #[test]
    fn color_at_terminates_between_parallel_mirrors() {
        let light = PointLight::new(point(0.0, 0.0, 0.0), WHITE);
        let mut scene = Scene::new(light);

        let lower = scene.shapes.add(Geometry::Plane(Plane));
        scene.shapes.get_mut(lower).material.reflective = 1.0;
        scene
            .shapes
            .get_mut(lower)
            .set_transform(translation(0.0, -1.0, 0.0));

        let upper = scene.shapes.add(Geometry::Plane(Plane));
        scene.shapes.get_mut(upper).material.reflective = 1.0;
        scene
            .shapes
            .get_mut(upper)
            .set_transform(translation(0.0, 1.0, 0.0));

        let r = Ray::new(point(0.0, 0.0, 0.0), vector(0.0, 1.0, 0.0));
        // Must return rather than recurse forever.
        scene.color_at(&r, 5);
    }

    #[test]
    fn reflected_color_at_maximum_recursion_depth() {
        let mut scene = default_scene();
        let floor = scene.shapes.add(Geometry::Plane(Plane));
        scene.shapes.get_mut(floor).material.reflective = 0.5;
        scene
            .shapes
            .get_mut(floor)
            .set_transform(translation(0.0, -1.0, 0.0));

        let s = (2.0 as core::common::Float).sqrt() / 2.0;
        let r = Ray::new(point(0.0, 0.0, -3.0), vector(0.0, -s, s));
        let hit = Intersection::new(2.0 * s, floor);
        let xs = IntersectionList::from_vec(vec![hit]);
        let comps = Computations::prepare(&scene.shapes, &hit, &r, &xs);
        assert_eq!(scene.reflected_color(&comps, 0), BLACK);
    }

    #[test]
    fn refracted_color_of_an_opaque_surface() {
        let scene = default_scene();
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = IntersectionList::from_vec(vec![
            Intersection::new(4.0, ShapeId(0)),
            Intersection::new(6.0, ShapeId(0)),
        ]);
        let comps = Computations::prepare(&scene.shapes, &xs[0], &r, &xs);
        assert_eq!(scene.refracted_color(&comps, 5), BLACK);
    }

    #[test]
    fn refracted_color_at_maximum_recursion_depth() {
        let mut scene = default_scene();
        scene.shapes.get_mut(ShapeId(0)).material.transparency = 1.0;
        scene
            .shapes
            .get_mut(ShapeId(0))
            .material
            .refractive_index = 1.5;

        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = IntersectionList::from_vec(vec![
            Intersection::new(4.0, ShapeId(0)),
            Intersection::new(6.0, ShapeId(0)),
        ]);
        let comps = Computations::prepare(&scene.shapes, &xs[0], &r, &xs);
        assert_eq!(scene.refracted_color(&comps, 0), BLACK);
    }

    #[test]
    fn refracted_color_under_total_internal_reflection() {
        let mut scene = default_scene();
        scene.shapes.get_mut(ShapeId(0)).material.transparency = 1.0;
        scene
            .shapes
            .get_mut(ShapeId(0))
            .material
            .refractive_index = 1.5;

        let s = (2.0 as core::common::Float).sqrt() / 2.0;
        let r = Ray::new(point(0.0, 0.0, s), vector(0.0, 1.0, 0.0));
        let xs = IntersectionList::from_vec(vec![
            Intersection::new(-s, ShapeId(0)),
            Intersection::new(s, ShapeId(0)),
        ]);
        // The hit is inside the sphere, at xs[1].
        let comps = Computations::prepare(&scene.shapes, &xs[1], &r, &xs);
        assert_eq!(scene.refracted_color(&comps, 5), BLACK);
    }

    #[test]
    fn shade_hit_with_a_transparent_material() {
        let mut scene = default_scene();

        let floor = scene.shapes.add(Geometry::Plane(Plane));
        scene
            .shapes
            .get_mut(floor)
            .set_transform(translation(0.0, -1.0, 0.0));
        scene.shapes.get_mut(floor).material.transparency = 0.5;
        scene.shapes.get_mut(floor).material.refractive_index = 1.5;

        let ball = scene.shapes.add(Geometry::Sphere(Sphere));
        scene
            .shapes
            .get_mut(ball)
            .set_transform(translation(0.0, -3.5, -0.5));
        scene.shapes.get_mut(ball).material = Material {
            color: Color::new(1.0, 0.0, 0.0),
            ambient: 0.5,
            ..Material::new()
        };

        let s = (2.0 as core::common::Float).sqrt() / 2.0;
        let r = Ray::new(point(0.0, 0.0, -3.0), vector(0.0, -s, s));
        let xs = IntersectionList::from_vec(vec![Intersection::new(2.0 * s, floor)]);
        let comps = Computations::prepare(&scene.shapes, &xs[0], &r, &xs);
        let c = scene.shade_hit(&comps, 5);
        assert_eq!(c, Color::new(0.93642, 0.68642, 0.68642));
    }

    #[test]
    fn shade_hit_with_a_reflective_transparent_material() {
        let mut scene = default_scene();

        let floor = scene.shapes.add(Geometry::Plane(Plane));
        scene
            .shapes
            .get_mut(floor)
            .set_transform(translation(0.0, -1.0, 0.0));
        scene.shapes.get_mut(floor).material.reflective = 0.5;
        scene.shapes.get_mut(floor).material.transparency = 0.5;
        scene.shapes.get_mut(floor).material.refractive_index = 1.5;

        let ball = scene.shapes.add(Geometry::Sphere(Sphere));
        scene
            .shapes
            .get_mut(ball)
            .set_transform(translation(0.0, -3.5, -0.5));
        scene.shapes.get_mut(ball).material = Material {
            color: Color::new(1.0, 0.0, 0.0),
            ambient: 0.5,
            ..Material::new()
        };

        let s = (2.0 as core::common::Float).sqrt() / 2.0;
        let r = Ray::new(point(0.0, 0.0, -3.0), vector(0.0, -s, s));
        let xs = IntersectionList::from_vec(vec![Intersection::new(2.0 * s, floor)]);
        let comps = Computations::prepare(&scene.shapes, &xs[0], &r, &xs);
        let c = scene.shade_hit(&comps, 5);
        assert_eq!(c, Color::new(0.93391, 0.69643, 0.69243));
    }

    #[test]
    fn group_children_are_not_intersected_twice() {
        let mut scene = default_scene();
        let group = scene.shapes.add(Geometry::Group(shapes::Group::new()));
        let member = scene.shapes.add(Geometry::Sphere(Sphere));
        scene
            .shapes
            .get_mut(member)
            .set_transform(translation(5.0, 0.0, 0.0));
        scene.shapes.add_child(group, member);
        scene.finalize();

        let r = Ray::new(point(5.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = scene.intersect(&r);
        assert_eq!(xs.len(), 2);
        assert!((xs[0].t - 4.0).abs() < EPSILON);
    }
}
