//! Prepared shading computations

#![allow(dead_code)]
use crate::ShapeStore;
use core::common::*;
use core::geometry::{Ray, Tuple};
use core::intersection::{Intersection, IntersectionList, ShapeId};

/// Point-in-time record of everything the shading equations need about
/// one intersection: derived once from the hit, the casting ray and the
/// full intersection list.
#[derive(Clone, Debug)]
pub struct Computations {
    /// The ray parameter at the hit.
    pub t: Float,

    /// The shape that was hit.
    pub object: ShapeId,

    /// The hit point in world space.
    pub point: Tuple,

    /// The hit point nudged along the normal, used as the origin of
    /// shadow and reflection rays so they cannot re-hit this surface.
    pub over_point: Tuple,

    /// The hit point nudged against the normal, used as the origin of
    /// refraction rays.
    pub under_point: Tuple,

    /// Vector from the hit point back toward the eye.
    pub eyev: Tuple,

    /// Surface normal, flipped toward the eye when the ray started inside
    /// the surface.
    pub normalv: Tuple,

    /// The casting ray's direction reflected about the normal.
    pub reflectv: Tuple,

    /// True if the ray originated inside the surface.
    pub inside: bool,

    /// Refractive index of the medium being left.
    pub n1: Float,

    /// Refractive index of the medium being entered.
    pub n2: Float,
}

impl Computations {
    /// Prepares the shading computations for a hit.
    ///
    /// The refractive indices n1/n2 come from walking the full,
    /// ascending-t intersection list while toggling shapes in a
    /// "currently inside" stack, which models overlapping and nested
    /// transparent volumes.
    ///
    /// * `store` - The shape arena.
    /// * `hit`   - The intersection being shaded.
    /// * `ray`   - The casting ray.
    /// * `xs`    - Every intersection of this cast, sorted ascending by t.
    pub fn prepare(
        store: &ShapeStore,
        hit: &Intersection,
        ray: &Ray,
        xs: &IntersectionList,
    ) -> Self {
        let point = ray.position(hit.t);
        let eyev = -ray.direction;
        let mut normalv = store.normal_at(hit.object, point);

        let inside = normalv.dot(&eyev) < 0.0;
        if inside {
            normalv = -normalv;
        }

        let reflectv = ray.direction.reflect(&normalv);
        let over_point = point + normalv * EPSILON;
        let under_point = point - normalv * EPSILON;

        let (n1, n2) = refractive_indices(store, hit, xs);

        Self {
            t: hit.t,
            object: hit.object,
            point,
            over_point,
            under_point,
            eyev,
            normalv,
            reflectv,
            inside,
            n1,
            n2,
        }
    }

    /// Schlick's approximation of the Fresnel reflectance: the fraction of
    /// light reflected at this hit. Returns 1.0 under total internal
    /// reflection.
    pub fn schlick(&self) -> Float {
        let mut cos = self.eyev.dot(&self.normalv);

        if self.n1 > self.n2 {
            let n = self.n1 / self.n2;
            let sin2_t = n * n * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }

        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}

/// Walks the sorted intersection list, maintaining the stack of shapes
/// the ray is currently inside, to find the refractive indices on either
/// side of the hit.
///
/// * `store` - The shape arena.
/// * `hit`   - The intersection being shaded.
/// * `xs`    - Every intersection of this cast, sorted ascending by t.
fn refractive_indices(
    store: &ShapeStore,
    hit: &Intersection,
    xs: &IntersectionList,
) -> (Float, Float) {
    let mut n1 = 1.0;
    let mut n2 = 1.0;
    let mut containers: Vec<ShapeId> = vec![];

    for i in xs {
        let is_hit = i == hit;
        if is_hit {
            n1 = containers
                .last()
                .map_or(1.0, |&id| store.get(id).material.refractive_index);
        }

        // Toggle membership: leaving a shape we were inside, else entering.
        if let Some(pos) = containers.iter().position(|&id| id == i.object) {
            containers.remove(pos);
        } else {
            containers.push(i.object);
        }

        if is_hit {
            n2 = containers
                .last()
                .map_or(1.0, |&id| store.get(id).material.refractive_index);
            break;
        }
    }

    (n1, n2)
}
