//! Shape arena and dispatch

#![allow(dead_code)]
use crate::{Cone, Cube, Cylinder, Group, Plane, Sphere, Triangle};
use core::geometry::{Bounds3, Matrix4x4, Ray, Tuple, EMPTY_BOUNDS, IDENTITY_MATRIX};
use core::intersection::{IntersectionList, ShapeId};
use core::material::Material;

/// The closed set of primitive variants. Each variant owns only its
/// geometry; transform, material and parent linkage live on [`Shape`].
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Unit sphere.
    Sphere(Sphere),

    /// The xz-plane.
    Plane(Plane),

    /// Axis-aligned unit cube.
    Cube(Cube),

    /// Cylinder around the y-axis.
    Cylinder(Cylinder),

    /// Double-napped cone along the y-axis.
    Cone(Cone),

    /// A single triangle.
    Triangle(Triangle),

    /// A container of child shapes.
    Group(Group),
}

impl Geometry {
    /// Returns the variant name, useful in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Sphere(_) => "sphere",
            Geometry::Plane(_) => "plane",
            Geometry::Cube(_) => "cube",
            Geometry::Cylinder(_) => "cylinder",
            Geometry::Cone(_) => "cone",
            Geometry::Triangle(_) => "triangle",
            Geometry::Group(_) => "group",
        }
    }

    /// Delegates to the variant's local-space intersection algorithm and
    /// returns the crossing parameters. Groups are handled by the arena,
    /// which is the only place child indices can be resolved.
    ///
    /// * `ray` - The ray in the shape's local space.
    fn local_intersect(&self, ray: &Ray) -> Vec<core::common::Float> {
        match self {
            Geometry::Sphere(s) => s.local_intersect(ray),
            Geometry::Plane(p) => p.local_intersect(ray),
            Geometry::Cube(c) => c.local_intersect(ray),
            Geometry::Cylinder(c) => c.local_intersect(ray),
            Geometry::Cone(c) => c.local_intersect(ray),
            Geometry::Triangle(t) => t.local_intersect(ray),
            Geometry::Group(_) => vec![],
        }
    }

    /// Delegates to the variant's local-space normal. A group's normal is
    /// never sampled; normals always come from a concrete surface.
    ///
    /// * `p` - The point in the shape's local space.
    fn local_normal_at(&self, p: Tuple) -> Tuple {
        match self {
            Geometry::Sphere(s) => s.local_normal_at(p),
            Geometry::Plane(pl) => pl.local_normal_at(p),
            Geometry::Cube(c) => c.local_normal_at(p),
            Geometry::Cylinder(c) => c.local_normal_at(p),
            Geometry::Cone(c) => c.local_normal_at(p),
            Geometry::Triangle(t) => t.local_normal_at(p),
            Geometry::Group(_) => unreachable!("group normals are never sampled"),
        }
    }
}

/// A shape instance: geometry plus the shared transform/material/parent
/// machinery every variant needs.
#[derive(Clone, Debug)]
pub struct Shape {
    /// Arena index; doubles as the shape's identity.
    id: ShapeId,

    /// The geometry variant.
    pub geometry: Geometry,

    /// Local-to-parent transform.
    transform: Matrix4x4,

    /// Cached inverse of the transform.
    inverse_transform: Matrix4x4,

    /// Cached inverse-transpose, used for normals.
    inverse_transpose: Matrix4x4,

    /// Surface material.
    pub material: Material,

    /// Owning group, if any. A non-owning link used to resolve nested
    /// coordinate spaces.
    pub parent: Option<ShapeId>,
}

impl Shape {
    /// Creates a new shape with the identity transform and default
    /// material.
    ///
    /// * `id`       - Arena index.
    /// * `geometry` - The geometry variant.
    fn new(id: ShapeId, geometry: Geometry) -> Self {
        Self {
            id,
            geometry,
            transform: IDENTITY_MATRIX,
            inverse_transform: IDENTITY_MATRIX,
            inverse_transpose: IDENTITY_MATRIX,
            material: Material::default(),
            parent: None,
        }
    }

    /// Returns the shape's identity.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Returns the local-to-parent transform.
    pub fn transform(&self) -> Matrix4x4 {
        self.transform
    }

    /// Returns the cached inverse transform.
    pub fn inverse_transform(&self) -> Matrix4x4 {
        self.inverse_transform
    }

    /// Composes a transform onto the shape: the new matrix multiplies the
    /// existing one, so transforms accumulate in application order. The
    /// inverse and inverse-transpose are recomputed here, never during
    /// rendering.
    ///
    /// * `m` - The transform to apply.
    pub fn set_transform(&mut self, m: Matrix4x4) {
        self.transform = self.transform * m;
        self.inverse_transform = self.transform.inverse();
        self.inverse_transpose = self.inverse_transform.transpose();
    }
}

/// The arena owning every shape in a scene. Shape identity is the arena
/// index; parent/child links are indices into the same arena.
#[derive(Clone, Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape and returns its index. Indices are assigned
    /// monotonically, so ids are stable and deterministic.
    ///
    /// * `geometry` - The geometry variant.
    pub fn add(&mut self, geometry: Geometry) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        self.shapes.push(Shape::new(id, geometry));
        id
    }

    /// Returns the shape at the given index.
    ///
    /// * `id` - The arena index.
    pub fn get(&self, id: ShapeId) -> &Shape {
        &self.shapes[id.0]
    }

    /// Returns the shape at the given index, mutably. Shapes are mutated
    /// only during scene assembly.
    ///
    /// * `id` - The arena index.
    pub fn get_mut(&mut self, id: ShapeId) -> &mut Shape {
        &mut self.shapes[id.0]
    }

    /// Returns the number of shapes in the arena.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over every shape in the arena.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Returns the ids of shapes with no parent, i.e. the scene roots.
    pub fn roots(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes
            .iter()
            .filter(|s| s.parent.is_none())
            .map(|s| s.id)
    }

    /// Links a child shape into a group.
    ///
    /// Panics if `parent` is not a group; that is a scene construction
    /// bug.
    ///
    /// * `parent` - The group's arena index.
    /// * `child`  - The child's arena index.
    pub fn add_child(&mut self, parent: ShapeId, child: ShapeId) {
        self.shapes[child.0].parent = Some(parent);
        match &mut self.shapes[parent.0].geometry {
            Geometry::Group(g) => g.push_child(child),
            other => panic!("cannot add child to {}", other.name()),
        }
    }

    /// Intersects a ray with a shape, appending crossings to `xs`. The
    /// ray is expected in the shape's parent space; it is transformed into
    /// local space here, so group recursion composes child transforms
    /// naturally. A group first tests its cached bounding box and skips
    /// its children entirely when the ray misses it.
    ///
    /// * `id`  - The shape's arena index.
    /// * `ray` - The ray in the shape's parent space.
    /// * `xs`  - The intersection list to append to.
    pub fn intersect(&self, id: ShapeId, ray: &Ray, xs: &mut IntersectionList) {
        let shape = self.get(id);
        let local_ray = ray.transform(&shape.inverse_transform);
        match &shape.geometry {
            Geometry::Group(group) => {
                if let Some(bounds) = group.cached_bounds() {
                    if !bounds.intersects(&local_ray) {
                        return;
                    }
                }
                for &child in group.children() {
                    self.intersect(child, &local_ray, xs);
                }
            }
            geometry => {
                for t in geometry.local_intersect(&local_ray) {
                    xs.add(t, id);
                }
            }
        }
    }

    /// Convenience wrapper returning the sorted intersections of one
    /// shape.
    ///
    /// * `id`  - The shape's arena index.
    /// * `ray` - The ray in the shape's parent space.
    pub fn intersections(&self, id: ShapeId, ray: &Ray) -> IntersectionList {
        let mut xs = IntersectionList::new();
        self.intersect(id, ray, &mut xs);
        xs.sort();
        xs
    }

    /// Returns the world-space normal at a point on a shape, resolving
    /// nested coordinate spaces through the parent chain.
    ///
    /// * `id`          - The shape's arena index.
    /// * `world_point` - The point in world space.
    pub fn normal_at(&self, id: ShapeId, world_point: Tuple) -> Tuple {
        let local_point = self.world_to_object(id, world_point);
        let local_normal = self.get(id).geometry.local_normal_at(local_point);
        self.normal_to_world(id, local_normal)
    }

    /// Converts a world-space point into a shape's local space by walking
    /// the parent chain from the root down.
    ///
    /// * `id`    - The shape's arena index.
    /// * `point` - The point in world space.
    pub fn world_to_object(&self, id: ShapeId, point: Tuple) -> Tuple {
        let shape = self.get(id);
        let point = match shape.parent {
            Some(parent) => self.world_to_object(parent, point),
            None => point,
        };
        shape.inverse_transform * point
    }

    /// Returns the full world-to-object transform for a shape, the
    /// product of every inverse on the parent chain. Used to evaluate
    /// patterns in the right space.
    ///
    /// * `id` - The shape's arena index.
    pub fn world_to_object_transform(&self, id: ShapeId) -> Matrix4x4 {
        let shape = self.get(id);
        match shape.parent {
            Some(parent) => shape.inverse_transform * self.world_to_object_transform(parent),
            None => shape.inverse_transform,
        }
    }

    /// Converts a local-space normal into world space by walking the
    /// parent chain upward, renormalizing at each level.
    ///
    /// * `id`     - The shape's arena index.
    /// * `normal` - The normal in the shape's local space.
    pub fn normal_to_world(&self, id: ShapeId, normal: Tuple) -> Tuple {
        let shape = self.get(id);
        let mut n = shape.inverse_transpose * normal;
        n.w = 0.0;
        let n = n.normalize();
        match shape.parent {
            Some(parent) => self.normal_to_world(parent, n),
            None => n,
        }
    }

    /// Returns a shape's bounding box in its own local space. Group
    /// bounds are computed from scratch by folding every child's box,
    /// transformed into group space.
    ///
    /// * `id` - The shape's arena index.
    pub fn local_bounds(&self, id: ShapeId) -> Bounds3 {
        match &self.get(id).geometry {
            Geometry::Sphere(s) => s.bounds(),
            Geometry::Plane(p) => p.bounds(),
            Geometry::Cube(c) => c.bounds(),
            Geometry::Cylinder(c) => c.bounds(),
            Geometry::Cone(c) => c.bounds(),
            Geometry::Triangle(t) => t.bounds(),
            Geometry::Group(g) => g.children().iter().fold(EMPTY_BOUNDS, |acc, &child| {
                let child_bounds = self
                    .local_bounds(child)
                    .transform(&self.get(child).transform);
                acc.merge(&child_bounds)
            }),
        }
    }

    /// Recomputes and caches the bounding box of every group. Called once
    /// when assembly is finished; rendering then reads only the caches.
    pub fn refresh_bounds(&mut self) {
        for i in 0..self.shapes.len() {
            if matches!(self.shapes[i].geometry, Geometry::Group(_)) {
                let bounds = self.local_bounds(ShapeId(i));
                if let Geometry::Group(g) = &mut self.shapes[i].geometry {
                    g.set_bounds(bounds);
                }
            }
        }
    }
}
