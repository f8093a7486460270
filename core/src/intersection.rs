//! Intersections

#![allow(dead_code)]
use crate::common::Float;
use std::ops::Index;

/// Identity of a shape: its index in the scene's shape arena. Assigned
/// monotonically at insertion, so lower ids were added earlier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub usize);

/// One ray/surface crossing. The parameter may be negative, meaning the
/// crossing lies behind the ray origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// The ray parameter at the crossing.
    pub t: Float,

    /// The shape that was crossed.
    pub object: ShapeId,
}

impl Intersection {
    /// Creates a new intersection.
    ///
    /// * `t`      - The ray parameter.
    /// * `object` - The shape that was crossed.
    pub fn new(t: Float, object: ShapeId) -> Self {
        Self { t, object }
    }
}

/// An ordered, growable collection of intersections from one ray cast.
/// Iteration order is insertion order until [`Self::sort`] is called.
#[derive(Clone, Debug, Default)]
pub struct IntersectionList {
    items: Vec<Intersection>,
}

impl IntersectionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    /// Creates a list from existing intersections.
    ///
    /// * `items` - The intersections.
    pub fn from_vec(items: Vec<Intersection>) -> Self {
        Self { items }
    }

    /// Appends an intersection.
    ///
    /// * `i` - The intersection.
    pub fn push(&mut self, i: Intersection) {
        self.items.push(i);
    }

    /// Appends an intersection built from its parts.
    ///
    /// * `t`      - The ray parameter.
    /// * `object` - The shape that was crossed.
    pub fn add(&mut self, t: Float, object: ShapeId) {
        self.items.push(Intersection::new(t, object));
    }

    /// Returns the number of intersections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the intersections in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Intersection> {
        self.items.iter()
    }

    /// Stable-sorts the list ascending by t, with ties broken by lowest
    /// shape id so the order never depends on insertion history.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| {
            a.t.partial_cmp(&b.t)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.object.cmp(&b.object))
        });
    }

    /// Returns the hit: the intersection with the smallest positive t.
    /// When two intersections share the minimal t, the lower shape id
    /// wins, making the selection deterministic. Returns `None` when every
    /// t is negative or the list is empty.
    pub fn hit(&self) -> Option<Intersection> {
        let mut best: Option<Intersection> = None;
        for &i in &self.items {
            if i.t <= 0.0 {
                continue;
            }
            match best {
                None => best = Some(i),
                Some(b) => {
                    if i.t < b.t || (i.t == b.t && i.object < b.object) {
                        best = Some(i);
                    }
                }
            }
        }
        best
    }
}

impl Index<usize> for IntersectionList {
    type Output = Intersection;

    /// Returns the intersection at the given position.
    ///
    /// * `index` - The position.
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for IntersectionList {
    type Item = Intersection;
    type IntoIter = std::vec::IntoIter<Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntersectionList {
    type Item = &'a Intersection;
    type IntoIter = std::slice::Iter<'a, Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
