// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lightcone_math::Vec3;

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - The space (local or world) is whatever the points it was built from used.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB spanning two corners given in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(&b),
            max: a.max(&b),
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Full extent along each axis (`max − min`).
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }
}
