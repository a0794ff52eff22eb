// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::Vec3;

/// Spacetime 4-vector `(t, x, y, z)` with time in the leading slot.
///
/// Time is carried in length units (`ct`), so the Minkowski interval is
/// `−t² + x² + y² + z²` with no extra constants.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Creates a 4-vector from its time and spatial components.
    pub const fn new(t: f32, x: f32, y: f32, z: f32) -> Self {
        Self { data: [t, x, y, z] }
    }

    /// Builds a 4-vector from a time coordinate and a spatial triple.
    pub fn from_time_space(t: f32, space: Vec3) -> Self {
        let [x, y, z] = space.to_array();
        Self::new(t, x, y, z)
    }

    /// Returns the components as `[t, x, y, z]`.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Time component.
    pub fn t(&self) -> f32 {
        self.data[0]
    }

    /// Spatial part `(x, y, z)`.
    pub fn spatial(&self) -> Vec3 {
        Vec3::new(self.data[1], self.data[2], self.data[3])
    }

    /// Minkowski interval `−t² + |x|²` (signature `−+++`).
    pub fn interval(&self) -> f32 {
        let s = self.spatial();
        s.length_squared() - self.data[0] * self.data[0]
    }

    /// Euclidean magnitude over all four components.
    ///
    /// Not a relativistic invariant; used to scale numeric tolerances.
    pub fn euclidean_length(&self) -> f32 {
        self.data.iter().map(|c| c * c).sum::<f32>().sqrt()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
