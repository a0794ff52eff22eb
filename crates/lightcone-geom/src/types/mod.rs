// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the cache and pipeline (transform, AABB).

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Object transforms with non-uniform scale."]
pub mod transform;
