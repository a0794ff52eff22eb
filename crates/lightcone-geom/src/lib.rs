// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Lightcone.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) used as the per-mesh bounding volume.
- Object transforms (`Transform`) with forward and inverse matrices for
  local ↔ world conversion.

Design notes:
- Deterministic: float32 throughout, no fused multiply-add.
- Rustdoc is treated as part of the contract; public items are documented.
"]
#![forbid(unsafe_code)]

/// Foundational geometric types.
pub mod types;

pub use types::aabb::Aabb;
pub use types::transform::Transform;
