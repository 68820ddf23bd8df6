// Copyright 2026 the attitude authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # attitude
//!
//! Quaternion-based 3D orientation math: vectors, rotation matrices,
//! Euler angles, and interpolation.
//!
//! The central type is [`Quaternion`], a plain four-component value type
//! with no enforced invariant: the null quaternion (all zeros) is
//! representable and distinct from [`Quaternion::IDENTITY`]. Rotation
//! constructors produce unit quaternions; the algebraic operators work on
//! any quaternion.
//!
//! Angles on the public [`Quaternion`] API are in **degrees** (axis-angle
//! and Euler-angle conversions included). The raw conversion helpers
//! [`degrees_to_radians`] and [`radians_to_degrees`] are exposed for
//! callers working at that boundary themselves.

#![warn(missing_docs)]

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
///
/// All degenerate-input checks in this crate (null-length detection,
/// gimbal-lock detection, interpolation fallbacks) compare against this
/// tolerance rather than testing floats for exact equality.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod matrix;
pub mod quaternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::matrix::Mat3;
pub use self::quaternion::Quaternion;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use attitude::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use attitude::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use attitude::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the crate's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use attitude::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
