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

//! Provides the `Quaternion` type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use super::{degrees_to_radians, radians_to_degrees, Mat3, Vec3, Vec4, EPSILON};
use std::f32::consts::FRAC_PI_2;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance for the double-precision length accumulations below. Tighter
/// than [`EPSILON`] so a quaternion a few ULPs off unit length is still
/// renormalized rather than passed through.
const LEN_EPSILON: f64 = 1e-12;

/// Represents a quaternion `w + xi + yj + zk` used for 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the vector
/// part and `w` is the scalar part. No invariant is enforced on the
/// components: the null quaternion (all four components zero, [`ZERO`]) is
/// representable and distinct from the identity ([`IDENTITY`]). Rotation
/// constructors such as [`from_axis_angle`] produce unit quaternions; the
/// algebraic operators accept any quaternion.
///
/// Equality is exact component-wise comparison with IEEE numeric semantics,
/// so `-0.0` compares equal to `0.0` while direct field inspection still
/// observes the sign.
///
/// Degenerate geometric inputs (zero axes, collinear directions) never
/// produce NaN; each conversion documents its deterministic fallback.
///
/// [`ZERO`]: Quaternion::ZERO
/// [`IDENTITY`]: Quaternion::IDENTITY
/// [`from_axis_angle`]: Quaternion::from_axis_angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// The null quaternion, with all four components zero.
    ///
    /// This is the degenerate fixed point of [`normalized`](Self::normalized)
    /// and [`inverted`](Self::inverted): null in, null out.
    pub const ZERO: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Creates a new quaternion from its raw components, stored verbatim
    /// (signed zeros included).
    ///
    /// This does not produce a unit quaternion. For creating rotations,
    /// prefer `from_axis_angle` or the other rotation constructors.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a scalar part and a vector part.
    #[inline]
    pub const fn from_scalar_and_vector(scalar: f32, vector: Vec3) -> Self {
        Self {
            x: vector.x,
            y: vector.y,
            z: vector.z,
            w: scalar,
        }
    }

    /// Reinterprets the four components of a `Vec4` as a quaternion, with
    /// `v.w` the scalar part.
    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: v.w,
        }
    }

    /// Returns the four raw components as a `Vec4`, with the scalar part in `w`.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Returns the scalar part.
    #[inline]
    pub const fn scalar(&self) -> f32 {
        self.w
    }

    /// Returns the vector part.
    #[inline]
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Replaces the vector part, leaving the scalar part untouched.
    #[inline]
    pub fn set_vector(&mut self, vector: Vec3) {
        self.x = vector.x;
        self.y = vector.y;
        self.z = vector.z;
    }

    /// Returns `true` if all four components are exactly zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }

    /// Returns `true` if this is the identity quaternion (`w == 1`, zero
    /// vector part). Numeric comparison, so signed zeros qualify.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 1.0
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    /// This is exact for representable sums, no square root involved.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared_f64().sqrt() as f32
    }

    /// Squared length accumulated in `f64`, used wherever the subsequent
    /// comparison is tighter than `f32` rounding allows.
    #[inline]
    fn length_squared_f64(&self) -> f64 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        let z = f64::from(self.z);
        let w = f64::from(self.w);
        x * x + y * y + z * z + w * w
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    ///
    /// The null quaternion is passed through unchanged; an already-unit
    /// quaternion is returned as-is.
    pub fn normalized(&self) -> Self {
        let len_sq = self.length_squared_f64();
        if (len_sq - 1.0).abs() < LEN_EPSILON {
            *self
        } else if len_sq > LEN_EPSILON {
            let inv = (1.0 / len_sq.sqrt()) as f32;
            Self {
                x: self.x * inv,
                y: self.y * inv,
                z: self.z * inv,
                w: self.w * inv,
            }
        } else {
            Self::ZERO
        }
    }

    /// Normalizes the quaternion in place, with the same null-case
    /// short-circuit as [`normalized`](Self::normalized).
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the inverse of the quaternion: the conjugate divided by the
    /// squared length. The null quaternion inverts to itself.
    ///
    /// For a unit quaternion, the inverse is equal to its conjugate.
    pub fn inverted(&self) -> Self {
        let len_sq = self.length_squared_f64();
        if len_sq > LEN_EPSILON {
            let inv = (1.0 / len_sq) as f32;
            Self {
                x: -self.x * inv,
                y: -self.y * inv,
                z: -self.z * inv,
                w: self.w * inv,
            }
        } else {
            Self::ZERO
        }
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotates a 3D vector by this quaternion, which must be a unit
    /// quaternion for the result to be a pure rotation.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let s = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    // --- Rotation Conversions ---

    /// Creates a quaternion representing a rotation of `angle_deg` degrees
    /// around `axis`.
    ///
    /// A non-unit axis is normalized first, and the result is normalized to
    /// absorb the axis-normalization error. A zero axis leaves the vector
    /// part zero, so the result is the normalized pure-scalar quaternion:
    /// the identity up to sign, or null when `cos(angle/2)` is itself zero.
    /// No input produces NaN.
    pub fn from_axis_angle(axis: Vec3, angle_deg: f32) -> Self {
        let mut x = axis.x;
        let mut y = axis.y;
        let mut z = axis.z;
        let length = axis.length();
        if (length - 1.0).abs() >= EPSILON && length >= EPSILON {
            let inv = 1.0 / length;
            x *= inv;
            y *= inv;
            z *= inv;
        }
        let half = degrees_to_radians(angle_deg * 0.5);
        let (s, c) = half.sin_cos();
        Self::new(x * s, y * s, z * s, c).normalized()
    }

    /// Recovers the unit rotation axis and the angle in degrees, the inverse
    /// of [`from_axis_angle`](Self::from_axis_angle).
    ///
    /// The angle lands in `[0, 360]`. When the vector part is null the angle
    /// is 0 (mod 360) and any axis would fit, so `(Vec3::ZERO, 0.0)` is
    /// returned.
    pub fn axis_and_angle(&self) -> (Vec3, f32) {
        let length = self.vector().length();
        if length < EPSILON {
            return (Vec3::ZERO, 0.0);
        }
        let axis = if (length - 1.0).abs() < EPSILON {
            self.vector()
        } else {
            self.vector() / length
        };
        let angle = 2.0 * self.w.clamp(-1.0, 1.0).acos();
        (axis, radians_to_degrees(angle))
    }

    /// Converts this quaternion to a 3x3 rotation matrix.
    ///
    /// The quaternion is assumed to be a unit quaternion.
    pub fn to_rotation_matrix(&self) -> Mat3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx = x2 * self.x;
        let xy = x2 * self.y;
        let xz = x2 * self.z;
        let yy = y2 * self.y;
        let yz = y2 * self.z;
        let zz = z2 * self.z;
        let xw = x2 * self.w;
        let yw = y2 * self.w;
        let zw = z2 * self.w;

        Mat3::from_cols(
            Vec3::new(1.0 - (yy + zz), xy + zw, xz - yw),
            Vec3::new(xy - zw, 1.0 - (xx + zz), yz + xw),
            Vec3::new(xz + yw, yz - xw, 1.0 - (xx + yy)),
        )
    }

    /// Creates a quaternion from a 3x3 rotation matrix.
    ///
    /// The matrix is assumed to be a pure rotation (orthonormal columns,
    /// determinant 1); this is not validated. Round-tripping through
    /// [`to_rotation_matrix`](Self::to_rotation_matrix) reproduces the
    /// original quaternion up to sign, since `q` and `-q` encode the same
    /// rotation.
    pub fn from_rotation_matrix(m: &Mat3) -> Self {
        let m00 = m.cols[0].x;
        let m10 = m.cols[0].y;
        let m20 = m.cols[0].z;
        let m01 = m.cols[1].x;
        let m11 = m.cols[1].y;
        let m21 = m.cols[1].z;
        let m02 = m.cols[2].x;
        let m12 = m.cols[2].y;
        let m22 = m.cols[2].z;

        // Shoemake's method: take the square root of whichever of the trace
        // and the diagonal entries is largest, for numerical stability.
        let trace = m00 + m11 + m22;
        let mut q = Self::IDENTITY;

        if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            q.w = 0.25 * s;
            q.x = (m21 - m12) / s;
            q.y = (m02 - m20) / s;
            q.z = (m10 - m01) / s;
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            q.w = (m21 - m12) / s;
            q.x = 0.25 * s;
            q.y = (m01 + m10) / s;
            q.z = (m02 + m20) / s;
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            q.w = (m02 - m20) / s;
            q.x = (m01 + m10) / s;
            q.y = 0.25 * s;
            q.z = (m12 + m21) / s;
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            q.w = (m10 - m01) / s;
            q.x = (m02 + m20) / s;
            q.y = (m12 + m21) / s;
            q.z = 0.25 * s;
        }
        q.normalized()
    }

    /// Creates a quaternion from an orthonormal right-handed basis.
    ///
    /// The axes are taken as the columns of a rotation matrix; they are
    /// assumed orthonormal and are not validated.
    #[inline]
    pub fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self::from_rotation_matrix(&Mat3::from_cols(x_axis, y_axis, z_axis))
    }

    /// Returns the orthonormal basis this rotation maps the X, Y, and Z axes
    /// onto, the inverse of [`from_axes`](Self::from_axes) up to sign.
    #[inline]
    pub fn axes(&self) -> (Vec3, Vec3, Vec3) {
        let m = self.to_rotation_matrix();
        (m.cols[0], m.cols[1], m.cols[2])
    }

    /// Creates the shortest-arc rotation mapping the direction of `from`
    /// onto the direction of `to`. Magnitudes are ignored.
    ///
    /// When the vectors are anti-parallel the rotation axis is undefined;
    /// the fallback is a 180-degree turn about a deterministic axis
    /// perpendicular to `from`: `X x from`, or `Y x from` when `from` is
    /// parallel to the X-axis.
    pub fn rotation_to(from: Vec3, to: Vec3) -> Self {
        // Based on Stan Melax's half-way vector construction.
        let v0 = from.normalize();
        let v1 = to.normalize();
        let d = v0.dot(v1) + 1.0;

        if d < EPSILON {
            let mut axis = Vec3::X.cross(v0);
            if axis.length_squared() < EPSILON {
                axis = Vec3::Y.cross(v0);
            }
            let axis = axis.normalize();
            // Equivalent to from_axis_angle(axis, 180.0).
            return Self::new(axis.x, axis.y, axis.z, 0.0);
        }

        let d = (2.0 * d).sqrt();
        let axis = v0.cross(v1) / d;
        Self::new(axis.x, axis.y, axis.z, d * 0.5).normalized()
    }

    /// Creates a look-at orientation whose +Z basis axis points along
    /// `direction`, constrained so the +Y basis axis stays as close to `up`
    /// as possible.
    ///
    /// Fallbacks: a zero `direction` yields the identity. When `up` is zero
    /// or collinear with `direction` the basis is ill-defined, so the up
    /// constraint is dropped and the result is the shortest-arc rotation
    /// taking the world Z-axis onto `direction`.
    pub fn from_direction(direction: Vec3, up: Vec3) -> Self {
        let z_axis = direction.normalize();
        if z_axis == Vec3::ZERO {
            return Self::IDENTITY;
        }

        let x_axis = up.cross(z_axis);
        if x_axis.length_squared() < EPSILON {
            // Collinear or invalid up vector; a shortest-arc rotation onto
            // the new direction is the only well-defined answer left.
            return Self::rotation_to(Vec3::Z, z_axis);
        }

        let x_axis = x_axis.normalize();
        let y_axis = z_axis.cross(x_axis);
        Self::from_axes(x_axis, y_axis, z_axis)
    }

    /// Creates a quaternion from Euler angles in degrees: `pitch` about X,
    /// `yaw` about Y, `roll` about Z, composed as `yaw * (pitch * roll)`.
    ///
    /// That grouping is part of the contract: Euler decompositions are not
    /// unique, and [`euler_angles`](Self::euler_angles) inverts exactly this
    /// one.
    pub fn from_euler_angles(pitch_deg: f32, yaw_deg: f32, roll_deg: f32) -> Self {
        let half_pitch = degrees_to_radians(pitch_deg) * 0.5;
        let half_yaw = degrees_to_radians(yaw_deg) * 0.5;
        let half_roll = degrees_to_radians(roll_deg) * 0.5;

        let (s1, c1) = half_yaw.sin_cos();
        let (s2, c2) = half_roll.sin_cos();
        let (s3, c3) = half_pitch.sin_cos();
        let c1c2 = c1 * c2;
        let s1s2 = s1 * s2;

        Self::new(
            c1c2 * s3 + s1s2 * c3,
            s1 * c2 * c3 - c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1c2 * c3 + s1s2 * s3,
        )
    }

    /// Recovers the `(pitch, yaw, roll)` Euler angles in degrees, the
    /// inverse of [`from_euler_angles`](Self::from_euler_angles).
    ///
    /// At gimbal lock (pitch within tolerance of +/-90 degrees, where the
    /// yaw and roll axes coincide) the decomposition is not unique; the
    /// whole twist is reported as yaw and roll is exactly zero. Detection
    /// uses a tolerance threshold, so inputs a fraction of a degree from the
    /// pole take the same branch. The quaternion is rescaled by its length
    /// first, because a slightly non-unit input could otherwise slip past
    /// the lock detection.
    pub fn euler_angles(&self) -> (f32, f32, f32) {
        let len = self.length();
        let (xs, ys, zs, ws) = if len > EPSILON {
            let inv = 1.0 / len;
            (self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            (self.x, self.y, self.z, self.w)
        };

        let xx = xs * xs;
        let xy = xs * ys;
        let xz = xs * zs;
        let xw = xs * ws;
        let yy = ys * ys;
        let yz = ys * zs;
        let yw = ys * ws;
        let zz = zs * zs;
        let zw = zs * ws;

        // The yaw and roll formulas below hide a division by cos(pitch):
        // atan2(a / cos(pitch), b / cos(pitch)) == atan2(a, b). That breaks
        // down when |sin(pitch)| reaches 1, which is the gimbal-lock branch.
        let sin_pitch = -2.0 * (yz - xw);
        let (pitch, yaw, roll);
        if sin_pitch.abs() < 1.0 - EPSILON {
            pitch = sin_pitch.asin();
            yaw = (2.0 * (xz + yw)).atan2(1.0 - 2.0 * (xx + yy));
            roll = (2.0 * (xy + zw)).atan2(1.0 - 2.0 * (xx + zz));
        } else {
            pitch = FRAC_PI_2.copysign(sin_pitch);
            yaw = 2.0 * ys.atan2(ws);
            roll = 0.0;
        }

        (
            radians_to_degrees(pitch),
            radians_to_degrees(yaw),
            radians_to_degrees(roll),
        )
    }

    // --- Interpolation ---

    /// Performs a spherical linear interpolation between two quaternions,
    /// along the shorter of the two great-circle arcs.
    ///
    /// `t <= 0` returns `q1` and `t >= 1` returns `q2`, both exactly. When
    /// the two quaternions are nearly aligned the interpolation falls back
    /// to the linear form, avoiding a division by a vanishing sine.
    pub fn slerp(q1: Self, q2: Self, t: f32) -> Self {
        if t <= 0.0 {
            return q1;
        }
        if t >= 1.0 {
            return q2;
        }

        // A negative dot product means the arc through q2 is the long way
        // around; negating q2 selects the shorter arc.
        let mut q2b = q2;
        let mut dot = q1.dot(q2);
        if dot < 0.0 {
            q2b = -q2b;
            dot = -dot;
        }

        let mut factor1 = 1.0 - t;
        let mut factor2 = t;
        if 1.0 - dot > EPSILON {
            let angle = dot.acos();
            let sin_of_angle = angle.sin();
            if sin_of_angle > EPSILON {
                factor1 = ((1.0 - t) * angle).sin() / sin_of_angle;
                factor2 = (t * angle).sin() / sin_of_angle;
            }
        }

        q1 * factor1 + q2b * factor2
    }

    /// Performs a normalized linear interpolation between two quaternions,
    /// a cheaper approximation of [`slerp`](Self::slerp).
    ///
    /// `t <= 0` returns `q1` and `t >= 1` returns `q2`, both exactly. `q2`
    /// is sign-flipped when the two quaternions are more than 180 degrees
    /// apart, and the blended result is renormalized.
    pub fn nlerp(q1: Self, q2: Self, t: f32) -> Self {
        if t <= 0.0 {
            return q1;
        }
        if t >= 1.0 {
            return q2;
        }

        let mut q2b = q2;
        if q1.dot(q2) < 0.0 {
            q2b = -q2b;
        }

        (q1 * (1.0 - t) + q2b * t).normalized()
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: this is not a rotation composition; see `Mul` for that.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl AddAssign<Quaternion> for Quaternion {
    /// Adds another quaternion to this one component-wise.
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl SubAssign<Quaternion> for Quaternion {
    /// Subtracts another quaternion from this one component-wise.
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.normalized().rotate_vec3(rhs)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f32> for Quaternion {
    /// Scales this quaternion by a scalar in place.
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;
    /// Divides all components of the quaternion by a scalar.
    /// Division by zero is the caller's responsibility; it is not checked.
    #[inline]
    fn div(self, divisor: f32) -> Self::Output {
        Self {
            x: self.x / divisor,
            y: self.y / divisor,
            z: self.z / divisor,
            w: self.w / divisor,
        }
    }
}

impl DivAssign<f32> for Quaternion {
    /// Divides this quaternion by a scalar in place.
    #[inline]
    fn div_assign(&mut self, divisor: f32) {
        *self = *self / divisor;
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components of the quaternion. `-q` represents the same
    /// rotation as `q`.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
