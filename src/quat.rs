//! Four-component hypercomplex numbers.
//!
//! A [`Quat`] doubles as a 3D vector (with `w == 0`) and as a rotation
//! operator (unit norm). The component-wise arithmetic is carried by a
//! [`DVec4`]; the Hamilton product is spelled out by hand.

use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quat(DVec4);

impl Quat {
    pub const ZERO: Quat = Quat(DVec4::ZERO);
    pub const IDENTITY: Quat = Quat(DVec4::new(0.0, 0.0, 0.0, 1.0));

    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self(DVec4::new(x, y, z, w))
    }

    /// A pure vector: `w` is zero.
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(0.0, x, y, z)
    }

    #[inline(always)]
    pub fn w(self) -> f64 {
        self.0.w
    }

    #[inline(always)]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline(always)]
    pub fn y(self) -> f64 {
        self.0.y
    }

    #[inline(always)]
    pub fn z(self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn with_x(self, x: f64) -> Self {
        Self(DVec4::new(x, self.0.y, self.0.z, self.0.w))
    }

    #[inline]
    pub fn with_z(self, z: f64) -> Self {
        Self(DVec4::new(self.0.x, self.0.y, z, self.0.w))
    }

    #[inline]
    pub fn scale(self, n: f64) -> Self {
        Self(self.0 * n)
    }

    #[inline]
    pub fn dot(self, other: Quat) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Divides by the length. A zero-length input yields NaN components;
    /// use [`Quat::try_normalize`] where that can happen.
    #[inline]
    pub fn normalize(self) -> Self {
        let l = self.length();
        Self(self.0 / l)
    }

    pub fn try_normalize(self) -> Option<Self> {
        let l = self.length();
        if l.is_finite() && l > 0.0 {
            Some(Self(self.0 / l))
        } else {
            None
        }
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.0.w, -self.0.x, -self.0.y, -self.0.z)
    }

    /// Rotation from pitch, roll and yaw in radians, composed as
    /// roll∘pitch∘yaw.
    pub fn from_euler(pitch: f64, roll: f64, yaw: f64) -> Self {
        let (sr, cr) = (roll / 2.0).sin_cos();
        let (sp, cp) = (pitch / 2.0).sin_cos();
        let (sy, cy) = (yaw / 2.0).sin_cos();

        let w = cr * cp * cy + sr * sp * sy;
        let x = sr * cp * cy - cr * sp * sy;
        let y = cr * sp * cy + sr * cp * sy;
        let z = cr * cp * sy - sr * sp * cy;
        Self::new(w, x, y, z)
    }

    /// Left-to-right difference: `first - rest[0] - rest[1] - ...`.
    pub fn difference(first: Quat, rest: impl IntoIterator<Item = Quat>) -> Quat {
        rest.into_iter().fold(first, |acc, q| acc - q)
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Quat {
    type Output = Quat;

    #[inline]
    fn add(self, rhs: Quat) -> Quat {
        Quat(self.0 + rhs.0)
    }
}

impl Sub for Quat {
    type Output = Quat;

    #[inline]
    fn sub(self, rhs: Quat) -> Quat {
        Quat(self.0 - rhs.0)
    }
}

impl Neg for Quat {
    type Output = Quat;

    #[inline]
    fn neg(self) -> Quat {
        Quat(-self.0)
    }
}

/// Hamilton product. Not commutative.
impl Mul for Quat {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        let (a, b) = (self.0, rhs.0);
        let w = a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z;
        let x = a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y;
        let y = a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z;
        let z = a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x;
        Quat::new(w, x, y, z)
    }
}

impl Mul<f64> for Quat {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: f64) -> Quat {
        self.scale(rhs)
    }
}

impl Sum for Quat {
    fn sum<I: Iterator<Item = Quat>>(iter: I) -> Quat {
        iter.fold(Quat::ZERO, |acc, q| acc + q)
    }
}

/// Left fold starting from the identity, so `[a, b, c]` is `(a * b) * c`.
impl Product for Quat {
    fn product<I: Iterator<Item = Quat>>(iter: I) -> Quat {
        iter.fold(Quat::IDENTITY, |acc, q| acc * q)
    }
}

/// Mirror `direction` about `normal`: `2n(n·d) - d`.
#[inline]
pub fn reflect(direction: Quat, normal: Quat) -> Quat {
    normal * 2.0 * normal.dot(direction) - direction
}
