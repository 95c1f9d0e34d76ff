use std::ops::{Add, Neg, Sub};

use serde::Deserialize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Vec3 {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    #[inline]
    pub fn unit(&self) -> Vec3 {
        self.scale(1.0 / self.len())
    }

    /// Mirror reflection of this vector about `normal`.
    #[inline]
    pub fn reflect(&self, normal: &Vec3) -> Vec3 {
        normal.scale(2.0 * self.dot(normal)) - *self
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, other: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, other: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[test]
fn dot_and_len() {
    let v = Vec3::new(3.0, 4.0, 0.0);

    assert_eq!(25.0, v.dot(&v));
    assert_eq!(5.0, v.len());
}

#[test]
fn unit_has_unit_length() {
    let v = Vec3::new(1.0, 2.0, 2.0).unit();

    assert!((v.len() - 1.0).abs() < 1e-12);
}

#[test]
fn reflect_about_axis() {
    let v = Vec3::new(1.0, -1.0, 0.0);
    let n = Vec3::new(0.0, 1.0, 0.0);

    assert_eq!(Vec3::new(-1.0, -1.0, 0.0), v.reflect(&n));
}

#[test]
fn reflect_preserves_aligned_vector() {
    let n = Vec3::new(0.0, 0.0, 1.0);

    assert_eq!(n, n.reflect(&n));
}
