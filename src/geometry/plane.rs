use serde::Deserialize;

use crate::geometry::SceneObject;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Infinite plane given by a point on it and its orientation.
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal,
            material,
        }
    }
}

impl SceneObject for Plane {
    fn intersect_ray(&self, ray: &Ray) -> (Option<f64>, Option<f64>) {
        let denominator = self.normal.dot(&ray.direction());

        // A ray parallel to the plane never crosses it.
        if denominator.abs() < 1e-6 {
            return (None, None);
        }

        let distance = (self.point - ray.origin()).dot(&self.normal) / denominator;

        (Some(distance), None)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal.unit()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[test]
fn intersects_at_the_expected_distance() {
    let plane = Plane::new(
        Vec3::default(),
        Vec3::new(0.0, 1.0, 0.0),
        Material::default(),
    );
    let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

    assert_eq!((Some(4.0), None), plane.intersect_ray(&ray));
}

#[test]
fn parallel_ray_never_hits() {
    let plane = Plane::new(
        Vec3::default(),
        Vec3::new(0.0, 1.0, 0.0),
        Material::default(),
    );
    let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

    assert_eq!((None, None), plane.intersect_ray(&ray));
}

#[test]
fn normal_is_normalized() {
    let plane = Plane::new(
        Vec3::default(),
        Vec3::new(0.0, 0.0, 3.0),
        Material::default(),
    );

    assert_eq!(
        Vec3::new(0.0, 0.0, 1.0),
        plane.normal_at(Vec3::new(5.0, 5.0, 0.0))
    );
}
