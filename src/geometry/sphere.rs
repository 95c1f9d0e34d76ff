use serde::Deserialize;

use crate::geometry::SceneObject;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl SceneObject for Sphere {
    fn intersect_ray(&self, ray: &Ray) -> (Option<f64>, Option<f64>) {
        let oc = ray.origin() - self.center;
        let direction = ray.direction();

        let a = direction.dot(&direction);
        let b = 2.0 * oc.dot(&direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return (None, None);
        }

        let sqrt = discriminant.sqrt();
        let denominator = 2.0 * a;

        let near = (-b - sqrt) / denominator;
        let far = (-b + sqrt) / denominator;

        (Some(near), Some(far))
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).unit()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
use crate::color::Color;

#[test]
fn roots_come_back_near_first() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default());
    let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));

    assert_eq!((Some(4.0), Some(6.0)), sphere.intersect_ray(&ray));
}

#[test]
fn missing_ray_has_no_roots() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default());
    let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 1.0, 0.0));

    assert_eq!((None, None), sphere.intersect_ray(&ray));
}

#[test]
fn normal_points_away_from_the_center() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, Material::default());

    assert_eq!(
        Vec3::new(0.0, 0.0, -1.0),
        sphere.normal_at(Vec3::new(0.0, 0.0, 3.0))
    );
}

#[test]
fn deserializes_with_material() {
    let sphere: Sphere = serde_json::from_value(serde_json::json!({
        "center": { "x": 0.0, "y": 1.0, "z": 2.0 },
        "radius": 3.0,
        "material": {
            "color": { "r": 1.0, "g": 0.0, "b": 0.0 },
            "specular_exponent": 50.0,
            "reflective": 0.5
        }
    }))
    .unwrap();

    assert_eq!(Vec3::new(0.0, 1.0, 2.0), sphere.center);
    assert_eq!(3.0, sphere.radius);
    assert_eq!(
        Material::new(Color::new(1.0, 0.0, 0.0, 1.0), 50.0, 0.5),
        sphere.material
    );
}
