use crate::geometry::SceneObject;
use crate::vec3::Vec3;

/// Half-line `origin + t * direction`, parametrized by distance `t`.
///
/// The direction is kept as given; distances are expressed in multiples of
/// its length.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point along the ray at the given distance.
    #[inline]
    pub fn point_at(&self, distance: f64) -> Vec3 {
        self.origin + self.direction.scale(distance)
    }

    /// Nearest object intersected within `[min_distance, max_distance]`,
    /// with its hit distance.
    ///
    /// Per object only the smallest admissible root counts; roots below
    /// `min_distance` are discarded outright, which keeps a surface from
    /// hitting itself at distance zero.
    pub fn closest_object<'a>(
        &self,
        objects: &'a [Box<dyn SceneObject>],
        min_distance: f64,
        max_distance: f64,
    ) -> Option<(&'a dyn SceneObject, f64)> {
        let mut nearest = f64::INFINITY;
        let mut closest = None;

        for object in objects {
            if let Some(distance) = self.first_hit(object.as_ref(), min_distance, max_distance) {
                if distance < nearest {
                    nearest = distance;
                    closest = Some((object.as_ref(), distance));
                }
            }
        }

        closest
    }

    /// Any-hit query, used for shadow rays.
    pub fn has_intersection(
        &self,
        objects: &[Box<dyn SceneObject>],
        min_distance: f64,
        max_distance: f64,
    ) -> bool {
        objects
            .iter()
            .any(|object| self.first_hit(object.as_ref(), min_distance, max_distance).is_some())
    }

    fn first_hit(&self, object: &dyn SceneObject, min_distance: f64, max_distance: f64) -> Option<f64> {
        let (first, second) = object.intersect_ray(self);

        let admissible = |root: &&f64| **root >= min_distance && **root <= max_distance;

        match (first.as_ref().filter(admissible), second.as_ref().filter(admissible)) {
            (Some(a), Some(b)) => Some(a.min(*b)),
            (Some(a), None) => Some(*a),
            (None, Some(b)) => Some(*b),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
use crate::material::Material;
#[cfg(test)]
use crate::{Color, Sphere};

#[cfg(test)]
fn plain_sphere(center: Vec3, radius: f64) -> Box<dyn SceneObject> {
    Box::new(Sphere::new(
        center,
        radius,
        Material::new(Color::BLACK, 1.0, 0.0),
    ))
}

#[test]
fn point_at_walks_the_direction() {
    let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));

    assert_eq!(Vec3::new(1.0, 6.0, 0.0), ray.point_at(3.0));
}

#[test]
fn closest_object_picks_the_nearest_hit() {
    let objects = vec![
        plain_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0),
        plain_sphere(Vec3::new(0.0, 0.0, 4.0), 1.0),
    ];
    let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));

    let (_, distance) = ray.closest_object(&objects, 0.001, 1.0e20).unwrap();

    assert_eq!(3.0, distance);
}

#[test]
fn closest_object_skips_roots_below_the_lower_bound() {
    // The origin sits inside the sphere, so the near root lies behind the
    // lower bound and the far root must win.
    let objects = vec![plain_sphere(Vec3::default(), 2.0)];
    let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));

    let (_, distance) = ray.closest_object(&objects, 0.001, 1.0e20).unwrap();

    assert_eq!(2.0, distance);
}

#[test]
fn closest_object_respects_the_upper_bound() {
    let objects = vec![plain_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0)];
    let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));

    assert!(ray.closest_object(&objects, 0.001, 5.0).is_none());
}

#[test]
fn has_intersection_matches_closest_object() {
    let objects = vec![plain_sphere(Vec3::new(0.0, 0.0, 4.0), 1.0)];
    let toward = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));
    let away = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, -1.0));

    assert!(toward.has_intersection(&objects, 0.001, 1.0e20));
    assert!(!away.has_intersection(&objects, 0.001, 1.0e20));
}
