use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

mod plane;
mod sphere;

pub use self::plane::Plane;
pub use self::sphere::Sphere;

/// Surface a ray can intersect.
///
/// The set of shapes is open-ended; anything that can report its
/// intersection roots and a surface normal qualifies.
pub trait SceneObject: Sync {
    /// Near and far intersection roots along the ray, when they exist.
    ///
    /// Roots are raw distances; range filtering belongs to the caller.
    fn intersect_ray(&self, ray: &Ray) -> (Option<f64>, Option<f64>);

    /// Unit outward normal at `point`.
    ///
    /// Only meaningful for points on the surface; the tracer calls it with
    /// established intersection points exclusively.
    fn normal_at(&self, point: Vec3) -> Vec3;

    fn material(&self) -> &Material;
}
