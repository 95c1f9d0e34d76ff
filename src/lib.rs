pub mod color;
pub mod geometry;
pub mod light;
pub mod material;
pub mod ray;
pub mod scene;
pub mod tracer;
pub mod vec3;

pub use crate::color::Color;
pub use crate::geometry::{Plane, SceneObject, Sphere};
pub use crate::light::Light;
pub use crate::material::Material;
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::tracer::{RayTracer, RenderParameters};
pub use crate::vec3::Vec3;
