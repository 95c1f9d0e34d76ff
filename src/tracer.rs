use crate::color::Color;
use crate::light::Light;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vec3::Vec3;

/// Per-job tracing knobs.
#[derive(Copy, Clone, Debug)]
pub struct RenderParameters {
    /// Maximum number of reflection bounces per primary ray.
    pub reflection_depth: u32,

    /// Valid intersection distance range for primary and reflected rays.
    pub min_distance: f64,
    pub max_distance: f64,

    /// Lower distance bound for shadow rays; keeps a surface from occluding
    /// itself at its own origin point.
    pub shadow_bias: f64,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            reflection_depth: 2,
            min_distance: 1.0e-3,
            max_distance: 1.0e20,
            shadow_bias: 1.0e-5,
        }
    }
}

/// Whitted-style recursive ray tracer.
///
/// Borrows the scene read-only and mutates nothing, so one tracer can be
/// shared across threads shading independent rays.
pub struct RayTracer<'a> {
    scene: &'a Scene,
    parameters: RenderParameters,
}

impl<'a> RayTracer<'a> {
    pub fn new(scene: &'a Scene, parameters: RenderParameters) -> Self {
        Self { scene, parameters }
    }

    /// Color visible along `ray`, with up to `reflection_depth` bounces.
    pub fn trace(&self, ray: &Ray) -> Color {
        self.trace_limited(ray, self.parameters.reflection_depth)
    }

    fn trace_limited(&self, ray: &Ray, remaining_depth: u32) -> Color {
        let hit = ray.closest_object(
            &self.scene.objects,
            self.parameters.min_distance,
            self.parameters.max_distance,
        );

        let (object, distance) = match hit {
            Some(hit) => hit,
            None => return self.scene.background,
        };

        let point = ray.point_at(distance);
        let normal = object.normal_at(point);
        let view = -ray.direction();

        let intensity = self.light_intensity(point, normal, view, object.material().specular_exponent);
        let local = object.material().color.with_intensity(intensity);

        if remaining_depth == 0 {
            return local;
        }

        let reflected_ray = Ray::new(point, view.reflect(&normal));
        let reflected = self.trace_limited(&reflected_ray, remaining_depth - 1);

        let reflective = object.material().reflective;

        local.with_intensity(1.0 - reflective) + reflected.with_intensity(reflective)
    }

    fn light_intensity(&self, point: Vec3, normal: Vec3, view: Vec3, specular_exponent: f64) -> f64 {
        self.scene
            .lights
            .iter()
            .map(|light| self.light_contribution(light, point, normal, view, specular_exponent))
            .sum()
    }

    fn light_contribution(
        &self,
        light: &Light,
        point: Vec3,
        normal: Vec3,
        view: Vec3,
        specular_exponent: f64,
    ) -> f64 {
        let (intensity, direction) = match *light {
            Light::Ambient { intensity } => return intensity,
            Light::Directional { intensity, direction } => (intensity, direction),
            Light::Point { intensity, position } => (intensity, position - point),
        };

        let shadow_ray = Ray::new(point, direction);
        if shadow_ray.has_intersection(
            &self.scene.objects,
            self.parameters.shadow_bias,
            self.parameters.max_distance,
        ) {
            return 0.0;
        }

        let mut contribution = 0.0;

        // Diffuse. The divisor uses the hit point's distance from the world
        // origin, not the light vector's length.
        let nl = normal.dot(&direction);
        if nl > 0.0 {
            contribution += intensity * nl / (normal.len() * point.len());
        }

        // Specular.
        let light_reflection = direction.reflect(&normal);
        let rv = light_reflection.dot(&view);
        if rv > 0.0 {
            contribution +=
                intensity * (rv / (light_reflection.len() * view.len())).powf(specular_exponent);
        }

        contribution
    }
}

#[cfg(test)]
use crate::geometry::{Plane, SceneObject, Sphere};
#[cfg(test)]
use crate::material::Material;

#[cfg(test)]
fn sphere(center: Vec3, radius: f64, material: Material) -> Box<dyn SceneObject> {
    Box::new(Sphere::new(center, radius, material))
}

#[cfg(test)]
fn plane(point: Vec3, normal: Vec3, material: Material) -> Box<dyn SceneObject> {
    Box::new(Plane::new(point, normal, material))
}

#[cfg(test)]
fn matte(color: Color) -> Material {
    Material::new(color, 1.0, 0.0)
}

#[cfg(test)]
fn mirror(color: Color, reflective: f64) -> Material {
    Material::new(color, 1.0, reflective)
}

#[cfg(test)]
fn parameters(reflection_depth: u32) -> RenderParameters {
    RenderParameters {
        reflection_depth,
        ..RenderParameters::default()
    }
}

#[cfg(test)]
const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

#[cfg(test)]
const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

#[test]
fn empty_scene_yields_the_background() {
    let scene = Scene {
        background: Color::new(0.1, 0.2, 0.3, 1.0),
        ..Scene::default()
    };
    let tracer = RayTracer::new(&scene, parameters(3));

    for direction in [
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, 2.0, -3.0),
    ] {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), direction);

        assert_eq!(scene.background, tracer.trace(&ray));
    }
}

#[test]
fn ambient_light_shades_unconditionally() {
    let scene = Scene {
        objects: vec![sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, matte(RED))],
        lights: vec![Light::Ambient { intensity: 0.4 }],
        ..Scene::default()
    };
    let tracer = RayTracer::new(&scene, parameters(0));
    let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));

    assert_eq!(RED.with_intensity(0.4), tracer.trace(&ray));
}

#[test]
fn zero_depth_returns_the_local_color_even_for_a_perfect_mirror() {
    let scene = Scene {
        objects: vec![plane(
            Vec3::default(),
            Vec3::new(0.0, 0.0, 1.0),
            mirror(RED, 1.0),
        )],
        lights: vec![Light::Ambient { intensity: 1.0 }],
        ..Scene::default()
    };
    let tracer = RayTracer::new(&scene, parameters(0));
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    assert_eq!(RED, tracer.trace(&ray));
}

#[test]
fn reflection_depth_bounds_the_bounce_count() {
    // Two facing mirrors in different colors: the returned color names the
    // surface reached by the last permitted bounce.
    let scene = Scene {
        objects: vec![
            plane(Vec3::default(), Vec3::new(0.0, 0.0, 1.0), mirror(RED, 1.0)),
            plane(
                Vec3::new(0.0, 0.0, 10.0),
                Vec3::new(0.0, 0.0, -1.0),
                mirror(BLUE, 1.0),
            ),
        ],
        lights: vec![Light::Ambient { intensity: 1.0 }],
        ..Scene::default()
    };
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    for (depth, expected) in [(0, RED), (1, BLUE), (2, RED), (3, BLUE)] {
        let tracer = RayTracer::new(&scene, parameters(depth));

        assert_eq!(expected, tracer.trace(&ray));
    }
}

#[test]
fn occluded_light_contributes_nothing() {
    // A sphere sits on the segment between the shaded plane point (2, 0, 0)
    // and the light, off the primary ray's path.
    let scene = Scene {
        objects: vec![
            plane(Vec3::default(), Vec3::new(0.0, 0.0, 1.0), matte(RED)),
            sphere(Vec3::new(1.0, 0.0, 2.5), 0.5, matte(BLUE)),
        ],
        lights: vec![Light::Point {
            intensity: 1.0,
            position: Vec3::new(0.0, 0.0, 5.0),
        }],
        ..Scene::default()
    };
    let tracer = RayTracer::new(&scene, parameters(0));
    let ray = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    assert_eq!(RED.with_intensity(0.0), tracer.trace(&ray));
}

#[test]
fn unoccluded_directional_light_adds_diffuse_and_specular() {
    let scene = Scene {
        objects: vec![plane(
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(0.0, 0.0, 1.0),
            matte(RED),
        )],
        lights: vec![Light::Directional {
            intensity: 0.8,
            direction: Vec3::new(0.0, 0.0, 1.0),
        }],
        ..Scene::default()
    };
    let tracer = RayTracer::new(&scene, parameters(0));
    // Hits the plane at (0, 4, -3), a point at distance 5 from the origin.
    let ray = Ray::new(Vec3::new(0.0, 4.0, 2.0), Vec3::new(0.0, 0.0, -1.0));

    // Diffuse 0.8 * 1 / (1 * 5), plus the full 0.8 from the specular term
    // since the light's reflection lines up with the view exactly.
    assert_eq!(RED.with_intensity(0.8 / 5.0 + 0.8), tracer.trace(&ray));
}

#[test]
fn blend_weights_follow_the_reflective_coefficient() {
    let background = Color::new(0.0, 0.5, 1.0, 1.0);
    let scene = Scene {
        background,
        objects: vec![plane(
            Vec3::default(),
            Vec3::new(0.0, 0.0, 1.0),
            mirror(RED, 0.25),
        )],
        lights: vec![Light::Ambient { intensity: 1.0 }],
    };
    let tracer = RayTracer::new(&scene, parameters(1));
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    // The bounce leaves the plane and escapes to the background.
    let expected = RED.with_intensity(0.75) + background.with_intensity(0.25);

    assert_eq!(expected, tracer.trace(&ray));
}

#[test]
fn diffuse_sphere_ignores_the_recursion_budget() {
    let material = Material::new(RED, 10.0, 0.0);
    let scene = Scene {
        objects: vec![sphere(Vec3::default(), 1.0, material)],
        lights: vec![Light::Directional {
            intensity: 0.6,
            direction: Vec3::new(0.0, 0.0, 1.0),
        }],
        ..Scene::default()
    };
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    // Nearest hit at distance 4, point (0, 0, 1), normal (0, 0, 1). Diffuse
    // and specular each contribute the full 0.6 there, and with a
    // reflectivity of zero the recursive term is weighted out entirely.
    let expected = RED.with_intensity(0.6 + 0.6);

    for depth in [0, 1, 5] {
        let tracer = RayTracer::new(&scene, parameters(depth));

        assert_eq!(expected, tracer.trace(&ray));
    }
}

#[test]
fn light_behind_the_surface_adds_nothing() {
    // The directional light comes from behind the plane: no occlusion, but
    // both the diffuse and the specular products turn out negative.
    let scene = Scene {
        objects: vec![plane(Vec3::default(), Vec3::new(0.0, 0.0, 1.0), matte(RED))],
        lights: vec![Light::Directional {
            intensity: 0.9,
            direction: Vec3::new(0.0, 0.0, -1.0),
        }],
        ..Scene::default()
    };
    let tracer = RayTracer::new(&scene, parameters(0));
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    assert_eq!(RED.with_intensity(0.0), tracer.trace(&ray));
}
