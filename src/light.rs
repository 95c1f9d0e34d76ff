use serde::Deserialize;

use crate::vec3::Vec3;

/// Light source variants.
///
/// A closed set, unlike the scene objects: the shading routine matches
/// exhaustively, so adding a variant forces every use site to handle it.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    /// Uniform base illumination with no direction and no shadowing.
    Ambient { intensity: f64 },

    /// Parallel rays along a fixed direction, pointing toward the light.
    Directional { intensity: f64, direction: Vec3 },

    /// Omnidirectional emitter at a fixed position.
    Point { intensity: f64, position: Vec3 },
}

impl Light {
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. } => intensity,
        }
    }
}

#[test]
fn deserializes_tagged_variants() {
    let lights: Vec<Light> = serde_json::from_value(serde_json::json!([
        { "type": "ambient", "intensity": 0.2 },
        { "type": "directional", "intensity": 0.4, "direction": { "x": 0.0, "y": 1.0, "z": 0.0 } },
        { "type": "point", "intensity": 0.6, "position": { "x": 1.0, "y": 2.0, "z": 3.0 } }
    ]))
    .unwrap();

    assert_eq!(
        vec![
            Light::Ambient { intensity: 0.2 },
            Light::Directional {
                intensity: 0.4,
                direction: Vec3::new(0.0, 1.0, 0.0),
            },
            Light::Point {
                intensity: 0.6,
                position: Vec3::new(1.0, 2.0, 3.0),
            },
        ],
        lights
    );
}

#[test]
fn intensity_is_variant_independent() {
    let light = Light::Point {
        intensity: 0.75,
        position: Vec3::default(),
    };

    assert_eq!(0.75, light.intensity());
}
