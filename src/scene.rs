use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::color::Color;
use crate::geometry::{Plane, SceneObject, Sphere};
use crate::light::Light;

/// Everything a render job looks at: background, objects, and lights.
///
/// Built once per job and read-only afterwards, so it can be shared across
/// threads tracing independent rays.
pub struct Scene {
    pub background: Color,
    pub objects: Vec<Box<dyn SceneObject>>,
    pub lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl Scene {
    /// Load a scene description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let value = serde_json::from_reader(file)?;

        Self::from_json(&value)
    }

    /// Build a scene from an already parsed JSON document.
    ///
    /// Objects are dispatched on their `"type"` tag; an unknown or missing
    /// tag is a load error rather than a silently dropped entry.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let mut scene = Scene::default();

        if let Some(background) = value.get("background") {
            scene.background = Deserialize::deserialize(background)?;
        }

        if let Some(objects) = value.get("objects") {
            let objects = objects
                .as_array()
                .ok_or("scene field `objects` is not an array")?;

            for object in objects {
                let object = match object["type"].as_str() {
                    Some("sphere") => {
                        let sphere: Sphere = Deserialize::deserialize(object)?;
                        Box::new(sphere) as Box<dyn SceneObject>
                    }
                    Some("plane") => {
                        let plane: Plane = Deserialize::deserialize(object)?;
                        Box::new(plane) as Box<dyn SceneObject>
                    }
                    Some(kind) => return Err(format!("unknown object type `{}`", kind).into()),
                    None => return Err("object entry is missing a `type` tag".into()),
                };

                scene.objects.push(object);
            }
        }

        if let Some(lights) = value.get("lights") {
            scene.lights = Deserialize::deserialize(lights)?;
        }

        Ok(scene)
    }
}

#[test]
fn default_scene_is_empty_on_black() {
    let scene = Scene::default();

    assert_eq!(Color::BLACK, scene.background);
    assert!(scene.objects.is_empty());
    assert!(scene.lights.is_empty());
}

#[test]
fn builds_from_a_json_document() {
    let scene = Scene::from_json(&serde_json::json!({
        "background": { "r": 0.1, "g": 0.2, "b": 0.3 },
        "objects": [
            {
                "type": "sphere",
                "center": { "x": 0.0, "y": 0.0, "z": 5.0 },
                "radius": 1.0,
                "material": { "color": { "r": 1.0, "g": 0.0, "b": 0.0 } }
            },
            {
                "type": "plane",
                "point": { "x": 0.0, "y": -1.0, "z": 0.0 },
                "normal": { "x": 0.0, "y": 1.0, "z": 0.0 },
                "material": { "color": { "r": 0.5, "g": 0.5, "b": 0.5 } }
            }
        ],
        "lights": [
            { "type": "ambient", "intensity": 0.2 }
        ]
    }))
    .unwrap();

    assert_eq!(Color::new(0.1, 0.2, 0.3, 1.0), scene.background);
    assert_eq!(2, scene.objects.len());
    assert_eq!(vec![Light::Ambient { intensity: 0.2 }], scene.lights);
}

#[test]
fn unknown_object_type_is_a_load_error() {
    let result = Scene::from_json(&serde_json::json!({
        "objects": [{ "type": "torus" }]
    }));

    assert!(result.err().unwrap().to_string().contains("torus"));
}
