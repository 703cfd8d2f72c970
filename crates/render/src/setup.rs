use bobsphere_common::Color3;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Free camera placement. The camera reads canvas input when `attach_control` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSetup {
    pub name: String,
    pub position: Vec3,
    pub target: Vec3,
    pub attach_control: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HemisphericLightSetup {
    pub name: String,
    pub direction: Vec3,
    pub intensity: f32,
    pub diffuse: Color3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotLightSetup {
    pub name: String,
    pub position: Vec3,
    pub direction: Vec3,
    /// Cone angle in radians.
    pub angle: f32,
    pub exponent: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadowSetup {
    pub map_size: u32,
    pub blur_exponential: bool,
    /// Mesh names that cast shadows.
    pub casters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSetup {
    pub name: String,
    pub diffuse: Option<Color3>,
    pub specular: Option<Color3>,
    /// Asset paths relative to the bundle's texture directory.
    pub diffuse_texture: Option<String>,
    pub bump_texture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereSetup {
    pub name: String,
    pub diameter: f32,
    pub segments: u32,
    pub material: MaterialSetup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundSetup {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub material: MaterialSetup,
    pub receive_shadows: bool,
}

/// Interpolate a light's diffuse color when a mesh is picked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickAction {
    pub mesh: String,
    pub light: String,
    pub target: Color3,
    pub duration_ms: f64,
}

/// Everything the engine must build before the first frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSetup {
    pub camera: CameraSetup,
    pub hemispheric_light: HemisphericLightSetup,
    pub spot_light: SpotLightSetup,
    pub shadows: ShadowSetup,
    pub sphere: SphereSetup,
    pub ground: GroundSetup,
    pub pick: PickAction,
}

impl Default for SceneSetup {
    fn default() -> Self {
        Self {
            camera: CameraSetup {
                name: "camera1".into(),
                position: Vec3::new(0.0, 18.0, -35.0),
                target: Vec3::ZERO,
                attach_control: true,
            },
            hemispheric_light: HemisphericLightSetup {
                name: "light".into(),
                direction: Vec3::Y,
                intensity: 0.7,
                diffuse: Color3::WHITE,
            },
            spot_light: SpotLightSetup {
                name: "spot1".into(),
                position: Vec3::new(0.0, 20.0, 20.0),
                direction: Vec3::new(0.0, -1.0, -1.0),
                angle: 1.2,
                exponent: 24.0,
            },
            shadows: ShadowSetup {
                map_size: 1024,
                blur_exponential: true,
                casters: vec!["sphere".into()],
            },
            sphere: SphereSetup {
                name: "sphere".into(),
                diameter: 2.0,
                segments: 32,
                material: MaterialSetup {
                    name: "silver".into(),
                    diffuse: Some(Color3::new(0.8, 0.8, 1.0)),
                    specular: Some(Color3::new(0.4, 0.4, 1.0)),
                    diffuse_texture: None,
                    bump_texture: None,
                },
            },
            ground: GroundSetup {
                name: "ground".into(),
                width: 64.0,
                height: 64.0,
                material: MaterialSetup {
                    name: "boue".into(),
                    diffuse: None,
                    specular: None,
                    diffuse_texture: Some("textures/floor.png".into()),
                    bump_texture: Some("textures/floor_bump.png".into()),
                },
                receive_shadows: true,
            },
            pick: PickAction {
                mesh: "sphere".into(),
                light: "light".into(),
                target: Color3::BLACK,
                duration_ms: bobsphere_kernel::PICK_FADE_MS,
            },
        }
    }
}

impl SceneSetup {
    /// Names of every mesh the setup creates.
    pub fn mesh_names(&self) -> [&str; 2] {
        [self.sphere.name.as_str(), self.ground.name.as_str()]
    }

    /// Shadow casters that do not name a mesh in this setup.
    pub fn unknown_casters(&self) -> Vec<&str> {
        let meshes = self.mesh_names();
        self.shadows
            .casters
            .iter()
            .map(String::as_str)
            .filter(|c| !meshes.contains(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_setup_matches_demo_scene() {
        let s = SceneSetup::default();
        assert_eq!(s.camera.position, Vec3::new(0.0, 18.0, -35.0));
        assert_eq!(s.hemispheric_light.intensity, 0.7);
        assert_eq!(s.shadows.map_size, 1024);
        assert_eq!(s.sphere.segments, 32);
        assert_eq!(s.ground.width, 64.0);
        assert!(s.ground.receive_shadows);
        assert_eq!(s.pick.duration_ms, 1000.0);
        assert_eq!(s.pick.target, Color3::BLACK);
    }

    #[test]
    fn default_casters_are_known() {
        assert!(SceneSetup::default().unknown_casters().is_empty());
    }

    #[test]
    fn stray_caster_reported() {
        let mut s = SceneSetup::default();
        s.shadows.casters.push("cube".into());
        assert_eq!(s.unknown_casters(), vec!["cube"]);
    }
}
