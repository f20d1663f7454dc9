//! Scene configuration loaded from TOML.

use meshmath::math::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub center: [f32; 3],
    pub up: [f32; 3],
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 3.0],
            center: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Axis the model spins around; normalized when the matrix is built.
    pub rotation_axis: [f32; 3],
    /// Radians per second.
    pub rotation_speed: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { rotation_axis: [0.7071068, 0.7071068, 0.0], rotation_speed: 0.5 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub viewport: ViewportConfig,
    pub model: ModelConfig,
}

impl SceneConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    // Degenerate values would not fail later, they would silently produce NaN matrices.
    fn check(&self) -> Result<(), ConfigError> {
        let c = &self.camera;
        if !(c.near > 0.0 && c.near < c.far) {
            return Err(ConfigError::Invalid(format!("need 0 < near < far, got near={} far={}", c.near, c.far)));
        }
        let forward = Vec3::from(c.eye) - Vec3::from(c.center);
        if forward.length_squared() == 0.0 {
            return Err(ConfigError::Invalid("camera eye and center must differ".to_string()));
        }
        if cross(Vec3::from(c.up), forward).length_squared() == 0.0 {
            return Err(ConfigError::Invalid("camera up must not be parallel to the view direction".to_string()));
        }
        if !(c.fov_y_degrees > 0.0 && c.fov_y_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!("fov_y_degrees must be in (0, 180), got {}", c.fov_y_degrees)));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid("viewport must not be empty".to_string()));
        }
        if Vec3::from(self.model.rotation_axis).length_squared() == 0.0 {
            return Err(ConfigError::Invalid("rotation_axis must not be zero".to_string()));
        }
        if !self.model.rotation_speed.is_finite() {
            return Err(ConfigError::Invalid(format!("rotation_speed must be finite, got {}", self.model.rotation_speed)));
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.viewport.width as f32 / self.viewport.height as f32
    }

    /// `(x, y, width, height)` as `project` expects it.
    pub fn viewport(&self) -> Vec4 {
        Vec4::new(0.0, 0.0, self.viewport.width as f32, self.viewport.height as f32)
    }

    /// Model rotation after `seconds` of spinning at `rotation_speed`.
    pub fn model_matrix(&self, seconds: f32) -> Mat44 {
        Mat44::rotation(self.model.rotation_axis.into(), self.model.rotation_speed * seconds)
    }

    pub fn view_matrix(&self) -> Mat44 {
        let c = &self.camera;
        Mat44::look_at(c.eye.into(), c.center.into(), c.up.into())
    }

    pub fn projection_matrix(&self) -> Mat44 {
        let c = &self.camera;
        Mat44::perspective(deg2rad(c.fov_y_degrees), self.aspect_ratio(), c.near, c.far)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_matches_demo_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.camera.eye, [0.0, 0.0, 3.0]);
        assert_eq!(config.aspect_ratio(), 800.0 / 600.0);
        assert_eq!(config.projection_matrix(), Mat44::perspective(deg2rad(45.0), 800.0 / 600.0, 0.1, 100.0));
        assert_eq!(config.model_matrix(0.0), Mat44::identity());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SceneConfig::from_toml(
            r#"
            [camera]
            eye = [1.0, 2.0, 5.0]

            [viewport]
            width = 1024
            "#,
        )
        .unwrap();
        assert_eq!(config.camera.eye, [1.0, 2.0, 5.0]);
        assert_eq!(config.camera.fov_y_degrees, 45.0);
        assert_eq!(config.viewport.width, 1024);
        assert_eq!(config.viewport.height, 600);
        assert_eq!(config.model, ModelConfig::default());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = SceneConfig::default();
        config.camera.far = 250.0;
        let text = config.to_toml().unwrap();
        assert_eq!(SceneConfig::from_toml(&text).unwrap(), config);
    }

    #[rstest]
    #[case("[camera]\nnear = 0.0")]
    #[case("[camera]\nnear = 10.0\nfar = 1.0")]
    #[case("[camera]\nfov_y_degrees = 180.0")]
    #[case("[viewport]\nheight = 0")]
    #[case("[model]\nrotation_axis = [0.0, 0.0, 0.0]")]
    #[case("[model]\nrotation_speed = nan")]
    #[case("[camera]\neye = [0.0, 0.0, 0.0]")]
    #[case("[camera]\neye = [1.0, 2.0, 3.0]\ncenter = [1.0, 2.0, 3.0]")]
    #[case("[camera]\neye = [0.0, 3.0, 0.0]")]
    #[case("[camera]\nup = [0.0, 0.0, -2.0]")]
    fn rejects_degenerate_values(#[case] text: &str) {
        assert!(matches!(SceneConfig::from_toml(text), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn model_spins_at_configured_speed() {
        let mut config = SceneConfig::default();
        config.model.rotation_axis = [0.0, 0.0, 1.0];
        config.model.rotation_speed = 2.0;
        assert_eq!(config.model_matrix(0.25), Mat44::rotation(Vec3::Z, 0.5));
        assert_eq!(config.model_matrix(0.0), Mat44::identity());

        config.model.rotation_speed = 0.0;
        assert_eq!(config.model_matrix(10.0), Mat44::identity());
    }

    #[test]
    fn dumped_default_reloads() {
        let text = SceneConfig::default().to_toml().unwrap();
        assert!(text.contains("[camera]"));
        assert!(text.contains("rotation_speed"));
        assert_eq!(SceneConfig::from_toml(&text).unwrap(), SceneConfig::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(SceneConfig::from_toml("[camera\neye = 1"), Err(ConfigError::Parse(_))));
        assert!(matches!(SceneConfig::from_toml("[camera]\neye = \"up\""), Err(ConfigError::Parse(_))));
    }
}
