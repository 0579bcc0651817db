mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::ConfigPlugin;
use serde::{Deserialize, Deserializer, de};

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub player: PlayerConfig,
  pub levels: Vec<LevelConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub viewport_width: f32,
  pub viewport_height: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn_x: f32,
  pub spawn_y: f32,
  pub walk_speed: f32,
  pub size: [f32; 2],
  pub max_life: f32,
  pub max_fervour: f32,
  /// Fervour regained per second.
  pub fervour_regen: f32,
  #[serde(deserialize_with = "deserialize_hex_color")]
  pub color: [f32; 3],
}

#[derive(Deserialize, Debug, Clone)]
pub struct LevelConfig {
  pub name: String,
  pub seed: u64,
  pub platforms: u32,
  pub enemies: u32,
  pub floor_width: f32,
  #[serde(deserialize_with = "deserialize_hex_color")]
  pub color: [f32; 3],
}

fn deserialize_hex_color<'de, D>(deserializer: D) -> Result<[f32; 3], D::Error>
where
  D: Deserializer<'de>,
{
  let s: String = Deserialize::deserialize(deserializer)?;
  let s = s.trim_start_matches('#');
  if s.len() != 6 {
    return Err(de::Error::custom("hex color must be 6 characters"));
  }
  let r = u8::from_str_radix(&s[0..2], 16).map_err(de::Error::custom)?;
  let g = u8::from_str_radix(&s[2..4], 16).map_err(de::Error::custom)?;
  let b = u8::from_str_radix(&s[4..6], 16).map_err(de::Error::custom)?;
  Ok([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub player: PlayerConfig,
  pub levels: Vec<LevelConfig>,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      camera: config.camera,
      player: config.player,
      levels: config.levels,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_config_parses() {
    let config: GameConfig =
      toml::from_str(include_str!("../../assets/config/game.config.toml")).unwrap();

    assert!(!config.levels.is_empty());
    assert!(config.levels.iter().all(|level| level.floor_width > 0.0));
  }

  #[test]
  fn hex_colors_are_normalized() {
    let level: LevelConfig = toml::from_str(
      r##"
        name = "Test"
        seed = 1
        platforms = 0
        enemies = 0
        floor_width = 10.0
        color = "#ff0080"
      "##,
    )
    .unwrap();

    assert_eq!(level.color, [1.0, 0.0, 128.0 / 255.0]);
  }

  #[test]
  fn short_hex_color_is_rejected() {
    let result: Result<LevelConfig, _> = toml::from_str(
      r##"
        name = "Test"
        seed = 1
        platforms = 0
        enemies = 0
        floor_width = 10.0
        color = "#fff"
      "##,
    );

    assert!(result.is_err());
  }
}
