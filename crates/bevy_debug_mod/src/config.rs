use bevy::asset::{AssetEvent, AssetLoadFailedEvent, AssetPlugin};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy_common_assets::toml::TomlAssetPlugin;
use serde::Deserialize;

/// User-tunable settings, read from `debugmod.toml` when an asset server is
/// available. Missing fields fall back to their defaults.
#[derive(Asset, Resource, TypePath, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DebugModConfig {
  /// Digits after the decimal point in the stat text.
  pub info_precision: usize,
  /// Free-cam displacement per frame, per held arrow key.
  pub camera_step: f32,
  /// Applied to `camera_step` while the fast modifier is held.
  pub fast_multiplier: f32,
  /// Outline thickness in world units, before parent scale compensation.
  pub outline_thickness: f32,
  pub outline_color: [f32; 4],
  /// Asset path of the outline image. When unset, sides are solid quads.
  pub hitbox_image: Option<String>,
  /// Colliders whose name starts with this are level geometry and skipped.
  pub geometry_prefix: String,
}

impl Default for DebugModConfig {
  fn default() -> Self {
    Self {
      info_precision: 1,
      camera_step: 0.1,
      fast_multiplier: 3.0,
      outline_thickness: 0.05,
      outline_color: [0.0, 1.0, 0.0, 1.0],
      hitbox_image: None,
      geometry_prefix: "GEO_Block".to_string(),
    }
  }
}

impl DebugModConfig {
  pub fn outline_color(&self) -> Color {
    let [r, g, b, a] = self.outline_color;
    Color::srgba(r, g, b, a)
  }
}

/// Key bindings. Not part of the TOML file; set them on the plugin.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugKeys {
  pub toggle_text: KeyCode,
  pub toggle_hitboxes: KeyCode,
  pub toggle_free_cam: KeyCode,
  pub fast: KeyCode,
  pub up: KeyCode,
  pub down: KeyCode,
  pub left: KeyCode,
  pub right: KeyCode,
}

impl Default for DebugKeys {
  fn default() -> Self {
    Self {
      toggle_text: KeyCode::F1,
      toggle_hitboxes: KeyCode::F2,
      toggle_free_cam: KeyCode::F3,
      fast: KeyCode::ShiftLeft,
      up: KeyCode::ArrowUp,
      down: KeyCode::ArrowDown,
      left: KeyCode::ArrowLeft,
      right: KeyCode::ArrowRight,
    }
  }
}

#[derive(Resource)]
struct ConfigHandle(Handle<DebugModConfig>);

#[derive(Resource)]
struct ConfigPath(String);

pub(crate) struct ConfigPlugin {
  pub path: Option<String>,
}

impl Plugin for ConfigPlugin {
  fn build(&self, app: &mut App) {
    app.init_resource::<DebugModConfig>();

    // Headless apps (tests, servers) run on the defaults or whatever the host
    // inserted up front.
    let Some(path) = self.path.clone() else {
      return;
    };
    if !app.is_plugin_added::<AssetPlugin>() {
      return;
    }

    app
      .add_plugins(TomlAssetPlugin::<DebugModConfig>::new(&["debugmod.toml"]))
      .insert_resource(ConfigPath(path))
      .add_systems(Startup, load_config)
      .add_systems(Update, (watch_config_changes, report_config_failure));
  }
}

fn load_config(mut commands: Commands, asset_server: Res<AssetServer>, path: Res<ConfigPath>) {
  let handle: Handle<DebugModConfig> = asset_server.load(path.0.clone());
  commands.insert_resource(ConfigHandle(handle));
}

fn watch_config_changes(
  mut commands: Commands,
  config_handle: Option<Res<ConfigHandle>>,
  mut messages: MessageReader<AssetEvent<DebugModConfig>>,
  configs: Res<Assets<DebugModConfig>>,
) {
  let Some(config_handle) = config_handle else {
    return;
  };

  for event in messages.read() {
    let (AssetEvent::LoadedWithDependencies { id } | AssetEvent::Modified { id }) = event else {
      continue;
    };
    if config_handle.0.id() != *id {
      continue;
    }
    if let Some(config) = configs.get(&config_handle.0) {
      info!("Debug mod config loaded");
      commands.insert_resource(config.clone());
    }
  }
}

fn report_config_failure(mut failures: MessageReader<AssetLoadFailedEvent<DebugModConfig>>) {
  for failure in failures.read() {
    warn!(
      "Failed to load debug mod config {}: {}, using defaults",
      failure.path, failure.error
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_file_keeps_defaults() {
    let config: DebugModConfig = toml::from_str(
      r#"
        info_precision = 2
        camera_step = 0.25
      "#,
    )
    .unwrap();

    assert_eq!(config.info_precision, 2);
    assert_eq!(config.camera_step, 0.25);
    assert_eq!(config.fast_multiplier, 3.0);
    assert_eq!(config.geometry_prefix, "GEO_Block");
    assert!(config.hitbox_image.is_none());
  }

  #[test]
  fn outline_color_reads_rgba() {
    let config = DebugModConfig {
      outline_color: [1.0, 0.0, 0.0, 0.5],
      ..default()
    };
    assert_eq!(config.outline_color(), Color::srgba(1.0, 0.0, 0.0, 0.5));
  }
}
