mod config;
mod core;
mod hud;
mod input;
mod level;
mod player;

use bevy::{
  prelude::*,
  window::{PresentMode, WindowResolution},
};
use bevy_debug_mod::DebugModPlugin;

fn main() {
  let config_str =
    std::fs::read_to_string("assets/config/game.config.toml").expect("Failed to read config file");

  let config: config::GameConfig = toml::from_str(&config_str).expect("Failed to parse config");

  App::new()
    .add_plugins(
      DefaultPlugins
        .set(ImagePlugin::default_nearest())
        .set(WindowPlugin {
          primary_window: Some(Window {
            resolution: WindowResolution::new(config.window.width, config.window.height),
            title: config.window.title.clone(),
            present_mode: PresentMode::AutoVsync,
            ..default()
          }),
          ..default()
        }),
    )
    .add_plugins(config::ConfigPlugin)
    .add_plugins(core::CorePlugin)
    .add_plugins(input::InputPlugin)
    .add_plugins((player::PlayerPlugin, level::LevelPlugin, hud::HudPlugin))
    .add_plugins(DebugModPlugin::default())
    .run();
}
