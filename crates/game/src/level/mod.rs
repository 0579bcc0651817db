//! Sandbox levels. `PageDown` cycles through the configured levels, writing
//! the transition messages the debug overlay listens for.

mod platforms;

use bevy::prelude::*;
use bevy_debug_mod::{CurrentLevel, DebugModSystems, LevelLoaded, LevelUnloaded, Player};
pub use platforms::{LevelRoot, spawn_level};

use crate::config::ConfigLoaded;

const NEXT_LEVEL_KEY: KeyCode = KeyCode::PageDown;

#[derive(Resource, Default)]
pub struct LevelIndex(pub usize);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<LevelIndex>()
      .init_resource::<CurrentLevel>()
      .add_systems(Startup, load_first_level)
      .add_systems(Update, cycle_level.before(DebugModSystems::Lifecycle));
  }
}

fn load_first_level(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  mut current: ResMut<CurrentLevel>,
  mut loaded: MessageWriter<LevelLoaded>,
) {
  let Some(level) = config.levels.first() else {
    warn!("No levels configured");
    return;
  };

  spawn_level(&mut commands, level);
  current.name.clone_from(&level.name);
  loaded.write(LevelLoaded {
    old: String::new(),
    new: level.name.clone(),
  });
  info!("Loaded level {}", level.name);
}

#[allow(clippy::too_many_arguments)]
fn cycle_level(
  mut commands: Commands,
  keys: Res<ButtonInput<KeyCode>>,
  config: Res<ConfigLoaded>,
  mut index: ResMut<LevelIndex>,
  mut current: ResMut<CurrentLevel>,
  roots: Query<Entity, With<LevelRoot>>,
  mut players: Query<&mut Transform, With<Player>>,
  mut unloaded: MessageWriter<LevelUnloaded>,
  mut loaded: MessageWriter<LevelLoaded>,
) {
  if !keys.just_pressed(NEXT_LEVEL_KEY) || config.levels.is_empty() {
    return;
  }

  index.0 = (index.0 + 1) % config.levels.len();
  let level = &config.levels[index.0];
  let old = std::mem::replace(&mut current.name, level.name.clone());

  for root in &roots {
    commands.entity(root).despawn();
  }
  unloaded.write(LevelUnloaded {
    old: old.clone(),
    new: level.name.clone(),
  });

  spawn_level(&mut commands, level);
  for mut transform in &mut players {
    transform.translation.x = config.player.spawn_x;
    transform.translation.y = config.player.spawn_y;
  }
  loaded.write(LevelLoaded {
    old,
    new: level.name.clone(),
  });
  info!("Loaded level {}", level.name);
}
