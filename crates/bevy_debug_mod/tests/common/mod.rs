//! Shared setup for the overlay e2e tests.
#![allow(dead_code)]

use bevy::prelude::*;
use bevy_debug_mod::{
  DebugModPlugin, FervourBarUi, HitboxOutline, Player, PlayerStats, PurgePointsUi, StatPair,
};

/// Headless app with the overlay and nothing else.
pub fn overlay_app() -> App {
  let mut app = App::new();
  app
    .add_plugins(MinimalPlugins)
    .add_plugins(DebugModPlugin::default());
  app.update();
  app
}

/// Presses `key` for exactly one frame.
pub fn tap(app: &mut App, key: KeyCode) {
  app
    .world_mut()
    .resource_mut::<ButtonInput<KeyCode>>()
    .press(key);
  app.update();
  release(app, key);
}

pub fn hold(app: &mut App, key: KeyCode) {
  app
    .world_mut()
    .resource_mut::<ButtonInput<KeyCode>>()
    .press(key);
}

/// Releases `key` and drops this frame's edges, like the input plugin does
/// between frames.
pub fn release(app: &mut App, key: KeyCode) {
  let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
  input.release(key);
  input.clear();
}

pub fn outline_count(app: &mut App) -> usize {
  app
    .world_mut()
    .query_filtered::<Entity, With<HitboxOutline>>()
    .iter(app.world())
    .count()
}

/// Spawns a HUD shaped like the game's: the purge points counter with its
/// text as second child, and the fervour bar container.
pub fn spawn_hud(app: &mut App) -> Entity {
  let world = app.world_mut();
  world.spawn((
    Name::new("PurgePoints"),
    PurgePointsUi,
    Node::default(),
    children![
      (Name::new("Icon"), Node::default()),
      (
        Name::new("Counter"),
        Text::new("0"),
        TextFont {
          font_size: 14.0,
          ..default()
        },
      ),
    ],
  ));
  world
    .spawn((Name::new("Fervour Bar"), FervourBarUi, Node::default()))
    .id()
}

pub fn spawn_player(app: &mut App, position: Vec2) -> Entity {
  app
    .world_mut()
    .spawn((
      Player,
      Transform::from_translation(position.extend(0.0)),
      PlayerStats {
        life: StatPair {
          current: 75.0,
          max: 100.0,
        },
        fervour: StatPair {
          current: 12.5,
          max: 30.0,
        },
      },
    ))
    .id()
}
