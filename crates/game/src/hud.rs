//! Minimal HUD with the elements the debug overlay anchors to.

use bevy::prelude::*;
use bevy_debug_mod::{FervourBarUi, Player, PlayerStats, PurgePointsUi};

#[derive(Component)]
struct PurgePointsCounter;

#[derive(Component)]
struct FervourFill;

pub struct HudPlugin;

impl Plugin for HudPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Startup, spawn_hud)
      .add_systems(Update, update_fervour_fill);
  }
}

fn spawn_hud(mut commands: Commands) {
  commands.spawn((
    Name::new("PurgePoints"),
    PurgePointsUi,
    Node {
      position_type: PositionType::Absolute,
      right: Val::Px(16.0),
      top: Val::Px(12.0),
      column_gap: Val::Px(6.0),
      ..default()
    },
    children![
      (
        Name::new("Icon"),
        Node {
          width: Val::Px(14.0),
          height: Val::Px(14.0),
          ..default()
        },
        BackgroundColor(Color::srgb(0.85, 0.7, 0.3)),
      ),
      (
        Name::new("Counter"),
        PurgePointsCounter,
        Text::new("0"),
        TextFont {
          font_size: 14.0,
          ..default()
        },
        TextColor(Color::srgb(0.85, 0.7, 0.3)),
      ),
    ],
  ));

  commands.spawn((
    Name::new("Fervour Bar"),
    FervourBarUi,
    Node {
      position_type: PositionType::Absolute,
      left: Val::Px(16.0),
      top: Val::Px(16.0),
      width: Val::Px(120.0),
      height: Val::Px(8.0),
      ..default()
    },
    BackgroundColor(Color::srgb(0.1, 0.1, 0.2)),
    children![(
      FervourFill,
      Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        ..default()
      },
      BackgroundColor(Color::srgb(0.3, 0.4, 0.9)),
    )],
  ));
}

fn update_fervour_fill(
  players: Query<&PlayerStats, (With<Player>, Changed<PlayerStats>)>,
  mut fills: Query<&mut Node, With<FervourFill>>,
) {
  let Ok(stats) = players.single() else {
    return;
  };
  let ratio = if stats.fervour.max > 0.0 {
    stats.fervour.current / stats.fervour.max
  } else {
    0.0
  };
  for mut node in &mut fills {
    node.width = Val::Percent(ratio * 100.0);
  }
}
