use bevy::prelude::*;
use bevy_debug_mod::{BoxCollider2d, Player, PlayerStats, StatPair};

use super::components::CharacterMovementConfig;
use crate::config::ConfigLoaded;
use crate::input::{PlayerInput, player_input_actions};

pub fn spawn_player(mut commands: Commands, config: Res<ConfigLoaded>) {
  let player = &config.player;
  let size = Vec2::from(player.size);

  commands.spawn((
    Name::new("Penitent"),
    Player,
    Sprite::from_color(
      Color::srgb(player.color[0], player.color[1], player.color[2]),
      size,
    ),
    Transform::from_xyz(player.spawn_x, player.spawn_y, 10.0),
    BoxCollider2d::new(size),
    PlayerStats {
      life: StatPair::full(player.max_life),
      // Starts half empty so regeneration is visible in the stat text.
      fervour: StatPair {
        current: player.max_fervour / 2.0,
        max: player.max_fervour,
      },
    },
    CharacterMovementConfig {
      walk_speed: player.walk_speed,
      fervour_regen: player.fervour_regen,
    },
    PlayerInput,
    player_input_actions(),
  ));
}
