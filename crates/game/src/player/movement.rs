use bevy::prelude::*;
use bevy_debug_mod::{Player, PlayerStats, StatPair};
use bevy_enhanced_input::prelude::*;

use super::components::CharacterMovementConfig;
use crate::input::{Move, PlayerInput};

pub fn handle_movement_input(
  mut players: Query<
    (
      &Actions<PlayerInput>,
      &mut Transform,
      &CharacterMovementConfig,
    ),
    With<Player>,
  >,
  move_actions: Query<(&Action<Move>, &ActionState)>,
  time: Res<Time>,
) {
  for (actions, mut transform, config) in &mut players {
    let mut move_value = 0.0;
    for action_entity in actions.iter() {
      if let Ok((action, action_state)) = move_actions.get(action_entity)
        && matches!(action_state, ActionState::Fired | ActionState::Ongoing)
      {
        move_value = **action;
      }
    }

    transform.translation.x += move_value * config.walk_speed * time.delta_secs();
  }
}

/// Refills `stat` by `amount`, capped at its max.
pub fn refill(stat: &mut StatPair, amount: f32) {
  stat.current = (stat.current + amount).min(stat.max);
}

pub fn regen_fervour(
  mut players: Query<(&mut PlayerStats, &CharacterMovementConfig), With<Player>>,
  time: Res<Time>,
) {
  for (mut stats, config) in &mut players {
    if stats.fervour.current < stats.fervour.max {
      refill(&mut stats.fervour, config.fervour_regen * time.delta_secs());
    }
  }
}
