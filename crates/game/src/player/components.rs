use bevy::prelude::*;

#[derive(Component)]
pub struct CharacterMovementConfig {
  pub walk_speed: f32,
  /// Fervour regained per second.
  pub fervour_regen: f32,
}
