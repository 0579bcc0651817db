pub mod components;
pub mod movement;
mod spawn;


use bevy::prelude::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, spawn::spawn_player).add_systems(
      Update,
      (movement::handle_movement_input, movement::regen_fervour),
    );
  }
}
