use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Move, PlayerInput};

/// Arrow keys are left to the debug free camera.
pub fn player_input_actions() -> impl Bundle {
  actions!(PlayerInput[
      (
          Action::<Move>::new(),
          Bindings::spawn(Bidirectional::ad_keys()),
      ),
  ])
}
