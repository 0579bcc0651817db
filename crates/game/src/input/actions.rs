use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

/// Horizontal walk, A/D only.
#[derive(Debug, InputAction)]
#[action_output(f32)]
pub struct Move;
