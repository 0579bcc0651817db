//! Arrow-key camera that takes over from the host's camera follow.

use bevy::prelude::*;

use crate::DebugModSystems;
use crate::config::{DebugKeys, DebugModConfig};
use crate::host::LevelUnloaded;
use crate::toggles::{DebugFeature, DebugToggled, DebugToggles, latest_toggle};

/// Position the free camera integrates into. Mirrors the camera transform
/// whenever the free camera is off.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct FreeCam {
  pub position: Vec3,
}

/// Held movement keys for one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FreeCamInput {
  pub up: bool,
  pub down: bool,
  pub left: bool,
  pub right: bool,
  pub fast: bool,
}

impl FreeCamInput {
  pub fn from_keys(keyboard: &ButtonInput<KeyCode>, keys: &DebugKeys) -> Self {
    Self {
      up: keyboard.pressed(keys.up),
      down: keyboard.pressed(keys.down),
      left: keyboard.pressed(keys.left),
      right: keyboard.pressed(keys.right),
      fast: keyboard.pressed(keys.fast),
    }
  }
}

/// Displacement for one frame. Each held direction adds a full step, so
/// diagonals are not normalized.
pub fn free_cam_step(input: FreeCamInput, step: f32, fast_multiplier: f32) -> Vec3 {
  let step = if input.fast {
    step * fast_multiplier
  } else {
    step
  };

  let mut delta = Vec3::ZERO;
  if input.up {
    delta.y += step;
  }
  if input.down {
    delta.y -= step;
  }
  if input.left {
    delta.x -= step;
  }
  if input.right {
    delta.x += step;
  }
  delta
}

pub(crate) struct FreeCamPlugin;

impl Plugin for FreeCamPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<FreeCam>()
      .add_systems(
        Update,
        (
          on_level_unloaded.in_set(DebugModSystems::Lifecycle),
          apply_free_cam_toggle.in_set(DebugModSystems::Apply),
        ),
      )
      .add_systems(PostUpdate, step_free_cam.in_set(DebugModSystems::LateUpdate));
  }
}

fn resync(free_cam: &mut FreeCam, cameras: &Query<&Transform, With<Camera2d>>) {
  if let Ok(transform) = cameras.single() {
    free_cam.position = transform.translation;
  }
}

fn on_level_unloaded(
  mut unloaded: MessageReader<LevelUnloaded>,
  mut toggles: ResMut<DebugToggles>,
  mut free_cam: ResMut<FreeCam>,
  cameras: Query<&Transform, With<Camera2d>>,
) {
  if unloaded.read().count() == 0 {
    return;
  }
  if toggles.free_cam {
    info!("{} DISABLED by level unload", DebugFeature::FreeCam.label());
  }
  toggles.free_cam = false;
  resync(&mut free_cam, &cameras);
}

fn apply_free_cam_toggle(
  mut toggled: MessageReader<DebugToggled>,
  mut free_cam: ResMut<FreeCam>,
  cameras: Query<&Transform, With<Camera2d>>,
) {
  // The cache restarts from the camera on both edges.
  if latest_toggle(&mut toggled, DebugFeature::FreeCam).is_some() {
    resync(&mut free_cam, &cameras);
  }
}

fn step_free_cam(
  toggles: Res<DebugToggles>,
  keyboard: Res<ButtonInput<KeyCode>>,
  keys: Res<DebugKeys>,
  config: Res<DebugModConfig>,
  mut free_cam: ResMut<FreeCam>,
  mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
  let Ok(mut transform) = cameras.single_mut() else {
    return;
  };

  if !toggles.free_cam {
    free_cam.position = transform.translation;
    return;
  }

  let input = FreeCamInput::from_keys(&keyboard, &keys);
  free_cam.position += free_cam_step(input, config.camera_step, config.fast_multiplier);
  transform.translation = free_cam.position;
}

#[cfg(test)]
mod tests {
  use std::f32::consts::SQRT_2;

  use super::*;

  #[test]
  fn no_keys_no_motion() {
    assert_eq!(free_cam_step(FreeCamInput::default(), 0.1, 3.0), Vec3::ZERO);
  }

  #[test]
  fn modifier_triples_the_step() {
    let input = FreeCamInput {
      left: true,
      fast: true,
      ..default()
    };
    let delta = free_cam_step(input, 0.1, 3.0);

    assert!((delta.x + 0.3).abs() < 1e-6);
    assert_eq!(delta.y, 0.0);
  }

  #[test]
  fn diagonal_is_not_normalized() {
    let input = FreeCamInput {
      up: true,
      right: true,
      ..default()
    };
    let delta = free_cam_step(input, 0.1, 3.0);

    assert!((delta.length() - 0.1 * SQRT_2).abs() < 1e-6);
  }

  #[test]
  fn opposite_keys_cancel() {
    let input = FreeCamInput {
      up: true,
      down: true,
      left: true,
      right: true,
      fast: false,
    };
    assert_eq!(free_cam_step(input, 0.1, 3.0), Vec3::ZERO);
  }
}
