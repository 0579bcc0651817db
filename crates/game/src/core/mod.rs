pub(crate) mod camera;

use bevy::prelude::*;
use bevy_debug_mod::{DebugModSystems, free_cam_inactive};
use bevy_rapier2d::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
      .add_systems(Startup, camera::setup_camera)
      .add_systems(
        PostUpdate,
        camera::camera_follow
          .run_if(free_cam_inactive)
          .before(DebugModSystems::LateUpdate),
      );
  }
}
