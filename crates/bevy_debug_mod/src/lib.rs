//! Debug overlay for 2D Bevy games.
//!
//! Three features, each on its own hotkey:
//!
//! - hitbox outlines around every box collider (`F2`)
//! - stat text under the HUD's fervour bar (`F1`)
//! - a free camera driven by the arrow keys (`F3`, hold shift to go faster)
//!
//! The host game provides the data the overlay reads (see [`host`]) and
//! writes [`LevelLoaded`] / [`LevelUnloaded`] around scene changes so the
//! overlay can tear down and re-apply itself.
//!
//! ```ignore
//! app.add_plugins(DebugModPlugin::default());
//! ```

pub mod config;
pub mod free_cam;
pub mod hitbox;
pub mod host;
pub mod stat_text;
pub mod toggles;

use bevy::prelude::*;
use bevy::transform::TransformSystems;
pub use config::{DebugKeys, DebugModConfig};
pub use free_cam::{FreeCam, FreeCamInput, free_cam_step};
pub use hitbox::{HitboxOutline, HitboxOverlay, HitboxSide, OutlineImage, Side, outline_sides};
pub use host::{
  BoxCollider2d, CurrentLevel, FervourBarUi, LevelLoaded, LevelUnloaded, Player, PlayerStats,
  PurgePointsUi, StatPair,
};
pub use stat_text::{HudLocator, StatLabel, StatText, stat_lines};
pub use toggles::{DebugFeature, DebugToggled, DebugToggles, free_cam_inactive};

/// Ordering of the overlay's systems.
///
/// `Lifecycle`, `Input` and `Apply` run in `Update` in that order.
/// `LateUpdate` runs in `PostUpdate`; order host camera follow before it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugModSystems {
  /// Level load/unload handling.
  Lifecycle,
  /// Hotkey edge detection.
  Input,
  /// Features react to this frame's toggles.
  Apply,
  /// Stat text refresh and free camera step.
  LateUpdate,
}

pub struct DebugModPlugin {
  pub keys: DebugKeys,
  /// Asset path of the TOML config. Ignored without an `AssetPlugin`.
  pub config_path: Option<String>,
}

impl Default for DebugModPlugin {
  fn default() -> Self {
    Self {
      keys: DebugKeys::default(),
      config_path: Some("config/overlay.debugmod.toml".to_string()),
    }
  }
}

impl Plugin for DebugModPlugin {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(self.keys)
      .init_resource::<ButtonInput<KeyCode>>()
      .init_resource::<DebugToggles>()
      .add_message::<DebugToggled>()
      .add_message::<LevelLoaded>()
      .add_message::<LevelUnloaded>()
      .configure_sets(
        Update,
        (
          DebugModSystems::Lifecycle,
          DebugModSystems::Input,
          DebugModSystems::Apply,
        )
          .chain(),
      )
      .configure_sets(
        PostUpdate,
        DebugModSystems::LateUpdate.before(TransformSystems::Propagate),
      )
      .add_plugins(config::ConfigPlugin {
        path: self.config_path.clone(),
      })
      .add_plugins((
        hitbox::HitboxPlugin,
        stat_text::StatTextPlugin,
        free_cam::FreeCamPlugin,
      ))
      .add_systems(
        Update,
        toggles::toggle_hotkeys.in_set(DebugModSystems::Input),
      );
  }
}
