//! Types the host game provides for the overlay to read.
//!
//! The overlay never spawns or mutates any of these; it only queries them.
//! A host wires itself up by attaching the components below to its own
//! entities and writing [`LevelLoaded`] / [`LevelUnloaded`] around scene
//! transitions.

use bevy::prelude::*;

/// Name of the HUD element whose second child is used as the text template.
pub const PURGE_POINTS_NAME: &str = "PurgePoints";
/// Name of the HUD container the debug labels are parented to.
pub const FERVOUR_BAR_NAME: &str = "Fervour Bar";

/// Written by the host after a level's entities exist.
#[derive(Message, Debug, Clone)]
pub struct LevelLoaded {
  pub old: String,
  pub new: String,
}

/// Written by the host when a level is torn down.
#[derive(Message, Debug, Clone)]
pub struct LevelUnloaded {
  pub old: String,
  pub new: String,
}

/// Display name of the level currently loaded.
#[derive(Resource, Default, Debug, Clone)]
pub struct CurrentLevel {
  pub name: String,
}

/// Axis-aligned 2D box collider, in the owning entity's local space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider2d {
  pub offset: Vec2,
  pub size: Vec2,
}

impl BoxCollider2d {
  pub fn new(size: Vec2) -> Self {
    Self {
      offset: Vec2::ZERO,
      size,
    }
  }

  pub fn with_offset(mut self, offset: Vec2) -> Self {
    self.offset = offset;
    self
  }
}

/// Marker for the player entity.
#[derive(Component, Default, Debug)]
pub struct Player;

/// A resource with a current value and a cap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatPair {
  pub current: f32,
  pub max: f32,
}

impl StatPair {
  pub fn full(max: f32) -> Self {
    Self { current: max, max }
  }
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerStats {
  pub life: StatPair,
  pub fervour: StatPair,
}

/// Marks the HUD element showing purge points.
#[derive(Component, Default, Debug)]
pub struct PurgePointsUi;

/// Marks the HUD container showing the fervour bar.
#[derive(Component, Default, Debug)]
pub struct FervourBarUi;
