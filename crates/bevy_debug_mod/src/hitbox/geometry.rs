//! Placement of the four outline sides around a box collider.

use bevy::prelude::*;

use crate::host::BoxCollider2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Top,
  Left,
  Right,
  Bottom,
}

impl Side {
  pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Right, Side::Bottom];

  pub fn name(self) -> &'static str {
    match self {
      Side::Top => "TOP",
      Side::Left => "LEFT",
      Side::Right => "RIGHT",
      Side::Bottom => "BOTTOM",
    }
  }
}

/// Local placement of one side, relative to the collider entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidePlacement {
  pub side: Side,
  pub position: Vec2,
  pub scale: Vec2,
}

impl SidePlacement {
  pub fn transform(&self) -> Transform {
    Transform::from_translation(self.position.extend(0.0)).with_scale(self.scale.extend(1.0))
  }
}

/// Lays out the outline of `collider` on an entity scaled by `parent_scale`.
///
/// Sides span the full box along their length. Their thickness is divided by
/// the parent scale on the thin axis so every outline ends up `thickness`
/// world units wide.
pub fn outline_sides(
  collider: &BoxCollider2d,
  parent_scale: Vec2,
  thickness: f32,
) -> [SidePlacement; 4] {
  let BoxCollider2d { offset, size } = *collider;
  let half = size / 2.0;
  let horizontal = Vec2::new(size.x, thickness / parent_scale.y);
  let vertical = Vec2::new(thickness / parent_scale.x, size.y);

  Side::ALL.map(|side| {
    let (position, scale) = match side {
      Side::Top => (Vec2::new(offset.x, offset.y + half.y), horizontal),
      Side::Left => (Vec2::new(offset.x - half.x, offset.y), vertical),
      Side::Right => (Vec2::new(offset.x + half.x, offset.y), vertical),
      Side::Bottom => (Vec2::new(offset.x, offset.y - half.y), horizontal),
    };
    SidePlacement {
      side,
      position,
      scale,
    }
  })
}
