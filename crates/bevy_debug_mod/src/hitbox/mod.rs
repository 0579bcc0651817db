//! Hitbox outlines around every box collider in the scene.
//!
//! Each qualifying collider gets a [`HitboxOutline`] child with four thin
//! sides. Outlines follow their collider through the transform hierarchy and
//! are despawned in bulk when the feature is turned off or the level unloads.

pub mod geometry;
mod image;

use bevy::asset::AssetLoadFailedEvent;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::geometry::ColliderView;
use bevy_rapier2d::prelude::Collider;
pub use geometry::{Side, SidePlacement, outline_sides};
pub use image::OutlineImage;

use crate::config::DebugModConfig;
use crate::host::{BoxCollider2d, LevelLoaded, LevelUnloaded};
use crate::toggles::{DebugFeature, DebugToggled, DebugToggles, latest_toggle};
use crate::DebugModSystems;

/// Root of one collider's outline.
#[derive(Component, Debug)]
pub struct HitboxOutline;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitboxSide(pub Side);

/// Outlines currently spawned by the overlay.
#[derive(Resource, Default, Debug)]
pub struct HitboxOverlay {
  outlines: Vec<Entity>,
}

impl HitboxOverlay {
  pub fn outlines(&self) -> &[Entity] {
    &self.outlines
  }
}

pub(crate) struct HitboxPlugin;

impl Plugin for HitboxPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<HitboxOverlay>()
      .init_resource::<OutlineImage>()
      .add_message::<AssetLoadFailedEvent<Image>>()
      .add_systems(
        Update,
        (
          (image::load_outline_image, image::watch_outline_image)
            .chain()
            .before(DebugModSystems::Lifecycle),
          on_level_transition.in_set(DebugModSystems::Lifecycle),
          apply_hitbox_toggle.in_set(DebugModSystems::Apply),
        ),
      );
  }
}

/// Box collider of an entity, preferring the explicit [`BoxCollider2d`] over
/// a rapier cuboid.
///
/// Rapier bakes the entity's scale into the collider shape, while the outline
/// inherits that scale from its parent, so the cuboid is read unscaled.
pub fn collider_box(own: Option<&BoxCollider2d>, rapier: Option<&Collider>) -> Option<BoxCollider2d> {
  own.copied().or_else(|| match rapier?.as_unscaled_typed_shape() {
    ColliderView::Cuboid(cuboid) => Some(BoxCollider2d::new(cuboid.half_extents() * 2.0)),
    _ => None,
  })
}

type ColliderQuery<'w, 's> = Query<
  'w,
  's,
  (
    Entity,
    &'static Transform,
    Option<&'static Name>,
    Option<&'static BoxCollider2d>,
    Option<&'static Collider>,
  ),
  Or<(With<BoxCollider2d>, With<Collider>)>,
>;

#[derive(SystemParam)]
struct Outlines<'w, 's> {
  commands: Commands<'w, 's>,
  overlay: ResMut<'w, HitboxOverlay>,
  colliders: ColliderQuery<'w, 's>,
  config: Res<'w, DebugModConfig>,
  image: Res<'w, OutlineImage>,
}

impl Outlines<'_, '_> {
  fn show(&mut self) {
    self.hide();

    let color = self.config.outline_color();
    let thickness = self.config.outline_thickness;

    for (entity, transform, name, own, rapier) in &self.colliders {
      if name.is_some_and(|name| name.as_str().starts_with(&self.config.geometry_prefix)) {
        continue;
      }
      let Some(collider) = collider_box(own, rapier) else {
        continue;
      };

      let sides = outline_sides(&collider, transform.scale.truncate(), thickness);
      let outline = self
        .commands
        .spawn((
          Name::new("Hitbox"),
          HitboxOutline,
          Transform::IDENTITY,
          Visibility::Inherited,
          ChildOf(entity),
        ))
        .with_children(|parent| {
          for placement in sides {
            let mut side = parent.spawn((
              Name::new(placement.side.name()),
              HitboxSide(placement.side),
              placement.transform(),
              Visibility::Inherited,
            ));
            if let Some(sprite) = self.image.sprite(color) {
              side.insert(sprite);
            }
          }
        })
        .id();
      self.overlay.outlines.push(outline);
    }

    info!("Adding outlines to {} hitboxes", self.overlay.outlines.len());
  }

  fn hide(&mut self) {
    for outline in self.overlay.outlines.drain(..) {
      // Outlines die with their collider when the host despawns it first.
      self.commands.entity(outline).try_despawn();
    }
  }
}

fn on_level_transition(
  mut unloaded: MessageReader<LevelUnloaded>,
  mut loaded: MessageReader<LevelLoaded>,
  toggles: Res<DebugToggles>,
  mut outlines: Outlines,
) {
  if unloaded.read().count() > 0 {
    outlines.hide();
  }
  if loaded.read().count() > 0 && toggles.hitboxes {
    outlines.show();
  }
}

fn apply_hitbox_toggle(mut toggled: MessageReader<DebugToggled>, mut outlines: Outlines) {
  match latest_toggle(&mut toggled, DebugFeature::Hitboxes) {
    Some(true) => outlines.show(),
    Some(false) => outlines.hide(),
    None => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn explicit_box_wins_over_rapier() {
    let own = BoxCollider2d::new(Vec2::new(1.0, 2.0)).with_offset(Vec2::X);
    let rapier = Collider::cuboid(5.0, 5.0);

    assert_eq!(collider_box(Some(&own), Some(&rapier)), Some(own));
  }

  #[test]
  fn rapier_cuboid_uses_full_extents() {
    let rapier = Collider::cuboid(3.0, 0.5);

    assert_eq!(
      collider_box(None, Some(&rapier)),
      Some(BoxCollider2d::new(Vec2::new(6.0, 1.0)))
    );
  }

  #[test]
  fn rapier_scale_is_not_applied_twice() {
    let mut rapier = Collider::cuboid(1.0, 1.0);
    // What rapier's scale sync does for `Transform::from_scale(2.0)`.
    rapier.set_scale(Vec2::splat(2.0), 20);

    assert_eq!(
      collider_box(None, Some(&rapier)),
      Some(BoxCollider2d::new(Vec2::new(2.0, 2.0)))
    );
  }

  #[test]
  fn non_box_rapier_shapes_are_ignored() {
    let rapier = Collider::ball(2.0);

    assert_eq!(collider_box(None, Some(&rapier)), None);
  }
}
