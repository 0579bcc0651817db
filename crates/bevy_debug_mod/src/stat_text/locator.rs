use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::host::{FERVOUR_BAR_NAME, FervourBarUi, PURGE_POINTS_NAME, PurgePointsUi};

/// Finds the host HUD elements the stat labels hang off.
///
/// Lookups go by marker and exact name, and come back empty when the current
/// scene has no such element.
#[derive(SystemParam)]
pub struct HudLocator<'w, 's> {
  purge_points: Query<'w, 's, (&'static Name, &'static Children), With<PurgePointsUi>>,
  fervour_bars: Query<'w, 's, (Entity, &'static Name), With<FervourBarUi>>,
  fonts: Query<'w, 's, &'static TextFont>,
}

impl HudLocator<'_, '_> {
  /// Font of the purge points counter, which sits in the element's second
  /// child.
  pub fn text_template(&self) -> Option<TextFont> {
    let (_, children) = self
      .purge_points
      .iter()
      .find(|(name, _)| name.as_str() == PURGE_POINTS_NAME)?;
    let text = *children.get(1)?;
    self.fonts.get(text).ok().cloned()
  }

  pub fn label_parent(&self) -> Option<Entity> {
    self
      .fervour_bars
      .iter()
      .find(|(_, name)| name.as_str() == FERVOUR_BAR_NAME)
      .map(|(entity, _)| entity)
  }
}
