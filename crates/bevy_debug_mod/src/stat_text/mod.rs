//! On-screen stat lines under the fervour bar.

mod format;
mod locator;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::text::Justify;
use bevy::transform::helper::TransformHelper;
pub use format::stat_lines;
pub use locator::HudLocator;

use crate::DebugModSystems;
use crate::config::DebugModConfig;
use crate::host::{CurrentLevel, LevelLoaded, LevelUnloaded, Player, PlayerStats};
use crate::toggles::{DebugFeature, DebugToggled, DebugToggles, latest_toggle};

pub const LINE_COUNT: usize = 4;
pub const LINE_HEIGHT: f32 = 18.0;
pub const LINE_WIDTH: f32 = 250.0;

/// Position of line `index` relative to the top-left corner of its parent,
/// y pointing up.
pub fn label_offset(index: usize) -> Vec2 {
  Vec2::new(40.0, -45.0 - index as f32 * LINE_HEIGHT)
}

/// Line index of a stat label.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLabel(pub usize);

/// Labels spawned so far. Created once and then only shown or hidden.
#[derive(Resource, Default, Debug)]
pub struct StatText {
  labels: Vec<Entity>,
}

impl StatText {
  pub fn labels(&self) -> &[Entity] {
    &self.labels
  }

  pub fn is_created(&self) -> bool {
    self.labels.len() >= LINE_COUNT
  }
}

pub(crate) struct StatTextPlugin;

impl Plugin for StatTextPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<StatText>()
      .add_systems(
        Update,
        (
          on_level_transition.in_set(DebugModSystems::Lifecycle),
          apply_text_toggle.in_set(DebugModSystems::Apply),
        ),
      )
      .add_systems(
        PostUpdate,
        refresh_stat_text.in_set(DebugModSystems::LateUpdate),
      );
  }
}

#[derive(SystemParam)]
struct Labels<'w, 's> {
  commands: Commands<'w, 's>,
  stat_text: ResMut<'w, StatText>,
  locator: HudLocator<'w, 's>,
}

impl Labels<'_, '_> {
  fn ensure_created(&mut self) {
    if !self.stat_text.labels.is_empty() {
      return;
    }

    let (Some(font), Some(parent)) = (self.locator.text_template(), self.locator.label_parent())
    else {
      debug!("HUD anchors not found, stat text unavailable in this scene");
      return;
    };

    for index in 0..LINE_COUNT {
      let offset = label_offset(index);
      let label = self
        .commands
        .spawn((
          Name::new("DebugText"),
          StatLabel(index),
          Text::new(""),
          font.clone(),
          TextColor(Color::WHITE),
          TextLayout::new_with_justify(Justify::Left),
          Node {
            position_type: PositionType::Absolute,
            left: Val::Px(offset.x),
            top: Val::Px(-offset.y),
            width: Val::Px(LINE_WIDTH),
            height: Val::Px(LINE_HEIGHT),
            ..default()
          },
          Visibility::Hidden,
          ChildOf(parent),
        ))
        .id();
      self.stat_text.labels.push(label);
    }
  }

  fn set_visibility(&mut self, visibility: Visibility) {
    for label in &self.stat_text.labels {
      self.commands.entity(*label).try_insert(visibility);
    }
  }

  fn show(&mut self) {
    self.ensure_created();
    self.set_visibility(Visibility::Inherited);
  }

  fn hide(&mut self) {
    self.set_visibility(Visibility::Hidden);
  }
}

fn on_level_transition(
  mut unloaded: MessageReader<LevelUnloaded>,
  mut loaded: MessageReader<LevelLoaded>,
  toggles: Res<DebugToggles>,
  mut labels: Labels,
) {
  if unloaded.read().count() > 0 {
    labels.hide();
  }
  if loaded.read().count() > 0 && toggles.text {
    labels.show();
  }
}

fn apply_text_toggle(mut toggled: MessageReader<DebugToggled>, mut labels: Labels) {
  match latest_toggle(&mut toggled, DebugFeature::Text) {
    Some(true) => labels.show(),
    Some(false) => labels.hide(),
    None => {}
  }
}

fn refresh_stat_text(
  toggles: Res<DebugToggles>,
  stat_text: Res<StatText>,
  config: Res<DebugModConfig>,
  level: Option<Res<CurrentLevel>>,
  players: Query<(Entity, &PlayerStats), With<Player>>,
  transforms: TransformHelper,
  mut texts: Query<&mut Text, With<StatLabel>>,
) {
  if !toggles.text || !stat_text.is_created() {
    return;
  }
  let Ok((player, stats)) = players.single() else {
    return;
  };
  // Runs before propagation, so the world position is computed from the
  // hierarchy rather than read from last frame's `GlobalTransform`.
  let Ok(global) = transforms.compute_global_transform(player) else {
    return;
  };

  let level_name = level.as_ref().map_or("", |level| level.name.as_str());
  let lines = stat_lines(
    level_name,
    global.translation().truncate(),
    stats.life,
    stats.fervour,
    config.info_precision,
  );

  for (label, line) in stat_text.labels.iter().zip(lines) {
    let Ok(mut text) = texts.get_mut(*label) else {
      continue;
    };
    if text.0 != line {
      text.0 = line;
    }
  }
}
