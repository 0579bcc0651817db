use bevy::prelude::*;

use crate::host::StatPair;

fn fixed(value: f32, precision: usize) -> String {
  format!("{value:.precision$}")
}

fn pair(stat: StatPair, precision: usize) -> String {
  format!(
    "{}/{}",
    fixed(stat.current, precision),
    fixed(stat.max, precision)
  )
}

/// The four lines of the stat panel, top to bottom.
pub fn stat_lines(
  level: &str,
  position: Vec2,
  life: StatPair,
  fervour: StatPair,
  precision: usize,
) -> [String; 4] {
  [
    format!("Scene: {level}"),
    format!(
      "Position: ({}, {})",
      fixed(position.x, precision),
      fixed(position.y, precision)
    ),
    format!("HP: {}", pair(life, precision)),
    format!("FP: {}", pair(fervour, precision)),
  ]
}
