use bevy::prelude::*;
use bevy_debug_mod::BoxCollider2d;
use bevy_rapier2d::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::LevelConfig;

const FLOOR_Y: f32 = -40.0;
const FLOOR_HEIGHT: f32 = 16.0;
const PLATFORM_HEIGHT: f32 = 8.0;
const ENEMY_SIZE: Vec2 = Vec2::new(10.0, 14.0);

/// Root of everything a level owns. Despawned recursively on unload.
#[derive(Component)]
pub struct LevelRoot;

pub fn spawn_level(commands: &mut Commands, level: &LevelConfig) -> Entity {
  let mut rng = StdRng::seed_from_u64(level.seed);
  let color = Color::srgb(level.color[0], level.color[1], level.color[2]);
  let half_width = level.floor_width / 2.0;

  commands
    .spawn((
      Name::new(level.name.clone()),
      LevelRoot,
      Transform::default(),
      Visibility::default(),
    ))
    .with_children(|root| {
      // Level geometry, skipped by the hitbox overlay.
      root.spawn((
        Name::new("GEO_Block_Floor"),
        Sprite::from_color(color, Vec2::new(level.floor_width, FLOOR_HEIGHT)),
        Transform::from_xyz(0.0, FLOOR_Y, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(half_width, FLOOR_HEIGHT / 2.0),
      ));

      for i in 0..level.platforms {
        let width = rng.random_range(20.0..60.0);
        let x = rng.random_range(-half_width..half_width);
        let y = rng.random_range(FLOOR_Y + 20.0..FLOOR_Y + 120.0);

        root.spawn((
          Name::new(format!("Platform {i}")),
          Sprite::from_color(color.darker(0.1), Vec2::new(width, PLATFORM_HEIGHT)),
          Transform::from_xyz(x, y, 0.0),
          RigidBody::Fixed,
          Collider::cuboid(width / 2.0, PLATFORM_HEIGHT / 2.0),
        ));
      }

      for i in 0..level.enemies {
        let x = rng.random_range(-half_width..half_width);
        // Larger enemies are scaled rather than resized.
        let scale = rng.random_range(1.0..2.0);

        root.spawn((
          Name::new(format!("Enemy {i}")),
          Sprite::from_color(Color::srgb(0.7, 0.15, 0.15), ENEMY_SIZE),
          Transform::from_xyz(x, FLOOR_Y + FLOOR_HEIGHT / 2.0 + ENEMY_SIZE.y * scale / 2.0, 5.0)
            .with_scale(Vec3::new(scale, scale, 1.0)),
          BoxCollider2d::new(ENEMY_SIZE * 0.8).with_offset(Vec2::new(0.0, -1.0)),
        ));
      }
    })
    .id()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_level() -> LevelConfig {
    LevelConfig {
      name: "Test".into(),
      seed: 7,
      platforms: 3,
      enemies: 2,
      floor_width: 200.0,
      color: [0.5, 0.5, 0.5],
    }
  }

  fn spawn(world: &mut World) -> Entity {
    let mut commands = world.commands();
    let root = spawn_level(&mut commands, &test_level());
    world.flush();
    root
  }

  #[test]
  fn level_contents_match_config() {
    let mut world = World::new();
    spawn(&mut world);

    let names: Vec<String> = world
      .query::<&Name>()
      .iter(&world)
      .map(|name| name.to_string())
      .collect();

    assert!(names.iter().any(|name| name == "GEO_Block_Floor"));
    assert_eq!(names.iter().filter(|n| n.starts_with("Platform")).count(), 3);
    assert_eq!(world.query::<&BoxCollider2d>().iter(&world).count(), 2);
  }

  #[test]
  fn same_seed_gives_same_layout() {
    let layout = || {
      let mut world = World::new();
      spawn(&mut world);
      let mut positions: Vec<(i32, i32)> = world
        .query_filtered::<&Transform, With<RigidBody>>()
        .iter(&world)
        .map(|t| (t.translation.x as i32, t.translation.y as i32))
        .collect();
      positions.sort();
      positions
    };

    assert_eq!(layout(), layout());
  }
}
