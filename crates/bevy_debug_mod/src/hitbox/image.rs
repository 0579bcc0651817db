use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use crate::config::DebugModConfig;

/// What the outline sides are drawn with.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub enum OutlineImage {
  /// No image configured; sides are solid quads in the outline color.
  #[default]
  Solid,
  Image(Handle<Image>),
  /// The configured image could not be loaded. Sides are still spawned and
  /// placed, just without a sprite.
  Missing,
}

impl OutlineImage {
  pub(crate) fn sprite(&self, color: Color) -> Option<Sprite> {
    match self {
      OutlineImage::Solid => Some(Sprite::from_color(color, Vec2::ONE)),
      OutlineImage::Image(image) => Some(Sprite {
        image: image.clone(),
        custom_size: Some(Vec2::ONE),
        ..default()
      }),
      OutlineImage::Missing => None,
    }
  }
}

/// (Re)loads the outline image whenever the config changes.
pub(crate) fn load_outline_image(
  config: Res<DebugModConfig>,
  asset_server: Option<Res<AssetServer>>,
  mut image: ResMut<OutlineImage>,
) {
  if !config.is_changed() {
    return;
  }

  let next = match (&config.hitbox_image, asset_server) {
    (None, _) => OutlineImage::Solid,
    (Some(path), Some(asset_server)) => OutlineImage::Image(asset_server.load(path.clone())),
    (Some(path), None) => {
      warn!("No asset server to load outline image {path}, outlines will be invisible");
      OutlineImage::Missing
    }
  };
  image.set_if_neq(next);
}

pub(crate) fn watch_outline_image(
  mut failures: MessageReader<AssetLoadFailedEvent<Image>>,
  mut image: ResMut<OutlineImage>,
) {
  for failure in failures.read() {
    let OutlineImage::Image(handle) = &*image else {
      continue;
    };
    if handle.id() != failure.id {
      continue;
    }
    warn!(
      "Failed to load outline image {}: {}, outlines will be invisible",
      failure.path, failure.error
    );
    *image = OutlineImage::Missing;
  }
}

#[cfg(test)]
mod tests {
  use bevy::asset::io::AssetReaderError;
  use bevy::asset::{AssetLoadError, AssetPath};

  use super::*;

  #[test]
  fn missing_image_has_no_sprite() {
    assert!(OutlineImage::Missing.sprite(Color::WHITE).is_none());
  }

  #[test]
  fn solid_sprite_is_unit_sized() {
    let sprite = OutlineImage::Solid.sprite(Color::BLACK).unwrap();
    assert_eq!(sprite.custom_size, Some(Vec2::ONE));
    assert_eq!(sprite.color, Color::BLACK);
  }

  #[test]
  fn image_path_without_asset_server_degrades() {
    let mut app = App::new();
    app
      .insert_resource(DebugModConfig {
        hitbox_image: Some("hitbox.png".to_string()),
        ..default()
      })
      .init_resource::<OutlineImage>()
      .add_systems(Update, load_outline_image);

    app.update();

    assert_eq!(*app.world().resource::<OutlineImage>(), OutlineImage::Missing);
  }

  fn load_failed(id: AssetId<Image>) -> AssetLoadFailedEvent<Image> {
    AssetLoadFailedEvent {
      id,
      path: AssetPath::from("debugmod/hitbox.png"),
      error: AssetLoadError::AssetReaderError(AssetReaderError::NotFound(
        "debugmod/hitbox.png".into(),
      )),
    }
  }

  fn failure_app(configured: &Handle<Image>) -> App {
    let mut app = App::new();
    app
      .add_message::<AssetLoadFailedEvent<Image>>()
      .insert_resource(OutlineImage::Image(configured.clone()))
      .add_systems(Update, watch_outline_image);
    app
  }

  #[test]
  fn failed_load_of_configured_image_marks_it_missing() {
    let mut images = Assets::<Image>::default();
    let configured = images.add(Image::default());
    let mut app = failure_app(&configured);

    app.world_mut().write_message(load_failed(configured.id()));
    app.update();

    assert_eq!(*app.world().resource::<OutlineImage>(), OutlineImage::Missing);
  }

  #[test]
  fn failures_of_other_images_are_ignored() {
    let mut images = Assets::<Image>::default();
    let configured = images.add(Image::default());
    let other = images.add(Image::default());
    let mut app = failure_app(&configured);

    app.world_mut().write_message(load_failed(other.id()));
    app.update();

    assert_eq!(
      *app.world().resource::<OutlineImage>(),
      OutlineImage::Image(configured)
    );
  }
}
