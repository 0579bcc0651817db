use bevy::prelude::*;

use crate::config::DebugKeys;

/// One of the three overlay features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugFeature {
  Text,
  Hitboxes,
  FreeCam,
}

impl DebugFeature {
  pub const ALL: [DebugFeature; 3] = [Self::Text, Self::Hitboxes, Self::FreeCam];

  pub fn label(self) -> &'static str {
    match self {
      Self::Text => "Stat text",
      Self::Hitboxes => "Hitboxes",
      Self::FreeCam => "Free camera",
    }
  }
}

/// Current on/off state of each feature. All off at startup.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugToggles {
  pub text: bool,
  pub hitboxes: bool,
  pub free_cam: bool,
}

impl DebugToggles {
  pub fn get(&self, feature: DebugFeature) -> bool {
    match feature {
      DebugFeature::Text => self.text,
      DebugFeature::Hitboxes => self.hitboxes,
      DebugFeature::FreeCam => self.free_cam,
    }
  }

  /// Flips the flag and returns its new value.
  pub fn flip(&mut self, feature: DebugFeature) -> bool {
    let flag = match feature {
      DebugFeature::Text => &mut self.text,
      DebugFeature::Hitboxes => &mut self.hitboxes,
      DebugFeature::FreeCam => &mut self.free_cam,
    };
    *flag = !*flag;
    *flag
  }
}

/// Written whenever a hotkey flips a feature. The owning feature shows its
/// visuals when `enabled` is true and hides them otherwise.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugToggled {
  pub feature: DebugFeature,
  pub enabled: bool,
}

/// Run condition: true while the free camera is not overriding the camera.
pub fn free_cam_inactive(toggles: Res<DebugToggles>) -> bool {
  !toggles.free_cam
}

fn hotkey(keys: &DebugKeys, feature: DebugFeature) -> KeyCode {
  match feature {
    DebugFeature::Text => keys.toggle_text,
    DebugFeature::Hitboxes => keys.toggle_hitboxes,
    DebugFeature::FreeCam => keys.toggle_free_cam,
  }
}

/// Flips a feature on the frame its hotkey goes down.
pub(crate) fn toggle_hotkeys(
  keyboard: Res<ButtonInput<KeyCode>>,
  keys: Res<DebugKeys>,
  mut toggles: ResMut<DebugToggles>,
  mut toggled: MessageWriter<DebugToggled>,
) {
  for feature in DebugFeature::ALL {
    if !keyboard.just_pressed(hotkey(&keys, feature)) {
      continue;
    }
    let enabled = toggles.flip(feature);
    info!(
      "{} {}",
      feature.label(),
      if enabled { "ENABLED" } else { "DISABLED" }
    );
    toggled.write(DebugToggled { feature, enabled });
  }
}

/// Reads this frame's toggle for `feature`, if any. The last one wins.
pub(crate) fn latest_toggle(
  messages: &mut MessageReader<DebugToggled>,
  feature: DebugFeature,
) -> Option<bool> {
  messages
    .read()
    .filter(|message| message.feature == feature)
    .last()
    .map(|message| message.enabled)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flip_only_touches_one_flag() {
    let mut toggles = DebugToggles::default();

    assert!(toggles.flip(DebugFeature::Hitboxes));
    assert_eq!(
      toggles,
      DebugToggles {
        text: false,
        hitboxes: true,
        free_cam: false,
      }
    );

    assert!(!toggles.flip(DebugFeature::Hitboxes));
    assert_eq!(toggles, DebugToggles::default());
  }

  #[test]
  fn each_feature_has_its_own_hotkey() {
    let keys = DebugKeys::default();
    let bound: Vec<KeyCode> = DebugFeature::ALL
      .iter()
      .map(|feature| hotkey(&keys, *feature))
      .collect();

    assert_eq!(bound, vec![KeyCode::F1, KeyCode::F2, KeyCode::F3]);
  }

  #[derive(Resource, Default)]
  struct Seen(Vec<DebugToggled>);

  fn record(mut messages: MessageReader<DebugToggled>, mut seen: ResMut<Seen>) {
    seen.0.extend(messages.read().copied());
  }

  #[test]
  fn hotkey_press_flips_and_notifies() {
    let mut app = App::new();
    app
      .init_resource::<ButtonInput<KeyCode>>()
      .init_resource::<DebugKeys>()
      .init_resource::<DebugToggles>()
      .init_resource::<Seen>()
      .add_message::<DebugToggled>()
      .add_systems(Update, (toggle_hotkeys, record).chain());

    app
      .world_mut()
      .resource_mut::<ButtonInput<KeyCode>>()
      .press(KeyCode::F3);
    app.update();

    assert!(app.world().resource::<DebugToggles>().free_cam);
    assert_eq!(
      app.world().resource::<Seen>().0,
      vec![DebugToggled {
        feature: DebugFeature::FreeCam,
        enabled: true,
      }]
    );

    // Holding the key does not flip again.
    app
      .world_mut()
      .resource_mut::<ButtonInput<KeyCode>>()
      .clear();
    app.update();
    assert!(app.world().resource::<DebugToggles>().free_cam);
    assert_eq!(app.world().resource::<Seen>().0.len(), 1);
  }
}
