use egui::Color32;
use std::collections::HashMap;

use crate::model::message::SpeakerRole;

/// Bubble fill per speaker role before the user touches the pickers.
fn default_color(role: SpeakerRole) -> Color32 {
    match role {
        SpeakerRole::Judge => Color32::from_rgb(92, 54, 112),
        SpeakerRole::Petitioner => Color32::from_rgb(36, 78, 128),
        SpeakerRole::Respondent => Color32::from_rgb(128, 72, 36),
        SpeakerRole::Juror => Color32::from_rgb(38, 96, 70),
        SpeakerRole::Other => Color32::from_gray(84),
    }
}

#[derive(Clone)]
pub struct UiSettings {
    pub ui_scale: f32,
    speaker_colors: HashMap<SpeakerRole, Color32>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            speaker_colors: SpeakerRole::ALL
                .into_iter()
                .map(|role| (role, default_color(role)))
                .collect(),
        }
    }
}

impl UiSettings {
    pub fn color(&self, role: SpeakerRole) -> Color32 {
        self.speaker_colors
            .get(&role)
            .copied()
            .unwrap_or_else(|| default_color(role))
    }

    /// Editable slot for a color picker.
    pub fn color_mut(&mut self, role: SpeakerRole) -> &mut Color32 {
        self.speaker_colors
            .entry(role)
            .or_insert_with(|| default_color(role))
    }

    pub fn reset_colors(&mut self) {
        for role in SpeakerRole::ALL {
            self.speaker_colors.insert(role, default_color(role));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edited_color_only_changes_its_role() {
        let mut settings = UiSettings::default();
        let teal = Color32::from_rgb(0, 128, 128);

        *settings.color_mut(SpeakerRole::Juror) = teal;

        assert_eq!(settings.color(SpeakerRole::Juror), teal);
        assert_eq!(settings.color(SpeakerRole::Judge), default_color(SpeakerRole::Judge));
    }

    #[test]
    fn roles_start_with_distinct_colors() {
        let settings = UiSettings::default();
        for (i, a) in SpeakerRole::ALL.into_iter().enumerate() {
            for b in SpeakerRole::ALL.into_iter().skip(i + 1) {
                assert_ne!(settings.color(a), settings.color(b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut settings = UiSettings::default();
        *settings.color_mut(SpeakerRole::Judge) = Color32::RED;

        settings.reset_colors();

        assert_eq!(settings.color(SpeakerRole::Judge), default_color(SpeakerRole::Judge));
    }
}
