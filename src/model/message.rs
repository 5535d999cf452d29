use serde::{Deserialize, Serialize};

pub const PRESIDING_JUDGE: &str = "Presiding Judge";
pub const PETITIONER_COUNSEL: &str = "Petitioner Counsel";
pub const RESPONDENT_COUNSEL: &str = "Respondent Counsel";

/// Display category of a speaker, used to pick bubble colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeakerRole {
    Judge,
    Petitioner,
    Respondent,
    Juror,
    Other,
}

impl SpeakerRole {
    pub const ALL: [SpeakerRole; 5] = [
        SpeakerRole::Judge,
        SpeakerRole::Petitioner,
        SpeakerRole::Respondent,
        SpeakerRole::Juror,
        SpeakerRole::Other,
    ];

    pub fn of_label(label: &str) -> Self {
        match label {
            PRESIDING_JUDGE => SpeakerRole::Judge,
            PETITIONER_COUNSEL => SpeakerRole::Petitioner,
            RESPONDENT_COUNSEL => SpeakerRole::Respondent,
            l if l.contains("Juror") => SpeakerRole::Juror,
            _ => SpeakerRole::Other,
        }
    }

    /// Name shown next to the role's color picker.
    pub fn display_name(self) -> &'static str {
        match self {
            SpeakerRole::Judge => "Judge",
            SpeakerRole::Petitioner => "Petitioner",
            SpeakerRole::Respondent => "Respondent",
            SpeakerRole::Juror => "Jurors",
            SpeakerRole::Other => "Other speakers",
        }
    }
}

/// One attributed piece of a transcript.
///
/// `continuation` holds the lines that followed the speaker cue without a
/// cue of their own. They are shown under the utterance but never merged
/// into `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: String,
    pub text: String,
    pub continuation: Vec<String>,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            continuation: Vec::new(),
        }
    }

    pub fn role(&self) -> SpeakerRole {
        SpeakerRole::of_label(&self.speaker)
    }
}
