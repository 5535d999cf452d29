use crate::model::message::{Utterance, PETITIONER_COUNSEL, PRESIDING_JUDGE, RESPONDENT_COUNSEL};

const SEPARATOR: char = ':';
const ROLE_KEYWORDS: [&str; 5] = ["Judge", "Counsel", "Petitioner", "Respondent", "Juror"];

/// What a single trimmed, non-empty line turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Label: text` where the label carries a role keyword.
    Cue { speaker: &'a str, text: &'a str },
    Body(&'a str),
}

/// Known fragility: a body line that happens to contain a role keyword
/// before its first colon ("The Petitioner relies on: ...") is taken as a
/// speaker cue. Transcripts carry no escaping, so this is left as is.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some((label, rest)) = line.split_once(SEPARATOR) {
        if ROLE_KEYWORDS.iter().any(|k| label.contains(k)) {
            return LineKind::Cue {
                speaker: label.trim(),
                text: rest.trim(),
            };
        }
    }
    LineKind::Body(line)
}

/// Maps whatever label the model used onto one of the fixed display names.
/// Juror labels and unknown labels pass through.
pub fn canonical_speaker(label: &str) -> String {
    if label.contains("Judge") {
        PRESIDING_JUDGE.to_string()
    } else if label.contains("Petitioner") || label.contains("Appellant") {
        PETITIONER_COUNSEL.to_string()
    } else if label.contains("Respondent") || label.contains("Defense") {
        RESPONDENT_COUNSEL.to_string()
    } else {
        label.to_string()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SpeakerState {
    NoSpeaker,
    HasSpeaker(String),
}

pub fn parse_transcript(transcript: &str) -> Vec<Utterance> {
    let mut utterances: Vec<Utterance> = Vec::new();
    let mut state = SpeakerState::NoSpeaker;

    for line in transcript.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match classify_line(line) {
            LineKind::Cue { speaker, text } => {
                let speaker = canonical_speaker(speaker);
                utterances.push(Utterance::new(speaker.clone(), text));
                state = SpeakerState::HasSpeaker(speaker);
            }
            LineKind::Body(text) => match &state {
                SpeakerState::HasSpeaker(current) => {
                    tracing::trace!(speaker = %current, "continuation line");
                    if let Some(last) = utterances.last_mut() {
                        last.continuation.push(text.to_string());
                    }
                }
                // Nobody has spoken yet: nothing to attach the line to.
                SpeakerState::NoSpeaker => {}
            },
        }
    }

    utterances
}
