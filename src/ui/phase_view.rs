use crate::engine::prompt_builder::VERDICT_HEADING;
use crate::engine::transcript_parser::parse_transcript;
use crate::model::message::SpeakerRole;
use crate::model::phase::{Phase, PhaseResult};

/// One visual element of a phase panel, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(&'static str),
    Speaker {
        label: String,
        role: SpeakerRole,
        text: String,
    },
    Continuation(String),
}

/// Lays out a phase transcript as panel blocks. Text is shown verbatim; the
/// verdict panel gets its fixed heading first.
pub fn phase_blocks(result: &PhaseResult) -> Vec<Block> {
    let mut blocks = Vec::new();

    if result.phase == Phase::Verdict {
        blocks.push(Block::Heading(VERDICT_HEADING));
    }

    for utterance in parse_transcript(&result.transcript) {
        let role = utterance.role();
        blocks.push(Block::Speaker {
            label: utterance.speaker,
            role,
            text: utterance.text,
        });
        blocks.extend(utterance.continuation.into_iter().map(Block::Continuation));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(phase: Phase, transcript: &str) -> PhaseResult {
        PhaseResult {
            phase,
            transcript: transcript.to_string(),
        }
    }

    #[test]
    fn verdict_panel_opens_with_heading() {
        let blocks = phase_blocks(&result(
            Phase::Verdict,
            "Judgment Pronounced\nPresiding Judge: The appeal is dismissed.\nNo order as to costs.",
        ));

        assert_eq!(
            blocks,
            vec![
                Block::Heading("Judgment Pronounced"),
                Block::Speaker {
                    label: "Presiding Judge".into(),
                    role: SpeakerRole::Judge,
                    text: "The appeal is dismissed.".into(),
                },
                Block::Continuation("No order as to costs.".into()),
            ]
        );
    }

    #[test]
    fn other_panels_have_no_heading() {
        let blocks = phase_blocks(&result(
            Phase::Deliberation,
            "Juror #3 (Skeptical): I doubt it.\nJuror #1 (Analytical): Precedent says otherwise.",
        ));

        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| !matches!(b, Block::Heading(_))));
        assert!(matches!(
            &blocks[0],
            Block::Speaker { role: SpeakerRole::Juror, label, .. } if label == "Juror #3 (Skeptical)"
        ));
    }

    #[test]
    fn unparseable_transcript_renders_only_heading() {
        let blocks = phase_blocks(&result(Phase::Verdict, "The court has spoken."));
        assert_eq!(blocks, vec![Block::Heading("Judgment Pronounced")]);
    }
}
