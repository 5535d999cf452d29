use crate::model::case::CaseSummary;
use crate::model::persona::{Persona, BENCH, JUDGE, JURY, JUROR_ANALYTICAL};

pub const VERDICT_HEADING: &str = "Judgment Pronounced";

/// Builds the prompt for each phase of a proceeding.
/// Formatting only: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn arguments(case: &CaseSummary) -> String {
        let mut prompt = String::new();

        push_persona(&mut prompt, &JUDGE);
        push_roster(&mut prompt, &BENCH);

        prompt.push_str("TASK:\n");
        prompt.push_str("Simulate Supreme Court oral arguments based ONLY on this case:\n");
        prompt.push_str(case.as_str());
        prompt.push_str("\n\n");
        prompt.push_str(
            "Petitioner Counsel opens, Respondent Counsel responds, Presiding Judge moderates.\n",
        );
        prompt.push_str(
            "Use exact speaker titles: Presiding Judge, Petitioner Counsel, Respondent Counsel.\n",
        );
        push_format_rules(&mut prompt);
        push_expected_output(&mut prompt, "Transcript of arguments.");

        prompt
    }

    pub fn deliberation(arguments: &str) -> String {
        let mut prompt = String::new();

        push_persona(&mut prompt, &JUROR_ANALYTICAL);
        push_roster(&mut prompt, &JURY);

        prompt.push_str("TASK:\n");
        prompt.push_str("Three jurors deliberate on these arguments:\n");
        prompt.push_str(arguments);
        prompt.push_str("\n\n");
        prompt.push_str("Each juror speaks using their full role name: ");
        prompt.push_str(&role_list(&JURY));
        prompt.push_str(".\n");
        prompt.push_str("End with clear vote count and majority reasoning.\n");
        push_format_rules(&mut prompt);
        push_expected_output(&mut prompt, "Deliberation transcript.");

        prompt
    }

    pub fn verdict(arguments: &str, deliberation: &str) -> String {
        let mut prompt = String::new();

        push_persona(&mut prompt, &JUDGE);

        prompt.push_str("TASK:\n");
        prompt.push_str("Deliver final Supreme Court judgment based on:\n");
        prompt.push_str("Arguments:\n");
        prompt.push_str(arguments);
        prompt.push_str("\n\nJury deliberation:\n");
        prompt.push_str(deliberation);
        prompt.push_str("\n\n");
        prompt.push_str(&format!("Start with \"{VERDICT_HEADING}\" as a heading.\n"));
        prompt.push_str(&format!(
            "Then provide the full judgment using only the title \"{}\" for all speaking parts.\n",
            JUDGE.role
        ));
        prompt.push_str("No emojis, no extra symbols, no additional text after the judgment.\n");
        prompt.push_str(
            "State clearly whether the appeal is allowed or dismissed and give the operative order.\n",
        );
        push_expected_output(&mut prompt, "Final judgment.");

        prompt
    }
}

fn push_persona(prompt: &mut String, persona: &Persona) {
    prompt.push_str(&format!("You are {}. {}\n", persona.role, persona.backstory));
    prompt.push_str(&format!("Your personal goal is: {}\n\n", persona.goal));
}

fn push_roster(prompt: &mut String, roster: &[Persona]) {
    prompt.push_str("PARTICIPANTS:\n");
    for p in roster {
        prompt.push_str(&format!("- {}: {} ({})\n", p.role, p.goal, p.backstory));
    }
    prompt.push('\n');
}

fn push_format_rules(prompt: &mut String) {
    prompt.push_str("Write every spoken line as \"Speaker Title: words\".\n");
    prompt.push_str("Produce a clean transcript with no emojis, no extra symbols, no stage directions.\n");
}

fn push_expected_output(prompt: &mut String, expected: &str) {
    prompt.push_str("\nEXPECTED OUTPUT:\n");
    prompt.push_str(expected);
    prompt.push('\n');
}

fn role_list(roster: &[Persona]) -> String {
    roster.iter().map(|p| p.role).collect::<Vec<_>>().join(", ")
}
