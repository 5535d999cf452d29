use serde::{Deserialize, Serialize};

/// Which sampling configuration a persona is served with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendProfile {
    /// Low temperature, large output budget. Judge and counsel.
    Precise,
    /// High temperature, smaller output budget. Jurors.
    Exploratory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub profile: BackendProfile,
}

pub const JUDGE: Persona = Persona {
    role: "Presiding Judge",
    goal: "Moderate proceedings and deliver reasoned judgment.",
    backstory: "Senior Supreme Court judge.",
    profile: BackendProfile::Precise,
};

pub const PETITIONER: Persona = Persona {
    role: "Petitioner Counsel",
    goal: "Argue for the appeal.",
    backstory: "Advocate for the affected employees.",
    profile: BackendProfile::Precise,
};

pub const RESPONDENT: Persona = Persona {
    role: "Respondent Counsel",
    goal: "Defend the High Court decision.",
    backstory: "Advocate for the State.",
    profile: BackendProfile::Precise,
};

pub const JUROR_ANALYTICAL: Persona = Persona {
    role: "Juror #1 (Analytical)",
    goal: "Evaluate logic and precedent.",
    backstory: "Former law professor.",
    profile: BackendProfile::Exploratory,
};

pub const JUROR_EQUITABLE: Persona = Persona {
    role: "Juror #2 (Equitable)",
    goal: "Consider fairness and impact.",
    backstory: "Social justice advocate.",
    profile: BackendProfile::Exploratory,
};

pub const JUROR_SKEPTICAL: Persona = Persona {
    role: "Juror #3 (Skeptical)",
    goal: "Challenge assumptions.",
    backstory: "Retired High Court judge.",
    profile: BackendProfile::Exploratory,
};

pub const BENCH: [Persona; 3] = [JUDGE, PETITIONER, RESPONDENT];
pub const JURY: [Persona; 3] = [JUROR_ANALYTICAL, JUROR_EQUITABLE, JUROR_SKEPTICAL];
