use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please provide or select a case summary.")]
pub struct EmptyCaseError;

/// User supplied case text. Construction rejects blank input, so a value of
/// this type is always something the pipeline can run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSummary(String);

impl CaseSummary {
    pub fn new(text: &str) -> Result<Self, EmptyCaseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EmptyCaseError);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct ExampleCase {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const EXAMPLE_CASES: &[ExampleCase] = &[
    ExampleCase {
        title: "Punjab Water Board v. Contractor (Arbitration Deposit Clause)",
        summary: "In 2008, Punjab State Water Supply Board issued tender for water supply and sewerage works on turnkey basis.
Appellant company was awarded the contract in 2008, formal agreement signed in 2009.
Clause 25(viii) of the tender required any party invoking arbitration to deposit 10% of the claimed amount
as a call deposit in the name of the arbitrator. On award, only proportional amount refunded if claimant succeeds;
balance forfeited to the other party even if the other party loses the case.
Contractor challenged this clause as arbitrary, violative of Article 14, and a clog on arbitration.
High Court dismissed challenge. Appeal to Supreme Court.",
    },
    ExampleCase {
        title: "Andhra Pradesh Promotions Case (Prospective Overruling)",
        summary: "Dispute over G.O.Ms allowing Senior Assistants/Stenographers from Head Office and other departments
to be considered for promotion by transfer to Assistant Labour Officer posts in Labour Department,
allegedly violating Presidential Order under Article 371-D (zonal/local cadre system).
State Administrative Tribunal struck down the G.O.Ms but saved past promotions (prospective effect).
High Court overturned the saving of past promotions, making declaration retrospective.
Affected promoted employees challenged, arguing doctrine of prospective overruling should apply.",
    },
    ExampleCase {
        title: "Chanmuniya v. Virendra Kumar (Live-in Relationships & Maintenance)",
        summary: "Woman claimed she was married to the man in 1986 per Hindu rites, lived together 2-3 years,
then he deserted her. Filed maintenance under Section 125 CrPC in 2001.
Man claimed he was already married to another woman (Lakshmi) since 1980 with a son.
Family Court and High Court held the claimant was the wife.
Issue: Can a woman in a 'relationship in the nature of marriage' (live-in) claim maintenance
under Domestic Violence Act 2005 even if not legally wedded wife? Meaning of 'relationship in the nature of marriage'.
Also, effect of not impleading the first wife.",
    },
];
