//! Card-level weigh-in evaluation

use serde::Serialize;

use crate::card::fight::FightWeighIn;
use crate::error::{Result, WeighInCoreError};
use crate::weighin::{rules_for_contracted, validate_against, VerdictReport, VerdictStatus, WeighInRules};

/// One evaluated fight: both corner verdicts plus the rules they were
/// checked against.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedFight {
    pub fight: FightWeighIn,
    pub rules: WeighInRules,
    pub verdict_a: VerdictReport,
    pub verdict_b: VerdictReport,
    /// Either corner is out of tolerance; saving needs confirmation
    pub requires_confirmation: bool,
}

impl EvaluatedFight {
    /// Division the contracted weight falls into ("N/A" if unresolvable)
    #[inline]
    pub fn division_name(&self) -> &'static str {
        self.rules.division_name
    }
}

/// Verdict counts across a card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerdictTally {
    pub pending: usize,
    pub ok: usize,
    pub warning: usize,
    pub fail: usize,
}

impl VerdictTally {
    fn record(&mut self, status: VerdictStatus) {
        match status {
            VerdictStatus::Pending => self.pending += 1,
            VerdictStatus::Ok => self.ok += 1,
            VerdictStatus::Warning => self.warning += 1,
            VerdictStatus::Fail => self.fail += 1,
        }
    }

    /// Total number of corner verdicts recorded
    pub fn total(&self) -> usize {
        self.pending + self.ok + self.warning + self.fail
    }
}

/// Evaluation of a full card
#[derive(Debug, Clone, Serialize)]
pub struct CardEvaluation {
    pub fights: Vec<EvaluatedFight>,
    pub tally: VerdictTally,
    /// Any fight on the card has an out-of-tolerance corner
    pub requires_confirmation: bool,
}

impl CardEvaluation {
    /// Look up an evaluated fight by its id
    pub fn find_fight(&self, fight_id: &str) -> Result<&EvaluatedFight> {
        self.fights
            .iter()
            .find(|f| f.fight.fight_id == fight_id)
            .ok_or_else(|| WeighInCoreError::FightNotFound(fight_id.to_string()))
    }

    /// Serialize the evaluation for the host to persist
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Evaluate one fight: derive the rules once, check both corners.
pub fn evaluate_fight(fight: FightWeighIn) -> EvaluatedFight {
    let rules = rules_for_contracted(&fight.contracted_weight);
    let verdict_a = validate_against(fight.weight_a_lbs, &rules);
    let verdict_b = validate_against(fight.weight_b_lbs, &rules);
    let requires_confirmation =
        verdict_a.status == VerdictStatus::Fail || verdict_b.status == VerdictStatus::Fail;

    EvaluatedFight {
        fight,
        rules,
        verdict_a,
        verdict_b,
        requires_confirmation,
    }
}

/// Evaluate every fight on a card.
pub fn evaluate_card(fights: Vec<FightWeighIn>) -> CardEvaluation {
    let mut tally = VerdictTally::default();
    let mut requires_confirmation = false;

    let fights: Vec<EvaluatedFight> = fights
        .into_iter()
        .map(|fight| {
            let evaluated = evaluate_fight(fight);
            tally.record(evaluated.verdict_a.status);
            tally.record(evaluated.verdict_b.status);
            requires_confirmation |= evaluated.requires_confirmation;
            evaluated
        })
        .collect();

    CardEvaluation {
        fights,
        tally,
        requires_confirmation,
    }
}
