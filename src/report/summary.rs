//! Report line formatting

use crate::card::{Corner, EvaluatedFight, VerdictTally};
use crate::report::directory::{NameDirectory, UNKNOWN_NAME};
use crate::weighin::VerdictReport;

/// Resolve the display name for one corner: an explicit name on the fight
/// record wins, then the directory, then the report fallback.
pub fn corner_display_name(
    name: Option<&str>,
    id: Option<&str>,
    directory: &NameDirectory,
) -> String {
    if let Some(name) = name {
        if !name.is_empty() {
            // The host stores names as "Nombre (Apodo)"; the report shows
            // only the name.
            return name.split(" (").next().unwrap_or(name).to_string();
        }
    }
    match id {
        Some(id) => directory.resolve(id),
        None => UNKNOWN_NAME.to_string(),
    }
}

fn reading_display(weight_lbs: f64) -> String {
    if weight_lbs > 0.0 {
        format!("{:.1} lbs", weight_lbs)
    } else {
        "—".to_string()
    }
}

fn corner_segment(
    corner: Corner,
    name: &str,
    weight_lbs: f64,
    verdict: &VerdictReport,
) -> String {
    format!(
        "{}: {} {} — {}",
        corner.label(),
        name,
        reading_display(weight_lbs),
        verdict.message
    )
}

/// One printable report line for an evaluated fight.
///
/// `ordinal` is the 1-based position on the card, used when the fight
/// record carries no bout number.
pub fn render_fight_line(
    evaluated: &EvaluatedFight,
    ordinal: usize,
    directory: &NameDirectory,
) -> String {
    let fight = &evaluated.fight;
    let bout = fight
        .bout_number
        .map(|n| n as usize)
        .unwrap_or(ordinal);

    let name_a = corner_display_name(
        fight.boxer_a_name.as_deref(),
        fight.boxer_a_id.as_deref(),
        directory,
    );
    let name_b = corner_display_name(
        fight.boxer_b_name.as_deref(),
        fight.boxer_b_id.as_deref(),
        directory,
    );

    format!(
        "Pelea {} · {} [{}] | {} | {}",
        bout,
        if fight.contracted_weight.is_empty() {
            UNKNOWN_NAME
        } else {
            fight.contracted_weight.as_str()
        },
        evaluated.division_name(),
        corner_segment(Corner::Red, &name_a, fight.weight_a_lbs, &evaluated.verdict_a),
        corner_segment(Corner::Blue, &name_b, fight.weight_b_lbs, &evaluated.verdict_b),
    )
}

/// Compliance tally footer for the report
pub fn render_tally_line(tally: &VerdictTally) -> String {
    format!(
        "Pesajes: {} en peso, {} en tolerancia, {} fuera de tolerancia, {} pendientes",
        tally.ok, tally.warning, tally.fail, tally.pending
    )
}
