use serde::{Deserialize, Serialize};

/// Snapshot of one player's wagering for the hand, taken whenever pots
/// must be computed. Not persisted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerContribution {
    pub player_id: usize,
    pub total_contributed: u32,
    pub folded: bool,
}

/// One settled pot layer. Folded players' chips stay in `amount` but their
/// ids never appear in `eligible`. `level` is the cumulative per-player
/// contribution this layer represents.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    pub name: String,
    pub amount: u32,
    pub eligible: Vec<usize>,
    pub level: u32,
}

/// Splits the wagered chips into a main pot and side pots by iterative
/// layer peeling: each layer takes the minimum remaining contribution from
/// every player still holding chips in the working set, and only non-folded
/// members of that set may win it. The pot amounts always sum to the total
/// contributed, regardless of folds or how many all-ins overlap.
pub fn compute_pots(contributions: &[PlayerContribution]) -> Vec<Pot> {
    let mut working: Vec<(usize, u32, bool)> = contributions
        .iter()
        .filter(|c| c.total_contributed > 0)
        .map(|c| (c.player_id, c.total_contributed, c.folded))
        .collect();

    let mut pots = Vec::new();
    let mut level = 0u32;
    while !working.is_empty() {
        let min = working
            .iter()
            .map(|&(_, remaining, _)| remaining)
            .min()
            .unwrap_or(0);
        level += min;
        let amount = min * working.len() as u32;
        let eligible: Vec<usize> = working
            .iter()
            .filter(|&&(_, _, folded)| !folded)
            .map(|&(id, _, _)| id)
            .collect();
        pots.push(Pot {
            name: pot_label(pots.len()),
            amount,
            eligible,
            level,
        });
        for entry in &mut working {
            entry.1 -= min;
        }
        working.retain(|&(_, remaining, _)| remaining > 0);
    }
    pots
}

fn pot_label(index: usize) -> String {
    if index == 0 {
        "Main Pot".to_string()
    } else {
        format!("Side Pot {}", index)
    }
}
