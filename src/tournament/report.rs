//! Console report for a single trial.
//!
//! Human-readable only. Use serde on [`TournamentOutcome`] for anything a
//! program needs to read back.
//!
//! [`TournamentOutcome`]: crate::tournament::simulation::TournamentOutcome

use std::fmt::Write;

use crate::tournament::group::GroupStage;
use crate::tournament::placement::Placements;

/// Width of the team name column.
const NAME_WIDTH: usize = 15;

/// Group tables, one block per group, rows in table order.
pub fn render_group_results(stage: &GroupStage) -> String {
    let mut out = String::from("GROUP RESULTS:\n");

    for table in stage.iter() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "Group {}", table.label);
        for row in &table.rows {
            let _ = writeln!(out, "  {:<NAME_WIDTH$} {}", row.team, row.points);
        }
    }

    out.push('\n');
    out
}

/// Every team with its furthest stage, alphabetically.
pub fn render_placements(placements: &Placements) -> String {
    let mut out = String::from("PLACEMENTS:\n");

    for (team, stage) in placements.iter() {
        let _ = writeln!(out, "{:<NAME_WIDTH$} {}", team, stage);
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::group::{GroupLabel, GroupTable, TableRow};
    use crate::tournament::placement::Stage;
    use crate::tournament::team::TeamId;

    #[test]
    fn test_group_results_layout() {
        let stage: GroupStage = [GroupTable {
            label: GroupLabel::H,
            rows: vec![
                TableRow { team: TeamId::from("spain"), points: 7 },
                TableRow { team: TeamId::from("uruguay"), points: 4 },
            ],
            matches: Vec::new(),
        }]
        .into_iter()
        .collect();

        assert_eq!(
            render_group_results(&stage),
            "GROUP RESULTS:\nGroup H\n  spain           7\n  uruguay         4\n\n"
        );
    }

    #[test]
    fn test_placements_sorted_by_team() {
        let mut placements = Placements::new();
        placements.promote(&TeamId::from("norway"), Stage::QuarterFinal);
        placements.promote(&TeamId::from("ghana"), Stage::Groups);

        assert_eq!(
            render_placements(&placements),
            "PLACEMENTS:\nghana           GROUPS\nnorway          QF\n\n"
        );
    }
}
