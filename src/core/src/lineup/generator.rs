use crate::game::GamePrep;
use crate::history::PlayerStatsCollection;
use crate::lineup::Lineup;
use crate::lineup::summary::PlayerGameSummary;
use crate::lineup::usage::PlayerUsage;
use crate::roster::{Player, Position};
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

pub const DEFAULT_INNINGS: u8 = 6;

const MAX_PITCHER_APPEARANCES: u8 = 2;
const MAX_CATCHER_APPEARANCES: u8 = 2;

pub struct LineupGenerator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupGenerationResult {
    pub lineups: Vec<Lineup>,
    pub summary: Vec<PlayerGameSummary>,
    pub warnings: Vec<LineupWarning>,
}

/// Soft-failure conditions collected during generation. None of these block
/// output; they flag spots where the rotation heuristic ran out of options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LineupWarning {
    UnassignablePosition { inning: u8, position: Position },
    UnderutilizedPlayer { player_name: String },
}

impl Display for LineupWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LineupWarning::UnassignablePosition { inning, position } => {
                write!(
                    f,
                    "no eligible player left for {} in inning {}",
                    position.get_short_name(),
                    inning
                )
            }
            LineupWarning::UnderutilizedPlayer { player_name } => {
                write!(f, "{} did not play any innings", player_name)
            }
        }
    }
}

impl LineupGenerator {
    /// Produce one lineup per inning plus a per-player summary.
    ///
    /// Purely a function of its inputs: stable sorts and roster-order
    /// iteration mean two runs over identical inputs produce identical
    /// results.
    pub fn generate(
        players: &[Player],
        innings: u8,
        prep: &GamePrep,
        stats: &PlayerStatsCollection,
    ) -> LineupGenerationResult {
        let mut usage: Vec<PlayerUsage> = vec![PlayerUsage::default(); players.len()];
        let mut lineups: Vec<Lineup> = Vec::with_capacity(innings as usize);
        let mut warnings: Vec<LineupWarning> = Vec::new();

        for inning in 1..=innings {
            debug!("generating lineup for inning {}", inning);

            let mut lineup = Lineup::new();
            let mut used_players: Vec<usize> = Vec::new();

            Self::assign_planned_pitcher(
                players,
                prep,
                inning,
                &mut lineup,
                &mut used_players,
                &mut usage,
            );

            // The pitcher slot is retried here only when the plan left it open.
            for &position in Position::ASSIGNMENT_PRIORITY.iter() {
                if !lineup.is_open(position) {
                    continue;
                }

                let candidate = Self::find_candidate_for_position(
                    players,
                    prep,
                    stats,
                    &usage,
                    &used_players,
                    position,
                    inning,
                );

                match candidate {
                    Some(index) => {
                        Self::assign(players, index, position, &mut lineup, &mut used_players, &mut usage);
                    }
                    None => {
                        let warning = LineupWarning::UnassignablePosition { inning, position };
                        warn!("{}", warning);
                        warnings.push(warning);
                    }
                }
            }

            lineups.push(lineup);
        }

        for (index, player) in players.iter().enumerate() {
            if prep.is_inactive(&player.name) || usage[index].innings_played > 0 {
                continue;
            }

            let warning = LineupWarning::UnderutilizedPlayer {
                player_name: player.name.clone(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        let summary = players
            .iter()
            .zip(&usage)
            .map(|(player, usage)| PlayerGameSummary {
                player_name: player.name.clone(),
                innings_played: usage.innings_played,
                infield: usage.infield,
                outfield: usage.outfield,
            })
            .collect();

        LineupGenerationResult {
            lineups,
            summary,
            warnings,
        }
    }

    /// Honor the pitching plan for this inning. The plan overrides position
    /// eligibility but not availability or the hard appearance caps; a blocked
    /// plan entry leaves the pitcher slot to the general assignment loop.
    fn assign_planned_pitcher(
        players: &[Player],
        prep: &GamePrep,
        inning: u8,
        lineup: &mut Lineup,
        used_players: &mut Vec<usize>,
        usage: &mut [PlayerUsage],
    ) {
        let Some(pitcher_name) = prep.planned_pitcher(inning) else {
            return;
        };

        let Some(index) = players.iter().position(|p| p.name == pitcher_name) else {
            warn!(
                "planned pitcher {} for inning {} is not on the roster",
                pitcher_name, inning
            );
            return;
        };

        if !prep.is_available(pitcher_name, inning) {
            debug!(
                "planned pitcher {} is unavailable for inning {}",
                pitcher_name, inning
            );
            return;
        }

        if !Self::passes_constraints(&usage[index], Position::Pitcher) {
            debug!(
                "planned pitcher {} is already at the pitching cap",
                pitcher_name
            );
            return;
        }

        Self::assign(players, index, Position::Pitcher, lineup, used_players, usage);
    }

    /// Pick the fairest eligible player for a position, or `None` when every
    /// candidate is filtered out or blocked by a hard constraint.
    fn find_candidate_for_position(
        players: &[Player],
        prep: &GamePrep,
        stats: &PlayerStatsCollection,
        usage: &[PlayerUsage],
        used_players: &[usize],
        position: Position,
        inning: u8,
    ) -> Option<usize> {
        players
            .iter()
            .enumerate()
            .filter(|(index, player)| {
                !used_players.contains(index)
                    && prep.is_available(&player.name, inning)
                    && player.has_position(position)
            })
            .sorted_by(|&(a_index, a), &(b_index, b)| {
                Self::fairness_order(usage, stats, (a_index, a), (b_index, b))
            })
            .map(|(index, _)| index)
            .find(|&index| Self::passes_constraints(&usage[index], position))
    }

    /// Ascending fairness key: innings played so far this game, then the
    /// historical share of available innings. The sort is stable, so roster
    /// order breaks ties.
    fn fairness_order(
        usage: &[PlayerUsage],
        stats: &PlayerStatsCollection,
        (a_index, a): (usize, &Player),
        (b_index, b): (usize, &Player),
    ) -> Ordering {
        usage[a_index]
            .innings_played
            .cmp(&usage[b_index].innings_played)
            .then_with(|| {
                stats
                    .play_percentage_of(&a.name)
                    .partial_cmp(&stats.play_percentage_of(&b.name))
                    .unwrap_or(Ordering::Equal)
            })
    }

    fn passes_constraints(usage: &PlayerUsage, position: Position) -> bool {
        if position == Position::Pitcher && usage.pitched >= MAX_PITCHER_APPEARANCES {
            return false;
        }

        if position == Position::Catcher && usage.caught >= MAX_CATCHER_APPEARANCES {
            return false;
        }

        !usage.recent_positions.is_blocked(position)
    }

    fn assign(
        players: &[Player],
        index: usize,
        position: Position,
        lineup: &mut Lineup,
        used_players: &mut Vec<usize>,
        usage: &mut [PlayerUsage],
    ) {
        let player = &players[index];

        lineup.set(position, player.name.clone());
        used_players.push(index);
        usage[index].record_assignment(position);

        debug!("assigned {} to {}", player.name, position.get_short_name());
    }
}
