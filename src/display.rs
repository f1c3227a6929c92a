use core::{Lineup, PlayerGameSummary, PlayerStatsCollection, Position};
use itertools::Itertools;

/// Lineup table: one row per position in display order, one column per
/// inning, empty cell where no player could be assigned.
pub fn lineup_table(lineups: &[Lineup]) -> String {
    let mut header = vec![String::from("Position")];
    header.extend((1..=lineups.len()).map(|inning| format!("Inning {}", inning)));

    let rows = Position::DISPLAY_ORDER
        .iter()
        .map(|&position| {
            let mut row = vec![String::from(position.get_short_name())];
            row.extend(
                lineups
                    .iter()
                    .map(|lineup| String::from(lineup.get(position).unwrap_or(""))),
            );
            row
        })
        .collect();

    render_table(header, rows)
}

/// Summary table: innings per player in roster order, split by field side.
pub fn summary_table(summary: &[PlayerGameSummary]) -> String {
    let header = ["Player", "Innings Played", "Infield", "Outfield"]
        .map(String::from)
        .to_vec();

    let rows = summary
        .iter()
        .map(|player| {
            vec![
                player.player_name.clone(),
                player.innings_played.to_string(),
                player.infield.to_string(),
                player.outfield.to_string(),
            ]
        })
        .collect();

    render_table(header, rows)
}

/// Historical stats table: per-position innings, totals and play percentage.
pub fn stats_table(stats: &PlayerStatsCollection) -> String {
    let mut header = vec![String::from("Player")];
    header.extend(
        Position::DISPLAY_ORDER
            .iter()
            .map(|position| String::from(position.get_short_name())),
    );
    header.extend(
        ["Total Innings", "Available Innings", "Percentage Played"].map(String::from),
    );

    let rows = stats
        .player_names()
        .iter()
        .filter_map(|player_name| stats.get(player_name).map(|player| (player_name, player)))
        .map(|(player_name, player)| {
            let mut row = vec![player_name.clone()];
            row.extend(
                Position::DISPLAY_ORDER
                    .iter()
                    .map(|&position| player.innings_at(position).to_string()),
            );
            row.push(player.total_innings.to_string());
            row.push(player.available_innings.to_string());
            row.push(format!("{:.2}", player.play_percentage()));
            row
        })
        .collect();

    render_table(header, rows)
}

fn render_table(header: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(column, title)| {
            rows.iter()
                .map(|row| row[column].len())
                .chain([title.len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell))
                .join("  ")
                .trim_end()
                .to_string()
        })
        .join("\n")
}
