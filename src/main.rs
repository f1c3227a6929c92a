use std::env;
use core::utils::TimeEstimation;
use core::{DEFAULT_INNINGS, GamePrep, InningsAggregator, LineupGenerator, PositionHistory};
use database::{GamePrepLoader, HistoryLoader, RosterLoader};
use env_logger::Env;
use log::info;
use std::path::Path;

mod display;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let mut args = env::args().skip(1);
    let roster_path = args.next().unwrap_or_else(|| String::from("data/players.json"));
    let prep_path = args.next().unwrap_or_else(|| String::from("data/game_prep.json"));
    let history_path = args
        .next()
        .unwrap_or_else(|| String::from("data/positions_data_history.json"));

    let innings = match env::var("INNINGS") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_INNINGS,
    };

    let players = RosterLoader::load(Path::new(&roster_path))?;

    // A missing prep or history file means an empty one, not a failed run.
    let prep = if Path::new(&prep_path).exists() {
        GamePrepLoader::load(Path::new(&prep_path))?
    } else {
        info!("no game prep at {}, assuming everyone is available", prep_path);
        GamePrep::default()
    };

    let history = if Path::new(&history_path).exists() {
        HistoryLoader::load(Path::new(&history_path))?
    } else {
        info!("no position history at {}, starting from zero", history_path);
        PositionHistory::default()
    };

    let (stats, estimated) = TimeEstimation::estimate(|| InningsAggregator::aggregate(&history));

    info!("history aggregated: {} ms", estimated);

    let result = LineupGenerator::generate(&players, innings, &prep, &stats);

    if !stats.is_empty() {
        println!("Player innings to date:");
        println!("{}", display::stats_table(&stats));
        println!();
    }

    println!("Lineups:");
    println!("{}", display::lineup_table(&result.lineups));
    println!();
    println!("Summary:");
    println!("{}", display::summary_table(&result.summary));

    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  {}", warning);
        }
    }

    Ok(())
}
