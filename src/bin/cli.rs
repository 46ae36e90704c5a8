//! Rebound Odds CLI - rebound threshold probabilities, fair odds and stake sizing

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use rebound_odds::core::{american_to_decimal, EngineError};
use rebound_odds::data::{GameLogSource, IndexedGameLogs};
use rebound_odds::engine::Engine;
use rebound_odds::models::{Evaluation, GamePoint};

/// Default box-score CSV (relative to project root)
const DEFAULT_DATA_PATH: &str = "data/box_scores.csv";
/// Width of the longest bar in the rebounds chart
const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "rebound-odds")]
#[command(author, version, about = "Rebound threshold odds CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Path to box-score CSV
    #[arg(long, env = "DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a rebound threshold for a player
    Evaluate {
        /// Player name as it appears in the data
        #[arg(short, long)]
        player: String,

        /// Rebound threshold (positive integer)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        threshold: u32,

        /// Sportsbook American odds for the over (e.g. -115, +130)
        #[arg(short, long, allow_negative_numbers = true)]
        odds: Option<f64>,

        /// Bankroll for converting the stake percentage to an amount
        #[arg(long)]
        bankroll: Option<f64>,

        /// Hide the rebounds chart
        #[arg(long)]
        no_chart: bool,
    },

    /// List players in the data with game counts
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", "Rebound Odds CLI v0.1.0".cyan().bold());
    println!();

    if !cli.interactive && cli.command.is_none() {
        println!("No command specified. Use --help for usage information.");
        return Ok(());
    }

    let engine = Engine::new(load_logs(&cli.data)?);

    if cli.interactive {
        run_interactive(&engine)?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Evaluate {
                player,
                threshold,
                odds,
                bankroll,
                no_chart,
            } => {
                evaluate_player(&engine, &player, threshold, odds, bankroll, !no_chart);
            }
            Commands::List => {
                list_players(engine.source());
            }
        }
    }

    Ok(())
}

fn load_logs(path: &Path) -> Result<IndexedGameLogs> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Loading box scores...");

    let logs = IndexedGameLogs::load(path)
        .with_context(|| format!("Failed to load box scores from {:?}", path))?;

    pb.finish_and_clear();
    Ok(logs)
}

fn evaluate_player(
    engine: &Engine<IndexedGameLogs>,
    player: &str,
    threshold: u32,
    odds: Option<f64>,
    bankroll: Option<f64>,
    show_chart: bool,
) {
    println!(
        "{}: {} / {}+ rebounds",
        "Evaluating".green(),
        player,
        threshold
    );
    println!();

    match engine.evaluate(player, threshold, odds) {
        Ok(eval) => {
            print_evaluation(&eval, bankroll);
            if show_chart {
                print_chart(&eval.series, threshold);
            }
        }
        Err(e) => println!("{}", explain(&e).red()),
    }
}

/// Message shown to the user for each pipeline failure
fn explain(err: &EngineError) -> String {
    match err {
        EngineError::UnknownAthlete(name) => {
            format!("No data for player '{}'. Use `list` to see available players.", name)
        }
        EngineError::InsufficientData { field } => {
            format!("Not enough data: no recorded `{}` values for this player.", field)
        }
        EngineError::UndefinedOdds => {
            "Probability is zero for this threshold; too low to quote odds.".to_string()
        }
        EngineError::InvalidOdds(odds) => {
            format!("Sportsbook odds must be non-zero, got {}.", odds)
        }
    }
}

fn print_evaluation(eval: &Evaluation, bankroll: Option<f64>) {
    println!("{}", "Rates:".yellow().bold());
    println!("  Offensive rebounds (λ): {:>6.3}", eval.rates.lambda_orb);
    println!("  Defensive rebounds (λ): {:>6.3}", eval.rates.lambda_drb);
    println!("  Games in log:           {:>6}", eval.series.len());
    if let Some(rate) = eval.hit_rate() {
        println!("  Historical hit rate:    {:>5.1}%", rate * 100.0);
    }
    println!();

    println!("{}", "Model:".yellow().bold());
    println!(
        "  P(TRB >= {}):           {:>5.1}%",
        eval.threshold,
        eval.probability.probability * 100.0
    );
    println!(
        "  Support truncated at:   {:>6} rebounds",
        eval.probability.max_trb_considered
    );
    println!("  Fair decimal odds:      {:>6.3}", eval.odds.decimal_odds);
    println!(
        "  Fair American odds:     {:>6}",
        format_american(eval.odds.american_odds)
    );
    println!();

    let Some(stake) = &eval.stake else {
        println!(
            "{}",
            "(No sportsbook odds given. Use --odds to get a stake recommendation)".dimmed()
        );
        println!();
        return;
    };

    println!("{}", "Stake:".yellow().bold());
    println!(
        "  Sportsbook odds:        {:>6} (decimal {:.3})",
        format_american(stake.sportsbook_american_odds),
        american_to_decimal(stake.sportsbook_american_odds).unwrap_or(f64::NAN)
    );
    println!(
        "  Implied probability:    {:>5.1}%",
        stake.implied_probability * 100.0
    );
    println!("  Expected value / unit:  {:>+6.3}", stake.expected_value);
    println!("  Full Kelly fraction:    {:>+6.3}", stake.kelly_fraction);

    let pct = format!("{:.2}%", stake.quarter_kelly_percent);
    if stake.is_value_bet() {
        println!("  Quarter Kelly stake:    {:>6}", pct.green().bold());
    } else {
        println!("  Quarter Kelly stake:    {:>6} {}", pct.red(), "(no edge)".dimmed());
    }

    if let Some(bankroll) = bankroll {
        println!(
            "  Recommended amount:     {:>6.2} of {:.2}",
            stake.stake_amount(bankroll),
            bankroll
        );
    }
    println!();
}

fn print_chart(series: &[GamePoint], threshold: u32) {
    println!("{}", "Rebounds by game:".yellow().bold());

    let max = series
        .iter()
        .filter_map(|p| p.rebs)
        .max()
        .unwrap_or(0)
        .max(threshold);
    if max == 0 {
        println!("{}", "(no rebounds recorded)".dimmed());
        return;
    }

    let scale = |v: u32| (v as usize * CHART_WIDTH) / max as usize;
    let marker = scale(threshold);

    for point in series {
        let date = point.date.format("%Y-%m-%d");
        let Some(rebs) = point.rebs else {
            println!("{}  {:>3} {}", date, "-", "(missing)".dimmed());
            continue;
        };

        let bar = render_bar(scale(rebs), marker);
        let bar = if point.met_threshold {
            bar.green()
        } else {
            bar.red()
        };
        println!("{}  {:>3} {}", date, rebs, bar);
    }
    println!("{}", format!("(| marks the {} rebound threshold)", threshold).dimmed());
    println!();
}

/// Bar of `len` cells with a `|` at the threshold column
fn render_bar(len: usize, marker: usize) -> String {
    (0..len.max(marker + 1))
        .map(|i| match i {
            i if i == marker => '|',
            i if i < len => '█',
            _ => ' ',
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn list_players(logs: &IndexedGameLogs) {
    let players = logs.athletes();
    if players.is_empty() {
        println!("{}", "No players found.".yellow());
        return;
    }

    println!("{:<30} {:>6} {:>8}", "Player", "Games", "Max TRB");
    println!("{}", "-".repeat(46));

    for player in &players {
        let log = logs.get_log(player).unwrap_or_default();
        let max = log
            .iter()
            .filter_map(|g| g.rebs)
            .max()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<30} {:>6} {:>8}",
            truncate_name(player, 30),
            log.len(),
            max
        );
    }

    println!();
    println!("Total: {} players", players.len());
}

fn run_interactive(engine: &Engine<IndexedGameLogs>) -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!();

    let theme = ColorfulTheme::default();
    let players: Vec<String> = engine
        .source()
        .athletes()
        .into_iter()
        .map(str::to_string)
        .collect();

    if players.is_empty() {
        println!("{}", "No players found.".yellow());
        return Ok(());
    }

    loop {
        let options = vec!["Evaluate a threshold", "List players", "Quit"];

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let idx = Select::with_theme(&theme)
                    .with_prompt("Player")
                    .items(&players)
                    .default(0)
                    .interact()?;

                let threshold: u32 = Input::with_theme(&theme)
                    .with_prompt("Rebound threshold")
                    .validate_with(|t: &u32| -> Result<(), &str> {
                        if *t >= 1 {
                            Ok(())
                        } else {
                            Err("Threshold must be at least 1")
                        }
                    })
                    .interact_text()?;

                let odds: String = Input::with_theme(&theme)
                    .with_prompt("Sportsbook American odds (blank to skip)")
                    .allow_empty(true)
                    .validate_with(|s: &String| -> Result<(), &str> {
                        if s.trim().is_empty() {
                            return Ok(());
                        }
                        match parse_american(s) {
                            Some(_) => Ok(()),
                            None => Err("Enter non-zero American odds like -115 or +130"),
                        }
                    })
                    .interact_text()?;

                println!();
                evaluate_player(
                    engine,
                    &players[idx],
                    threshold,
                    parse_american(&odds),
                    None,
                    true,
                );
            }
            1 => {
                println!();
                list_players(engine.source());
                println!();
            }
            2 => {
                println!("Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Parse "+130" / "-115" / "130"; zero is rejected
fn parse_american(input: &str) -> Option<f64> {
    let value: f64 = input.trim().trim_start_matches('+').parse().ok()?;
    (value != 0.0 && value.is_finite()).then_some(value)
}

/// Format American odds with an explicit sign
fn format_american(odds: f64) -> String {
    if odds.is_infinite() {
        return "n/a".to_string();
    }
    if odds > 0.0 {
        format!("+{:.0}", odds)
    } else {
        format!("{:.0}", odds)
    }
}

/// Truncate name to fit display width
fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        name.to_string()
    } else {
        chars[..max_len - 1].iter().collect::<String>() + "…"
    }
}
