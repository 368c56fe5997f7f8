use clap::Parser;
use seabattle::{init_logging, parse_position, Game, GameOptions, ShotOutcome};

/// Headless self-play simulation: two engines exchange shots over the turn
/// interface until one fleet is destroyed.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// Board edge length.
    #[arg(long, default_value_t = 10)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut first_wins = 0usize;
    for game_index in 0..cli.games {
        let seed_for = |side: u64| cli.seed.map(|seed| seed ^ (game_index * 2 + side));
        let mut first = Game::new(GameOptions {
            size: cli.size,
            numeric: true,
            seed: seed_for(0),
            ..GameOptions::default()
        })?;
        let mut second = Game::new(GameOptions {
            size: cli.size,
            numeric: true,
            seed: seed_for(1),
            ..GameOptions::default()
        })?;

        let mut shots = 0usize;
        while !first.is_end_game() && !second.is_end_game() {
            shots += turn(&mut first, &mut second)?;
            if first.is_end_game() || second.is_end_game() {
                break;
            }
            shots += turn(&mut second, &mut first)?;
        }

        let winner = if second.is_defeat() { "first" } else { "second" };
        if second.is_defeat() {
            first_wins += 1;
        }
        println!(
            "game {}: winner {} after {} shots",
            game_index + 1,
            winner,
            shots
        );
    }
    println!("first won {}/{} games", first_wins, cli.games);
    Ok(())
}

/// One attacking turn; the shooter keeps firing while it hits.
fn turn(shooter: &mut Game, target: &mut Game) -> anyhow::Result<usize> {
    let mut shots = 0usize;
    loop {
        let text = shooter.do_shot()?;
        shots += 1;
        let position = parse_position(&text)?;
        let outcome = target.handle_enemy_shot(position)?;
        log::debug!("{} -> {:?}", text, outcome);
        shooter.handle_enemy_reply(outcome);
        if outcome == ShotOutcome::Miss || target.is_defeat() {
            return Ok(shots);
        }
    }
}
