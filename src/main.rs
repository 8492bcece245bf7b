use othello_ab::player::ai::{best_move, AIConfig, Difficulty};
use othello_ab::selfplay::{run_selfplay, ControllerKind, SelfPlayConfig};
use othello_ab::Game;
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = AIConfig::get();

    match args.get(1).map(String::as_str) {
        Some("selfplay") => run_selfplay_mode(&args[2..], config),
        Some("best") => run_best_mode(&args[2..], config),
        _ => {
            eprintln!("Usage: othello-ab selfplay [games] [black_depth] [white_depth]");
            eprintln!("       othello-ab best [depth]");
            std::process::exit(1);
        }
    }
}

fn parse_arg(args: &[String], index: usize, default: usize) -> anyhow::Result<usize> {
    match args.get(index) {
        Some(s) => Ok(s.parse()?),
        None => Ok(default),
    }
}

/// depth 0 はランダムプレイヤー扱い
fn controller_for(depth: usize) -> ControllerKind {
    if depth == 0 {
        ControllerKind::Random
    } else {
        ControllerKind::AlphaBeta { depth }
    }
}

fn run_selfplay_mode(args: &[String], config: &AIConfig) -> anyhow::Result<()> {
    let default_depth = Difficulty::Easy.depth(config);
    let num_games = parse_arg(args, 0, config.selfplay.num_games)?;
    let black_depth = parse_arg(args, 1, default_depth)?;
    let white_depth = parse_arg(args, 2, default_depth)?;

    let mut sp = SelfPlayConfig::from_ai_config(
        config,
        controller_for(black_depth),
        controller_for(white_depth),
    );
    sp.num_games = num_games;
    sp.save_results = true;

    let stats = run_selfplay(&sp)?;

    println!("=== Self-Play Results ===");
    println!("Black: {}", stats.black_player);
    println!("White: {}", stats.white_player);
    println!("Games: {}", stats.total_games);
    if stats.total_games > 0 {
        let pct = |n: usize| n as f64 / stats.total_games as f64 * 100.0;
        println!("Black Wins: {} ({:.1}%)", stats.black_wins, pct(stats.black_wins));
        println!("White Wins: {} ({:.1}%)", stats.white_wins, pct(stats.white_wins));
        println!("Draws: {} ({:.1}%)", stats.draws, pct(stats.draws));
        println!("Unfinished: {}", stats.unfinished);
        println!("Avg Plies: {:.1}", stats.avg_plies);
        println!("Avg Time: {:.1}s", stats.avg_time_ms / 1000.0);
    }
    Ok(())
}

fn run_best_mode(args: &[String], config: &AIConfig) -> anyhow::Result<()> {
    let depth = parse_arg(args, 0, Difficulty::Medium.depth(config))?;
    let game = Game::new(depth);
    let result = best_move(&game, depth);

    match result.best_move {
        Some(mv) => println!(
            "depth {}: {} plays {} (value {})",
            depth, game.current_player, mv, result.value
        ),
        None => println!("depth {}: no move (value {})", depth, result.value),
    }
    Ok(())
}
