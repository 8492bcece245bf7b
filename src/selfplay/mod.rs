use crate::core::Winner;
use crate::game::{Match, MatchResult};
use crate::logic::Game;
use crate::player::ai::AIConfig;
use crate::player::{AlphaBetaAI, PlayerController, RandomAI, WeightedRandomAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// 自己対局に参加するプレイヤーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerKind {
    AlphaBeta { depth: usize },
    Random,
    Weighted,
}

impl ControllerKind {
    fn build(self, name: &str, seed: Option<u64>) -> Box<dyn PlayerController> {
        match (self, seed) {
            (ControllerKind::AlphaBeta { depth }, _) => Box::new(AlphaBetaAI::new(name, depth)),
            (ControllerKind::Random, Some(seed)) => Box::new(RandomAI::with_seed(name, seed)),
            (ControllerKind::Random, None) => Box::new(RandomAI::new(name)),
            (ControllerKind::Weighted, Some(seed)) => {
                Box::new(WeightedRandomAI::with_seed(name, seed))
            }
            (ControllerKind::Weighted, None) => Box::new(WeightedRandomAI::new(name)),
        }
    }

    fn label(self) -> String {
        match self {
            ControllerKind::AlphaBeta { depth } => format!("AlphaBeta(depth={})", depth),
            ControllerKind::Random => "Random".to_string(),
            ControllerKind::Weighted => "Weighted".to_string(),
        }
    }
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub black: ControllerKind,
    pub white: ControllerKind,
    pub max_plies: usize,
    /// 乱数系プレイヤーのシード (ゲームごとに番号を足す)
    pub seed: Option<u64>,
    pub save_results: bool,
    pub output_dir: String,
}

impl SelfPlayConfig {
    pub fn from_ai_config(config: &AIConfig, black: ControllerKind, white: ControllerKind) -> Self {
        SelfPlayConfig {
            num_games: config.selfplay.num_games,
            black,
            white,
            max_plies: config.selfplay.max_plies,
            seed: None,
            save_results: false,
            output_dir: config.selfplay.output_dir.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    /// 手数上限で打ち切られた対局
    pub unfinished: usize,
    pub avg_plies: f64,
    pub avg_time_ms: f64,
    pub black_player: String,
    pub white_player: String,
    pub games: Vec<MatchResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self {
            total_games: 0,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
            unfinished: 0,
            avg_plies: 0.0,
            avg_time_ms: 0.0,
            black_player: String::new(),
            white_player: String::new(),
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: MatchResult) {
        self.total_games += 1;
        match result.winner {
            Some(Winner::Black) => self.black_wins += 1,
            Some(Winner::White) => self.white_wins += 1,
            Some(Winner::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_plies: usize = self.games.iter().map(|g| g.plies).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_plies = total_plies as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

impl Default for SelfPlayStats {
    fn default() -> Self {
        Self::new()
    }
}

/// 対局を並列に実行して集計する
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    stats.black_player = config.black.label();
    stats.white_player = config.white.label();

    let results: Vec<MatchResult> = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| {
            let seed = config.seed.map(|s| s.wrapping_add(game_num as u64 * 2));
            let black = config.black.build("AI-Black", seed);
            let white = config.white.build("AI-White", seed.map(|s| s.wrapping_add(1)));

            let result = Match::new(Game::new(0), black.as_ref(), white.as_ref())
                .with_max_plies(config.max_plies)
                .play();

            eprintln!(
                "[selfplay] game {}/{}: {} ({}-{}, {} plies, {:.1}s)",
                game_num + 1,
                config.num_games,
                match result.winner {
                    Some(w) => w.to_string(),
                    None => "Unfinished".to_string(),
                },
                result.black,
                result.white,
                result.plies,
                result.time_ms as f64 / 1000.0
            );
            result
        })
        .collect();

    for result in results {
        stats.add_result(result);
    }

    if config.save_results {
        let path = save_stats(&stats, &config.output_dir)?;
        eprintln!("[selfplay] saved results to {}", path);
    }

    Ok(stats)
}

fn save_stats(stats: &SelfPlayStats, output_dir: &str) -> anyhow::Result<String> {
    std::fs::create_dir_all(output_dir)?;

    let filename = format!(
        "{}/selfplay_{}.json",
        output_dir,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(num_games: usize) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games,
            black: ControllerKind::AlphaBeta { depth: 1 },
            white: ControllerKind::Random,
            max_plies: 128,
            seed: Some(11),
            save_results: false,
            output_dir: String::new(),
        }
    }

    #[test]
    fn test_stats_tally() {
        let stats = run_selfplay(&config(4)).unwrap();
        assert_eq!(stats.total_games, 4);
        assert_eq!(
            stats.black_wins + stats.white_wins + stats.draws + stats.unfinished,
            4
        );
        assert_eq!(stats.unfinished, 0);
        assert!(stats.avg_plies > 0.0);
        assert_eq!(stats.black_player, "AlphaBeta(depth=1)");
    }

    #[test]
    fn test_save_results_writes_json() {
        let dir = std::env::temp_dir().join(format!("othello_selfplay_{}", std::process::id()));
        let mut cfg = config(1);
        cfg.save_results = true;
        cfg.output_dir = dir.to_string_lossy().to_string();

        let stats = run_selfplay(&cfg).unwrap();
        let entry = std::fs::read_dir(&dir).unwrap().next().unwrap().unwrap();
        let saved: SelfPlayStats =
            serde_json::from_reader(std::fs::File::open(entry.path()).unwrap()).unwrap();
        assert_eq!(saved.total_games, stats.total_games);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_add_result_counts_unfinished() {
        let mut stats = SelfPlayStats::new();
        stats.add_result(MatchResult {
            winner: None,
            black: 3,
            white: 3,
            plies: 2,
            time_ms: 0,
        });
        stats.add_result(MatchResult {
            winner: Some(Winner::Draw),
            black: 32,
            white: 32,
            plies: 60,
            time_ms: 10,
        });
        assert_eq!(stats.unfinished, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.avg_plies, 31.0);
        assert_eq!(stats.avg_time_ms, 5.0);
    }
}
