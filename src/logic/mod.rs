use crate::core::{Board, Cell, Player, Position, Winner, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 各色の持ち石の初期数
pub const INITIAL_RESERVE: u8 = 30;

/// 合法判定に使う方向 (縦横のみ)
const LEGALITY_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// 裏返しに使う方向 (斜めを含む8方向)
const FLIP_DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// 盤外・埋まっているマス・何も挟めない手
    IllegalMove(Position),
    /// 終局後の着手
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::IllegalMove(pos) => write!(f, "illegal move at {}", pos),
            MoveError::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// 対局状態 (盤面・手番・終局フラグ・持ち石)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub current_player: Player,
    pub game_over: bool,
    /// 探索深さ (0 は自動着手なし)
    pub depth: usize,
    black_reserve: u8,
    white_reserve: u8,
}

impl Game {
    pub fn new(depth: usize) -> Self {
        Game {
            board: Board::standard(),
            current_player: Player::Black,
            game_over: false,
            depth,
            black_reserve: INITIAL_RESERVE,
            white_reserve: INITIAL_RESERVE,
        }
    }

    /// 任意の局面から対局を始める
    pub fn from_board(board: Board, current_player: Player, depth: usize) -> Self {
        let mut game = Game {
            board,
            current_player,
            game_over: false,
            depth,
            black_reserve: INITIAL_RESERVE,
            white_reserve: INITIAL_RESERVE,
        };
        game.game_over = game.is_game_over();
        game
    }

    pub fn reserve(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black_reserve,
            Player::White => self.white_reserve,
        }
    }

    /// 手番側の合法判定
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.is_valid_move_for(self.current_player, row, col)
    }

    /// 任意の色での合法判定 (縦横4方向のみ走査する)
    pub fn is_valid_move_for(&self, player: Player, row: usize, col: usize) -> bool {
        let pos = Position::new(row, col);
        if self.board.get(pos) != Some(Cell::Empty) {
            return false;
        }

        let own = player.to_cell();
        let opponent = player.opponent().to_cell();

        LEGALITY_DIRECTIONS.iter().any(|&(dr, dc)| {
            let mut curr = pos.offset(dr, dc);
            let mut seen_opponent = false;
            while let Some(p) = curr {
                if self.board.get(p) != Some(opponent) {
                    break;
                }
                seen_opponent = true;
                curr = p.offset(dr, dc);
            }
            seen_opponent && curr.and_then(|p| self.board.get(p)) == Some(own)
        })
    }

    /// 合法手一覧 (行優先)
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_valid_move_for(player, row, col) {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        Board::positions().any(|p| self.is_valid_move_for(player, p.row, p.col))
    }

    /// 着手を適用する。不正な手や終局後の手は何も変更せずに Err を返す
    pub fn apply(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if !self.is_valid_move(row, col) {
            return Err(MoveError::IllegalMove(Position::new(row, col)));
        }

        let mover = self.current_player;
        let pos = Position::new(row, col);
        self.board.set(pos, mover.to_cell());
        self.flip_disks(pos);

        let reserve = match mover {
            Player::Black => &mut self.black_reserve,
            Player::White => &mut self.white_reserve,
        };
        *reserve = reserve.saturating_sub(1);

        self.current_player = mover.opponent();
        if !self.has_legal_move(self.current_player) {
            // パス: 同じ色がもう一度打つ
            self.current_player = mover;
            if !self.has_legal_move(mover) {
                self.game_over = true;
            }
        }
        Ok(())
    }

    /// 人間の着手
    pub fn try_move(&mut self, pos: Position) -> Result<(), MoveError> {
        self.apply(pos.row, pos.col)
    }

    /// 置いた石から8方向に挟んだ相手の石を裏返す
    fn flip_disks(&mut self, from: Position) {
        let own = self.current_player.to_cell();
        let opponent = self.current_player.opponent().to_cell();

        for &(dr, dc) in FLIP_DIRECTIONS.iter() {
            let mut to_flip = Vec::new();
            let mut curr = from.offset(dr, dc);
            while let Some(p) = curr {
                if self.board.get(p) != Some(opponent) {
                    break;
                }
                to_flip.push(p);
                curr = p.offset(dr, dc);
            }
            if curr.and_then(|p| self.board.get(p)) == Some(own) {
                for p in to_flip {
                    self.board.set(p, own);
                }
            }
        }
    }

    /// 両者とも合法手がなければ終局 (フラグとは独立に判定)
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// (黒の石数, 白の石数)
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    pub fn winner(&self) -> Winner {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Winner::Black,
            std::cmp::Ordering::Less => Winner::White,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(0)
    }
}
