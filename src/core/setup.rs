use crate::core::{Board, Cell, Position, BOARD_SIZE};

/// 文字列配列から盤面を初期化する
///
/// 各行は `B` (黒), `W` (白), `.` (空) の文字で構成される。空白は無視し、
/// 8 行 8 列を超える部分は読み捨てる。
pub fn setup_from_strings(setup: &[&str]) -> Board {
    let mut board = Board::empty();

    for (row, line) in setup.iter().take(BOARD_SIZE).enumerate() {
        let cells = line.chars().filter(|ch| !ch.is_whitespace());
        for (col, ch) in cells.take(BOARD_SIZE).enumerate() {
            if let Some(cell) = parse_cell(ch) {
                board.set(Position::new(row, col), cell);
            }
        }
    }
    board
}

fn parse_cell(ch: char) -> Option<Cell> {
    match ch.to_ascii_uppercase() {
        'B' | 'X' => Some(Cell::Black),
        'W' | 'O' => Some(Cell::White),
        _ => None,
    }
}

/// 標準の初期配置
pub fn get_standard_setup() -> Vec<&'static str> {
    vec![
        "........",
        "........",
        "........",
        "...WB...",
        "...BW...",
        "........",
        "........",
        "........",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_standard_setup_matches_board() {
        let board = setup_from_strings(&get_standard_setup());
        assert_eq!(board, Board::standard());
        assert_eq!(board.count(Player::Black), 2);
        assert_eq!(board.count(Player::White), 2);
    }

    #[test]
    fn test_setup_ignores_spaces_and_overflow() {
        let board = setup_from_strings(&["B W . . . . . . W", "........B"]);
        assert_eq!(board.get(Position::new(0, 0)), Some(Cell::Black));
        assert_eq!(board.get(Position::new(0, 1)), Some(Cell::White));
        assert_eq!(board.occupied(), 2);
    }
}
