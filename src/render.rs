//! ASCII board drawing
//!
//! The perspective color's back rank is drawn at the bottom. For Black the
//! board is turned around completely: ranks run 1 to 8 from the top and files
//! run h to a, with the labels following the squares.

use chess_rules::{Board, CapturedPieces, Color, Square};

use crate::clock::{format_clock, GameTimer};

/// Rank indices top to bottom and file indices left to right for `perspective`
fn axes(perspective: Color) -> ([u8; 8], [u8; 8]) {
    let forward = [0, 1, 2, 3, 4, 5, 6, 7];
    let reverse = [7, 6, 5, 4, 3, 2, 1, 0];
    match perspective {
        Color::White => (forward, forward),
        Color::Black => (reverse, reverse),
    }
}

fn file_labels(files: &[u8; 8]) -> String {
    let labels: Vec<String> = files
        .iter()
        .filter_map(|file| Square::new(*file, 0))
        .map(|square| square.file_char().to_string())
        .collect();
    format!("   {}", labels.join(" "))
}

/// Board diagram, upper case White and lower case Black, `.` for empty
pub fn render_board(board: &Board, perspective: Color) -> String {
    let (ranks, files) = axes(perspective);
    let mut lines = Vec::with_capacity(10);

    lines.push(file_labels(&files));
    for rank in ranks {
        let mut cells = Vec::with_capacity(8);
        let mut label = ' ';
        for file in files {
            let Some(square) = Square::new(file, rank) else {
                continue;
            };
            label = square.rank_char();
            cells.push(board.piece_at(square).map_or('.', |piece| piece.symbol()).to_string());
        }
        lines.push(format!("{label}  {}  {label}", cells.join(" ")));
    }
    lines.push(file_labels(&files));

    lines.join("\n")
}

/// `White 09:58 | Black 10:00`
pub fn render_clocks(timer: &GameTimer) -> String {
    format!(
        "White {} | Black {}",
        format_clock(timer.time_left(Color::White)),
        format_clock(timer.time_left(Color::Black))
    )
}

/// Captured material line, empty when nothing has been taken
pub fn render_captured(captured: &CapturedPieces) -> String {
    let list = |color: Color| -> String {
        captured
            .taken_by(color)
            .iter()
            .map(|kind| match color {
                Color::White => kind.letter().to_ascii_lowercase(),
                Color::Black => kind.letter(),
            })
            .collect()
    };

    let white = list(Color::White);
    let black = list(Color::Black);
    if white.is_empty() && black.is_empty() {
        return String::new();
    }

    let advantage = captured.material_advantage();
    let balance = match advantage {
        0 => "even".to_string(),
        n if n > 0 => format!("White +{n}"),
        n => format!("Black +{}", -n),
    };
    format!("Captured by White: {white}  by Black: {black}  ({balance})")
}
