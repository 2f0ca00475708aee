use crate::game_state::chess_types::*;

/// Placement field for `board`.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(Square::at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(fen_char(&piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

/// Full FEN with zeroed clocks; the engine keeps no move counters.
pub fn generate_fen(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    format!(
        "{} {} {} {} 0 1",
        generate_placement(board),
        side,
        generate_castling_field(board),
        generate_en_passant_field(board, side_to_move)
    )
}

fn fen_char(piece: &Piece) -> char {
    match piece.color {
        Color::Light => piece.kind.letter(),
        Color::Dark => piece.kind.letter().to_ascii_lowercase(),
    }
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();
    for (color, short, long) in [(Color::Light, 'K', 'Q'), (Color::Dark, 'k', 'q')] {
        let rights = board.castling_rights(color);
        if rights.may_castle(CastleSide::Short) {
            out.push(short);
        }
        if rights.may_castle(CastleSide::Long) {
            out.push(long);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

/// The target square sits behind the pawn that just double-stepped, i.e. on
/// the side that is *not* to move.
fn generate_en_passant_field(board: &Board, side_to_move: Color) -> String {
    match board.en_passant_file() {
        Some(file) => {
            let rank = match side_to_move {
                Color::Light => 5,
                Color::Dark => 2,
            };
            Square::at(file, rank).to_string()
        }
        None => "-".to_owned(),
    }
}
