use crate::board::board_location::BoardLocation;
use crate::board::piece_record::PieceClass;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::collision::{expect_piece_class, extend_ray};

/// The four diagonal ray directions as `(d_row, d_col)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Generates all pseudo-legal destinations for the bishop at `start`: the
/// four diagonal rays, each stopping at the first occupied square (included
/// when enemy, excluded when friendly).
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The bishop's location.
///
/// # Returns
/// * `Ok(Vec<BoardLocation>)` - Every reachable destination.
/// * `Err(ChessErrors)` - If `start` is off the board or does not hold a bishop.
pub fn bishop_destinations(
    register: &PieceRegister,
    start: &BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let bishop = expect_piece_class(register, start, PieceClass::Bishop)?;
    let mut result = Vec::new();
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        extend_ray(register, &bishop.team, start, d_row, d_col, &mut result);
    }
    Ok(result)
}
