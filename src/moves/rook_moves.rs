use crate::board::board_location::BoardLocation;
use crate::board::piece_record::PieceClass;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::collision::{expect_piece_class, extend_ray};

/// The four orthogonal ray directions as `(d_row, d_col)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Generates all pseudo-legal destinations for the rook at `start`: the four
/// orthogonal rays, each stopping at the first occupied square (included when
/// enemy, excluded when friendly).
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The rook's location.
///
/// # Returns
/// * `Ok(Vec<BoardLocation>)` - Every reachable destination.
/// * `Err(ChessErrors)` - If `start` is off the board or does not hold a rook.
pub fn rook_destinations(
    register: &PieceRegister,
    start: &BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let rook = expect_piece_class(register, start, PieceClass::Rook)?;
    let mut result = Vec::new();
    for (d_row, d_col) in ROOK_DIRECTIONS {
        extend_ray(register, &rook.team, start, d_row, d_col, &mut result);
    }
    Ok(result)
}
