use crate::board::board_location::BoardLocation;
use crate::board::piece_record::PieceClass;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::collision::{expect_piece_class, extend_ray};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Generates all pseudo-legal destinations for the queen at `start`: the
/// union of the rook and bishop ray sets.
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The queen's location.
///
/// # Returns
/// * `Ok(Vec<BoardLocation>)` - Every reachable destination.
/// * `Err(ChessErrors)` - If `start` is off the board or does not hold a queen.
pub fn queen_destinations(
    register: &PieceRegister,
    start: &BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let queen = expect_piece_class(register, start, PieceClass::Queen)?;
    let mut result = Vec::new();
    for (d_row, d_col) in ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS) {
        extend_ray(register, &queen.team, start, d_row, d_col, &mut result);
    }
    Ok(result)
}
