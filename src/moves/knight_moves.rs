use crate::board::board_location::{offset_location, BoardLocation};
use crate::board::piece_record::PieceClass;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::collision::{accept_step, expect_piece_class};

/// The eight fixed knight offsets as `(d_row, d_col)`.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generates all pseudo-legal destinations for the knight at `start`: the
/// eight fixed offsets, kept when in bounds and not friendly-occupied.
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The knight's location.
///
/// # Returns
/// * `Ok(Vec<BoardLocation>)` - Every reachable destination.
/// * `Err(ChessErrors)` - If `start` is off the board or does not hold a knight.
pub fn knight_destinations(
    register: &PieceRegister,
    start: &BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let knight = expect_piece_class(register, start, PieceClass::Knight)?;
    let mut result = Vec::new();
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(stop) = offset_location(start, d_row, d_col) {
            if let Some(stop) = accept_step(register, &knight.team, stop) {
                result.push(stop);
            }
        }
    }
    Ok(result)
}
