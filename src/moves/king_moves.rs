use crate::board::board_location::{offset_location, BoardLocation};
use crate::board::piece_record::PieceClass;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::collision::{accept_step, expect_piece_class};

/// The eight adjacent king offsets as `(d_row, d_col)`.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generates all pseudo-legal destinations for the king at `start`: the eight
/// adjacent squares, kept when in bounds and not friendly-occupied. No
/// castling. Stepping into an attacked square is not filtered here; legality
/// against check is the concern of the layers above.
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The king's location.
///
/// # Returns
/// * `Ok(Vec<BoardLocation>)` - Every reachable destination.
/// * `Err(ChessErrors)` - If `start` is off the board or does not hold a king.
pub fn king_destinations(
    register: &PieceRegister,
    start: &BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let king = expect_piece_class(register, start, PieceClass::King)?;
    let mut result = Vec::new();
    for (d_row, d_col) in KING_OFFSETS {
        if let Ok(stop) = offset_location(start, d_row, d_col) {
            if let Some(stop) = accept_step(register, &king.team, stop) {
                result.push(stop);
            }
        }
    }
    Ok(result)
}
