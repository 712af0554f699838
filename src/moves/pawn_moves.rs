use crate::board::board_location::{offset_location, BoardLocation};
use crate::board::piece_record::PieceClass;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::collision::{classify_collision, expect_piece_class, Collision};

/// Generates all pseudo-legal destinations for the pawn at `start`.
///
/// A pawn may step one square forward onto an empty square, two squares
/// forward from its start row when both intervening squares are empty, and
/// capture one square diagonally forward onto an enemy piece. No en passant
/// and no promotion: a pawn reaching the far rank simply stays a pawn.
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The pawn's location.
///
/// # Returns
/// * `Ok(Vec<BoardLocation>)` - Every reachable destination.
/// * `Err(ChessErrors)` - If `start` is off the board or does not hold a pawn.
pub fn pawn_destinations(
    register: &PieceRegister,
    start: &BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    let pawn = expect_piece_class(register, start, PieceClass::Pawn)?;
    let forward = pawn.team.forward_direction();
    let mut result = Vec::new();

    // Forward march onto empty squares only
    if let Ok(stop) = offset_location(start, forward, 0) {
        if register.view(&stop).is_none() {
            result.push(stop);

            // Double step from the start row, both squares empty
            if start.0 == pawn.team.pawn_start_row() {
                if let Ok(double_stop) = offset_location(start, 2 * forward, 0) {
                    if register.view(&double_stop).is_none() {
                        result.push(double_stop);
                    }
                }
            }
        }
    }

    // Diagonal captures
    for d_col in [-1, 1] {
        if let Ok(stop) = offset_location(start, forward, d_col) {
            if classify_collision(register, &pawn.team, &stop) == Collision::Enemy {
                result.push(stop);
            }
        }
    }

    Ok(result)
}
