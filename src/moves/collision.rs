use crate::board::board_location::{location_in_bounds, offset_location, BoardLocation};
use crate::board::piece_record::{PieceClass, PieceRecord, PieceTeam};
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;

/// What a candidate destination square holds, relative to the moving team.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    /// The square is empty.
    Vacant,
    /// The square holds an opposing piece; landing there is a capture.
    Enemy,
    /// The square holds a friendly piece; landing there is forbidden.
    Friendly,
}

/// Classifies the occupancy of a destination square for the moving team.
pub fn classify_collision(
    register: &PieceRegister,
    mover: &PieceTeam,
    stop: &BoardLocation,
) -> Collision {
    match register.view(stop) {
        None => Collision::Vacant,
        Some(occupant) if occupant.team == *mover => Collision::Friendly,
        Some(_) => Collision::Enemy,
    }
}

/// Accepts a fixed-offset destination (knight and king steps) unless it is
/// occupied by a friendly piece.
pub fn accept_step(
    register: &PieceRegister,
    mover: &PieceTeam,
    stop: BoardLocation,
) -> Option<BoardLocation> {
    match classify_collision(register, mover, &stop) {
        Collision::Friendly => None,
        Collision::Vacant | Collision::Enemy => Some(stop),
    }
}

/// Verifies that the starting square is on the board and holds a piece of the
/// expected class, returning that piece.
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The starting location to check.
/// * `class` - The piece class the caller expects there.
///
/// # Returns
/// * `Ok(PieceRecord)` - The piece at `start`.
/// * `Err(ChessErrors)` - `OutOfBounds`, `NoPieceAtLocation`, or
///   `InvalidMoveStartCondition` when the square does not satisfy the caller.
pub fn expect_piece_class(
    register: &PieceRegister,
    start: &BoardLocation,
    class: PieceClass,
) -> Result<PieceRecord, ChessErrors> {
    if !location_in_bounds(start) {
        return Err(ChessErrors::OutOfBounds);
    }
    match register.view(start) {
        Some(piece) if piece.class == class => Ok(piece),
        Some(_) => Err(ChessErrors::InvalidMoveStartCondition),
        None => Err(ChessErrors::NoPieceAtLocation(*start)),
    }
}

/// Walks one sliding ray, appending destinations until the board edge or the
/// first occupied square. An enemy blocker is included (a capture), a friendly
/// blocker is not.
pub fn extend_ray(
    register: &PieceRegister,
    mover: &PieceTeam,
    start: &BoardLocation,
    d_row: i8,
    d_col: i8,
    result: &mut Vec<BoardLocation>,
) {
    let mut cursor = *start;
    while let Ok(stop) = offset_location(&cursor, d_row, d_col) {
        match classify_collision(register, mover, &stop) {
            Collision::Vacant => {
                result.push(stop);
                cursor = stop;
            }
            Collision::Enemy => {
                result.push(stop);
                break;
            }
            Collision::Friendly => break,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece_record::PieceRecord;

    #[test]
    fn classification_per_occupant() {
        let mut register = PieceRegister::default();
        register.place(
            &(3, 3),
            Some(PieceRecord {
                class: PieceClass::Rook,
                team: PieceTeam::Black,
            }),
        );
        register.place(
            &(3, 4),
            Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::White,
            }),
        );

        let mover = PieceTeam::White;
        assert_eq!(classify_collision(&register, &mover, &(3, 3)), Collision::Enemy);
        assert_eq!(
            classify_collision(&register, &mover, &(3, 4)),
            Collision::Friendly
        );
        assert_eq!(classify_collision(&register, &mover, &(3, 5)), Collision::Vacant);

        assert_eq!(accept_step(&register, &mover, (3, 3)), Some((3, 3)));
        assert_eq!(accept_step(&register, &mover, (3, 4)), None);
        assert_eq!(accept_step(&register, &mover, (3, 5)), Some((3, 5)));
    }
}
