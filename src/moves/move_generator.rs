//! Pseudo-legal move generation dispatch.
//!
//! `pseudo_legal_destinations` is the single entry point the rest of the
//! crate uses: it reads the piece at the starting square and defers to the
//! per-class generator. The destinations are pseudo-legal by design — a move
//! that leaves the mover's own king attacked is still generated here, because
//! legality with respect to check is enforced one layer up (see
//! `rules::inspect_check` and `rules::inspect_checkmate`). That keeps every
//! generator a pure function of board contents plus one square.

use crate::board::board_location::{location_in_bounds, BoardLocation};
use crate::board::piece_record::PieceClass;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Generates every pseudo-legal destination for the piece at `start`.
///
/// # Arguments
/// * `register` - The board contents.
/// * `start` - The square whose piece should be generated for.
///
/// # Returns
/// * `Ok(Vec<BoardLocation>)` - The destination set for the piece at `start`;
///   an empty square yields the empty set.
/// * `Err(ChessErrors::OutOfBounds)` - The square is off the board.
pub fn pseudo_legal_destinations(
    register: &PieceRegister,
    start: &BoardLocation,
) -> Result<Vec<BoardLocation>, ChessErrors> {
    if !location_in_bounds(start) {
        return Err(ChessErrors::OutOfBounds);
    }
    let Some(piece) = register.view(start) else {
        return Ok(Vec::new());
    };
    match piece.class {
        PieceClass::Pawn => pawn_destinations(register, start),
        PieceClass::Knight => knight_destinations(register, start),
        PieceClass::Bishop => bishop_destinations(register, start),
        PieceClass::Rook => rook_destinations(register, start),
        PieceClass::Queen => queen_destinations(register, start),
        PieceClass::King => king_destinations(register, start),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece_record::{PieceRecord, PieceTeam};

    #[test]
    fn dispatches_per_piece_class() {
        let register = PieceRegister::new_game();

        // Knights are the only minor pieces with opening moves
        let knight_moves = pseudo_legal_destinations(&register, &(7, 1)).unwrap();
        assert_eq!(knight_moves.len(), 2);

        // Sliders are boxed in at the start
        assert!(pseudo_legal_destinations(&register, &(7, 0)).unwrap().is_empty());
        assert!(pseudo_legal_destinations(&register, &(7, 2)).unwrap().is_empty());
        assert!(pseudo_legal_destinations(&register, &(7, 3)).unwrap().is_empty());
        assert!(pseudo_legal_destinations(&register, &(7, 4)).unwrap().is_empty());

        // Every pawn has a single and a double step
        for col in 0..8 {
            assert_eq!(pseudo_legal_destinations(&register, &(6, col)).unwrap().len(), 2);
        }
    }

    #[test]
    fn empty_square_yields_no_destinations() {
        let register = PieceRegister::new_game();
        assert_eq!(pseudo_legal_destinations(&register, &(4, 4)), Ok(Vec::new()));
    }

    #[test]
    fn off_board_square_is_an_error() {
        let register = PieceRegister::new_game();
        assert_eq!(
            pseudo_legal_destinations(&register, &(8, 0)),
            Err(ChessErrors::OutOfBounds)
        );
        assert_eq!(
            pseudo_legal_destinations(&register, &(0, -1)),
            Err(ChessErrors::OutOfBounds)
        );
    }

    #[test]
    fn no_destination_is_ever_friendly_occupied() {
        let mut register = PieceRegister::new_game();
        // Open the position a little so sliders have rays to walk
        register.remove(&(6, 3));
        register.remove(&(6, 4));
        register.remove(&(1, 3));
        register.remove(&(1, 4));

        let pieces: Vec<_> = register.pieces().collect();
        for (start, piece) in pieces {
            for stop in pseudo_legal_destinations(&register, &start).unwrap() {
                if let Some(occupant) = register.view(&stop) {
                    assert_ne!(
                        occupant.team, piece.team,
                        "{:?} at {:?} may not land on its own piece at {:?}",
                        piece.class, start, stop
                    );
                }
            }
        }
    }
}
