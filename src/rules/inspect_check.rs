//! Check inspection.
//!
//! This module decides whether a given team's king is currently attacked.
//! The implementation is deliberately unsophisticated: it locates the king by
//! scanning the register, then generates pseudo-legal destinations for every
//! opposing piece and reports whether any of them lands on the king's square.
//! That is O(64 x per-piece generation cost), which is comfortably fast at
//! human-interaction speed; no incremental attack maps are kept.
//!
//! A register with no king of the requested team is a corrupted position —
//! normal play can never produce one — so the scan surfaces
//! `ChessErrors::KingNotFound` rather than silently answering `false`.

use crate::board::board_location::BoardLocation;
use crate::board::piece_record::{PieceClass, PieceTeam};
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::move_generator::pseudo_legal_destinations;

/// Locates the king of the given team.
///
/// # Returns
/// * `Ok(BoardLocation)` - The king's square.
/// * `Err(ChessErrors::KingNotFound)` - No such king is on the board.
pub fn find_king(
    register: &PieceRegister,
    team: &PieceTeam,
) -> Result<BoardLocation, ChessErrors> {
    register
        .pieces()
        .find(|(_, piece)| piece.class == PieceClass::King && piece.team == *team)
        .map(|(location, _)| location)
        .ok_or(ChessErrors::KingNotFound(*team))
}

/// Reports whether the given team's king is attacked by any opposing piece's
/// pseudo-legal move.
///
/// # Arguments
/// * `register` - The board contents.
/// * `team` - The side whose king is inspected.
///
/// # Returns
/// * `Ok(bool)` - Whether the king is in check.
/// * `Err(ChessErrors)` - If the king is missing from the board.
pub fn is_in_check(register: &PieceRegister, team: &PieceTeam) -> Result<bool, ChessErrors> {
    let king_square = find_king(register, team)?;
    for (location, piece) in register.pieces() {
        if piece.team == *team {
            continue;
        }
        if pseudo_legal_destinations(register, &location)?.contains(&king_square) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece_record::PieceRecord;

    fn lone_kings() -> PieceRegister {
        let mut register = PieceRegister::default();
        register.place(
            &(0, 4),
            Some(PieceRecord {
                class: PieceClass::King,
                team: PieceTeam::Black,
            }),
        );
        register.place(
            &(7, 4),
            Some(PieceRecord {
                class: PieceClass::King,
                team: PieceTeam::White,
            }),
        );
        register
    }

    #[test]
    fn initial_position_has_no_check() {
        let register = PieceRegister::new_game();
        assert!(!is_in_check(&register, &PieceTeam::White).unwrap());
        assert!(!is_in_check(&register, &PieceTeam::Black).unwrap());
    }

    #[test]
    fn each_attacker_class_gives_check_and_removal_clears_it() {
        let cases = [
            (PieceClass::Rook, (0, 0)),
            (PieceClass::Queen, (4, 4)),
            (PieceClass::Bishop, (3, 1)),
            (PieceClass::Knight, (2, 3)),
            (PieceClass::Pawn, (1, 3)),
        ];
        for (class, attacker_square) in cases {
            let mut register = lone_kings();
            register.place(
                &attacker_square,
                Some(PieceRecord {
                    class,
                    team: PieceTeam::White,
                }),
            );
            assert!(
                is_in_check(&register, &PieceTeam::Black).unwrap(),
                "white {:?} at {:?} should check the black king at (0,4)",
                class,
                attacker_square
            );
            assert!(!is_in_check(&register, &PieceTeam::White).unwrap());

            register.remove(&attacker_square);
            assert!(!is_in_check(&register, &PieceTeam::Black).unwrap());
        }
    }

    #[test]
    fn pawn_checks_only_diagonally_forward() {
        // A white pawn directly in front of the black king is not a check
        let mut register = lone_kings();
        register.place(
            &(1, 4),
            Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::White,
            }),
        );
        assert!(!is_in_check(&register, &PieceTeam::Black).unwrap());
    }

    #[test]
    fn interposed_piece_blocks_a_sliding_check() {
        let mut register = lone_kings();
        register.place(
            &(4, 4),
            Some(PieceRecord {
                class: PieceClass::Rook,
                team: PieceTeam::White,
            }),
        );
        assert!(is_in_check(&register, &PieceTeam::Black).unwrap());

        register.place(
            &(2, 4),
            Some(PieceRecord {
                class: PieceClass::Knight,
                team: PieceTeam::Black,
            }),
        );
        assert!(!is_in_check(&register, &PieceTeam::Black).unwrap());
    }

    #[test]
    fn missing_king_is_a_hard_error() {
        let register = PieceRegister::default();
        assert_eq!(
            is_in_check(&register, &PieceTeam::White),
            Err(ChessErrors::KingNotFound(PieceTeam::White))
        );
    }
}
