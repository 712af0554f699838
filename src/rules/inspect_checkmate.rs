//! Checkmate inspection.
//!
//! A team is checkmated when it is in check and no pseudo-legal move it can
//! make leaves its king safe. Candidate moves are probed on a CLONE of the
//! register with a scratch capture ledger; the live position is never touched,
//! so a renderer polling mid-inspection can never observe a transiently
//! illegal board. Clones are transient and discarded after each probe.
//!
//! Stalemate is intentionally not a terminal state here: a team with no safe
//! move that is NOT in check is reported as not mated, and the game stays in
//! progress. This preserves the behavior this engine inherits; see the test
//! at the bottom documenting it.

use crate::board::piece_record::PieceTeam;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::move_generator::pseudo_legal_destinations;
use crate::rules::apply_move::apply_move;
use crate::rules::capture_ledger::CaptureLedger;
use crate::rules::inspect_check::is_in_check;

/// Reports whether the given team is checkmated.
///
/// # Arguments
/// * `register` - The board contents; read-only, probes run on clones.
/// * `team` - The side to inspect (normally the side about to move).
///
/// # Returns
/// * `Ok(true)` - The team is in check and every available move keeps it so.
/// * `Ok(false)` - The team is not in check, or at least one move escapes.
/// * `Err(ChessErrors)` - If the team's king is missing from the board.
pub fn is_checkmate(register: &PieceRegister, team: &PieceTeam) -> Result<bool, ChessErrors> {
    if !is_in_check(register, team)? {
        return Ok(false);
    }

    for (start, piece) in register.pieces() {
        if piece.team != *team {
            continue;
        }
        for stop in pseudo_legal_destinations(register, &start)? {
            // Probe on an independent copy so the live board stays intact
            let mut probe = register.clone();
            let mut scratch_ledger = CaptureLedger::default();
            apply_move(&mut probe, &start, &stop, &mut scratch_ledger)?;
            if !is_in_check(&probe, team)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
