use crate::board::board_location::{location_in_bounds, BoardLocation};
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::rules::capture_ledger::CaptureLedger;
use crate::rules::move_record::MoveRecord;

/// Applies a move to the register, returning the record needed to reverse it.
///
/// Reads the moving piece at `start` and any victim at `stop`, records the
/// victim in the capture ledger, writes the mover to `stop`, and clears
/// `start`. Validation happens before any mutation, so a returned error
/// leaves the register and ledger exactly as they were.
///
/// # Arguments
/// * `register` - The board contents, mutated in place.
/// * `start` - The moving piece's square.
/// * `stop` - The destination square.
/// * `ledger` - The capture trophy lists, mutated on capture.
///
/// # Returns
/// * `Ok(MoveRecord)` - The record of what moved and what was captured.
/// * `Err(ChessErrors)` - `OutOfBounds` for off-board input, or
///   `NoPieceAtLocation` when `start` is empty.
pub fn apply_move(
    register: &mut PieceRegister,
    start: &BoardLocation,
    stop: &BoardLocation,
    ledger: &mut CaptureLedger,
) -> Result<MoveRecord, ChessErrors> {
    if !location_in_bounds(start) || !location_in_bounds(stop) {
        return Err(ChessErrors::OutOfBounds);
    }
    let moved_piece = register
        .view(start)
        .ok_or(ChessErrors::NoPieceAtLocation(*start))?;
    let captured_piece = register.view(stop);

    if let Some(victim) = captured_piece {
        ledger.record_capture(victim);
    }
    register.place(stop, Some(moved_piece));
    register.remove(start);

    Ok(MoveRecord {
        start: *start,
        stop: *stop,
        moved_piece,
        captured_piece,
    })
}

/// Reverses a move previously produced by `apply_move`.
///
/// Restores the moved piece to its starting square, restores the captured
/// piece (or emptiness) to the destination, and pops the matching capture
/// ledger bucket. For any record `apply_move` produced against this register
/// and ledger, this is an exact inverse.
///
/// # Arguments
/// * `register` - The board contents, mutated in place.
/// * `record` - The move to reverse.
/// * `ledger` - The capture trophy lists, popped when the move captured.
pub fn undo_move(
    register: &mut PieceRegister,
    record: &MoveRecord,
    ledger: &mut CaptureLedger,
) {
    register.place(&record.start, Some(record.moved_piece));
    register.place(&record.stop, record.captured_piece);
    if let Some(victim) = &record.captured_piece {
        ledger.revert_capture(victim);
    }
}
