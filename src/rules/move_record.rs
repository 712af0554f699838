use crate::board::board_location::BoardLocation;
use crate::board::piece_record::PieceRecord;

/// An applied move, with enough information to reverse it exactly.
///
/// A record is immutable once created: `apply_move` produces it and
/// `undo_move` consumes the same record to restore the prior position. The
/// captured piece, when present, also drives the capture ledger bookkeeping
/// in both directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub moved_piece: PieceRecord,
    pub captured_piece: Option<PieceRecord>,
}
