use crate::board::piece_record::{PieceRecord, PieceTeam};

/// The two capture trophy lists a renderer draws beside the board.
///
/// Captured pieces are bucketed by the VICTIM's own color: a white piece that
/// gets taken lands in `white_taken`, regardless of who took it. This mirrors
/// the behavior this engine inherits; the lists follow history order (append
/// on capture, pop from the end on undo), not board order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureLedger {
    white_taken: Vec<PieceRecord>,
    black_taken: Vec<PieceRecord>,
}

impl CaptureLedger {
    /// Appends a captured piece to the bucket matching its own team.
    pub fn record_capture(&mut self, victim: PieceRecord) {
        match victim.team {
            PieceTeam::White => self.white_taken.push(victim),
            PieceTeam::Black => self.black_taken.push(victim),
        }
    }

    /// Pops the most recent capture from the bucket matching the victim's
    /// team. Called on undo; the popped entry is the piece being restored.
    pub fn revert_capture(&mut self, victim: &PieceRecord) -> Option<PieceRecord> {
        match victim.team {
            PieceTeam::White => self.white_taken.pop(),
            PieceTeam::Black => self.black_taken.pop(),
        }
    }

    /// The captured pieces of the given team, in capture order.
    pub fn taken_from(&self, team: &PieceTeam) -> &[PieceRecord] {
        match team {
            PieceTeam::White => &self.white_taken,
            PieceTeam::Black => &self.black_taken,
        }
    }
}
