use crate::rules::move_record::MoveRecord;

/// Linear undo/redo history: a stack of played moves and a stack of undone
/// moves. Recording a fresh move discards the redo branch, the standard
/// linear-history rule — there is no move tree.
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    played: Vec<MoveRecord>,
    undone: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Records a newly played move and discards any redo branch.
    pub fn record(&mut self, record: MoveRecord) {
        self.played.push(record);
        self.undone.clear();
    }

    /// Pops the most recent played move and parks it on the redo stack.
    pub fn take_undo(&mut self) -> Option<MoveRecord> {
        let record = self.played.pop()?;
        self.undone.push(record);
        Some(record)
    }

    /// Pops the most recent undone move and restores it to the played stack.
    pub fn take_redo(&mut self) -> Option<MoveRecord> {
        let record = self.undone.pop()?;
        self.played.push(record);
        Some(record)
    }

    /// Whether a move is available to undo.
    pub fn can_undo(&self) -> bool {
        !self.played.is_empty()
    }

    /// Whether a move is available to redo.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// The played moves, oldest first.
    pub fn played(&self) -> &[MoveRecord] {
        &self.played
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece_record::{PieceClass, PieceRecord, PieceTeam};

    fn dummy_record(start_col: i8) -> MoveRecord {
        MoveRecord {
            start: (6, start_col),
            stop: (4, start_col),
            moved_piece: PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::White,
            },
            captured_piece: None,
        }
    }

    #[test]
    fn undo_and_redo_shuttle_between_stacks() {
        let mut history = MoveHistory::default();
        history.record(dummy_record(0));
        history.record(dummy_record(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());

        let undone = history.take_undo().unwrap();
        assert_eq!(undone.start, (6, 1));
        assert!(history.can_redo());

        let redone = history.take_redo().unwrap();
        assert_eq!(redone.start, (6, 1));
        assert!(!history.can_redo());
        assert_eq!(history.played().len(), 2);
    }

    #[test]
    fn recording_discards_the_redo_branch() {
        let mut history = MoveHistory::default();
        history.record(dummy_record(0));
        history.record(dummy_record(1));
        history.take_undo().unwrap();
        assert!(history.can_redo());

        history.record(dummy_record(2));
        assert!(!history.can_redo());
        assert_eq!(history.take_redo(), None);
        assert_eq!(history.played().len(), 2);
    }

    #[test]
    fn empty_stacks_yield_nothing() {
        let mut history = MoveHistory::default();
        assert_eq!(history.take_undo(), None);
        assert_eq!(history.take_redo(), None);
    }
}
