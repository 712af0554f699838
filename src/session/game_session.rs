//! The game session orchestrator.
//!
//! `GameSession` composes the board register, move generation, the move
//! executor, check inspection, and the undo/redo history into the
//! click-driven flow a front end needs: select a square, attempt a move,
//! undo, redo. The session owns all game state and is single-threaded and
//! synchronous; every call runs to completion before the next is accepted.
//!
//! Legality at this layer is pseudo-legality: a destination is accepted iff
//! move generation produced it. Self-check is not filtered on entry — the
//! terminal condition is evaluated after every applied move by the checkmate
//! probe, matching the behavior this engine inherits.

use crate::board::board_location::{location_in_bounds, BoardLocation};
use crate::board::piece_record::PieceTeam;
use crate::board::piece_register::PieceRegister;
use crate::chess_errors::ChessErrors;
use crate::moves::move_generator::pseudo_legal_destinations;
use crate::rules::apply_move::{apply_move, undo_move};
use crate::rules::capture_ledger::CaptureLedger;
use crate::rules::inspect_checkmate::is_checkmate;
use crate::session::move_history::MoveHistory;
use log::{debug, info};

/// Whether the game is still being played or has reached checkmate.
///
/// There is no stalemate state: a side with no safe moves that is not in
/// check stays `InProgress` indefinitely (inherited behavior, documented
/// rather than fixed).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Checkmate,
}

/// The result of an `attempt_move` call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied. `checkmate` reports whether this very move ended
    /// the game — the one-shot signal an audio or UI collaborator wants.
    Applied { checkmate: bool },
    /// Nothing happened: there was no usable selection, the destination was
    /// not in the selection's move set, or the game is already over.
    Rejected,
}

/// The currently selected square and its pseudo-legal destinations, exposed
/// so a renderer can draw highlights.
#[derive(Debug, Clone)]
pub struct Selection {
    pub origin: BoardLocation,
    pub destinations: Vec<BoardLocation>,
}

/// One chess game: board, capture trophies, history, turn, terminal flag,
/// and the transient selection. Created once per game and mutated in place.
#[derive(Debug, Clone)]
pub struct GameSession {
    register: PieceRegister,
    ledger: CaptureLedger,
    history: MoveHistory,
    turn: PieceTeam,
    status: SessionStatus,
    selection: Option<Selection>,
}

impl GameSession {
    /// Starts a fresh game: standard layout, White to move.
    pub fn new_game() -> Self {
        GameSession {
            register: PieceRegister::new_game(),
            ledger: CaptureLedger::default(),
            history: MoveHistory::default(),
            turn: PieceTeam::White,
            status: SessionStatus::InProgress,
            selection: None,
        }
    }

    /// Selects a square for the side to move.
    ///
    /// A no-op (returning `Ok(false)`) when the game is over, when a
    /// selection already exists, or when the square does not hold a piece of
    /// the side to move — those are normal user actions, not errors. Only an
    /// off-board location is an error.
    ///
    /// # Returns
    /// * `Ok(true)` - The square is now selected and its destinations computed.
    /// * `Ok(false)` - Nothing changed.
    /// * `Err(ChessErrors::OutOfBounds)` - The location is off the board.
    pub fn select_square(&mut self, location: &BoardLocation) -> Result<bool, ChessErrors> {
        if !location_in_bounds(location) {
            return Err(ChessErrors::OutOfBounds);
        }
        if self.status != SessionStatus::InProgress || self.selection.is_some() {
            return Ok(false);
        }
        match self.register.view(location) {
            Some(piece) if piece.team == self.turn => {
                let destinations = pseudo_legal_destinations(&self.register, location)?;
                self.selection = Some(Selection {
                    origin: *location,
                    destinations,
                });
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Attempts to move the selected piece to `stop`.
    ///
    /// With no prior selection, or with `stop` outside the selection's
    /// destination set, this rejects and clears the selection — a click on a
    /// non-move square always deselects, it never keeps the selection alive.
    /// On success the move is applied and recorded (discarding any redo
    /// branch), the turn flips, and checkmate is evaluated for the side now
    /// to move; if it holds, the session locks in `Checkmate`.
    ///
    /// # Returns
    /// * `Ok(MoveOutcome)` - What happened; see `MoveOutcome`.
    /// * `Err(ChessErrors)` - Off-board input, or a corrupted position
    ///   surfaced by the executor or the checkmate probe.
    pub fn attempt_move(&mut self, stop: &BoardLocation) -> Result<MoveOutcome, ChessErrors> {
        if !location_in_bounds(stop) {
            return Err(ChessErrors::OutOfBounds);
        }
        if self.status != SessionStatus::InProgress {
            return Ok(MoveOutcome::Rejected);
        }
        let Some(selection) = self.selection.take() else {
            return Ok(MoveOutcome::Rejected);
        };
        if !selection.destinations.contains(stop) {
            // Deselect without moving
            return Ok(MoveOutcome::Rejected);
        }

        let record = apply_move(&mut self.register, &selection.origin, stop, &mut self.ledger)?;
        debug!(
            "{:?} {:?} moved {:?} -> {:?} (captured: {:?})",
            record.moved_piece.team,
            record.moved_piece.class,
            record.start,
            record.stop,
            record.captured_piece.map(|piece| piece.class)
        );
        self.history.record(record);
        self.turn = self.turn.opponent();

        let checkmate = is_checkmate(&self.register, &self.turn)?;
        if checkmate {
            self.status = SessionStatus::Checkmate;
            info!("checkmate: {:?} has no safe reply", self.turn);
        }
        Ok(MoveOutcome::Applied { checkmate })
    }

    /// Reverses the most recent played move.
    ///
    /// # Returns
    /// * `Ok(())` - The move was reversed; the turn flipped back.
    /// * `Err(ChessErrors::GameOver)` - The game already ended; undo is
    ///   locked once checkmate is reached (intentional terminal lock).
    /// * `Err(ChessErrors::NothingToUndo)` - The played stack is empty;
    ///   callers gate on `can_undo`.
    pub fn undo(&mut self) -> Result<(), ChessErrors> {
        if self.status != SessionStatus::InProgress {
            return Err(ChessErrors::GameOver);
        }
        let record = self.history.take_undo().ok_or(ChessErrors::NothingToUndo)?;
        undo_move(&mut self.register, &record, &mut self.ledger);
        self.turn = self.turn.opponent();
        self.selection = None;
        debug!(
            "undid {:?} {:?} -> {:?}",
            record.moved_piece.class, record.start, record.stop
        );
        Ok(())
    }

    /// Re-applies the most recently undone move.
    ///
    /// # Returns
    /// * `Ok(())` - The move was re-applied (captures recorded again); the
    ///   turn flipped forward.
    /// * `Err(ChessErrors::GameOver)` - The game already ended.
    /// * `Err(ChessErrors::NothingToRedo)` - The undone stack is empty;
    ///   callers gate on `can_redo`.
    pub fn redo(&mut self) -> Result<(), ChessErrors> {
        if self.status != SessionStatus::InProgress {
            return Err(ChessErrors::GameOver);
        }
        let record = self.history.take_redo().ok_or(ChessErrors::NothingToRedo)?;
        apply_move(&mut self.register, &record.start, &record.stop, &mut self.ledger)?;
        self.turn = self.turn.opponent();
        self.selection = None;
        debug!(
            "redid {:?} {:?} -> {:?}",
            record.moved_piece.class, record.start, record.stop
        );
        Ok(())
    }

    /// The board contents, for rendering.
    pub fn register(&self) -> &PieceRegister {
        &self.register
    }

    /// The capture trophy lists, for rendering.
    pub fn ledger(&self) -> &CaptureLedger {
        &self.ledger
    }

    /// The side to move.
    pub fn turn(&self) -> PieceTeam {
        self.turn
    }

    /// Whether the game is in progress or over.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The current selection and its highlight squares, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Whether an undo is currently possible.
    pub fn can_undo(&self) -> bool {
        self.status == SessionStatus::InProgress && self.history.can_undo()
    }

    /// Whether a redo is currently possible.
    pub fn can_redo(&self) -> bool {
        self.status == SessionStatus::InProgress && self.history.can_redo()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new_game()
    }
}
