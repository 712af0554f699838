use crate::board::board_location::BoardLocation;
use crate::board::piece_record::PieceTeam;
use thiserror::Error;

/// Represents all possible error types that can occur in the rules core.
/// Used throughout the codebase for error handling and reporting.
///
/// Illegal *user* actions (selecting an empty square, clicking a square that
/// is not a destination) are deliberately not errors; they are normal no-ops
/// handled by the session layer. Every variant here signals a caller bug or a
/// corrupted position, and callers are expected to fail fast on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Indicates an attempted access outside the bounds of the chess board.
    #[error("board location out of bounds")]
    OutOfBounds,
    /// Attempted to generate or apply a move from a square with no piece.
    #[error("no piece at location {0:?}")]
    NoPieceAtLocation(BoardLocation),
    /// The piece at the starting square does not match the expected class.
    #[error("piece at starting square does not satisfy the move preconditions")]
    InvalidMoveStartCondition,
    /// Check inspection could not locate the king of the given team.
    #[error("no {0:?} king on the board")]
    KingNotFound(PieceTeam),
    /// Undo was requested with an empty played-move stack.
    #[error("no move available to undo")]
    NothingToUndo,
    /// Redo was requested with an empty undone-move stack.
    #[error("no move available to redo")]
    NothingToRedo,
    /// Undo or redo was requested after the game reached a terminal state.
    #[error("the game is over")]
    GameOver,
}
