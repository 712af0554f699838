//! Crate root module declarations for the ChessMate rules core.
//!
//! This file exposes the board model, pseudo-legal move generation, rule
//! inspection (check / checkmate), and the game session orchestrator so GUI,
//! CLI, and test front ends can import stable module paths. The crate is pure
//! game logic: no rendering, no audio, no I/O.

pub mod chess_errors;

pub mod board {
    pub mod board_location;
    pub mod piece_record;
    pub mod piece_register;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod collision;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod rules {
    pub mod apply_move;
    pub mod capture_ledger;
    pub mod inspect_check;
    pub mod inspect_checkmate;
    pub mod move_record;
}

pub mod session {
    pub mod game_session;
    pub mod move_history;
}
