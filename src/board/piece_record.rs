/// The six chess piece classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The two sides of a chess game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceTeam {
    White,
    Black,
}

impl PieceTeam {
    /// Returns the opposing team.
    pub fn opponent(&self) -> PieceTeam {
        match self {
            PieceTeam::White => PieceTeam::Black,
            PieceTeam::Black => PieceTeam::White,
        }
    }

    /// Returns the forward row direction for pawns of this team.
    /// White pawns march toward row 0 (the top), black pawns toward row 7.
    pub fn forward_direction(&self) -> i8 {
        match self {
            PieceTeam::White => -1,
            PieceTeam::Black => 1,
        }
    }

    /// Returns the row pawns of this team start on, from which the double
    /// step is available.
    pub fn pawn_start_row(&self) -> i8 {
        match self {
            PieceTeam::White => 6,
            PieceTeam::Black => 1,
        }
    }
}

/// A piece on the board. Two pieces of the same class and team are
/// indistinguishable; there is no per-piece identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}
