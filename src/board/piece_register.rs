use crate::board::board_location::BoardLocation;
use crate::board::piece_record::{PieceClass, PieceRecord, PieceTeam};

/// The 8x8 board: a mapping from location to an optional piece.
///
/// Pure storage with iteration; no rule knowledge lives here. The register
/// performs no bounds validation of its own — entry points that accept
/// caller-supplied locations validate first. `Clone` is derived so rule
/// inspection can probe hypothetical positions on an independent copy.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

/// The back rank layout shared by both teams, left to right on screen.
const BACK_RANK: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

impl PieceRegister {
    /// Returns a copy of whatever occupies the given location.
    pub fn view(&self, x: &BoardLocation) -> Option<PieceRecord> {
        self.buffer[x.0 as usize][x.1 as usize]
    }

    /// Places a piece (or clears the square with `None`).
    pub fn place(&mut self, x: &BoardLocation, piece: Option<PieceRecord>) {
        self.buffer[x.0 as usize][x.1 as usize] = piece;
    }

    /// Removes and returns whatever occupied the given location.
    pub fn remove(&mut self, x: &BoardLocation) -> Option<PieceRecord> {
        self.buffer[x.0 as usize][x.1 as usize].take()
    }

    /// Iterates over all 64 squares as `(location, occupant)`.
    pub fn squares(&self) -> impl Iterator<Item = (BoardLocation, Option<PieceRecord>)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).map(move |col| ((row, col), self.buffer[row as usize][col as usize]))
        })
    }

    /// Iterates over only the occupied squares as `(location, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        self.squares()
            .filter_map(|(location, occupant)| occupant.map(|piece| (location, piece)))
    }

    /// Builds the standard initial position: black's back rank on row 0 and
    /// pawns on row 1, white mirrored on rows 7 and 6, rows 2-5 empty.
    pub fn new_game() -> Self {
        let mut register = PieceRegister::default();
        for col in 0..8 {
            let class = BACK_RANK[col as usize];
            register.place(
                &(0, col),
                Some(PieceRecord {
                    class,
                    team: PieceTeam::Black,
                }),
            );
            register.place(
                &(1, col),
                Some(PieceRecord {
                    class: PieceClass::Pawn,
                    team: PieceTeam::Black,
                }),
            );
            register.place(
                &(6, col),
                Some(PieceRecord {
                    class: PieceClass::Pawn,
                    team: PieceTeam::White,
                }),
            );
            register.place(
                &(7, col),
                Some(PieceRecord {
                    class,
                    team: PieceTeam::White,
                }),
            );
        }
        register
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_game_layout() {
        let register = PieceRegister::new_game();

        let black_king = register.view(&(0, 4)).unwrap();
        assert_eq!(black_king.class, PieceClass::King);
        assert_eq!(black_king.team, PieceTeam::Black);

        let white_queen = register.view(&(7, 3)).unwrap();
        assert_eq!(white_queen.class, PieceClass::Queen);
        assert_eq!(white_queen.team, PieceTeam::White);

        for col in 0..8 {
            assert_eq!(register.view(&(1, col)).unwrap().class, PieceClass::Pawn);
            assert_eq!(register.view(&(6, col)).unwrap().class, PieceClass::Pawn);
        }
        for row in 2..6 {
            for col in 0..8 {
                assert!(register.view(&(row, col)).is_none());
            }
        }
        assert_eq!(register.pieces().count(), 32);
    }

    #[test]
    fn place_remove_round_trip() {
        let mut register = PieceRegister::default();
        let knight = PieceRecord {
            class: PieceClass::Knight,
            team: PieceTeam::White,
        };
        register.place(&(3, 3), Some(knight));
        assert_eq!(register.view(&(3, 3)), Some(knight));
        assert_eq!(register.remove(&(3, 3)), Some(knight));
        assert_eq!(register.view(&(3, 3)), None);
        assert_eq!(register.remove(&(3, 3)), None);
    }

    #[test]
    fn squares_iterates_all_cells() {
        let register = PieceRegister::new_game();
        assert_eq!(register.squares().count(), 64);
    }

    #[test]
    fn clone_is_independent() {
        let register = PieceRegister::new_game();
        let mut probe = register.clone();
        probe.remove(&(6, 4));
        assert!(probe.view(&(6, 4)).is_none());
        assert!(register.view(&(6, 4)).is_some());
    }
}
