use crate::chess_errors::ChessErrors;

/// A square on the board as `(row, col)`, each in `0..8`.
///
/// Row 0 is the top of the rendered board (the black back rank) and row 7 is
/// the bottom (the white back rank), matching the on-screen layout a renderer
/// draws top-to-bottom.
pub type BoardLocation = (i8, i8);

/// Offsets a board location by a row and column delta.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - The new location if it stays
///   within bounds, otherwise `ChessErrors::OutOfBounds`.
pub fn offset_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::OutOfBounds)
    } else {
        Ok(y)
    }
}

/// Reports whether a location lies on the board.
pub fn location_in_bounds(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}
