/// Smallest board size worth playing.
pub const MIN_SIZE: usize = 3;
/// Largest size that still renders comfortably on a terminal.
pub const MAX_SIZE: usize = 15;
/// Glyph for an empty cell when rendering the grid.
pub const EMPTY_GLYPH: char = '-';

/// Whether `size` follows the game's convention: odd, and within
/// [`MIN_SIZE`]..=[`MAX_SIZE`]. The core [`crate::Board`] accepts any
/// positive square size; this gate belongs to the menu layer.
pub fn is_conventional_size(size: usize) -> bool {
    size % 2 == 1 && (MIN_SIZE..=MAX_SIZE).contains(&size)
}
