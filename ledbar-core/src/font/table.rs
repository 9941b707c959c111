//! 5x5 glyph table
//!
//! Each glyph is five rows of five bits; bit 4 is the leftmost column.
//! The character set is closed: anything else renders as a fallback glyph
//! chosen by the caller.

/// Glyph rows
pub const GLYPH_HEIGHT: usize = 5;

/// Glyph columns
pub const GLYPH_WIDTH: usize = 5;

/// Horizontal advance between characters (glyph + one spacer column)
pub const GLYPH_PITCH: usize = GLYPH_WIDTH + 1;

/// Fallback for characters drawn directly at a position
pub const DRAW_FALLBACK: char = '?';

/// Fallback for characters pushed in by the marquee
pub const PUSH_FALLBACK: char = '*';

/// One 5x5 bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// All-off glyph
    pub const BLANK: Glyph = Glyph::new([0; GLYPH_HEIGHT]);

    pub const fn new(rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    pub const fn rows(&self) -> [u8; GLYPH_HEIGHT] {
        self.rows
    }

    /// Whether the pixel at glyph column `col`, row `row` is lit
    ///
    /// Anything outside the 5x5 cell is unlit.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.rows[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }
}

/// Exact table lookup, no case folding
pub const fn glyph(c: char) -> Option<Glyph> {
    let rows = match c {
        '0' => [14, 17, 17, 17, 14],
        '1' => [4, 12, 4, 4, 14],
        '2' => [14, 1, 14, 16, 14],
        '3' => [30, 1, 14, 1, 30],
        '4' => [18, 18, 31, 2, 2],
        '5' => [31, 16, 14, 1, 30],
        '6' => [14, 16, 30, 17, 14],
        '7' => [31, 1, 2, 4, 4],
        '8' => [14, 17, 14, 17, 14],
        '9' => [14, 17, 15, 1, 14],
        'A' => [14, 17, 31, 17, 17],
        'B' => [30, 17, 30, 17, 30],
        'C' => [14, 16, 16, 16, 14],
        'D' => [28, 18, 17, 18, 28],
        'E' => [31, 16, 30, 16, 31],
        'F' => [31, 16, 30, 16, 16],
        'G' => [14, 16, 19, 17, 14],
        'H' => [17, 17, 31, 17, 17],
        'I' => [14, 4, 4, 4, 14],
        'J' => [1, 1, 1, 17, 14],
        'K' => [17, 18, 28, 18, 17],
        'L' => [16, 16, 16, 16, 31],
        'M' => [17, 27, 21, 17, 17],
        'N' => [17, 25, 21, 19, 17],
        'O' => [14, 17, 17, 17, 14],
        'P' => [30, 17, 30, 16, 16],
        'Q' => [14, 17, 17, 21, 14],
        'R' => [30, 17, 30, 18, 17],
        'S' => [14, 16, 14, 1, 14],
        'T' => [31, 4, 4, 4, 4],
        'U' => [17, 17, 17, 17, 14],
        'V' => [17, 17, 10, 10, 4],
        'W' => [17, 17, 21, 21, 10],
        'X' => [17, 10, 4, 10, 17],
        'Y' => [17, 17, 10, 4, 4],
        'Z' => [31, 2, 4, 8, 31],
        'Ñ' => [31, 0, 25, 21, 19],
        ' ' => [0, 0, 0, 0, 0],
        '#' => [10, 31, 10, 31, 10],
        '_' => [0, 0, 0, 0, 31],
        '-' => [0, 0, 14, 0, 0],
        '*' => [0, 10, 4, 10, 0],
        '/' => [1, 2, 4, 8, 16],
        '=' => [0, 14, 0, 14, 0],
        '+' => [0, 4, 14, 4, 0],
        '.' => [0, 0, 0, 0, 4],
        ',' => [0, 0, 0, 4, 8],
        ':' => [0, 4, 0, 4, 0],
        ';' => [0, 4, 0, 4, 8],
        '\'' => [4, 0, 0, 0, 0],
        '"' => [10, 0, 0, 0, 0],
        '(' => [2, 4, 4, 4, 2],
        ')' => [4, 2, 2, 2, 4],
        '[' => [6, 4, 4, 4, 6],
        ']' => [6, 2, 2, 2, 6],
        '{' => [2, 4, 4, 4, 2],
        '}' => [4, 2, 3, 2, 4],
        '<' => [0, 4, 8, 4, 0],
        '>' => [0, 8, 4, 8, 0],
        '!' => [4, 4, 4, 0, 4],
        '?' => [14, 1, 6, 0, 4],
        'º' => [14, 10, 14, 0, 0],
        '%' => [17, 18, 4, 9, 17],
        '$' => [14, 20, 14, 5, 14],
        '€' => [14, 16, 28, 16, 14],
        '|' => [4, 4, 4, 4, 4],
        '@' => [14, 1, 29, 17, 14],
        // Solid block, used as a separator bar in framed messages
        '\n' => [31, 31, 31, 31, 31],
        _ => return None,
    };
    Some(Glyph::new(rows))
}

/// Uppercase `c` when it has a single-character uppercase form
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Case-folded lookup with a fallback glyph
///
/// A fallback that is itself missing from the table renders blank.
pub fn lookup(c: char, fallback: char) -> Glyph {
    glyph(fold_case(c))
        .or_else(|| glyph(fallback))
        .unwrap_or(Glyph::BLANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_left_to_right() {
        let h = glyph('H').unwrap();
        // 17 = 0b10001
        assert!(h.is_set(0, 0));
        assert!(!h.is_set(1, 0));
        assert!(h.is_set(4, 0));
        // 31 = full crossbar
        assert!((0..5).all(|col| h.is_set(col, 2)));
    }

    #[test]
    fn test_outside_cell_unset() {
        let block = glyph('\n').unwrap();
        assert!(!block.is_set(5, 0));
        assert!(!block.is_set(0, 5));
    }

    #[test]
    fn test_lookup_uppercases() {
        assert_eq!(lookup('a', DRAW_FALLBACK), glyph('A').unwrap());
        assert_eq!(lookup('ñ', DRAW_FALLBACK), glyph('Ñ').unwrap());
    }

    #[test]
    fn test_lookup_fallbacks_differ() {
        assert_eq!(lookup('§', DRAW_FALLBACK), glyph('?').unwrap());
        assert_eq!(lookup('§', PUSH_FALLBACK), glyph('*').unwrap());
    }

    #[test]
    fn test_missing_fallback_is_blank() {
        assert_eq!(lookup('§', '§'), Glyph::BLANK);
    }

    #[test]
    fn test_multi_char_uppercase_not_split() {
        // 'ß' uppercases to "SS"; it is treated as unknown
        assert_eq!(lookup('ß', DRAW_FALLBACK), glyph('?').unwrap());
    }
}
