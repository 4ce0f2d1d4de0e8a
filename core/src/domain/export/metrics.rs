//! Advance widths of the built-in Helvetica faces, in 1/1000 em, taken from
//! the standard Adobe font metrics for printable ASCII.

use crate::domain::export::entities::FontWeight;

const POINT_IN_MM: f32 = 25.4 / 72.0;

/// Width used for glyphs outside printable ASCII. A full em keeps such
/// text inside the margins at the cost of wrapping a little early.
const FALLBACK_WIDTH: u16 = 1000;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

fn advance_width(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    (ch as usize)
        .checked_sub(0x20)
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Rendered width of a single glyph in millimetres.
pub fn char_width_mm(ch: char, font_size: f32, weight: FontWeight) -> f32 {
    f32::from(advance_width(ch, weight)) / 1000.0 * font_size * POINT_IN_MM
}

/// Rendered width of `text` in millimetres.
pub fn text_width_mm(text: &str, font_size: f32, weight: FontWeight) -> f32 {
    text.chars()
        .map(|ch| char_width_mm(ch, font_size, weight))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_advance_widths() {
        assert_eq!(advance_width(' ', FontWeight::Normal), 278);
        assert_eq!(advance_width('W', FontWeight::Normal), 944);
        assert_eq!(advance_width('i', FontWeight::Normal), 222);
        assert_eq!(advance_width('~', FontWeight::Normal), 584);
        assert_eq!(advance_width('i', FontWeight::Bold), 278);
        assert_eq!(advance_width('\u{e9}', FontWeight::Normal), FALLBACK_WIDTH);
        assert_eq!(advance_width('\t', FontWeight::Bold), FALLBACK_WIDTH);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        // Two capital Ms are 2 x 833 units.
        let width = text_width_mm("MM", 12.0, FontWeight::Normal);
        assert!((width - 1.666 * 12.0 * POINT_IN_MM).abs() < 1e-3);
        assert!(
            text_width_mm("WAVE", 11.0, FontWeight::Bold)
                > text_width_mm("wave", 11.0, FontWeight::Bold)
        );
        assert_eq!(text_width_mm("", 11.0, FontWeight::Normal), 0.0);
    }
}
