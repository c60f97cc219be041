//! String measurement, aligned drawing and word wrap

use crate::color::TextAlignment;
use crate::display::OledDisplay;

impl OledDisplay {
    /// Width of `text` in pixels with the current font (0 without a font)
    pub fn string_width(&self, text: &str) -> i32 {
        self.font()
            .map_or(0, |font| i32::try_from(font.string_width(text)).unwrap_or(i32::MAX))
    }

    /// Draw `text` on one line with its top at `y`, anchored at `x` by the
    /// current alignment. Characters the font lacks advance the cursor
    /// without drawing. Does nothing when no font is set.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        let Some(font) = self.font() else {
            return;
        };

        let width = self.string_width(text);
        let mut cursor = match self.text_alignment() {
            TextAlignment::Left => x,
            TextAlignment::Center => x.saturating_sub(width / 2),
            TextAlignment::Right => x.saturating_sub(width),
        };

        for ch in text.chars() {
            let advance = match font.glyph(ch) {
                Some(glyph) => {
                    self.draw_glyph(cursor, y, &glyph);
                    glyph.width
                }
                None => font.fallback_width(),
            };
            cursor = cursor.saturating_add(i32::from(advance));
        }
    }

    /// Draw `text` greedily wrapped at spaces so lines stay within
    /// `max_width`, one font height apart. A word wider than `max_width` gets
    /// a line of its own and is not broken.
    pub fn draw_string_max_width(&mut self, x: i32, y: i32, max_width: i32, text: &str) {
        let Some(font) = self.font() else {
            return;
        };

        let mut line = String::new();
        let mut line_y = y;

        for word in text.split(' ') {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };

            if self.string_width(&candidate) > max_width && !line.is_empty() {
                self.draw_string(x, line_y, &line);
                line = word.to_string();
                line_y = line_y.saturating_add(i32::from(font.height));
            } else {
                line = candidate;
            }
        }

        if !line.is_empty() {
            self.draw_string(x, line_y, &line);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fonts::FONT_6X8;
    use crate::{OledDisplay, TextAlignment};
    use oled_specs::Geometry;

    fn display() -> OledDisplay {
        let mut display = OledDisplay::new(Geometry::G128x64);
        display.set_font(&FONT_6X8);
        display
    }

    fn lit_columns(display: &OledDisplay) -> (i32, i32) {
        let columns: Vec<i32> = (0..display.width())
            .filter(|&x| (0..display.height()).any(|y| display.get_pixel(x, y)))
            .collect();
        (
            columns.first().copied().unwrap_or(-1),
            columns.last().copied().unwrap_or(-1),
        )
    }

    #[test]
    fn test_no_font_is_noop() {
        let mut display = OledDisplay::new(Geometry::G128x64);
        assert_eq!(display.string_width("Hello"), 0);
        display.draw_string(0, 0, "Hello");
        display.draw_string_max_width(0, 0, 50, "Hello world");
        assert_eq!(display.lit_pixel_count(), 0);
    }

    #[test]
    fn test_alignment_anchors() {
        let mut d = display();
        // "A" is 6 wide; its ink spans columns 0..=4
        d.draw_string(10, 0, "A");
        assert_eq!(lit_columns(&d), (10, 14));

        d.clear();
        d.set_text_alignment(TextAlignment::Center);
        d.draw_string(10, 0, "A");
        assert_eq!(lit_columns(&d), (7, 11));

        d.clear();
        d.set_text_alignment(TextAlignment::Right);
        d.draw_string(10, 0, "A");
        assert_eq!(lit_columns(&d), (4, 8));
    }

    #[test]
    fn test_unknown_char_advances() {
        let mut d = display();
        d.draw_string(0, 0, "\u{2022}|");
        // '|' ink sits in its glyph's third column
        assert_eq!(lit_columns(&d), (8, 8));
    }

    #[test]
    fn test_draw_string_respects_color() {
        let mut d = display();
        d.fill_rect(0, 0, 30, 8);
        d.set_color(crate::Color::Black);
        d.draw_string(0, 0, "|");
        assert!(!d.get_pixel(2, 3));
        assert!(d.get_pixel(1, 3));
    }

    #[test]
    fn test_wrap_lines() {
        let mut d = display();
        // Each word is 18 px; two words with the space are 42 px
        d.draw_string_max_width(0, 0, 40, "aaa bbb ccc");
        let rows_with_ink: Vec<i32> = (0..64)
            .filter(|&y| (0..128).any(|x| d.get_pixel(x, y)))
            .collect();
        let first = *rows_with_ink.first().unwrap_or(&-1);
        let last = *rows_with_ink.last().unwrap_or(&-1);
        assert!(first < 8);
        assert!((16..24).contains(&last));
    }

    #[test]
    fn test_wrap_keeps_fitting_text_on_one_line() {
        let mut wrapped = display();
        wrapped.draw_string_max_width(0, 0, 128, "aaa bbb ccc");
        let mut single = display();
        single.draw_string(0, 0, "aaa bbb ccc");
        assert_eq!(wrapped.buffer(), single.buffer());
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let mut d = display();
        d.draw_string_max_width(0, 0, 10, "supercalifragilistic");
        assert!((8..64).all(|y| (0..128).all(|x| !d.get_pixel(x, y))));
        assert!(d.lit_pixel_count() > 0);
    }
}
