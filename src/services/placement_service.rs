use crate::models::toast::ToastStyle;
use crate::services::markup_service::Segment;
use iced::{Point, Rectangle, Size};

// Average glyph advance relative to the font size.
const REGULAR_ADVANCE: f32 = 0.6;
const BOLD_ADVANCE: f32 = 0.65;
// Matches iced's default relative line height.
const LINE_HEIGHT: f32 = 1.3;

/// Geometry of the primary display as reported by the window system.
pub fn primary_screen(size: Size) -> Rectangle {
    Rectangle::new(Point::ORIGIN, size)
}

/// Top-left corner that centers `content` inside `screen`.
pub fn centered_origin(screen: Rectangle, content: Size) -> Point {
    let center = screen.center();
    Point::new(
        center.x - content.width / 2.0,
        center.y - content.height / 2.0,
    )
}

/// Size the label needs to show `segments` with `style`, padding included.
///
/// The runtime only measures text while laying out a window, so the overlay
/// window is sized up front from average glyph metrics.
pub fn estimate_label_size(segments: &[Segment], style: &ToastStyle) -> Size {
    let mut lines = vec![0.0_f32];

    for segment in segments {
        let advance = if segment.bold {
            BOLD_ADVANCE
        } else {
            REGULAR_ADVANCE
        };

        for (i, part) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(0.0);
            }
            if let Some(width) = lines.last_mut() {
                *width += part.chars().count() as f32 * advance * style.font_size;
            }
        }
    }

    let widest = lines.iter().copied().fold(0.0, f32::max);
    let height = lines.len() as f32 * LINE_HEIGHT * style.font_size;

    Size::new(
        (widest + 2.0 * style.padding).ceil(),
        (height + 2.0 * style.padding).ceil(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::markup_service::parse;

    #[test]
    fn origin_is_screen_center_minus_half_content() {
        let screen = primary_screen(Size::new(1920.0, 1080.0));
        let origin = centered_origin(screen, Size::new(200.0, 40.0));

        assert_eq!(origin, Point::new(860.0, 520.0));
    }

    #[test]
    fn origin_respects_screen_offset() {
        let screen = Rectangle::new(Point::new(100.0, 50.0), Size::new(800.0, 600.0));
        let origin = centered_origin(screen, Size::new(100.0, 100.0));

        assert_eq!(origin, Point::new(450.0, 300.0));
    }

    #[test]
    fn empty_message_still_gets_a_padded_box() {
        let style = ToastStyle::default();
        let size = estimate_label_size(&[], &style);

        assert_eq!(size.width, 20.0);
        assert_eq!(size.height, (1.3_f32 * 14.0 + 20.0).ceil());
    }

    #[test]
    fn widest_line_drives_width() {
        let style = ToastStyle::default();
        let short = estimate_label_size(&parse("abcd"), &style);
        let wrapped = estimate_label_size(&parse("abcd<br>ab"), &style);

        assert_eq!(short.width, wrapped.width);
        assert!(wrapped.height > short.height);
    }

    #[test]
    fn bold_text_is_wider() {
        let style = ToastStyle::default();
        let regular = estimate_label_size(&parse("enabled"), &style);
        let bold = estimate_label_size(&parse("<b>enabled</b>"), &style);

        assert!(bold.width > regular.width);
        assert_eq!(bold.height, regular.height);
    }
}
