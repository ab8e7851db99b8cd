//! Off-screen rendering of a single screen.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use super::ScreenRegistry;
use crate::domain::ScreenId;

/// Renders `id` into a `width` x `height` buffer and returns it as text.
///
/// Trailing spaces on each row are dropped.
#[must_use]
pub fn render_preview(registry: &impl ScreenRegistry, id: ScreenId, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let mut view = registry.render(id);
    (&mut view).render(area, &mut buf);

    buffer_to_string(&buf)
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();

    for y in area.top()..area.bottom() {
        let mut row = String::new();
        let mut skip = 0;
        for x in area.left()..area.right() {
            // cells covered by a wide glyph repeat nothing
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            skip = symbol.width().saturating_sub(1);
            row.push_str(symbol);
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Profile;
    use crate::infrastructure::BundledAssets;
    use crate::presentation::theme::Theme;
    use crate::presentation::ui::StaticScreenRegistry;
    use std::sync::Arc;

    fn registry() -> StaticScreenRegistry {
        StaticScreenRegistry::new(
            Theme::default(),
            Profile::new("Le Van C", "42"),
            Arc::new(BundledAssets::default()),
        )
    }

    #[test]
    fn test_preview_size() {
        let text = render_preview(&registry(), ScreenId::TextDetail, 40, 12);
        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().all(|line| line.width() <= 40));
    }

    #[test]
    fn test_preview_welcome() {
        let text = render_preview(&registry(), ScreenId::Welcome, 60, 30);

        assert!(text.lines().take(4).any(|l| l.contains("Le Van C")));
        assert!(text.contains("42"));
        assert!(text.contains("I'm ready"));
        assert!(text.contains("▄██▀▀"));
    }

    #[test]
    fn test_preview_components_list() {
        let text = render_preview(&registry(), ScreenId::ComponentsList, 60, 30);

        let titles = ["Text", "Image", "TextField", "PasswordField", "Column", "Row", "Self-study"];
        for title in titles {
            assert!(text.contains(title), "missing {title}");
        }
    }

    #[test]
    fn test_wide_glyphs_keep_row_width() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "界a", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buf), "界a\n");
    }
}
