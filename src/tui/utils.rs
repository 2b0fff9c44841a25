use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Layout utilities for TUI components
pub mod layout {
    use super::*;

    /// Create a centered rectangle with given width and height
    pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x.saturating_add((area.width - width) / 2),
            y: area.y.saturating_add((area.height - height) / 2),
            width,
            height,
        }
    }

    /// Lay out fixed-width segments separated by `gap`, right-aligned
    /// inside `area`. Segments that do not fit are clipped to the area.
    pub fn right_aligned_row(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
        let gaps = u16::try_from(widths.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let total = widths
            .iter()
            .copied()
            .fold(0u16, u16::saturating_add)
            .saturating_add(gap.saturating_mul(gaps));
        let right = area.x.saturating_add(area.width);
        let mut x = area.x.saturating_add(area.width.saturating_sub(total));

        widths
            .iter()
            .map(|width| {
                let start = x.min(right);
                let rect = Rect {
                    x: start,
                    y: area.y,
                    width: (*width).min(right - start),
                    height: area.height.min(1),
                };
                x = x.saturating_add(width.saturating_add(gap));
                rect
            })
            .collect()
    }

    /// Shrink a rectangle by a margin on every side
    pub fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
        Rect {
            x: area.x.saturating_add(horizontal),
            y: area.y.saturating_add(vertical),
            width: area.width.saturating_sub(horizontal.saturating_mul(2)),
            height: area.height.saturating_sub(vertical.saturating_mul(2)),
        }
    }
}

/// Text measurement helpers
pub mod text {
    use super::*;

    /// Drop leading characters until `columns` display columns are skipped
    pub fn skip_columns(s: &str, columns: usize) -> &str {
        let mut skipped = 0;
        for (idx, ch) in s.char_indices() {
            if skipped >= columns {
                return &s[idx..];
            }
            skipped += ch.width().unwrap_or(0);
        }
        ""
    }
}
