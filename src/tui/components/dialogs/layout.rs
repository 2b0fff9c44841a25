//! Geometry of a dialog pane
//!
//! Sizes the pane to its content (wrapped message, button row, optional
//! field) within the available area and splits it into rows.

use crate::modal::escape::{sanitize_for_terminal, sanitize_line};
use crate::modal::{DialogKind, DialogRequest};
use crate::tui::utils::layout::{centered_rect, inset, right_aligned_row};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

pub const MIN_WIDTH: u16 = 32;
pub const MAX_WIDTH: u16 = 72;
/// Columns between the border and the content
const PADDING_X: u16 = 2;
const BUTTON_GAP: u16 = 2;

/// Computed rows of a dialog pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    /// Full pane including border
    pub dialog: Rect,
    pub header: Rect,
    pub message: Rect,
    pub input: Option<Rect>,
    pub cancel: Option<Rect>,
    pub confirm: Rect,
    pub hints: Option<Rect>,
    /// Message wrapped to the content width
    pub message_lines: Vec<String>,
}

/// Rendered caption of a button, padded like `  OK  `
pub fn button_caption(label: &str) -> String {
    format!("  {}  ", sanitize_line(label))
}

fn button_width(label: &str) -> u16 {
    clamp_u16(button_caption(label).width())
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Wrap the message to `width` columns, keeping explicit line breaks
pub fn wrap_message(message: &str, width: u16) -> Vec<String> {
    let clean = sanitize_for_terminal(message);
    let width = usize::from(width.max(1));
    clean
        .split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

impl DialogLayout {
    pub fn calculate(request: &DialogRequest, available: Rect, show_hints: bool) -> Self {
        let is_prompt = request.kind == DialogKind::Prompt;
        let confirm_width = button_width(&request.buttons.confirm);
        let cancel_width = request.buttons.cancel.as_deref().map(button_width);
        let buttons_width =
            confirm_width.saturating_add(cancel_width.map_or(0, |w| w.saturating_add(BUTTON_GAP)));

        // Natural content width: longest message line, header, buttons
        let title_width = clamp_u16(sanitize_line(&request.title).width()).saturating_add(3);
        let message_width = sanitize_for_terminal(&request.message)
            .lines()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            .min(MAX_WIDTH as usize) as u16;
        let natural = message_width.max(title_width).max(buttons_width);

        let max_width = available.width.min(MAX_WIDTH);
        let width = natural
            .saturating_add(2 * PADDING_X + 2)
            .clamp(MIN_WIDTH.min(max_width), max_width);
        let content_width = width.saturating_sub(2 * PADDING_X + 2);

        let message_lines = wrap_message(&request.message, content_width);
        // Rows beyond the screen are clipped anyway
        let message_height = clamp_u16(message_lines.len().min(usize::from(available.height)));

        // header, gap, message, [gap, input], gap, buttons, [hints]
        let fixed_rows: u16 = 1 + 1 + 1 + 1 + if is_prompt { 2 } else { 0 } + if show_hints { 1 } else { 0 };
        let height = fixed_rows
            .saturating_add(message_height)
            .saturating_add(2)
            .min(available.height);

        let dialog = centered_rect(width, height, available);
        let content = inset(dialog, PADDING_X + 1, 1);

        let row = |offset: u16| Rect {
            x: content.x,
            y: content.y.saturating_add(offset),
            width: content.width,
            height: 1,
        };

        // Rows below the message are anchored to the bottom so a short
        // terminal clips the message rather than the buttons.
        let bottom = content.y.saturating_add(content.height);
        let mut cursor = bottom;
        let hints = show_hints.then(|| {
            cursor = cursor.saturating_sub(1);
            Rect { y: cursor, ..row(0) }
        });
        cursor = cursor.saturating_sub(1);
        let buttons_row = Rect { y: cursor, ..row(0) };
        cursor = cursor.saturating_sub(1);
        let input = is_prompt.then(|| {
            cursor = cursor.saturating_sub(1);
            let input = Rect { y: cursor, ..row(0) };
            cursor = cursor.saturating_sub(1);
            input
        });

        let header = row(0);
        let message_top = content.y.saturating_add(2).min(cursor);
        let message = Rect {
            x: content.x,
            y: message_top,
            width: content.width,
            height: cursor.saturating_sub(message_top),
        };

        let (cancel, confirm) = match cancel_width {
            Some(cancel_width) => {
                let cells = right_aligned_row(buttons_row, &[cancel_width, confirm_width], BUTTON_GAP);
                (Some(cells[0]), cells[1])
            }
            None => {
                let cells = right_aligned_row(buttons_row, &[confirm_width], BUTTON_GAP);
                (None, cells[0])
            }
        };

        Self {
            dialog,
            header,
            message,
            input,
            cancel,
            confirm,
            hints,
            message_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{AlertOptions, ConfirmOptions, PromptOptions};

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    #[test]
    fn test_confirm_layout_rows() {
        let request = DialogRequest::confirm("Delete user?", ConfirmOptions::new());
        let layout = DialogLayout::calculate(&request, screen(), false);

        assert_eq!(layout.dialog.width, MIN_WIDTH);
        // border + header + gap + 1 message line + gap + buttons + border
        assert_eq!(layout.dialog.height, 7);
        assert_eq!(layout.message.height, 1);
        assert_eq!(layout.message_lines, vec!["Delete user?".to_string()]);
        let cancel = layout.cancel.unwrap();
        assert_eq!(cancel.y, layout.confirm.y);
        assert!(cancel.x + cancel.width < layout.confirm.x);
        assert!(layout.confirm.x + layout.confirm.width <= layout.dialog.x + layout.dialog.width - 1);
        assert!(layout.input.is_none());
    }

    #[test]
    fn test_prompt_layout_has_input_row() {
        let request = DialogRequest::prompt("Enter ban hours:", PromptOptions::new());
        let layout = DialogLayout::calculate(&request, screen(), true);
        let input = layout.input.unwrap();
        assert!(input.y > layout.message.y);
        assert!(input.y < layout.confirm.y);
        assert_eq!(layout.hints.unwrap().y, layout.confirm.y + 1);
    }

    #[test]
    fn test_long_message_wraps_within_max_width() {
        let message = "word ".repeat(60);
        let request = DialogRequest::alert(message, AlertOptions::new());
        let layout = DialogLayout::calculate(&request, screen(), false);
        assert_eq!(layout.dialog.width, MAX_WIDTH);
        assert!(layout.message_lines.len() > 1);
        assert!(layout.message_lines.iter().all(|l| l.width() as u16 <= layout.message.width));
        assert!(layout.cancel.is_none());
    }

    #[test]
    fn test_small_terminal_keeps_buttons_visible() {
        let message = "line\n".repeat(40);
        let request = DialogRequest::confirm(message, ConfirmOptions::new());
        let area = Rect::new(0, 0, 40, 12);
        let layout = DialogLayout::calculate(&request, area, false);
        assert_eq!(layout.dialog.height, 12);
        assert!(layout.confirm.y < area.height - 1);
        assert!(layout.message.y + layout.message.height <= layout.confirm.y);
    }

    #[test]
    fn test_huge_message_is_clipped_to_screen() {
        let request = DialogRequest::alert("x\n".repeat(65_531), AlertOptions::new());
        let area = Rect::new(0, 0, 80, 24);
        let layout = DialogLayout::calculate(&request, area, false);
        assert_eq!(layout.dialog.height, 24);
        assert!(layout.confirm.y < area.height);
        assert!(layout.message.y + layout.message.height <= layout.confirm.y);
    }

    #[test]
    fn test_very_long_labels_stay_inside_pane() {
        let request = DialogRequest::confirm(
            "Proceed?",
            ConfirmOptions::new()
                .with_title("T".repeat(70_000))
                .with_confirm_text("B".repeat(40_000))
                .with_cancel_text("B".repeat(40_000)),
        );
        let area = Rect::new(0, 0, 80, 24);
        let layout = DialogLayout::calculate(&request, area, true);
        assert_eq!(layout.dialog.width, MAX_WIDTH);
        let right = layout.dialog.x + layout.dialog.width;
        let cancel = layout.cancel.unwrap();
        assert!(cancel.x + cancel.width <= right);
        assert!(layout.confirm.x + layout.confirm.width <= right);
    }
}
