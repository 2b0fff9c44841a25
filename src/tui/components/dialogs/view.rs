//! Drawing of a single dialog instance
//!
//! Every caller-provided string is sanitized on its way into a widget, and
//! the regions drawn here are recorded on the instance for mouse hit-tests.

use super::layout::{button_caption, DialogLayout};
use crate::modal::escape::sanitize_line;
use crate::modal::{DialogInstance, DialogKind, DialogType, FocusTarget, HitRegions, InputField};
use crate::tui::utils::text::skip_columns;
use crate::tui::{styles::Theme, Frame};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Glyph shown in front of the title
pub fn icon(dialog_type: DialogType) -> &'static str {
    match dialog_type {
        DialogType::Success => "✔",
        DialogType::Error => "✖",
        DialogType::Warning => "⚠",
        DialogType::Info => "ℹ",
        DialogType::Confirm => "?",
    }
}

fn key_hints(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::Alert => "Enter/Esc: Close",
        DialogKind::Confirm => "Tab: Switch • Enter: Confirm • Esc: Cancel",
        DialogKind::Prompt => "Tab: Switch • Enter: Submit • Esc: Cancel",
    }
}

/// Render `dialog` centered in `area` and record its hit regions
pub fn render_dialog(
    dialog: &mut DialogInstance,
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    show_hints: bool,
) {
    let layout = DialogLayout::calculate(dialog.request(), area, show_hints);
    let request = dialog.request();
    let dialog_type = request.dialog_type;
    let focus = dialog.focus();

    frame.render_widget(Clear, layout.dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(dialog_type))
        .style(theme.surface_style());
    frame.render_widget(block, layout.dialog);

    let header = Line::from(vec![
        Span::styled(icon(dialog_type), theme.title_style(dialog_type)),
        Span::raw("  "),
        Span::styled(sanitize_line(&request.title), theme.title_style(dialog_type)),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);

    let message: Vec<Line> = layout
        .message_lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    frame.render_widget(
        Paragraph::new(message).style(theme.surface_style()),
        layout.message,
    );

    if let (Some(area), Some(field)) = (layout.input, dialog.input()) {
        render_input(field, focus == FocusTarget::Input, frame, area, theme);
    }

    if let (Some(area), Some(label)) = (layout.cancel, request.buttons.cancel.as_deref()) {
        frame.render_widget(
            Paragraph::new(button_caption(label))
                .style(theme.secondary_button_style(focus == FocusTarget::Cancel)),
            area,
        );
    }
    frame.render_widget(
        Paragraph::new(button_caption(&request.buttons.confirm)).style(
            theme.primary_button_style(focus == FocusTarget::Confirm, request.is_destructive()),
        ),
        layout.confirm,
    );

    if let Some(area) = layout.hints {
        frame.render_widget(
            Paragraph::new(key_hints(request.kind)).style(theme.hint_style()),
            area,
        );
    }

    dialog.set_hit_regions(HitRegions {
        dialog: layout.dialog,
        input: layout.input,
        cancel: layout.cancel,
        confirm: layout.confirm,
    });
}

fn render_input(field: &InputField, focused: bool, frame: &mut Frame, area: Rect, theme: &Theme) {
    let base = theme.input_style(focused);
    // Blank the whole row so the field reads as a box
    frame.render_widget(Paragraph::new("").style(base), area);

    let width = area.width.max(1);
    let cursor_column = field.cursor_column();
    let scroll = cursor_column.saturating_sub(width - 1);

    let line = if field.text().is_empty() {
        Line::from(Span::styled(sanitize_line(field.placeholder()), theme.placeholder_style()))
    } else {
        let shown = sanitize_line(&field.display_text());
        let visible = skip_columns(&shown, usize::from(scroll)).to_string();
        let style = if field.is_all_selected() {
            theme.selection_style()
        } else {
            base
        };
        Line::from(Span::styled(visible, style))
    };
    frame.render_widget(Paragraph::new(line).style(base), area);

    if focused {
        frame.set_cursor(area.x + cursor_column - scroll, area.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{ConfirmOptions, DialogId, DialogRequest, PromptOptions};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tokio::sync::oneshot;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(dialog: &mut DialogInstance) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_dialog(dialog, frame, area, &Theme::dark(), true)
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_title_message_and_buttons() {
        let (tx, _rx) = oneshot::channel();
        let request = DialogRequest::confirm(
            "Delete user?",
            ConfirmOptions::new().with_type(DialogType::Warning).with_confirm_text("Delete"),
        );
        let mut dialog = DialogInstance::new(DialogId(1), request, tx);
        let screen = draw(&mut dialog);

        assert!(screen.contains("Confirm"));
        assert!(screen.contains("Delete user?"));
        assert!(screen.contains("Delete"));
        assert!(screen.contains("Cancel"));
        assert!(screen.contains("⚠"));

        let regions = dialog.hit_regions().unwrap();
        assert!(regions.cancel.is_some());
        assert!(regions.input.is_none());
    }

    #[test]
    fn test_hostile_text_is_rendered_inert() {
        let (tx, _rx) = oneshot::channel();
        let request = DialogRequest::confirm(
            "Remove <script>alert(\"x\")</script>\x1b[2J now?",
            ConfirmOptions::new().with_title("User \x1b]0;owned\x07'bob'"),
        );
        let mut dialog = DialogInstance::new(DialogId(1), request, tx);
        let screen = draw(&mut dialog);

        assert!(!screen.contains('\x1b'));
        assert!(!screen.contains('\x07'));
        assert!(screen.contains("<script>alert(\"x\")</script>[2J"));
        assert!(screen.contains("'bob'"));
    }

    #[test]
    fn test_prompt_shows_default_or_placeholder() {
        let (tx, _rx) = oneshot::channel();
        let request = DialogRequest::prompt("Enter ban hours:", PromptOptions::new().with_default_value("24"));
        let mut dialog = DialogInstance::new(DialogId(1), request, tx);
        assert!(draw(&mut dialog).contains("24"));

        let (tx, _rx) = oneshot::channel();
        let request = DialogRequest::prompt(
            "Enter reason for ban:",
            PromptOptions::new().with_placeholder("Violation of terms..."),
        );
        let mut dialog = DialogInstance::new(DialogId(2), request, tx);
        assert!(draw(&mut dialog).contains("Violation of terms..."));
    }

    #[test]
    fn test_masked_prompt_hides_value() {
        let (tx, _rx) = oneshot::channel();
        let request = DialogRequest::prompt(
            "New Admin Password:",
            PromptOptions::new().with_default_value("hunter2").masked(true),
        );
        let mut dialog = DialogInstance::new(DialogId(1), request, tx);
        let screen = draw(&mut dialog);
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("•••••••"));
    }
}
