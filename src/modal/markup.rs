//! HTML markup surface
//!
//! Produces the overlay markup a browser host would mount for a request.
//! All interpolated text goes through `escape_html`; only the fixed icon
//! markup and class names are emitted raw.

use super::escape::escape_html;
use super::types::{DialogKind, DialogRequest, DialogType};
use std::fmt::Write;

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">"#;

/// Path data of the icon for a dialog type
fn icon_path(dialog_type: DialogType) -> &'static str {
    match dialog_type {
        DialogType::Success => "M5 13l4 4L19 7",
        DialogType::Error => "M6 18L18 6M6 6l12 12",
        DialogType::Warning => "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
        DialogType::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        DialogType::Confirm => "M8.228 9c.549-1.165 2.03-2 3.772-2 2.21 0 4 1.343 4 3 0 1.4-1.278 2.575-3.006 2.907-.542.104-.994.54-.994 1.093m0 3h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    }
}

pub fn icon_svg(dialog_type: DialogType) -> String {
    format!(
        r#"{SVG_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="{}" /></svg>"#,
        icon_path(dialog_type)
    )
}

/// CSS class of the confirm button
pub fn confirm_button_class(request: &DialogRequest) -> &'static str {
    if request.is_destructive() {
        "custom-modal-btn-danger"
    } else {
        "custom-modal-btn-primary"
    }
}

/// Render the complete overlay for `request`
pub fn render_markup(request: &DialogRequest) -> String {
    let mut html = String::with_capacity(1024);
    let dialog_type = request.dialog_type;

    // Writing into a String cannot fail
    let _ = write!(
        html,
        concat!(
            r#"<div class="custom-modal-overlay">"#,
            r#"<div class="custom-modal" role="dialog" aria-modal="true">"#,
            r#"<div class="custom-modal-header">"#,
            r#"<div class="custom-modal-icon {ty}">{icon}</div>"#,
            r#"<h3 class="custom-modal-title">{title}</h3>"#,
            r#"</div>"#,
            r#"<div class="custom-modal-body">"#,
            r#"<p class="custom-modal-message">{message}</p>"#,
        ),
        ty = dialog_type.as_str(),
        icon = icon_svg(dialog_type),
        title = escape_html(&request.title),
        message = escape_html(&request.message),
    );

    if request.kind == DialogKind::Prompt {
        let input_type = if request.masked { "password" } else { "text" };
        let _ = write!(
            html,
            r#"<input type="{}" class="custom-modal-input" id="modal-input" value="{}" placeholder="{}" autofocus>"#,
            input_type,
            escape_html(request.default_value.as_deref().unwrap_or_default()),
            escape_html(request.placeholder.as_deref().unwrap_or_default()),
        );
    }

    html.push_str(r#"</div><div class="custom-modal-footer">"#);

    match request.kind {
        DialogKind::Alert => {
            let _ = write!(
                html,
                r#"<button class="custom-modal-btn custom-modal-btn-primary" id="modal-ok-btn" autofocus>{}</button>"#,
                escape_html(&request.buttons.confirm),
            );
        }
        DialogKind::Confirm | DialogKind::Prompt => {
            let cancel = request.buttons.cancel.as_deref().unwrap_or("Cancel");
            let autofocus = if request.kind == DialogKind::Confirm { " autofocus" } else { "" };
            let _ = write!(
                html,
                concat!(
                    r#"<button class="custom-modal-btn custom-modal-btn-secondary" id="modal-cancel-btn">{}</button>"#,
                    r#"<button class="custom-modal-btn {}" id="modal-confirm-btn"{}>{}</button>"#,
                ),
                escape_html(cancel),
                confirm_button_class(request),
                autofocus,
                escape_html(&request.buttons.confirm),
            );
        }
    }

    html.push_str("</div></div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{AlertOptions, ConfirmOptions, PromptOptions};

    #[test]
    fn test_message_markup_is_escaped() {
        let request = DialogRequest::confirm(
            "Delete <script>alert(1)</script> \"Bob\" O'Neil?",
            ConfirmOptions::new().with_title("<b>Confirm</b>"),
        );
        let html = render_markup(&request);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &quot;Bob&quot; O&#39;Neil?"));
        assert!(html.contains("&lt;b&gt;Confirm&lt;/b&gt;"));
    }

    #[test]
    fn test_prompt_attributes_cannot_break_out() {
        let request = DialogRequest::prompt(
            "Name?",
            PromptOptions::new()
                .with_default_value(r#"" onfocus="steal()"#)
                .with_placeholder("<i>"),
        );
        let html = render_markup(&request);
        assert!(html.contains(r#"value="&quot; onfocus=&quot;steal()""#));
        assert!(html.contains(r#"placeholder="&lt;i&gt;""#));
        assert!(html.contains(r#"type="text""#));
    }

    #[test]
    fn test_confirm_button_class_follows_type() {
        let danger = DialogRequest::confirm("x", ConfirmOptions::new().with_type(DialogType::Error));
        assert!(render_markup(&danger).contains("custom-modal-btn custom-modal-btn-danger"));

        let normal = DialogRequest::confirm("x", ConfirmOptions::new().with_type(DialogType::Warning));
        let html = render_markup(&normal);
        assert!(html.contains(r#"class="custom-modal-btn custom-modal-btn-primary" id="modal-confirm-btn""#));
        assert!(html.contains(r#"custom-modal-icon warning"#));
    }

    #[test]
    fn test_alert_has_single_button() {
        let request = DialogRequest::alert("Saved", AlertOptions::new().with_type(DialogType::Success));
        let html = render_markup(&request);
        assert!(html.contains("modal-ok-btn"));
        assert!(!html.contains("modal-cancel-btn"));
        assert!(html.contains(icon_path(DialogType::Success)));
    }

    #[test]
    fn test_masked_prompt_uses_password_input() {
        let request = DialogRequest::prompt("Password:", PromptOptions::new().masked(true));
        assert!(render_markup(&request).contains(r#"type="password""#));
    }
}
