//! Core dialog types
//!
//! Requests, options and outcomes shared by every surface. A request is
//! built once from the per-kind options (with defaults applied) and is not
//! modified afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for dialog instances mounted on a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DialogId(pub u64);

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog-{}", self.0)
    }
}

/// Visual type of a dialog, controlling icon, accent color and default title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogType {
    #[default]
    Info,
    Success,
    Error,
    Warning,
    Confirm,
}

impl DialogType {
    pub const ALL: [DialogType; 5] = [
        DialogType::Info,
        DialogType::Success,
        DialogType::Error,
        DialogType::Warning,
        DialogType::Confirm,
    ];

    /// Title used when the caller does not provide one
    pub fn default_title(self) -> &'static str {
        match self {
            DialogType::Success => "Success",
            DialogType::Error => "Error",
            DialogType::Warning => "Warning",
            DialogType::Info => "Notice",
            DialogType::Confirm => "Confirm",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DialogType::Info => "info",
            DialogType::Success => "success",
            DialogType::Error => "error",
            DialogType::Warning => "warning",
            DialogType::Confirm => "confirm",
        }
    }

    /// Lenient lookup: unknown names fall back to `Info`
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or(DialogType::Info)
    }
}

impl fmt::Display for DialogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogType {
    type Err = super::ModalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(DialogType::Info),
            "success" => Ok(DialogType::Success),
            "error" => Ok(DialogType::Error),
            "warning" => Ok(DialogType::Warning),
            "confirm" => Ok(DialogType::Confirm),
            other => Err(super::ModalError::InvalidDialogType(other.to_string())),
        }
    }
}

/// Which interaction a dialog offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Message with a single acknowledge button
    Alert,
    /// Message with confirm and cancel buttons
    Confirm,
    /// Message with a text field plus confirm and cancel buttons
    Prompt,
}

impl DialogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DialogKind::Alert => "alert",
            DialogKind::Confirm => "confirm",
            DialogKind::Prompt => "prompt",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button captions of a dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    pub confirm: String,
    /// Absent for alerts
    pub cancel: Option<String>,
}

/// Options accepted by `alert`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertOptions {
    pub title: Option<String>,
    pub dialog_type: Option<DialogType>,
    pub button_text: Option<String>,
}

impl AlertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, dialog_type: DialogType) -> Self {
        self.dialog_type = Some(dialog_type);
        self
    }

    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }
}

/// Options accepted by `confirm`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub dialog_type: Option<DialogType>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl ConfirmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, dialog_type: DialogType) -> Self {
        self.dialog_type = Some(dialog_type);
        self
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }
}

/// Options accepted by `prompt`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOptions {
    pub title: Option<String>,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    /// Render the field content as bullets
    pub masked: bool,
}

impl PromptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}

/// A fully-resolved dialog description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    pub kind: DialogKind,
    pub message: String,
    pub title: String,
    pub dialog_type: DialogType,
    pub buttons: ButtonLabels,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub masked: bool,
}

/// Empty strings count as missing, matching how callers pass blank options
fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

impl DialogRequest {
    pub fn alert(message: impl Into<String>, options: AlertOptions) -> Self {
        let dialog_type = options.dialog_type.unwrap_or(DialogType::Info);
        Self {
            kind: DialogKind::Alert,
            message: message.into(),
            title: or_default(options.title, dialog_type.default_title()),
            dialog_type,
            buttons: ButtonLabels {
                confirm: or_default(options.button_text, "OK"),
                cancel: None,
            },
            default_value: None,
            placeholder: None,
            masked: false,
        }
    }

    pub fn confirm(message: impl Into<String>, options: ConfirmOptions) -> Self {
        Self {
            kind: DialogKind::Confirm,
            message: message.into(),
            title: or_default(options.title, "Confirm"),
            dialog_type: options.dialog_type.unwrap_or(DialogType::Confirm),
            buttons: ButtonLabels {
                confirm: or_default(options.confirm_text, "Confirm"),
                cancel: Some(or_default(options.cancel_text, "Cancel")),
            },
            default_value: None,
            placeholder: None,
            masked: false,
        }
    }

    pub fn prompt(message: impl Into<String>, options: PromptOptions) -> Self {
        Self {
            kind: DialogKind::Prompt,
            message: message.into(),
            title: or_default(options.title, "Input Required"),
            dialog_type: DialogType::Info,
            buttons: ButtonLabels {
                confirm: or_default(options.confirm_text, "OK"),
                cancel: Some(or_default(options.cancel_text, "Cancel")),
            },
            default_value: Some(options.default_value.unwrap_or_default()),
            placeholder: Some(options.placeholder.unwrap_or_default()),
            masked: options.masked,
        }
    }

    /// Whether the confirm button should carry danger styling
    pub fn is_destructive(&self) -> bool {
        self.kind == DialogKind::Confirm && self.dialog_type == DialogType::Error
    }
}

/// Terminal outcome of a dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "lowercase")]
pub enum DialogOutcome {
    /// Alert dismissed by any path
    Acknowledged,
    /// Confirm answered
    Confirmed(bool),
    /// Prompt submitted (`Some`) or cancelled (`None`)
    Submitted(Option<String>),
}

impl DialogOutcome {
    pub fn kind(&self) -> DialogKind {
        match self {
            DialogOutcome::Acknowledged => DialogKind::Alert,
            DialogOutcome::Confirmed(_) => DialogKind::Confirm,
            DialogOutcome::Submitted(_) => DialogKind::Prompt,
        }
    }

    /// Whether the user took the positive path
    pub fn is_affirmative(&self) -> bool {
        match self {
            DialogOutcome::Acknowledged => true,
            DialogOutcome::Confirmed(ok) => *ok,
            DialogOutcome::Submitted(value) => value.is_some(),
        }
    }
}
