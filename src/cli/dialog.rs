use clap::{Args, Subcommand};

use crate::modal::{
    AlertOptions, ConfirmOptions, DialogRequest, DialogType, PromptOptions,
};

/// Show an alert with a single button
#[derive(Args, Debug, Clone)]
pub struct AlertArgs {
    /// Message shown in the dialog body
    pub message: String,

    /// Dialog title (defaults per type)
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Visual type: info, success, error, warning, confirm
    #[arg(short = 'T', long = "type")]
    pub dialog_type: Option<DialogType>,

    /// Caption of the button
    #[arg(short = 'b', long = "button")]
    pub button: Option<String>,
}

impl AlertArgs {
    pub fn request(&self) -> DialogRequest {
        let mut options = AlertOptions::new();
        options.title = self.title.clone();
        options.dialog_type = self.dialog_type;
        options.button_text = self.button.clone();
        DialogRequest::alert(self.message.clone(), options)
    }
}

/// Ask a yes/no question
#[derive(Args, Debug, Clone)]
pub struct ConfirmArgs {
    /// Question shown in the dialog body
    pub message: String,

    /// Dialog title
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Visual type; `error` marks the action as destructive
    #[arg(short = 'T', long = "type")]
    pub dialog_type: Option<DialogType>,

    /// Caption of the confirm button
    #[arg(long = "confirm-text")]
    pub confirm_text: Option<String>,

    /// Caption of the cancel button
    #[arg(long = "cancel-text")]
    pub cancel_text: Option<String>,
}

impl ConfirmArgs {
    pub fn request(&self) -> DialogRequest {
        let options = ConfirmOptions {
            title: self.title.clone(),
            dialog_type: self.dialog_type,
            confirm_text: self.confirm_text.clone(),
            cancel_text: self.cancel_text.clone(),
        };
        DialogRequest::confirm(self.message.clone(), options)
    }
}

/// Ask for a line of text
#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    /// Question shown above the input field
    pub message: String,

    /// Dialog title
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Initial value of the field, selected on display
    #[arg(short = 'd', long = "default")]
    pub default_value: Option<String>,

    /// Hint shown while the field is empty
    #[arg(short = 'p', long = "placeholder")]
    pub placeholder: Option<String>,

    /// Caption of the confirm button
    #[arg(long = "confirm-text")]
    pub confirm_text: Option<String>,

    /// Caption of the cancel button
    #[arg(long = "cancel-text")]
    pub cancel_text: Option<String>,

    /// Hide the typed characters
    #[arg(short = 'm', long = "masked")]
    pub masked: bool,
}

impl PromptArgs {
    pub fn request(&self) -> DialogRequest {
        let options = PromptOptions {
            title: self.title.clone(),
            default_value: self.default_value.clone(),
            placeholder: self.placeholder.clone(),
            confirm_text: self.confirm_text.clone(),
            cancel_text: self.cancel_text.clone(),
            masked: self.masked,
        };
        DialogRequest::prompt(self.message.clone(), options)
    }
}

/// Typed alert shorthand (`success`, `error`, `warning`, `info`)
#[derive(Args, Debug, Clone)]
pub struct ShorthandArgs {
    /// Message shown in the dialog body
    pub message: String,

    /// Dialog title
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,
}

/// The three dialog kinds, as accepted by `markup`
#[derive(Subcommand, Debug, Clone)]
pub enum DialogCommand {
    /// Alert with a single button
    Alert(AlertArgs),
    /// Yes/no confirmation
    Confirm(ConfirmArgs),
    /// Single-line text input
    Prompt(PromptArgs),
}

impl DialogCommand {
    pub fn request(&self) -> DialogRequest {
        match self {
            DialogCommand::Alert(args) => args.request(),
            DialogCommand::Confirm(args) => args.request(),
            DialogCommand::Prompt(args) => args.request(),
        }
    }
}
