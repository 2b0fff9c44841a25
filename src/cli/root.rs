use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing::{debug, error, info};

use super::demo::{self, DemoCommand, DemoFlow};
use super::dialog::{AlertArgs, ConfirmArgs, DialogCommand, PromptArgs, ShorthandArgs};
use super::output::{self, EXIT_ERROR, EXIT_NEGATIVE, EXIT_POSITIVE};
use crate::config::Config;
use crate::modal::{
    render_markup, DialogOutcome, DialogRequest, DialogResult, DialogType, Modal, ModalService,
};
use crate::tui::{self, Theme, ThemeName};

/// modalbox - awaitable alert, confirm and prompt dialogs for your terminal
#[derive(Parser, Debug)]
#[command(
    name = "modalbox",
    version,
    about = "Awaitable alert, confirm and prompt dialogs for your terminal",
    long_about = r#"modalbox shows a modal dialog on the terminal and reports the answer.
The dialog is drawn on stderr; the answer goes to stdout and the exit status.

Examples:
  modalbox confirm "Delete this user?" --type error   # exit 0 on yes, 1 on no
  name=$(modalbox prompt "Your name?" --default Bob)  # prints the value
  modalbox success "Saved"                            # typed alert
  modalbox markup alert "<b>hi</b>"                   # print escaped HTML"#
)]
pub struct Cli {
    /// Print results as JSON
    #[arg(short = 'j', long = "json", global = true)]
    pub json: bool,

    /// Color theme
    #[arg(long = "theme", global = true, value_enum)]
    pub theme: Option<ThemeName>,

    /// Do not capture mouse clicks
    #[arg(long = "no-mouse", global = true)]
    pub no_mouse: bool,

    /// Enable debug logging
    #[arg(short = 'D', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an alert with a single button
    Alert(AlertArgs),
    /// Ask a yes/no question; exits 1 when declined
    Confirm(ConfirmArgs),
    /// Ask for a line of text; exits 1 when cancelled
    Prompt(PromptArgs),
    /// Success alert
    Success(ShorthandArgs),
    /// Error alert
    Error(ShorthandArgs),
    /// Warning alert
    Warning(ShorthandArgs),
    /// Informational alert
    Info(ShorthandArgs),
    /// Print the HTML markup of a dialog instead of showing it
    Markup {
        #[command(subcommand)]
        dialog: DialogCommand,
    },
    /// Run a scripted dialog flow
    Demo(DemoCommand),
}

impl Cli {
    /// Run the selected command and return the process exit status
    pub async fn execute(self) -> Result<i32> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        let mut config = Config::init().await?;
        self.apply_overrides(&mut config);
        config.validate()?;
        debug!("Configuration initialized: {:?}", config);

        match self.command {
            Commands::Markup { dialog } => {
                println!("{}", render_markup(&dialog.request()));
                Ok(EXIT_POSITIVE)
            }
            Commands::Demo(DemoCommand { flow: DemoFlow::BanUser }) => run_ban_user(&config).await,
            Commands::Alert(args) => show(&config, args.request()).await,
            Commands::Confirm(args) => show(&config, args.request()).await,
            Commands::Prompt(args) => show(&config, args.request()).await,
            Commands::Success(args) => show_shorthand(&config, DialogType::Success, args).await,
            Commands::Error(args) => show_shorthand(&config, DialogType::Error, args).await,
            Commands::Warning(args) => show_shorthand(&config, DialogType::Warning, args).await,
            Commands::Info(args) => show_shorthand(&config, DialogType::Info, args).await,
        }
    }

    /// Command-line flags take precedence over file and environment values
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.no_mouse {
            config.mouse = false;
        }
        if self.json {
            config.json = true;
        }
    }
}

/// Turn the answer of a dialog session into output and an exit status
fn finish(config: &Config, result: DialogResult<DialogOutcome>) -> Result<i32> {
    match result {
        Ok(outcome) => {
            info!("Dialog finished: {:?}", outcome);
            output::write_outcome(&mut io::stdout().lock(), &outcome, config.json)?;
            Ok(output::exit_code(&outcome))
        }
        Err(e) => {
            error!("Dialog failed: {}", e);
            eprintln!("Error: {}", e);
            Ok(EXIT_ERROR)
        }
    }
}

async fn show(config: &Config, request: DialogRequest) -> Result<i32> {
    debug!("Showing {} dialog", request.kind);
    let result = tui::run(
        Theme::named(config.theme),
        config.app_config(),
        move |modal: Modal| async move { modal.open::<DialogOutcome>(request).await },
    )
    .await?;
    finish(config, result)
}

async fn show_shorthand(config: &Config, dialog_type: DialogType, args: ShorthandArgs) -> Result<i32> {
    debug!("Showing {} alert", dialog_type);
    let result = tui::run(
        Theme::named(config.theme),
        config.app_config(),
        move |modal: Modal| async move {
            let title = args.title.as_deref();
            let shown = match dialog_type {
                DialogType::Success => modal.success(&args.message, title).await,
                DialogType::Error => modal.error(&args.message, title).await,
                DialogType::Warning => modal.warning(&args.message, title).await,
                DialogType::Info | DialogType::Confirm => modal.info(&args.message, title).await,
            };
            shown.map(|()| DialogOutcome::Acknowledged)
        },
    )
    .await?;
    finish(config, result)
}

async fn run_ban_user(config: &Config) -> Result<i32> {
    let result = tui::run(
        Theme::named(config.theme),
        config.app_config(),
        |modal: Modal| async move { demo::ban_user(&modal).await },
    )
    .await?;

    match result {
        Ok(outcome) => {
            if config.json {
                output::write_json(&mut io::stdout().lock(), &outcome)?;
            }
            Ok(if outcome.is_banned() { EXIT_POSITIVE } else { EXIT_NEGATIVE })
        }
        Err(e) => {
            error!("Demo flow failed: {}", e);
            eprintln!("Error: {}", e);
            Ok(EXIT_ERROR)
        }
    }
}
