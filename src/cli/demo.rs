use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::modal::{ConfirmOptions, DialogResult, DialogType, ModalService, PromptOptions};

/// Run a scripted dialog flow
#[derive(Args, Debug, Clone)]
pub struct DemoCommand {
    #[command(subcommand)]
    pub flow: DemoFlow,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum DemoFlow {
    /// Ask for a ban duration and reason, confirm, then report the result
    BanUser,
}

/// How a ban flow ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BanOutcome {
    Banned { hours: u32, reason: String },
    InvalidDuration,
    Aborted,
}

impl BanOutcome {
    pub fn is_banned(&self) -> bool {
        matches!(self, BanOutcome::Banned { .. })
    }
}

/// Leading-digits integer parse with an optional `+`; "48h" reads as 48.
/// Values past `u32::MAX` saturate.
fn parse_hours(input: &str) -> Option<u32> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: Vec<u32> = unsigned.chars().map_while(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return None;
    }
    let hours = digits
        .into_iter()
        .fold(0u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
    (hours > 0).then_some(hours)
}

pub async fn ban_user(modal: &dyn ModalService) -> DialogResult<BanOutcome> {
    let hours = modal
        .prompt(
            "Enter ban duration in hours (e.g., 24 for 1 day):",
            PromptOptions::new().with_default_value("24"),
        )
        .await?;
    let Some(hours) = hours.filter(|h| !h.is_empty()) else {
        debug!("Ban duration prompt cancelled");
        return Ok(BanOutcome::Aborted);
    };

    let Some(hours) = parse_hours(&hours) else {
        modal.error("Invalid duration", None).await?;
        return Ok(BanOutcome::InvalidDuration);
    };

    let reason = modal
        .prompt(
            "Enter reason for ban:",
            PromptOptions::new().with_placeholder("Violation of terms..."),
        )
        .await?;
    let Some(reason) = reason.filter(|r| !r.is_empty()) else {
        debug!("Ban reason prompt cancelled");
        return Ok(BanOutcome::Aborted);
    };

    let confirmed = modal
        .confirm(
            &format!("Ban this user for {} hours?\nReason: {}", hours, reason),
            ConfirmOptions::new()
                .with_type(DialogType::Error)
                .with_title("Ban User")
                .with_confirm_text("Ban User"),
        )
        .await?;
    if !confirmed {
        return Ok(BanOutcome::Aborted);
    }

    info!(hours, "User banned");
    modal
        .success(&format!("User banned for {} hours", hours), None)
        .await?;
    Ok(BanOutcome::Banned { hours, reason })
}
