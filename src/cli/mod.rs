mod demo;
mod dialog;
mod output;
mod root;

pub use demo::{ban_user, BanOutcome};
pub use output::EXIT_ERROR;
pub use root::Cli;
