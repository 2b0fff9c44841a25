//! modalbox: awaitable modal dialogs (alert, confirm, prompt) with a
//! terminal surface and an HTML markup renderer.

pub mod cli;
pub mod config;
pub mod modal;
pub mod tui;

pub use modal::{Modal, ModalHost, ModalService};
