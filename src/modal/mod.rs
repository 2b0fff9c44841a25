//! Modal manager: awaitable alert, confirm and prompt dialogs
//!
//! Callers hold a [`Modal`] handle and write straight-line code:
//!
//! ```no_run
//! # async fn example(modal: modalbox::modal::Modal) -> modalbox::modal::DialogResult<()> {
//! use modalbox::modal::{ConfirmOptions, DialogType, ModalService};
//!
//! let ok = modal
//!     .confirm("Delete user?", ConfirmOptions::new().with_type(DialogType::Warning))
//!     .await?;
//! if !ok {
//!     return Ok(());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The matching [`ModalHost`] is handed to a surface (the terminal layer in
//! `crate::tui`) which displays the dialogs and feeds them input.

pub mod errors;
pub mod escape;
pub mod handle;
pub mod host;
pub mod input;
pub mod instance;
pub mod markup;
pub mod types;

pub use errors::{DialogResult, ModalError};
pub use escape::escape_html;
pub use handle::{FromOutcome, Modal, ModalService, PendingDialog};
pub use host::ModalHost;
pub use input::InputField;
pub use instance::{DialogInstance, Dispatch, FocusTarget, HitRegions, InstanceState, Settlement, Transition};
pub use markup::render_markup;
pub use types::*;
