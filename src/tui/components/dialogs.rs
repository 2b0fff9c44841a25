//! Terminal rendering of modal dialogs
//!
//! Presents the dialogs mounted on a `ModalHost`: pane geometry, widget
//! drawing, and the overlay layer that ties them to the screen.

pub mod layer;
pub mod layout;
pub mod view;

pub use layer::{LayerOptions, ModalLayer};
pub use layout::DialogLayout;
pub use view::render_dialog;
