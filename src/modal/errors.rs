//! Error types for the modal manager

use super::types::DialogKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("Modal host is gone; no surface can display the dialog")]
    HostClosed,

    #[error("Unknown dialog type: {0}")]
    InvalidDialogType(String),

    #[error("Dialog produced a {actual} outcome where a {expected} outcome was expected")]
    OutcomeMismatch {
        expected: DialogKind,
        actual: DialogKind,
    },
}

pub type DialogResult<T> = Result<T, ModalError>;
