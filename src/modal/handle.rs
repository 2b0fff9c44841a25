//! The `Modal` handle callers await on
//!
//! A handle is cheap to clone and bound to exactly one `ModalHost`. Each
//! call ships a request plus a single-use resolver to the host and returns
//! a `PendingDialog` that completes when the user answers.

use super::errors::{DialogResult, ModalError};
use super::host::{HostCommand, ModalHost};
use super::types::{
    AlertOptions, ConfirmOptions, DialogKind, DialogOutcome, DialogRequest, DialogType, PromptOptions,
};
use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// Typed view of a dialog outcome
pub trait FromOutcome: Sized {
    fn from_outcome(outcome: DialogOutcome) -> DialogResult<Self>;
}

fn mismatch(expected: DialogKind, outcome: &DialogOutcome) -> ModalError {
    ModalError::OutcomeMismatch {
        expected,
        actual: outcome.kind(),
    }
}

impl FromOutcome for () {
    fn from_outcome(outcome: DialogOutcome) -> DialogResult<Self> {
        match outcome {
            DialogOutcome::Acknowledged => Ok(()),
            other => Err(mismatch(DialogKind::Alert, &other)),
        }
    }
}

impl FromOutcome for bool {
    fn from_outcome(outcome: DialogOutcome) -> DialogResult<Self> {
        match outcome {
            DialogOutcome::Confirmed(value) => Ok(value),
            other => Err(mismatch(DialogKind::Confirm, &other)),
        }
    }
}

impl FromOutcome for Option<String> {
    fn from_outcome(outcome: DialogOutcome) -> DialogResult<Self> {
        match outcome {
            DialogOutcome::Submitted(value) => Ok(value),
            other => Err(mismatch(DialogKind::Prompt, &other)),
        }
    }
}

/// Untyped view; accepts every kind
impl FromOutcome for DialogOutcome {
    fn from_outcome(outcome: DialogOutcome) -> DialogResult<Self> {
        Ok(outcome)
    }
}

/// A dialog that has been handed to the host and awaits its resolution
#[must_use = "a pending dialog does nothing unless awaited"]
pub struct PendingDialog<T> {
    receiver: oneshot::Receiver<DialogOutcome>,
    _result: PhantomData<fn() -> T>,
}

impl<T: FromOutcome> Future for PendingDialog<T> {
    type Output = DialogResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(T::from_outcome(outcome)),
            Poll::Ready(Err(_)) => Poll::Ready(Err(ModalError::HostClosed)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Async dialog capabilities, one implementation per surface
#[async_trait]
pub trait ModalService: Send + Sync {
    async fn alert(&self, message: &str, options: AlertOptions) -> DialogResult<()>;

    async fn confirm(&self, message: &str, options: ConfirmOptions) -> DialogResult<bool>;

    async fn prompt(&self, message: &str, options: PromptOptions) -> DialogResult<Option<String>>;

    async fn success(&self, message: &str, title: Option<&str>) -> DialogResult<()> {
        self.alert(message, shorthand(DialogType::Success, title, "Success")).await
    }

    async fn error(&self, message: &str, title: Option<&str>) -> DialogResult<()> {
        self.alert(message, shorthand(DialogType::Error, title, "Error")).await
    }

    async fn warning(&self, message: &str, title: Option<&str>) -> DialogResult<()> {
        self.alert(message, shorthand(DialogType::Warning, title, "Warning")).await
    }

    async fn info(&self, message: &str, title: Option<&str>) -> DialogResult<()> {
        self.alert(message, shorthand(DialogType::Info, title, "Information")).await
    }
}

fn shorthand(dialog_type: DialogType, title: Option<&str>, default_title: &str) -> AlertOptions {
    AlertOptions::new()
        .with_type(dialog_type)
        .with_title(title.unwrap_or(default_title))
}

/// Handle for opening dialogs on a host
#[derive(Debug, Clone)]
pub struct Modal {
    sender: mpsc::UnboundedSender<HostCommand>,
}

impl Modal {
    /// Create a handle together with the host that displays its dialogs
    pub fn new() -> (Self, ModalHost) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, ModalHost::new(receiver))
    }

    /// Hand a request to the host. The request is queued synchronously;
    /// awaiting the returned value waits for the user.
    pub fn open<T: FromOutcome>(&self, request: DialogRequest) -> PendingDialog<T> {
        let (resolver, receiver) = oneshot::channel();
        debug!(kind = %request.kind, title = %request.title, "queueing dialog");
        // A failed send drops the resolver, which the pending side reports
        // as HostClosed.
        let _ = self.sender.send(HostCommand { request, resolver });
        PendingDialog {
            receiver,
            _result: PhantomData,
        }
    }

    pub fn open_alert(&self, message: impl Into<String>, options: AlertOptions) -> PendingDialog<()> {
        self.open(DialogRequest::alert(message, options))
    }

    pub fn open_confirm(&self, message: impl Into<String>, options: ConfirmOptions) -> PendingDialog<bool> {
        self.open(DialogRequest::confirm(message, options))
    }

    pub fn open_prompt(
        &self,
        message: impl Into<String>,
        options: PromptOptions,
    ) -> PendingDialog<Option<String>> {
        self.open(DialogRequest::prompt(message, options))
    }

    /// Whether the host is still alive
    pub fn is_connected(&self) -> bool {
        !self.sender.is_closed()
    }
}

#[async_trait]
impl ModalService for Modal {
    async fn alert(&self, message: &str, options: AlertOptions) -> DialogResult<()> {
        self.open_alert(message, options).await
    }

    async fn confirm(&self, message: &str, options: ConfirmOptions) -> DialogResult<bool> {
        self.open_confirm(message, options).await
    }

    async fn prompt(&self, message: &str, options: PromptOptions) -> DialogResult<Option<String>> {
        self.open_prompt(message, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dropped_host_reports_host_closed() {
        let (modal, host) = Modal::new();
        drop(host);
        assert!(!modal.is_connected());
        let result = modal.confirm("Delete user?", ConfirmOptions::new()).await;
        assert_eq!(result, Err(ModalError::HostClosed));
    }

    #[tokio::test]
    async fn test_host_dropped_while_pending() {
        let (modal, mut host) = Modal::new();
        let pending = modal.open_prompt("Name?", PromptOptions::new());
        assert_eq!(host.mount_pending(), 1);
        drop(host);
        assert_eq!(pending.await, Err(ModalError::HostClosed));
    }

    #[test]
    fn test_outcome_conversion_mismatch() {
        let err = bool::from_outcome(DialogOutcome::Acknowledged).unwrap_err();
        assert_eq!(
            err,
            ModalError::OutcomeMismatch {
                expected: DialogKind::Confirm,
                actual: DialogKind::Alert
            }
        );
        assert_eq!(<Option<String>>::from_outcome(DialogOutcome::Submitted(None)), Ok(None));
    }

    #[test]
    fn test_untyped_outcome_accepts_every_kind() {
        let outcomes = [
            DialogOutcome::Acknowledged,
            DialogOutcome::Confirmed(false),
            DialogOutcome::Submitted(Some("48".into())),
        ];
        for outcome in outcomes {
            assert_eq!(DialogOutcome::from_outcome(outcome.clone()), Ok(outcome));
        }
    }
}
