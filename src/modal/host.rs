//! Modal host: the overlay stack dialogs are mounted on
//!
//! The host plays the role of the document root. It receives requests from
//! `Modal` handles, mounts one `DialogInstance` per request and routes input
//! to the topmost one. A resolving event detaches the instance first and
//! fires its resolver second, inside the same dispatch.

use super::instance::{DialogInstance, Dispatch};
use super::types::{DialogId, DialogOutcome, DialogRequest};
use crossterm::event::{Event as TerminalEvent, KeyEvent, MouseEvent};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Request shipped from a handle to its host
#[derive(Debug)]
pub struct HostCommand {
    pub(crate) request: DialogRequest,
    pub(crate) resolver: oneshot::Sender<DialogOutcome>,
}

/// Owner of all mounted dialogs
#[derive(Debug)]
pub struct ModalHost {
    receiver: mpsc::UnboundedReceiver<HostCommand>,
    stack: Vec<DialogInstance>,
    next_id: u64,
}

impl ModalHost {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<HostCommand>) -> Self {
        Self {
            receiver,
            stack: Vec::new(),
            next_id: 1,
        }
    }

    fn mount(&mut self, command: HostCommand) -> DialogId {
        let id = DialogId(self.next_id);
        self.next_id += 1;

        if !self.stack.is_empty() {
            warn!(dialog = %id, open = self.stack.len(), "dialog opened while another is showing; stacking");
        }
        debug!(dialog = %id, kind = %command.request.kind, "mounting dialog");
        self.stack.push(DialogInstance::new(id, command.request, command.resolver));
        id
    }

    /// Mount every request queued so far without waiting. Returns how many
    /// dialogs were mounted.
    pub fn mount_pending(&mut self) -> usize {
        self.prune_abandoned();
        let mut mounted = 0;
        while let Ok(command) = self.receiver.try_recv() {
            self.mount(command);
            mounted += 1;
        }
        mounted
    }

    /// Wait for the next request and mount it. Returns `None` once every
    /// handle has been dropped.
    pub async fn next_request(&mut self) -> Option<DialogId> {
        let command = self.receiver.recv().await?;
        self.prune_abandoned();
        Some(self.mount(command))
    }

    /// Drop dialogs whose caller stopped waiting
    fn prune_abandoned(&mut self) {
        let before = self.stack.len();
        self.stack.retain(|dialog| !dialog.is_abandoned());
        let pruned = before - self.stack.len();
        if pruned > 0 {
            debug!(pruned, "removed dialogs nobody awaits");
        }
    }

    /// Route an event through `f` to the topmost dialog. Returns `true`
    /// when the event resolved it.
    fn dispatch(&mut self, f: impl FnOnce(&mut DialogInstance) -> Dispatch) -> bool {
        let Some(top) = self.stack.last_mut() else {
            return false;
        };

        match f(top) {
            Dispatch::Resolved(settlement) => {
                self.stack.pop();
                settlement.deliver();
                true
            }
            Dispatch::Consumed | Dispatch::Ignored => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.dispatch(|dialog| dialog.handle_key(key))
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        self.dispatch(|dialog| dialog.handle_mouse(mouse))
    }

    /// Feed a terminal event. Paste lands in a focused prompt field.
    pub fn handle_event(&mut self, event: &TerminalEvent) -> bool {
        match event {
            TerminalEvent::Key(key) => self.handle_key(*key),
            TerminalEvent::Mouse(mouse) => self.handle_mouse(*mouse),
            TerminalEvent::Paste(text) => {
                if let Some(field) = self.topmost_mut().and_then(|dialog| dialog.focused_input_mut()) {
                    field.insert_str(&super::escape::sanitize_line(text));
                }
                false
            }
            _ => false,
        }
    }

    pub fn topmost(&self) -> Option<&DialogInstance> {
        self.stack.last()
    }

    pub fn topmost_mut(&mut self) -> Option<&mut DialogInstance> {
        self.stack.last_mut()
    }

    /// Mounted dialogs, bottom first
    pub fn dialogs(&self) -> impl Iterator<Item = &DialogInstance> {
        self.stack.iter()
    }

    pub fn dialogs_mut(&mut self) -> impl Iterator<Item = &mut DialogInstance> {
        self.stack.iter_mut()
    }

    pub fn contains(&self, id: DialogId) -> bool {
        self.stack.iter().any(|dialog| dialog.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}
