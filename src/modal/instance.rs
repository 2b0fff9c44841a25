//! Live dialog instance and its resolution state machine
//!
//! An instance is `Open` until the first resolving transition, then
//! `Resolved` for good. The resolver lives in an `Option` and is taken by
//! that first transition, so a second transition has nothing to fire.

use super::input::InputField;
use super::types::{DialogId, DialogKind, DialogOutcome, DialogRequest};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::oneshot;
use tracing::{debug, trace};

/// Lifecycle state of a dialog instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceState {
    #[default]
    Open,
    Resolved,
}

/// User actions that end a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Confirm/OK button, or Enter where Enter means "yes"
    Confirm,
    /// Cancel button
    Cancel,
    /// Escape key
    Escape,
    /// Click outside the dialog pane
    Backdrop,
}

/// Focusable elements of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input,
    Cancel,
    Confirm,
}

/// Screen regions recorded by the last render, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitRegions {
    pub dialog: Rect,
    pub input: Option<Rect>,
    pub cancel: Option<Rect>,
    pub confirm: Rect,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// What an input event did to an instance
#[derive(Debug)]
pub enum Dispatch {
    /// Event not meant for this dialog
    Ignored,
    /// Event consumed without ending the dialog
    Consumed,
    /// Dialog ended; deliver once the instance is detached
    Resolved(Settlement),
}

/// Outcome paired with the resolver that must receive it
#[derive(Debug)]
pub struct Settlement {
    pub id: DialogId,
    pub outcome: DialogOutcome,
    resolver: oneshot::Sender<DialogOutcome>,
}

impl Settlement {
    /// Fire the resolver. A caller that stopped waiting is not an error.
    pub fn deliver(self) {
        debug!(dialog = %self.id, outcome = ?self.outcome, "dialog resolved");
        if self.resolver.send(self.outcome).is_err() {
            trace!(dialog = %self.id, "caller dropped before resolution");
        }
    }
}

/// A mounted dialog bound to one request and one pending result
#[derive(Debug)]
pub struct DialogInstance {
    id: DialogId,
    request: DialogRequest,
    state: InstanceState,
    focus: FocusTarget,
    input: Option<InputField>,
    hit_regions: Option<HitRegions>,
    resolver: Option<oneshot::Sender<DialogOutcome>>,
}

impl DialogInstance {
    pub fn new(id: DialogId, request: DialogRequest, resolver: oneshot::Sender<DialogOutcome>) -> Self {
        let (focus, input) = match request.kind {
            DialogKind::Alert | DialogKind::Confirm => (FocusTarget::Confirm, None),
            DialogKind::Prompt => {
                let mut field = InputField::new(request.default_value.clone().unwrap_or_default())
                    .with_placeholder(request.placeholder.clone().unwrap_or_default())
                    .with_masked(request.masked);
                field.select_all();
                (FocusTarget::Input, Some(field))
            }
        };

        Self {
            id,
            request,
            state: InstanceState::Open,
            focus,
            input,
            hit_regions: None,
            resolver: Some(resolver),
        }
    }

    pub fn id(&self) -> DialogId {
        self.id
    }

    pub fn request(&self) -> &DialogRequest {
        &self.request
    }

    pub fn kind(&self) -> DialogKind {
        self.request.kind
    }

    pub fn state(&self) -> InstanceState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == InstanceState::Open
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn input(&self) -> Option<&InputField> {
        self.input.as_ref()
    }

    /// The text field, if it currently holds focus
    pub fn focused_input_mut(&mut self) -> Option<&mut InputField> {
        match self.focus {
            FocusTarget::Input => self.input.as_mut(),
            _ => None,
        }
    }

    /// Open but nobody is waiting for the result any more
    pub fn is_abandoned(&self) -> bool {
        self.resolver.as_ref().map_or(true, |resolver| resolver.is_closed())
    }

    pub fn hit_regions(&self) -> Option<&HitRegions> {
        self.hit_regions.as_ref()
    }

    pub fn set_hit_regions(&mut self, regions: HitRegions) {
        self.hit_regions = Some(regions);
    }

    /// Focusable elements in tab order
    fn focus_order(&self) -> &'static [FocusTarget] {
        match self.request.kind {
            DialogKind::Alert => &[FocusTarget::Confirm],
            DialogKind::Confirm => &[FocusTarget::Cancel, FocusTarget::Confirm],
            DialogKind::Prompt => &[FocusTarget::Input, FocusTarget::Cancel, FocusTarget::Confirm],
        }
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + order.len() - 1) % order.len()];
    }

    /// Outcome a transition produces for this dialog kind
    fn outcome_for(&self, transition: Transition) -> DialogOutcome {
        let positive = transition == Transition::Confirm;
        match self.request.kind {
            DialogKind::Alert => DialogOutcome::Acknowledged,
            DialogKind::Confirm => DialogOutcome::Confirmed(positive),
            DialogKind::Prompt => DialogOutcome::Submitted(
                positive.then(|| self.input.as_ref().map(|f| f.text().to_string()).unwrap_or_default()),
            ),
        }
    }

    /// Apply a transition. Only the first one on an open instance yields a
    /// settlement; later ones return `None`.
    pub fn settle(&mut self, transition: Transition) -> Option<Settlement> {
        if self.state == InstanceState::Resolved {
            trace!(dialog = %self.id, ?transition, "transition on resolved dialog ignored");
            return None;
        }
        let resolver = self.resolver.take()?;
        let outcome = self.outcome_for(transition);
        self.state = InstanceState::Resolved;
        debug!(dialog = %self.id, ?transition, "dialog settling");
        Some(Settlement {
            id: self.id,
            outcome,
            resolver,
        })
    }

    fn dispatch_transition(&mut self, transition: Transition) -> Dispatch {
        match self.settle(transition) {
            Some(settlement) => Dispatch::Resolved(settlement),
            None => Dispatch::Ignored,
        }
    }

    /// Transition for activating the focused button
    fn activate_focused(&self) -> Transition {
        match self.focus {
            FocusTarget::Cancel => Transition::Cancel,
            FocusTarget::Confirm | FocusTarget::Input => Transition::Confirm,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Dispatch {
        if !self.is_open() || key.kind == KeyEventKind::Release {
            return Dispatch::Ignored;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return self.dispatch_transition(Transition::Escape),
            (KeyCode::Enter, _) => {
                // Prompts honour the focused element; elsewhere Enter is "yes"
                let transition = match self.request.kind {
                    DialogKind::Prompt => self.activate_focused(),
                    DialogKind::Alert | DialogKind::Confirm => Transition::Confirm,
                };
                return self.dispatch_transition(transition);
            }
            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                self.focus_next();
                return Dispatch::Consumed;
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.focus_previous();
                return Dispatch::Consumed;
            }
            _ => {}
        }

        if self.focus == FocusTarget::Input {
            if let Some(field) = self.input.as_mut() {
                return if field.handle_key(key) {
                    Dispatch::Consumed
                } else {
                    Dispatch::Ignored
                };
            }
        }

        match (key.code, key.modifiers) {
            (KeyCode::Left, _) => {
                self.focus_previous();
                Dispatch::Consumed
            }
            (KeyCode::Right, _) => {
                self.focus_next();
                Dispatch::Consumed
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => {
                let transition = self.activate_focused();
                self.dispatch_transition(transition)
            }
            _ => Dispatch::Ignored,
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> Dispatch {
        if !self.is_open() || event.kind != MouseEventKind::Down(MouseButton::Left) {
            return Dispatch::Ignored;
        }
        let Some(regions) = self.hit_regions else {
            return Dispatch::Ignored;
        };
        let (column, row) = (event.column, event.row);

        if contains(regions.confirm, column, row) {
            return self.dispatch_transition(Transition::Confirm);
        }
        if regions.cancel.is_some_and(|area| contains(area, column, row)) {
            return self.dispatch_transition(Transition::Cancel);
        }
        if regions.input.is_some_and(|area| contains(area, column, row)) {
            self.focus = FocusTarget::Input;
            return Dispatch::Consumed;
        }
        if contains(regions.dialog, column, row) {
            return Dispatch::Consumed;
        }
        self.dispatch_transition(Transition::Backdrop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::types::{AlertOptions, ConfirmOptions, DialogType, PromptOptions};
    use crossterm::event::KeyEventState;

    fn instance(request: DialogRequest) -> (DialogInstance, oneshot::Receiver<DialogOutcome>) {
        let (tx, rx) = oneshot::channel();
        (DialogInstance::new(DialogId(1), request, tx), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn regions() -> HitRegions {
        HitRegions {
            dialog: Rect::new(10, 5, 40, 10),
            input: Some(Rect::new(12, 9, 36, 1)),
            cancel: Some(Rect::new(20, 12, 10, 1)),
            confirm: Rect::new(32, 12, 10, 1),
        }
    }

    fn resolved(dispatch: Dispatch) -> DialogOutcome {
        match dispatch {
            Dispatch::Resolved(settlement) => settlement.outcome,
            other => panic!("expected resolution, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_focus_per_kind() {
        let (alert, _rx) = instance(DialogRequest::alert("a", AlertOptions::new()));
        let (confirm, _rx) = instance(DialogRequest::confirm("c", ConfirmOptions::new()));
        let (prompt, _rx) = instance(DialogRequest::prompt("p", PromptOptions::new().with_default_value("24")));
        assert_eq!(alert.focus(), FocusTarget::Confirm);
        assert_eq!(confirm.focus(), FocusTarget::Confirm);
        assert_eq!(prompt.focus(), FocusTarget::Input);

        let field = prompt.input().unwrap();
        assert_eq!(field.text(), "24");
        assert!(field.is_all_selected());
    }

    #[test]
    fn test_alert_dismissal_paths_are_equivalent() {
        for trigger in [Transition::Confirm, Transition::Escape, Transition::Backdrop] {
            let (mut alert, _rx) = instance(DialogRequest::alert("a", AlertOptions::new()));
            let settlement = alert.settle(trigger).expect("first transition settles");
            assert_eq!(settlement.outcome, DialogOutcome::Acknowledged);
        }
        let (mut alert, _rx) = instance(DialogRequest::alert("a", AlertOptions::new()));
        assert_eq!(resolved(alert.handle_key(key(KeyCode::Enter))), DialogOutcome::Acknowledged);
    }

    #[test]
    fn test_confirm_backdrop_is_always_false() {
        for dialog_type in DialogType::ALL {
            let (mut confirm, _rx) =
                instance(DialogRequest::confirm("c", ConfirmOptions::new().with_type(dialog_type)));
            confirm.set_hit_regions(regions());
            assert_eq!(resolved(confirm.handle_mouse(click(0, 0))), DialogOutcome::Confirmed(false));
        }
    }

    #[test]
    fn test_confirm_keyboard() {
        let (mut confirm, _rx) = instance(DialogRequest::confirm("c", ConfirmOptions::new()));
        assert_eq!(resolved(confirm.handle_key(key(KeyCode::Enter))), DialogOutcome::Confirmed(true));

        let (mut confirm, _rx) = instance(DialogRequest::confirm("c", ConfirmOptions::new()));
        assert_eq!(resolved(confirm.handle_key(key(KeyCode::Esc))), DialogOutcome::Confirmed(false));

        let (mut confirm, _rx) = instance(DialogRequest::confirm("c", ConfirmOptions::new()));
        confirm.handle_key(key(KeyCode::Left));
        assert_eq!(confirm.focus(), FocusTarget::Cancel);
        assert_eq!(resolved(confirm.handle_key(key(KeyCode::Char(' ')))), DialogOutcome::Confirmed(false));
    }

    #[test]
    fn test_prompt_escape_discards_typed_text() {
        let (mut prompt, _rx) = instance(DialogRequest::prompt("p", PromptOptions::new().with_default_value("24")));
        prompt.handle_key(key(KeyCode::Char('9')));
        assert_eq!(prompt.input().unwrap().text(), "9");
        assert_eq!(resolved(prompt.handle_key(key(KeyCode::Esc))), DialogOutcome::Submitted(None));
    }

    #[test]
    fn test_prompt_enter_on_cancel_button_cancels() {
        let (mut prompt, _rx) = instance(DialogRequest::prompt("p", PromptOptions::new()));
        prompt.handle_key(key(KeyCode::Tab));
        assert_eq!(prompt.focus(), FocusTarget::Cancel);
        assert_eq!(resolved(prompt.handle_key(key(KeyCode::Enter))), DialogOutcome::Submitted(None));
    }

    #[test]
    fn test_prompt_submits_empty_string() {
        let (mut prompt, _rx) = instance(DialogRequest::prompt("p", PromptOptions::new()));
        assert_eq!(
            resolved(prompt.handle_key(key(KeyCode::Enter))),
            DialogOutcome::Submitted(Some(String::new()))
        );
    }

    #[test]
    fn test_mouse_hits() {
        let (mut prompt, _rx) = instance(DialogRequest::prompt("p", PromptOptions::new().with_default_value("x")));
        prompt.set_hit_regions(regions());
        prompt.handle_key(key(KeyCode::Tab));
        assert!(matches!(prompt.handle_mouse(click(15, 6)), Dispatch::Consumed));
        assert!(matches!(prompt.handle_mouse(click(14, 9)), Dispatch::Consumed));
        assert_eq!(prompt.focus(), FocusTarget::Input);
        assert_eq!(resolved(prompt.handle_mouse(click(21, 12))), DialogOutcome::Submitted(None));
    }

    #[test]
    fn test_settles_only_once() {
        let (mut confirm, _rx) = instance(DialogRequest::confirm("c", ConfirmOptions::new()));
        assert!(confirm.settle(Transition::Confirm).is_some());
        assert_eq!(confirm.state(), InstanceState::Resolved);
        assert!(confirm.settle(Transition::Cancel).is_none());
        assert!(matches!(confirm.handle_key(key(KeyCode::Enter)), Dispatch::Ignored));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let (mut alert, _rx) = instance(DialogRequest::alert("a", AlertOptions::new()));
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(alert.handle_key(release), Dispatch::Ignored));
        assert!(alert.is_open());
    }

    #[tokio::test]
    async fn test_settlement_delivers_to_receiver() {
        let (mut confirm, rx) = instance(DialogRequest::confirm("c", ConfirmOptions::new()));
        confirm.settle(Transition::Cancel).unwrap().deliver();
        assert_eq!(rx.await.unwrap(), DialogOutcome::Confirmed(false));
    }
}
