//! Overlay layer that puts a modal host on screen
//!
//! The layer owns the host, draws the backdrop and every mounted dialog
//! bottom-up, and forwards input to the host.

use super::view::render_dialog;
use crate::modal::ModalHost;
use crate::tui::{components::Component, styles::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Clear},
};

/// Rendering switches for the overlay layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerOptions {
    /// Dim everything behind the dialogs
    pub dim_backdrop: bool,
    /// Show a key-hint line under the buttons
    pub key_hints: bool,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            dim_backdrop: true,
            key_hints: true,
        }
    }
}

/// Screen layer presenting the dialogs of one host
pub struct ModalLayer {
    host: ModalHost,
    options: LayerOptions,
    size: Rect,
}

impl ModalLayer {
    pub fn new(host: ModalHost, options: LayerOptions) -> Self {
        Self {
            host,
            options,
            size: Rect::default(),
        }
    }

    pub fn host(&self) -> &ModalHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut ModalHost {
        &mut self.host
    }

    pub fn options(&self) -> LayerOptions {
        self.options
    }

    fn render_backdrop(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);
        if self.options.dim_backdrop {
            frame.render_widget(Block::default().style(theme.backdrop_style()), area);
        }
    }
}

#[async_trait]
impl Component for ModalLayer {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        self.host.handle_key(event);
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.host.handle_mouse(event);
        Ok(())
    }

    async fn tick(&mut self) -> Result<()> {
        self.host.mount_pending();
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.size = area;
        if self.host.is_empty() {
            return;
        }

        self.render_backdrop(frame, area, theme);
        let key_hints = self.options.key_hints;
        for dialog in self.host.dialogs_mut() {
            render_dialog(dialog, frame, area, theme, key_hints);
        }
    }

    fn size(&self) -> Rect {
        self.size
    }

    fn set_size(&mut self, size: Rect) {
        self.size = size;
    }

    fn is_visible(&self) -> bool {
        !self.host.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{AlertOptions, Modal};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    #[tokio::test]
    async fn test_layer_renders_and_resolves() {
        let (modal, host) = Modal::new();
        let mut layer = ModalLayer::new(host, LayerOptions::default());
        assert!(!layer.is_visible());

        let pending = modal.open_alert("Record approved", AlertOptions::new());
        layer.tick().await.unwrap();
        assert!(layer.is_visible());

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let theme = Theme::dark();
        terminal
            .draw(|frame| {
                let area = frame.size();
                layer.render(frame, area, &theme)
            })
            .unwrap();
        assert_eq!(layer.size(), Rect::new(0, 0, 60, 16));
        assert!(layer.host().topmost().unwrap().hit_regions().is_some());

        layer
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .unwrap();
        assert!(!layer.is_visible());
        assert_eq!(pending.await, Ok(()));
    }
}
