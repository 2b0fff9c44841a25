use crate::modal::ModalHost;
use crate::tui::{
    components::{
        dialogs::{LayerOptions, ModalLayer},
        Component,
    },
    events::{Event, EventHandler},
    keys::KeyMap,
    styles::Theme,
    Frame,
};
use anyhow::{anyhow, Result};
use ratatui::{backend::Backend, layout::Rect, widgets::Block, Terminal};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Overlay rendering switches
    pub layer: LayerOptions,

    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layer: LayerOptions::default(),
            mouse_enabled: true,
        }
    }
}

/// Drives a modal layer on a terminal while a caller task runs
pub struct App {
    /// Current application dimensions
    pub size: Rect,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// Current theme for styling
    pub theme: Theme,

    /// Application configuration
    pub config: AppConfig,

    layer: ModalLayer,
}

impl App {
    /// Create a new application instance
    pub fn new(host: ModalHost, theme: Theme, config: AppConfig) -> Self {
        Self {
            size: Rect::default(),
            key_map: KeyMap::default(),
            theme,
            layer: ModalLayer::new(host, config.layer),
            config,
        }
    }

    /// Render every dialog the caller has opened until it finishes, then
    /// hand back its output.
    pub async fn run<B, T>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
        mut caller: JoinHandle<T>,
    ) -> Result<T>
    where
        B: Backend,
    {
        let mut requests_open = true;

        loop {
            self.layer.host_mut().mount_pending();
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                joined = &mut caller => {
                    info!("caller finished");
                    return joined.map_err(|e| anyhow!("Dialog flow failed: {}", e));
                }
                mounted = self.layer.host_mut().next_request(), if requests_open => {
                    if mounted.is_none() {
                        debug!("all modal handles dropped");
                        requests_open = false;
                    }
                }
                event = events.next() => {
                    let Some(event) = event else {
                        caller.abort();
                        return Err(anyhow!("Terminal input closed"));
                    };
                    if self.handle_event(event).await? {
                        caller.abort();
                        return Err(anyhow!("Interrupted"));
                    }
                }
            }
        }
    }

    /// Handle an application event. Returns `true` when the user asked to
    /// interrupt the whole flow.
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => {
                if self.key_map.should_interrupt(&key) {
                    info!("interrupt requested: {}", self.key_map.interrupt.description);
                    return Ok(true);
                }
                self.layer.handle_key_event(key).await?;
            }
            Event::Mouse(mouse) => {
                if self.config.mouse_enabled {
                    self.layer.handle_mouse_event(mouse).await?;
                }
            }
            Event::Paste(_) => {
                if let Some(terminal_event) = event.as_terminal_event() {
                    self.layer.host_mut().handle_event(&terminal_event);
                }
            }
            Event::Resize(width, height) => {
                self.size = Rect::new(0, 0, width, height);
                self.layer.set_size(self.size);
            }
            Event::Tick => {
                self.layer.tick().await?;
            }
        }
        Ok(false)
    }

    /// Render the application
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        self.size = area;
        frame.render_widget(Block::default().style(self.theme.base_style()), area);
        self.layer.render(frame, area, &self.theme);
    }

    pub fn host(&self) -> &ModalHost {
        self.layer.host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{ConfirmOptions, Modal};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[tokio::test]
    async fn test_interrupt_key_is_reported() {
        let (_modal, host) = Modal::new();
        let mut app = App::new(host, Theme::dark(), AppConfig::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_event(Event::Key(ctrl_c)).await.unwrap());
    }

    #[tokio::test]
    async fn test_events_reach_dialog() {
        let (modal, host) = Modal::new();
        let mut app = App::new(host, Theme::dark(), AppConfig::default());
        let pending = modal.open_confirm("Approve 3 records?", ConfirmOptions::new());

        app.handle_event(Event::Tick).await.unwrap();
        assert_eq!(app.host().len(), 1);

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.handle_event(Event::Key(enter)).await.unwrap());
        assert!(app.host().is_empty());
        assert_eq!(pending.await, Ok(true));
    }

    #[tokio::test]
    async fn test_render_draws_dialog_on_test_backend() {
        let (modal, host) = Modal::new();
        let mut app = App::new(host, Theme::light(), AppConfig::default());
        let _pending = modal.open_confirm("Approve 3 records?", ConfirmOptions::new());
        app.handle_event(Event::Tick).await.unwrap();

        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(70, 18)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert_eq!(app.size, Rect::new(0, 0, 70, 18));
        assert!(app.host().topmost().unwrap().hit_regions().is_some());
    }
}
