// ABOUTME: Main application entry point.
// ABOUTME: Opens a window hosting one split panel and logs its resize notifications.

mod host;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use host::PanelHost;
use split_core::SplitConfig;
use split_layout::SplitPanel;

struct App {
    window: Option<Arc<Window>>,
    host: PanelHost,
}

impl App {
    fn new(config: SplitConfig) -> Self {
        let panel = SplitPanel::from_config(config)
            .on_resize_started(|_, size| tracing::info!("Resize started at {}", size))
            .on_change(|_, size| tracing::debug!("Pane size changed to {}", size))
            .on_resize_finished(|_, size| tracing::info!("Resize finished at {}", size));

        Self {
            window: None,
            host: PanelHost::new(panel),
        }
    }

    fn log_layout(&self) {
        let rects = self.host.pane_rects();
        tracing::info!(
            "Layout: pane size {:?}, first {:?}, divider {:?}, second {:?}",
            self.host.panel().pane_size(),
            rects.first,
            rects.resizer,
            rects.second
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("split-demo")
            .with_inner_size(LogicalSize::new(1200, 800));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let physical_size = window.inner_size();
        tracing::info!(
            "Window created: {}x{} physical pixels, scale factor: {}",
            physical_size.width,
            physical_size.height,
            window.scale_factor()
        );

        self.host
            .resize(physical_size.width as f64, physical_size.height as f64);
        self.log_layout();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                event_loop.exit();
            }
            event => {
                let resized = matches!(event, WindowEvent::Resized(_));
                if self.host.window_event(&event) && resized {
                    self.log_layout();
                }
                if let Some(window) = &self.window {
                    window.set_cursor(self.host.cursor_icon());
                }
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SplitConfig::load(Path::new(&path))?,
        None => SplitConfig::load_or_default(),
    };

    tracing::info!(
        "Starting split-demo (horizontal={}, primary={:?}, allow_resize={})",
        config.horizontal,
        config.primary,
        config.allow_resize
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
