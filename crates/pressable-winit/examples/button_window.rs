//! Opens a window with one button in the middle and logs its transitions.
//!
//! Run with `RUST_LOG=trace` to also see every pointer sample.

use pressable_core::{Color, Rect, logging, profiling};
use pressable_ui::{ButtonConfig, ButtonHandler, ButtonStyle, Painter};
use pressable_winit::WinitButton;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Default)]
struct ClickCounter {
    clicks: u32,
}

impl ButtonHandler for ClickCounter {
    fn released_inside(&mut self) {
        self.clicks += 1;
        tracing::info!(clicks = self.clicks, "clicked");
    }

    fn event_register(&mut self) {
        tracing::info!("listening for pointer events");
    }
}

/// Stands in for a renderer: logs when the fill colour changes.
#[derive(Default)]
struct LogPainter {
    last: Option<Color>,
}

impl Painter for LogPainter {
    fn fill_rect(&mut self, rect: Rect<f32>, color: Color) {
        if self.last != Some(color) {
            tracing::info!(?rect, ?color, "fill");
            self.last = Some(color);
        }
    }
}

struct DemoApp {
    window: Option<Window>,
    button: WinitButton<ClickCounter>,
    painter: LogPainter,
    style: ButtonStyle,
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = event_loop
            .create_window(Window::default_attributes().with_title("pressable"))
            .expect("Failed to create window");

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        self.button
            .move_center_to((size.width / 2.0) as i32, (size.height / 2.0) as i32);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                profiling::new_frame();
                for event in self.button.update().events() {
                    tracing::debug!(%event, "button");
                }
                self.button.draw(&mut self.painter, &self.style);
            }
            other => {
                if self
                    .button
                    .handle_window_event(&other, window.scale_factor())
                    .is_handled()
                {
                    window.request_redraw();
                }
            }
        }
    }
}

fn main() {
    logging::init();
    profiling::set_enabled(true);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = DemoApp {
        window: None,
        button: WinitButton::with_config(
            Rect::new(0.0, 0.0, 160.0, 48.0),
            ClickCounter::default(),
            ButtonConfig::default().use_handlers(true).register_events(true),
        ),
        painter: LogPainter::default(),
        style: ButtonStyle::default(),
    };

    event_loop.run_app(&mut app).expect("Event loop failed");
}
