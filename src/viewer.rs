//! Standalone visualization window backed by winit.
//!
//! ```no_run
//! # use efield::Viewer;
//! Viewer::builder()
//!     .with_title("Dipole")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::EfieldError,
    field::{dipole, PointCharge},
    options::Options,
    FieldRenderEngine, InputEvent, MouseButton,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    charges: Vec<PointCharge>,
    options: Options,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with the reference dipole, default options and the
    /// title "Electric Field".
    fn new() -> Self {
        Self {
            charges: dipole(),
            options: Options::default(),
            title: "Electric Field".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace the charges (the reference dipole by default).
    #[must_use]
    pub fn with_charges(mut self, charges: Vec<PointCharge>) -> Self {
        self.charges = charges;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            charges: self.charges,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the charges and their field.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    charges: Vec<PointCharge>,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidOptions`] before opening anything if
    /// the options fail validation. If the window or the engine cannot be
    /// created the loop exits and that error ([`EfieldError::Viewer`],
    /// [`EfieldError::Gpu`] or [`EfieldError::Shader`]) is returned.
    /// Event loop failures are reported as [`EfieldError::Viewer`].
    pub fn run(self) -> Result<(), EfieldError> {
        self.options.validate()?;
        let event_loop =
            EventLoop::new().map_err(|e| EfieldError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp::new(self.charges, self.options, self.title);

        event_loop
            .run_app(&mut app)
            .map_err(|e| EfieldError::Viewer(e.to_string()))?;
        app.into_result()
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<FieldRenderEngine>,
    charges: Vec<PointCharge>,
    /// Handed to the engine once the window exists.
    options: Option<Options>,
    title: String,
    /// Why `resumed` gave up, returned from [`Viewer::run`].
    init_error: Option<EfieldError>,
}

/// Surface size for a window: the full inner size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn new(charges: Vec<PointCharge>, options: Options, title: String) -> Self {
        Self {
            window: None,
            engine: None,
            charges,
            options: Some(options),
            title,
            init_error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EfieldError) {
        log::error!("{error}");
        self.init_error = Some(error);
        event_loop.exit();
    }

    fn into_result(self) -> Result<(), EfieldError> {
        self.init_error.map_or(Ok(()), Err)
    }

    fn redraw(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };
        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let (vp_w, vp_h) = viewport_size(window.inner_size());
                engine.resize(vp_w, vp_h);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
        window.request_redraw();
    }

    fn forward_input(&mut self, event: InputEvent) {
        if let Some(engine) = &mut self.engine {
            if engine.handle_input(event) {
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                let msg = format!("failed to create window: {e}");
                let error = EfieldError::Viewer(msg);
                self.fail(event_loop, error);
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();
        let engine = match pollster::block_on(FieldRenderEngine::new(
            window.clone(),
            (vp_w, vp_h),
            self.charges.clone(),
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.forward_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.forward_input(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    if !engine.handle_key_press(&key_str) {
                        log::trace!("unbound key {key_str}");
                    }
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Polarity;

    #[test]
    fn builder_defaults_to_reference_dipole() {
        let viewer = Viewer::builder().build();
        assert_eq!(viewer.charges, dipole());
        assert_eq!(viewer.options, Options::default());
        assert_eq!(viewer.title, "Electric Field");
    }

    #[test]
    fn builder_overrides() {
        let mut options = Options::default();
        options.display.show_electric_field = false;
        let viewer = Viewer::builder()
            .with_charges(vec![PointCharge::new(1.0, 2.0, Polarity::Negative)])
            .with_options(options.clone())
            .with_title("Single")
            .build();
        assert_eq!(viewer.charges.len(), 1);
        assert_eq!(viewer.options, options);
        assert_eq!(viewer.title, "Single");
    }

    #[test]
    fn startup_failure_is_returned() {
        let app =
            ViewerApp::new(dipole(), Options::default(), "Failing".into());
        assert!(app.into_result().is_ok());

        let mut app =
            ViewerApp::new(dipole(), Options::default(), "Failing".into());
        app.init_error = Some(EfieldError::Shader("bad import".into()));
        assert!(matches!(
            app.into_result(),
            Err(EfieldError::Shader(msg)) if msg == "bad import"
        ));
    }

    #[test]
    fn viewport_never_zero() {
        let size = winit::dpi::PhysicalSize::new(0, 720);
        assert_eq!(viewport_size(size), (1, 720));
    }
}
