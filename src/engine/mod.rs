//! The field render engine: GPU state, scene, camera and input in one place.
//!
//! [`FieldRenderEngine::render`] is the per-frame callback. Everything the
//! user can do goes through [`FieldRenderEngine::execute`] as a
//! [`ViewCommand`], whether it came from a mouse gesture, a key press or
//! code.

/// The engine's interactive vocabulary.
pub mod command;

pub use command::ViewCommand;
use web_time::Duration;

use crate::camera::controller::CameraController;
use crate::error::EfieldError;
use crate::field::PointCharge;
use crate::gpu::lighting::Lighting;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::DepthTexture;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::{pipeline_util, DrawBindGroups, SceneRenderer};
use crate::scene::Scene;
use crate::util::frame_timing::FrameTiming;

/// How often the frame rate is logged.
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Renders a set of fixed point charges, the ground plane they sit on and
/// the electric field arrows sampled around them.
pub struct FieldRenderEngine {
    context: RenderContext,
    camera_controller: CameraController,
    lighting: Lighting,
    depth: DepthTexture,
    renderer: SceneRenderer,
    input: InputProcessor,
    options: Options,
    charges: Vec<PointCharge>,
    scene: Scene,
    /// FPS measurement.
    pub frame_timing: FrameTiming,
}

impl FieldRenderEngine {
    /// Create the engine for a window surface of `size` physical pixels.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidOptions`] if `options` fail
    /// validation, [`EfieldError::Gpu`] if no usable device or surface is
    /// found and [`EfieldError::Shader`] if a shader fails to compose.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        charges: Vec<PointCharge>,
        options: Options,
    ) -> Result<Self, EfieldError> {
        options.validate()?;
        let context = RenderContext::new(window, size).await?;
        let mut composer = ShaderComposer::new()?;

        let camera_controller =
            CameraController::new(&context, &options.camera);
        let lighting = Lighting::new(&context, &options.lighting);
        let depth = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );

        let scene = Scene::build(&charges, &options);
        let renderer = SceneRenderer::new(
            &context,
            &mut composer,
            &camera_controller.layout,
            &lighting.layout,
            &scene,
        )?;
        log::info!(
            "field engine ready: {} charges, {} arrows, {}x{}",
            charges.len(),
            scene.arrow_count,
            context.config.width,
            context.config.height
        );

        Ok(Self {
            context,
            camera_controller,
            lighting,
            depth,
            renderer,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            options,
            charges,
            scene,
            frame_timing: FrameTiming::new(),
        })
    }

    /// Render one frame to the surface and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next swapchain texture cannot
    /// be acquired. `Lost`/`Outdated` are fixed by calling
    /// [`resize`](Self::resize).
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera_controller.update_gpu(&self.context.queue);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Field Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(pipeline_util::clear_color(
                            self.options.colors.background,
                        )),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });
            self.renderer.draw(
                &mut rp,
                &DrawBindGroups {
                    camera: &self.camera_controller.bind_group,
                    lighting: &self.lighting.bind_group,
                },
                self.options.display.show_electric_field,
            );
        }
        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        if self.options.display.log_frame_rate {
            if let Some((fps, frames)) =
                self.frame_timing.take_report(FPS_REPORT_INTERVAL)
            {
                log::debug!("{fps:.1} fps ({frames} frames)");
            }
        }
        Ok(())
    }

    /// Resize the surface, depth buffer and camera projection. Zero sizes
    /// are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.camera_controller.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, width, height);
    }

    /// Apply a view command.
    pub fn execute(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::RotateCamera { delta } => {
                self.camera_controller.rotate(delta);
            }
            ViewCommand::PanCamera { delta } => {
                self.camera_controller.pan(delta);
            }
            ViewCommand::Zoom { delta } => self.camera_controller.zoom(delta),
            ViewCommand::ResetCamera => self.camera_controller.reset(),
            ViewCommand::ToggleElectricField => {
                let visible = self.options.display.toggle_electric_field();
                log::info!(
                    "electric field {}",
                    if visible { "shown" } else { "hidden" }
                );
            }
            ViewCommand::SetElectricFieldVisible(visible) => {
                self.options.display.show_electric_field = visible;
            }
        }
    }

    /// Feed a raw input event through the input processor. Returns `true`
    /// if it produced a command.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Execute the command bound to `key` (a winit `KeyCode` debug name
    /// such as `"KeyE"`). Returns `true` if the key was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options, rebuilding only what changed.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidOptions`] and keeps the current
    /// options if `options` fail validation.
    pub fn set_options(
        &mut self,
        options: Options,
    ) -> Result<(), EfieldError> {
        options.validate()?;

        if options.camera != self.options.camera {
            self.camera_controller.apply_options(&options.camera);
        }
        if options.lighting != self.options.lighting {
            self.lighting.update(&self.context.queue, &options.lighting);
        }
        if options.keybindings != self.options.keybindings {
            self.input.set_key_bindings(options.keybindings.clone());
        }
        let rebuild = options.field != self.options.field
            || options.geometry != self.options.geometry
            || options.colors != self.options.colors;

        self.options = options;
        if rebuild {
            self.rebuild_scene();
        }
        Ok(())
    }

    /// The charges being visualized.
    #[must_use]
    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    /// Whether field arrows are currently drawn.
    #[must_use]
    pub fn field_visible(&self) -> bool {
        self.options.display.show_electric_field
    }

    /// Number of arrows in the current field layer.
    #[must_use]
    pub fn arrow_count(&self) -> usize {
        self.scene.arrow_count
    }

    fn rebuild_scene(&mut self) {
        self.scene = Scene::build(&self.charges, &self.options);
        self.renderer.upload(&self.context, &self.scene);
        log::info!("scene rebuilt: {} arrows", self.scene.arrow_count);
    }
}
