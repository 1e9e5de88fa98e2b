use crate::core::{GpuInitError, RippleParams, Viewport};
use web_sys as web;

mod click_texture;
mod eggs;
mod helpers;

use click_texture::ClickTexture;
use eggs::{create_eggs_resources, EggsResources, EggsUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    eggs: EggsResources,
    clicks: ClickTexture,
    viewport: Viewport,
}

impl GpuState {
    /// Acquire a GPU context on `canvas` and build the eggs pipeline.
    ///
    /// Shader or pipeline validation failures are reported here once, so the
    /// frame loop never starts with a broken pipeline. They come back as
    /// [`GpuInitError::Pipeline`], apart from a missing GPU context.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        params: &RippleParams,
    ) -> Result<Self, GpuInitError> {
        let viewport = Viewport {
            width: canvas.width().max(1),
            height: canvas.height().max(1),
        };

        // Falls back to WebGL2 when navigator.gpu exists but yields no adapter
        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default())
                .await;
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GpuInitError::Unavailable(format!("create_surface: {}", e)))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| GpuInitError::Unavailable("no GPU adapter".into()))?;
        log::info!("[gpu] adapter: {:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 cannot satisfy the default WebGPU limits
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| GpuInitError::Unavailable(format!("request_device: {}", e)))?;
        device.on_uncaptured_error(Box::new(|e: wgpu::Error| {
            log::error!("[gpu] uncaptured error: {}", e);
        }));

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| GpuInitError::Unavailable("surface reports no formats".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: viewport.width,
            height: viewport.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let clicks = ClickTexture::new(&device, params.texture_width, params.texture_height);

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let eggs = create_eggs_resources(&device, format, &clicks);
        if let Some(err) = device.pop_error_scope().await {
            log::error!("[gpu] eggs shader failed to build: {}", err);
            return Err(GpuInitError::Pipeline(err.to_string()));
        }

        Ok(Self {
            surface,
            device,
            queue,
            config,
            eggs,
            clicks,
            viewport,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.viewport.width || height != self.viewport.height {
            self.viewport = Viewport { width, height };
            self.reconfigure();
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    pub fn reconfigure(&mut self) {
        self.config.width = self.viewport.width;
        self.config.height = self.viewport.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Queue new click data. Takes effect from the next submitted draw.
    pub fn upload_clicks(&self, bytes: &[u8]) {
        self.clicks.upload(&self.queue, bytes);
    }

    /// Draw one frame with `time_sec` as the shader's time uniform.
    pub fn render(&mut self, time_sec: f32) -> Result<(), wgpu::SurfaceError> {
        let u = EggsUniforms {
            time: time_sec,
            ratio: self.viewport.ratio(),
            resolution_scale: self.viewport.resolution_scale(),
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.eggs.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("eggs_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.eggs.pipeline);
            rpass.set_bind_group(0, &self.eggs.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
