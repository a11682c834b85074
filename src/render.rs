use crate::constants::MIN_SURFACE_PX;
use portfolio_core::geometry::icosahedron;
use portfolio_core::{AmbientScene, BackdropError, FrameError, FrameSnapshot, SceneBackend};
use web_sys as web;

mod helpers;
mod particles;
mod solids;

use particles::{create_particle_resources, ParticleResources};
use solids::{create_solid_resources, write_instances, SolidResources};

pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

// Each particle is two triangles expanded in the vertex shader
const BILLBOARD_VERTICES: u32 = 6;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    particle_model: [[f32; 4]; 4],
    fog: [f32; 4],
    solid: [f32; 4],
    particle: [f32; 4],
}

impl SceneUniforms {
    fn from_snapshot(frame: &FrameSnapshot) -> Self {
        let m = &frame.materials;
        Self {
            projection: frame.projection.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            particle_model: frame.particle_model.to_cols_array_2d(),
            fog: frame.fog.color.extend(frame.fog.density).to_array(),
            solid: m.solid_color.extend(m.solid_opacity).to_array(),
            particle: [m.particle_size, m.particle_opacity, frame.scene_time, 0.0],
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    particle_pipeline: wgpu::RenderPipeline,
    solid_pipeline: wgpu::RenderPipeline,
    particles: ParticleResources,
    solids: SolidResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Create the surface on `canvas` and upload the scene's static geometry.
    pub async fn new(canvas: web::HtmlCanvasElement, scene: &AmbientScene) -> anyhow::Result<Self> {
        let width = canvas.width().max(MIN_SURFACE_PX);
        let height = canvas.height().max(MIN_SURFACE_PX);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| BackdropError::SurfaceUnavailable(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| BackdropError::SurfaceUnavailable("no WebGPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("backdrop_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop_shader"),
            source: wgpu::ShaderSource::Wgsl(BACKDROP_WGSL.into()),
        });
        let uniform_buffer = helpers::create_uniform_buffer(
            &device,
            "scene_uniforms",
            std::mem::size_of::<SceneUniforms>() as u64,
        );
        let bgl = helpers::uniform_layout(&device, "scene_bgl");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let particle_pipeline = helpers::make_scene_pipeline(
            &device,
            "particle_pipeline",
            &pl,
            &shader,
            "vs_particle",
            &[particles::instance_layout()],
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        let solid_pipeline = helpers::make_scene_pipeline(
            &device,
            "solid_pipeline",
            &pl,
            &shader,
            "vs_solid",
            &[solids::vertex_layout(), solids::instance_layout()],
            wgpu::PrimitiveTopology::LineList,
            format,
        );

        let particles = create_particle_resources(&device, &scene.particles);
        let solids = create_solid_resources(&device, &icosahedron(), scene.solids.len());

        let fog = scene.fog().color;
        log::info!(
            "[gpu] surface {}x{} format={:?} particles={}",
            width,
            height,
            format,
            particles.count
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            uniform_buffer,
            bind_group,
            particle_pipeline,
            solid_pipeline,
            particles,
            solids,
            width,
            height,
            clear_color: wgpu::Color {
                r: fog.x as f64,
                g: fog.y as f64,
                b: fog.z as f64,
                a: 1.0,
            },
        })
    }

    fn configure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }
}

impl SceneBackend for GpuState {
    fn resize(&mut self, width: u32, height: u32) {
        if width < MIN_SURFACE_PX || height < MIN_SURFACE_PX {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.configure();
        }
    }

    fn draw(&mut self, frame: &FrameSnapshot) -> Result<(), FrameError> {
        let output = self.surface.get_current_texture().map_err(|e| match e {
            wgpu::SurfaceError::Lost => FrameError::Lost,
            wgpu::SurfaceError::Outdated => FrameError::Outdated,
            wgpu::SurfaceError::Timeout => FrameError::Timeout,
            wgpu::SurfaceError::OutOfMemory => FrameError::OutOfMemory,
            other => FrameError::Other(format!("{:?}", other)),
        })?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = SceneUniforms::from_snapshot(frame);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        let solid_count = write_instances(&self.queue, &self.solids, &frame.solid_models);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("backdrop_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            if self.particles.count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_vertex_buffer(0, self.particles.instances.slice(..));
                rpass.draw(0..BILLBOARD_VERTICES, 0..self.particles.count);
            }

            if solid_count > 0 {
                rpass.set_pipeline(&self.solid_pipeline);
                rpass.set_vertex_buffer(0, self.solids.vertices.slice(..));
                rpass.set_vertex_buffer(1, self.solids.instances.slice(..));
                rpass.set_index_buffer(self.solids.indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.solids.index_count, 0, 0..solid_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    fn recover(&mut self) {
        log::warn!("[gpu] surface lost or outdated; reconfiguring");
        self.configure();
    }

    fn release(&mut self) {
        self.particles.instances.destroy();
        self.solids.vertices.destroy();
        self.solids.indices.destroy();
        self.solids.instances.destroy();
        self.uniform_buffer.destroy();
        self.device.destroy();
        log::info!("[gpu] resources released");
    }
}
