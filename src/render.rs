use crate::constants::{
    CAMERA_FOVY_RAD, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_OBJECT_COLORS, LIGHT_DIR,
    MODEL_BASE_SIZE,
};
use crate::core::{DecorObject, MeshData, ObjectRenderState, PerObject};
use glam::{EulerRot, Mat4, Quat, Vec3};
use web_sys as web;

mod helpers;
mod mesh;

use mesh::{GpuMesh, Vertex};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    light_dir: [f32; 4],
}

struct ObjectGpu {
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    objects: PerObject<ObjectGpu>,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
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
        // The canvas sits over the page, so it must composite with alpha
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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

        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("decor_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::DECOR_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("decor_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("decor_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline =
            helpers::make_mesh_pipeline(&device, &pl, &shader, Vertex::layout(), format);

        // Placeholders until the real models arrive
        let objects = PerObject::from_fn(|object| {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(object.name()),
                size: std::mem::size_of::<ObjectUniforms>() as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(object.name()),
                layout: &bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            let [r, g, b] = DEFAULT_OBJECT_COLORS[object.index()];
            ObjectGpu {
                mesh: GpuMesh::upload(&device, object.name(), &MeshData::placeholder(object)),
                uniform_buffer,
                bind_group,
                color: [r, g, b, 1.0],
            }
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            _depth_tex,
            depth_view,
            objects,
            width,
            height,
        })
    }

    /// Replace the mesh drawn for `object`.
    pub fn set_mesh(&mut self, object: DecorObject, mesh: &MeshData) {
        self.objects[object].mesh = GpuMesh::upload(&self.device, object.name(), mesh);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface at the current size (also after a lost surface).
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (self._depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    fn view_proj(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOVY_RAD, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    pub fn render(
        &mut self,
        states: &PerObject<ObjectRenderState>,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.view_proj().to_cols_array_2d();
        let [lx, ly, lz] = LIGHT_DIR;
        for (object, state) in states.iter() {
            if !state.visible {
                continue;
            }
            let model = model_matrix(state);
            let u = ObjectUniforms {
                view_proj,
                model: model.to_cols_array_2d(),
                color: self.objects[object].color,
                light_dir: [lx, ly, lz, 0.0],
            };
            self.queue
                .write_buffer(&self.objects[object].uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

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
                label: Some("decor_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            for (object, state) in states.iter() {
                if !state.visible {
                    continue;
                }
                let o = &self.objects[object];
                rpass.set_bind_group(0, &o.bind_group, &[]);
                rpass.set_vertex_buffer(0, o.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(o.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..o.mesh.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn model_matrix(state: &ObjectRenderState) -> Mat4 {
    let r = state.rotation;
    Mat4::from_scale_rotation_translation(
        Vec3::splat(state.scale * MODEL_BASE_SIZE),
        Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
        state.position,
    )
}
