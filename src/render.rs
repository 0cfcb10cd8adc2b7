use crate::camera::CameraRig;
use crate::constants::*;
use crate::scene::MarkerSet;
use glam::Vec3;
use rand::prelude::*;
use web_sys as web;
use wgpu::util::DeviceExt;

// Shape ids switched on in the fragment shader.
const SHAPE_DISC: f32 = 0.0;
const SHAPE_RECT: f32 = 1.0;
const SHAPE_RING: f32 = 2.0;
const SHAPE_CLOUD: f32 = 3.0;

const INSTANCE_CAPACITY: usize = 128;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    pos: [f32; 3],
    shape: f32,
    color: [f32; 4],
    extent: [f32; 2],
}

struct Cloud {
    base: Vec3,
    extent: [f32; 2],
    phase: f32,
}

/// WebGPU renderer: every drawable (timeline bar, stems, halo rings, marker
/// bodies, clouds) is an instanced quad whose silhouette is cut out in the
/// fragment shader by shape id.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
    clouds: Vec<Cloud>,
    time_sec: f32,
}

const SHADER_SRC: &str = r#"
struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) local: vec2<f32>,
  @location(2) shape: f32,
};
struct Uniforms { view_proj: mat4x4<f32> };
@group(0) @binding(0) var<uniform> u: Uniforms;

@vertex
fn vs_main(
  @location(0) v_pos: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_shape: f32,
  @location(3) i_color: vec4<f32>,
  @location(4) i_extent: vec2<f32>,
) -> VsOut {
  let world = vec4<f32>(i_pos, 1.0) + vec4<f32>(v_pos * i_extent * 2.0, 0.0, 0.0);
  var out: VsOut;
  out.pos = u.view_proj * world;
  out.color = i_color;
  out.local = v_pos; // unscaled local in [-0.5, 0.5] for shape masks
  out.shape = i_shape;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  let r = length(inf.local);
  var mask = 1.0;
  if (inf.shape < 0.5) {
    // disc body
    mask = 1.0 - smoothstep(0.48, 0.5, r);
  } else if (inf.shape < 1.5) {
    // solid rect (stem, timeline bar)
    mask = 1.0;
  } else if (inf.shape < 2.5) {
    // halo ring: thin annulus near the quad edge
    mask = smoothstep(0.38, 0.43, r) * (1.0 - smoothstep(0.47, 0.52, r));
  } else {
    // cloud: soft radial falloff
    mask = clamp(1.0 - 2.0 * r, 0.0, 1.0);
  }
  return vec4<f32>(inf.color.rgb, mask * inf.color.a);
}
"#;

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * INSTANCE_CAPACITY) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 32,
                        shader_location: 4,
                    },
                ],
            },
        ];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            width,
            height,
            clouds: seed_clouds(),
            time_sec: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn build_instances(&self, markers: &MarkerSet) -> Vec<InstanceData> {
        let mut out = Vec::with_capacity(16 + self.clouds.len());

        // Clouds first so everything else composites over them.
        for cloud in &self.clouds {
            let drift = (self.time_sec * 0.1 + cloud.phase).sin() * 0.4;
            out.push(InstanceData {
                pos: [cloud.base.x + drift, cloud.base.y, cloud.base.z],
                shape: SHAPE_CLOUD,
                color: [1.0, 1.0, 1.0, 0.6],
                extent: cloud.extent,
            });
        }

        // Timeline bar, kept centered on the world origin.
        out.push(InstanceData {
            pos: [0.0, MARKER_Y, 0.0],
            shape: SHAPE_RECT,
            color: [0.74, 0.74, 0.74, 1.0],
            extent: [TIMELINE_LENGTH * 0.5, 0.06],
        });

        let hovered = markers.hovered();
        for record in markers.records() {
            // Connector stem rising from the marker.
            out.push(InstanceData {
                pos: [record.position, MARKER_Y + STEM_HEIGHT * 0.5, 0.0],
                shape: SHAPE_RECT,
                color: [0.565, 0.793, 0.976, 0.8],
                extent: [0.08, STEM_HEIGHT * 0.5],
            });
            // Halo ring.
            out.push(InstanceData {
                pos: [record.position, MARKER_Y, 0.0],
                shape: SHAPE_RING,
                color: [record.color[0], record.color[1], record.color[2], 0.7],
                extent: [RING_RADIUS, RING_RADIUS],
            });
            // Body disc, scaled and brightened on hover.
            let mut rgb = record.color;
            if hovered == Some(record.id) {
                for c in &mut rgb {
                    *c = (*c * HOVER_BRIGHTEN).min(1.0);
                }
            }
            let r = MARKER_RADIUS * record.scale;
            out.push(InstanceData {
                pos: [record.position, MARKER_Y, 0.0],
                shape: SHAPE_DISC,
                color: [rgb[0], rgb[1], rgb[2], 1.0],
                extent: [r, r],
            });
        }
        out.truncate(INSTANCE_CAPACITY);
        out
    }

    pub fn render(
        &mut self,
        camera: &CameraRig,
        markers: &MarkerSet,
        dt_sec: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_sec += dt_sec;
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera
                    .view_proj(self.width as f32, self.height as f32)
                    .to_cols_array_2d(),
            }),
        );
        let instance_data = self.build_instances(markers);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instance_data));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    // Light sky; fog and gradient are approximated by the clear.
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.91,
                        g: 0.95,
                        b: 0.99,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..(instance_data.len() as u32));
        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn seed_clouds() -> Vec<Cloud> {
    let mut rng = StdRng::seed_from_u64(CLOUD_SEED);
    (0..CLOUD_COUNT)
        .map(|i| {
            let s = rng.gen_range(10.0..25.0);
            Cloud {
                base: Vec3::new(
                    rng.gen_range(-100.0..100.0),
                    rng.gen_range(10.0..40.0),
                    rng.gen_range(-80.0..20.0),
                ),
                extent: [s, s * 0.6],
                phase: i as f32,
            }
        })
        .collect()
}
