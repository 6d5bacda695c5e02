use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::common::{premul_alpha_blend, GeometryVertex};
use super::tessellate::tessellate;

/// Renders every command in a draw list as one triangle-list draw call.
///
/// Fans, lines and points are tessellated on the CPU into NDC triangles each
/// frame, uploaded into a growable vertex buffer, and drawn through a single
/// pass-through pipeline. The CPU copy is rebuilt every frame and never
/// outlives the call.
#[derive(Default)]
pub struct GeometryRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    /// Reused tessellation output.
    scratch: Vec<GeometryVertex>,
}

impl GeometryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `draw_list` into `target` in paint order.
    ///
    /// Issues no pass at all when nothing in the list produces triangles.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.scratch.clear();
        for item in draw_list.iter_in_paint_order() {
            tessellate(&item.cmd, ctx.viewport, &mut self.scratch);
        }

        if self.scratch.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_vertex_capacity(ctx, self.scratch.len());

        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue.write_buffer(vertex_vbo, 0, bytemuck::cast_slice(&self.scratch));

        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("polyfan geometry pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let used = (self.scratch.len() * std::mem::size_of::<GeometryVertex>()) as u64;

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_vbo.slice(..used));
        rpass.draw(0..self.scratch.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/geometry.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("polyfan geometry shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("polyfan geometry pipeline layout"),
                    // Positions are already NDC; no uniforms needed.
                    bind_group_layouts: &[],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("polyfan geometry pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GeometryVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Clicked outlines can wind either way.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("geometry pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(256);
        let new_size = (new_cap * std::mem::size_of::<GeometryVertex>()) as u64;

        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("polyfan geometry vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}
