use bytemuck::{Pod, Zeroable};

use aurora_engine::paint::Color;
use aurora_engine::render::quad::{
    premul_alpha_blend, quad_primitive, uniform_binding_size, QuadBuffers, QuadVertex,
};
use aurora_engine::render::{RenderCtx, RenderTarget};

use crate::menu::{MenuLayout, MenuState, MENU_ITEMS};

/// Visual parameters for menu tiles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileStyle {
    pub corner_radius: f32,
    pub idle_opacity: f32,
    pub focused_opacity: f32,
    pub selected_opacity: f32,
    /// Scale applied to a selected tile around its center.
    pub selected_scale: f32,
    pub outline_width: f32,
    pub outline: Color,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            corner_radius: 16.0,
            idle_opacity: 0.35,
            focused_opacity: 0.55,
            selected_opacity: 0.8,
            selected_scale: 1.1,
            outline_width: 3.0,
            outline: Color::from_straight(0.9, 0.9, 0.9, 0.9),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TileInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    /// Corner radius and outline width.
    pub radius_border: [f32; 2],
    pub fill: [f32; 4],
    pub border: [f32; 4],
}

impl TileInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x2, // radius_border
        4 => Float32x4, // fill
        5 => Float32x4  // border
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TileInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Builds one tile per item in table order from the animated layout.
pub fn tile_instances(layout: &MenuLayout, state: &MenuState, style: &TileStyle) -> Vec<TileInstance> {
    MENU_ITEMS
        .iter()
        .map(|item| {
            let rect = layout.rect(item.id);
            let selected = state.is_selected(item.id);
            let focused = state.is_focused(item.id);

            let (scale, opacity) = if selected {
                (style.selected_scale, style.selected_opacity)
            } else if focused {
                (1.0, style.focused_opacity)
            } else {
                (1.0, style.idle_opacity)
            };

            let size = rect.size * scale;
            let origin = rect.center() - size * 0.5;
            let border = if focused { style.outline } else { Color::transparent() };

            TileInstance {
                origin: origin.to_array(),
                size: size.to_array(),
                radius_border: [style.corner_radius, style.outline_width],
                fill: item.color().with_opacity(opacity).to_array(),
                border: border.to_array(),
            }
        })
        .collect()
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2],
    _pad: [f32; 2],
}

/// Instanced renderer for menu tiles (premultiplied alpha over the target).
#[derive(Default)]
pub struct TileRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad: Option<QuadBuffers>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl TileRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        instances: &[TileInstance],
    ) {
        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx.device, "aurora tile"));
        }

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.write_viewport_uniform(ctx);
        self.ensure_instance_capacity(ctx, instances.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(instances));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };

        let mut rpass = target.load_pass("aurora tile pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QuadBuffers::INDEX_COUNT, 0, 0..instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("aurora tile shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/tile.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("aurora tile bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: uniform_binding_size::<ViewportUniform>(),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("aurora tile pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("aurora tile pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), TileInstance::layout()],
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

            primitive: quad_primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("aurora tile viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("aurora tile bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform {
            size: [ctx.surface.width, ctx.surface.height],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(8);
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("aurora tile instance vbo"),
            size: (new_cap * std::mem::size_of::<TileInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::menu::{overlay_translation, reduce, ItemId, MenuEvent, INITIAL_CAMERA};
    use aurora_engine::input::Key;

    fn layout() -> MenuLayout {
        MenuLayout::compute(Vec2::new(1280.0, 720.0), overlay_translation(INITIAL_CAMERA))
    }

    #[test]
    fn instance_stride_matches_attributes() {
        // 2 + 2 + 2 + 4 + 4 floats
        assert_eq!(std::mem::size_of::<TileInstance>(), 14 * 4);
    }

    #[test]
    fn idle_tiles_match_item_boxes() {
        let style = TileStyle::default();
        let tiles = tile_instances(&layout(), &MenuState::default(), &style);
        assert_eq!(tiles.len(), 3);
        for (tile, rect) in tiles.iter().zip(layout().items.iter()) {
            assert_eq!(tile.origin, rect.origin.to_array());
            assert_eq!(tile.size, rect.size.to_array());
            assert_eq!(tile.border, Color::transparent().to_array());
            assert!((tile.fill[3] - style.idle_opacity).abs() < 1e-6);
        }
    }

    #[test]
    fn focused_tile_gets_outline() {
        let style = TileStyle::default();
        let state = reduce(MenuState::default(), MenuEvent::Key(Key::ArrowRight));
        let tiles = tile_instances(&layout(), &state, &style);
        assert_eq!(tiles[0].border, style.outline.to_array());
        assert_eq!(tiles[1].border, Color::transparent().to_array());
    }

    #[test]
    fn selected_tile_grows_around_its_center() {
        let style = TileStyle::default();
        let state = reduce(MenuState::default(), MenuEvent::Click(ItemId::Game));
        let tiles = tile_instances(&layout(), &state, &style);
        let t = tiles[ItemId::Game.index()];
        let rect = *layout().rect(ItemId::Game);

        let center = Vec2::from(t.origin) + Vec2::from(t.size) * 0.5;
        assert!((center - rect.center()).abs().max_element() < 1e-3);
        assert!(t.size[0] > rect.size.x);
        assert!((t.fill[3] - style.selected_opacity).abs() < 1e-6);
    }
}
