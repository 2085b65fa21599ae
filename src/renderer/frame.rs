//! Per-frame draw - uploads the frame's vertices and issues one pass

use super::state::{GPU_STATE, MAX_VERTICES};
use crate::bridge;

/// Scene background.
const BACKGROUND: wgpu::Color = wgpu::Color::BLACK;

/// Render one frame of the graph scene. Advances the camera first; a
/// stopped view renders nothing.
pub fn render_graph() {
    let Some(vertices) = bridge::frame_vertices() else {
        return;
    };

    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let vertices = &vertices[..vertices.len().min(MAX_VERTICES)];

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Graph Encoder"),
            });

        if !vertices.is_empty() {
            state
                .queue
                .write_buffer(&state.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Graph Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
