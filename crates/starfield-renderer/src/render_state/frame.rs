use starfield_scene::{SceneAnimator, SceneRenderer};

use super::camera::compute_camera_uniforms;
use super::helpers::log_first_frame;
use super::state::RenderState;
use crate::gpu::RendererError;

impl RenderState {
    /// Draw one frame of `scene`. A lost or outdated surface is reconfigured
    /// and the frame skipped.
    pub fn render_frame(&mut self, scene: &SceneAnimator) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timed out, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let pixel_ratio = self.pixel_ratio();
        let camera = compute_camera_uniforms(
            scene,
            &self.render,
            self.gpu.size,
            pixel_ratio,
            self.srgb,
        );
        self.gpu
            .queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera));
        self.points.prepare(
            &self.gpu.queue,
            &[scene.stars(), scene.particles()],
            pixel_ratio,
            self.srgb,
        );
        self.wireframe.prepare(&self.gpu.queue, scene, self.srgb);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("starfield frame encoder"),
            });

        {
            let (target, resolve_target) = match &self.msaa_view {
                Some(msaa) => (msaa, Some(&view)),
                None => (&view, None),
            };

            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("starfield pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            self.points.render(&mut pass);
            self.wireframe.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}

impl SceneRenderer for RenderState {
    type Error = RendererError;

    fn render_scene(&mut self, scene: &SceneAnimator) -> Result<(), RendererError> {
        self.render_frame(scene)
    }
}
