/// A single line-list vertex.
///
/// Layout: position(vec3) = 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

impl LineVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineMesh {
    pub vertices: Vec<LineVertex>,
}

impl LineMesh {
    pub fn push_edge(&mut self, a: [f32; 3], b: [f32; 3]) {
        self.vertices.push(LineVertex { position: a });
        self.vertices.push(LineVertex { position: b });
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Largest distance of any vertex from the origin.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| {
                let [x, y, z] = v.position;
                (x * x + y * y + z * z).sqrt()
            })
            .fold(0.0, f32::max)
    }
}
