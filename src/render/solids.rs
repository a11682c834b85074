use glam::Mat4;
use portfolio_core::geometry::Wireframe;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SolidInstance {
    pub(crate) model: [[f32; 4]; 4],
}

pub(crate) const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];
pub(crate) const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4
];

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (std::mem::size_of::<f32>() * 3) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

pub(crate) fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SolidInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    }
}

/// Shared wireframe mesh plus a per-solid transform buffer rewritten each frame.
pub(crate) struct SolidResources {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) capacity: u32,
}

pub(crate) fn create_solid_resources(
    device: &wgpu::Device,
    mesh: &Wireframe,
    capacity: usize,
) -> SolidResources {
    let positions: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.to_array()).collect();
    let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("solid_vertices"),
        contents: bytemuck::cast_slice(&positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let line_indices = mesh.line_indices();
    let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("solid_indices"),
        contents: bytemuck::cast_slice(&line_indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let capacity = capacity.max(1);
    let instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("solid_instances"),
        size: (std::mem::size_of::<SolidInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    SolidResources {
        vertices,
        indices,
        index_count: line_indices.len() as u32,
        instances,
        capacity: capacity as u32,
    }
}

/// Upload this frame's transforms; returns how many instances to draw.
pub(crate) fn write_instances(queue: &wgpu::Queue, res: &SolidResources, models: &[Mat4]) -> u32 {
    let data: Vec<SolidInstance> = models
        .iter()
        .take(res.capacity as usize)
        .map(|m| SolidInstance {
            model: m.to_cols_array_2d(),
        })
        .collect();
    if !data.is_empty() {
        queue.write_buffer(&res.instances, 0, bytemuck::cast_slice(&data));
    }
    data.len() as u32
}
