use portfolio_core::particles::ParticleField;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleInstance {
    pub(crate) center: [f32; 3],
    pub(crate) color: [f32; 3],
}

pub(crate) const PARTICLE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &PARTICLE_ATTRIBUTES,
    }
}

/// Immutable instance buffer holding the whole point cloud.
pub(crate) struct ParticleResources {
    pub(crate) instances: wgpu::Buffer,
    pub(crate) count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    field: &ParticleField,
) -> ParticleResources {
    let data: Vec<ParticleInstance> = field
        .positions()
        .iter()
        .zip(field.colors())
        .map(|(p, c)| ParticleInstance {
            center: p.to_array(),
            color: c.to_array(),
        })
        .collect();
    let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instances"),
        contents: bytemuck::cast_slice(&data),
        usage: wgpu::BufferUsages::VERTEX,
    });
    ParticleResources {
        instances,
        count: data.len() as u32,
    }
}
