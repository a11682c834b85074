// Shared scene and carousel tuning constants used by the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_EXTENT: f32 = 100.0; // edge length of the sampling cube
pub const PARTICLE_SIZE: f32 = 0.3; // world-space billboard edge
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const PARTICLE_COLOR_A: u32 = 0x00f3ff; // cyan
pub const PARTICLE_COLOR_B: u32 = 0xbd00ff; // purple
pub const PARTICLE_SPIN_RATE: f32 = 0.1; // radians per unit of scene time

// Floating solids
pub const SOLID_COUNT: usize = 5;
pub const SOLID_EXTENT: f32 = 50.0;
pub const SOLID_SCALE_MIN: f32 = 1.0;
pub const SOLID_SCALE_SPAN: f32 = 2.0;
pub const SOLID_SPEED_MAX: f32 = 0.02;
pub const SOLID_COLOR: u32 = 0x00f3ff;
pub const SOLID_OPACITY: f32 = 0.3;
pub const SOLID_BOB_AMPLITUDE: f32 = 0.02;

// Pointer reaction
pub const POINTER_TILT: f32 = 0.2; // particle tilt per unit of pointer offset
pub const CAMERA_SWAY: f32 = 5.0; // camera target per unit of pointer offset
pub const CAMERA_EASE: f32 = 0.05; // fraction of remaining distance covered per tick

// Camera
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Fog and backdrop
pub const FOG_COLOR: u32 = 0x050510;
pub const FOG_DENSITY: f32 = 0.002;

// Scene time advances this much per elapsed second (0.0005 per millisecond)
pub const TIME_SCALE: f32 = 0.5;

// Carousel
pub const DRAG_SENSITIVITY: f32 = 0.5; // degrees per CSS pixel
pub const MIN_RING_ITEMS: usize = 6;
pub const RING_RADIUS_PX: f32 = 280.0;
