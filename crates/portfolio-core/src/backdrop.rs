//! Lifecycle of the ambient backdrop: initialise, tick, resize, teardown.

use crate::error::FrameError;
use crate::pointer::{PointerState, Viewport};
use crate::scene::{AmbientScene, FrameSnapshot};
use crate::schedule::{FrameLoop, LivenessToken};
use std::time::Duration;

/// GPU-facing half of the backdrop.
pub trait SceneBackend {
    /// Resize the backing surface to `width` x `height` physical pixels.
    /// Implementations must treat an unchanged size as a no-op.
    fn resize(&mut self, width: u32, height: u32);

    fn draw(&mut self, frame: &FrameSnapshot) -> Result<(), FrameError>;

    /// Reconfigure the surface after a `Lost` or `Outdated` frame.
    fn recover(&mut self);

    /// Free buffers, pipelines and the surface. Called exactly once.
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Running,
    TornDown,
}

pub struct AmbientBackdrop<B: SceneBackend> {
    scene: AmbientScene,
    backend: Option<B>,
    viewport: Viewport,
    frame_loop: FrameLoop,
}

impl<B: SceneBackend> AmbientBackdrop<B> {
    /// Take ownership of a built scene and a backend that already holds its
    /// GPU copy, size the surface and start running.
    pub fn initialize(mut scene: AmbientScene, mut backend: B, viewport: Viewport) -> Self {
        scene.set_viewport(&viewport);
        let (w, h) = viewport.backing_size();
        backend.resize(w, h);
        log::info!(
            "[backdrop] running: particles={} solids={} surface={}x{}",
            scene.particles.len(),
            scene.solids.len(),
            w,
            h
        );
        Self {
            scene,
            backend: Some(backend),
            viewport,
            frame_loop: FrameLoop::start(),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.backend.is_some() {
            Lifecycle::Running
        } else {
            Lifecycle::TornDown
        }
    }

    /// Token the host refresh callback checks before each tick.
    pub fn liveness(&self) -> LivenessToken {
        self.frame_loop.token()
    }

    pub fn scene(&self) -> &AmbientScene {
        &self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn ticks(&self) -> u64 {
        self.frame_loop.ticks()
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        if self.backend.is_none() {
            return;
        }
        let pointer = PointerState::from_client(client_x, client_y, &self.viewport);
        self.scene.set_pointer(pointer);
    }

    /// One display refresh. Returns false once torn down.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Self {
            scene,
            backend,
            frame_loop,
            ..
        } = self;
        let Some(backend) = backend.as_mut() else {
            return false;
        };
        frame_loop.dispatch(|| {
            let t = scene.tick(elapsed);
            match backend.draw(&scene.snapshot(t)) {
                Ok(()) => {}
                Err(FrameError::Lost | FrameError::Outdated) => backend.recover(),
                Err(e) => log::error!("render error: {}", e),
            }
        })
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_degenerate() {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        self.viewport = viewport;
        self.scene.set_viewport(&viewport);
        let (w, h) = viewport.backing_size();
        backend.resize(w, h);
    }

    /// Stop ticking and release GPU resources. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.frame_loop.cancel();
        if let Some(mut backend) = self.backend.take() {
            backend.release();
            log::info!("[backdrop] torn down after {} ticks", self.frame_loop.ticks());
        }
    }
}

impl<B: SceneBackend> Drop for AmbientBackdrop<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
