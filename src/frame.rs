use crate::render::GpuState;
use instant::Instant;
use portfolio_core::{AmbientBackdrop, LivenessToken};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedBackdrop = Rc<RefCell<AmbientBackdrop<GpuState>>>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub backdrop: SharedBackdrop,
    pub started: Instant,
}

impl FrameContext {
    /// Advance the scene by wall-clock time since mount. False once torn down.
    pub fn frame(&self) -> bool {
        let elapsed = self.started.elapsed();
        self.backdrop.borrow_mut().tick(elapsed)
    }
}

/// Handle to a running `requestAnimationFrame` loop.
pub struct FrameHandle {
    token: LivenessToken,
    request_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameHandle {
    /// Revoke the token, cancel the pending frame and drop the callback.
    pub fn cancel(&self) {
        self.token.revoke();
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(ctx: FrameContext, token: LivenessToken) -> FrameHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let request_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let id_clone = request_id.clone();
    let token_tick = token.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        id_clone.set(None);
        if !token_tick.is_alive() || !ctx.frame() {
            return;
        }
        if token_tick.is_alive() {
            id_clone.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));

    request_id.set(request_frame(&tick));
    log::info!("[frame] loop started");
    FrameHandle {
        token,
        request_id,
        tick,
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
