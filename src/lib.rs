#![cfg(target_arch = "wasm32")]
use instant::Instant;
use portfolio_core::content::projects;
use portfolio_core::{AmbientBackdrop, AmbientScene, BackdropConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod listeners;
mod render;

use carousel::CarouselMount;
use constants::{BACKDROP_MOUNT_ID, CAROUSEL_ID};
use frame::{FrameContext, FrameHandle, SharedBackdrop};
use listeners::ListenerSet;

thread_local! {
    static ACTIVE: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
    // Bumped by teardown; a mount that finishes under an older generation is discarded.
    static GENERATION: Cell<u64> = const { Cell::new(0) };
}

struct BackdropMount {
    backdrop: SharedBackdrop,
    canvas: web::HtmlCanvasElement,
    frame: FrameHandle,
    listeners: ListenerSet,
}

impl BackdropMount {
    /// Returns `Ok(None)` when WebGPU is unavailable; the page then keeps its
    /// plain CSS background.
    async fn mount(
        window: &web::Window,
        document: &web::Document,
        mount_el: &web::HtmlElement,
    ) -> anyhow::Result<Option<Self>> {
        let viewport = dom::window_viewport(window);
        let canvas = dom::mount_canvas(document, mount_el)?;
        dom::sync_canvas_backing_size(&canvas, &viewport);

        let scene = AmbientScene::new(
            &BackdropConfig::default(),
            viewport.aspect(),
            &mut rand::thread_rng(),
        );
        let gpu = match render::GpuState::new(canvas.clone(), &scene).await {
            Ok(g) => g,
            Err(e) => {
                log::warn!("WebGPU unavailable, leaving backdrop blank: {:?}", e);
                canvas.remove();
                return Ok(None);
            }
        };

        let backdrop: SharedBackdrop = Rc::new(RefCell::new(AmbientBackdrop::initialize(
            scene, gpu, viewport,
        )));
        let mut listeners = ListenerSet::new();
        events::wire_backdrop_handlers(&mut listeners, window, &backdrop, &canvas);

        let token = backdrop.borrow().liveness();
        let frame = frame::start_loop(
            FrameContext {
                backdrop: backdrop.clone(),
                started: Instant::now(),
            },
            token,
        );
        Ok(Some(Self {
            backdrop,
            canvas,
            frame,
            listeners,
        }))
    }

    fn teardown(&mut self) {
        self.frame.cancel();
        self.listeners.remove_all();
        self.backdrop.borrow_mut().teardown();
        self.canvas.remove();
    }
}

/// Everything the page mounted: the ambient backdrop and the project carousel.
/// Either part is skipped when its mount element is missing.
pub struct Portfolio {
    backdrop: Option<BackdropMount>,
    carousel: Option<CarouselMount>,
}

impl Portfolio {
    pub async fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let carousel = match dom::element_by_id(&document, CAROUSEL_ID) {
            Ok(container) => Some(CarouselMount::mount(&document, container, &projects())?),
            Err(e) => {
                log::warn!("carousel disabled: {}", e);
                None
            }
        };

        let mut portfolio = Self {
            backdrop: None,
            carousel,
        };
        portfolio.backdrop = match dom::element_by_id(&document, BACKDROP_MOUNT_ID) {
            Ok(mount_el) => BackdropMount::mount(&window, &document, &mount_el).await?,
            Err(e) => {
                log::warn!("backdrop disabled: {}", e);
                None
            }
        };

        log::info!(
            "[portfolio] mounted backdrop={} carousel={}",
            portfolio.backdrop.is_some(),
            portfolio.carousel.is_some()
        );
        Ok(portfolio)
    }

    /// Detach every listener, stop the frame loop and release GPU resources.
    pub fn teardown(&mut self) {
        if self.backdrop.is_none() && self.carousel.is_none() {
            return;
        }
        if let Some(mut b) = self.backdrop.take() {
            b.teardown();
        }
        if let Some(mut c) = self.carousel.take() {
            c.teardown();
        }
        log::info!("[portfolio] torn down");
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn mount_active() -> anyhow::Result<()> {
    let generation = GENERATION.with(Cell::get);
    let mut portfolio = Portfolio::mount().await?;
    if GENERATION.with(Cell::get) != generation {
        log::info!("[portfolio] mount superseded; discarding");
        portfolio.teardown();
        return Ok(());
    }
    let previous = ACTIVE.with(|a| a.borrow_mut().replace(portfolio));
    if let Some(mut p) = previous {
        p.teardown();
    }
    Ok(())
}

fn spawn_mount() {
    spawn_local(async move {
        if let Err(e) = mount_active().await {
            log::error!("init error: {:?}", e);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    spawn_mount();
    Ok(())
}

/// Unmount everything. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn teardown() {
    GENERATION.with(|g| g.set(g.get() + 1));
    let active = ACTIVE.with(|a| a.borrow_mut().take());
    if let Some(mut p) = active {
        p.teardown();
    }
}

#[wasm_bindgen]
pub fn remount() {
    teardown();
    spawn_mount();
}
