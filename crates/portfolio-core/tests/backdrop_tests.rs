// Host-side lifecycle tests for the ambient backdrop using a recording backend.

use portfolio_core::solids::vertical_bob;
use portfolio_core::*;
use rand::{rngs::StdRng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default, Debug)]
struct Calls {
    sizes: Vec<(u32, u32)>,
    configured: (u32, u32),
    draws: usize,
    recovers: usize,
    releases: usize,
    last_solid_models: usize,
}

struct RecordingBackend {
    calls: Rc<RefCell<Calls>>,
    fail_next: Option<FrameError>,
}

impl SceneBackend for RecordingBackend {
    fn resize(&mut self, width: u32, height: u32) {
        let mut c = self.calls.borrow_mut();
        c.sizes.push((width, height));
        c.configured = (width, height);
    }

    fn draw(&mut self, frame: &FrameSnapshot) -> Result<(), FrameError> {
        if let Some(e) = self.fail_next.take() {
            return Err(e);
        }
        let mut c = self.calls.borrow_mut();
        c.draws += 1;
        c.last_solid_models = frame.solid_models.len();
        Ok(())
    }

    fn recover(&mut self) {
        self.calls.borrow_mut().recovers += 1;
    }

    fn release(&mut self) {
        self.calls.borrow_mut().releases += 1;
    }
}

fn make_backdrop(
    fail_next: Option<FrameError>,
) -> (AmbientBackdrop<RecordingBackend>, Rc<RefCell<Calls>>) {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let backend = RecordingBackend {
        calls: calls.clone(),
        fail_next,
    };
    let config = BackdropConfig {
        particle_count: 128,
        ..BackdropConfig::default()
    };
    let viewport = Viewport::new(1280.0, 720.0, 2.0);
    let scene = AmbientScene::new(&config, viewport.aspect(), &mut StdRng::seed_from_u64(42));
    let backdrop = AmbientBackdrop::initialize(scene, backend, viewport);
    (backdrop, calls)
}

#[test]
fn initialize_sizes_surface_and_runs() {
    let (backdrop, calls) = make_backdrop(None);
    assert_eq!(backdrop.lifecycle(), Lifecycle::Running);
    assert_eq!(calls.borrow().configured, (2560, 1440));
    assert_eq!(backdrop.scene().particles.len(), 128);
    assert_eq!(backdrop.scene().solids.len(), SOLID_COUNT);
    assert!((backdrop.scene().camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
}

#[test]
fn each_tick_draws_once() {
    let (mut backdrop, calls) = make_backdrop(None);
    for i in 0..10 {
        assert!(backdrop.tick(Duration::from_millis(16 * i)));
    }
    assert_eq!(calls.borrow().draws, 10);
    assert_eq!(calls.borrow().last_solid_models, SOLID_COUNT);
    assert_eq!(backdrop.ticks(), 10);
}

#[test]
fn camera_converges_to_pointer_target() {
    let (mut backdrop, _calls) = make_backdrop(None);
    // bottom-right corner: pointer (1, -1) -> target (5, -5)
    backdrop.pointer_moved(1280.0, 720.0);
    let mut prev_gap = f32::MAX;
    for i in 0..400 {
        backdrop.tick(Duration::from_millis(16 * i));
        let eye = backdrop.scene().camera.eye;
        let gap = ((eye.x - 5.0).powi(2) + (eye.y + 5.0).powi(2)).sqrt();
        assert!(gap <= prev_gap, "camera moved away from target");
        prev_gap = gap;
    }
    let eye = backdrop.scene().camera.eye;
    assert!((eye.x - 5.0).abs() < 1e-3);
    assert!((eye.y + 5.0).abs() < 1e-3);
    assert_eq!(eye.z, CAMERA_Z);
}

#[test]
fn camera_gap_shrinks_by_five_percent_per_tick() {
    let (mut backdrop, _calls) = make_backdrop(None);
    backdrop.pointer_moved(960.0, 360.0); // pointer (0.5, 0) -> target (2.5, 0)
    backdrop.tick(Duration::ZERO);
    let x1 = backdrop.scene().camera.eye.x;
    assert!((x1 - 2.5 * 0.05).abs() < 1e-6);
    backdrop.tick(Duration::ZERO);
    let x2 = backdrop.scene().camera.eye.x;
    assert!(((2.5 - x2) - (2.5 - x1) * 0.95).abs() < 1e-6);
}

#[test]
fn particle_spin_follows_wall_clock_not_tick_count() {
    let (mut a, _) = make_backdrop(None);
    let (mut b, _) = make_backdrop(None);
    // a: many quick ticks, b: one tick, same elapsed time
    for i in 0..=60 {
        a.tick(Duration::from_millis(1000 * i / 60));
    }
    b.tick(Duration::from_secs(1));
    assert_eq!(
        a.scene().particle_rotation.y,
        b.scene().particle_rotation.y
    );
    assert!((b.scene().particle_rotation.y - 0.05).abs() < 1e-6);
}

#[test]
fn solid_bob_is_replayable() {
    for &(t, x) in &[(0.0_f32, 0.0_f32), (1.25, -7.5), (1234.5, 12.0)] {
        let a = vertical_bob(t, x);
        let b = vertical_bob(t, x);
        assert_eq!(a.to_bits(), b.to_bits());
        assert!((a - (t + x).sin() * 0.02).abs() < f32::EPSILON);
    }
}

#[test]
fn solids_move_by_bob_each_tick() {
    let (mut backdrop, _calls) = make_backdrop(None);
    let before: Vec<_> = backdrop.scene().solids.clone();
    let elapsed = Duration::from_millis(500);
    backdrop.tick(elapsed);
    let t = scene_time(elapsed);
    for (old, new) in before.iter().zip(&backdrop.scene().solids) {
        let expected = old.position.y + vertical_bob(t, old.position.x);
        assert_eq!(new.position.y.to_bits(), expected.to_bits());
        assert_eq!(new.rotation.x, old.rotation.x + old.rot_speed);
    }
}

#[test]
fn resize_twice_matches_resize_once() {
    let (mut once, once_calls) = make_backdrop(None);
    let (mut twice, twice_calls) = make_backdrop(None);
    let vp = Viewport::new(1024.0, 768.0, 1.5);
    once.resize(vp);
    twice.resize(vp);
    twice.resize(vp);
    assert_eq!(once.scene().camera.aspect, twice.scene().camera.aspect);
    assert_eq!(
        once_calls.borrow().configured,
        twice_calls.borrow().configured
    );
    assert_eq!(twice_calls.borrow().configured, (1536, 1152));
}

#[test]
fn degenerate_resize_is_ignored() {
    let (mut backdrop, calls) = make_backdrop(None);
    let aspect = backdrop.scene().camera.aspect;
    backdrop.resize(Viewport::new(0.0, 0.0, 1.0));
    assert_eq!(backdrop.scene().camera.aspect, aspect);
    assert_eq!(calls.borrow().sizes.len(), 1);
}

#[test]
fn lost_surface_is_recovered_and_loop_continues() {
    let (mut backdrop, calls) = make_backdrop(Some(FrameError::Lost));
    assert!(backdrop.tick(Duration::ZERO));
    assert!(backdrop.tick(Duration::from_millis(16)));
    let c = calls.borrow();
    assert_eq!(c.recovers, 1);
    assert_eq!(c.draws, 1);
}

#[test]
fn no_side_effects_after_teardown() {
    let (mut backdrop, calls) = make_backdrop(None);
    let token = backdrop.liveness();
    backdrop.tick(Duration::ZERO);
    backdrop.teardown();
    assert_eq!(backdrop.lifecycle(), Lifecycle::TornDown);
    assert!(!token.is_alive());

    let solids_before = backdrop.scene().solids.clone();
    let eye_before = backdrop.scene().camera.eye;
    for i in 0..100 {
        backdrop.pointer_moved(0.0, 0.0);
        backdrop.resize(Viewport::new(300.0, 200.0, 1.0));
        assert!(!backdrop.tick(Duration::from_millis(16 * i)));
    }
    let c = calls.borrow();
    assert_eq!(c.draws, 1);
    assert_eq!(c.releases, 1);
    assert_eq!(c.sizes.len(), 1);
    assert_eq!(backdrop.scene().solids, solids_before);
    assert_eq!(backdrop.scene().camera.eye, eye_before);
    assert_eq!(backdrop.scene().pointer, PointerState::default());
    assert!(backdrop.backend().is_none());
}

#[test]
fn teardown_twice_releases_once() {
    let (mut backdrop, calls) = make_backdrop(None);
    backdrop.teardown();
    backdrop.teardown();
    drop(backdrop);
    assert_eq!(calls.borrow().releases, 1);
}

#[test]
fn dropping_a_running_backdrop_releases_resources() {
    let (backdrop, calls) = make_backdrop(None);
    drop(backdrop);
    assert_eq!(calls.borrow().releases, 1);
}

#[test]
fn instances_keep_separate_pointer_state() {
    let (mut a, _) = make_backdrop(None);
    let (b, _) = make_backdrop(None);
    a.pointer_moved(0.0, 0.0);
    assert_eq!(a.scene().pointer, PointerState { x: -1.0, y: 1.0 });
    assert_eq!(b.scene().pointer, PointerState::default());
}
