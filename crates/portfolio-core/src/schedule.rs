//! Cancellable repeating frame task.
//!
//! The host's refresh notifier (for example `requestAnimationFrame`) calls
//! [`FrameLoop::dispatch`] on each refresh. Once the loop is cancelled every
//! token clone reports dead, and no later dispatch runs its callback.

use std::cell::Cell;
use std::rc::Rc;

/// Shared liveness flag, cloned into every callback that must stop at teardown.
#[derive(Clone, Debug)]
pub struct LivenessToken(Rc<Cell<bool>>);

impl LivenessToken {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    token: LivenessToken,
    ticks: u64,
}

impl FrameLoop {
    pub fn start() -> Self {
        Self::default()
    }

    pub fn token(&self) -> LivenessToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        self.token.is_alive()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run `tick` if the loop is still alive. Returns whether it ran and
    /// therefore whether the host should request another refresh.
    pub fn dispatch(&mut self, tick: impl FnOnce()) -> bool {
        if !self.token.is_alive() {
            return false;
        }
        tick();
        self.ticks += 1;
        true
    }

    pub fn cancel(&self) {
        self.token.revoke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_runs_until_cancelled() {
        let mut lp = FrameLoop::start();
        let mut runs = 0;
        assert!(lp.dispatch(|| runs += 1));
        assert!(lp.dispatch(|| runs += 1));
        lp.cancel();
        assert!(!lp.dispatch(|| runs += 1));
        assert_eq!(runs, 2);
        assert_eq!(lp.ticks(), 2);
    }

    #[test]
    fn cancel_is_visible_through_cloned_tokens() {
        let lp = FrameLoop::start();
        let token = lp.token();
        assert!(token.is_alive());
        lp.cancel();
        assert!(!token.is_alive());
        assert!(!lp.is_running());
    }
}
