//! Live/Static refresh driver.
//!
//! Two-state machine around the [`Generator`]. In Static the displayed
//! snapshot equals the base reference; entering Live captures the base and
//! starts serving perturbed replacements on each tick; leaving Live
//! restores the base exactly. The timer itself lives in the event loop —
//! the driver only decides what a tick means, so "disarmed" is a pure
//! state and teardown cannot leak a timer.

use crate::generator::Generator;
use crate::model::DashboardSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshMode {
    Static,
    Live,
}

impl RefreshMode {
    /// Header cell text.
    pub fn label(&self) -> &'static str {
        match self {
            RefreshMode::Static => "STATIC",
            RefreshMode::Live => "LIVE",
        }
    }
}

/// Owns the data the dashboard displays and the Live/Static state.
pub struct RefreshDriver {
    generator: Generator,
    base: DashboardSnapshot,
    current: DashboardSnapshot,
    mode: RefreshMode,
}

impl RefreshDriver {
    pub fn new(mut generator: Generator) -> RefreshDriver {
        let base = generator.snapshot();
        RefreshDriver {
            current: base.clone(),
            base,
            generator,
            mode: RefreshMode::Static,
        }
    }

    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    pub fn is_live(&self) -> bool {
        self.mode == RefreshMode::Live
    }

    /// The snapshot to display right now.
    pub fn current(&self) -> &DashboardSnapshot {
        &self.current
    }

    /// Flip Live/Static; returns the new mode.
    pub fn toggle(&mut self) -> RefreshMode {
        self.set_live(!self.is_live());
        self.mode
    }

    pub fn set_live(&mut self, live: bool) {
        match (self.mode, live) {
            (RefreshMode::Static, true) => {
                // The snapshot on screen becomes the reference point: the
                // restore target and the center of every variation band.
                self.base = self.current.clone();
                self.current = self.generator.perturb(&self.base);
                self.mode = RefreshMode::Live;
                tracing::debug!("refresh mode: live");
            }
            (RefreshMode::Live, false) => {
                self.current = self.base.clone();
                self.mode = RefreshMode::Static;
                tracing::debug!("refresh mode: static, base restored");
            }
            _ => {}
        }
    }

    /// Consume one timer tick. In Static the tick is ignored; in Live the
    /// displayed snapshot is rebuilt from the base. Returns whether the
    /// snapshot changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_live() {
            return false;
        }
        self.current = self.generator.perturb(&self.base);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> RefreshDriver {
        RefreshDriver::new(Generator::new(Some(21), 6))
    }

    #[test]
    fn test_starts_static_with_current_equal_base() {
        let d = driver();
        assert_eq!(d.mode(), RefreshMode::Static);
        assert!(!d.is_live());
    }

    #[test]
    fn test_tick_is_noop_in_static() {
        let mut d = driver();
        let before = d.current().clone();
        assert!(!d.tick());
        assert_eq!(d.current(), &before);
    }

    #[test]
    fn test_entering_live_generates_immediately() {
        let mut d = driver();
        let base = d.current().clone();
        assert_eq!(d.toggle(), RefreshMode::Live);
        // One fresh perturbed snapshot is served before any tick.
        assert_ne!(d.current(), &base);
    }

    #[test]
    fn test_leaving_live_restores_base_exactly() {
        let mut d = driver();
        let base = d.current().clone();
        d.set_live(true);
        for _ in 0..5 {
            assert!(d.tick());
        }
        d.set_live(false);
        assert_eq!(d.mode(), RefreshMode::Static);
        assert_eq!(d.current(), &base);
    }

    #[test]
    fn test_base_is_captured_at_each_live_entry() {
        let mut d = driver();
        let first_base = d.current().clone();
        d.set_live(true);
        d.tick();
        d.set_live(false);
        assert_eq!(d.current(), &first_base);

        // Second Live session starts from the same restored base.
        d.set_live(true);
        d.tick();
        d.set_live(false);
        assert_eq!(d.current(), &first_base);
    }

    #[test]
    fn test_redundant_transitions_are_noops() {
        let mut d = driver();
        let before = d.current().clone();
        d.set_live(false);
        assert_eq!(d.current(), &before);
        d.set_live(true);
        let live_view = d.current().clone();
        d.set_live(true);
        assert_eq!(d.current(), &live_view);
    }
}
