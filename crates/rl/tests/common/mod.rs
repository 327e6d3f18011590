#![allow(dead_code)]

use glam::{Quat, Vec3};
use physics::{BoxShape, Contact, ContactProbe, LayerMask, ObstaclePivot, Pose, RayCaster};
use rl::{EnvConfig, TimerDisplay};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Deterministic stand-in for the physics world.
#[derive(Default)]
pub struct FakeWorld {
    /// Number of decisions (8 casts each) that see every ray blocked before
    /// the world opens up. `None` keeps it blocked forever.
    pub blocked_decisions: Option<u32>,
    pub contact: Option<Vec3>,
    pub rotations: Vec<Quat>,
    casts: Cell<u32>,
}

impl FakeWorld {
    pub fn open() -> Self {
        Self { blocked_decisions: Some(0), ..Self::default() }
    }

    pub fn blocked() -> Self {
        Self { blocked_decisions: None, ..Self::default() }
    }

    pub fn clear_after(decisions: u32) -> Self {
        Self { blocked_decisions: Some(decisions), ..Self::default() }
    }

    /// Open world that reports a contact at `point` on every probe.
    pub fn with_contact(point: Vec3) -> Self {
        Self { contact: Some(point), ..Self::open() }
    }

    pub fn casts(&self) -> u32 {
        self.casts.get()
    }
}

impl RayCaster for FakeWorld {
    fn cast_ray(&self, _origin: Vec3, _direction: Vec3, _max: f32, _layers: LayerMask) -> bool {
        let n = self.casts.get();
        self.casts.set(n + 1);
        match self.blocked_decisions {
            None => true,
            Some(decisions) => n / 8 < decisions,
        }
    }
}

impl ObstaclePivot for FakeWorld {
    fn set_obstacle_rotation(&mut self, rotation: Quat) {
        self.rotations.push(rotation);
    }
}

impl ContactProbe for FakeWorld {
    fn probe_contact(&self, _pose: &Pose, _shape: &BoxShape) -> Option<Contact> {
        self.contact.map(|point| Contact { point, normal: Vec3::Z, depth: 0.1 })
    }
}

/// Display that records everything it is shown.
#[derive(Clone, Default)]
pub struct RecordingDisplay(pub Rc<RefCell<Vec<String>>>);

impl TimerDisplay for RecordingDisplay {
    fn show(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_owned());
    }
}

pub fn config(tick_duration: f32) -> EnvConfig {
    EnvConfig { tick_duration, seed: 42, ..EnvConfig::default() }
}
