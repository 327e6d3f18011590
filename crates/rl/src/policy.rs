use fastrand::Rng;

use crate::agent::{Action, CubeAgent};
use crate::observation::Observation;

/// Maps observations to actions.
pub trait Policy {
    fn act(&mut self, observation: &Observation) -> Action;
}

/// Uniform random actions in [-1, 1] on both axes.
pub struct RandomPolicy {
    rng: Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self { rng: Rng::with_seed(seed) }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        let vertical = self.rng.f32() * 2.0 - 1.0;
        let horizontal = self.rng.f32() * 2.0 - 1.0;
        Action::new(vertical, horizontal)
    }
}

/// Holds two manual input axes steady, routed through the agent heuristic.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeuristicPolicy {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Policy for HeuristicPolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        CubeAgent::heuristic(self.vertical, self.horizontal)
    }
}
