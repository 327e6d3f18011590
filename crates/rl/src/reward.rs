//! Reward shaping for the orient phase.

/// Per-decision reward indexed by the number of blocked corner rays.
///
/// Clearing corners is worth disproportionately more than a linear mapping:
/// the drop between three and four hits crosses from positive to negative.
pub const HIT_REWARDS: [f32; 9] = [1.40, 1.10, 0.80, 0.50, -0.10, -0.20, -0.30, -0.40, -0.50];

/// Terminal reward when the cube reaches the goal untouched.
pub const PASS_REWARD: f32 = 1.0;
/// Terminal reward when the cube touched an obstacle on the way.
pub const FAIL_REWARD: f32 = -1.0;
/// Reward for running out of orient time.
pub const TIMEOUT_REWARD: f32 = -1.0;

/// Shaped reward for a perception step that saw `hit_count` blocked rays.
///
/// Counts above eight are clamped; a box only has eight corners.
pub fn shaped_reward(hit_count: u32) -> f32 {
    HIT_REWARDS[hit_count.min(8) as usize]
}

/// Reward for clearing every ray after `elapsed` of `time_limit` seconds.
pub fn early_clear_reward(time_limit: f32, elapsed: f32) -> f32 {
    time_limit - elapsed
}

/// Terminal reward for the end of the translate phase.
pub fn terminal_reward(collided: bool) -> f32 {
    if collided {
        FAIL_REWARD
    } else {
        PASS_REWARD
    }
}
