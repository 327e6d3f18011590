mod common;

use common::{config, FakeWorld, RecordingDisplay};
use rl::{Action, EnvConfig, EpisodeOrchestrator, EpisodePhase, Transition};

const TURN: Action = Action::new(1.0, 1.0);

#[test]
fn orient_times_out_after_limit() {
    let cfg = config(0.25);
    let display = RecordingDisplay::default();
    let mut orch = EpisodeOrchestrator::new(cfg, FakeWorld::blocked())
        .unwrap()
        .with_display(Box::new(display.clone()));

    for _ in 0..40 {
        let outcome = orch.tick(0.25, TURN);
        assert_eq!(outcome.phase, EpisodePhase::Orient);
        assert!(outcome.observation.is_some());
        assert_eq!(outcome.reward, -0.5, "eight blocked rays");
        assert!(outcome.transition.is_none());
    }
    assert_eq!(orch.orient_elapsed(), 10.0);

    let outcome = orch.tick(0.25, TURN);
    assert_eq!(outcome.transition, Some(Transition::TimedOut));
    assert_eq!(outcome.reward, -1.0);
    assert_eq!(outcome.phase, EpisodePhase::Translate);
    assert!(!outcome.done);
    assert!(outcome.observation.is_none());
    assert!(orch.agent().is_moving());

    let shown = display.0.borrow();
    assert_eq!(shown.len(), 41);
    assert_eq!(shown[0], "10.00");
    assert_eq!(shown[1], "9.75");
    assert_eq!(shown[40], "0.00");
}

#[test]
fn clearing_early_pays_remaining_time() {
    let mut orch = EpisodeOrchestrator::new(config(0.5), FakeWorld::clear_after(3)).unwrap();
    // Three blocked decisions, then one that sees everything clear.
    for _ in 0..4 {
        let outcome = orch.tick(0.5, TURN);
        assert_eq!(outcome.phase, EpisodePhase::Orient);
    }
    assert!(orch.agent().all_rays_clear());
    let outcome = orch.tick(0.5, TURN);
    assert_eq!(outcome.transition, Some(Transition::Cleared { reward: 8.0 }));
    assert_eq!(outcome.reward, 8.0);
    assert_eq!(outcome.phase, EpisodePhase::Translate);
}

#[test]
fn translate_reaches_goal_and_ends_once() {
    let cfg = EnvConfig { translate_duration: 1.0, ..config(0.1) };
    let goal = cfg.goal_position;
    let start = cfg.start_position;
    let mut orch = EpisodeOrchestrator::new(cfg, FakeWorld::open()).unwrap();

    // Decision sees the open world, next tick clears.
    orch.tick(0.1, Action::default());
    let outcome = orch.tick(0.1, Action::default());
    assert!(matches!(outcome.transition, Some(Transition::Cleared { .. })));
    assert_eq!(orch.phase(), EpisodePhase::Translate);

    let mut terminal_rewards = Vec::new();
    for i in 0..10 {
        let outcome = orch.tick(0.1, Action::default());
        assert!(!outcome.done);
        assert_eq!(outcome.reward, 0.0);
        let expected = if i == 0 { start } else { start + (goal - start) * (i as f32 * 0.1) };
        assert!(orch.agent().pose().position.abs_diff_eq(expected, 1e-4), "tick {i}");
    }
    assert!((orch.translate_elapsed() - 1.0).abs() < 1e-5);

    let outcome = orch.tick(0.1, Action::default());
    assert!(outcome.done);
    terminal_rewards.push(outcome.reward);
    assert_eq!(outcome.transition, Some(Transition::Finished { collided: false }));
    assert_eq!(outcome.phase, EpisodePhase::Orient);
    assert!(orch.agent().pose().position.abs_diff_eq(goal, 1e-4));
    assert_eq!(orch.orient_elapsed(), 0.0);
    assert_eq!(orch.episodes_finished(), 1);
    assert_eq!(terminal_rewards, vec![1.0]);
}

#[test]
fn collision_freezes_cube_and_fails_episode() {
    let cfg = config(0.25);
    let start = cfg.start_position;
    let mut orch = EpisodeOrchestrator::new(cfg, FakeWorld::open()).unwrap();
    orch.tick(0.25, Action::default());
    orch.tick(0.25, Action::default());
    assert_eq!(orch.phase(), EpisodePhase::Translate);

    assert!(orch.notify_collision(glam::Vec3::new(0.0, 0.0, -0.5)).is_some());
    assert!(orch.notify_collision(glam::Vec3::ZERO).is_none(), "second contact ignored");

    let mut done = 0;
    let mut last_reward = 0.0;
    for _ in 0..10 {
        let outcome = orch.tick(0.25, Action::default());
        assert_eq!(orch.agent().pose().position, start);
        if outcome.done {
            done += 1;
            last_reward = outcome.reward;
            break;
        }
    }
    assert_eq!(done, 1);
    assert_eq!(last_reward, -1.0);
}

#[test]
fn next_tick_after_end_starts_new_episode() {
    let cfg = EnvConfig { translate_duration: 0.5, ..config(0.25) };
    let start = cfg.start_position;
    let mut orch = EpisodeOrchestrator::new(cfg, FakeWorld::open()).unwrap();
    let mut ticks = 0;
    loop {
        ticks += 1;
        if orch.tick(0.25, Action::default()).done {
            break;
        }
        assert!(ticks < 100);
    }
    assert!(orch.agent().is_episode_done());
    // Obstacle randomized at construction and again when the episode ended.
    assert_eq!(orch.world().rotations.len(), 2);

    let outcome = orch.tick(0.25, Action::default());
    assert_eq!(outcome.phase, EpisodePhase::Orient);
    assert!(outcome.observation.is_some());
    assert!(!orch.agent().is_episode_done());
    assert!(!orch.agent().is_moving());
    assert_eq!(orch.agent().pose().position, start);
    // The restarted episode's first decision pays the shaped reward only.
    assert_eq!(outcome.reward, 1.40);
}

#[test]
fn obstacle_angles_are_single_axis_and_in_range() {
    let mut orch = EpisodeOrchestrator::new(config(0.25), FakeWorld::open()).unwrap();
    for _ in 0..50 {
        orch.reset();
    }
    for rotation in &orch.world().rotations {
        let (axis, angle) = rotation.to_axis_angle();
        if angle.abs() > 1e-4 {
            assert!(axis.x.abs() < 1e-4 && axis.y.abs() < 1e-4);
        }
        assert!(angle <= std::f32::consts::PI + 1e-4);
    }
}

#[test]
fn same_seed_same_trajectory() {
    let run = || {
        let mut orch = EpisodeOrchestrator::new(config(0.25), FakeWorld::blocked()).unwrap();
        let actions = [Action::new(1.0, -1.0), Action::new(0.0, 0.9), Action::new(-0.5, 0.2)];
        (0..30)
            .map(|i| orch.tick(0.25, actions[i % actions.len()]).observation)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn agent_turns_at_configured_speed() {
    let cfg = EnvConfig { rotate_speed: 45.0, ..config(0.25) };
    let mut orch = EpisodeOrchestrator::new(cfg, FakeWorld::blocked()).unwrap();
    assert_eq!(orch.agent().rotate_speed(), 45.0);
    orch.agent_mut().set_rotate_speed(90.0);
    assert_eq!(orch.agent().rotate_speed(), 90.0);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = EnvConfig { translate_duration: 0.0, ..EnvConfig::default() };
    assert!(EpisodeOrchestrator::new(cfg, FakeWorld::open()).is_err());
}
