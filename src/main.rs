use anyhow::Result;
use clap::Parser;
use glam::{Mat4, Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use view_animator::camera::ViewerCamera;
use view_animator::cli::{Cli, Scenario};
use view_animator::config::{load_config, SceneConfig};
use view_animator::core::{Clock, FrameLoop, Pacing, Transition};
use view_animator::easing::Easing;
use view_animator::traits::{CameraState, TimeSource};
use view_animator::types::Pose;
use view_animator::Animator;

fn describe(pose: &Pose) -> String {
    let (_, rotation, translation) = pose.transform.to_scale_rotation_translation();
    let (axis, angle) = rotation.to_axis_angle();
    format!(
        "translation=({:.3}, {:.3}, {:.3}) rotation={:.2}deg about ({:.2}, {:.2}, {:.2}) width={:.3}",
        translation.x,
        translation.y,
        translation.z,
        angle.to_degrees(),
        axis.x,
        axis.y,
        axis.z,
        pose.width
    )
}

/// Queue the requests for `scenario`, returning labelled handles
fn start_scenario(
    animator: &Animator,
    scenario: Scenario,
    start: Pose,
    duration: Duration,
    easing: Easing,
    distance: f32,
) -> Vec<(&'static str, Transition)> {
    let turned = Pose::new(
        Mat4::from_rotation_translation(Quat::from_rotation_y(0.6), Vec3::new(2.0, 0.0, -8.0)),
        start.width * 0.5,
    );

    match scenario {
        Scenario::View => vec![("view", animator.animate_view_to(turned, duration, easing))],
        Scenario::Chain => {
            let back = Pose::new(start.transform, start.width);
            vec![
                ("view out", animator.animate_view_to(turned, duration, easing)),
                ("view back", animator.animate_view_to(back, duration, easing)),
            ]
        }
        Scenario::Zoom => vec![
            ("zoom 1", animator.animate_zoom(distance, duration)),
            ("zoom 2", animator.animate_zoom(distance, duration)),
        ],
        Scenario::HardZoom => vec![
            ("zoom", animator.animate_zoom(distance, duration)),
            ("hard zoom", animator.animate_zoom(distance, Duration::ZERO)),
        ],
        Scenario::Rotate => vec![("rotation", animator.start_rotation())],
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SceneConfig::default(),
    };

    let camera = Rc::new(RefCell::new(ViewerCamera::from_config(&config.camera)));
    // No display to sync against, so a host-paced config still ticks on the timer
    let frames = if config.animator.frame_loop.host_vsync {
        log::info!("Headless demo has no vsync source, ticking on the fallback timer");
        Rc::new(FrameLoop::new(Pacing::from_hz(config.animator.frame_loop.fallback_hz)))
    } else {
        Rc::new(FrameLoop::from_config(&config.animator.frame_loop))
    };
    let clock = Rc::new(Clock::new());
    let animator = Animator::new(camera.clone(), frames.clone(), clock.clone(), config.animator);

    let duration = Duration::from_millis(cli.duration_ms);
    let easing = cli.easing.unwrap_or(config.animator.default_easing);
    let start = camera.borrow().pose();

    println!("Scenario {:?}, {:?} per transition, easing {}", cli.scenario, duration, easing);
    println!("Start: {}", describe(&start));

    let mut transitions = start_scenario(&animator, cli.scenario, start, duration, easing, cli.distance);

    let frame_count = frames.run_until_idle_with(cli.max_frames, |info| {
        if cli.scenario == Scenario::Rotate && animator.is_rotating() && clock.now() >= duration {
            animator.stop_rotation();
        }

        if !cli.quiet {
            println!("Frame {}: {}", info.number, describe(&camera.borrow().pose()));
        }
    });

    if frames.has_pending() {
        log::warn!("Stopped after {} frames with work still pending", frame_count);
    }

    println!("Final after {} frames: {}", frame_count, describe(&camera.borrow().pose()));
    for (label, transition) in transitions.iter_mut() {
        match transition.try_outcome() {
            Some(outcome) => println!("  {}: {:?}", label, outcome),
            None => println!("  {}: still running", label),
        }
    }

    Ok(())
}
