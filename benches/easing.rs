use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use view_animator::camera::ViewerCamera;
use view_animator::config::AnimatorConfig;
use view_animator::core::{FrameLoop, ManualClock};
use view_animator::math::Decomposed;
use view_animator::{Animator, Easing, Pose, ZoomPlan};

/// Benchmark: each easing curve over a sweep of progress values
fn bench_easing_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");

    for easing in Easing::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(easing), &easing, |b, &easing| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..=100 {
                    sum += easing.apply(black_box(i as f32 / 100.0));
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

/// Benchmark: slerp/lerp and recompose, the per-frame cost of a view transition
fn bench_pose_interpolation(c: &mut Criterion) {
    let from = Decomposed::from_matrix(&Mat4::IDENTITY);
    let to = Decomposed::from_matrix(&Mat4::from_rotation_translation(
        Quat::from_rotation_y(1.2),
        Vec3::new(5.0, -2.0, 8.0),
    ));

    c.bench_function("pose_interpolation", |b| {
        b.iter(|| black_box(from.interpolate(&to, black_box(0.37)).to_matrix()))
    });
}

/// Benchmark: zoom geometry including the inverse and singularity guard
fn bench_zoom_plan(c: &mut Criterion) {
    let start = Pose::new(
        Mat4::from_rotation_translation(Quat::from_rotation_x(0.4), Vec3::new(0.0, 3.0, -12.0)),
        10.0,
    );

    c.bench_function("zoom_plan", |b| {
        b.iter(|| black_box(ZoomPlan::new(black_box(start), 2.0, 45.0, 1.0)))
    });
}

/// Benchmark: one frame of a queued view transition end to end
fn bench_view_transition_frames(c: &mut Criterion) {
    c.bench_function("view_transition_60_frames", |b| {
        b.iter(|| {
            let camera = Rc::new(RefCell::new(ViewerCamera::default()));
            let frames = Rc::new(FrameLoop::host_paced());
            let clock = Rc::new(ManualClock::new());
            let animator = Animator::new(
                camera.clone(),
                frames.clone(),
                clock.clone(),
                AnimatorConfig::default(),
            );

            let target = Pose::new(Mat4::from_rotation_z(1.0), 4.0);
            let _transition = animator.animate_view_to(target, Duration::from_millis(1000), Easing::SineSquared);
            for _ in 0..60 {
                clock.advance_ms(17);
                frames.tick();
            }
            black_box(camera.borrow().width)
        })
    });
}

criterion_group!(
    benches,
    bench_easing_curves,
    bench_pose_interpolation,
    bench_zoom_plan,
    bench_view_transition_frames
);
criterion_main!(benches);
