use compute::CpuBackend;
use raymarch::{MarchState, RayMarcher, Sphere, Vec3};
use std::sync::Arc;

fn head_on_ray(distance: f32) -> MarchState {
    MarchState::from_rays(
        vec![Vec3::new(0.0, distance, 0.0)],
        vec![Vec3::new(0.0, -1.0, 0.0)],
    )
    .unwrap()
}

#[test]
fn head_on_ray_converges_within_logarithmic_steps() {
    let marcher = RayMarcher::new(Arc::new(CpuBackend::new()));
    let mut state = head_on_ray(3.0);
    let eps = 1e-3;

    // The gap shrinks by 0.6 per step: ln(2.5 / 1e-3) / ln(1 / 0.6) < 16.
    let mut steps_taken = None;
    for step in 1..=40 {
        marcher.step(&mut state, &Sphere).unwrap();
        let gap = state.positions()[0].length() - 0.5;
        if gap.abs() < eps && steps_taken.is_none() {
            steps_taken = Some(step);
        }
    }

    let steps_taken = steps_taken.expect("ray never reached the sphere");
    assert!(steps_taken <= 17, "took {steps_taken} steps");
    let final_gap = state.positions()[0].length() - 0.5;
    assert!(final_gap.abs() < eps, "final gap {final_gap}");
}

#[test]
fn ray_never_passes_through_the_sphere() {
    let marcher = RayMarcher::new(Arc::new(CpuBackend::new()));
    let mut state = head_on_ray(3.0);
    for _ in 0..100 {
        marcher.step(&mut state, &Sphere).unwrap();
        assert!(state.positions()[0].y >= 0.5 - 1e-6);
    }
}

#[test]
fn sphere_bound_holds_everywhere() {
    let backend = CpuBackend::new();
    let mut points = Vec::new();
    for i in -4..=4 {
        for j in -4..=4 {
            for k in -4..=4 {
                points.push(Vec3::new(i as f32 * 0.3, j as f32 * 0.3, k as f32 * 0.3));
            }
        }
    }
    let d = raymarch::DistanceEstimator::estimate(&Sphere, &backend, &points).unwrap();
    assert!(d.iter().all(|&v| v >= -0.5));
    assert_eq!(d[points.iter().position(|p| *p == Vec3::ZERO).unwrap()], -0.5);
}
