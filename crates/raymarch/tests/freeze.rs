use compute::CpuBackend;
use raymarch::{Mandelbulb, MarchState, RayMarcher, Sphere, Vec3, ABORT_RADIUS};
use std::sync::Arc;

fn bits(v: Vec3) -> [u32; 3] {
    [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}

#[test]
fn escaped_rays_stay_bitwise_frozen() {
    let marcher = RayMarcher::new(Arc::new(CpuBackend::new()));
    // Rays heading away from the object leave the abort radius after a few steps.
    let mut state = MarchState::from_rays(
        vec![Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, 2.0, -0.5), Vec3::new(0.0, 5.0, 0.0)],
        vec![
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.6, 0.8, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
        ],
    )
    .unwrap();

    let bulb = Mandelbulb::default();
    let mut frozen_at: Vec<Option<[u32; 3]>> = vec![None; 3];
    for _ in 0..60 {
        marcher.step(&mut state, &bulb).unwrap();
        for (slot, &p) in frozen_at.iter_mut().zip(state.positions()) {
            match slot {
                Some(snapshot) => assert_eq!(*snapshot, bits(p), "frozen ray moved"),
                None if p.length() >= ABORT_RADIUS => *slot = Some(bits(p)),
                None => {}
            }
        }
    }
    assert!(frozen_at.iter().all(Option::is_some), "every ray should have escaped");
}

#[test]
fn ray_starting_outside_never_moves() {
    let marcher = RayMarcher::new(Arc::new(CpuBackend::new()));
    let start = Vec3::new(0.0, 5.0, 0.0);
    let mut state =
        MarchState::from_rays(vec![start], vec![Vec3::new(0.0, -1.0, 0.0)]).unwrap();
    for _ in 0..20 {
        let stats = marcher.step(&mut state, &Sphere).unwrap();
        assert_eq!(stats.active_rays, 0);
        assert_eq!(bits(state.positions()[0]), bits(start));
    }
}

#[test]
fn indeterminate_estimate_freezes_ray() {
    let marcher = RayMarcher::new(Arc::new(CpuBackend::new()));
    // The orbit of the origin divides zero by zero; the ray must simply stay put.
    let mut state =
        MarchState::from_rays(vec![Vec3::ZERO], vec![Vec3::new(0.0, 1.0, 0.0)]).unwrap();
    let stats = marcher.step(&mut state, &Mandelbulb::default()).unwrap();
    assert_eq!(stats.indeterminate, 1);
    assert_eq!(stats.active_rays, 0);
    assert_eq!(state.positions()[0], Vec3::ZERO);
}
