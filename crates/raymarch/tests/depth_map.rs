use compute::CpuBackend;
use raymarch::{compute_depth_map, compute_depth_map_with, ConfigError, RaymarchError, RenderConfig, ShapeKind};
use std::sync::Arc;

fn small(resolution: u32, march_steps: u32, order: u32) -> RenderConfig {
    RenderConfig { resolution, march_steps, order, ..RenderConfig::default() }
}

#[test]
fn depth_map_is_square_for_any_settings() {
    for &(res, steps, order) in &[(1, 0, 1), (2, 5, 1), (3, 1, 4), (5, 12, 2), (8, 3, 6)] {
        let result = compute_depth_map(&small(res, steps, order)).unwrap();
        let map = &result.depth_map;
        assert_eq!(map.resolution(), res as usize);
        assert_eq!(map.as_slice().len(), (res * res) as usize);
        assert_eq!(map.rows().count(), res as usize);
        assert!(map.rows().all(|row| row.len() == res as usize));
    }
}

#[test]
fn centre_pixel_is_closer_than_corner() {
    let config = RenderConfig {
        resolution: 10,
        march_steps: 50,
        order: 3,
        power: 8,
        proximity: 3.0,
        elevation: 0.0,
        azimuth: 0.0,
        ..RenderConfig::default()
    };
    let result = compute_depth_map(&config).unwrap();
    let map = &result.depth_map;

    let centre = map.get(4, 4).unwrap();
    let corner = map.get(0, 0).unwrap();
    assert!(centre.is_finite() && corner.is_finite());
    assert!(centre < corner, "centre {centre} should be closer than corner {corner}");
    // The corner ray misses and freezes on the abort sphere, well beyond the object.
    assert!(corner > 5.0, "corner {corner}");
    assert!(centre < 3.0, "centre {centre}");
}

#[test]
fn sphere_depth_matches_geometry() {
    let config = RenderConfig {
        resolution: 3,
        march_steps: 60,
        shape: ShapeKind::Sphere,
        ..RenderConfig::default()
    };
    let result = compute_depth_map(&config).unwrap();
    // Centre ray runs along the axis and stops on the sphere surface.
    let centre = result.depth_map.get(1, 1).unwrap();
    assert!((centre - 2.5).abs() < 1e-3, "centre {centre}");
    assert_eq!(result.iterations_run, 60);
}

#[test]
fn zero_resolution_is_a_configuration_error() {
    let result = compute_depth_map(&small(0, 10, 3));
    assert!(matches!(
        result,
        Err(RaymarchError::Config(ConfigError::ZeroResolution))
    ));
}

#[test]
fn zero_order_is_a_configuration_error() {
    let result = compute_depth_map_with(&small(4, 10, 0), Arc::new(CpuBackend::new()), None);
    assert!(matches!(result, Err(RaymarchError::Config(ConfigError::ZeroOrder))));
}

#[test]
fn early_termination_matches_full_run() {
    let base = RenderConfig {
        resolution: 6,
        march_steps: 300,
        shape: ShapeKind::Sphere,
        ..RenderConfig::default()
    };
    let full = compute_depth_map(&base).unwrap();
    let early = compute_depth_map(&RenderConfig { convergence_epsilon: Some(1e-6), ..base }).unwrap();

    assert!(early.iterations_run < full.iterations_run);
    for (a, b) in full.depth_map.as_slice().iter().zip(early.depth_map.as_slice()) {
        assert!((a - b).abs() < 1e-4, "{a} vs {b}");
    }
}

#[test]
fn camera_orbit_preserves_sphere_depth() {
    let config = |elevation, azimuth| RenderConfig {
        resolution: 5,
        march_steps: 80,
        shape: ShapeKind::Sphere,
        elevation,
        azimuth,
        ..RenderConfig::default()
    };
    let a = compute_depth_map(&config(0.0, 0.0)).unwrap();
    let b = compute_depth_map(&config(5.41, 1.3)).unwrap();
    for (x, y) in a.depth_map.as_slice().iter().zip(b.depth_map.as_slice()) {
        assert!((x - y).abs() < 1e-3, "{x} vs {y}");
    }
}
