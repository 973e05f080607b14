//! Principal-axis rotations used to orient the camera.
//!
//! Matrices are applied as `m * v`. Each one turns a vector counter-clockwise
//! by `angle` about its axis, which is the same transform as multiplying a row
//! vector on the right by the transposed matrix.

use glam::{Mat3, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation by `angle` radians about one principal axis.
#[must_use]
pub fn rotation_about(axis: Axis, angle: f32) -> Mat3 {
    match axis {
        Axis::X => Mat3::from_rotation_x(angle),
        Axis::Y => Mat3::from_rotation_y(angle),
        Axis::Z => Mat3::from_rotation_z(angle),
    }
}

/// Orientation applied to the camera position: elevation about x, then azimuth about z.
#[must_use]
pub fn camera_rotation(elevation: f32, azimuth: f32) -> Mat3 {
    rotation_about(Axis::Z, azimuth) * rotation_about(Axis::X, elevation)
}

/// Orientation applied to ray directions.
///
/// The image plane is built facing +z, so a quarter turn about x first points
/// it down -y, towards the origin from a camera sitting on +y.
#[must_use]
pub fn view_rotation(elevation: f32, azimuth: f32) -> Mat3 {
    camera_rotation(elevation, azimuth) * rotation_about(Axis::X, FRAC_PI_2)
}

#[must_use]
pub fn rotate(m: Mat3, v: Vec3) -> Vec3 {
    m * v
}
