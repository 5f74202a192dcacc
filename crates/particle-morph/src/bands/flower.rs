//! Band 1: Flower of Life with an outer ring of small circles and radial spokes

use std::f32::consts::{PI, TAU};

use super::{slot, sub_layer, BandInput, BandPoint};
use particle_geometry::easing::lerp_f32;

const LAYERS: [f32; 3] = [0.55, 0.85, 1.0];

/// Radius of each of the six overlapping circles (relative to k)
const PETAL: f32 = 0.3;

pub fn sample(input: &BandInput) -> BandPoint {
    let k = input.radius;
    let t = input.time;
    let (layer, u) = sub_layer(input.local, &LAYERS);

    match layer {
        0 => {
            // six circles whose centers sit on a circle of the same radius,
            // so every petal passes through the middle
            let (circle, v) = slot(u, 6);
            let spin = 0.2 * t;
            let c = PETAL * k;
            let center = circle as f32 * PI / 3.0 + spin;
            let around = v * TAU + spin;
            BandPoint::from_cartesian(
                c * center.cos() + c * around.cos(),
                c * center.sin() + c * around.sin(),
                0.0,
            )
        }
        1 => {
            let (circle, v) = slot(u, 12);
            let spin = -0.15 * t;
            let ring = 0.75 * k;
            let small = 0.12 * k;
            let center = circle as f32 * PI / 6.0 + spin;
            let around = v * TAU;
            BandPoint::from_cartesian(
                ring * center.cos() + small * around.cos(),
                ring * center.sin() + small * around.sin(),
                0.0,
            )
            .with_size(0.9)
        }
        _ => {
            let (spoke, v) = slot(u, 12);
            let angle = spoke as f32 * PI / 6.0 + PI / 12.0 + 0.1 * t;
            BandPoint::polar(lerp_f32(0.62 * k, 0.95 * k, v), angle)
                .with_intensity(0.6)
                .with_size(0.8)
        }
    }
}
