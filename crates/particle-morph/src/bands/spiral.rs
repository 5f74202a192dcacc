//! Band 4: golden-angle, logarithmic and Fermat spirals
//!
//! All three lift out of the mandala plane in proportion to the transition
//! amount, so the depth relief grows as the pinch closes.

use std::f32::consts::PI;

use super::{sub_layer, BandInput, BandPoint};
use particle_geometry::GOLDEN_ANGLE;

const LAYERS: [f32; 3] = [0.4, 0.7, 1.0];

/// Virtual point counts the continuous band position is spread over
const FIBONACCI_POINTS: f32 = 500.0;
const FERMAT_POINTS: f32 = 300.0;

/// Log spiral r = a·e^(bθ)
const LOG_A: f32 = 0.05;
const LOG_B: f32 = 0.12;
const LOG_TURNS: f32 = 3.0;

pub fn sample(input: &BandInput) -> BandPoint {
    let k = input.radius;
    let t = input.time;
    let relief = input.magic.clamp(0.0, 1.0);
    let (layer, u) = sub_layer(input.local, &LAYERS);

    match layer {
        0 => {
            let idx = u * FIBONACCI_POINTS;
            let angle = idx * GOLDEN_ANGLE + t * 0.1;
            let radius = idx.sqrt() * 0.038 * k + 0.05 * k;
            let depth = (idx * 0.05 + t).sin() * 0.08 * k * relief;
            BandPoint::polar(radius, angle).with_depth(depth)
        }
        1 => {
            let theta = u * LOG_TURNS * 2.0 * PI;
            let raw = LOG_A * k * (LOG_B * theta).exp();
            let radius = 0.1 * k + raw.rem_euclid(0.8 * k);
            let depth = (theta + t).cos() * 0.06 * k * relief;
            BandPoint::polar(radius, theta + 0.15 * t)
                .with_depth(depth)
                .with_intensity(0.8)
        }
        _ => {
            let idx = u * FERMAT_POINTS;
            let arm = (idx.floor() as u32 % 2) as f32;
            let angle = idx.sqrt() * 0.9 - t * 0.2 + arm * PI;
            let radius = idx.sqrt() * 0.05 * k;
            let depth = (idx.sqrt() - t).sin() * 0.05 * k * relief;
            BandPoint::polar(radius, angle).with_depth(depth)
        }
    }
}
