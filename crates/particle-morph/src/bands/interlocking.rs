//! Band 2: interlocking star squares, a hexagram, a spirograph and a sawtooth ring

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use super::{polygon_radius, slot, sub_layer, vertex_weight, BandInput, BandPoint};
use particle_geometry::easing::{fract, lerp_f32};

const LAYERS: [f32; 4] = [0.4, 0.6, 0.85, 1.0];

/// Fixed-circle to rolling-circle ratio of the spirograph
const SPIRO_RATIO: f32 = 3.0;

const SAW_TEETH: f32 = 24.0;

pub fn sample(input: &BandInput) -> BandPoint {
    let k = input.radius;
    let t = input.time;
    let (layer, u) = sub_layer(input.local, &LAYERS);

    match layer {
        0 => {
            // two squares, 45° apart and counter-rotating, form an eight-point star
            let (square, v) = slot(u, 2);
            let selector = square as f32;
            let angle = v * TAU;
            let spin = lerp_f32(0.3 * t, -0.3 * t + FRAC_PI_4, selector);
            let marker = vertex_weight(angle, 4);
            BandPoint::polar(polygon_radius(angle, 0.5 * k, 4), angle + spin)
                .with_size(1.0 + marker)
        }
        1 => {
            // hexagram: the second triangle is the first turned by 60°
            let (triangle, v) = slot(u, 2);
            let selector = triangle as f32;
            let angle = v * TAU;
            let spin = 0.5 * t + selector * PI / 3.0;
            let marker = vertex_weight(angle, 3);
            BandPoint::polar(polygon_radius(angle, 0.16 * k, 3), angle + spin)
                .with_intensity(0.8 + 0.2 * marker)
        }
        2 => {
            let a = u * TAU;
            let fixed = 0.24 * k;
            let rolling = fixed / SPIRO_RATIO;
            let pen = 0.8 * rolling;
            let lobes = (fixed + rolling) / rolling;
            let x = (fixed + rolling) * a.cos() - pen * (lobes * a).cos();
            let y = (fixed + rolling) * a.sin() - pen * (lobes * a).sin();
            let mut point = BandPoint::from_cartesian(x, y, 0.0);
            point.angle += 0.12 * t;
            point.with_intensity(0.85)
        }
        _ => {
            let angle = u * TAU;
            let tooth = fract(angle * SAW_TEETH / TAU);
            BandPoint::polar(0.82 * k + 0.06 * k * tooth, angle - 0.05 * t)
                .with_intensity(0.6 + 0.4 * tooth)
        }
    }
}
