//! Band 3: marked dodecagon, triangular grid, gapped arcs, π ring and an inner modulated ring

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::{polygon_radius, slot, sub_layer, BandInput, BandPoint};
use particle_geometry::easing::fract;

const LAYERS: [f32; 5] = [0.25, 0.45, 0.65, 0.8, 1.0];

/// Digits that modulate the π ring, cycled around the circle
pub const PI_DIGITS: [u8; 10] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];

/// Fraction of each quarter an arc covers
const ARC_FILL: f32 = 0.8;

pub fn sample(input: &BandInput) -> BandPoint {
    let k = input.radius;
    let t = input.time;
    let (layer, u) = sub_layer(input.local, &LAYERS);

    match layer {
        0 => {
            let angle = u * TAU;
            let major = fract(u * 12.0) < 0.04;
            let minor = fract(u * 72.0) < 0.15;
            let bump = if major {
                0.05 * k
            } else if minor {
                0.02 * k
            } else {
                0.0
            };
            BandPoint::polar(polygon_radius(angle, 0.9 * k, 12) + bump, angle + 0.05 * t)
                .with_size(if major { 1.6 } else { 1.0 })
                .with_intensity(if major || minor { 1.0 } else { 0.7 })
        }
        1 => {
            // six small triangles spinning around six rotating centers
            let (cell, v) = slot(u, 6);
            let center = cell as f32 * PI / 3.0 + 0.2 * t;
            let around = v * TAU;
            let r = polygon_radius(around, 0.08 * k, 3);
            let spin = around - 0.4 * t;
            BandPoint::from_cartesian(
                0.45 * k * center.cos() + r * spin.cos(),
                0.45 * k * center.sin() + r * spin.sin(),
                0.0,
            )
            .with_intensity(0.85)
        }
        2 => {
            let (ring, v) = slot(u, 3);
            let (quarter, s) = slot(v, 4);
            let direction = if ring % 2 == 0 { 1.0 } else { -1.0 };
            let angle = (quarter as f32 + s * ARC_FILL) * FRAC_PI_2 + direction * 0.15 * t;
            BandPoint::polar((0.28 + 0.06 * ring as f32) * k, angle).with_intensity(0.75)
        }
        3 => {
            let step = (u * 40.0).floor() as usize;
            let digit = PI_DIGITS[step % PI_DIGITS.len()] as f32;
            BandPoint::polar(0.62 * k + digit * 0.012 * k, u * TAU + 0.07 * t)
                .with_intensity(0.6 + digit / 25.0)
        }
        _ => {
            let a = u * TAU;
            let r = 0.18 * k * (1.0 + 0.12 * (6.0 * a).sin() + 0.06 * (11.0 * a + t).sin());
            BandPoint::polar(r, a - 0.1 * t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(local: f32, time: f32) -> BandInput {
        BandInput {
            progress: (3.0 + local) / 6.0,
            local,
            time,
            magic: 1.0,
            rotation: 0.0,
            radius: 10.0,
        }
    }

    #[test]
    fn test_pi_ring_follows_digits() {
        // first sample of each 1/40 step carries that digit
        let base = 6.2;
        for step in 0..10 {
            let u = (step as f32 + 0.5) / 40.0;
            let local = 0.65 + u * 0.15;
            let r = sample(&input(local, 0.0)).radius;
            let expected = base + PI_DIGITS[step] as f32 * 0.12;
            assert!((r - expected).abs() < 1e-3, "step {step}: {r} vs {expected}");
        }
    }

    #[test]
    fn test_arcs_leave_gaps() {
        // no arc sample lands in the last fifth of any quarter at t = 0
        for i in 0..200 {
            let local = 0.45 + i as f32 / 1000.0;
            let angle = sample(&input(local, 0.0)).angle;
            let within = fract(angle / FRAC_PI_2);
            // exact quarter starts may land just below a whole number
            assert!(within <= ARC_FILL + 1e-3 || within > 1.0 - 1e-3, "{within}");
        }
    }

    #[test]
    fn test_dodecagon_ticks_push_outwards() {
        let plain = sample(&input(0.25 * 0.5 / 12.0 + 0.25 * 0.04, 0.0)).radius;
        let major = sample(&input(0.0, 0.0)).radius;
        assert!(major > plain);
    }
}
