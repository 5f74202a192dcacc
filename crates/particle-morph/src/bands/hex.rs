//! Band 0: nested hexagons around a tick-marked circle

use std::f32::consts::{PI, TAU};

use super::{polygon_radius, sub_layer, vertex_weight, BandInput, BandPoint};
use particle_geometry::easing::fract;

const LAYERS: [f32; 4] = [0.3, 0.6, 0.8, 1.0];

/// Ticks around the circle
const TICKS: f32 = 72.0;

pub fn sample(input: &BandInput) -> BandPoint {
    let k = input.radius;
    let t = input.time;
    let (layer, u) = sub_layer(input.local, &LAYERS);
    let angle = u * TAU;

    match layer {
        // inner hexagon, clockwise
        0 => hexagon(angle, 0.3 * k, -0.35 * t),
        // counter-rotating hexagon, offset half a sector
        1 => hexagon(angle, 0.48 * k, 0.25 * t + PI / 6.0),
        2 => {
            let tick = fract(u * TICKS) < 0.12;
            let radius = if tick { 0.68 * k } else { 0.7 * k };
            BandPoint::polar(radius, angle + 0.1 * t)
                .with_intensity(if tick { 1.0 } else { 0.7 })
                .with_size(if tick { 1.4 } else { 1.0 })
        }
        _ => hexagon(angle, 0.9 * k, -0.08 * t),
    }
}

fn hexagon(angle: f32, apothem: f32, rotation: f32) -> BandPoint {
    let marker = vertex_weight(angle, 6);
    BandPoint::polar(polygon_radius(angle, apothem, 6), angle + rotation)
        .with_size(1.0 + 1.2 * marker)
        .with_intensity(0.7 + 0.3 * marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(local: f32, time: f32) -> BandInput {
        BandInput {
            progress: local / 6.0,
            local,
            time,
            magic: 1.0,
            rotation: 0.0,
            radius: 10.0,
        }
    }

    #[test]
    fn test_layers_are_nested() {
        let inner = sample(&input(0.1, 0.0)).radius;
        let middle = sample(&input(0.4, 0.0)).radius;
        let circle = sample(&input(0.7, 0.0)).radius;
        let outer = sample(&input(0.9, 0.0)).radius;
        assert!(inner < middle && middle < circle && circle < outer);
    }

    #[test]
    fn test_hexagons_counter_rotate() {
        let a0 = sample(&input(0.1, 0.0)).angle;
        let a1 = sample(&input(0.1, 1.0)).angle;
        let b0 = sample(&input(0.4, 0.0)).angle;
        let b1 = sample(&input(0.4, 1.0)).angle;
        assert!((a1 - a0) < 0.0);
        assert!((b1 - b0) > 0.0);
    }

    #[test]
    fn test_radius_does_not_rotate() {
        // the outline spins with the angle, so the radius at a given sample is time independent
        let r0 = sample(&input(0.15, 0.0)).radius;
        let r1 = sample(&input(0.15, 5.0)).radius;
        assert!((r0 - r1).abs() < 1e-5);
    }
}
