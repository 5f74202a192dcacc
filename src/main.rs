//! Gesture-driven particle morph, headless demo
//!
//! Replays a scripted hand sequence through the sampler thread and runs
//! the frame loop in real time, logging the control signals and a summary
//! of the render buffer once per second. Pass a JSON scene file as the
//! first argument to override the defaults.

use std::time::{Duration, Instant};

use anyhow::Result;
use gesture_particles::{script_duration, script_samples, Pipeline, SceneConfig, DEMO_SCRIPT};
use glam::Vec3;
use hand_gesture::{spawn_sampler, ScriptedSource};
use particle_morph::ParticleVertex;

const FRAME_RATE: f32 = 60.0;
const SAMPLE_RATE: f32 = 30.0;

struct FrameStats {
    mean_alpha: f32,
    mean_size: f32,
    extent: f32,
}

fn frame_stats(vertices: &[ParticleVertex]) -> FrameStats {
    let n = vertices.len().max(1) as f32;
    let mut alpha = 0.0;
    let mut size = 0.0;
    let mut extent: f32 = 0.0;
    for v in vertices {
        alpha += v.alpha;
        size += v.size;
        extent = extent.max(Vec3::from_array(v.position).length());
    }
    FrameStats {
        mean_alpha: alpha / n,
        mean_size: size / n,
        extent,
    }
}

fn main() -> Result<()> {
    // Initialize logger (RUST_LOG=debug for gesture transitions)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    log::info!(
        "Starting gesture particles: {} particles, scale {:.2}",
        config.particle_count,
        config.scale
    );

    let mut pipeline = Pipeline::new(&config)?;

    let samples = script_samples(&DEMO_SCRIPT, SAMPLE_RATE);
    let source = ScriptedSource::new(samples, Duration::from_secs_f32(1.0 / SAMPLE_RATE));
    let sampler = spawn_sampler(source, pipeline.hand_slot());

    for step in &DEMO_SCRIPT {
        log::info!("  script: {} ({:.1}s)", step.label, step.seconds);
    }

    let frame_time = Duration::from_secs_f32(1.0 / FRAME_RATE);
    let duration = script_duration(&DEMO_SCRIPT) + 1.0;
    let start = Instant::now();
    let mut last = start;
    let mut next_report = 0.0;

    loop {
        let now = Instant::now();
        let time = now.duration_since(start).as_secs_f32();
        if time > duration {
            break;
        }
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        let stats = frame_stats(pipeline.frame(time, dt));
        if time >= next_report {
            let s = pipeline.signals();
            log::info!(
                "t={:5.2}s visible={:.2} pinch={:.2} magic={:.2} rot={:+.2} blast={:.2} | alpha={:.2} size={:.2} extent={:.1}",
                time,
                s.visible,
                s.pinch,
                s.magic,
                s.rotation,
                s.blast,
                stats.mean_alpha,
                stats.mean_size,
                stats.extent
            );
            let sparkle = config.curve.point(time);
            log::debug!("companion curve at ({:+.2}, {:+.2})", sparkle.x, sparkle.y);
            next_report += 1.0;
        }

        if let Some(remaining) = frame_time.checked_sub(now.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    let published = sampler.stop();
    log::info!(
        "Done: {} frames, {} hand samples",
        pipeline.engine().frame_count(),
        published
    );
    Ok(())
}
