use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use clap::Parser;
use glam::Vec3;
use morph_core::constants::{DEFAULT_PARTICLE_CAPACITY, DEFAULT_PATTERN, MORPH_DURATION_SEC};
use morph_core::{MorphConfig, SceneConfig, SceneDriver};

mod feed;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "morph-native",
    version,
    about = "Headless particle-morph driver fed by a scripted hand"
)]
struct Args {
    /// Particle buffer capacity
    #[arg(long, default_value_t = DEFAULT_PARTICLE_CAPACITY)]
    particles: usize,

    /// Pattern shown at start-up
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Morph transition length in seconds
    #[arg(long, default_value_t = MORPH_DURATION_SEC)]
    morph_secs: f64,

    /// How long to run, in seconds
    #[arg(long, default_value_t = 15.0)]
    seconds: f64,

    /// Render-loop rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Simulated detector callback rate
    #[arg(long, default_value_t = 15)]
    detect_hz: u32,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// List pattern names and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if args.list {
        for (i, p) in morph_core::PATTERNS.iter().enumerate() {
            println!("{:>2}  {:<10} {:?}", i + 1, p.name, p.family);
        }
        return Ok(());
    }

    let config = SceneConfig {
        morph: MorphConfig {
            capacity: args.particles,
            duration_sec: args.morph_secs,
            initial_pattern: args.pattern.clone(),
            ..Default::default()
        },
        ..Default::default()
    };
    let scene = SceneDriver::new(config, args.seed).context("building scene")?;
    // Detector runs on its own thread, so the driver sits behind a mutex
    let scene = Arc::new(Mutex::new(scene));

    let start = Instant::now();
    let run_for = Duration::from_secs_f64(args.seconds.max(0.0));
    let _detector = spawn_detector(Arc::clone(&scene), start, run_for, args.detect_hz)?;

    let frame_interval = Duration::from_secs_f64(1.0 / args.fps.max(1) as f64);
    let mut frames = 0u64;
    let mut last_report = start;
    while start.elapsed() < run_for {
        let now_sec = start.elapsed().as_secs_f64();
        {
            let mut guard = scene.lock().map_err(|_| anyhow!("scene lock poisoned"))?;
            let label = guard.gesture().label();
            let pattern = guard.morph().current_pattern();
            let blend = guard.morph().blend_factor(now_sec);
            let frame = guard.on_frame(now_sec);
            frames += 1;
            if last_report.elapsed() >= Duration::from_secs(1) {
                last_report = Instant::now();
                let (centroid, extent) = bounds(frame.positions);
                log::info!(
                    "[frame {frames}] `{pattern}` blend={blend:.2} gesture={} centroid=({:.2},{:.2},{:.2}) extent={extent:.2} dispersion={:.2} pinch={:.2} zoom={:.2}",
                    label.as_str(),
                    centroid.x,
                    centroid.y,
                    centroid.z,
                    frame.uniforms.dispersion,
                    frame.uniforms.pinch,
                    frame.uniforms.zoom,
                );
            }
        }
        thread::sleep(frame_interval);
    }

    let fps = frames as f64 / start.elapsed().as_secs_f64().max(1e-6);
    log::info!("done: {frames} frames ({fps:.1} fps)");
    Ok(())
}

fn spawn_detector(
    scene: Arc<Mutex<SceneDriver>>,
    start: Instant,
    run_for: Duration,
    detect_hz: u32,
) -> anyhow::Result<thread::JoinHandle<()>> {
    let interval = Duration::from_secs_f64(1.0 / detect_hz.max(1) as f64);
    thread::Builder::new()
        .name("hand-detector".into())
        .spawn(move || {
            while start.elapsed() < run_for {
                let now_sec = start.elapsed().as_secs_f64();
                let hands = feed::hands_at(now_sec);
                let Ok(mut guard) = scene.lock() else {
                    log::error!("detector: scene lock poisoned");
                    return;
                };
                if let Some(next) = guard.on_detection(&hands, now_sec) {
                    log::info!("detector: swipe switched to `{next}`");
                }
                drop(guard);
                thread::sleep(interval);
            }
        })
        .context("spawning detector thread")
}

/// Centroid and max distance from it.
fn bounds(positions: &[Vec3]) -> (Vec3, f32) {
    if positions.is_empty() {
        return (Vec3::ZERO, 0.0);
    }
    let centroid = positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
    let extent = positions
        .iter()
        .map(|p| p.distance(centroid))
        .fold(0.0_f32, f32::max);
    (centroid, extent)
}
