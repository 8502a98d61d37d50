use anyhow::{Context, Result};
use clap::Parser;
use depthfield_engine::logging::{init_logging, LoggingConfig};
use depthfield_engine::{
    FieldConfig, FrameReport, RenderBucket, SortingField, SortingMap, SpriteFollower, Vec3,
};

const DEFAULT_FIELD: &str = include_str!("../fields/corridor.json");

/// Walks a few sprites down a sorting field and prints their scale, bucket and depth bias.
#[derive(Parser, Debug)]
#[command(name = "depthfield-studio")]
struct Args {
    /// Field definition (JSON). Uses the built-in corridor when omitted.
    #[arg(long)]
    field: Option<String>,

    /// Number of simulated frames.
    #[arg(short, long, default_value = "12")]
    frames: u32,

    /// Number of walking sprites.
    #[arg(short, long, default_value = "4")]
    walkers: u32,

    /// Base walking speed in world units per frame.
    #[arg(long, default_value = "1.5")]
    speed: f32,

    /// Log filter (env_logger syntax); falls back to RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

/// Fixed camera looking down the field's forward axis from above.
struct TiltedCamera {
    pitch: f32,
}

impl TiltedCamera {
    fn screen_y(&self, world: Vec3) -> f32 {
        world.y + world.z * self.pitch.sin()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let config = match &args.field {
        Some(path) => FieldConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => FieldConfig::from_json_str(DEFAULT_FIELD).context("parsing built-in field")?,
    };
    let field = SortingField::from_config(config).context("building sorting field")?;
    log::info!("field ready: {} areas", field.areas().len());

    let mut map = SortingMap::new(field);
    for i in 0..args.walkers {
        let lane = i as f32 - args.walkers as f32 / 2.0;
        let start = Vec3::new(lane, 0.0, -(i as f32) * 0.5);
        map.register(SpriteFollower::new(start, RenderBucket::default()));
    }

    let camera = TiltedCamera { pitch: 0.6 };
    let project = |world: Vec3| camera.screen_y(world);

    let mut totals = FrameReport::default();
    for frame in 0..args.frames {
        let ids: Vec<_> = map.followers().iter().map(|(id, _)| id).collect();
        for id in ids {
            let Some(follower) = map.followers().get(id) else { continue };
            let step = args.speed * map.field().speed_factor_at(follower.position);
            if let Some(follower) = map.followers_mut().get_mut(id) {
                follower.position.z += step;
            }
        }

        let report = map.update(&project);
        log::debug!("frame {frame}: {report:?}");
        totals.scaled += report.scaled;
        totals.bucket_changes += report.bucket_changes;
        totals.resolutions += report.resolutions;
    }

    println!();
    println!("  id    z        scale   bucket        depth");
    for (id, f) in map.followers().iter() {
        println!(
            "  {:<5} {:<8.2} {:<7.3} {:<13} {:.3}",
            id.to_string(),
            f.position.z,
            f.scale,
            f.bucket.to_string(),
            f.depth_offset
        );
    }
    println!();
    println!(
        "  {} frames · {} bucket changes · {} tie-break passes",
        args.frames, totals.bucket_changes, totals.resolutions
    );

    Ok(())
}
