//! Builds the wall segments of a small arena, sweeps the ray around the
//! player and prints what a renderer would draw.
//!
//! ```text
//! cargo run --example trace
//! RUST_LOG=tilecast=trace cargo run --example trace
//! ```

use std::f64::consts::TAU;

use tilecast::math::{Point2, Vector2};
use tilecast::operations::query::HitPolicy;
use tilecast::render::RenderSink;
use tilecast::{GridLayout, Raycaster, Scene, Segment, TileGrid};

const CANVAS_WIDTH: f64 = 1024.0;
const CANVAS_HEIGHT: f64 = 512.0;
const TILE_SIZE: f64 = 32.0;

const ARENA: &str = "
    ########
    #.#....#
    #.#....#
    #.#....#
    #......#
    #....#.#
    #......#
    ########
";

/// Prints primitives instead of drawing them.
struct TextSink {
    frame: u32,
}

impl RenderSink for TextSink {
    fn draw_segment(&mut self, segment: &Segment) {
        if self.frame == 0 {
            println!(
                "  wall ({:>6.1}, {:>6.1}) -> ({:>6.1}, {:>6.1})",
                segment.start.x, segment.start.y, segment.end.x, segment.end.y
            );
        }
    }

    fn draw_hit(&mut self, point: &Point2) {
        println!("  frame {:>2}: hit at ({:>6.1}, {:>6.1})", self.frame, point.x, point.y);
    }
}

fn main() -> tilecast::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tilecast=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let parsed = TileGrid::parse(ARENA, TILE_SIZE, TILE_SIZE)?;
    let layout = GridLayout::square(parsed.rows(), parsed.cols(), TILE_SIZE)?
        .centered_in(CANVAS_WIDTH, CANVAS_HEIGHT)?;
    let grid = TileGrid::new(layout, parsed.tiles().to_vec())?;

    let center = Point2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    let caster = Raycaster::new(center, center + Vector2::new(10.0, 0.0));
    let mut scene = Scene::new(grid, caster)?.with_policy(HitPolicy::Nearest);

    println!("{} wall segments", scene.segments().len());
    let mut sink = TextSink { frame: 0 };
    for frame in 0..12_u32 {
        let angle = TAU * f64::from(frame) / 12.0 + 0.1;
        scene.aim(center + Vector2::new(angle.cos(), angle.sin()) * 100.0);
        sink.frame = frame;
        scene.render(&mut sink);
    }
    Ok(())
}
