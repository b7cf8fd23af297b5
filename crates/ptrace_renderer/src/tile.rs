//! Tile-based progressive rendering.
//!
//! The image is cut into rectangles and the sample budget into chunks. Every
//! tile of one chunk is rendered before any tile of the next, and inside a
//! chunk the tiles nearest the image center go first, so a viewer sees the
//! whole frame at low quality early and the middle of the frame sharpens
//! before the borders.

use std::cmp::Ordering;
use std::ops::Range;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{AccumulableImage, Camera, RenderConfig, RenderResult, Scene};

/// A rectangle of pixels plus the range of samples to take for each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// First sample index covered
    pub sample_start: u32,
    pub sample_count: u32,
    /// Squared distance from the tile midpoint to the image center, in
    /// half-pixel units
    pub center_distance: u64,
    /// Tie-break between tiles equally far from the center
    pub random_key: f64,
}

impl Tile {
    pub fn x_range(&self) -> Range<u32> {
        self.x..self.x + self.width
    }

    pub fn y_range(&self) -> Range<u32> {
        self.y..self.y + self.height
    }

    pub fn sample_range(&self) -> Range<u32> {
        self.sample_start..self.sample_start + self.sample_count
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Scheduling order: sample chunk, then distance to center, then the
    /// random key.
    fn schedule_cmp(&self, other: &Tile) -> Ordering {
        self.sample_start
            .cmp(&other.sample_start)
            .then(self.center_distance.cmp(&other.center_distance))
            .then(self.random_key.total_cmp(&other.random_key))
    }
}

/// Partition an image and its sample budget into tiles, sorted in render order.
///
/// Edge tiles and the last sample chunk are cut short to fit. Every
/// (pixel, sample) pair belongs to exactly one tile.
///
/// # Panics
///
/// Panics if any size argument is zero.
pub fn generate_tiles(
    tile_width: u32,
    tile_height: u32,
    total_samples: u32,
    samples_per_tile: u32,
    image_width: u32,
    image_height: u32,
    rng: &mut dyn RngCore,
) -> Vec<Tile> {
    assert!(tile_width > 0 && tile_height > 0, "tile size must be positive");
    assert!(samples_per_tile > 0, "samples per tile must be positive");

    let mut tiles = Vec::new();
    for sample_start in (0..total_samples).step_by(samples_per_tile as usize) {
        let sample_count = samples_per_tile.min(total_samples - sample_start);

        for y in (0..image_height).step_by(tile_height as usize) {
            let height = tile_height.min(image_height - y);
            let dy = 2 * y as i64 + height as i64 - image_height as i64;

            for x in (0..image_width).step_by(tile_width as usize) {
                let width = tile_width.min(image_width - x);
                let dx = 2 * x as i64 + width as i64 - image_width as i64;

                tiles.push(Tile {
                    x,
                    y,
                    width,
                    height,
                    sample_start,
                    sample_count,
                    center_distance: (dx * dx + dy * dy) as u64,
                    random_key: rng.gen(),
                });
            }
        }
    }

    tiles.sort_by(Tile::schedule_cmp);
    log::debug!(
        "Generated {} tiles of {}x{} with {} samples each",
        tiles.len(),
        tile_width,
        tile_height,
        samples_per_tile
    );
    tiles
}

/// Result of rendering a tile.
#[derive(Debug, Clone)]
pub struct TileResult {
    /// The tile that was rendered
    pub tile: Tile,
    /// Tile-sized fragment holding the new samples
    pub image: AccumulableImage,
}

/// Take every sample of `tile`, one sweep over its pixels per sample.
pub fn render_tile(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    tile: &Tile,
    rng: &mut dyn RngCore,
) -> TileResult {
    let mut image = AccumulableImage::new(tile.width, tile.height);

    for _ in tile.sample_range() {
        for y in tile.y_range() {
            for x in tile.x_range() {
                let colour = render_pixel(scene, camera, x, y, config, rng);
                image.add_samples(x - tile.x, y - tile.y, colour, 1);
            }
        }
    }

    TileResult { tile: *tile, image }
}

/// Render the scene as tiles spread over `config.max_cpus` threads.
pub fn render_tiled(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> RenderResult<AccumulableImage> {
    render_tiled_with_progress(scene, camera, config, |_, _| {})
}

/// Like [`render_tiled`], calling `on_pass` with the accumulated image and the
/// per-pixel sample count after every sample chunk.
///
/// Each tile draws from its own generator seeded from `config.seed` and the
/// tile's position in the schedule, so a fixed seed gives the same image for
/// any thread count.
pub fn render_tiled_with_progress<F>(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    mut on_pass: F,
) -> RenderResult<AccumulableImage>
where
    F: FnMut(&AccumulableImage, u32),
{
    let (width, height) = (camera.image_width(), camera.image_height());
    let base_seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("Tiled render seed: {}", base_seed);

    let mut order_rng = StdRng::seed_from_u64(base_seed);
    let tiles = generate_tiles(
        config.tile_width,
        config.tile_height,
        config.samples_per_pixel,
        config.samples_per_tile,
        width,
        height,
        &mut order_rng,
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_cpus as usize)
        .build()?;

    log::info!(
        "Rendering {}x{} at {} spp on {} threads ({} tiles)",
        width,
        height,
        config.samples_per_pixel,
        pool.current_num_threads(),
        tiles.len()
    );
    let start = Instant::now();

    let mut image = AccumulableImage::new(width, height);
    let mut first_index = 0;
    for pass in tiles.chunk_by(|a, b| a.sample_start == b.sample_start) {
        let results: Vec<TileResult> = pool.install(|| {
            pass.par_iter()
                .enumerate()
                .map(|(i, tile)| {
                    let seed = base_seed.wrapping_add((first_index + i) as u64 + 1);
                    let mut rng = StdRng::seed_from_u64(seed);
                    render_tile(scene, camera, config, tile, &mut rng)
                })
                .collect()
        });

        for result in &results {
            image.merge_at(&result.image, result.tile.x, result.tile.y)?;
        }
        first_index += pass.len();

        let samples_done = pass[0].sample_range().end;
        log::debug!("{}/{} samples per pixel done", samples_done, config.samples_per_pixel);
        on_pass(&image, samples_done);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(image)
}
