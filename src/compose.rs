use crate::{
    error::{ ComposeError, ComposeResult },
    placement::pixel_offset,
    scan::{ scan_dir, ImageRecord },
    timer::Timer,
};

use image::{
    imageops,
    RgbaImage,
};

use std::path::{ Path, PathBuf };

pub const DEFAULT_OUTPUT: &str = "combined_output.png";

#[derive(Debug, Clone)]
pub struct ComposeConfig{
    pub dir: PathBuf,
    pub output: PathBuf,
    pub strict: bool,
    pub sort: bool,
    pub dry_run: bool,
}

impl Default for ComposeConfig{
    fn default() -> Self{
        Self{
            dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            strict: false,
            sort: false,
            dry_run: false,
        }
    }
}

/// Where one record was pasted.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement{
    pub file_name: String,
    pub index: f64,
    pub x: i64,
}

pub struct Strip{
    pub canvas: RgbaImage,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome{
    NoMatches,
    Saved{ path: PathBuf, width: u32, height: u32, tiles: usize },
    DryRun{ width: u32, height: u32, placements: Vec<Placement> },
}

/// Canvas size for `count` tiles of the given size, one row.
pub fn canvas_dims(count: usize, tile_w: u32, tile_h: u32) -> ComposeResult<(u32, u32)>{
    u32::try_from(count)
        .ok()
        .and_then(|c| c.checked_mul(tile_w))
        .map(|w| (w, tile_h))
        .ok_or(ComposeError::CanvasTooLarge{ count, tile_width: tile_w })
}

fn check_dims(records: &[ImageRecord], w: u32, h: u32) -> ComposeResult<()>{
    for r in records {
        let (fw, fh) = (r.pixels.width(), r.pixels.height());
        if (fw, fh) != (w, h) {
            return Err(ComposeError::DimensionMismatch{
                path: r.path.clone(),
                expected_w: w,
                expected_h: h,
                found_w: fw,
                found_h: fh,
            });
        }
    }
    Ok(())
}

/// Pastes every record into a transparent single row canvas sized from the
/// first record. Tiles replace what is under them, so on equal offsets the
/// later record wins. Every offset uses the first record's width.
/// Returns `None` for no records.
pub fn compose_strip(records: &[ImageRecord], strict: bool) -> ComposeResult<Option<Strip>>{
    let Some(first) = records.first() else {
        return Ok(None);
    };
    let (tile_w, tile_h) = (first.pixels.width(), first.pixels.height());
    if strict {
        check_dims(records, tile_w, tile_h)?;
    }
    let (w, h) = canvas_dims(records.len(), tile_w, tile_h)?;
    let mut canvas = RgbaImage::new(w, h);
    let mut placements = Vec::with_capacity(records.len());
    for r in records {
        let index = r.index();
        let x = pixel_offset(index, tile_w);
        let file_name = r.file_name();
        if x >= w as i64 || x.saturating_add(r.pixels.width() as i64) <= 0 {
            log::debug!("{file_name} lands at x {x}, outside the {w}px canvas");
        } else {
            imageops::replace(&mut canvas, &r.pixels.to_rgba8(), x, 0);
        }
        placements.push(Placement{ file_name, index, x });
    }
    Ok(Some(Strip{ canvas, placements }))
}

fn save(canvas: &RgbaImage, path: &Path) -> ComposeResult<()>{
    canvas.save(path).map_err(|source| ComposeError::Encode{ path: path.to_path_buf(), source })
}

pub fn run(config: &ComposeConfig) -> ComposeResult<Outcome>{
    let mut timer = Timer::new();
    let records = scan_dir(&config.dir, config.sort)?;
    log::debug!("scan: {} records in {}ms", records.len(), timer.lap());

    let Some(Strip{ canvas, placements }) = compose_strip(&records, config.strict)? else {
        return Ok(Outcome::NoMatches);
    };
    let (width, height) = canvas.dimensions();
    log::debug!("composite: {width}x{height} in {}ms", timer.lap());

    if config.dry_run {
        return Ok(Outcome::DryRun{ width, height, placements });
    }

    save(&canvas, &config.output)?;
    log::debug!("write: {} in {}ms", config.output.display(), timer.lap());
    log::info!("done in {}ms", timer.total());
    Ok(Outcome::Saved{ path: config.output.clone(), width, height, tiles: records.len() })
}
