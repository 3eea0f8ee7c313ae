use crate::{
    error::{ ComposeError, ComposeResult },
    naming::ViewName,
    placement::placement_index,
};

use image::{
    DynamicImage,
    ImageReader as IR,
};

use std::{
    fs,
    path::{ Path, PathBuf },
};

pub struct ImageRecord{
    pub path: PathBuf,
    pub view: ViewName,
    pub pixels: DynamicImage,
}

impl ImageRecord{
    pub fn index(&self) -> f64{
        placement_index(
            self.view.vertical_angle,
            self.view.horizontal_angle,
            self.view.oscillation_offset,
        )
    }

    pub fn file_name(&self) -> String{
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Matching files in `dir`, in directory listing order unless `sort` is set.
pub fn matching_files(dir: &Path, sort: bool) -> ComposeResult<Vec<(PathBuf, ViewName)>>{
    let io_err = |source| ComposeError::Io{ path: dir.to_path_buf(), source };
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::debug!("skipping non utf-8 name {:?}", file_name);
            continue;
        };
        let Some(view) = ViewName::parse(name) else {
            log::debug!("skipping {name}: does not match");
            continue;
        };
        let path = entry.path();
        // follows symlinks, unlike DirEntry::file_type
        let is_file = fs::metadata(&path)
            .map_err(|source| ComposeError::Io{ path: path.clone(), source })?
            .is_file();
        if !is_file {
            log::debug!("skipping {name}: not a regular file");
            continue;
        }
        found.push((path, view));
    }
    if sort {
        found.sort_by(|(a, _), (b, _)| a.cmp(b));
    }
    Ok(found)
}

pub fn load_record(path: PathBuf, view: ViewName) -> ComposeResult<ImageRecord>{
    let pixels = IR::open(&path)
        .map_err(|source| ComposeError::Io{ path: path.clone(), source })?
        .with_guessed_format()
        .map_err(|source| ComposeError::Io{ path: path.clone(), source })?
        .decode()
        .map_err(|source| ComposeError::Decode{ path: path.clone(), source })?;
    log::debug!("loaded {} from camera {} ({}x{})", path.display(), view.camera_id, pixels.width(), pixels.height());
    Ok(ImageRecord{ path, view, pixels })
}

pub fn scan_dir(dir: &Path, sort: bool) -> ComposeResult<Vec<ImageRecord>>{
    matching_files(dir, sort)?
        .into_iter()
        .map(|(path, view)| load_record(path, view))
        .collect()
}
