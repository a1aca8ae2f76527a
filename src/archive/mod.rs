//! 写真アーカイブ（保存先フォルダ）の参照
//!
//! 保存ファイル名は `{Bioguide ID}.jpg` 固定。

use crate::download::metadata::metadata_path;
use crate::error::{PhotoError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const PHOTO_EXTENSION: &str = "jpg";

#[derive(Debug, Clone)]
pub struct ArchivedPhoto {
    pub bioguide_id: String,
    pub path: PathBuf,
    pub size: u64,
    pub has_metadata: bool,
}

/// Bioguide IDから保存先パスを決定
pub fn photo_path(outdir: &Path, bioguide_id: &str) -> PathBuf {
    outdir.join(format!("{}.{}", bioguide_id, PHOTO_EXTENSION))
}

pub fn is_archived(outdir: &Path, bioguide_id: &str) -> bool {
    photo_path(outdir, bioguide_id).is_file()
}

/// 保存済み写真の一覧（Bioguide ID順）
pub fn scan_archive(outdir: &Path, metadata_dir: &Path) -> Result<Vec<ArchivedPhoto>> {
    if !outdir.exists() {
        return Err(PhotoError::FolderNotFound(outdir.display().to_string()));
    }

    let mut photos = Vec::new();

    for entry in WalkDir::new(outdir)
        .max_depth(1)  // 直下のみ（リサイズ済みサブフォルダは対象外）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || path.extension().map_or(true, |e| e != PHOTO_EXTENSION) {
            continue;
        }

        let Some(bioguide_id) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        let has_metadata = metadata_path(metadata_dir, &bioguide_id).is_file();

        photos.push(ArchivedPhoto {
            bioguide_id,
            path: path.to_path_buf(),
            size,
            has_metadata,
        });
    }

    photos.sort_by(|a, b| a.bioguide_id.cmp(&b.bioguide_id));

    Ok(photos)
}
