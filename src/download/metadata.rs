//! 写真の出所メタデータ（YAMLサイドカー）

use crate::error::Result;
use std::path::{Path, PathBuf};

/// 出所情報
#[derive(Debug, Clone)]
pub struct Provenance {
    pub name: String,
    pub link: String,
}

pub fn metadata_path(metadata_dir: &Path, bioguide_id: &str) -> PathBuf {
    metadata_dir.join(format!("{}.yaml", bioguide_id))
}

/// `{metadata_dir}/{bioguide_id}.yaml` を書き出す
pub fn save_metadata(metadata_dir: &Path, bioguide_id: &str, provenance: &Provenance) -> Result<PathBuf> {
    std::fs::create_dir_all(metadata_dir)?;

    let path = metadata_path(metadata_dir, bioguide_id);
    let content = format!("name: {}\nlink: {}\n", provenance.name, provenance.link);
    std::fs::write(&path, content)?;
    Ok(path)
}
