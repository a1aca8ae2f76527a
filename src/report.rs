//! エラーレポートモジュール
//!
//! 照合できなかった・写真がなかった・ダウンロードに失敗したエントリを
//! 集約し、実行終了時にJSONで書き出す。

use crate::error::Result;
use chrono::{DateTime, Utc};
use member_photos_common::PictorialMember;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// エラー理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorReason {
    NoPhotoAvailable,
    NoBioguideMatch,
    DownloadFailed,
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorReason::NoPhotoAvailable => write!(f, "No photo available"),
            ErrorReason::NoBioguideMatch => write!(f, "No Bioguide ID match"),
            ErrorReason::DownloadFailed => write!(f, "Download failed"),
        }
    }
}

/// レポートの1行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub reason: ErrorReason,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bioguide_id: Option<String>,
    /// Pictorial APIのエントリ（取得時のまま）
    pub member: PictorialMember,
}

impl ReportEntry {
    pub fn new(reason: ErrorReason, detail: impl Into<String>, member: PictorialMember) -> Self {
        Self {
            reason,
            detail: detail.into(),
            bioguide_id: None,
            member,
        }
    }

    pub fn with_bioguide_id(mut self, bioguide_id: impl Into<String>) -> Self {
        self.bioguide_id = Some(bioguide_id.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub generated_at: DateTime<Utc>,
    pub congress: u32,
    pub entries: Vec<ReportEntry>,
}

impl ErrorReport {
    pub fn new(congress: u32) -> Self {
        Self {
            generated_at: Utc::now(),
            congress,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = ReportEntry>) {
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 理由別の件数
    pub fn count(&self, reason: ErrorReason) -> usize {
        self.entries.iter().filter(|e| e.reason == reason).count()
    }

    /// レポートを書き出す。空なら何もしない
    ///
    /// 書き出した場合は `true` を返す。
    pub fn write(&self, path: &Path) -> Result<bool> {
        if self.is_empty() {
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(true)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> PictorialMember {
        PictorialMember {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(ErrorReason::NoPhotoAvailable.to_string(), "No photo available");
        assert_eq!(ErrorReason::NoBioguideMatch.to_string(), "No Bioguide ID match");
    }

    #[test]
    fn test_count_by_reason() {
        let mut report = ErrorReport::new(118);
        report.push(ReportEntry::new(ErrorReason::NoPhotoAvailable, "", member("A, B")));
        report.push(ReportEntry::new(ErrorReason::NoBioguideMatch, "x", member("C, D")));
        report.push(ReportEntry::new(ErrorReason::NoBioguideMatch, "y", member("E, F")));

        assert_eq!(report.len(), 3);
        assert_eq!(report.count(ErrorReason::NoBioguideMatch), 2);
        assert_eq!(report.count(ErrorReason::DownloadFailed), 0);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = ReportEntry::new(ErrorReason::DownloadFailed, "404", member("A, B"))
            .with_bioguide_id("A000001");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"reason\":\"DownloadFailed\""));
        assert!(json.contains("\"bioguideId\":\"A000001\""));
    }
}
