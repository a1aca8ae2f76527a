//! ダウンロード計画モジュール
//!
//! 取得したPictorialエントリを1件ずつ照合し、
//! ダウンロード対象（Bioguide ID + 画像URL）とエラー一覧に振り分ける。

use crate::report::{ErrorReason, ReportEntry};
use member_photos_common::{match_bioguide_id, Legislator, PictorialMember};
use serde::Serialize;
use tracing::{info, warn};

/// 写真未登録時のプレースホルダー画像
const NO_PHOTO_IMAGE: &str = "nophotoimage.jpg";

/// ダウンロード対象
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoTask {
    pub bioguide_id: String,
    pub image_url: String,
    #[serde(skip)]
    pub member: PictorialMember,
}

#[derive(Debug, Default)]
pub struct Plan {
    pub tasks: Vec<PhotoTask>,
    pub errors: Vec<ReportEntry>,
}

pub fn has_photo(member: &PictorialMember) -> bool {
    !member.image_url.contains(NO_PHOTO_IMAGE)
}

/// 全エントリを照合して計画を作成
///
/// 照合失敗は致命的にせず `errors` に集約する。
pub fn plan_downloads(members: &[PictorialMember], legislators: &[Legislator]) -> Plan {
    let mut plan = Plan::default();

    for member in members {
        if !has_photo(member) {
            info!(name = %member.display_name(), "no photo available");
            plan.errors.push(ReportEntry::new(
                ErrorReason::NoPhotoAvailable,
                format!("No photo available for {}", member.display_name()),
                member.clone(),
            ));
            continue;
        }

        match match_bioguide_id(member, legislators) {
            Ok(bioguide_id) => plan.tasks.push(PhotoTask {
                bioguide_id,
                image_url: member.image_url.clone(),
                member: member.clone(),
            }),
            Err(e) => {
                warn!("{}", e);
                plan.errors.push(ReportEntry::new(
                    ErrorReason::NoBioguideMatch,
                    e.to_string(),
                    member.clone(),
                ));
            }
        }
    }

    plan
}
