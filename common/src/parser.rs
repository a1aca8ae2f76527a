//! 取得データのパース
//!
//! HTTPレスポンス本文・保存済みJSONファイルの両方から読み込めるよう、
//! 文字列を受け取る関数を基本にする。

use crate::error::{Error, Result};
use crate::types::{Legislator, MemberType, PictorialMember};
use serde::Deserialize;
use std::path::Path;

/// 空席エントリの表示名
const VACANT_NAME: &str = "Vacant, Vacant";

/// GetMembers APIのレスポンス
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuideMembersResponse {
    member_collection: Option<Vec<PictorialMember>>,
}

/// GetMembersレスポンスから上院・下院議員のみを抽出
///
/// Delegate等の種別と空席エントリは除外する。
pub fn parse_members_pictorial(json: &str) -> Result<Vec<PictorialMember>> {
    let response: GuideMembersResponse = serde_json::from_str(json)?;
    let members = response
        .member_collection
        .ok_or_else(|| Error::Format("memberCollection not found".into()))?;

    Ok(members
        .into_iter()
        .filter(|m| m.chamber().is_some() && m.name != VACANT_NAME)
        .collect())
}

/// legislators-*.json をパース
pub fn parse_legislators(json: &str) -> Result<Vec<Legislator>> {
    Ok(serde_json::from_str(json)?)
}

/// 保存済みGetMembersレスポンスを読み込み
pub fn members_from_file(path: &Path) -> Result<Vec<PictorialMember>> {
    let content = std::fs::read_to_string(path)?;
    parse_members_pictorial(&content)
}

/// 保存済みlegislators JSONを読み込み
pub fn legislators_from_file(path: &Path) -> Result<Vec<Legislator>> {
    let content = std::fs::read_to_string(path)?;
    parse_legislators(&content)
}

/// 上院・下院の人数
pub fn count_by_chamber(members: &[PictorialMember]) -> (usize, usize) {
    members.iter().fold((0, 0), |(sen, rep), m| match m.chamber() {
        Some(MemberType::Senator) => (sen + 1, rep),
        Some(MemberType::Representative) => (sen, rep + 1),
        None => (sen, rep),
    })
}
