//! 照合対象データの型定義
//!
//! 2つの外部ソースから取得する型:
//! - PictorialMember: GPO Pictorial APIのエントリ（照合元）
//! - Legislator: congress-legislatorsのエントリ（照合先）

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 議院種別（Pictorial側の `memberType`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberType {
    Senator,
    Representative,
}

impl MemberType {
    /// 文字列から変換（それ以外の種別はNone）
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Senator" => Some(MemberType::Senator),
            "Representative" => Some(MemberType::Representative),
            _ => None,
        }
    }

    /// 対応する任期種別（sen/rep）
    pub fn term_type(&self) -> TermType {
        match self {
            MemberType::Senator => TermType::Sen,
            MemberType::Representative => TermType::Rep,
        }
    }
}

impl std::fmt::Display for MemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberType::Senator => write!(f, "Senator"),
            MemberType::Representative => write!(f, "Representative"),
        }
    }
}

/// Pictorial APIの議員エントリ
///
/// 照合に使わないフィールドも `extra` に保持し、エラーレポートでそのまま出力する。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictorialMember {
    /// 表示名（例: "Booker, Cory A."）
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub last_name: String,

    /// 姓と入れ替わっていたり、複合姓が詰められていることがある
    #[serde(default)]
    pub first_name: String,

    /// "Senator" / "Representative" / その他（Delegate等）
    #[serde(default)]
    pub member_type: String,

    #[serde(default)]
    pub state_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<u32>,

    #[serde(default)]
    pub image_url: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PictorialMember {
    /// 議院種別（上院/下院以外はNone）
    pub fn chamber(&self) -> Option<MemberType> {
        MemberType::parse(&self.member_type)
    }

    /// 診断用の表示名（`name` が空なら "姓, 名"）
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("{}, {}", self.last_name, self.first_name)
        } else {
            self.name.clone()
        }
    }
}

/// 任期種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermType {
    Sen,
    Rep,
    #[serde(other)]
    Other,
}

/// 任期（1つの議席を継続して保持した期間）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "type")]
    pub term_type: TermType,

    pub state: String,

    #[serde(default)]
    pub start: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<i32>,
}

/// 議員の識別子群
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegislatorIds {
    /// Bioguide ID（安定識別子）
    pub bioguide: String,

    /// lis, thomas, govtrack 等
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// 議員の氏名
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegislatorName {
    pub first: String,

    pub last: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_full: Option<String>,
}

/// congress-legislatorsの議員エントリ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Legislator {
    pub id: LegislatorIds,

    pub name: LegislatorName,

    /// 時系列順。末尾が最新の任期
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl Legislator {
    pub fn bioguide_id(&self) -> &str {
        &self.id.bioguide
    }

    /// 最新の任期
    pub fn most_recent_term(&self) -> Option<&Term> {
        self.terms.last()
    }
}
