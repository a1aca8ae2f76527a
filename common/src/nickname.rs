//! 愛称テーブル
//!
//! Pictorial側の名（愛称）→ congress-legislators側の名。
//! 実データで観測された不一致のみを収録した固定テーブル。

/// 愛称 → 正式名（キーは大文字小文字を区別して完全一致）
pub const COMMON_NICKNAMES: &[(&str, &str)] = &[
    ("Nick", "Nicolas"),
    ("Daniel", "Dan"),
    ("Mike", "Michael"),
    ("Richard", "Rich"),
    ("Christopher", "Chris"),
];

/// 愛称に対応する名を取得
pub fn formal_name(nickname: &str) -> Option<&'static str> {
    COMMON_NICKNAMES
        .iter()
        .find(|(key, _)| *key == nickname)
        .map(|(_, formal)| *formal)
}
