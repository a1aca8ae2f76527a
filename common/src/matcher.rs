//! Bioguide ID照合モジュール
//!
//! Pictorialエントリ1件を congress-legislators の候補群と照合し、
//! 名前・議院・州がすべて一致する唯一の候補のBioguide IDを返す。
//!
//! ## 照合手順
//! 1. 名前の同一判定（優先順に評価し、最初に成立した規則で確定）
//! 2. 最新任期の議院・州の一致判定（選挙区は比較しない）
//! 3. 一致が1件ならID、0件ならNotFound、複数ならAmbiguous

use crate::error::MatchError;
use crate::nickname::formal_name;
use crate::types::{Legislator, PictorialMember};
use tracing::debug;

/// 成立した名前規則
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// 名が完全一致
    ExactFirst,
    /// 候補の愛称が名と一致
    Nickname,
    /// 名が候補の名に含まれる（"Charles (Chuck)" など）
    FirstContains,
    /// 名が候補のミドルネームに含まれる
    MiddleContains,
    /// 愛称テーブル経由で一致
    NicknameTable,
    /// 姓名が入れ替わった状態で一致
    Swapped,
}

type NamePredicate = fn(&PictorialMember, &Legislator) -> bool;

/// 姓一致後に評価する規則（評価順）
const DIRECT_RULES: &[(NameRule, NamePredicate)] = &[
    (NameRule::ExactFirst, exact_first),
    (NameRule::Nickname, nickname_equals_first),
    (NameRule::FirstContains, first_contains),
    (NameRule::MiddleContains, middle_contains),
    (NameRule::NicknameTable, nickname_table),
];

/// 姓の内部スペースを除去（"Leger Fernandez" → "LegerFernandez"）
fn squash_last(candidate: &Legislator) -> String {
    candidate.name.last.replace(' ', "")
}

fn exact_first(source: &PictorialMember, candidate: &Legislator) -> bool {
    candidate.name.first == source.first_name
}

fn nickname_equals_first(source: &PictorialMember, candidate: &Legislator) -> bool {
    candidate.name.nickname.as_deref() == Some(source.first_name.as_str())
}

fn first_contains(source: &PictorialMember, candidate: &Legislator) -> bool {
    candidate.name.first.contains(source.first_name.as_str())
}

fn middle_contains(source: &PictorialMember, candidate: &Legislator) -> bool {
    candidate
        .name
        .middle
        .as_deref()
        .is_some_and(|middle| middle.contains(source.first_name.as_str()))
}

fn nickname_table(source: &PictorialMember, candidate: &Legislator) -> bool {
    formal_name(&source.first_name).is_some_and(|formal| formal == candidate.name.first)
}

fn swapped(source: &PictorialMember, candidate: &Legislator) -> bool {
    candidate.name.first == source.last_name
        && (squash_last(candidate) == source.first_name
            || nickname_equals_first(source, candidate))
}

/// 名前の同一判定。成立した規則を返す
///
/// 入れ替わり判定は通常順の規則がすべて不成立の場合のみ評価する。
pub fn name_match_rule(source: &PictorialMember, candidate: &Legislator) -> Option<NameRule> {
    if squash_last(candidate) == source.last_name {
        let direct = DIRECT_RULES
            .iter()
            .find(|(_, predicate)| predicate(source, candidate))
            .map(|(rule, _)| *rule);
        if direct.is_some() {
            return direct;
        }
    }

    swapped(source, candidate).then_some(NameRule::Swapped)
}

/// 最新任期の議院・州が一致するか
pub fn holds_office(source: &PictorialMember, candidate: &Legislator) -> bool {
    let Some(chamber) = source.chamber() else {
        return false;
    };

    candidate
        .most_recent_term()
        .is_some_and(|term| term.state == source.state_id && term.term_type == chamber.term_type())
}

/// 名前・議席の両方を満たす候補をすべて抽出
pub fn find_candidates<'a>(
    source: &PictorialMember,
    candidates: &'a [Legislator],
) -> Vec<&'a Legislator> {
    candidates
        .iter()
        .filter(|candidate| match name_match_rule(source, candidate) {
            Some(rule) => {
                let office = holds_office(source, candidate);
                debug!(
                    source = %source.display_name(),
                    bioguide = candidate.bioguide_id(),
                    ?rule,
                    office,
                    "name matched"
                );
                office
            }
            None => false,
        })
        .collect()
}

/// Bioguide IDを照合
///
/// # Errors
/// 一致が0件なら `MatchError::NotFound`、複数なら `MatchError::Ambiguous`。
pub fn match_bioguide_id(
    source: &PictorialMember,
    candidates: &[Legislator],
) -> Result<String, MatchError> {
    let matches = find_candidates(source, candidates);

    match matches.as_slice() {
        [only] => Ok(only.bioguide_id().to_string()),
        [] => Err(MatchError::NotFound {
            name: source.display_name(),
        }),
        many => Err(MatchError::Ambiguous {
            name: source.display_name(),
            count: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LegislatorIds, LegislatorName, Term, TermType};

    fn source(last: &str, first: &str, member_type: &str, state: &str) -> PictorialMember {
        PictorialMember {
            name: format!("{}, {}", last, first),
            last_name: last.to_string(),
            first_name: first.to_string(),
            member_type: member_type.to_string(),
            state_id: state.to_string(),
            ..Default::default()
        }
    }

    fn legislator(id: &str, first: &str, last: &str, term: TermType, state: &str) -> Legislator {
        Legislator {
            id: LegislatorIds {
                bioguide: id.to_string(),
                ..Default::default()
            },
            name: LegislatorName {
                first: first.to_string(),
                last: last.to_string(),
                ..Default::default()
            },
            terms: vec![Term {
                term_type: term,
                state: state.to_string(),
                start: "2023-01-03".to_string(),
                end: None,
                district: None,
            }],
        }
    }

    #[test]
    fn test_identical_names_match_exact_first() {
        let src = source("Smith", "Adam", "Representative", "WA");
        let cand = legislator("S000510", "Adam", "Smith", TermType::Rep, "WA");
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::ExactFirst));
    }

    #[test]
    fn test_rule_order_exact_before_contains() {
        // "Ann" は "Ann" に完全一致し、同時に部分一致でもある
        let src = source("Wagner", "Ann", "Representative", "MO");
        let cand = legislator("W000812", "Ann", "Wagner", TermType::Rep, "MO");
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::ExactFirst));
    }

    #[test]
    fn test_nickname_field() {
        let src = source("Hassan", "Maggie", "Senator", "NH");
        let mut cand = legislator("H001076", "Margaret", "Hassan", TermType::Sen, "NH");
        cand.name.nickname = Some("Maggie".to_string());
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::Nickname));
    }

    #[test]
    fn test_middle_contains() {
        let src = source("Franklin", "Scott", "Representative", "FL");
        let mut cand = legislator("F000472", "C.", "Franklin", TermType::Rep, "FL");
        cand.name.middle = Some("Scott".to_string());
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::MiddleContains));
    }

    #[test]
    fn test_nickname_table_rule() {
        let src = source("LaLota", "Nick", "Representative", "NY");
        let cand = legislator("L000598", "Nicolas", "LaLota", TermType::Rep, "NY");
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::NicknameTable));
    }

    #[test]
    fn test_nickname_table_is_case_sensitive() {
        let src = source("LaLota", "nick", "Representative", "NY");
        let cand = legislator("L000598", "Nicolas", "LaLota", TermType::Rep, "NY");
        assert_eq!(name_match_rule(&src, &cand), None);
    }

    #[test]
    fn test_swapped_by_last_name() {
        let src = source("John", "Hickenlooper", "Senator", "CO");
        let cand = legislator("H000273", "John", "Hickenlooper", TermType::Sen, "CO");
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::Swapped));
    }

    #[test]
    fn test_swapped_by_nickname() {
        let src = source("Robert", "Bobby", "Representative", "VA");
        let mut cand = legislator("S000185", "Robert", "Scott", TermType::Rep, "VA");
        cand.name.nickname = Some("Bobby".to_string());
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::Swapped));
    }

    #[test]
    fn test_direct_wins_over_swapped() {
        // 通常順でも入れ替わりでも一致する候補: 通常順が優先
        let src = source("Lee", "Lee", "Representative", "NV");
        let cand = legislator("L000590", "Lee", "Lee", TermType::Rep, "NV");
        assert_eq!(name_match_rule(&src, &cand), Some(NameRule::ExactFirst));
    }

    #[test]
    fn test_last_name_only_is_not_enough() {
        // 姓は一致するが名の規則も入れ替わりも不成立
        let src = source("Lee", "Susie", "Representative", "NV");
        let cand = legislator("L000582", "Lee", "Lee", TermType::Rep, "NV");
        assert_eq!(name_match_rule(&src, &cand), None);
    }

    #[test]
    fn test_last_name_mismatch() {
        let src = source("Booker", "Cory", "Senator", "NJ");
        let cand = legislator("M000639", "Cory", "Menendez", TermType::Sen, "NJ");
        assert_eq!(name_match_rule(&src, &cand), None);
    }

    #[test]
    fn test_office_uses_most_recent_term_only() {
        let src = source("Schiff", "Adam", "Senator", "CA");
        let mut cand = legislator("S001150", "Adam", "Schiff", TermType::Rep, "CA");
        assert!(!holds_office(&src, &cand));

        cand.terms.push(Term {
            term_type: TermType::Sen,
            state: "CA".to_string(),
            start: "2024-12-09".to_string(),
            end: None,
            district: None,
        });
        assert!(holds_office(&src, &cand));
    }

    #[test]
    fn test_office_state_mismatch() {
        let src = source("Smith", "Adam", "Representative", "WA");
        let cand = legislator("S000510", "Adam", "Smith", TermType::Rep, "NJ");
        assert!(!holds_office(&src, &cand));
    }

    #[test]
    fn test_office_without_terms() {
        let src = source("Smith", "Adam", "Representative", "WA");
        let mut cand = legislator("S000510", "Adam", "Smith", TermType::Rep, "WA");
        cand.terms.clear();
        assert!(!holds_office(&src, &cand));
    }

    #[test]
    fn test_office_ignores_district() {
        let mut src = source("Smith", "Adam", "Representative", "WA");
        src.district = Some(9);
        let mut cand = legislator("S000510", "Adam", "Smith", TermType::Rep, "WA");
        cand.terms[0].district = Some(3);
        assert!(holds_office(&src, &cand));
    }

    #[test]
    fn test_match_single() {
        let src = source("Smith", "Adam", "Representative", "WA");
        let candidates = vec![
            legislator("S000510", "Adam", "Smith", TermType::Rep, "WA"),
            legislator("S001172", "Adrian", "Smith", TermType::Rep, "NE"),
        ];
        assert_eq!(match_bioguide_id(&src, &candidates), Ok("S000510".to_string()));
    }

    #[test]
    fn test_match_not_found() {
        let src = source("Nobody", "Jane", "Senator", "ZZ");
        let candidates = vec![legislator("S000510", "Adam", "Smith", TermType::Rep, "WA")];
        assert_eq!(
            match_bioguide_id(&src, &candidates),
            Err(MatchError::NotFound { name: "Nobody, Jane".to_string() })
        );
    }

    #[test]
    fn test_match_empty_candidates() {
        let src = source("Smith", "Adam", "Representative", "WA");
        assert!(matches!(
            match_bioguide_id(&src, &[]),
            Err(MatchError::NotFound { .. })
        ));
    }

    #[test]
    fn test_match_ambiguous() {
        let src = source("Smith", "Adam", "Representative", "WA");
        let candidates = vec![
            legislator("S000510", "Adam", "Smith", TermType::Rep, "WA"),
            legislator("S999999", "Adam", "Smith", TermType::Rep, "WA"),
        ];
        assert_eq!(
            match_bioguide_id(&src, &candidates),
            Err(MatchError::Ambiguous { name: "Smith, Adam".to_string(), count: 2 })
        );
    }

    #[test]
    fn test_match_name_ok_but_wrong_chamber() {
        let src = source("Smith", "Adam", "Senator", "WA");
        let candidates = vec![legislator("S000510", "Adam", "Smith", TermType::Rep, "WA")];
        assert!(matches!(
            match_bioguide_id(&src, &candidates),
            Err(MatchError::NotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_member_type_never_holds_office() {
        let src = source("Norton", "Eleanor", "Delegate", "DC");
        let cand = legislator("N000147", "Eleanor", "Norton", TermType::Rep, "DC");
        assert!(!holds_office(&src, &cand));
    }
}
