//! Member Photos Common Library
//!
//! 議員エントリの型・パーサーと、Bioguide ID照合ロジック（照合自体はI/Oなし）

pub mod types;
pub mod nickname;
pub mod matcher;
pub mod parser;
pub mod error;

pub use types::{Legislator, LegislatorIds, LegislatorName, MemberType, PictorialMember, Term, TermType};
pub use nickname::{formal_name, COMMON_NICKNAMES};
pub use matcher::{find_candidates, holds_office, match_bioguide_id, name_match_rule, NameRule};
pub use parser::{count_by_chamber, legislators_from_file, members_from_file, parse_legislators, parse_members_pictorial};
pub use error::{Error, MatchError, Result};
