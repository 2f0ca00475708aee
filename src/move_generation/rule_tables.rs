//! Per-role validator tables.
//!
//! Each geometry candidate is compiled once into a validator chain. Two
//! tables are kept: `legal`, whose chains end with the king-safety check, and
//! `attacks`, which omits king safety, pushes and castling. The threat zone
//! only ever consults `attacks`, so evaluating king safety never recurses
//! into itself.
//!
//! Both tables are built lazily on first use and are immutable afterwards.

use std::sync::OnceLock;

use log::debug;

use crate::game_state::chess_types::{CastleSide, MoveRole};
use crate::move_generation::validators::{Check, Step, Validator};
use crate::moves::geometry::candidates_for;
use crate::moves::move_descriptions::Candidate;

struct RuleTables {
    legal: [Vec<Validator>; 7],
    attacks: [Vec<Validator>; 7],
}

static RULE_TABLES: OnceLock<RuleTables> = OnceLock::new();

fn tables() -> &'static RuleTables {
    RULE_TABLES.get_or_init(|| {
        let built = RuleTables {
            legal: MoveRole::ALL.map(|role| {
                candidates_for(role)
                    .iter()
                    .map(|c| legal_validator(c).and(Check::KingSafe))
                    .collect()
            }),
            attacks: MoveRole::ALL.map(|role| {
                candidates_for(role)
                    .iter()
                    .filter_map(attack_validator)
                    .collect()
            }),
        };
        debug!(
            "rule tables built: {} legal chains, {} attack chains",
            built.legal.iter().map(Vec::len).sum::<usize>(),
            built.attacks.iter().map(Vec::len).sum::<usize>()
        );
        built
    })
}

/// Full legality chains for `role`, king safety included.
#[inline]
pub fn legal_rules(role: MoveRole) -> &'static [Validator] {
    &tables().legal[role.index()]
}

/// Attack chains for `role`, without king safety.
#[inline]
pub fn attack_rules(role: MoveRole) -> &'static [Validator] {
    &tables().attacks[role.index()]
}

/// Every square of the path strictly before the last must be empty; the
/// last is only required to be on the board.
fn clear_path(path: &[(i8, i8)]) -> Validator {
    let (last, before) = match path.split_last() {
        Some(split) => split,
        None => return Validator::All(Vec::new()),
    };
    let mut stages: Vec<Validator> = before
        .iter()
        .map(|&d| Validator::probe(Check::Inside, d).and(Check::Empty))
        .collect();
    stages.push(Validator::probe(Check::Inside, *last));
    Validator::All(stages)
}

fn legal_validator(candidate: &Candidate) -> Validator {
    match candidate {
        Candidate::Jump(d) => Validator::probe(Check::Inside, *d).and(Check::NoFriend),
        Candidate::Slide(path) => clear_path(path).and(Check::NoFriend),
        Candidate::PawnPush(d) => Validator::probe(Check::Inside, *d).and(Check::Empty),
        Candidate::PawnDoublePush { through, to } => Validator::All(vec![
            Validator::probe(Check::Inside, *through).and(Check::Empty),
            Validator::probe(Check::Inside, *to).and(Check::EmptyOnStartRank),
        ]),
        Candidate::PawnCapture(d) => Validator::probe(Check::Inside, *d)
            .and(Step::from(Check::EnPassant).or(Check::Enemy.into())),
        Candidate::Castle(side, d) => {
            let check = match side {
                CastleSide::Short => Check::ShortCastle,
                CastleSide::Long => Check::LongCastle,
            };
            Validator::probe(Check::Inside, *d).and(check)
        }
    }
}

/// Attacks reach the first occupied square of either side, so a defended
/// piece counts as attacked. Pawns attack their diagonals whether or not
/// anything stands there.
fn attack_validator(candidate: &Candidate) -> Option<Validator> {
    if !candidate.attacks() {
        return None;
    }
    Some(match candidate {
        Candidate::Slide(path) => clear_path(path),
        other => Validator::probe(Check::Inside, other.destination_delta()),
    })
}
