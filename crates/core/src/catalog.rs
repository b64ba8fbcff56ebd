use crate::{Rank, RngState, Suit};
use std::fmt;

pub const ROYAL_RANKS: [Rank; 4] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

pub const BLACK_SUITS: [Suit; 2] = [Suit::Clubs, Suit::Spades];

pub const PAIR_RANKS: [Rank; 9] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskId {
    EvenRankPair,
    HeartCount,
    JokerPresent,
    RoyalPair,
    PairSum,
    Flush,
    RankPair,
    BlackJack,
    RedQueen,
    OddCount,
}

/// A placeholder's candidate pool and how the drawn value renders.
#[derive(Debug, Clone, Copy)]
pub enum ParamDomain {
    Count(&'static [usize]),
    Sum(&'static [u8]),
    Rank(&'static [Rank]),
    // list domains resolve to the whole pool, joined with ", "
    RankList(&'static [Rank]),
    SuitList(&'static [Suit]),
}

impl ParamDomain {
    pub fn resolve(&self, rng: &mut RngState) -> ParamValue {
        match *self {
            ParamDomain::Count(pool) => ParamValue::Count(*rng.choose(pool)),
            ParamDomain::Sum(pool) => ParamValue::Sum(*rng.choose(pool)),
            ParamDomain::Rank(pool) => ParamValue::Rank(*rng.choose(pool)),
            ParamDomain::RankList(ranks) => ParamValue::Ranks(ranks),
            ParamDomain::SuitList(suits) => ParamValue::Suits(suits),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    Count(usize),
    Sum(u8),
    Rank(Rank),
    Ranks(&'static [Rank]),
    Suits(&'static [Suit]),
}

impl ParamValue {
    pub fn render(&self) -> String {
        match self {
            ParamValue::Count(value) => value.to_string(),
            ParamValue::Sum(value) => value.to_string(),
            ParamValue::Rank(rank) => rank.to_string(),
            ParamValue::Ranks(ranks) => join(ranks),
            ParamValue::Suits(suits) => join(suits),
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub domain: ParamDomain,
}

impl ParamSpec {
    pub fn resolve(&self, rng: &mut RngState) -> Param {
        Param {
            name: self.name,
            value: self.domain.resolve(rng),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub value: ParamValue,
}

#[derive(Debug, Clone, Copy)]
pub struct TaskDef {
    pub id: TaskId,
    pub template: &'static str,
    pub params: &'static [ParamSpec],
}

pub const CATALOG: &[TaskDef] = &[
    TaskDef {
        id: TaskId::EvenRankPair,
        template: "Find a Pair of Even Ranks",
        params: &[],
    },
    TaskDef {
        id: TaskId::HeartCount,
        template: "Find exactly {{count}} Heart cards",
        params: &[ParamSpec {
            name: "count",
            domain: ParamDomain::Count(&[3]),
        }],
    },
    TaskDef {
        id: TaskId::JokerPresent,
        template: "Find a Joker",
        params: &[],
    },
    TaskDef {
        id: TaskId::RoyalPair,
        template: "Find a Royal Pair ({{royalRanks}})",
        params: &[ParamSpec {
            name: "royalRanks",
            domain: ParamDomain::RankList(&ROYAL_RANKS),
        }],
    },
    TaskDef {
        id: TaskId::PairSum,
        template: "Find two cards that add up to {{sum}}",
        params: &[ParamSpec {
            name: "sum",
            domain: ParamDomain::Sum(&[10, 12, 15, 16]),
        }],
    },
    TaskDef {
        id: TaskId::Flush,
        template: "Find a Flush ({{count}} cards of the same suit)",
        params: &[ParamSpec {
            name: "count",
            domain: ParamDomain::Count(&[3, 4]),
        }],
    },
    TaskDef {
        id: TaskId::RankPair,
        template: "Find a pair of {{rank}}s",
        params: &[ParamSpec {
            name: "rank",
            domain: ParamDomain::Rank(&PAIR_RANKS),
        }],
    },
    TaskDef {
        id: TaskId::BlackJack,
        template: "Find a Black Jack (a Jack of {{blackSuits}})",
        params: &[ParamSpec {
            name: "blackSuits",
            domain: ParamDomain::SuitList(&BLACK_SUITS),
        }],
    },
    TaskDef {
        id: TaskId::RedQueen,
        template: "Find a Red Queen",
        params: &[],
    },
    TaskDef {
        id: TaskId::OddCount,
        template: "Find {{count}} Odd numbered cards",
        params: &[ParamSpec {
            name: "count",
            domain: ParamDomain::Count(&[3]),
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_missions() {
        assert_eq!(CATALOG.len(), 10);
    }

    #[test]
    fn every_declared_param_appears_in_its_template() {
        for def in CATALOG {
            for spec in def.params {
                let placeholder = format!("{{{{{}}}}}", spec.name);
                assert!(
                    def.template.contains(&placeholder),
                    "{:?} is missing {placeholder}",
                    def.id
                );
            }
        }
    }

    #[test]
    fn fixed_lists_resolve_to_the_whole_pool() {
        let mut rng = RngState::from_seed(1);
        let domain = ParamDomain::RankList(&ROYAL_RANKS);
        assert_eq!(domain.resolve(&mut rng), ParamValue::Ranks(&ROYAL_RANKS));
        let domain = ParamDomain::SuitList(&BLACK_SUITS);
        assert_eq!(domain.resolve(&mut rng), ParamValue::Suits(&BLACK_SUITS));
    }

    #[test]
    fn choice_domains_resolve_from_their_pool() {
        let mut rng = RngState::from_seed(2);
        for _ in 0..50 {
            match ParamDomain::Sum(&[10, 12, 15, 16]).resolve(&mut rng) {
                ParamValue::Sum(sum) => assert!([10, 12, 15, 16].contains(&sum)),
                other => panic!("unexpected value {other:?}"),
            }
            match ParamDomain::Rank(&PAIR_RANKS).resolve(&mut rng) {
                ParamValue::Rank(rank) => assert!(PAIR_RANKS.contains(&rank)),
                other => panic!("unexpected value {other:?}"),
            }
        }
    }

    #[test]
    fn list_values_render_joined() {
        assert_eq!(ParamValue::Ranks(&ROYAL_RANKS).render(), "J, Q, K, A");
        assert_eq!(ParamValue::Suits(&BLACK_SUITS).render(), "♣, ♠");
        assert_eq!(ParamValue::Count(4).render(), "4");
        assert_eq!(ParamValue::Rank(Rank::Seven).render(), "7");
    }
}
