use crate::{Card, Color, Param, ParamValue, Rank, Suit, TaskId};
use std::collections::HashMap;

/// A mission check with its parameters already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    EvenRankPair,
    HeartCount { count: usize },
    JokerPresent,
    RoyalPair { ranks: &'static [Rank] },
    PairSum { sum: u8 },
    Flush { count: usize },
    RankPair { rank: Rank },
    BlackJack { suits: &'static [Suit] },
    RedQueen,
    OddCount { count: usize },
}

impl Rule {
    /// Panics when a catalog row and its resolved parameters disagree.
    pub fn build(id: TaskId, params: &[Param]) -> Rule {
        match id {
            TaskId::EvenRankPair => Rule::EvenRankPair,
            TaskId::HeartCount => Rule::HeartCount {
                count: count_param(params, "count"),
            },
            TaskId::JokerPresent => Rule::JokerPresent,
            TaskId::RoyalPair => Rule::RoyalPair {
                ranks: ranks_param(params, "royalRanks"),
            },
            TaskId::PairSum => Rule::PairSum {
                sum: sum_param(params, "sum"),
            },
            TaskId::Flush => Rule::Flush {
                count: count_param(params, "count"),
            },
            TaskId::RankPair => Rule::RankPair {
                rank: rank_param(params, "rank"),
            },
            TaskId::BlackJack => Rule::BlackJack {
                suits: suits_param(params, "blackSuits"),
            },
            TaskId::RedQueen => Rule::RedQueen,
            TaskId::OddCount => Rule::OddCount {
                count: count_param(params, "count"),
            },
        }
    }

    pub fn is_satisfied(&self, hand: &[Card]) -> bool {
        match *self {
            Rule::EvenRankPair => count_with_parity(hand, 0) >= 2,
            Rule::HeartCount { count } => {
                hand.iter().filter(|card| card.suit == Suit::Hearts).count() == count
            }
            Rule::JokerPresent => hand.iter().any(Card::is_joker),
            Rule::RoyalPair { ranks } => {
                hand.iter()
                    .filter(|card| !card.is_joker() && ranks.contains(&card.rank))
                    .count()
                    >= 2
            }
            Rule::PairSum { sum } => has_pair_with_sum(hand, sum),
            Rule::Flush { count } => largest_suit_group(hand) >= count,
            Rule::RankPair { rank } => {
                hand.iter().filter(|card| card.rank == rank).count() >= 2
            }
            Rule::BlackJack { suits } => hand
                .iter()
                .any(|card| card.rank == Rank::Jack && suits.contains(&card.suit)),
            Rule::RedQueen => hand
                .iter()
                .any(|card| card.rank == Rank::Queen && card.color() == Color::Red),
            Rule::OddCount { count } => count_with_parity(hand, 1) >= count,
        }
    }
}

fn count_with_parity(hand: &[Card], parity: u8) -> usize {
    hand.iter()
        .filter_map(|card| card.value())
        .filter(|value| value % 2 == parity)
        .count()
}

fn has_pair_with_sum(hand: &[Card], sum: u8) -> bool {
    let values: Vec<u8> = hand.iter().filter_map(|card| card.value()).collect();
    for (i, first) in values.iter().enumerate() {
        for second in &values[i + 1..] {
            if first + second == sum {
                return true;
            }
        }
    }
    false
}

fn largest_suit_group(hand: &[Card]) -> usize {
    let mut counts: HashMap<Suit, usize> = HashMap::new();
    for card in hand {
        if !card.is_joker() {
            *counts.entry(card.suit).or_insert(0) += 1;
        }
    }
    counts.values().copied().max().unwrap_or(0)
}

fn lookup(params: &[Param], name: &str) -> Option<ParamValue> {
    params
        .iter()
        .find(|param| param.name == name)
        .map(|param| param.value)
}

fn count_param(params: &[Param], name: &str) -> usize {
    match lookup(params, name) {
        Some(ParamValue::Count(value)) => value,
        other => panic!("catalog row expected count parameter '{name}', found {other:?}"),
    }
}

fn sum_param(params: &[Param], name: &str) -> u8 {
    match lookup(params, name) {
        Some(ParamValue::Sum(value)) => value,
        other => panic!("catalog row expected sum parameter '{name}', found {other:?}"),
    }
}

fn rank_param(params: &[Param], name: &str) -> Rank {
    match lookup(params, name) {
        Some(ParamValue::Rank(value)) => value,
        other => panic!("catalog row expected rank parameter '{name}', found {other:?}"),
    }
}

fn ranks_param(params: &[Param], name: &str) -> &'static [Rank] {
    match lookup(params, name) {
        Some(ParamValue::Ranks(value)) => value,
        other => panic!("catalog row expected rank list parameter '{name}', found {other:?}"),
    }
}

fn suits_param(params: &[Param], name: &str) -> &'static [Suit] {
    match lookup(params, name) {
        Some(ParamValue::Suits(value)) => value,
        other => panic!("catalog row expected suit list parameter '{name}', found {other:?}"),
    }
}
