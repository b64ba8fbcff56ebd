use crate::{Card, Rank, RngState, Suit};

pub const DECK_SIZE: usize = 54;
pub const JOKER_COUNT: usize = 2;

pub const HAND_MIN: usize = 2;
pub const HAND_MAX: usize = 5;

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn standard54() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::standard(suit, rank));
            }
        }
        for _ in 0..JOKER_COUNT {
            cards.push(Card::joker());
        }
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        debug_assert!(count <= self.cards.len(), "deal past the end of the deck");
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn deal_hand(&mut self, rng: &mut RngState) -> Vec<Card> {
        let size = HAND_MIN + rng.pick_index(HAND_MAX - HAND_MIN + 1);
        self.deal(size)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
