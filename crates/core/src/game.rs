//! Session-level operations. Callers own the hand, the active task and
//! the rng; every function here takes what it reads and returns what
//! changes.

use crate::{evaluate, select_task, ActiveTask, Card, Deck, RngState};

pub fn request_new_hand(rng: &mut RngState) -> Vec<Card> {
    let mut deck = Deck::standard54();
    deck.shuffle(rng);
    deck.deal_hand(rng)
}

/// The caller is expected to drop its hand when it accepts a new mission.
pub fn request_new_task(rng: &mut RngState) -> ActiveTask {
    select_task(rng)
}

pub fn is_complete(task: Option<&ActiveTask>, hand: &[Card]) -> bool {
    evaluate(task, hand)
}
