//! Viewing-session state machine for a generated deck.
//!
//! One session = one non-empty card sequence plus a cursor and a reveal
//! flag. Transitions are explicit so UI layers don't re-derive the rules:
//! navigation clamps at the deck bounds and always hides the answer.

use crate::card::Flashcard;

pub struct DeckSession {
    cards: Vec<Flashcard>,
    index: usize,
    revealed: bool,
}

impl DeckSession {
    /// Start a session at the first card, answer hidden.
    /// Returns `None` for an empty deck — there is nothing to view.
    pub fn new(cards: Vec<Flashcard>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            cards,
            index: 0,
            revealed: false,
        })
    }

    pub fn current(&self) -> &Flashcard {
        &self.cards[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        // Never empty by construction.
        false
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Fraction of the deck viewed so far, counting the current card.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.cards.len() as f64
    }

    /// Advance one card. Clamped at the last card; hides the answer when
    /// it moves. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.index + 1 >= self.cards.len() {
            return false;
        }
        self.index += 1;
        self.revealed = false;
        true
    }

    /// Step back one card. Clamped at the first card; hides the answer
    /// when it moves. Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.revealed = false;
        true
    }

    /// Jump directly to a card. Out-of-bounds targets and the current
    /// index are ignored. Returns whether the cursor moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.cards.len() || index == self.index {
            return false;
        }
        self.index = index;
        self.revealed = false;
        true
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> DeckSession {
        let cards = (0..n)
            .map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}")))
            .collect();
        DeckSession::new(cards).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(DeckSession::new(Vec::new()).is_none());
    }

    #[test]
    fn starts_at_first_card_hidden() {
        let session = deck(3);
        assert_eq!(session.index(), 0);
        assert_eq!(session.current().question, "Q0");
        assert!(!session.revealed());
    }

    #[test]
    fn next_clamps_at_last_card() {
        let mut session = deck(2);
        assert!(session.next());
        assert_eq!(session.index(), 1);
        assert!(!session.next());
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn prev_clamps_at_first_card() {
        let mut session = deck(2);
        assert!(!session.prev());
        assert_eq!(session.index(), 0);
        session.next();
        assert!(session.prev());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn navigation_hides_a_revealed_answer() {
        let mut session = deck(3);
        session.toggle_reveal();
        assert!(session.revealed());
        session.next();
        assert!(!session.revealed());

        session.toggle_reveal();
        session.prev();
        assert!(!session.revealed());

        session.toggle_reveal();
        session.jump_to(2);
        assert!(!session.revealed());
    }

    #[test]
    fn clamped_moves_keep_the_reveal_flag() {
        let mut session = deck(1);
        session.toggle_reveal();
        assert!(!session.next());
        assert!(session.revealed(), "a no-op move must not hide the answer");
    }

    #[test]
    fn jump_to_ignores_out_of_bounds_and_current() {
        let mut session = deck(3);
        assert!(!session.jump_to(3));
        assert!(!session.jump_to(0));
        assert!(session.jump_to(2));
        assert_eq!(session.index(), 2);
    }

    #[test]
    fn toggle_reveal_flips_back_and_forth() {
        let mut session = deck(1);
        session.toggle_reveal();
        assert!(session.revealed());
        session.toggle_reveal();
        assert!(!session.revealed());
    }

    #[test]
    fn progress_counts_the_current_card() {
        let mut session = deck(4);
        assert!((session.progress() - 0.25).abs() < 1e-9);
        session.jump_to(3);
        assert!((session.progress() - 1.0).abs() < 1e-9);
    }
}
