/// One-shot latch behind each animated section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one visibility signal. Returns true only for the signal that
    /// flips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if *self == RevealState::Hidden && visible {
            *self = RevealState::Revealed;
            return true;
        }
        false
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    pub fn class(self) -> &'static str {
        if self.is_revealed() {
            "reveal revealed"
        } else {
            "reveal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_visible_signal() {
        let mut state = RevealState::default();
        let mut seen = Vec::new();
        for visible in [false, true, false, true] {
            let flipped = state.observe(visible);
            seen.push((flipped, state));
        }

        assert_eq!(
            seen,
            [
                (false, RevealState::Hidden),
                (true, RevealState::Revealed),
                (false, RevealState::Revealed),
                (false, RevealState::Revealed),
            ]
        );
    }

    #[test]
    fn stays_hidden_without_visibility() {
        let mut state = RevealState::Hidden;
        for _ in 0..3 {
            assert!(!state.observe(false));
        }
        assert_eq!(state.class(), "reveal");
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut first = RevealState::Hidden;
        let second = RevealState::Hidden;
        first.observe(true);
        assert!(first.is_revealed());
        assert!(!second.is_revealed());
    }
}
