//! The five ordered presentation screens.

use serde::{Deserialize, Serialize};

/// One of the five ordered screens of the story.
///
/// The derived `Ord` follows declaration order, so a transition is legal
/// only when the target compares strictly greater than the source — and in
/// practice only when it is the immediate successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Screen {
    /// The two-step secret-knowledge check.
    Gate,
    /// The greeting after the gate opens.
    Welcome,
    /// The fixed journey timeline.
    Timeline,
    /// The randomized affirmation reveal.
    Reveal,
    /// The two-outcome decision point.
    Proposal,
}

impl Screen {
    /// Returns the next screen in the fixed order, or `None` from the last.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Gate => Some(Self::Welcome),
            Self::Welcome => Some(Self::Timeline),
            Self::Timeline => Some(Self::Reveal),
            Self::Reveal => Some(Self::Proposal),
            Self::Proposal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_order_is_strictly_increasing() {
        assert!(Screen::Gate < Screen::Welcome);
        assert!(Screen::Welcome < Screen::Timeline);
        assert!(Screen::Timeline < Screen::Reveal);
        assert!(Screen::Reveal < Screen::Proposal);
    }

    #[test]
    fn test_next_walks_the_full_order_once() {
        let mut screen = Screen::Gate;
        let mut visited = vec![screen];
        while let Some(next) = screen.next() {
            assert!(next > screen);
            screen = next;
            visited.push(screen);
        }

        assert_eq!(
            visited,
            vec![
                Screen::Gate,
                Screen::Welcome,
                Screen::Timeline,
                Screen::Reveal,
                Screen::Proposal,
            ]
        );
    }

    #[test]
    fn test_proposal_has_no_successor() {
        assert!(Screen::Proposal.next().is_none());
    }
}
