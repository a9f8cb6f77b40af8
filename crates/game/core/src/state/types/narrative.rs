use std::fmt;

use crate::state::NarrativeError;

/// Story progress value. Higher is later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Milestone(pub u16);

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single forward-only story marker gating rules and dialogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NarrativeState {
    current: Milestone,
}

impl NarrativeState {
    pub fn new(start: Milestone) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Milestone {
        self.current
    }

    /// Moves the marker to `to`.
    ///
    /// Re-entering the current milestone is a no-op and returns `Ok(false)`;
    /// going back is refused.
    pub fn advance(&mut self, to: Milestone) -> Result<bool, NarrativeError> {
        if to < self.current {
            return Err(NarrativeError {
                current: self.current,
                requested: to,
            });
        }
        let moved = to != self.current;
        self.current = to;
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_only_moves_forward() {
        let mut narrative = NarrativeState::new(Milestone(10));
        assert_eq!(narrative.advance(Milestone(15)), Ok(true));
        assert_eq!(narrative.advance(Milestone(15)), Ok(false));
        assert_eq!(
            narrative.advance(Milestone(10)),
            Err(NarrativeError {
                current: Milestone(15),
                requested: Milestone(10),
            })
        );
        assert_eq!(narrative.current(), Milestone(15));
    }
}
