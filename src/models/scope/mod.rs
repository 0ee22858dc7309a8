// Scope module
// Resting granularity of the header and paging directions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scope {
    Week,
    #[default]
    Month,
    /// Only held while a drag gesture is morphing between the two
    Transition,
}

impl Scope {
    pub fn is_resting(self) -> bool {
        !matches!(self, Scope::Transition)
    }

    /// The scope a Week/Month drag morphs toward.
    pub fn opposite(self) -> Scope {
        match self {
            Scope::Week => Scope::Month,
            Scope::Month => Scope::Week,
            Scope::Transition => Scope::Transition,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn step(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}
