//! Per-dot actuator state

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical position of a dot actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DotPosition {
    /// Flush with the surface
    #[default]
    Retracted,
    /// Raised above the surface
    Raised,
}

impl DotPosition {
    /// Construct from a pattern bit
    pub fn from_raised(raised: bool) -> Self {
        if raised {
            Self::Raised
        } else {
            Self::Retracted
        }
    }

    /// Check whether the dot is raised
    pub fn is_raised(self) -> bool {
        self == Self::Raised
    }

    /// The opposite position
    pub fn opposite(self) -> Self {
        match self {
            Self::Retracted => Self::Raised,
            Self::Raised => Self::Retracted,
        }
    }
}

/// Scheduling state of one dot actuator
///
/// `current` is the committed physical state the output serializer drives;
/// `target` may run ahead of it while a deferred commit is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DotState {
    /// Desired position
    pub target: DotPosition,
    /// Committed physical position
    pub current: DotPosition,
    /// A deferred commit is scheduled
    pub action_pending: bool,
    /// Timestamp (ms) at which the pending commit becomes due
    pub action_at_ms: u32,
}

impl DotState {
    /// True once the committed state matches the target and nothing is pending
    pub fn is_settled(&self) -> bool {
        !self.action_pending && self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_conversions() {
        assert_eq!(DotPosition::from_raised(true), DotPosition::Raised);
        assert_eq!(DotPosition::from_raised(false), DotPosition::Retracted);
        assert!(DotPosition::Raised.is_raised());
        assert!(!DotPosition::Retracted.is_raised());
        assert_eq!(DotPosition::Raised.opposite(), DotPosition::Retracted);
    }

    #[test]
    fn test_new_dot_is_settled_retracted() {
        let dot = DotState::default();
        assert_eq!(dot.current, DotPosition::Retracted);
        assert_eq!(dot.target, DotPosition::Retracted);
        assert!(dot.is_settled());
    }
}
