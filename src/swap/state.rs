//! Linear stage machine for a swap run.
//!
//! ```text
//! Idle → Wrapping → Approving → Swapping → Done
//!   └───────┴──────────┴───────────┴──────→ Failed
//! ```

use serde::Serialize;

/// Stage of a swap run. Each forward transition happens only after the
/// previous step's receipt has been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStage {
    Idle,
    Wrapping,
    Approving,
    Swapping,
    Done,
    Failed,
}

impl SwapStage {
    /// The stage after a successful step, if any.
    pub fn next(self) -> Option<SwapStage> {
        match self {
            SwapStage::Idle => Some(SwapStage::Wrapping),
            SwapStage::Wrapping => Some(SwapStage::Approving),
            SwapStage::Approving => Some(SwapStage::Swapping),
            SwapStage::Swapping => Some(SwapStage::Done),
            SwapStage::Done | SwapStage::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SwapStage::Done | SwapStage::Failed)
    }

    pub fn can_transition_to(self, to: SwapStage) -> bool {
        match to {
            SwapStage::Failed => !self.is_terminal(),
            _ => self.next() == Some(to),
        }
    }

    /// Name of the work done while in this stage, for user-facing errors.
    pub fn step_name(self) -> &'static str {
        match self {
            SwapStage::Idle => "Balance check",
            SwapStage::Wrapping => "Wrap",
            SwapStage::Approving => "Approval",
            SwapStage::Swapping => "Swap",
            SwapStage::Done => "Completion",
            SwapStage::Failed => "Failed run",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwapStage::Idle => "idle",
            SwapStage::Wrapping => "wrapping",
            SwapStage::Approving => "approving",
            SwapStage::Swapping => "swapping",
            SwapStage::Done => "done",
            SwapStage::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SwapStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_names() {
        assert_eq!(SwapStage::Idle.step_name(), "Balance check");
        assert_eq!(SwapStage::Wrapping.step_name(), "Wrap");
        assert_eq!(SwapStage::Swapping.step_name(), "Swap");
    }

    #[test]
    fn test_forward_path() {
        let mut stage = SwapStage::Idle;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            assert!(stage.can_transition_to(next));
            stage = next;
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                SwapStage::Idle,
                SwapStage::Wrapping,
                SwapStage::Approving,
                SwapStage::Swapping,
                SwapStage::Done
            ]
        );
    }

    #[test]
    fn test_no_skipping_or_leaving_terminal() {
        assert!(!SwapStage::Idle.can_transition_to(SwapStage::Approving));
        assert!(!SwapStage::Wrapping.can_transition_to(SwapStage::Swapping));
        assert!(!SwapStage::Done.can_transition_to(SwapStage::Failed));
        assert!(!SwapStage::Failed.can_transition_to(SwapStage::Idle));
        assert!(SwapStage::Approving.can_transition_to(SwapStage::Failed));
    }
}
