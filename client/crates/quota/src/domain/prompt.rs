//! Upgrade Prompt Policy
//!
//! After a successful guest check, the `remaining_checks` reported by the
//! backend (never the local counter) decides whether to nudge the visitor
//! towards signing up, and how urgently.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", content = "remaining", rename_all = "snake_case")]
pub enum UpgradePrompt {
    /// Every free check for today is used
    NoneRemaining,
    /// Exactly one check left
    LastFreeCheck,
    /// A few checks left
    OnlyRemaining(u32),
}

impl UpgradePrompt {
    /// Decide the prompt for a completed check
    ///
    /// ## Arguments
    /// * `remaining` - `metadata.remaining_checks` from the check response
    /// * `is_guest` - authenticated users never see a prompt
    /// * `threshold` - prompt when `remaining <= threshold`
    ///
    /// ## Examples
    /// ```
    /// use quota::UpgradePrompt;
    ///
    /// assert_eq!(UpgradePrompt::evaluate(Some(1), true, 3), Some(UpgradePrompt::LastFreeCheck));
    /// assert_eq!(UpgradePrompt::evaluate(Some(3), true, 3), Some(UpgradePrompt::OnlyRemaining(3)));
    /// assert_eq!(UpgradePrompt::evaluate(Some(5), true, 3), None);
    /// assert_eq!(UpgradePrompt::evaluate(Some(1), false, 3), None);
    /// ```
    pub fn evaluate(remaining: Option<u32>, is_guest: bool, threshold: u32) -> Option<Self> {
        if !is_guest {
            return None;
        }
        let remaining = remaining?;
        if remaining > threshold {
            return None;
        }
        Some(match remaining {
            0 => UpgradePrompt::NoneRemaining,
            1 => UpgradePrompt::LastFreeCheck,
            n => UpgradePrompt::OnlyRemaining(n),
        })
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            UpgradePrompt::NoneRemaining | UpgradePrompt::LastFreeCheck => Urgency::High,
            UpgradePrompt::OnlyRemaining(_) => Urgency::Medium,
        }
    }

    pub fn title(&self) -> String {
        match self {
            UpgradePrompt::NoneRemaining => "No free checks left today".to_string(),
            UpgradePrompt::LastFreeCheck => "This was your last free check".to_string(),
            UpgradePrompt::OnlyRemaining(n) => format!("Only {n} remaining"),
        }
    }

    pub fn message(&self) -> String {
        match self {
            UpgradePrompt::NoneRemaining => {
                "Create a free account to keep checking content today.".to_string()
            }
            UpgradePrompt::LastFreeCheck => {
                "You have 1 free check left today. Sign up for unlimited checks.".to_string()
            }
            UpgradePrompt::OnlyRemaining(n) => {
                format!("You have {n} free checks left today. Sign up for unlimited checks.")
            }
        }
    }

    pub const fn call_to_action(&self) -> &'static str {
        "Sign up free"
    }

    pub const fn signup_route(&self) -> &'static str {
        "/signup"
    }
}

/// The prompt shown under one completed check
///
/// Dismissal sticks to the check it was shown for; a later check may show
/// the prompt again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSlot {
    current: Option<(String, UpgradePrompt)>,
    dismissed_for: Option<String>,
}

impl PromptSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the decision for `check_id`, replacing any earlier one
    pub fn offer(&mut self, check_id: &str, prompt: Option<UpgradePrompt>) {
        self.current = prompt.map(|p| (check_id.to_string(), p));
    }

    pub fn visible(&self) -> Option<&UpgradePrompt> {
        match (&self.current, &self.dismissed_for) {
            (Some((check, _)), Some(dismissed)) if check == dismissed => None,
            (Some((_, prompt)), _) => Some(prompt),
            (None, _) => None,
        }
    }

    pub fn dismiss(&mut self) {
        if let Some((check, _)) = &self.current {
            tracing::debug!(check_id = %check, "Upgrade prompt dismissed");
            self.dismissed_for = Some(check.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_iff_at_or_below_threshold() {
        for remaining in 0..=10u32 {
            let prompt = UpgradePrompt::evaluate(Some(remaining), true, 3);
            assert_eq!(prompt.is_some(), remaining <= 3, "remaining = {remaining}");
            assert_eq!(UpgradePrompt::evaluate(Some(remaining), false, 3), None);
        }
        assert_eq!(UpgradePrompt::evaluate(None, true, 3), None);
    }

    #[test]
    fn test_escalation() {
        let last = UpgradePrompt::evaluate(Some(1), true, 3).unwrap();
        assert_eq!(last, UpgradePrompt::LastFreeCheck);
        assert_eq!(last.urgency(), Urgency::High);

        let few = UpgradePrompt::evaluate(Some(2), true, 3).unwrap();
        assert_eq!(few, UpgradePrompt::OnlyRemaining(2));
        assert_eq!(few.urgency(), Urgency::Medium);
        assert_eq!(few.title(), "Only 2 remaining");
    }

    #[test]
    fn test_dismissal_is_per_check() {
        let mut slot = PromptSlot::new();
        slot.offer("chk-1", Some(UpgradePrompt::OnlyRemaining(3)));
        assert!(slot.visible().is_some());

        slot.dismiss();
        assert!(slot.visible().is_none());

        // Same check re-rendered: stays hidden.
        slot.offer("chk-1", Some(UpgradePrompt::OnlyRemaining(3)));
        assert!(slot.visible().is_none());

        // Next check: shown again.
        slot.offer("chk-2", Some(UpgradePrompt::OnlyRemaining(2)));
        assert_eq!(slot.visible(), Some(&UpgradePrompt::OnlyRemaining(2)));

        slot.offer("chk-3", None);
        assert!(slot.visible().is_none());
    }
}
