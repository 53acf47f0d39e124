//! TTL Tiering Module
//!
//! Selects how long a response may be cached, based on the message's intent
//! and whether the conversation is personalized.

use std::time::Duration;

use crate::cache::Intent;

/// Default TTL for resource-seeking queries; the resource directory behind
/// them changes slowly.
pub const DEFAULT_RESOURCE_TTL: Duration = Duration::from_secs(60 * 60);

/// Default TTL for general/conversational queries.
pub const DEFAULT_GENERAL_TTL: Duration = Duration::from_secs(30 * 60);

// == TTL Policy ==
/// Tier durations, built from `Config` at the composition root.
#[derive(Debug, Clone, Copy)]
pub struct TtlPolicy {
    /// Long tier for resource-seeking intents
    pub resource: Duration,
    /// Short tier for everything else
    pub general: Duration,
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            resource: DEFAULT_RESOURCE_TTL,
            general: DEFAULT_GENERAL_TTL,
        }
    }
}

impl TtlPolicy {
    // == TTL For ==
    /// Returns the TTL tier for a message.
    ///
    /// Personalized conversations (e.g. resume building) return
    /// `Duration::ZERO`: those responses are individual and must never be
    /// replayed, and the store treats a zero TTL as "do not insert".
    ///
    /// Resource-seeking intents (food, shelter, health, jobs, transport,
    /// documents) get the long tier. `Mental` and `Domestic` are not in the
    /// resource-seeking list and stay on the short tier together with
    /// `General`.
    pub fn ttl_for(&self, message: &str, personalized: bool) -> Duration {
        if personalized {
            return Duration::ZERO;
        }

        if Intent::detect(message).is_resource_seeking() {
            self.resource
        } else {
            self.general
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personalized_never_cached() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_for("help me build a resume", true), Duration::ZERO);
        // Personalized wins regardless of intent.
        assert_eq!(policy.ttl_for("where can I find food", true), Duration::ZERO);
    }

    #[test]
    fn test_resource_intents_get_long_tier() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_for("I'm hungry", false), DEFAULT_RESOURCE_TTL);
        assert_eq!(policy.ttl_for("emergency shelter tonight", false), DEFAULT_RESOURCE_TTL);
        assert_eq!(policy.ttl_for("free clinic near me", false), DEFAULT_RESOURCE_TTL);
        assert_eq!(policy.ttl_for("bus schedule", false), DEFAULT_RESOURCE_TTL);
    }

    #[test]
    fn test_general_gets_short_tier() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_for("hello, how are you", false), DEFAULT_GENERAL_TTL);
    }

    // Mental and domestic are deliberately on the short tier: the original
    // tiering list names only the six resource-seeking categories.
    #[test]
    fn test_mental_and_domestic_get_short_tier() {
        let policy = TtlPolicy::default();
        assert_eq!(
            policy.ttl_for("I need counseling for my anxiety", false),
            DEFAULT_GENERAL_TTL
        );
        assert_eq!(
            policy.ttl_for("my partner is hitting me", false),
            DEFAULT_GENERAL_TTL
        );
    }

    #[test]
    fn test_custom_tiers() {
        let policy = TtlPolicy {
            resource: Duration::from_secs(120),
            general: Duration::from_secs(10),
        };
        assert_eq!(policy.ttl_for("food pantry", false), Duration::from_secs(120));
        assert_eq!(policy.ttl_for("good morning", false), Duration::from_secs(10));
    }
}
