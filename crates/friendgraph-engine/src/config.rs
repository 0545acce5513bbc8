//! Engine configuration

/// Configuration for relationship-engine behavior
///
/// The defaults reproduce the historical service behavior; the presets make
/// the two inherited design choices (empty results as errors,
/// self-subscription) explicit instead of hard-coding either answer.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Treat an empty friends or common-friends result as an error
    /// (`NoFriends` / `NoCommonFriends`) instead of an ok-empty list
    pub empty_result_is_error: bool,

    /// Reject subscriptions where requestor and target are the same user
    pub forbid_self_subscription: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            empty_result_is_error: true,
            forbid_self_subscription: false,
        }
    }
}

impl EngineConfig {
    /// Create a permissive configuration: empty query results are ok-empty,
    /// self-subscription allowed
    pub fn permissive() -> Self {
        Self {
            empty_result_is_error: false,
            forbid_self_subscription: false,
        }
    }

    /// Create a strict configuration: empty results are errors and
    /// self-subscription is rejected
    pub fn strict() -> Self {
        Self {
            empty_result_is_error: true,
            forbid_self_subscription: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.empty_result_is_error);
        assert!(!config.forbid_self_subscription);
    }

    #[test]
    fn test_permissive_config() {
        let config = EngineConfig::permissive();
        assert!(!config.empty_result_is_error);
        assert!(!config.forbid_self_subscription);
    }

    #[test]
    fn test_strict_config() {
        let config = EngineConfig::strict();
        assert!(config.empty_result_is_error);
        assert!(config.forbid_self_subscription);
    }
}
