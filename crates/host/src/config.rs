use std::env;

/// Host settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Seed for the random piece source
    pub seed: u32,
    /// Capacity of the command queue
    pub max_pending_commands: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_pending_commands: 32,
        }
    }
}

impl HostConfig {
    /// Create from environment variables, falling back to defaults
    ///
    /// - `BLOCKFALL_SEED`
    /// - `BLOCKFALL_MAX_PENDING`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let max_pending_commands = lookup("BLOCKFALL_MAX_PENDING")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.max_pending_commands);

        Self {
            seed,
            max_pending_commands,
        }
    }
}
