//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Options for a [`Machine`](crate::machine::Machine) and the loops that
/// drive it.
///
/// Every field has a default, so a partial JSON object is a valid config:
///
/// ```rust
/// use resumable::config::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "max_steps": 100 }"#).unwrap();
/// assert_eq!(config.max_steps, Some(100));
/// assert!(!config.record_trace);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Keep a [`StepTrace`](crate::core::StepTrace) of every step.
    pub record_trace: bool,

    /// Step budget for budgeted driving.
    pub max_steps: Option<u64>,

    /// Emission budget for budgeted driving.
    pub max_emissions: Option<u64>,
}

impl MachineConfig {
    pub fn record_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }

    pub fn max_steps(mut self, n: u64) -> Self {
        self.max_steps = Some(n);
        self
    }

    pub fn max_emissions(mut self, n: u64) -> Self {
        self.max_emissions = Some(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unbounded_and_untraced() {
        let config = MachineConfig::default();
        assert!(!config.record_trace);
        assert_eq!(config.max_steps, None);
        assert_eq!(config.max_emissions, None);
    }

    #[test]
    fn setters_chain() {
        let config = MachineConfig::default()
            .record_trace(true)
            .max_steps(11)
            .max_emissions(4);

        assert!(config.record_trace);
        assert_eq!(config.max_steps, Some(11));
        assert_eq!(config.max_emissions, Some(4));
    }

    #[test]
    fn empty_json_is_default() {
        let config: MachineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }
}
