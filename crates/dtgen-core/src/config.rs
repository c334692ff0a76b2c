//! ---
//! dtgen_section: "01-fixture-generation"
//! dtgen_subsection: "module"
//! dtgen_type: "source"
//! dtgen_scope: "code"
//! dtgen_description: "Generator configuration assembled by the front end."
//! dtgen_version: "v0.1.0"
//! dtgen_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings controlling how a [`crate::FixtureWriter`] is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Seed the writer will actually use.
    pub fn resolved_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                debug!(seed, "no seed supplied; drew one from entropy");
                seed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_returned_unchanged() {
        let config = GeneratorConfig { seed: Some(0x5EED) };
        assert_eq!(config.resolved_seed(), 0x5EED);
        assert_eq!(config.resolved_seed(), 0x5EED);
    }

    #[test]
    fn missing_seed_deserialises_to_none() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert!(config.seed.is_none());
    }

    #[test]
    fn seed_serialises_as_number() {
        let config = GeneratorConfig { seed: Some(42) };
        let encoded = serde_json::to_string(&config).unwrap();
        assert_eq!(encoded, r#"{"seed":42}"#);
    }
}
