use std::env;

/// Named-key lookup for the three run inputs. Injected into the orchestrator
/// so it can run against a fake source in tests.
pub trait InputSource {
    /// Returns the value for `name`, or an empty string when unset.
    fn get(&self, name: &str) -> String;
}

/// Reads inputs from the hosting environment: input `name` maps to the
/// variable `INPUT_<NAME>` (spaces become underscores, uppercased), and
/// values are trimmed of surrounding whitespace.
pub struct EnvInputs;

impl InputSource for EnvInputs {
    fn get(&self, name: &str) -> String {
        let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
        env::var(key)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}
