use dharm::{Configurable, GlobalConfig};

#[derive(Clone, Debug)]
pub struct UtilsConfig {
    /// Global configuration.
    pub global: GlobalConfig,
    /// Write machine readable output.
    pub json: bool,
}

impl Configurable for UtilsConfig {
    fn global(&self) -> &GlobalConfig {
        &self.global
    }
}
