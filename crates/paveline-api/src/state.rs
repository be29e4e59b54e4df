use chrono::Month;
use paveline_core::config::LayeredConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Unit defaults applied to requests that do not name their units
    pub config: LayeredConfig,
    /// Fixed pricing month; the current month is used when unset
    pub pricing_month: Option<Month>,
}

impl AppState {
    pub fn new(config: LayeredConfig) -> Self {
        Self { config, pricing_month: None }
    }

    pub fn with_pricing_month(mut self, month: Month) -> Self {
        self.pricing_month = Some(month);
        self
    }

    pub fn area_unit(&self) -> &str {
        &self.config.area_unit.value
    }

    pub fn length_unit(&self) -> &str {
        &self.config.length_unit.value
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LayeredConfig::with_defaults())
    }
}
