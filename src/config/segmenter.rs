//! Segmentation scheduler configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration of the periodic segmentation job
#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterConfig {
    /// Seconds between segmentation runs
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    30
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl SegmenterConfig {
    /// Validate segmenter configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_secs == 0 {
            return Err(ValidationError::InvalidInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_thirty_seconds() {
        assert_eq!(SegmenterConfig::default().interval_secs, 30);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = SegmenterConfig { interval_secs: 0 };
        assert!(config.validate().is_err());
    }
}
