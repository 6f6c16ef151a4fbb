//! Client configuration.

use reqwest::Url;
use skinscan_models::{MalignancyThreshold, DEFAULT_MALIGNANCY_THRESHOLD};

use crate::error::{ClientError, ClientResult};

const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5000/api/predict";
const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Configuration for the prediction client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL the photo is POSTed to
    pub endpoint_url: String,
    /// Probability strictly above which a lesion is reported as likely malignant
    pub malignancy_threshold: f64,
    /// JPEG quality used when re-encoding photos (1-100)
    pub jpeg_quality: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            malignancy_threshold: DEFAULT_MALIGNANCY_THRESHOLD,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Missing or unparseable values fall back to defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            endpoint_url: lookup("SKINSCAN_ENDPOINT_URL")
                .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()),
            malignancy_threshold: lookup("SKINSCAN_MALIGNANCY_THRESHOLD")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MALIGNANCY_THRESHOLD),
            jpeg_quality: lookup("SKINSCAN_JPEG_QUALITY")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_JPEG_QUALITY),
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = url.into();
        self
    }

    /// Set the malignancy threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.malignancy_threshold = threshold;
        self
    }

    /// Parse and check the endpoint URL.
    pub fn endpoint(&self) -> ClientResult<Url> {
        let url = Url::parse(&self.endpoint_url).map_err(|e| {
            ClientError::invalid_config(format!("endpoint URL {:?}: {}", self.endpoint_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::invalid_config(format!(
                "endpoint URL must be http or https, got {other}"
            ))),
        }
    }

    pub fn threshold(&self) -> ClientResult<MalignancyThreshold> {
        Ok(MalignancyThreshold::new(self.malignancy_threshold)?)
    }

    /// Check every field.
    pub fn validate(&self) -> ClientResult<()> {
        self.endpoint()?;
        self.threshold()?;
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ClientError::invalid_config(format!(
                "JPEG quality must be within 1-100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint_url, "http://localhost:5000/api/predict");
        assert_eq!(config.malignancy_threshold, 0.3);
        assert_eq!(config.jpeg_quality, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_vars() {
        let config = ClientConfig::from_vars(vars(&[
            ("SKINSCAN_ENDPOINT_URL", "https://classifier.example.com/api/predict"),
            ("SKINSCAN_MALIGNANCY_THRESHOLD", " 0.45 "),
            ("SKINSCAN_JPEG_QUALITY", "95"),
        ]));
        assert_eq!(config.endpoint_url, "https://classifier.example.com/api/predict");
        assert_eq!(config.malignancy_threshold, 0.45);
        assert_eq!(config.jpeg_quality, 95);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = ClientConfig::from_vars(vars(&[
            ("SKINSCAN_MALIGNANCY_THRESHOLD", "high"),
            ("SKINSCAN_JPEG_QUALITY", "1000"),
        ]));
        assert_eq!(config.malignancy_threshold, 0.3);
        assert_eq!(config.jpeg_quality, 80);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_threshold = ClientConfig::default().with_threshold(1.2);
        assert!(matches!(bad_threshold.validate(), Err(ClientError::InvalidConfig(_))));

        let bad_scheme = ClientConfig::default().with_endpoint("ftp://example.com/predict");
        assert!(matches!(bad_scheme.validate(), Err(ClientError::InvalidConfig(_))));

        let not_a_url = ClientConfig::default().with_endpoint("not a url");
        assert!(not_a_url.validate().is_err());

        let zero_quality = ClientConfig { jpeg_quality: 0, ..ClientConfig::default() };
        assert!(zero_quality.validate().is_err());
    }
}
