//! Payment gateway configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway configuration (Razorpay)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Public key id, shared with the checkout widget
    pub razorpay_key_id: String,

    /// Key secret. Signs checkout results; never leaves the server
    pub razorpay_key_secret: SecretString,

    /// Base URL for the Razorpay API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound on a single order-creation call, in seconds
    #[serde(default = "default_gateway_timeout")]
    pub gateway_timeout_secs: u64,

    /// Currency the checkout form offers by default
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl PaymentConfig {
    /// Build a config with defaults for everything but the credentials.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            razorpay_key_id: key_id.into(),
            razorpay_key_secret: SecretString::new(key_secret.into()),
            api_base_url: default_api_base_url(),
            gateway_timeout_secs: default_gateway_timeout(),
            default_currency: default_currency(),
        }
    }

    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_test_")
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.razorpay_key_id.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_ID"));
        }
        if self.razorpay_key_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"));
        }

        if !self.razorpay_key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidRazorpayKeyId);
        }

        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://"))
        {
            return Err(ValidationError::InvalidGatewayUrl);
        }
        if production && !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::GatewayUrlMustBeHttps);
        }

        if self.gateway_timeout_secs == 0 || self.gateway_timeout_secs > 120 {
            return Err(ValidationError::InvalidGatewayTimeout);
        }

        let currency = self.default_currency.as_bytes();
        if currency.len() != 3 || !currency.iter().all(u8::is_ascii_alphabetic) {
            return Err(ValidationError::InvalidDefaultCurrency);
        }

        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

fn default_gateway_timeout() -> u64 {
    10
}

fn default_currency() -> String {
    "INR".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_test_mode() {
        let config = PaymentConfig::new("rzp_test_abc", "secret");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn test_is_live_mode() {
        let config = PaymentConfig::new("rzp_live_abc", "secret");
        assert!(config.is_live_mode());
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_defaults() {
        let config = PaymentConfig::new("rzp_test_abc", "secret");
        assert_eq!(config.api_base_url, "https://api.razorpay.com");
        assert_eq!(config.gateway_timeout_secs, 10);
        assert_eq!(config.default_currency, "INR");
    }

    #[test]
    fn test_validation_missing_key_id() {
        let config = PaymentConfig::new("", "secret");
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::MissingRequired("RAZORPAY_KEY_ID"))
        ));
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = PaymentConfig::new("rzp_test_abc", "");
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"))
        ));
    }

    #[test]
    fn test_validation_invalid_key_prefix() {
        let config = PaymentConfig::new("pk_test_abc", "secret");
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::InvalidRazorpayKeyId)
        ));
    }

    #[test]
    fn test_validation_plain_http_only_outside_production() {
        let mut config = PaymentConfig::new("rzp_test_abc", "secret");
        config.api_base_url = "http://localhost:9000".to_string();
        assert!(config.validate(false).is_ok());
        assert!(matches!(
            config.validate(true),
            Err(ValidationError::GatewayUrlMustBeHttps)
        ));
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let mut config = PaymentConfig::new("rzp_test_abc", "secret");
        config.gateway_timeout_secs = 0;
        assert!(config.validate(false).is_err());

        config.gateway_timeout_secs = 500;
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_validation_invalid_default_currency() {
        let mut config = PaymentConfig::new("rzp_test_abc", "secret");
        config.default_currency = "RUPEE".to_string();
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let config = PaymentConfig::new("rzp_test_abc", "super-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = PaymentConfig::new("rzp_test_abcd1234", "s3cret");
        assert!(config.validate(true).is_ok());
    }
}
