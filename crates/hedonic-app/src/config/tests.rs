#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults_match_adapter_policy() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "http://localhost:8080");
        assert_eq!(api.timeout_secs, 10);
        assert_eq!(api.max_retries, 3);
        assert!(!api.insecure, "TLS verification must be on by default");
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, default_base_url());
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_partial_toml_keeps_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://predictor.example.com"
            insecure = true
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://predictor.example.com");
        assert!(config.api.insecure);
        assert_eq!(config.api.max_retries, 3);
    }

    #[test]
    fn test_client_config_carries_all_fields() {
        let api = ApiConfig {
            base_url: "http://10.0.0.7:80".to_string(),
            timeout_secs: 7,
            max_retries: 1,
            insecure: true,
        };
        let client = api.client_config();
        assert_eq!(client.base_url, "http://10.0.0.7:80");
        assert_eq!(client.timeout_secs, 7);
        assert_eq!(client.max_retries, 1);
        assert!(client.insecure);
    }
}
