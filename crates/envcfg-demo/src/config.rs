//! The demo's configuration layout.

use serde::Serialize;

envcfg::env_config! {
    /// Values injected from the process environment.
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct DemoConfig {
        #[serde(rename = "A")]
        pub a: String = "A",
        #[serde(rename = "B")]
        pub b: i64 = "B,required",
        #[serde(rename = "C")]
        pub c: String = "C,,FOOBAR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envcfg::EnvConfig;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_apply() {
        let env = HashMap::from([("B".to_string(), "42".to_string())]);
        let config = DemoConfig::from_env_with(&env).unwrap();
        assert_eq!(config.a, "");
        assert_eq!(config.b, 42);
        assert_eq!(config.c, "FOOBAR");
    }

    #[test]
    fn test_serializes_with_env_names() {
        let config = DemoConfig {
            a: "hello".to_string(),
            b: 7,
            c: "FOOBAR".to_string(),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "A": "hello", "B": 7, "C": "FOOBAR" }));
    }
}
