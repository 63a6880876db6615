// Configuration module
// Internal representation of user configuration

use std::collections::HashMap;

use crate::core::app::DEFAULT_TAB_WIDTH;

/// Environment variable overriding the tab width
pub const TAB_WIDTH_ENV: &str = "EWIG_TAB_WIDTH";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Chord/command pairs in the order they were bound; later pairs win
    pub keybindings: Vec<(String, String)>,
    pub settings: HashMap<String, ConfigValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl Config {
    /// Bind a key sequence to a command
    pub fn bind(&mut self, key: &str, command: &str) {
        self.keybindings
            .push((key.to_string(), command.to_string()));
    }

    /// Set a configuration value
    pub fn set<V: Into<ConfigValue>>(&mut self, key: &str, value: V) {
        self.settings.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    /// Columns per tab stop; never zero
    pub fn tab_width(&self) -> usize {
        self.get_int("tab_width")
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_TAB_WIDTH)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|k| std::env::var(k));
    }

    /// Apply overrides with an injectable environment lookup
    pub fn apply_env_with<F>(&mut self, get_env: F)
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let Ok(raw) = get_env(TAB_WIDTH_ENV) else {
            return;
        };
        match raw.trim().parse::<i64>() {
            Ok(width) if width > 0 => self.set("tab_width", width),
            _ => tracing::warn!(value = %raw, "ignoring invalid {}", TAB_WIDTH_ENV),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    fn mock_env<'a>(vars: &'a [(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            for (k, v) in vars {
                if *k == key {
                    return Ok((*v).to_string());
                }
            }
            Err(VarError::NotPresent)
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.keybindings.is_empty());
        assert!(config.settings.is_empty());
        assert_eq!(config.tab_width(), DEFAULT_TAB_WIDTH);
    }

    #[test]
    fn test_bind_keeps_order() {
        let mut config = Config::default();
        config.bind("^K", "kill-line");
        config.bind("^K", "cut");
        assert_eq!(
            config.keybindings,
            vec![
                ("^K".to_string(), "kill-line".to_string()),
                ("^K".to_string(), "cut".to_string()),
            ]
        );
    }

    #[test]
    fn test_type_mismatch() {
        let mut config = Config::default();
        config.set("tab_width", "wide");
        assert_eq!(config.get_int("tab_width"), None);
        assert_eq!(config.tab_width(), DEFAULT_TAB_WIDTH);
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        config.apply_env_with(mock_env(&[(TAB_WIDTH_ENV, "4")]));
        assert_eq!(config.tab_width(), 4);
    }

    #[test]
    fn test_invalid_env_override_ignored() {
        for bad in ["0", "-3", "four", ""] {
            let mut config = Config::default();
            config.set("tab_width", 2i64);
            config.apply_env_with(mock_env(&[(TAB_WIDTH_ENV, bad)]));
            assert_eq!(config.tab_width(), 2, "value {:?}", bad);
        }
    }

    #[test]
    fn test_config_value_conversions() {
        let b: ConfigValue = true.into();
        assert_eq!(b, ConfigValue::Bool(true));
        let s: ConfigValue = String::from("test").into();
        assert_eq!(s, ConfigValue::String("test".to_string()));
    }
}
