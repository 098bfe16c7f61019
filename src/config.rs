use anyhow::{bail, Context};
use std::{env, str::FromStr};

use crate::schedule::grid::BusinessHours;

#[derive(Clone, Debug)]
pub struct Settings {
    pub bind_addr: String,
    pub hours: BusinessHours,
    pub seed_demo_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            hours: BusinessHours::default(),
            seed_demo_data: true,
        }
    }
}

impl Settings {
    /// Reads settings from the environment (and `.env`, once `dotenv` ran).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let open = parse_or(&lookup, "BUSINESS_OPEN_HOUR", defaults.hours.open)?;
        let close = parse_or(&lookup, "BUSINESS_CLOSE_HOUR", defaults.hours.close)?;
        if close > 23 {
            bail!("BUSINESS_CLOSE_HOUR must be at most 23");
        }
        if open >= close {
            bail!("BUSINESS_OPEN_HOUR must be before BUSINESS_CLOSE_HOUR");
        }

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            hours: BusinessHours { open, close },
            seed_demo_data: parse_or(&lookup, "SEED_DEMO_DATA", defaults.seed_demo_data)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: '{}'", key, value)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.bind_addr, "127.0.0.1:8080");
        assert_eq!(s.hours, BusinessHours { open: 8, close: 20 });
        assert!(s.seed_demo_data);
    }

    #[test]
    fn overrides_from_environment() {
        let s = settings(&[
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("BUSINESS_OPEN_HOUR", "9"),
            ("BUSINESS_CLOSE_HOUR", "18"),
            ("SEED_DEMO_DATA", "false"),
        ])
        .unwrap();
        assert_eq!(s.bind_addr, "0.0.0.0:9000");
        assert_eq!(s.hours, BusinessHours { open: 9, close: 18 });
        assert!(!s.seed_demo_data);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(settings(&[("BUSINESS_OPEN_HOUR", "nine")]).is_err());
        assert!(settings(&[("BUSINESS_OPEN_HOUR", "20"), ("BUSINESS_CLOSE_HOUR", "10")]).is_err());
        assert!(settings(&[("BUSINESS_CLOSE_HOUR", "24")]).is_err());
    }
}
