// config.rs
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone)]
pub struct Config {
    pub customer_signup_credits: u32,
    pub labor_signup_credits: u32,
    /// Credits debited for every offer a professional sends.
    pub offer_credit_cost: u32,
    pub default_location: String,
    pub seed_demo_data: bool,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            customer_signup_credits: 5,
            labor_signup_credits: 10,
            offer_credit_cost: 1,
            default_location: "Tirana, Albania".to_string(),
            seed_demo_data: true,
            log_level: LevelFilter::DEBUG,
        }
    }
}

impl Config {
    /// Reads the environment; anything missing or unparsable keeps its default.
    pub fn init() -> Config {
        let defaults = Config::default();

        let default_location = std::env::var("DEFAULT_LOCATION")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_location);

        Config {
            customer_signup_credits: env_or("CUSTOMER_SIGNUP_CREDITS", defaults.customer_signup_credits),
            labor_signup_credits: env_or("LABOR_SIGNUP_CREDITS", defaults.labor_signup_credits),
            offer_credit_cost: env_or("OFFER_CREDIT_COST", defaults.offer_credit_cost),
            default_location,
            seed_demo_data: env_or("SEED_DEMO_DATA", defaults.seed_demo_data),
            log_level: env_or("LOG_LEVEL", defaults.log_level),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match std::env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Invalid value {:?} for {}, using {:?}", raw, key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.offer_credit_cost, 1);
        assert_eq!(config.labor_signup_credits, 10);
        assert_eq!(config.customer_signup_credits, 5);
        assert_eq!(config.default_location, "Tirana, Albania");
    }

    #[test]
    fn bad_values_fall_back() {
        assert_eq!(parse_or("OFFER_CREDIT_COST", "two", 1u32), 1);
        assert_eq!(parse_or("OFFER_CREDIT_COST", " 3 ", 1u32), 3);
        assert!(!parse_or("SEED_DEMO_DATA", "false", true));
        assert_eq!(parse_or("LOG_LEVEL", "warn", LevelFilter::DEBUG), LevelFilter::WARN);
    }
}
