use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub mongodb_uri: String,
    pub host_ip: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self {
            mongodb_uri: try_load("MONGODB_URI", "mongodb://localhost:27017"),
            host_ip: try_load("HOST_IP", "xoofee.top"),
            host: try_load("HOST", "0.0.0.0"),
            port: try_load("PORT", "5001"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::try_load;

    #[test]
    fn test_missing_var_uses_default() {
        let port: u16 = try_load("FINDEASY_TEST_UNSET_PORT", "5001");
        assert_eq!(port, 5001);
    }

    #[test]
    fn test_missing_var_default_string() {
        let uri: String = try_load("FINDEASY_TEST_UNSET_URI", "mongodb://localhost:27017");
        assert_eq!(uri, "mongodb://localhost:27017");
    }
}
