use crate::error::{config::ConfigError, AppError};

/// Port the listener binds to when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Application configuration, read from the environment once at startup.
///
/// All values are validated here so that a bad environment produces a
/// structured error at boot instead of a driver fault somewhere downstream.
pub struct Config {
    /// Port the HTTP listener binds to. Defaults to 3000.
    pub port: u16,

    /// MongoDB connection string. The database name in the URI path is used
    /// as the application database.
    pub mongo_uri: String,

    /// Secret used to sign and verify auth tokens.
    pub jwt_secret: String,

    /// URL the keep-alive job pings every 14 minutes. When unset the job
    /// still runs but does nothing.
    pub keep_alive_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            mongo_uri: required("MONGO_URI")?,
            jwt_secret: required("JWT_SECRET")?,
            keep_alive_url: std::env::var("API_URL").ok(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::env::EnvVar;

    /// Tests loading a complete environment.
    ///
    /// Expected: Ok with every field populated from its variable.
    #[test]
    fn loads_full_environment() {
        let _guard = test_utils::env::lock();
        let _port = EnvVar::set("PORT", "8080");
        let _uri = EnvVar::set("MONGO_URI", "mongodb://localhost:27017/bookstore");
        let _secret = EnvVar::set("JWT_SECRET", "secret");
        let _api = EnvVar::set("API_URL", "https://example.com/api/health");

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017/bookstore");
        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(
            config.keep_alive_url.as_deref(),
            Some("https://example.com/api/health")
        );
    }

    /// Tests the port default when `PORT` is not set.
    ///
    /// Expected: Ok with port 3000.
    #[test]
    fn defaults_port_to_3000() {
        let _guard = test_utils::env::lock();
        let _port = EnvVar::unset("PORT");
        let _uri = EnvVar::set("MONGO_URI", "mongodb://localhost:27017/bookstore");
        let _secret = EnvVar::set("JWT_SECRET", "secret");
        let _api = EnvVar::unset("API_URL");

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 3000);
        assert!(config.keep_alive_url.is_none());
    }

    /// Tests that a non-numeric `PORT` is rejected at startup.
    ///
    /// Expected: Err with `ConfigError::InvalidPort` carrying the raw value.
    #[test]
    fn rejects_invalid_port() {
        let _guard = test_utils::env::lock();
        let _port = EnvVar::set("PORT", "not-a-port");
        let _uri = EnvVar::set("MONGO_URI", "mongodb://localhost:27017/bookstore");
        let _secret = EnvVar::set("JWT_SECRET", "secret");

        let result = Config::from_env();

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidPort(ref raw))) if raw == "not-a-port"
        ));
    }

    /// Tests that a missing `MONGO_URI` is rejected at startup.
    ///
    /// Expected: Err with `ConfigError::MissingEnvVar` naming the variable.
    #[test]
    fn rejects_missing_mongo_uri() {
        let _guard = test_utils::env::lock();
        let _port = EnvVar::unset("PORT");
        let _uri = EnvVar::unset("MONGO_URI");
        let _secret = EnvVar::set("JWT_SECRET", "secret");

        let result = Config::from_env();

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "MONGO_URI"
        ));
    }
}
