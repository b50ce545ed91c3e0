//! Central module for application-wide configuration settings.
//!
//! Every setting can be given as a flag or through the environment (a `.env`
//! file is loaded first by `main`). The token signing secret has no default:
//! the server refuses to start without one.

use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug, Clone)]
#[command(name = "ground")]
#[command(about = "Ground Education Platform API - classes, students and points")]
pub struct Config {
    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Server port
    #[arg(short, long, default_value = "8000", env = "PORT")]
    pub port: u16,

    /// Secret used to sign session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Session token lifetime in hours
    #[arg(long, default_value = "168", env = "TOKEN_TTL_HOURS")]
    pub token_ttl_hours: i64,

    /// PBKDF2 iteration count for new password hashes
    #[arg(long, default_value = "600000", env = "PASSWORD_HASH_ITERATIONS")]
    pub password_hash_iterations: u32,

    /// Allowed browser origins, comma separated
    #[arg(
        long,
        default_value = "http://localhost:3000",
        env = "CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must not be empty")]
    EmptySecret,

    #[error("token lifetime must be positive, got {0} hours")]
    InvalidTokenTtl(i64),

    #[error("password hash iterations must be positive")]
    InvalidIterations,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.token_ttl_hours <= 0 {
            return Err(ConfigError::InvalidTokenTtl(self.token_ttl_hours));
        }
        if self.password_hash_iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        Ok(())
    }

    /// `host:port`, resolved when the listener binds.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.token_ttl_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["ground"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["--jwt-secret", "s3cret"]);

        assert_eq!(config.token_ttl(), chrono::Duration::days(7));
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cors_origins_split_on_commas() {
        let config = parse(&[
            "--jwt-secret",
            "s3cret",
            "--cors-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    fn test_blank_secret_rejected() {
        let config = parse(&["--jwt-secret", "   "]);
        assert_eq!(config.validate(), Err(ConfigError::EmptySecret));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let config = parse(&["--jwt-secret", "s", "--token-ttl-hours", "0"]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidTokenTtl(0)));

        let config = parse(&["--jwt-secret", "s", "--password-hash-iterations", "0"]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidIterations));
    }

    #[test]
    fn test_listen_addr() {
        let config = parse(&["--jwt-secret", "s", "--host", "127.0.0.1", "--port", "9000"]);
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    }
}
