use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    ///
    /// Raised for values that fail to parse (e.g. a non-numeric retry count) or that
    /// parse but fall outside the accepted range.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The database connection retry budget is zero.
    ///
    /// The readiness gate needs at least one connection attempt.
    #[error("Database connection attempts must be at least 1")]
    ZeroAttempts,
}
