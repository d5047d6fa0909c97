use thiserror::Error;

/// Failure to assemble the EmailJS configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing EmailJS setting `{key}` (set {env} or add it to the config file)")]
    Missing { key: &'static str, env: &'static str },

    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failure of the outbound send call
#[derive(Error, Debug)]
pub enum SendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}
