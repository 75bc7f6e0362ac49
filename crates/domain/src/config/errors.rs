use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("record entry has an empty name")]
    EmptyRecordName,

    #[error("zone entry has an empty origin")]
    EmptyZoneOrigin,

    #[error("endpoint is not an HTTP(S) URI: {0}")]
    InvalidEndpoint(String),

    #[error("cache_capacity must be greater than zero")]
    ZeroCacheCapacity,
}
