mod manager;

pub use manager::{
    API_URL_ENV, BackendConfig, ConfigFile, ConfigManager, DEFAULT_API_URL, ResolveOptions,
    ResolvedConfig, RetryConfig, resolve_config,
};
