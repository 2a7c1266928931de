mod manager;

pub use manager::{
    ArtlConfig, ConfigFile, ConfigManager, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DeeplConfig,
    DevtoConfig, ResolveOptions, ResolvedConfig, ResolvedDevto, resolve_config, resolve_devto,
};
