use env_logger::{Builder, Env};

/// Environment variable that overrides the level chosen by `--verbose`.
pub const LOG_ENV: &str = "CREATE_EFFECT_AGENT_LOG";

/// Initialises `env_logger`: debug output with `--verbose`, info otherwise.
/// A filter in [`LOG_ENV`] (e.g. `create_effect_agent::git=debug`) wins over both.
pub fn init_logger(verbose: bool) {
    Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_env(Env::new().filter(LOG_ENV))
        .format_target(false)
        .format_timestamp(None)
        .init();
}
