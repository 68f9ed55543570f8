use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "JLAUNCH_LOG";

pub fn  register_console_tracer(level: &str)
{
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| filter_for(level));

    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

pub fn  filter_for(level: &str) -> EnvFilter
{
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn configured_level_sets_the_ceiling()
    {
        assert_eq!(filter_for("info").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter_for("").max_level_hint(), Some(LevelFilter::WARN));
    }
}
