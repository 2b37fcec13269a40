use log::LevelFilter;

/// Initialize logging for the command line. Logs go to stderr so that stdout only has solutions.
///
/// `RUST_LOG` overrides the level chosen here.
pub fn init_logger(quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // Fails only if a logger was already set, in which case keep that one
    let _ = builder.try_init();
}
