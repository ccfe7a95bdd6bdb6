mod app;

fn init_logging() {
    // Default to info level, override via RUST_LOG
    // Example: RUST_LOG=cohort_core::pagination=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cohort_core=info,cohort_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Cohort", app::update, app::view).run_with(app::initialize)
}
