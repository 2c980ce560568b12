use pg_manager_frontend::config::UiConfig;
use pg_manager_frontend::{App, AppProps, AppServices};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Browser consoles don't render ANSI colors
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(UiConfig::LOG_LEVEL));

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() {
    init_tracing();

    match AppServices::bootstrap() {
        Ok(services) => {
            yew::Renderer::<App>::with_props(AppProps { services }).render();
        }
        Err(e) => tracing::error!(error = %e, "Failed to start the application"),
    }
}
