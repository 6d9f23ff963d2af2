use library_catalog::{
    adapters::file::ActivityLog as FileActivityLog,
    adapters::memory::{
        book_repository::BookRepository as InMemoryBookRepository,
        member_repository::MemberRepository as InMemoryMemberRepository,
    },
    application::library::ServiceDependencies,
    config::{AppConfig, DEFAULT_TRACE_FILTER},
    shell::Shell,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_TRACE_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(log_path = %config.log_path.display(), "Activity log");

    // Initialize adapters
    let service_deps = ServiceDependencies {
        book_repository: Arc::new(InMemoryBookRepository::new()),
        member_repository: Arc::new(InMemoryMemberRepository::new()),
        activity_log: Arc::new(FileActivityLog::new(config.log_path)),
    };

    let mut shell = Shell::new(
        service_deps,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        || chrono::Local::now().date_naive(),
    );

    if let Err(e) = shell.run().await {
        tracing::error!(error = %e, "Shell I/O failure");
        std::process::exit(1);
    }
}
