use crate::{config::Config, info, server};

/// Runs the OAuth web service until externally terminated.
pub async fn serve(config: Config) {
    info!(
        "Starting OAuth web service on {}. Open /login to authorize.",
        config.server_addr
    );
    server::start_api_server(config).await;
}
