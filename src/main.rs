use tokio::net::TcpListener;

use discord_lookup::config::{Config, BOT_TOKEN_VAR};
use discord_lookup::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discord_lookup=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    print_banner(&config);

    if config.bot_token.is_none() {
        tracing::warn!("{BOT_TOKEN_VAR} is not set, every lookup will fail until it is");
    }

    let state = AppState::from_config(&config).expect("failed to build Discord client");
    let app = discord_lookup::routes::router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    let actual_port = listener
        .local_addr()
        .expect("failed to get local address")
        .port();
    tracing::info!("listening on 0.0.0.0:{actual_port}");

    axum::serve(listener, app).await.expect("server error");
}

fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");
    let token = if config.bot_token.is_some() {
        "configured"
    } else {
        "\x1b[33mmissing\x1b[0m"
    };

    eprintln!();
    eprintln!("  \x1b[1;36mdiscord-lookup\x1b[0m \x1b[2mv{version}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mport\x1b[0m         {}", config.port);
    eprintln!("  \x1b[2mapi\x1b[0m          {}", config.api_base);
    eprintln!("  \x1b[2mcdn\x1b[0m          {}", config.cdn_base);
    eprintln!("  \x1b[2mtimeout\x1b[0m      {}s", config.request_timeout.as_secs());
    eprintln!("  \x1b[2mbot token\x1b[0m    {token}");
    eprintln!();
}
