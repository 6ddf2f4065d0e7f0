//! kotok HTTP Server

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use log::info;

use kotok_analyzer::Tokenizer;
use kotok_http::{configure_routes, AppState, Settings};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Configuration problems abort here, before any request is served
    let settings = Settings::parse();
    let config = settings.tokenizer_config()?;
    let analyzer = settings.analyzer()?;

    info!(
        "Tokenizer ready: backend={:?}, min_token_len={}, stopwords={}, compounds={}",
        settings.backend,
        config.lexical.min_len(),
        config.lexical.stopwords().len(),
        config.compounds.len()
    );

    let state = web::Data::new(AppState::new(
        Tokenizer::new(analyzer, config),
        settings.analyzer_timeout(),
    ));

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_routes)
    });
    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }

    info!("kotok tokenizer listening on {}:{}", settings.host, settings.port);

    server
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await?;

    info!("Server stopped.");
    Ok(())
}
