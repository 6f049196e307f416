use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use degree_registry::{
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    routes::{body_limits, configure_routes},
    settings::AppConfig,
    telemetry::init_tracing,
    web::cors::build_cors,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = match create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            std::process::exit(1);
        }
    };

    if config.run_migrations {
        if let Err(e) = run_migrations(&pool).await {
            tracing::error!("Database migration failed: {}", e);
            std::process::exit(1);
        }
    }

    let app_state = web::Data::new(AppState::new(&config, pool));

    if let Err(e) = app_state.upload_store.ensure_dir().await {
        tracing::error!("Upload directory unavailable: {}", e);
        std::process::exit(1);
    }

    let server_addr = config.server_addr();
    let cors_origins = config.cors_origins();
    let max_upload_bytes = config.max_upload_bytes;

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(body_limits(max_upload_bytes))
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .disable_signals()
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            Ok(())
        },
    }
}
