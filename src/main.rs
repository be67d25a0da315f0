use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use loan_approval::config::Settings;
use loan_approval::routes::{self, AppState};
use loan_approval::services::load_predictor;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    loan_approval::logging::init(&settings.logging);

    info!("Starting loan approval prediction API...");

    let predictor = load_predictor(
        settings.model.model_path.as_str(),
        settings.model.scaler_path.as_deref(),
    )
    .unwrap_or_else(|e| {
        error!("Failed to load model artifacts: {}", e);
        std::process::exit(1);
    });

    info!(
        "Loaded {} model ({} features, scaler: {})",
        predictor.model_kind(),
        predictor.n_features(),
        predictor.has_scaler()
    );

    let app_state = AppState {
        predictor: Arc::new(predictor),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    let server = match settings.server.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.bind((host, port))?.run().await
}
