use actix_web::{middleware, web, App, HttpServer};
use loan_approval::client::{self, ClientState};
use loan_approval::config::Settings;
use loan_approval::services::PredictionClient;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    loan_approval::logging::init(&settings.logging);

    let state = ClientState {
        api: PredictionClient::new(settings.client.api_endpoint.clone()),
    };

    let host = settings.client.host.clone();
    let port = settings.client.port;

    info!(
        "Starting loan approval form on {}:{} (API: {})",
        host, port, settings.client.api_endpoint
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(client::configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
