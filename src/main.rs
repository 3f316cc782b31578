//! Weekly report server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{App, HttpRequest, HttpServer, Result as ActixResult, http::header, web};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use weekly_report_server::api;
use weekly_report_server::api::ApiDoc;
use weekly_report_server::config::Config;
use weekly_report_server::db::DbPool;
use weekly_report_server::middleware::RequestLogger;

/// SPA fallback handler - serves index.html for client-side routing.
async fn spa_fallback(req: HttpRequest) -> ActixResult<NamedFile> {
    let static_dir: &PathBuf = req
        .app_data::<web::Data<PathBuf>>()
        .expect("Static dir not configured")
        .get_ref();
    Ok(NamedFile::open(static_dir.join("index.html"))?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("DATABASE_URL must be set to a PostgreSQL connection string");
            std::process::exit(1);
        }
    };

    // Connect to the database; an unreachable backend is a fatal startup error
    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");
    info!("Database connection established");

    // Idempotent schema setup, before the server accepts connections
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    info!("Database migrations complete");

    let bind_address = config.bind_address();
    let static_dir = config.static_dir.clone();

    let workers = num_cpus::get();
    info!(
        "Starting server at http://{} ({} workers)",
        bind_address, workers
    );
    info!("Serving static files from {:?}", static_dir);

    HttpServer::new(move || {
        // Permissive CORS: any origin, standard methods, Content-Type/Authorization.
        // PUT is allowed here despite having no route, for parity with the
        // original front-end contract.
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .max_age(3600);

        App::new()
            // Add CORS middleware (must be before other middleware)
            .wrap(cors)
            // Add request logging middleware
            .wrap(RequestLogger)
            // Add shared state
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(static_dir.clone()))
            // Configure API routes
            .service(
                web::scope("/api")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_report_routes),
            )
            // Swagger UI
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Serve static assets (js, css, images)
            .service(Files::new("/assets", static_dir.join("assets")).prefer_utf8(true))
            // Serve favicon
            .service(Files::new("/favicon", static_dir.clone()).index_file("favicon.ico"))
            // SPA fallback - serve index.html for all other routes
            .default_service(web::route().to(spa_fallback))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
