use server::clients::gemini::GeminiClient;
use server::config;
use server::db;
use server::routes;

use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    // Connect to Postgres
    tracing::info!("Connecting to database...");
    let pool = db::pool::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Run schema migrations
    tracing::info!("Running migrations...");
    db::pool::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    // Initialize the generative-text client (optional)
    let gemini = GeminiClient::new(&config);
    if gemini.is_some() {
        tracing::info!("Gemini client configured (model: {})", config.gemini_model);
    } else {
        tracing::info!("GEMINI_API_KEY not set - commentary endpoints disabled");
    }

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router — order matters: specific routes before parameterized
    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Examples
        .route(
            "/exemplos",
            get(routes::examples::list_examples).post(routes::examples::create_example),
        )
        .route("/exemplos/{id}", delete(routes::examples::delete_example))
        // Exercises
        .route("/exercicios", get(routes::exercises::list_exercises))
        .route(
            "/exercicios/verificar",
            post(routes::exercises::verify_exercise),
        )
        .route(
            "/exercicios/resposta_inimigo",
            post(routes::commentary::enemy_response),
        )
        .route("/exercicios/{id}", get(routes::exercises::get_exercise))
        // Catalog seeding / administration
        .route(
            "/inicializar_exercicios",
            post(routes::seed::seed_base_exercises),
        )
        .route(
            "/inicializar_exercicios_ranking5000",
            post(routes::seed::seed_ultra_exercises),
        )
        .route(
            "/adicionar_exercicios_variados",
            post(routes::seed::seed_varied_exercises),
        )
        .route("/limpar_exercicios", post(routes::seed::clear_exercises))
        // Commentary
        .route("/chat/send", post(routes::commentary::chat_send))
        .route("/taticas/analise", post(routes::commentary::tactic_analysis))
        .route(
            "/conceitos/exemplo",
            post(routes::commentary::concept_example),
        )
        .route("/shadows/practice", post(routes::commentary::shadow_practice))
        .route("/shadows/analyze", post(routes::commentary::shadow_analyze))
        // Instructional pages
        .fallback_service(ServeDir::new(&config.static_dir))
        // Shared state
        .layer(Extension(pool))
        .layer(Extension(gemini))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
