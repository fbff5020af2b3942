use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use storage::{Database, MemoryScoreStore, PgScoreStore, ScoreStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod extract;
mod features;
mod middleware;
mod monitor;
mod routes;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::awards::handlers::record_award,
        features::rankings::handlers::get_overall_ranking,
        features::rankings::handlers::get_category_ranking,
        features::rankings::handlers::get_scoreboard,
        features::dashboard::handlers::get_top_schools,
        features::dashboard::handlers::get_category_distribution,
        features::dashboard::handlers::get_dashboard_stats,
        features::candidates::handlers::list_candidates,
        features::candidates::handlers::get_candidate,
        features::candidates::handlers::get_candidate_total,
        features::candidates::handlers::register_candidate,
        features::candidates::handlers::remove_candidate,
        features::catalog::handlers::list_categories,
        features::catalog::handlers::get_category,
        features::catalog::handlers::create_category,
        features::catalog::handlers::list_programs,
        features::catalog::handlers::get_program,
        features::catalog::handlers::create_program,
        features::integrity::handlers::verify_totals,
        features::integrity::handlers::rebuild_totals,
    ),
    components(
        schemas(
            storage::dto::award::RecordAwardRequest,
            storage::dto::candidate::RegisterCandidateRequest,
            storage::dto::candidate::CandidateDetailResponse,
            storage::dto::candidate::CandidateTotalResponse,
            storage::dto::catalog::CreateCategoryRequest,
            storage::dto::catalog::CreateProgramRequest,
            storage::dto::common::PaginationMeta,
            storage::dto::ranking::RankingEntry,
            storage::dto::ranking::CandidateInfo,
            storage::dto::ranking::CategoryStanding,
            storage::dto::ranking::Scoreboard,
            storage::dto::dashboard::SchoolStanding,
            storage::dto::dashboard::CategoryShare,
            storage::dto::dashboard::DashboardStats,
            storage::dto::integrity::TotalDrift,
            storage::dto::integrity::RebuildReport,
            storage::dto::integrity::IntegrityReport,
            storage::models::AwardEntry,
            storage::models::Candidate,
            storage::models::Category,
            storage::models::Program,
        )
    ),
    tags(
        (name = "awards", description = "Award ledger"),
        (name = "rankings", description = "Public standings"),
        (name = "dashboard", description = "Summary statistics"),
        (name = "candidates", description = "Candidate lookups and registration"),
        (name = "catalog", description = "Categories and programs"),
        (name = "integrity", description = "Ledger and total reconciliation"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn ScoreStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; using the in-process store, data is lost on exit");
        return Ok(Arc::new(MemoryScoreStore::new()));
    };

    tracing::info!(
        "Connecting to database at: {}",
        database_url.split('@').next_back().unwrap_or("unknown")
    );
    let db = Database::new(database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgScoreStore::new(db)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting scoreboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = open_store(&config).await?;
    let state = AppState::new(store);

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty; every protected endpoint will answer 401");
    }

    match config.integrity_check_interval {
        Some(period) => {
            tracing::info!("Integrity monitor running every {}s", period.as_secs());
            monitor::spawn_integrity_monitor(state.shared_store(), period);
        }
        None => tracing::info!("Integrity monitor disabled"),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = routes::router(state, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
