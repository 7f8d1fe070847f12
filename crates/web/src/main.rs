use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::{Method, header};
use storage::Database;
use storage::regulations::RegulationTables;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::list_disciplines,
        features::competitions::handlers::attach_discipline,
        features::competitions::handlers::detach_discipline,
        features::categories::handlers::generate_categories,
        features::categories::handlers::clear_categories,
        features::categories::handlers::list_categories,
        features::categories::handlers::get_category_stats,
        features::disciplines::handlers::list_disciplines,
        features::disciplines::handlers::backfill_shapes,
        features::disciplines::handlers::provision_belt_categories,
        features::age_categories::handlers::list_age_categories,
    ),
    components(
        schemas(
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::discipline::AttachDisciplineRequest,
            storage::dto::discipline::ProvisionBeltCategoriesRequest,
            storage::dto::discipline::ProvisionBeltCategoriesResponse,
            storage::dto::discipline::BackfillShapesResponse,
            storage::dto::category::GenerationReport,
            storage::dto::category::ClearCategoriesResponse,
            storage::dto::category::CategoryStats,
            storage::dto::category::DisciplineCategoryCount,
            storage::dto::category::GenderCategoryCount,
            storage::models::Competition,
            storage::models::Discipline,
            storage::models::AgeCategory,
            storage::models::CompetitionDiscipline,
            storage::models::CompetitionDisciplineDetail,
            storage::models::CompetitionCategory,
            storage::models::WeightCategory,
            storage::models::BeltCategory,
        )
    ),
    tags(
        (name = "competitions", description = "Competition management endpoints"),
        (name = "categories", description = "Category generation endpoints"),
        (name = "disciplines", description = "Discipline reference endpoints"),
        (name = "age-categories", description = "Age category reference endpoints"),
    )
)]
struct ApiDoc;

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

    tracing::info!("Starting federation API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let regulations = match &config.regulations_path {
        Some(path) => RegulationTables::from_path(path).with_context(|| {
            format!("Failed to load regulation tables from {}", path.display())
        })?,
        None => RegulationTables::builtin().context("Built-in regulation tables are invalid")?,
    };
    tracing::info!(
        version = regulations.version(),
        "Regulation tables loaded"
    );

    let state = AppState {
        db,
        regulations: Arc::new(regulations),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let openapi = ApiDoc::openapi();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .nest(
            "/api/competitions",
            features::competitions::routes::routes().merge(features::categories::routes::routes()),
        )
        .nest("/api/disciplines", features::disciplines::routes::routes())
        .nest(
            "/api/age-categories",
            features::age_categories::routes::routes(),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
