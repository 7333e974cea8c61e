use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, http::HeaderMap, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use rosters::modules::rosters::adapters::outbound::driver_directory_in_memory::InMemoryDriverDirectory;
use rosters::modules::rosters::adapters::outbound::email_driver_notifier::EmailDriverNotifier;
use rosters::modules::rosters::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use rosters::shared::infrastructure::mailer::Mailer;
use rosters::shared::infrastructure::mailer::http::HttpMailer;
use rosters::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use rosters::shell::actor::actor_from_headers;
use rosters::shell::config::AppConfig;
use rosters::shell::graphql::{AppSchema, build_schema};
use rosters::shell::http::router;
use rosters::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let directory = match &config.drivers_file {
        Some(path) => {
            let json = tokio::fs::read_to_string(path).await?;
            let directory = InMemoryDriverDirectory::from_json(&json)?;
            tracing::info!(path = %path, "driver directory seeded");
            directory
        }
        None => InMemoryDriverDirectory::new(),
    };

    let mailer: Arc<dyn Mailer> = match &config.mail {
        Some(mail) => Arc::new(HttpMailer::new(&mail.api_url, &mail.api_key)),
        None => {
            tracing::warn!("no mail provider configured, schedule emails stay in memory");
            Arc::new(InMemoryMailer::new())
        }
    };
    let notifier = EmailDriverNotifier::new(mailer, config.mail_from(), &config.app_name);

    let state = AppState::new(
        Arc::new(InMemoryRosterStore::new()),
        Arc::new(directory),
        notifier,
        config.notification_timeout,
    );
    let schema = build_schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(actor) = actor_from_headers(&headers) {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
