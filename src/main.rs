use std::{sync::Arc, time::Duration};

use actix_cors::Cors;
use actix_web::{guard, middleware::Logger, web, App, HttpResponse, HttpServer};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use quiznotes_server::{
    app_state::AppState,
    config::Config,
    graphql::{create_schema, Schema},
    handlers,
    middleware::RequestIdMiddleware,
    services::session_service::SessionService,
};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

async fn graphql_handler(schema: web::Data<Schema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

fn spawn_session_sweeper(sessions: Arc<SessionService>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sessions.prune_idle(chrono::Utc::now()).await;
        }
    });
}

fn cors(config: &Config) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if config.cors_allowed_origin == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(&config.cors_allowed_origin)
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let schema = create_schema(state.clone());
    spawn_session_sweeper(Arc::clone(&state.session_service));

    log::info!("Starting HTTP server on {}:{}", host, port);
    log::info!("Quiz generation endpoint: {}", state.config.generate_quiz_endpoint());
    log::info!("GraphiQL playground: http://{}:{}/graphiql", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(cors(&state.config))
            .configure(handlers::configure)
            .service(web::resource("/graphql").guard(guard::Post()).to(graphql_handler))
            .service(web::resource("/graphiql").guard(guard::Get()).to(graphiql))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
