use crate::infrastructure::jwt::JwtService;
use crate::presentation::graphql::AppSchema;
use crate::presentation::session::Session;
use actix_web::{web, HttpResponse, Responder};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/graphql", web::post().to(graphql))
        .route("/graphql", web::get().to(playground))
        .route("/graphql/schema", web::get().to(schema_sdl))
        .route("/health", web::get().to(health));
}

pub async fn graphql(
    schema: web::Data<AppSchema>,
    jwt_service: web::Data<Arc<JwtService>>,
    credentials: Option<BearerAuth>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let session = Session::from_bearer(&jwt_service, credentials.as_ref().map(BearerAuth::token));

    tracing::debug!("Executing GraphQL request, user_id={:?}", session.user_id);

    schema.execute(req.into_inner().data(session)).await.into()
}

pub async fn playground() -> impl Responder {
    let config = GraphQLPlaygroundConfig::new("/graphql")
        .title(concat!(env!("CARGO_PKG_NAME"), " - Playground"));

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(config))
}

pub async fn schema_sdl(schema: web::Data<AppSchema>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(schema.sdl())
}

pub async fn health() -> impl Responder {
    "ok"
}
