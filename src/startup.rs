use crate::routes;
use axum::{
    routing::{get, IntoMakeService},
    Router, Server,
};
use hyper::server::conn::AddrIncoming;
use std::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};

/// Builds the router with every route and the request logging middleware.
///
/// Only `GET` is registered on each path, so axum answers other methods with `405 Method Not
/// Allowed` and unknown paths with `404 Not Found`.
pub fn app() -> Router {
    // Configure service to have request IDs show up correctly in logs produced by
    // `tower_http::trace::Trace`. Modified from: https://docs.rs/tower-http/latest/tower_http/request_id/index.html#using-trace
    let trace_layer = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        // Log requests and responses.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        // Propagate the header to the response before the response reaches `TraceLayer`.
        .propagate_x_request_id();

    Router::new()
        .route("/health", get(routes::health))
        .route("/meals", get(routes::meals))
        .layer(trace_layer)
}

/// Serves [`app`] on an already bound listener. Binding is left to the caller so tests can use an
/// OS-assigned port.
pub fn run(listener: TcpListener) -> hyper::Result<Server<AddrIncoming, IntoMakeService<Router>>> {
    Ok(axum::Server::from_tcp(listener)?.serve(app().into_make_service()))
}
