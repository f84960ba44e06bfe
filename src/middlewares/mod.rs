use crate::StateTrait;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    timeout::TimeoutLayer,
    ServiceBuilderExt,
};

/// Wraps the routes in the middleware stack shared by every endpoint.
///
/// A request that outlives `request_timeout` is answered with `408`; its
/// handler future is dropped, rolling back any transaction it still holds.
pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middlewares = ServiceBuilder::new()
        .catch_panic()
        .set_x_request_id(MakeRequestUuid)
        .propagate_x_request_id()
        .trace_for_http()
        .compression()
        .decompression()
        .layer(TimeoutLayer::new(state.request_timeout()))
        .layer(cors_layer)
        .into_inner();

    router.layer(middlewares).with_state(state)
}
