//! A middleware for logging incoming requests and outgoing responses.
//!
//! The layer type produced by [`tower_http`] is unnameable because of the
//! closures involved, so it is constructed by a macro instead of a function.

/// Creates a [`TraceLayer`] that opens one span per request.
///
/// The span records the request's `x-request-id` header, which is expected
/// to be set by an outer [`SetRequestIdLayer`].
///
/// [`TraceLayer`]: tower_http::trace::TraceLayer
/// [`SetRequestIdLayer`]: tower_http::request_id::SetRequestIdLayer
macro_rules! layer {
	() => {
		tower_http::trace::TraceLayer::new_for_http()
			.make_span_with(|request: &axum::extract::Request| {
				let request_id = request
					.headers()
					.get("x-request-id")
					.and_then(|value| value.to_str().ok())
					.unwrap_or_default();

				tracing::info_span! {
					target: "customer_api::http",
					"request",
					request.id = request_id,
					request.method = %request.method(),
					request.uri = %request.uri(),
					request.version = ?request.version(),
					response.status = tracing::field::Empty,
				}
			})
			.on_request(|_request: &axum::extract::Request, _span: &tracing::Span| {
				tracing::debug!(target: "customer_api::http", "starting to process request");
			})
			.on_response(
				|response: &axum::response::Response,
				 latency: std::time::Duration,
				 span: &tracing::Span| {
					span.record("response.status", response.status().as_u16());
					tracing::info!(target: "customer_api::http", ?latency, "finished processing request");
				},
			)
	};
}

pub(crate) use layer;
