//! A middleware for catching panics.
//!
//! Normally, if an HTTP handler panics, the connection will simply be closed.
//! This middleware will catch panics and return a proper HTTP response.

use std::any::Any;

use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::runtime;

/// Creates a middleware layer for catching panics and turning them into
/// responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// A custom panic handler for [`CatchPanicLayer`].
#[derive(Debug, Clone)]
pub(crate) struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		_err: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		runtime::Error::panic().into_response()
	}
}

#[cfg(test)]
mod tests
{
	use axum::Router;
	use axum::body::Body;
	use axum::routing::get;
	use http::{Request, StatusCode};
	use tower::ServiceExt;

	use crate::testing;

	async fn explode() -> &'static str
	{
		panic!("oh no")
	}

	#[tokio::test]
	async fn panics_become_internal_server_errors() -> testing::Result
	{
		let router = Router::new()
			.route("/", get(explode))
			.layer(super::layer());

		let response = router.oneshot(Request::get("/").body(Body::empty())?).await?;

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

		let body = testing::json_body::<serde_json::Value>(response).await?;

		assert_eq!(body["detail"], "something unexpected happened; please report this incident");

		Ok(())
	}
}
