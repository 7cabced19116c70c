//! HTTP response types.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// An empty response with status `204 No Content`.
#[derive(Debug)]
pub(crate) struct NoContent;

impl IntoResponse for NoContent
{
	fn into_response(self) -> Response
	{
		StatusCode::NO_CONTENT.into_response()
	}
}

/// A JSON response with status `201 Created`.
#[derive(Debug)]
pub(crate) struct Created<T>(pub T)
where
	T: Serialize;

impl<T: Serialize> IntoResponse for Created<T>
{
	fn into_response(self) -> Response
	{
		(StatusCode::CREATED, Json(self.0)).into_response()
	}
}
