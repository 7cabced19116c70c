use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::problem_details::ProblemType;
use crate::runtime;

/// A JSON request or response body.
#[derive(Debug)]
pub(crate) struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		axum::Json::<T>::from_request(request, state)
			.await
			.map(|axum::Json(value)| Self(value))
			.map_err(|rejection| {
				runtime::Error::bad_request(ProblemType::DeserializeRequestBody, rejection)
			})
	}
}

impl<T: Serialize> IntoResponse for Json<T>
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}
