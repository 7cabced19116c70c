use std::any::type_name;

use axum::extract::FromRequestParts;
use http::request;
use serde::de::DeserializeOwned;

use crate::http::problem_details::ProblemType;
use crate::runtime;

/// Path parameters.
#[derive(Debug)]
pub(crate) struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
	T: DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection>
	{
		match axum::extract::Path::<T>::from_request_parts(parts, state).await {
			Ok(axum::extract::Path(value)) => Ok(Self(value)),
			Err(rejection) => {
				tracing::debug!(%rejection, "type" = type_name::<T>(), "rejecting path");
				Err(runtime::Error::bad_request(ProblemType::InvalidPathParameters, rejection))
			},
		}
	}
}
