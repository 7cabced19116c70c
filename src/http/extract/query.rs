use axum::extract::FromRequestParts;
use http::request;
use serde::de::DeserializeOwned;

use crate::http::problem_details::ProblemType;
use crate::runtime;

/// URI query parameters.
#[derive(Debug)]
pub(crate) struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection>
	{
		axum::extract::Query::<T>::from_request_parts(parts, state)
			.await
			.map(|axum::extract::Query(value)| Self(value))
			.map_err(|rejection| {
				runtime::Error::bad_request(ProblemType::InvalidQueryParameters, rejection)
			})
	}
}
