//! A very basic service that acts as a healthcheck.

pub(crate) mod http;

/// A service that simply responds if the API is healthy.
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthService;

impl HealthService
{
	/// Create a new [`HealthService`].
	pub fn new() -> Self
	{
		Self
	}

	/// Says hello to the world.
	#[tracing::instrument(level = "trace", skip(self))]
	pub async fn hello(&self) -> &'static str
	{
		"(͡ ͡° ͜ つ ͡͡°)"
	}
}

#[cfg(test)]
mod tests
{
	use http::StatusCode;
	use http_body_util::BodyExt;

	use crate::testing::{self, Context};

	#[tokio::test]
	async fn says_hello() -> testing::Result
	{
		let cx = Context::new().await?;
		let response = cx.get("/health").await?;

		assert_eq!(response.status(), StatusCode::OK);

		let body = response.into_body().collect().await?.to_bytes();

		assert_eq!(&body[..], "(͡ ͡° ͜ つ ͡͡°)".as_bytes());

		Ok(())
	}

	#[tokio::test]
	async fn unknown_routes_are_not_found() -> testing::Result
	{
		let cx = Context::new().await?;
		let response = cx.get("/nope").await?;

		assert_eq!(response.status(), StatusCode::NOT_FOUND);

		Ok(())
	}
}
