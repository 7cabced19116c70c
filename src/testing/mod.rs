//! Utilities for unit & integration tests.

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use http::{Method, Request, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::database;

pub(crate) type Error = anyhow::Error;
pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

/// A freshly migrated in-memory database plus the full API router on top of
/// it.
#[derive(Debug)]
pub(crate) struct Context
{
	pub(crate) database: database::Pool,
	router: Router,
}

impl Context
{
	pub(crate) async fn new() -> Result<Self>
	{
		let database = database::connect_in_memory().await?;

		database::migrate(&database).await?;

		let router = crate::router(database.clone());

		Ok(Self { database, router })
	}

	/// Sends a request through the router without binding a socket.
	pub(crate) async fn send(&self, request: Request<Body>) -> Result<Response>
	{
		let response = self.router.clone().oneshot(request).await?;

		Ok(response)
	}

	pub(crate) async fn get(&self, uri: &str) -> Result<Response>
	{
		self.send(Request::get(uri).body(Body::empty())?).await
	}

	pub(crate) async fn delete(&self, uri: &str) -> Result<Response>
	{
		self.send(Request::delete(uri).body(Body::empty())?).await
	}

	pub(crate) async fn send_json(
		&self,
		method: Method,
		uri: &str,
		body: &impl Serialize,
	) -> Result<Response>
	{
		let request = Request::builder()
			.method(method)
			.uri(uri)
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(serde_json::to_vec(body)?))?;

		self.send(request).await
	}
}

/// Collects a response body and decodes it as JSON.
pub(crate) async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T>
{
	let bytes = response.into_body().collect().await?.to_bytes();

	Ok(serde_json::from_slice(&bytes)?)
}
