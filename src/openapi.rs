//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI
//! specification from code. The [`Spec`] struct in this module lists out all
//! the relevant types, routes, and other metadata that will be included in the
//! spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use axum::{Router, routing};
use derive_more::{Deref, DerefMut};
use utoipa::OpenApi;

use crate::http::extract::Json;

static DESCRIPTION: &str = "\
A small CRUD service for customer records.

# Errors

Every `4xx` and `5xx` response carries an [RFC 9457][rfc9457] problem details body with
content type `application/problem+json`. Asking for a customer that does not exist yields
`404 Not Found` with the detail `Could not find customer with id: <id>` and a `customer_id`
extension member.

Every response also includes an `x-request-id` header, which is useful to include in bug reports.

[rfc9457]: https://www.rfc-editor.org/rfc/rfc9457.html
";

#[derive(Debug, Clone, Deref, DerefMut, OpenApi)]
#[openapi(
  info(
    title = "Customer API",
    description = DESCRIPTION,
    license(
      name = "Licensed under the GPLv3",
      url = "https://www.gnu.org/licenses/gpl-3.0",
    ),
  ),
  paths(
    crate::services::health::http::get,
    crate::services::customers::http::get_many,
    crate::services::customers::http::create,
    crate::services::customers::http::get_single,
    crate::services::customers::http::update,
    crate::services::customers::http::delete,
  ),
  components(
    schemas(
      crate::services::customers::CustomerId,
      crate::services::customers::Customer,
      crate::services::customers::NewCustomer,
      crate::services::customers::CreatedCustomer,
      crate::services::customers::CustomerUpdate,
      crate::services::customers::FetchCustomersResponse,
    ),
  ),
)]
#[allow(missing_docs)]
pub struct Spec(utoipa::openapi::OpenApi);

impl Spec
{
	/// Creates a new [`Spec`].
	pub fn new() -> Self
	{
		Self(Self::openapi())
	}

	/// Serializes the spec as pretty-printed JSON.
	pub fn as_json(&self) -> serde_json::Result<String>
	{
		self.0.to_pretty_json()
	}

	/// Returns an iterator over the registered API routes and their allowed
	/// HTTP methods.
	pub fn routes(&self) -> impl Iterator<Item = (&str, String)>
	{
		self.paths.paths.iter().map(|(path, item)| {
			let methods = [
				("GET", item.get.is_some()),
				("POST", item.post.is_some()),
				("PATCH", item.patch.is_some()),
				("DELETE", item.delete.is_some()),
			]
			.into_iter()
			.filter_map(|(method, present)| present.then_some(method))
			.collect::<Vec<_>>()
			.join(", ");

			(path.as_str(), methods)
		})
	}
}

impl Default for Spec
{
	fn default() -> Self
	{
		Self::new()
	}
}

/// Serves the spec at `/openapi.json`.
pub(crate) fn router() -> Router
{
	Router::new().route("/openapi.json", routing::get(|| async { Json(Spec::new().0) }))
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn lists_every_route()
	{
		let spec = Spec::new();
		let routes = spec.routes().collect::<Vec<_>>();

		assert!(routes.contains(&("/health", String::from("GET"))));
		assert!(routes.contains(&("/customers", String::from("GET, POST"))));
		assert!(routes.contains(&("/customers/{customer_id}", String::from("GET, PATCH, DELETE"))));
	}

	#[test]
	fn serializes_to_json() -> crate::testing::Result
	{
		let json = Spec::new().as_json()?;
		let value = serde_json::from_str::<serde_json::Value>(&json)?;

		assert_eq!(value["info"]["title"], "Customer API");
		assert!(value["components"]["schemas"]["Customer"].is_object());

		Ok(())
	}

	#[tokio::test]
	async fn is_served_over_http() -> crate::testing::Result
	{
		let cx = crate::testing::Context::new().await?;
		let response = cx.get("/docs/openapi.json").await?;

		assert_eq!(response.status(), http::StatusCode::OK);

		let value = crate::testing::json_body::<serde_json::Value>(response).await?;

		assert!(value["paths"]["/customers/{customer_id}"].is_object());

		Ok(())
	}
}
