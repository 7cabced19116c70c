//! [RFC 9457][rfc] - Problem Details for HTTP APIs
//!
//! Every error response produced by the API uses this format.
//!
//! [rfc]: https://www.rfc-editor.org/rfc/rfc9457.html

use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub(crate) use self::problem_type::ProblemType;

mod problem_type;

/// The `Content-Type` used for problem details responses.
pub(crate) const CONTENT_TYPE: &str = "application/problem+json";

type Fields = serde_json::Map<String, serde_json::Value>;

/// [RFC 9457][rfc] - Problem Details
///
/// [rfc]: https://www.rfc-editor.org/rfc/rfc9457.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProblemDetails
{
	/// The problem type.
	///
	/// This determines the [`type`], [`status`] and [`title`] members.
	///
	/// [`type`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.1
	/// [`status`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.2
	/// [`title`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.3
	problem_type: ProblemType,

	/// The response's [`detail`] member.
	///
	/// [`detail`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.4
	detail: Option<Cow<'static, str>>,

	/// Additional fields to include in the response.
	///
	/// This corresponds to [Section 3.2] of the RFC.
	///
	/// [Section 3.2]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.2
	extension_members: Fields,
}

impl ProblemDetails
{
	/// Creates a new [`ProblemDetails`] object for the given [`ProblemType`].
	pub(crate) fn new(problem_type: ProblemType) -> Self
	{
		Self { problem_type, detail: None, extension_members: Fields::new() }
	}

	pub(crate) fn detail(&self) -> Option<&str>
	{
		self.detail.as_deref()
	}

	/// Populates the [`detail`] field.
	///
	/// [`detail`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.4
	pub(crate) fn set_detail(&mut self, detail: impl Into<Cow<'static, str>>)
	{
		self.detail = Some(detail.into());
	}

	/// Adds an extension member.
	///
	/// Reserved member names (`type`, `status`, `title`, `detail`) are ignored.
	pub(crate) fn add_extension_member(&mut self, name: impl Into<String>, value: serde_json::Value)
	{
		let name = name.into();

		if matches!(name.as_str(), "type" | "status" | "title" | "detail") {
			tracing::warn!(name, "attempted to overwrite reserved problem details member");
			return;
		}

		self.extension_members.insert(name, value);
	}
}

impl Serialize for ProblemDetails
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let field_count = 3 // type + status + title
			+ usize::from(self.detail().is_some())
			+ self.extension_members.len();

		let mut serializer = serializer.serialize_map(Some(field_count))?;

		serializer.serialize_entry("type", &format_args!("{}", self.problem_type.uri()))?;
		serializer.serialize_entry("status", &self.problem_type.status().as_u16())?;
		serializer.serialize_entry("title", self.problem_type.title())?;

		if let Some(detail) = self.detail() {
			serializer.serialize_entry("detail", detail)?;
		}

		for (key, value) in &self.extension_members {
			serializer.serialize_entry(key, value)?;
		}

		serializer.end()
	}
}

impl IntoResponse for ProblemDetails
{
	fn into_response(self) -> Response
	{
		let status = self.problem_type.status();

		match serde_json::to_vec(&self) {
			Ok(body) => (
				status,
				[(http::header::CONTENT_TYPE, http::HeaderValue::from_static(CONTENT_TYPE))],
				body,
			)
				.into_response(),
			Err(error) => {
				tracing::error!(%error, problem = ?self, "failed to serialize problem details");
				status.into_response()
			},
		}
	}
}

#[cfg(test)]
mod tests
{
	use serde_json::json;

	use super::*;

	#[test]
	fn serializes_standard_members()
	{
		let mut problem_details = ProblemDetails::new(ProblemType::ResourceNotFound);

		problem_details.set_detail("Could not find customer with id: 42");
		problem_details.add_extension_member("customer_id", json!(42));

		let json = serde_json::to_value(&problem_details).unwrap_or_default();

		assert_eq!(json["type"], ProblemType::ResourceNotFound.uri().to_string());
		assert_eq!(json["status"], 404);
		assert_eq!(json["title"], "resource not found");
		assert_eq!(json["detail"], "Could not find customer with id: 42");
		assert_eq!(json["customer_id"], 42);
	}

	#[test]
	fn omits_missing_detail()
	{
		let problem_details = ProblemDetails::new(ProblemType::Internal);
		let json = serde_json::to_value(&problem_details).unwrap_or_default();

		assert!(json.get("detail").is_none(), "{json}");
		assert_eq!(problem_details.detail(), None);
	}

	#[test]
	fn reserved_members_cannot_be_overwritten()
	{
		let mut problem_details = ProblemDetails::new(ProblemType::InvalidPathParameters);

		problem_details.add_extension_member("status", json!(200));

		let json = serde_json::to_value(&problem_details).unwrap_or_default();

		assert_eq!(json["status"], 400);
		assert_eq!(problem_details.problem_type, ProblemType::InvalidPathParameters);
	}

	#[test]
	fn response_uses_problem_content_type()
	{
		let response = ProblemDetails::new(ProblemType::DeserializeRequestBody).into_response();

		assert_eq!(response.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
		assert_eq!(
			response.headers().get(http::header::CONTENT_TYPE),
			Some(&http::HeaderValue::from_static(CONTENT_TYPE)),
		);
	}
}
