//! The main error type.
//!
//! This is returned by all fallible HTTP handlers, extractors, middlewares,
//! etc. Service errors are converted into it at the HTTP boundary, and it is
//! then rendered as an [RFC 9457] problem details response.
//!
//! [RFC 9457]: https://www.rfc-editor.org/rfc/rfc9457.html

use std::fmt;
use std::panic::Location;

use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::problem_details::{ProblemDetails, ProblemType};

/// Type alias that defaults to our [`Error`] as the default error type, but is
/// still overridable and therefore compatible with [`std::result::Result`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Convenience type alias.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main runtime error type.
///
/// This is the only error type allowed to reach users!
pub struct Error
{
	/// We box this so our error type is only 1 pointer wide.
	inner: Box<Inner>,
}

/// The different kinds of errors that can occur at runtime.
#[derive(Debug, thiserror::Error)]
enum ErrorKind
{
	/// Request was somehow malformed.
	#[error("{reason}")]
	BadRequest
	{
		/// Which part of the request was malformed.
		problem_type: ProblemType,

		/// Why we rejected it.
		reason: BoxError,
	},

	/// A resource does not exist.
	#[error("{message}")]
	NotFound
	{
		/// Message describing what could not be found.
		message: String,
	},

	/// Something went wrong communicating with the database.
	#[error("database error; please report this incident")]
	Database(#[from] sqlx::Error),

	/// An HTTP handler panicked, but was caught by middleware.
	#[error("something unexpected happened; please report this incident")]
	Panic,
}

impl Error
{
	/// Create a new [`Error`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { inner: Box::new(Inner::new(kind)) }
	}

	/// Returns the original error source.
	pub fn source(&self) -> &(dyn std::error::Error + Send + Sync + 'static)
	{
		&self.inner.kind
	}

	/// Returns the source code location of the original error source.
	pub fn source_location(&self) -> Location<'static>
	{
		self.inner.source_location
	}

	/// Returns the appropriate HTTP status code to use in an error response.
	pub fn status(&self) -> http::StatusCode
	{
		self.problem_type().status()
	}

	/// Returns the problem type used when rendering this error.
	pub(crate) fn problem_type(&self) -> ProblemType
	{
		match self.inner.kind {
			ErrorKind::BadRequest { problem_type, .. } => problem_type,
			ErrorKind::NotFound { .. } => ProblemType::ResourceNotFound,
			ErrorKind::Database(_) | ErrorKind::Panic => ProblemType::Internal,
		}
	}

	/// Indicate that an HTTP handler panicked but the panic was caught.
	#[track_caller]
	pub(crate) fn panic() -> Self
	{
		Self::new(ErrorKind::Panic)
	}

	/// Reject a request because it was malformed in some way.
	#[track_caller]
	pub(crate) fn bad_request(problem_type: ProblemType, reason: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::BadRequest { problem_type, reason: reason.into() })
	}

	/// Reject a request because a requested resource was not found.
	///
	/// `what` is used verbatim as the response's `detail` member.
	#[track_caller]
	pub(crate) fn not_found(what: impl fmt::Display) -> Self
	{
		Self::new(ErrorKind::NotFound { message: what.to_string() })
	}

	/// Attaches an extra member to the problem details response.
	pub(crate) fn with_extension_member<V>(mut self, name: &'static str, value: &V) -> Self
	where
		V: Serialize + ?Sized,
	{
		match serde_json::to_value(value) {
			Ok(value) => self.inner.extension_members.push((name, value)),
			Err(error) => {
				tracing::warn!(name, %error, "failed to serialize extension member");
			},
		}

		self
	}
}

impl fmt::Debug for Error
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "[{}]: {}", self.source_location(), self.source())
	}
}

impl fmt::Display for Error
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(self.source(), fmt)
	}
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		let problem_type = self.problem_type();

		if problem_type.status().is_server_error() {
			tracing::error! {
				target: "customer_api::audit_log",
				kind = ?self.inner.kind,
				source_location = %self.source_location(),
				"internal server error: \"{self}\"",
			};
		} else {
			tracing::debug! {
				status = %problem_type.status(),
				source_location = %self.source_location(),
				"runtime error: \"{self}\"",
			};
		}

		let mut problem_details = ProblemDetails::new(problem_type);

		problem_details.set_detail(self.to_string());

		for (name, value) in self.inner.extension_members {
			problem_details.add_extension_member(name, value);
		}

		problem_details.into_response()
	}
}

impl From<sqlx::Error> for Error
{
	#[track_caller]
	fn from(value: sqlx::Error) -> Self
	{
		Self::new(value.into())
	}
}

/// The actual representation of [`Error`].
struct Inner
{
	/// Which particular error we're dealing with.
	kind: ErrorKind,

	/// The source code location of where this [`Error`] was created.
	source_location: Location<'static>,

	/// Extra members to include in the response body.
	extension_members: Vec<(&'static str, serde_json::Value)>,
}

impl Inner
{
	/// Create a new [`Inner`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { kind, source_location: *Location::caller(), extension_members: Vec::new() }
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn not_found_uses_message_verbatim()
	{
		let error = Error::not_found("Could not find customer with id: 7");

		assert_eq!(error.status(), http::StatusCode::NOT_FOUND);
		assert_eq!(error.to_string(), "Could not find customer with id: 7");
	}

	#[test]
	fn database_errors_are_internal()
	{
		let error = Error::from(sqlx::Error::PoolTimedOut);

		assert_eq!(error.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(error.to_string(), "database error; please report this incident");
	}

	#[test]
	fn records_creation_site()
	{
		let error = Error::panic();

		assert_eq!(error.source_location().file(), file!());
	}
}
