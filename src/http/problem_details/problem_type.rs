/// The kinds of problems the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProblemType
{
	InvalidPathParameters,
	InvalidQueryParameters,
	DeserializeRequestBody,

	ResourceNotFound,

	Internal,
}

macro_rules! uri {
	($problem:literal) => {
		http::Uri::from_static(concat!(
			"https://github.com/AlphaKeks/customer-api/blob/master/docs/problems.md#",
			$problem,
		))
	};
}

impl ProblemType
{
	/// The URI to encode in the response's [`type`] member.
	///
	/// [`type`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.1
	pub(crate) fn uri(self) -> http::Uri
	{
		match self {
			Self::InvalidPathParameters => uri!("invalid-path-parameters"),
			Self::InvalidQueryParameters => uri!("invalid-query-parameters"),
			Self::DeserializeRequestBody => uri!("deserialize-request-body"),
			Self::ResourceNotFound => uri!("resource-not-found"),
			Self::Internal => uri!("internal-server-error"),
		}
	}

	/// The status code to use in the response.
	pub(crate) fn status(self) -> http::StatusCode
	{
		match self {
			Self::InvalidPathParameters | Self::InvalidQueryParameters => {
				http::StatusCode::BAD_REQUEST
			},
			Self::DeserializeRequestBody => http::StatusCode::UNPROCESSABLE_ENTITY,
			Self::ResourceNotFound => http::StatusCode::NOT_FOUND,
			Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// The response's [`title`] member.
	///
	/// [`title`]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.1.3
	pub(crate) fn title(self) -> &'static str
	{
		match self {
			Self::InvalidPathParameters => "invalid path parameter(s)",
			Self::InvalidQueryParameters => "invalid query parameters",
			Self::DeserializeRequestBody => "failed to deserialize request body",
			Self::ResourceNotFound => "resource not found",
			Self::Internal => "internal server error",
		}
	}
}
