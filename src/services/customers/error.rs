//! The errors that can occur when interacting with this service.

use thiserror::Error;

use super::CustomerId;
use crate::runtime;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the customer service.
#[derive(Debug, Error)]
pub enum Error
{
	/// A request dedicated to a specific customer was made, but the customer
	/// could not be found.
	#[error("Could not find customer with id: {customer_id}")]
	CustomerNotFound
	{
		/// The ID we looked for.
		customer_id: CustomerId,
	},

	/// Something went wrong communicating with the database.
	#[error("database error; please report this incident")]
	Database(#[from] sqlx::Error),
}

impl Error
{
	/// Signals that there is no customer with the given ID.
	pub fn customer_not_found(customer_id: impl Into<CustomerId>) -> Self
	{
		Self::CustomerNotFound { customer_id: customer_id.into() }
	}
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(error: Error) -> Self
	{
		match error {
			Error::CustomerNotFound { customer_id } => {
				Self::not_found(&error).with_extension_member("customer_id", &customer_id)
			},
			Error::Database(error) => runtime::Error::from(error),
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn message_is_prefix_followed_by_id()
	{
		for id in [42, 0, -1, 1, i64::MIN, i64::MAX] {
			let error = Error::customer_not_found(id);

			assert_eq!(error.to_string(), format!("Could not find customer with id: {id}"));
		}
	}

	#[test]
	fn same_id_same_message()
	{
		let first = Error::customer_not_found(1337);
		let second = Error::customer_not_found(CustomerId::from(1337));

		assert_eq!(first.to_string(), second.to_string());
	}

	#[test]
	fn different_ids_different_messages()
	{
		let first = Error::customer_not_found(7);
		let second = Error::customer_not_found(70);

		assert_ne!(first.to_string(), second.to_string());
	}

	#[test]
	fn boundary_maps_to_not_found()
	{
		let error = runtime::Error::from(Error::customer_not_found(42));

		assert_eq!(error.status(), http::StatusCode::NOT_FOUND);
		assert_eq!(error.to_string(), "Could not find customer with id: 42");
	}

	#[test]
	fn database_errors_are_not_conflated_with_not_found()
	{
		let error = runtime::Error::from(Error::from(sqlx::Error::RowNotFound));

		assert_eq!(error.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn database_errors_record_this_file_as_source()
	{
		let error = runtime::Error::from(Error::from(sqlx::Error::PoolTimedOut));

		assert_eq!(error.source_location().file(), file!());
	}
}
