//! Request / Response types for this service.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The default amount of customers returned by a single request.
pub const DEFAULT_LIMIT: u32 = 100;

/// The maximum amount of customers returned by a single request.
pub const MAX_LIMIT: u32 = 1000;

/// A customer's ID.
///
/// IDs are opaque; any integer is accepted, including zero and negative
/// values, even though the database only ever hands out positive ones.
#[derive(
	Debug,
	Display,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	From,
	Into,
	Serialize,
	Deserialize,
	sqlx::Type,
	ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CustomerId(i64);

/// A customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Customer
{
	/// The customer's ID.
	pub id: CustomerId,

	/// The customer's first name.
	pub first_name: String,

	/// The customer's last name.
	pub last_name: String,
}

/// Request payload for creating a new customer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCustomer
{
	/// The customer's first name.
	pub first_name: String,

	/// The customer's last name.
	pub last_name: String,
}

/// Response payload for creating a new customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CreatedCustomer
{
	/// The ID the new customer was assigned.
	pub customer_id: CustomerId,
}

/// Request payload for updating an existing customer.
///
/// Fields which are omitted keep their current value.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerUpdate
{
	/// A new first name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,

	/// A new last name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
}

/// Query parameters for fetching many customers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchCustomersRequest
{
	/// Maximum amount of customers to return.
	///
	/// Values above 1000 are clamped.
	#[serde(default = "default_limit")]
	pub limit: u32,

	/// How many customers to skip.
	#[serde(default)]
	pub offset: u32,
}

impl FetchCustomersRequest
{
	/// Returns [`limit`] clamped to [`MAX_LIMIT`].
	///
	/// [`limit`]: FetchCustomersRequest::limit
	pub fn effective_limit(&self) -> u32
	{
		self.limit.min(MAX_LIMIT)
	}
}

impl Default for FetchCustomersRequest
{
	fn default() -> Self
	{
		Self { limit: DEFAULT_LIMIT, offset: 0 }
	}
}

fn default_limit() -> u32
{
	DEFAULT_LIMIT
}

/// Response payload for fetching many customers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FetchCustomersResponse
{
	/// The customers on this page, ordered by ID.
	pub customers: Vec<Customer>,

	/// How many customers are stored in total.
	pub total: u64,
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn limit_defaults_to_100() -> crate::testing::Result
	{
		let req = serde_json::from_value::<FetchCustomersRequest>(serde_json::json!({}))?;

		assert_eq!(req.limit, DEFAULT_LIMIT);
		assert_eq!(req.offset, 0);
		assert_eq!(req.effective_limit(), 100);

		Ok(())
	}

	#[test]
	fn limit_is_clamped_to_1000()
	{
		let req = FetchCustomersRequest { limit: 5000, offset: 0 };

		assert_eq!(req.effective_limit(), MAX_LIMIT);

		let req = FetchCustomersRequest { limit: 1000, offset: 0 };

		assert_eq!(req.effective_limit(), 1000);
	}
}
