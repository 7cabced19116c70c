//! A service for managing customers.
//!
//! Every operation that targets a single customer reports a missing record as
//! [`Error::CustomerNotFound`]. The HTTP layer turns that into a `404`.

use crate::database;

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{
	CreatedCustomer,
	Customer,
	CustomerId,
	CustomerUpdate,
	DEFAULT_LIMIT,
	FetchCustomersRequest,
	FetchCustomersResponse,
	MAX_LIMIT,
	NewCustomer,
};

pub(crate) mod http;


/// A service for managing customers.
#[derive(Debug, Clone)]
pub struct CustomerService
{
	database: database::Pool,
}

impl CustomerService
{
	/// Create a new [`CustomerService`].
	pub(crate) fn new(database: database::Pool) -> Self
	{
		Self { database }
	}

	/// Fetch a customer.
	///
	/// Returns [`Error::CustomerNotFound`] if there is no customer with the
	/// given ID.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_customer(&self, customer_id: CustomerId) -> Result<Customer>
	{
		sqlx::query_as::<_, Customer>(
			r"
			SELECT
			  id,
			  first_name,
			  last_name
			FROM
			  Customers
			WHERE
			  id = ?
			",
		)
		.bind(customer_id)
		.fetch_optional(&self.database)
		.await?
		.ok_or_else(|| Error::customer_not_found(customer_id))
	}

	/// Fetch many customers.
	///
	/// An empty page is not an error.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_customers(
		&self,
		req: FetchCustomersRequest,
	) -> Result<FetchCustomersResponse>
	{
		let mut txn = self.database.begin().await?;

		let customers = sqlx::query_as::<_, Customer>(
			r"
			SELECT
			  id,
			  first_name,
			  last_name
			FROM
			  Customers
			ORDER BY
			  id ASC
			LIMIT
			  ?
			OFFSET
			  ?
			",
		)
		.bind(i64::from(req.effective_limit()))
		.bind(i64::from(req.offset))
		.fetch_all(&mut *txn)
		.await?;

		let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Customers")
			.fetch_one(&mut *txn)
			.await?;

		txn.commit().await?;

		Ok(FetchCustomersResponse { customers, total: total.unsigned_abs() })
	}

	/// Create a new customer.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn create_customer(&self, req: NewCustomer) -> Result<CreatedCustomer>
	{
		let customer_id: CustomerId = sqlx::query(
			r"
			INSERT INTO
			  Customers (first_name, last_name)
			VALUES
			  (?, ?)
			",
		)
		.bind(&req.first_name)
		.bind(&req.last_name)
		.execute(&self.database)
		.await?
		.last_insert_rowid()
		.into();

		tracing::info!(target: "customer_api::audit_log", %customer_id, "created customer");

		Ok(CreatedCustomer { customer_id })
	}

	/// Update an existing customer.
	///
	/// Returns [`Error::CustomerNotFound`] if there is no customer with the
	/// given ID, even if the update itself is empty.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn update_customer(
		&self,
		customer_id: CustomerId,
		update: CustomerUpdate,
	) -> Result<()>
	{
		let query_result = sqlx::query(
			r"
			UPDATE
			  Customers
			SET
			  first_name = COALESCE(?, first_name),
			  last_name = COALESCE(?, last_name)
			WHERE
			  id = ?
			",
		)
		.bind(update.first_name)
		.bind(update.last_name)
		.bind(customer_id)
		.execute(&self.database)
		.await?;

		if query_result.rows_affected() == 0 {
			return Err(Error::customer_not_found(customer_id));
		}

		tracing::info!(target: "customer_api::audit_log", %customer_id, "updated customer");

		Ok(())
	}

	/// Delete a customer.
	///
	/// Returns [`Error::CustomerNotFound`] if there is no customer with the
	/// given ID.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn delete_customer(&self, customer_id: CustomerId) -> Result<()>
	{
		let query_result = sqlx::query("DELETE FROM Customers WHERE id = ?")
			.bind(customer_id)
			.execute(&self.database)
			.await?;

		if query_result.rows_affected() == 0 {
			return Err(Error::customer_not_found(customer_id));
		}

		tracing::info!(target: "customer_api::audit_log", %customer_id, "deleted customer");

		Ok(())
	}
}
