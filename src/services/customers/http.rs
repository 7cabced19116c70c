//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{
	CreatedCustomer,
	Customer,
	CustomerId,
	CustomerService,
	CustomerUpdate,
	FetchCustomersRequest,
	FetchCustomersResponse,
	NewCustomer,
};
use crate::http::extract::{Json, Path, Query};
use crate::http::response::{Created, NoContent};
use crate::runtime::Result;

impl From<CustomerService> for Router
{
	fn from(svc: CustomerService) -> Self
	{
		Router::new()
			.route("/", routing::get(get_many).post(create))
			.route(
				"/{customer_id}",
				routing::get(get_single).patch(update).delete(delete),
			)
			.with_state(svc)
	}
}

/// Fetch customers.
///
/// Customers are ordered by ID. An empty page is not an error.
#[utoipa::path(
  get,
  path = "/customers",
  tag = "Customers",
  params(FetchCustomersRequest),
  responses(
    (status = OK, body = FetchCustomersResponse),
    (status = BAD_REQUEST, description = "invalid query parameters"),
  ),
)]
pub(crate) async fn get_many(
	State(svc): State<CustomerService>,
	Query(req): Query<FetchCustomersRequest>,
) -> Result<Json<FetchCustomersResponse>>
{
	let res = svc.fetch_customers(req).await?;

	Ok(Json(res))
}

/// Create a new customer.
#[utoipa::path(
  post,
  path = "/customers",
  tag = "Customers",
  request_body = NewCustomer,
  responses(
    (status = CREATED, body = CreatedCustomer),
    (status = UNPROCESSABLE_ENTITY, description = "malformed request body"),
  ),
)]
pub(crate) async fn create(
	State(svc): State<CustomerService>,
	Json(req): Json<NewCustomer>,
) -> Result<Created<CreatedCustomer>>
{
	let res = svc.create_customer(req).await?;

	Ok(Created(res))
}

/// Fetch a specific customer by their ID.
#[utoipa::path(
  get,
  path = "/customers/{customer_id}",
  tag = "Customers",
  params(("customer_id" = i64, Path, description = "the customer's ID")),
  responses(
    (status = OK, body = Customer),
    (status = BAD_REQUEST, description = "the ID is not an integer"),
    (status = NOT_FOUND, description = "there is no customer with this ID"),
  ),
)]
pub(crate) async fn get_single(
	State(svc): State<CustomerService>,
	Path(customer_id): Path<CustomerId>,
) -> Result<Json<Customer>>
{
	let customer = svc.fetch_customer(customer_id).await?;

	Ok(Json(customer))
}

/// Update an existing customer.
///
/// Omitted fields keep their current value.
#[utoipa::path(
  patch,
  path = "/customers/{customer_id}",
  tag = "Customers",
  params(("customer_id" = i64, Path, description = "the customer's ID")),
  request_body = CustomerUpdate,
  responses(
    (status = NO_CONTENT),
    (status = BAD_REQUEST, description = "the ID is not an integer"),
    (status = NOT_FOUND, description = "there is no customer with this ID"),
    (status = UNPROCESSABLE_ENTITY, description = "malformed request body"),
  ),
)]
pub(crate) async fn update(
	State(svc): State<CustomerService>,
	Path(customer_id): Path<CustomerId>,
	Json(update): Json<CustomerUpdate>,
) -> Result<NoContent>
{
	svc.update_customer(customer_id, update).await?;

	Ok(NoContent)
}

/// Delete a customer.
#[utoipa::path(
  delete,
  path = "/customers/{customer_id}",
  tag = "Customers",
  params(("customer_id" = i64, Path, description = "the customer's ID")),
  responses(
    (status = NO_CONTENT),
    (status = BAD_REQUEST, description = "the ID is not an integer"),
    (status = NOT_FOUND, description = "there is no customer with this ID"),
  ),
)]
pub(crate) async fn delete(
	State(svc): State<CustomerService>,
	Path(customer_id): Path<CustomerId>,
) -> Result<NoContent>
{
	svc.delete_customer(customer_id).await?;

	Ok(NoContent)
}
