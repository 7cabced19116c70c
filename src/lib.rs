#![doc = include_str!("../README.md")]

/*
 * Customer API - a small CRUD service for customer records.
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::net::SocketAddr;

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub mod setup;
pub mod runtime;
pub mod openapi;

pub mod services;

mod middleware;
mod database;
mod http;
mod signal;

#[cfg(test)]
mod testing;

/// Runs the API until the process receives SIGINT or SIGTERM.
pub async fn run(config: runtime::Config) -> Result<(), setup::Error>
{
	let tcp_listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
	let database = database::connect(config.database_url()).await?;

	database::migrate(&database).await?;

	let server = router(database.clone()).into_make_service_with_connect_info::<SocketAddr>();

	tracing::info!(addr = %tcp_listener.local_addr()?, "listening for http requests");

	axum::serve(tcp_listener, server)
		.with_graceful_shutdown(signal::shutdown())
		.await?;

	tracing::warn!("shut down http server");

	database.close().await;

	Ok(())
}

/// Builds the API's router on top of an already migrated database.
fn router(database: database::Pool) -> axum::Router
{
	use self::services::{CustomerService, HealthService};

	let health_svc = HealthService::new();
	let customer_svc = CustomerService::new(database);

	let routes = axum::Router::new()
		.nest("/health", health_svc.into())
		.nest("/customers", customer_svc.into())
		.nest("/docs", openapi::router());

	with_middleware(routes)
}

/// Wraps `routes` in the middleware every response goes through.
///
/// Request IDs are set and propagated outside of the panic handler, so caught
/// panics still carry an `x-request-id` header.
fn with_middleware(routes: axum::Router) -> axum::Router
{
	routes
		.layer(middleware::logging::layer!())
		.layer(middleware::panic_handler::layer())
		.layer(PropagateRequestIdLayer::x_request_id())
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
