//! Customer API - a small CRUD service for customer records.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// The main server entrypoint for the API.
#[tokio::main]
async fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	match Cli::parse().action.unwrap_or_default() {
		Action::Serve { env_file } => {
			if let Some(path) = env_file.as_deref() {
				dotenvy::from_filename(path).wrap_err("load custom `.env` file")?;
			} else {
				load_default_env_file(dotenvy::dotenv())?;
			}
		},
		Action::Openapi => {
			let json = customer_api::openapi::Spec::new().as_json()?;
			let mut stdout = io::stdout().lock();

			stdout.write_all(json.as_bytes())?;
			stdout.write_all(b"\n")?;

			return Ok(());
		},
	}

	customer_api::runtime::panic_hook::install();
	tracing_subscriber::fmt()
		.pretty()
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let runtime_span = tracing::info_span!("runtime::startup");
	let config = runtime_span
		.in_scope(customer_api::runtime::Config::new)
		.wrap_err("load config")?;

	customer_api::run(config)
		.instrument(runtime_span)
		.await
		.wrap_err("run API")?;

	Ok(())
}

/// Accepts a missing `.env` file, as long as the environment is set by other
/// means; any other failure is reported.
fn load_default_env_file(result: dotenvy::Result<PathBuf>) -> color_eyre::Result<()>
{
	match result {
		Ok(_) => Ok(()),
		Err(error) if error.not_found() => Ok(()),
		Err(error) => Err(error).wrap_err("load `.env` file"),
	}
}

/// Customer API
#[derive(Debug, Parser)]
#[command(name = "customer-api")]
struct Cli
{
	/// What you want to do
	#[command(subcommand)]
	action: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action
{
	/// Serve the API
	Serve
	{
		/// Use a custom `.env` file.
		#[arg(long, name = "FILE")]
		env_file: Option<PathBuf>,
	},

	/// Print the API's OpenAPI spec as JSON.
	Openapi,
}

impl Default for Action
{
	fn default() -> Self
	{
		Self::Serve { env_file: None }
	}
}
