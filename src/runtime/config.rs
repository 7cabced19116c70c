//! Runtime configuration for the API.
//!
//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the environment on startup. See the `.env.example`
//! file in the root of the repository for examples.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::{env, fmt};

use thiserror::Error;
use url::Url;

/// The address the API listens on if `CUSTOMER_API_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
	SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 42069);

/// The API's runtime configuration.
///
/// See [module level docs] for more details.
///
/// [module level docs]: crate::runtime::config
#[derive(Clone)]
pub struct Config
{
	/// [`Inner`] actually contains all the values, we just wrap it so
	/// [`Config`] is cheap to clone.
	inner: Arc<Inner>,
}

/// Error that can occur while initializing the API's [`Config`].
#[derive(Debug, Error)]
pub enum InitializeConfigError
{
	/// A required environment variable was not found or invalid
	/// UTF-8.
	#[error("failed to read configuration value `{var}`: {source}")]
	Env
	{
		/// The variable we tried to read.
		var: &'static str,

		/// The underlying error.
		source: env::VarError,
	},

	/// A required configuration option was empty.
	#[error("`{0}` cannot be empty")]
	EmptyValue(&'static str),

	/// A configuration option could not be parsed into the required type.
	#[error("failed to parse configuration value `{var}`: {source}")]
	Parse
	{
		/// The variable we tried to parse.
		var: &'static str,

		/// The underlying error.
		source: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Config
{
	/// Initializes a [`Config`] by reading and parsing environment variables.
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		let database_url = parse_from_env::<Url>("DATABASE_URL")?;
		let listen_addr =
			parse_from_env_opt::<SocketAddr>("CUSTOMER_API_ADDR")?.unwrap_or(DEFAULT_LISTEN_ADDR);

		Ok(Self::from_parts(database_url, listen_addr))
	}

	/// Creates a [`Config`] from already parsed values.
	pub fn from_parts(database_url: Url, listen_addr: SocketAddr) -> Self
	{
		Self { inner: Arc::new(Inner { database_url, listen_addr }) }
	}

	/// Returns the API's database URL.
	pub fn database_url(&self) -> &Url
	{
		&self.inner.database_url
	}

	/// Returns the address the HTTP server should bind to.
	pub fn listen_addr(&self) -> SocketAddr
	{
		self.inner.listen_addr
	}
}

impl fmt::Debug for Config
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_struct("Config")
			.field("database_url", &format_args!("{:?}", self.database_url().as_str()))
			.field("listen_addr", &format_args!("{}", self.listen_addr()))
			.finish()
	}
}

struct Inner
{
	/// The URL of the API's database.
	database_url: Url,

	/// The address to listen on for HTTP requests.
	listen_addr: SocketAddr,
}

/// Reads and parses an environment variable.
fn parse_from_env<T>(var: &'static str) -> Result<T, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	parse_value(var, env::var(var))
}

/// Reads and parses an environment variable.
///
/// Returns [`None`] if a variable does not exist or is empty.
fn parse_from_env_opt<T>(var: &'static str) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	parse_value_opt(var, env::var(var))
}

fn parse_value<T>(
	var: &'static str,
	value: Result<String, env::VarError>,
) -> Result<T, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	let value = value.map_err(|source| InitializeConfigError::Env { var, source })?;

	if value.is_empty() {
		return Err(InitializeConfigError::EmptyValue(var));
	}

	value
		.parse::<T>()
		.map_err(|error| InitializeConfigError::Parse { var, source: Box::new(error) })
}

fn parse_value_opt<T>(
	var: &'static str,
	value: Result<String, env::VarError>,
) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	match value {
		Ok(value) if !value.is_empty() => parse_value(var, Ok(value)).map(Some),
		Ok(_) | Err(_) => Ok(None),
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn debug_shows_both_values() -> crate::testing::Result
	{
		let config = Config::from_parts("sqlite://customers.db".parse()?, DEFAULT_LISTEN_ADDR);
		let debug = format!("{config:?}");

		assert!(debug.contains("sqlite://customers.db"), "{debug}");
		assert!(debug.contains("127.0.0.1:42069"), "{debug}");

		Ok(())
	}

	#[test]
	fn clones_share_values() -> crate::testing::Result
	{
		let config = Config::from_parts(Url::parse("sqlite::memory:")?, DEFAULT_LISTEN_ADDR);
		let clone = config.clone();

		assert!(Arc::ptr_eq(&config.inner, &clone.inner), "clone should share the inner values");

		Ok(())
	}

	#[test]
	fn required_values_must_be_present()
	{
		let error = parse_value::<Url>("DATABASE_URL", Err(env::VarError::NotPresent));

		assert!(
			matches!(error, Err(InitializeConfigError::Env { var: "DATABASE_URL", .. })),
			"{error:?}",
		);
	}

	#[test]
	fn required_values_must_not_be_empty()
	{
		let error = parse_value::<Url>("DATABASE_URL", Ok(String::new()));

		assert!(matches!(error, Err(InitializeConfigError::EmptyValue("DATABASE_URL"))), "{error:?}");
	}

	#[test]
	fn unparsable_values_are_rejected()
	{
		let error = parse_value::<Url>("DATABASE_URL", Ok(String::from("not a url")));

		assert!(
			matches!(error, Err(InitializeConfigError::Parse { var: "DATABASE_URL", .. })),
			"{error:?}",
		);

		let error =
			parse_value_opt::<SocketAddr>("CUSTOMER_API_ADDR", Ok(String::from("localhost")));

		assert!(
			matches!(error, Err(InitializeConfigError::Parse { var: "CUSTOMER_API_ADDR", .. })),
			"{error:?}",
		);
	}

	#[test]
	fn optional_values_fall_back_to_default() -> crate::testing::Result
	{
		for value in [Err(env::VarError::NotPresent), Ok(String::new())] {
			let listen_addr = parse_value_opt::<SocketAddr>("CUSTOMER_API_ADDR", value)?
				.unwrap_or(DEFAULT_LISTEN_ADDR);

			assert_eq!(listen_addr, DEFAULT_LISTEN_ADDR);
		}

		let listen_addr =
			parse_value_opt::<SocketAddr>("CUSTOMER_API_ADDR", Ok(String::from("0.0.0.0:8080")))?;

		assert_eq!(listen_addr, Some(SocketAddr::from(([0, 0, 0, 0], 8080))));

		Ok(())
	}
}
