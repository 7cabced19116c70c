//! Request extractors.
//!
//! These wrap axum's own extractors and turn their rejections into
//! [`runtime::Error`]s, so malformed requests get problem details responses
//! like every other error.
//!
//! [`runtime::Error`]: crate::runtime::Error

mod json;
pub(crate) use json::Json;

mod path;
pub(crate) use path::Path;

mod query;
pub(crate) use query::Query;
