//! Setup logic that runs before the API starts serving requests.

mod error;
pub use error::Error;
