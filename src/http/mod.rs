//! HTTP plumbing shared by all services.

pub(crate) mod extract;
pub(crate) mod problem_details;
pub(crate) mod response;
