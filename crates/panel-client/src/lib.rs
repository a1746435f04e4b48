mod client;
mod error;
mod identity;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult, FieldError};
pub use identity::{AuthenticatedUser, Identity};

#[cfg(test)]
mod tests;
