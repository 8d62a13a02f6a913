//! Provider trait, capability group, and registration models

pub mod errors;
pub mod prepared;
pub mod traits;

pub use errors::{ProviderError, ProviderResult};
pub use prepared::PreparedRequest;
pub use traits::{validate_capabilities, ApprovalSupport, Provider, ProviderEntry};
