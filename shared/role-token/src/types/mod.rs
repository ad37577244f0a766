//! Role Types

mod access;
mod organization;
mod role;

pub use access::AccessLevel;
pub use organization::OrganizationType;
pub use role::Role;
