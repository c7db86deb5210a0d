//! Identity reconciliation: candidate generation and the lookup index.

pub mod candidates;
pub mod index;

pub use candidates::{derive_suffix_token, generate_login_candidates};
pub use index::IdentityIndex;
