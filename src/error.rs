//!
//! Error types for the role taxonomy.
//!
//! The taxonomy has only two fallible operations: decoding a persisted role
//! tag and validating a role mask. Declaring a type as holding a role, and
//! every capability query, are infallible.

use crate::types::RoleMask;

/// Errors produced when decoding role tags or validating role masks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    /// A `u8` tag does not correspond to any known role.
    #[error("invalid role tag: {0}")]
    InvalidRoleTag(u8),
    /// A role mask has reserved bits (4-15) set.
    #[error("role mask {0:#010x} uses reserved bits")]
    ReservedRoleBits(RoleMask),
}
