#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Personnel role marker taxonomy for the safety-production-training domain.
//!
//! This crate defines four capability tags and the subtyping relation
//! between them: a base [`Teacher`] role, its [`FullTimeTeacher`] and
//! [`PartTimeTeacher`] specializations, and an unrelated
//! [`ManagerialStaff`] role. The tags carry no data and no behavior; they
//! exist so external personnel systems can classify entities, either
//! statically through the marker traits or at query time through the role
//! mask algebra in [`roles`].
//!
//! Persistence, qualification checks, and every other business rule belong
//! to the consuming system, not to this taxonomy.

// Shared data types (Role tag enum, RoleMask).
pub mod types;

// The four marker traits: the static-typing surface.
pub mod markers;

// Role-set algebra and the Personnel seam: the dynamic query surface.
pub mod roles;

// Error types for tag decoding and mask validation.
pub mod error;

// Per-capability-combination fixture types for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use error::TaxonomyError;
pub use markers::{FullTimeTeacher, ManagerialStaff, PartTimeTeacher, Teacher};
pub use roles::{canonicalise, flags, satisfies, validate, Personnel};
pub use types::{Role, RoleMask};
