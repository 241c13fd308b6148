//!
//! Role-set algebra for the taxonomy's dynamic query surface.
//! Rust has no reflective "is-a" check, so role membership for arbitrary
//! personnel entities is expressed as a bit mask with helper predicates,
//! plus the [`Personnel`] seam consumer entity types implement.
//!
//! All functions here are pure and operate on immutable masks; they are safe
//! to call concurrently from any number of callers without synchronization.

use crate::error::TaxonomyError;
use crate::types::RoleMask;

/// Taxonomy role bit flags (bits 0-3 defined, 4-15 reserved).
pub mod flags {
    use super::RoleMask;

    /// Base teacher capability.
    pub const TEACHER: RoleMask = 1 << 0;
    /// Full-time employed trainer. Implies `TEACHER`.
    pub const FULL_TIME_TEACHER: RoleMask = 1 << 1;
    /// Part-time engaged trainer. Implies `TEACHER`.
    pub const PART_TIME_TEACHER: RoleMask = 1 << 2;
    /// Management personnel. Implies nothing in the teacher family.
    pub const MANAGERIAL_STAFF: RoleMask = 1 << 3;

    // Bits 4-15 are reserved and must be zero.
    // Bits 16-31 are consumer overlay bits; preserved, never interpreted here.
}

/// All bits the taxonomy itself defines.
pub const CORE_MASK: RoleMask =
    flags::TEACHER | flags::FULL_TIME_TEACHER | flags::PART_TIME_TEACHER | flags::MANAGERIAL_STAFF;

/// Reserved bits 4-15; a valid mask never has any of these set.
pub const RESERVED_MASK: RoleMask = 0x0000_FFF0;

/// Canonicalizes a role mask by adding implied roles.
///
/// Either teacher specialization implies the base `TEACHER` role, mirroring
/// the supertrait relation on the marker traits. `MANAGERIAL_STAFF` implies
/// nothing. Overlay bits pass through untouched.
#[inline]
pub fn canonicalise(mask: RoleMask) -> RoleMask {
    let mut m = mask;
    if m & (flags::FULL_TIME_TEACHER | flags::PART_TIME_TEACHER) != 0 {
        m |= flags::TEACHER;
    }
    m
}

/// Checks whether a held role mask satisfies a required one.
///
/// The `have` mask is canonicalized first, so a bare `FULL_TIME_TEACHER` bit
/// satisfies a `TEACHER` requirement. The rule is
/// `(canonicalise(have) & need) == need`.
#[inline]
pub fn satisfies(have: RoleMask, need: RoleMask) -> bool {
    (canonicalise(have) & need) == need
}

/// Validates a role mask, rejecting reserved bits.
///
/// Consumer overlay bits (16-31) are preserved and pass validation; only the
/// reserved range 4-15 is an error. Returns the mask unchanged on success.
pub fn validate(mask: RoleMask) -> Result<RoleMask, TaxonomyError> {
    if mask & RESERVED_MASK != 0 {
        tracing::warn!(mask, "rejecting role mask with reserved bits set");
        return Err(TaxonomyError::ReservedRoleBits(mask));
    }
    Ok(mask)
}

/// Seam for consumer personnel entity types.
///
/// An implementor reports the roles its concrete entity holds; the provided
/// predicates answer the taxonomy's capability queries over that report.
/// Which roles a given person legitimately holds is entirely the consumer's
/// concern; this trait only interprets the mask.
pub trait Personnel {
    /// The set of roles this entity currently holds.
    fn roles(&self) -> RoleMask;

    /// True if this entity holds any teacher-family role.
    fn is_teacher(&self) -> bool {
        satisfies(self.roles(), flags::TEACHER)
    }

    /// True if this entity is specifically a full-time teacher.
    fn is_full_time_teacher(&self) -> bool {
        satisfies(self.roles(), flags::FULL_TIME_TEACHER)
    }

    /// True if this entity is specifically a part-time teacher.
    fn is_part_time_teacher(&self) -> bool {
        satisfies(self.roles(), flags::PART_TIME_TEACHER)
    }

    /// True if this entity is managerial staff.
    fn is_managerial_staff(&self) -> bool {
        satisfies(self.roles(), flags::MANAGERIAL_STAFF)
    }

    /// True if this entity's roles satisfy an arbitrary required mask.
    fn has_roles(&self, need: RoleMask) -> bool {
        satisfies(self.roles(), need)
    }
}
