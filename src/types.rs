//! Shared types for the role taxonomy: the `Role` tag enum used as the
//! interchange form for persisted or transmitted role assignments, and the
//! `RoleMask` bit field the dynamic query surface operates on.
//!
//! The marker traits in `markers.rs` are the static-typing view of the same
//! four roles; `Role` is their value-level counterpart for consumers that
//! need to store "which roles does this person hold" outside the type
//! system.

use crate::error::TaxonomyError;

/// Value-level tag for the four taxonomy roles.
///
/// This enum is the source of truth for role tag values. The `u8`
/// discriminants are stable and may be persisted; decode them back with
/// `Role::try_from`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Role {
    /// Base capability: qualified safety-production trainer.
    Teacher = 0,
    /// Full-time employed trainer. Implies `Teacher`.
    FullTimeTeacher = 1,
    /// Part-time engaged trainer. Implies `Teacher`.
    PartTimeTeacher = 2,
    /// Management personnel, unrelated to the teacher family.
    ManagerialStaff = 3,
}

impl Role {
    /// The mask bit this role occupies in a [`RoleMask`].
    #[inline]
    pub const fn flag(self) -> RoleMask {
        match self {
            Role::Teacher => crate::roles::flags::TEACHER,
            Role::FullTimeTeacher => crate::roles::flags::FULL_TIME_TEACHER,
            Role::PartTimeTeacher => crate::roles::flags::PART_TIME_TEACHER,
            Role::ManagerialStaff => crate::roles::flags::MANAGERIAL_STAFF,
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = TaxonomyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::Teacher),
            1 => Ok(Role::FullTimeTeacher),
            2 => Ok(Role::PartTimeTeacher),
            3 => Ok(Role::ManagerialStaff),
            other => Err(TaxonomyError::InvalidRoleTag(other)),
        }
    }
}

/// Role bit field, a 32-bit mask. Interpretation of its bits:
/// - Bits 0-3: the four taxonomy roles (see `roles::flags`) - frozen.
/// - Bits 4-15: reserved; must be zero (`roles::validate` rejects them).
/// - Bits 16-31: available for consumer-defined overlays; preserved but
///   ignored by the taxonomy's own checks.
pub type RoleMask = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tag_round_trips_through_u8() {
        for role in [
            Role::Teacher,
            Role::FullTimeTeacher,
            Role::PartTimeTeacher,
            Role::ManagerialStaff,
        ] {
            assert_eq!(Role::try_from(role as u8), Ok(role));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(Role::try_from(4), Err(TaxonomyError::InvalidRoleTag(4)));
        assert_eq!(Role::try_from(255), Err(TaxonomyError::InvalidRoleTag(255)));
    }

    #[test]
    fn role_serde_round_trip() {
        for role in [
            Role::Teacher,
            Role::FullTimeTeacher,
            Role::PartTimeTeacher,
            Role::ManagerialStaff,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn each_role_maps_to_a_distinct_flag() {
        let flags = [
            Role::Teacher.flag(),
            Role::FullTimeTeacher.flag(),
            Role::PartTimeTeacher.flag(),
            Role::ManagerialStaff.flag(),
        ];
        for (i, a) in flags.iter().enumerate() {
            assert_eq!(a.count_ones(), 1);
            for b in &flags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
