//! Test fixtures: one minimal concrete type per capability combination.
//!
//! Available to downstream crates' tests through the `test-utils` feature.
//! Each fixture implements the applicable marker traits and [`Personnel`],
//! so both the static and the dynamic query surface can be exercised
//! against the same value.

use crate::markers::{FullTimeTeacher, ManagerialStaff, PartTimeTeacher, Teacher};
use crate::roles::{flags, Personnel};
use crate::types::RoleMask;

/// Holds only the base teacher capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct BareTeacherFixture;
impl Teacher for BareTeacherFixture {}
impl Personnel for BareTeacherFixture {
    fn roles(&self) -> RoleMask {
        flags::TEACHER
    }
}

/// Full-time teacher, no other roles.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullTimeTeacherFixture;
impl Teacher for FullTimeTeacherFixture {}
impl FullTimeTeacher for FullTimeTeacherFixture {}
impl Personnel for FullTimeTeacherFixture {
    fn roles(&self) -> RoleMask {
        flags::FULL_TIME_TEACHER
    }
}

/// Part-time teacher, no other roles.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartTimeTeacherFixture;
impl Teacher for PartTimeTeacherFixture {}
impl PartTimeTeacher for PartTimeTeacherFixture {}
impl Personnel for PartTimeTeacherFixture {
    fn roles(&self) -> RoleMask {
        flags::PART_TIME_TEACHER
    }
}

/// Managerial staff only, no teacher-family role.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManagerialStaffFixture;
impl ManagerialStaff for ManagerialStaffFixture {}
impl Personnel for ManagerialStaffFixture {
    fn roles(&self) -> RoleMask {
        flags::MANAGERIAL_STAFF
    }
}

/// Multi-role composition: full-time teacher who is also managerial staff.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeachingManagerFixture;
impl Teacher for TeachingManagerFixture {}
impl FullTimeTeacher for TeachingManagerFixture {}
impl ManagerialStaff for TeachingManagerFixture {}
impl Personnel for TeachingManagerFixture {
    fn roles(&self) -> RoleMask {
        flags::FULL_TIME_TEACHER | flags::MANAGERIAL_STAFF
    }
}
