//! Marker traits for the personnel role taxonomy.
//!
//! Each trait is an empty capability tag: no required members, no state.
//! The subtyping relation is carried by supertrait bounds, so a generic
//! bound of `T: Teacher` accepts any full-time or part-time teacher type,
//! while `ManagerialStaff` stays outside the teacher family entirely.
//! A concrete personnel type opts into a role by implementing the trait;
//! nothing here can fail at runtime.

/// Base capability: qualified to act as a safety-production trainer.
///
/// Both employment-arrangement specializations extend this trait. A bare
/// `Teacher` implementation makes no claim about full-time or part-time
/// engagement.
pub trait Teacher {}

/// Employed full-time by a safety-production training institution to
/// deliver training.
///
/// The supertrait bound means every implementor must also implement
/// [`Teacher`]; the two employment specializations imply nothing about
/// each other.
pub trait FullTimeTeacher: Teacher {}

/// Engaged part-time by a safety-production training institution to
/// deliver training alongside other duties.
pub trait PartTimeTeacher: Teacher {}

/// Management personnel of a safety-production training institution.
///
/// Deliberately unrelated to the [`Teacher`] hierarchy. A single concrete
/// type may implement both this and a teacher trait (multi-role staff),
/// but that composition is the consumer's decision, never implied here.
pub trait ManagerialStaff {}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal concrete types, one per capability combination under test.
    struct BareTeacher;
    impl Teacher for BareTeacher {}

    struct FullTime;
    impl Teacher for FullTime {}
    impl FullTimeTeacher for FullTime {}

    struct PartTime;
    impl Teacher for PartTime {}
    impl PartTimeTeacher for PartTime {}

    struct Manager;
    impl ManagerialStaff for Manager {}

    struct TeachingManager;
    impl Teacher for TeachingManager {}
    impl FullTimeTeacher for TeachingManager {}
    impl ManagerialStaff for TeachingManager {}

    fn requires_teacher<T: Teacher>(_t: &T) {}
    fn requires_full_time<T: FullTimeTeacher>(_t: &T) {}
    fn requires_part_time<T: PartTimeTeacher>(_t: &T) {}
    fn requires_manager<T: ManagerialStaff>(_t: &T) {}

    #[test]
    fn full_time_teacher_substitutes_for_teacher() {
        let t = FullTime;
        requires_full_time(&t);
        requires_teacher(&t);
    }

    #[test]
    fn part_time_teacher_substitutes_for_teacher() {
        let t = PartTime;
        requires_part_time(&t);
        requires_teacher(&t);
    }

    #[test]
    fn bare_teacher_satisfies_only_teacher() {
        let t = BareTeacher;
        requires_teacher(&t);
        // requires_full_time(&t), requires_part_time(&t) and
        // requires_manager(&t) do not compile for BareTeacher.
    }

    #[test]
    fn managerial_staff_is_outside_teacher_hierarchy() {
        let m = Manager;
        requires_manager(&m);
        // requires_teacher(&m) does not compile: ManagerialStaff carries
        // no teacher capability on its own.
    }

    #[test]
    fn multi_role_type_satisfies_both_families() {
        let tm = TeachingManager;
        requires_teacher(&tm);
        requires_full_time(&tm);
        requires_manager(&tm);
    }

    #[test]
    fn teacher_trait_objects_accept_both_specializations() {
        let teachers: Vec<Box<dyn Teacher>> = vec![Box::new(FullTime), Box::new(PartTime)];
        assert_eq!(teachers.len(), 2);
    }
}
