//! Role toggle handler
//!
//! Runs on every change of the role radios. Output is re-derived from the
//! student radio each call, so the handler keeps no state between events:
//!
//! | Role    | group / tutor sections | group required marker | group input |
//! |---------|------------------------|-----------------------|-------------|
//! | Student | visible                | present               | required    |
//! | Tutor   | hidden                 | absent                | optional    |

use crate::controls::{RequiredInput, RoleSelector, Section};
use crate::layout::FormLayout;
use crate::role::Role;

/// Element handles injected into the handler
#[derive(Debug, Clone)]
pub struct RoleBindings<C, S, I> {
    pub student_radio: C,
    pub group_section: S,
    pub tutor_section: S,
    pub group_input: I,
}

/// Shows, hides and requires the student-only parts of the form
#[derive(Debug, Clone)]
pub struct RoleToggle<C, S, I> {
    bindings: RoleBindings<C, S, I>,
    hidden_class: String,
    required_class: String,
}

impl<C, S, I> RoleToggle<C, S, I>
where
    C: RoleSelector,
    S: Section,
    I: RequiredInput,
{
    pub fn new(bindings: RoleBindings<C, S, I>, layout: &FormLayout) -> Self {
        Self {
            bindings,
            hidden_class: layout.hidden_class.clone(),
            required_class: layout.required_class.clone(),
        }
    }

    /// Event entry point: read the student radio and apply the matching role
    pub fn handle_event(&mut self) -> Role {
        let role = Role::from_student_checked(self.bindings.student_radio.is_checked());
        self.apply(role);
        role
    }

    /// Bring the sections and the group input in line with `role`
    pub fn apply(&mut self, role: Role) {
        log::info!("{}", role.transition_message());

        let student = role.shows_student_sections();
        let b = &mut self.bindings;

        b.group_section.set_class(&self.hidden_class, !student);
        b.tutor_section.set_class(&self.hidden_class, !student);
        b.group_section.set_class(&self.required_class, student);
        b.group_input.set_required(student);
    }

    pub fn bindings(&self) -> &RoleBindings<C, S, I> {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut RoleBindings<C, S, I> {
        &mut self.bindings
    }

    pub fn into_bindings(self) -> RoleBindings<C, S, I> {
        self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{FormSnapshot, MemoryForm};
    use proptest::prelude::*;

    fn form(checked: bool) -> MemoryForm {
        let mut form = MemoryForm::headless(&FormLayout::default());
        form.bindings_mut().student_radio.set_checked(checked);
        form
    }

    #[test]
    fn test_student_shows_and_requires() {
        let mut form = form(true);
        assert_eq!(form.handle_event(), Role::Student);

        let b = form.bindings();
        assert!(!b.group_section.has_class("hidden"));
        assert!(!b.tutor_section.has_class("hidden"));
        assert!(b.group_section.has_class("required"));
        assert!(b.group_input.is_required());
    }

    #[test]
    fn test_tutor_hides_and_relaxes() {
        let mut form = form(true);
        form.handle_event();

        form.bindings_mut().student_radio.set_checked(false);
        assert_eq!(form.handle_event(), Role::Tutor);

        let b = form.bindings();
        assert!(b.group_section.has_class("hidden"));
        assert!(b.tutor_section.has_class("hidden"));
        assert!(!b.group_section.has_class("required"));
        assert!(!b.group_input.is_required());
    }

    #[test]
    fn test_unrelated_classes_survive() {
        let mut form = form(true);
        form.bindings_mut().group_section.set_class("form-group", true);
        form.handle_event();
        form.bindings_mut().student_radio.set_checked(false);
        form.handle_event();

        assert!(form.bindings().group_section.has_class("form-group"));
    }

    #[test]
    fn test_custom_class_names() {
        let layout = FormLayout {
            hidden_class: "d-none".to_string(),
            required_class: "is-required".to_string(),
            ..FormLayout::default()
        };
        let mut form = MemoryForm::headless(&layout);
        form.bindings_mut().student_radio.set_checked(false);
        form.handle_event();

        let b = form.bindings();
        assert!(b.group_section.has_class("d-none"));
        assert!(!b.group_section.has_class("hidden"));

        form.bindings_mut().student_radio.set_checked(true);
        form.handle_event();
        assert!(form.bindings().group_section.has_class("is-required"));
        assert!(!form.bindings().group_section.has_class("d-none"));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut fresh = form(false);
        fresh.handle_event();

        let mut toggled = form(true);
        toggled.handle_event();
        toggled.bindings_mut().student_radio.set_checked(false);
        toggled.handle_event();

        assert_eq!(
            FormSnapshot::of(toggled.bindings()),
            FormSnapshot::of(fresh.bindings())
        );
    }

    proptest! {
        #[test]
        fn prop_idempotent(checked in any::<bool>(), repeats in 1usize..5) {
            let mut once = form(checked);
            once.handle_event();

            let mut many = form(checked);
            for _ in 0..repeats {
                many.handle_event();
            }

            prop_assert_eq!(FormSnapshot::of(many.bindings()), FormSnapshot::of(once.bindings()));
        }

        #[test]
        fn prop_only_last_event_matters(history in proptest::collection::vec(any::<bool>(), 1..12)) {
            let mut replayed = form(false);
            for &checked in &history {
                replayed.bindings_mut().student_radio.set_checked(checked);
                replayed.handle_event();
            }

            let last = *history.last().unwrap();
            let mut direct = form(last);
            direct.handle_event();

            prop_assert_eq!(FormSnapshot::of(replayed.bindings()), FormSnapshot::of(direct.bindings()));
        }
    }
}
