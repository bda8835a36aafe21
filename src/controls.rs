//! Element handles the role toggle is built from
//!
//! The handler never looks elements up itself. Callers inject handles that
//! implement these traits: web-sys elements in the browser, `memory` types
//! in tests and on native.

/// The student role radio
pub trait RoleSelector {
    fn is_checked(&self) -> bool;
}

/// A page section toggled through CSS classes
pub trait Section {
    /// Add or remove `class` on the section
    fn set_class(&mut self, class: &str, present: bool);

    fn has_class(&self, class: &str) -> bool;
}

/// An input whose `required` flag follows the role
pub trait RequiredInput {
    fn set_required(&mut self, required: bool);

    fn is_required(&self) -> bool;
}
