//! Headless form controls
//!
//! Plain-data stand-ins for the page elements, used by the native binary and
//! by tests that exercise the toggle without a browser.

use std::collections::BTreeSet;

use crate::controls::{RequiredInput, RoleSelector, Section};
use crate::layout::FormLayout;
use crate::toggle::{RoleBindings, RoleToggle};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRadio {
    checked: bool,
}

impl MemoryRadio {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

impl RoleSelector for MemoryRadio {
    fn is_checked(&self) -> bool {
        self.checked
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySection {
    classes: BTreeSet<String>,
}

impl MemorySection {
    pub fn with_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            classes: classes.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }
}

impl Section for MemorySection {
    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInput {
    required: bool,
}

impl RequiredInput for MemoryInput {
    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

/// Role toggle over headless controls
pub type MemoryForm = RoleToggle<MemoryRadio, MemorySection, MemoryInput>;

impl RoleToggle<MemoryRadio, MemorySection, MemoryInput> {
    /// Form as first rendered: nothing checked, student sections hidden
    pub fn headless(layout: &FormLayout) -> Self {
        let hidden = layout.hidden_class.as_str();
        let bindings = RoleBindings {
            student_radio: MemoryRadio::default(),
            group_section: MemorySection::with_classes([hidden]),
            tutor_section: MemorySection::with_classes([hidden]),
            group_input: MemoryInput::default(),
        };
        RoleToggle::new(bindings, layout)
    }
}

/// Observable state of a headless form, for comparing outcomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub group_classes: BTreeSet<String>,
    pub tutor_classes: BTreeSet<String>,
    pub group_required: bool,
}

impl FormSnapshot {
    pub fn of(bindings: &RoleBindings<MemoryRadio, MemorySection, MemoryInput>) -> Self {
        Self {
            group_classes: bindings.group_section.classes().clone(),
            tutor_classes: bindings.tutor_section.classes().clone(),
            group_required: bindings.group_input.is_required(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_class_set() {
        let mut section = MemorySection::default();
        section.set_class("hidden", true);
        section.set_class("hidden", true);
        assert_eq!(section.classes().len(), 1);

        section.set_class("hidden", false);
        assert!(!section.has_class("hidden"));

        // removing an absent class is a no-op
        section.set_class("required", false);
        assert!(section.classes().is_empty());
    }

    #[test]
    fn test_headless_initial_state() {
        let form = MemoryForm::headless(&FormLayout::default());
        let b = form.bindings();
        assert!(!b.student_radio.is_checked());
        assert!(b.group_section.has_class("hidden"));
        assert!(b.tutor_section.has_class("hidden"));
        assert!(!b.group_input.is_required());
    }
}
