//! Role-dependent registration fields
//!
//! The group and tutor inputs are only meaningful for students. Hiding them
//! for tutors does not clear what was typed, so the submitted values are
//! normalised here before they go into the profile request.

use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFields {
    pub role: Role,
    pub group: Option<String>,
    pub tutor_id: Option<String>,
}

impl RoleFields {
    /// Build the fields from raw form values
    ///
    /// Tutors never carry a group or a tutor. Blank values count as absent.
    pub fn from_form(role: Role, group: Option<&str>, tutor_id: Option<&str>) -> Self {
        match role {
            Role::Tutor => Self {
                role,
                group: None,
                tutor_id: None,
            },
            Role::Student => Self {
                role,
                group: non_blank(group),
                tutor_id: non_blank(tutor_id),
            },
        }
    }

    /// Students must name a group, matching the `required` flag on the input
    pub fn is_complete(&self) -> bool {
        match self.role {
            Role::Student => self.group.is_some(),
            Role::Tutor => true,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
