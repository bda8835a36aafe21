//! Registration roles

use serde::{Deserialize, Serialize};

/// Persona selected on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
}

impl Role {
    /// The form only reads the student radio; anything else is the tutor role
    pub fn from_student_checked(checked: bool) -> Self {
        if checked { Role::Student } else { Role::Tutor }
    }

    /// Value submitted in the form's `role` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "tutor" | "teacher" => Some(Role::Tutor),
            _ => None,
        }
    }

    /// Whether the group and tutor sections are shown for this role
    pub fn shows_student_sections(&self) -> bool {
        matches!(self, Role::Student)
    }

    /// Console line logged when the form switches to this role
    pub fn transition_message(&self) -> &'static str {
        match self {
            Role::Student => "Меняется роль на студента",
            Role::Tutor => "Меняется роль на преподавателя",
        }
    }
}
