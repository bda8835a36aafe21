//! Form layout configuration
//!
//! Element ids and CSS class names the role toggle works with. Defaults match
//! the registration page; a page can override any of them with a JSON block:
//!
//! ```html
//! <script type="application/json" id="role-toggle-layout">
//!   { "group_input_id": "study-group" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Ids and class names of the registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLayout {
    // === Radios ===
    /// Student role radio (its checked state drives the toggle)
    pub student_radio_id: String,
    /// Sibling tutor radio, listened to when present
    pub tutor_radio_id: String,

    // === Sections ===
    /// Group section, shown and marked required for students
    pub group_section_id: String,
    /// Tutor choice section, shown for students
    pub tutor_section_id: String,
    /// Group input inside the group section
    pub group_input_id: String,

    // === Classes ===
    /// Class that hides an element
    pub hidden_class: String,
    /// Class marking an input group as mandatory
    pub required_class: String,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            student_radio_id: "student-radio".to_string(),
            tutor_radio_id: "tutor-radio".to_string(),

            group_section_id: "student-group".to_string(),
            tutor_section_id: "student-tutor".to_string(),
            group_input_id: "group".to_string(),

            hidden_class: "hidden".to_string(),
            required_class: "required".to_string(),
        }
    }
}

impl FormLayout {
    /// Id of the JSON override block
    pub const CONFIG_ELEMENT_ID: &'static str = "role-toggle-layout";

    /// Parse a layout, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the layout from the page's JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, LayoutError> {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                let layout = Self::from_json(&json)?;
                log::info!("Loaded form layout from #{}", Self::CONFIG_ELEMENT_ID);
                Ok(layout)
            }
            _ => {
                log::info!("Using default form layout");
                Ok(Self::default())
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, LayoutError> {
        Ok(Self::default())
    }
}
