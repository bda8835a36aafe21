//! Role Toggle - student/tutor switch for the registration form
//!
//! Core modules:
//! - `toggle`: the change handler (shows/hides sections, toggles `required`)
//! - `controls`: traits for the element handles injected into the handler
//! - `layout`: element ids and class names
//! - `memory`: headless controls for native runs and tests
//! - `dom`: web-sys bindings and listener registration (WASM only)
//! - `registration`: role-dependent fields of the submitted form

pub mod controls;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod layout;
pub mod memory;
pub mod registration;
pub mod role;
pub mod toggle;

pub use error::{BindError, LayoutError};
pub use layout::FormLayout;
pub use registration::RoleFields;
pub use role::Role;
pub use toggle::{RoleBindings, RoleToggle};
