//! Browser bindings (WASM only)
//!
//! Resolves the form's elements by id, wires them into a [`RoleToggle`] and
//! registers it on the role radios.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};

use crate::controls::{RequiredInput, RoleSelector, Section};
use crate::error::BindError;
use crate::layout::FormLayout;
use crate::toggle::{RoleBindings, RoleToggle};

/// Role toggle over live page elements
pub type DomToggle = RoleToggle<HtmlInputElement, Element, HtmlInputElement>;

impl RoleSelector for HtmlInputElement {
    fn is_checked(&self) -> bool {
        self.checked()
    }
}

impl RequiredInput for HtmlInputElement {
    fn set_required(&mut self, required: bool) {
        HtmlInputElement::set_required(self, required);
    }

    fn is_required(&self) -> bool {
        self.required()
    }
}

impl Section for Element {
    fn set_class(&mut self, class: &str, present: bool) {
        let list = self.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if result.is_err() {
            log::warn!("Could not update class '{}' on #{}", class, self.id());
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

fn element(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement { id: id.to_string() })
}

fn input(document: &Document, id: &str) -> Result<HtmlInputElement, BindError> {
    element(document, id)?
        .dyn_into()
        .map_err(|_| BindError::WrongElementType {
            id: id.to_string(),
            expected: "an <input>",
        })
}

/// Resolve every element the toggle needs
pub fn bind(document: &Document, layout: &FormLayout) -> Result<DomToggle, BindError> {
    let bindings = RoleBindings {
        student_radio: input(document, &layout.student_radio_id)?,
        group_section: element(document, &layout.group_section_id)?,
        tutor_section: element(document, &layout.tutor_section_id)?,
        group_input: input(document, &layout.group_input_id)?,
    };
    Ok(RoleToggle::new(bindings, layout))
}

/// Bind the form, sync it with the current radio state and listen for changes
pub fn install(layout: &FormLayout) -> Result<(), BindError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BindError::NoDocument)?;

    let toggle = bind(&document, layout)?;
    let student_radio = toggle.bindings().student_radio.clone();
    let toggle = Rc::new(RefCell::new(toggle));

    // Page may be restored with either radio checked
    let role = toggle.borrow_mut().handle_event();
    log::info!("Initial role: {}", role.as_str());

    let closure = {
        let toggle = toggle.clone();
        Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            toggle.borrow_mut().handle_event();
        })
    };

    let _ = student_radio
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());

    match document.get_element_by_id(&layout.tutor_radio_id) {
        Some(tutor_radio) => {
            let _ = tutor_radio
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
        None => log::warn!(
            "No #{} radio, listening on #{} only",
            layout.tutor_radio_id,
            layout.student_radio_id
        ),
    }

    closure.forget();
    Ok(())
}
