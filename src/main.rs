//! Role Toggle entry point
//!
//! In the browser this binds the registration form and listens on the role
//! radios. Natively it replays both roles against a headless form.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_form {
    use role_toggle::FormLayout;
    use role_toggle::dom;

    pub fn run() -> Result<(), role_toggle::BindError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Role toggle starting...");

        let layout = FormLayout::load()?;
        dom::install(&layout)?;

        log::info!("Role toggle bound to #{}", layout.student_radio_id);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_form::run().map_err(|e| {
        log::error!("Role toggle disabled: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use role_toggle::memory::{FormSnapshot, MemoryForm};
    use role_toggle::{FormLayout, RoleFields};

    env_logger::init();
    log::info!("Role toggle (native) starting...");
    log::info!("Browser mode requires a wasm32 build - run with `trunk serve` for the form");

    let layout = match FormLayout::load() {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut form = MemoryForm::headless(&layout);
    for checked in [true, false] {
        form.bindings_mut().student_radio.set_checked(checked);
        let role = form.handle_event();
        let snapshot = FormSnapshot::of(form.bindings());

        let fields = RoleFields::from_form(role, Some("ИУ7-83"), Some("1"));
        println!(
            "{:<7} group={:?} tutor={:?} required={} fields={}",
            role.as_str(),
            snapshot.group_classes,
            snapshot.tutor_classes,
            snapshot.group_required,
            fields.to_json().unwrap_or_default(),
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
