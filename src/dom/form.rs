use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlButtonElement;

use super::bindings::{query_in, SUBMIT_BUTTON};
use super::context::{Installed, Shared};
use super::listener::EventListener;
use crate::error::EnhanceError;
use crate::model::countdown::now_ms;
use crate::model::form::{button_shows_loading, delay_until, SubmitFeedback, LOADING_CLASS};

fn set_busy(button: &HtmlButtonElement, busy: bool) {
    let class_list = button.class_list();
    let _ = if busy {
        class_list.add_1(LOADING_CLASS)
    } else {
        class_list.remove_1(LOADING_CLASS)
    };
    button.set_disabled(busy);
}

/// Intercepts form submissions and plays a fake round trip on the submit
/// button. Nothing is sent anywhere.
pub fn install_forms(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let mut listeners = Vec::new();
    for form in &ctx.bindings.forms {
        let feedback = Rc::new(RefCell::new(SubmitFeedback::new(ctx.config.submit_delay_ms)));
        let form_el = form.clone();
        let ctx = ctx.clone();
        listeners.push(EventListener::new(form, "submit", move |event| {
            event.prevent_default();

            let Some(button) = query_in::<HtmlButtonElement>(&form_el, SUBMIT_BUTTON) else {
                return;
            };
            let now = now_ms();
            let Some(complete_at) = feedback.borrow_mut().begin(now) else {
                log::debug!("submission already in flight, ignoring");
                return;
            };
            set_busy(&button, true);

            let feedback = feedback.clone();
            let window = ctx.bindings.window.clone();
            let message = ctx.config.submit_message.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_until(now, complete_at)).await;
                feedback.borrow_mut().complete();
                set_busy(&button, false);
                let _ = window.alert_with_message(&message);
            });
        })?);
    }
    Ok(Installed::listeners(listeners))
}

/// Placeholder and outbound `.btn` links show a loading state for a moment.
pub fn install_button_loading(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let mut listeners = Vec::new();
    for button in &ctx.bindings.buttons {
        let el = button.clone();
        let duration_ms = ctx.config.button_loading_ms;
        listeners.push(EventListener::new(button, "click", move |_| {
            if !button_shows_loading(el.get_attribute("href").as_deref()) {
                return;
            }
            let _ = el.class_list().add_1(LOADING_CLASS);
            let el = el.clone();
            Timeout::new(duration_ms, move || {
                let _ = el.class_list().remove_1(LOADING_CLASS);
            })
            .forget();
        })?);
    }
    Ok(Installed::listeners(listeners))
}
