use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::context::{apply, set_style, Installed, Shared};
use super::listener::EventListener;
use crate::error::EnhanceError;
use crate::model::menu::{body_overflow, collapses_on_link_click, SHOW_CLASS};

/// Smooth scrolling for in-page nav links.
pub fn install_smooth_scroll(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let mut listeners = Vec::new();
    for (index, link) in ctx.bindings.nav_links.iter().enumerate() {
        let ctx = ctx.clone();
        listeners.push(EventListener::new(link, "click", move |event| {
            let Some(fragment) = ctx.model.borrow().links().fragment(index).map(str::to_string)
            else {
                return;
            };
            let Some(target) = ctx
                .bindings
                .document
                .get_element_by_id(&fragment)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                log::debug!("nav link #{} has no target, leaving default navigation", fragment);
                return;
            };
            event.prevent_default();

            let navbar_height = ctx.bindings.navbar_height();
            let clicked = ctx.model.borrow_mut().on_nav_click(
                index,
                target.offset_top() as f64,
                navbar_height,
            );
            if let Some((top, effects)) = clicked {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                ctx.bindings.window.scroll_to_with_scroll_to_options(&options);
                for effect in effects {
                    apply(&ctx, effect, None);
                }
            }
        })?);
    }
    Ok(Installed::listeners(listeners))
}

/// Locks page scrolling while the mobile menu is open and collapses it when a
/// link is chosen on a narrow screen.
pub fn install_mobile_menu(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let (Some(toggler), Some(_)) = (&ctx.bindings.toggler, &ctx.bindings.collapse) else {
        return Ok(Installed::default());
    };

    let mut listeners = Vec::new();
    {
        let ctx = ctx.clone();
        listeners.push(EventListener::new(toggler, "click", move |_| {
            let ctx = ctx.clone();
            // Let the menu widget finish toggling before reading its state.
            Timeout::new(ctx.config.menu_settle_ms, move || {
                let open = ctx
                    .bindings
                    .collapse
                    .as_ref()
                    .map(|collapse| collapse.class_list().contains(SHOW_CLASS))
                    .unwrap_or(false);
                if let Some(body) = ctx.bindings.body() {
                    set_style(&body, "overflow", body_overflow(open));
                }
            })
            .forget();
        })?);
    }

    for link in &ctx.bindings.nav_links {
        let ctx = ctx.clone();
        listeners.push(EventListener::new(link, "click", move |_| {
            if !collapses_on_link_click(ctx.bindings.viewport_width(), ctx.config.mobile_breakpoint) {
                return;
            }
            if let Some(collapse) = &ctx.bindings.collapse {
                let _ = collapse.class_list().remove_1(SHOW_CLASS);
            }
            if let Some(body) = ctx.bindings.body() {
                set_style(&body, "overflow", body_overflow(false));
            }
        })?);
    }
    Ok(Installed::listeners(listeners))
}
