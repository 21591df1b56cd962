use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::context::{set_style, Installed, Shared};
use super::listener::{EventListener, Mounted};
use crate::error::EnhanceError;
use crate::model::cursor::{self, CURSOR_CLASS, CURSOR_STYLE};

/// A dot that trails the pointer and grows over interactive elements.
pub fn install(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let document = &ctx.bindings.document;
    let Some(body) = document.body() else {
        return Ok(Installed::default());
    };

    let dot: HtmlElement = document.create_element("div")?.unchecked_into();
    dot.set_class_name(CURSOR_CLASS);
    dot.style().set_css_text(CURSOR_STYLE);
    let mounted = Mounted::append_to(&body, dot.clone().into())?;

    let mut listeners = Vec::with_capacity(1 + 2 * ctx.bindings.interactive.len());
    {
        let dot = dot.clone();
        listeners.push(EventListener::new(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let (left, top) = cursor::position(event.client_x(), event.client_y());
                set_style(&dot, "left", &left);
                set_style(&dot, "top", &top);
            }
        })?);
    }

    for el in &ctx.bindings.interactive {
        for (event, over) in [("mouseenter", true), ("mouseleave", false)] {
            let dot = dot.clone();
            listeners.push(EventListener::new(el, event, move |_| {
                let look = cursor::look(over);
                set_style(&dot, "transform", look.transform);
                set_style(&dot, "opacity", look.opacity);
            })?);
        }
    }

    Ok(Installed {
        listeners,
        mounted: vec![mounted],
        ..Installed::default()
    })
}
