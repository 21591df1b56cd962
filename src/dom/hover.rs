use web_sys::HtmlElement;

use super::bindings::{query_in, TECH_ICON};
use super::context::{set_style, Installed, Shared};
use super::listener::EventListener;
use crate::error::EnhanceError;
use crate::model::hover::{self, HoverStyle};

fn paint(el: &HtmlElement, style: HoverStyle) {
    set_style(el, "transform", style.transform);
    if let Some(transition) = style.transition {
        set_style(el, "transition", transition);
    }
}

pub fn install(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let mut listeners = Vec::new();

    for card in &ctx.bindings.cards {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let el = card.clone();
            listeners.push(EventListener::new(card, event, move |_| {
                paint(&el, hover::card(hovered))
            })?);
        }
    }

    for item in &ctx.bindings.tech_items {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let item_el = item.clone();
            listeners.push(EventListener::new(item, event, move |_| {
                if let Some(icon) = query_in::<HtmlElement>(&item_el, TECH_ICON) {
                    paint(&icon, hover::tech_icon(hovered));
                }
            })?);
        }
    }

    Ok(Installed::listeners(listeners))
}
