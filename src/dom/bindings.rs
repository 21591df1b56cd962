use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, Node, Window,
};

use crate::error::EnhanceError;
use crate::model::countdown;
use crate::model::page::PageLayout;
use crate::model::reveal::RevealKind;
use crate::model::sections::SectionBox;

pub const NAVBAR: &str = ".navbar";
pub const NAV_LINKS: &str = ".nav-link";
pub const HERO: &str = ".hero-section";
pub const TRACKED_SECTIONS: &str = "section[id]";
pub const CARDS: &str = ".demo-card, .shop-card, .feature-card";
pub const CARD_CLASSES: [&str; 3] = ["demo-card", "shop-card", "feature-card"];
pub const TECH_ITEMS: &str = ".tech-item";
pub const REVEAL_TARGETS: &str = "section, .demo-card, .shop-card, .feature-card, .tech-item";
pub const COUNTDOWNS: &str = "[data-countdown]";
pub const LAZY_IMAGES: &str = "img[data-src]";
pub const FORMS: &str = "form";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const BUTTONS: &str = ".btn";
pub const TOGGLER: &str = ".navbar-toggler";
pub const COLLAPSE: &str = ".navbar-collapse";
pub const TECH_ICON: &str = "i";
pub const HERO_TITLE: &str = ".hero-title";
pub const INTERACTIVE: &str = "a, button, .btn, .card";

/// Every element the enhancements touch, queried once at startup.
pub struct PageBindings {
    pub window: Window,
    pub document: Document,
    pub navbar: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub reveal_targets: Vec<HtmlElement>,
    pub reveal_kinds: Vec<RevealKind>,
    pub cards: Vec<HtmlElement>,
    pub tech_items: Vec<HtmlElement>,
    pub countdowns: Vec<HtmlElement>,
    pub lazy_images: Vec<HtmlImageElement>,
    pub forms: Vec<HtmlFormElement>,
    pub buttons: Vec<HtmlElement>,
    pub toggler: Option<HtmlElement>,
    pub collapse: Option<HtmlElement>,
    pub hero_title: Option<HtmlElement>,
    pub interactive: Vec<HtmlElement>,
}

impl PageBindings {
    pub fn from_window() -> Result<Self, EnhanceError> {
        let window = web_sys::window().ok_or(EnhanceError::MissingWindow)?;
        let document = window.document().ok_or(EnhanceError::MissingDocument)?;
        Self::query(window, document)
    }

    pub fn query(window: Window, document: Document) -> Result<Self, EnhanceError> {
        let reveal_targets: Vec<HtmlElement> = query_all(&document, REVEAL_TARGETS)?;
        let reveal_kinds = classify_reveal_targets(&reveal_targets);

        Ok(Self {
            navbar: query_one(&document, NAVBAR)?,
            nav_links: query_all(&document, NAV_LINKS)?,
            hero: query_one(&document, HERO)?,
            sections: query_all(&document, TRACKED_SECTIONS)?,
            reveal_targets,
            reveal_kinds,
            cards: query_all(&document, CARDS)?,
            tech_items: query_all(&document, TECH_ITEMS)?,
            countdowns: query_all(&document, COUNTDOWNS)?,
            lazy_images: query_all(&document, LAZY_IMAGES)?,
            forms: query_all(&document, FORMS)?,
            buttons: query_all(&document, BUTTONS)?,
            toggler: query_one(&document, TOGGLER)?,
            collapse: query_one(&document, COLLAPSE)?,
            hero_title: query_one(&document, HERO_TITLE)?,
            interactive: query_all(&document, INTERACTIVE)?,
            window,
            document,
        })
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout {
            has_hero: self.hero.is_some(),
            link_hrefs: self
                .nav_links
                .iter()
                .map(|link| link.get_attribute("href"))
                .collect(),
            reveal_kinds: self.reveal_kinds.clone(),
            image_sources: self
                .lazy_images
                .iter()
                .map(|img| img.get_attribute("data-src").unwrap_or_default())
                .collect(),
            countdown_deadlines: self
                .countdowns
                .iter()
                .map(|el| {
                    el.get_attribute("data-countdown")
                        .and_then(|raw| countdown::parse_deadline(&raw))
                })
                .collect(),
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Current layout boxes of the tracked sections. Read on every scroll
    /// since images and reveals shift the page.
    pub fn section_boxes(&self) -> Vec<SectionBox> {
        self.sections
            .iter()
            .filter_map(|section| {
                let id = section.id();
                (!id.is_empty()).then(|| {
                    SectionBox::new(
                        id,
                        section.offset_top() as f64,
                        section.offset_height() as f64,
                    )
                })
            })
            .collect()
    }

    pub fn navbar_height(&self) -> f64 {
        self.navbar
            .as_ref()
            .map(|navbar| navbar.offset_height() as f64)
            .unwrap_or(0.0)
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }
}

/// Position of `node` in `elements`, by identity.
pub fn index_of<T: AsRef<Node>>(elements: &[T], node: &Node) -> Option<usize> {
    elements
        .iter()
        .position(|el| el.as_ref().is_same_node(Some(node)))
}

pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, EnhanceError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, EnhanceError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Sections reveal alone, cards cascade with the cards sharing their parent.
fn classify_reveal_targets(targets: &[HtmlElement]) -> Vec<RevealKind> {
    let mut parents: Vec<Node> = Vec::new();
    targets
        .iter()
        .map(|el| {
            if el.tag_name().eq_ignore_ascii_case("section") {
                return RevealKind::Section;
            }
            let class_list = el.class_list();
            if !CARD_CLASSES.iter().any(|class| class_list.contains(class)) {
                return RevealKind::TechItem;
            }
            let group = match el.parent_node() {
                Some(parent) => match index_of(&parents, &parent) {
                    Some(group) => group,
                    None => {
                        parents.push(parent);
                        parents.len() - 1
                    }
                },
                // Detached cards get a group of their own.
                None => {
                    parents.push(el.clone().into());
                    parents.len() - 1
                }
            };
            RevealKind::Card { group }
        })
        .collect()
}
