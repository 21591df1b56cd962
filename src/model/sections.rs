/// Layout box of a `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The in-page fragment a nav link points at, if it points inside the page.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// First section containing the anchor line `scroll_y + anchor_offset`.
pub fn active_section(sections: &[SectionBox], scroll_y: f64, anchor_offset: f64) -> Option<&str> {
    let anchor = scroll_y + anchor_offset;
    sections
        .iter()
        .find(|section| section.contains(anchor))
        .map(|section| section.id.as_str())
}

/// Where to scroll so the target clears the fixed navbar.
pub fn scroll_target(target_top: f64, navbar_height: f64, padding: f64) -> f64 {
    target_top - navbar_height - padding
}

/// Tracks which nav link carries the active marker. At most one at a time.
#[derive(Debug, Clone)]
pub struct NavLinks {
    fragments: Vec<Option<String>>,
    active: Option<usize>,
}

impl NavLinks {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let fragments = hrefs
            .into_iter()
            .map(|href| {
                href.as_ref()
                    .and_then(|href| fragment_target(href.as_ref()))
                    .map(str::to_string)
            })
            .collect();
        Self {
            fragments,
            active: None,
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn fragment(&self, link: usize) -> Option<&str> {
        self.fragments.get(link).and_then(|f| f.as_deref())
    }

    pub fn link_for_section(&self, id: &str) -> Option<usize> {
        self.fragments
            .iter()
            .position(|fragment| fragment.as_deref() == Some(id))
    }

    /// Re-derives the active link from the section under the anchor. Returns
    /// the new marker when it changed. With no section under the anchor, or a
    /// section no link points at, nothing is marked.
    pub fn sync_with_scroll(
        &mut self,
        sections: &[SectionBox],
        scroll_y: f64,
        anchor_offset: f64,
    ) -> Option<Option<usize>> {
        let link = active_section(sections, scroll_y, anchor_offset)
            .and_then(|section| self.link_for_section(section));
        self.set_active(link)
    }

    pub fn activate(&mut self, link: usize) -> Option<Option<usize>> {
        if link >= self.fragments.len() {
            return None;
        }
        self.set_active(Some(link))
    }

    fn set_active(&mut self, link: Option<usize>) -> Option<Option<usize>> {
        if self.active == link {
            return None;
        }
        self.active = link;
        Some(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBox> {
        vec![
            SectionBox::new("home", 0.0, 600.0),
            SectionBox::new("features", 600.0, 800.0),
            SectionBox::new("contact", 1400.0, 500.0),
        ]
    }

    fn links() -> NavLinks {
        NavLinks::new(vec![
            Some("#home"),
            Some("#features"),
            Some("https://shop.example.com"),
            Some("#contact"),
            None,
        ])
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(fragment_target("#features"), Some("features"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#x"), None);
    }

    #[test]
    fn anchor_sits_200px_below_scroll() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 399.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 400.0, 200.0), Some("features"));
        assert_eq!(active_section(&sections, 1200.0, 200.0), Some("contact"));
        assert_eq!(active_section(&sections, 1700.0, 200.0), None);
    }

    #[test]
    fn first_overlapping_section_wins() {
        let sections = vec![
            SectionBox::new("a", 0.0, 1000.0),
            SectionBox::new("b", 500.0, 1000.0),
        ];
        assert_eq!(active_section(&sections, 600.0, 200.0), Some("a"));
    }

    #[test]
    fn scroll_keeps_a_single_active_link() {
        let sections = page();
        let mut links = links();
        assert_eq!(links.sync_with_scroll(&sections, 0.0, 200.0), Some(Some(0)));
        assert_eq!(links.sync_with_scroll(&sections, 100.0, 200.0), None);
        assert_eq!(links.sync_with_scroll(&sections, 700.0, 200.0), Some(Some(1)));
        assert_eq!(links.sync_with_scroll(&sections, 1300.0, 200.0), Some(Some(3)));
        assert_eq!(links.active(), Some(3));
    }

    #[test]
    fn gap_below_last_section_clears_marker() {
        let sections = page();
        let mut links = links();
        links.sync_with_scroll(&sections, 1300.0, 200.0);
        assert_eq!(links.sync_with_scroll(&sections, 5000.0, 200.0), Some(None));
        assert_eq!(links.active(), None);
        assert_eq!(links.sync_with_scroll(&sections, 6000.0, 200.0), None);
    }

    #[test]
    fn section_without_link_clears_marker() {
        let sections = vec![SectionBox::new("home", 0.0, 600.0), SectionBox::new("faq", 600.0, 600.0)];
        let mut links = NavLinks::new(vec![Some("#home")]);
        links.sync_with_scroll(&sections, 0.0, 200.0);
        assert_eq!(links.sync_with_scroll(&sections, 500.0, 200.0), Some(None));
    }

    #[test]
    fn click_and_scroll_converge() {
        let sections = page();
        let mut links = links();
        assert_eq!(links.activate(1), Some(Some(1)));
        let settled = scroll_target(600.0, 70.0, 20.0);
        assert_eq!(settled, 510.0);
        assert_eq!(links.sync_with_scroll(&sections, settled, 200.0), None);
        assert_eq!(links.active(), Some(1));
        assert_eq!(links.activate(42), None);
    }
}
