//! Browser-free state for a whole page. The DOM layer feeds it signals and
//! applies the [`Effect`]s it returns.

use super::countdown::{Countdown, CountdownState};
use super::lazy::LazyImage;
use super::reveal::{RevealBoard, RevealKind, RevealStep};
use super::scroll::{NavbarState, ScrollTracker};
use super::sections::{scroll_target, NavLinks, SectionBox};
use crate::config::EnhanceConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Reveal(usize),
    Image(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navbar(NavbarState),
    HeroOffset(f64),
    /// Clear the marker from every link, then set it on this one if any.
    ActiveLink(Option<usize>),
    Reveal(RevealStep),
    LoadImage { image: usize, src: String },
    RenderCountdown { element: usize, text: String },
    StopCountdown(usize),
}

/// The three signal sources the page reacts to.
pub trait PageSignals {
    fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBox]) -> Vec<Effect>;
    fn on_intersect(&mut self, target: Target, is_intersecting: bool) -> Vec<Effect>;
    fn on_tick(&mut self, countdown: usize, now: i64) -> Vec<Effect>;
}

/// Everything on the page that is registered once at startup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub has_hero: bool,
    pub link_hrefs: Vec<Option<String>>,
    pub reveal_kinds: Vec<RevealKind>,
    pub image_sources: Vec<String>,
    pub countdown_deadlines: Vec<Option<i64>>,
}

#[derive(Debug, Clone)]
pub struct PageModel {
    scroll: ScrollTracker,
    links: NavLinks,
    reveal: RevealBoard,
    images: Vec<LazyImage>,
    countdowns: Vec<Countdown>,
    anchor_offset: f64,
    nav_padding: f64,
}

impl PageModel {
    pub fn new(layout: PageLayout, config: &EnhanceConfig) -> Self {
        Self {
            scroll: ScrollTracker::new(
                config.navbar_scroll_threshold,
                config.parallax_factor,
                layout.has_hero,
            ),
            links: NavLinks::new(layout.link_hrefs),
            reveal: RevealBoard::new(layout.reveal_kinds, config.reveal_stagger_ms),
            images: layout.image_sources.into_iter().map(LazyImage::new).collect(),
            countdowns: layout
                .countdown_deadlines
                .into_iter()
                .map(Countdown::new)
                .collect(),
            anchor_offset: config.section_anchor_offset,
            nav_padding: config.nav_scroll_padding,
        }
    }

    pub fn links(&self) -> &NavLinks {
        &self.links
    }

    /// Click on an in-page link: the scroll position to travel to, plus the
    /// marker change. `None` when the link does not point at a fragment.
    pub fn on_nav_click(
        &mut self,
        link: usize,
        target_top: f64,
        navbar_height: f64,
    ) -> Option<(f64, Vec<Effect>)> {
        self.links.fragment(link)?;
        let top = scroll_target(target_top, navbar_height, self.nav_padding);
        let effects = self
            .links
            .activate(link)
            .map(Effect::ActiveLink)
            .into_iter()
            .collect();
        Some((top, effects))
    }
}

impl PageSignals for PageModel {
    fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBox]) -> Vec<Effect> {
        let frame = self.scroll.update(scroll_y);
        log::trace!("scroll {} ({:?})", scroll_y, frame.direction);

        let mut effects = vec![Effect::Navbar(frame.navbar)];
        if let Some(offset) = frame.parallax {
            effects.push(Effect::HeroOffset(offset));
        }
        if let Some(active) = self
            .links
            .sync_with_scroll(sections, scroll_y, self.anchor_offset)
        {
            effects.push(Effect::ActiveLink(active));
        }
        effects
    }

    fn on_intersect(&mut self, target: Target, is_intersecting: bool) -> Vec<Effect> {
        if !is_intersecting {
            return Vec::new();
        }
        match target {
            Target::Reveal(element) => self
                .reveal
                .intersect(element)
                .into_iter()
                .map(Effect::Reveal)
                .collect(),
            Target::Image(image) => self
                .images
                .get_mut(image)
                .and_then(|img| img.intersect(true).map(str::to_string))
                .map(|src| vec![Effect::LoadImage { image, src }])
                .unwrap_or_default(),
        }
    }

    fn on_tick(&mut self, element: usize, now: i64) -> Vec<Effect> {
        let Some(countdown) = self.countdowns.get_mut(element) else {
            return Vec::new();
        };
        if countdown.is_expired() {
            return Vec::new();
        }
        let state = countdown.tick(now);
        let mut effects = vec![Effect::RenderCountdown {
            element,
            text: state.to_string(),
        }];
        if state == CountdownState::Expired {
            effects.push(Effect::StopCountdown(element));
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::countdown::EXPIRED;

    fn layout() -> PageLayout {
        PageLayout {
            has_hero: true,
            link_hrefs: vec![
                Some("#home".to_string()),
                Some("#shop".to_string()),
                Some("https://blog.example.com".to_string()),
            ],
            reveal_kinds: vec![
                RevealKind::Section,
                RevealKind::Card { group: 0 },
                RevealKind::Card { group: 0 },
                RevealKind::Card { group: 0 },
            ],
            image_sources: vec!["x.png".to_string()],
            countdown_deadlines: vec![Some(3_661_000), None],
        }
    }

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox::new("home", 0.0, 700.0),
            SectionBox::new("shop", 700.0, 900.0),
        ]
    }

    fn model() -> PageModel {
        PageModel::new(layout(), &EnhanceConfig::default())
    }

    #[test]
    fn scroll_produces_navbar_parallax_and_link() {
        let mut page = model();
        assert_eq!(
            page.on_scroll(0.0, &sections()),
            vec![
                Effect::Navbar(NavbarState::Top),
                Effect::HeroOffset(0.0),
                Effect::ActiveLink(Some(0)),
            ]
        );
        assert_eq!(
            page.on_scroll(101.0, &sections()),
            vec![Effect::Navbar(NavbarState::Scrolled), Effect::HeroOffset(50.5)]
        );
        let effects = page.on_scroll(600.0, &sections());
        assert!(effects.contains(&Effect::ActiveLink(Some(1))));
    }

    #[test]
    fn nav_click_marks_link_and_computes_target() {
        let mut page = model();
        let (top, effects) = page.on_nav_click(1, 700.0, 80.0).unwrap();
        assert_eq!(top, 600.0);
        assert_eq!(effects, vec![Effect::ActiveLink(Some(1))]);
        // Once the smooth scroll settles the tracker agrees.
        assert!(!page
            .on_scroll(top, &sections())
            .iter()
            .any(|e| matches!(e, Effect::ActiveLink(_))));
        assert!(page.on_nav_click(2, 0.0, 80.0).is_none());
    }

    #[test]
    fn reveal_cascade_runs_once() {
        let mut page = model();
        let effects = page.on_intersect(Target::Reveal(1), true);
        let delays: Vec<u32> = effects
            .iter()
            .map(|e| match e {
                Effect::Reveal(step) => step.delay_ms,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(delays, vec![0, 100, 200]);
        assert!(page.on_intersect(Target::Reveal(1), true).is_empty());
        assert!(page.on_intersect(Target::Reveal(2), true).is_empty());
        assert!(page.on_intersect(Target::Reveal(0), false).is_empty());
    }

    #[test]
    fn lazy_image_loads_once() {
        let mut page = model();
        assert!(page.on_intersect(Target::Image(0), false).is_empty());
        assert_eq!(
            page.on_intersect(Target::Image(0), true),
            vec![Effect::LoadImage { image: 0, src: "x.png".to_string() }]
        );
        assert!(page.on_intersect(Target::Image(0), true).is_empty());
        assert!(page.on_intersect(Target::Image(7), true).is_empty());
    }

    #[test]
    fn countdown_renders_then_stops() {
        let mut page = model();
        assert_eq!(
            page.on_tick(0, 0),
            vec![Effect::RenderCountdown { element: 0, text: "0d 1h 1m 1s".to_string() }]
        );
        assert_eq!(
            page.on_tick(0, 3_661_001),
            vec![
                Effect::RenderCountdown { element: 0, text: EXPIRED.to_string() },
                Effect::StopCountdown(0),
            ]
        );
        assert!(page.on_tick(0, 3_662_000).is_empty());
    }

    #[test]
    fn countdown_stops_exactly_once() {
        let mut page = model();
        let stops = |effects: &[Effect], element| {
            effects
                .iter()
                .filter(|e| **e == Effect::StopCountdown(element))
                .count()
        };

        let mut total = 0;
        for second in 0..10 {
            let effects = page.on_tick(0, 3_658_000 + second * 1_000);
            total += stops(&effects, 0);
        }
        assert_eq!(total, 1);

        // A missing deadline stops on its first tick and never again.
        let first = page.on_tick(1, 0);
        assert_eq!(
            first,
            vec![
                Effect::RenderCountdown { element: 1, text: EXPIRED.to_string() },
                Effect::StopCountdown(1),
            ]
        );
        assert!((1..5).all(|n| page.on_tick(1, n * 1_000).is_empty()));
    }

    #[test]
    fn countdowns_are_independent() {
        let mut page = model();
        let effects = page.on_tick(1, 0);
        assert_eq!(effects.last(), Some(&Effect::StopCountdown(1)));
        assert_eq!(
            page.on_tick(0, 1_000),
            vec![Effect::RenderCountdown { element: 0, text: "0d 1h 1m 0s".to_string() }]
        );
    }
}
