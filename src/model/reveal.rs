pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";
pub const VISIBLE_OPACITY: &str = "1";
pub const VISIBLE_TRANSFORM: &str = "translateY(0)";

/// One-shot visibility state. There is no way back from `Triggered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observation {
    #[default]
    Pending,
    Triggered,
}

impl Observation {
    /// Moves to `Triggered`, returning whether this call did the transition.
    pub fn trigger(&mut self) -> bool {
        match self {
            Observation::Pending => {
                *self = Observation::Triggered;
                true
            }
            Observation::Triggered => false,
        }
    }

    pub fn is_triggered(self) -> bool {
        self == Observation::Triggered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Section,
    /// A card; siblings under the same parent share a `group`.
    Card { group: usize },
    TechItem,
}

/// A single element becoming visible, `delay_ms` after the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub element: usize,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
struct Candidate {
    kind: RevealKind,
    state: Observation,
}

/// Reveal state for every animated element, indexed in document order.
#[derive(Debug, Clone)]
pub struct RevealBoard {
    candidates: Vec<Candidate>,
    stagger_ms: u32,
}

impl RevealBoard {
    pub fn new(kinds: impl IntoIterator<Item = RevealKind>, stagger_ms: u32) -> Self {
        Self {
            candidates: kinds
                .into_iter()
                .map(|kind| Candidate {
                    kind,
                    state: Observation::Pending,
                })
                .collect(),
            stagger_ms,
        }
    }

    #[cfg(test)]
    pub fn state(&self, element: usize) -> Option<Observation> {
        self.candidates.get(element).map(|c| c.state)
    }

    /// Handles the first intersection of `element`. A card also pulls in its
    /// pending siblings, each delayed by its position among them. Anything
    /// already revealed is skipped, so a repeat intersection yields nothing.
    pub fn intersect(&mut self, element: usize) -> Vec<RevealStep> {
        let Some(candidate) = self.candidates.get(element) else {
            return Vec::new();
        };
        if candidate.state.is_triggered() {
            return Vec::new();
        }
        let kind = candidate.kind;

        match kind {
            RevealKind::Card { group } => {
                let siblings: Vec<usize> = self
                    .candidates
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.kind == RevealKind::Card { group })
                    .map(|(index, _)| index)
                    .collect();

                let mut steps = Vec::new();
                for (position, sibling) in siblings.into_iter().enumerate() {
                    if self.candidates[sibling].state.trigger() {
                        steps.push(RevealStep {
                            element: sibling,
                            delay_ms: self.stagger_ms * position as u32,
                        });
                    }
                }
                steps
            }
            RevealKind::Section | RevealKind::TechItem => {
                self.candidates[element].state.trigger();
                vec![RevealStep {
                    element,
                    delay_ms: 0,
                }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> RevealBoard {
        RevealBoard::new(
            vec![
                RevealKind::Section,
                RevealKind::Card { group: 0 },
                RevealKind::Card { group: 0 },
                RevealKind::Card { group: 0 },
                RevealKind::Section,
                RevealKind::Card { group: 1 },
                RevealKind::TechItem,
            ],
            100,
        )
    }

    #[test]
    fn observation_is_one_shot() {
        let mut obs = Observation::default();
        assert!(obs.trigger());
        assert!(!obs.trigger());
        assert!(obs.is_triggered());
    }

    #[test]
    fn section_reveals_alone() {
        let mut board = board();
        assert_eq!(board.intersect(0), vec![RevealStep { element: 0, delay_ms: 0 }]);
        assert_eq!(board.state(1), Some(Observation::Pending));
    }

    #[test]
    fn card_cascades_through_its_siblings() {
        let mut board = board();
        let steps = board.intersect(2);
        assert_eq!(
            steps,
            vec![
                RevealStep { element: 1, delay_ms: 0 },
                RevealStep { element: 2, delay_ms: 100 },
                RevealStep { element: 3, delay_ms: 200 },
            ]
        );
        // Other groups are untouched.
        assert_eq!(board.state(5), Some(Observation::Pending));
    }

    #[test]
    fn second_intersection_is_a_no_op() {
        let mut board = board();
        board.intersect(1);
        assert!(board.intersect(1).is_empty());
        assert!(board.intersect(3).is_empty());
        board.intersect(6);
        assert!(board.intersect(6).is_empty());
    }

    #[test]
    fn unknown_element_is_ignored() {
        let mut board = board();
        assert!(board.intersect(99).is_empty());
    }
}
