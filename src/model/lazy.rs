use super::reveal::Observation;

pub const LAZY_CLASS: &str = "lazy";

/// An `img[data-src]` waiting for its first intersection.
#[derive(Debug, Clone)]
pub struct LazyImage {
    deferred_src: String,
    state: Observation,
}

impl LazyImage {
    pub fn new(deferred_src: impl Into<String>) -> Self {
        Self {
            deferred_src: deferred_src.into(),
            state: Observation::Pending,
        }
    }

    /// Returns the source to load on the first intersecting entry only.
    pub fn intersect(&mut self, is_intersecting: bool) -> Option<&str> {
        if is_intersecting && self.state.trigger() {
            Some(self.deferred_src.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_exactly_once() {
        let mut image = LazyImage::new("x.png");
        assert_eq!(image.intersect(false), None);
        assert_eq!(image.intersect(true), Some("x.png"));
        for visible in [false, true, true, false, true] {
            assert_eq!(image.intersect(visible), None);
        }
    }
}
