use crate::config::SiteConfig;
use crate::content::SectionId;

/// Document-relative top edge of one section anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionAnchor {
    pub id: SectionId,
    pub top: f64,
}

/// Navbar and back-to-top state derived from the window scroll offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
    pub show_back_to_top: bool,
    pub active_section: Option<SectionId>,
}

impl ScrollState {
    /// `anchors` must be in document order; sections missing from the page are simply absent.
    pub fn derive(scroll_offset: f64, anchors: &[SectionAnchor], config: &SiteConfig) -> Self {
        Self {
            scrolled_past_threshold: scroll_offset > config.scroll_threshold_px,
            show_back_to_top: scroll_offset > config.back_to_top_threshold_px,
            active_section: active_section(anchors, scroll_offset, config.lookback_margin_px),
        }
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active_section == Some(id)
    }
}

/// Last anchor, scanning from the bottom, whose top has been reached by
/// `scroll_offset + lookback_margin`.
pub fn active_section(
    anchors: &[SectionAnchor],
    scroll_offset: f64,
    lookback_margin: f64,
) -> Option<SectionId> {
    anchors
        .iter()
        .rev()
        .find(|anchor| anchor.top <= scroll_offset + lookback_margin)
        .map(|anchor| anchor.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_anchors() -> Vec<SectionAnchor> {
        [900.0, 1_800.0, 2_700.0, 3_600.0, 4_500.0]
            .into_iter()
            .zip(SectionId::ALL)
            .map(|(top, id)| SectionAnchor { id, top })
            .collect()
    }

    #[test]
    fn nothing_is_active_at_the_top_of_the_page() {
        let state = ScrollState::derive(0.0, &page_anchors(), &SiteConfig::default());
        assert_eq!(state, ScrollState::default());
    }

    #[test]
    fn section_activates_within_lookback_margin() {
        let anchors = page_anchors();
        assert_eq!(active_section(&anchors, 699.0, 200.0), None);
        assert_eq!(active_section(&anchors, 700.0, 200.0), Some(SectionId::About));
        assert_eq!(active_section(&anchors, 1_650.0, 200.0), Some(SectionId::Skills));
    }

    #[test]
    fn last_reached_section_wins() {
        let anchors = page_anchors();
        assert_eq!(active_section(&anchors, 10_000.0, 200.0), Some(SectionId::Contact));
        assert_eq!(active_section(&anchors, 3_500.0, 200.0), Some(SectionId::Projects));
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let anchors: Vec<SectionAnchor> = page_anchors()
            .into_iter()
            .filter(|anchor| anchor.id != SectionId::Projects)
            .collect();
        assert_eq!(active_section(&anchors, 3_500.0, 200.0), Some(SectionId::Experience));
    }

    #[test]
    fn thresholds_are_strictly_exceeded() {
        let config = SiteConfig::default();
        let at_threshold = ScrollState::derive(50.0, &[], &config);
        assert!(!at_threshold.scrolled_past_threshold);

        let past = ScrollState::derive(51.0, &[], &config);
        assert!(past.scrolled_past_threshold);
        assert!(!past.show_back_to_top);

        let deep = ScrollState::derive(501.0, &page_anchors(), &config);
        assert!(deep.show_back_to_top);
        assert!(!deep.is_active(SectionId::About));

        let later = ScrollState::derive(2_000.0, &page_anchors(), &config);
        assert!(later.is_active(SectionId::Skills));
    }
}
