/// One-shot entrance flag. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlag {
    revealed: bool,
}

impl RevealFlag {
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds one intersection sample. Returns `true` only on the hidden -> shown transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }

        self.revealed = true;
        true
    }
}

/// `rootMargin` that shrinks the viewport inward by `margin_px` on every side.
pub fn root_margin(margin_px: u32) -> String {
    if margin_px == 0 {
        "0px".to_string()
    } else {
        format!("-{margin_px}px")
    }
}

pub fn stagger_delay(base_seconds: f64, step_seconds: f64, index: usize) -> f64 {
    base_seconds + step_seconds * index as f64
}

pub fn delay_style(seconds: f64) -> String {
    format!("transition-delay: {seconds:.2}s;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_and_never_hides_again() {
        let mut flag = RevealFlag::default();
        assert!(!flag.is_revealed());

        assert!(!flag.observe(false));
        assert!(flag.observe(true));
        assert!(flag.is_revealed());

        let samples = [false, true, false, false, true];
        let transitions = samples.iter().filter(|sample| flag.observe(**sample)).count();
        assert_eq!(transitions, 0);
        assert!(flag.is_revealed());
    }

    #[test]
    fn margin_is_applied_inward() {
        assert_eq!(root_margin(100), "-100px");
        assert_eq!(root_margin(0), "0px");
    }

    #[test]
    fn stagger_grows_per_index() {
        assert_eq!(delay_style(stagger_delay(0.5, 0.1, 0)), "transition-delay: 0.50s;");
        assert_eq!(delay_style(stagger_delay(0.5, 0.1, 2)), "transition-delay: 0.70s;");
        assert_eq!(delay_style(stagger_delay(0.0, 0.2, 1)), "transition-delay: 0.20s;");
    }
}
