#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

/// Single-slot notification queue. A newer notice replaces the visible one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    current: Option<(u64, Notice)>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some((id, notice));
        id
    }

    /// Dismisses the visible notice only if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current_id() != Some(id) {
            return false;
        }

        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, notice)| notice)
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(title: &'static str) -> Notice {
        Notice {
            title,
            description: "",
            tone: Tone::Success,
        }
    }

    #[test]
    fn newer_notice_replaces_visible_one() {
        let mut toasts = Toasts::default();
        toasts.push(notice("first"));
        toasts.push(notice("second"));
        assert_eq!(toasts.current().map(|n| n.title), Some("second"));
    }

    #[test]
    fn stale_dismiss_leaves_newer_notice() {
        let mut toasts = Toasts::default();
        let first = toasts.push(notice("first"));
        let second = toasts.push(notice("second"));

        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.current_id(), Some(second));

        assert!(toasts.dismiss(second));
        assert!(toasts.current().is_none());
        assert!(!toasts.dismiss(second));
    }
}
