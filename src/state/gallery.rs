use crate::content::Project;

/// Number of tech chips shown on a card before collapsing into `+N`.
pub const CARD_TECH_LIMIT: usize = 4;

/// Which project's detail overlay is open. Holds a borrowed view of static content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectSelection {
    selected: Option<&'static Project>,
}

impl ProjectSelection {
    pub fn select(&mut self, project: &'static Project) {
        self.selected = Some(project);
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(self) -> Option<&'static Project> {
        self.selected
    }
}

/// Splits a tech list into the chips shown on a card and the count hidden behind `+N`.
pub fn tech_preview<'a>(tech: &'a [&'a str], limit: usize) -> (&'a [&'a str], usize) {
    let shown = tech.len().min(limit);
    (&tech[..shown], tech.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn selection_opens_replaces_and_dismisses() {
        let mut selection = ProjectSelection::default();
        assert!(selection.selected().is_none());

        selection.select(&PROJECTS[0]);
        assert_eq!(selection.selected().map(|p| p.title), Some("Law Firm ERP Portal"));

        selection.select(&PROJECTS[1]);
        assert_eq!(selection.selected().map(|p| p.title), Some("Travel Package Booking"));

        selection.dismiss();
        assert!(selection.selected().is_none());
    }

    #[test]
    fn tech_overflow_is_counted() {
        let (shown, hidden) = tech_preview(PROJECTS[0].tech_stack, CARD_TECH_LIMIT);
        assert_eq!(shown, ["React", "Node.js", "MongoDB", "Express.js"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = tech_preview(&["Rust"], CARD_TECH_LIMIT);
        assert_eq!(shown.len(), 1);
        assert_eq!(hidden, 0);
    }
}
