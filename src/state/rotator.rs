/// Cycles an index over a fixed list of `len` entries, one step per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleRotator {
    index: usize,
    len: usize,
}

impl RoleRotator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn current<'a>(self, roles: &[&'a str]) -> Option<&'a str> {
        roles.get(self.index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ROLES;

    fn after_ticks(len: usize, ticks: usize) -> RoleRotator {
        let mut rotator = RoleRotator::new(len);
        for _ in 0..ticks {
            rotator.advance();
        }
        rotator
    }

    #[test]
    fn index_is_ticks_mod_len() {
        for ticks in 0..12 {
            assert_eq!(after_ticks(ROLES.len(), ticks).index(), ticks % ROLES.len());
        }
        assert_eq!(after_ticks(3, 7).index(), 1);
    }

    #[test]
    fn current_role_follows_index() {
        assert_eq!(after_ticks(ROLES.len(), 0).current(&ROLES), Some("Full Stack Developer"));
        assert_eq!(after_ticks(ROLES.len(), 5).current(&ROLES), Some("Building Real-World Web Apps"));
    }

    #[test]
    fn empty_list_stays_put() {
        let rotator = after_ticks(0, 4);
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(&[]), None);
    }
}
