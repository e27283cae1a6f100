//! Creation-time column modifiers as integer bit flags.

use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const NOT_NULL: Modifiers = Modifiers(1);
    pub const AUTO_INCREMENT: Modifiers = Modifiers(1 << 1);
    pub const UNIQUE: Modifiers = Modifiers(1 << 2);
    pub const PRIMARY: Modifiers = Modifiers(1 << 3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is set.
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Modifiers) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Modifiers) {
        self.0 &= !other.0;
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        self.union(rhs)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.insert(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_and_query() {
        let m = Modifiers::UNIQUE | Modifiers::PRIMARY | Modifiers::NOT_NULL;
        assert!(m.contains(Modifiers::UNIQUE));
        assert!(m.contains(Modifiers::PRIMARY | Modifiers::NOT_NULL));
        assert!(!m.contains(Modifiers::AUTO_INCREMENT));
        assert!(m.contains(Modifiers::NONE));
    }

    #[test]
    fn test_insert_remove() {
        let mut m = Modifiers::NOT_NULL;
        m.remove(Modifiers::NOT_NULL);
        assert!(m.is_empty());
        m |= Modifiers::AUTO_INCREMENT;
        assert_eq!(m, Modifiers::AUTO_INCREMENT);
        assert_eq!(Modifiers::NONE.bits(), 0);
    }
}
