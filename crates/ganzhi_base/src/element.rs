//! Five elements (wuxing) and their generating / restraining cycles.
//!
//! Generating cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Restraining cycle: Wood → Earth → Water → Fire → Metal → Wood.
//! Each element generates exactly one other and restrains exactly one other.

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one restrains (overcomes).
    pub const fn restrains(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Element {
        match self {
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
        }
    }

    /// The element that restrains this one.
    pub const fn restrained_by(self) -> Element {
        match self {
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generating_cycle_closes_after_five() {
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.generates();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn inverse_relations() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.restrains().restrained_by(), e);
        }
    }

    #[test]
    fn cycles_are_disjoint() {
        for e in ALL_ELEMENTS {
            assert_ne!(e.generates(), e.restrains());
            assert_ne!(e.generates(), e);
            assert_ne!(e.restrains(), e);
        }
    }

    #[test]
    fn restraint_skips_one_in_generating_order() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.restrains(), e.generates().generates());
        }
    }
}
