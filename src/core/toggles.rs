// Two-state page toggles: the spotlight panel switch and the contact bar.

use super::constants::{CONTACT_CLOSED_LABEL, CONTACT_OPEN_LABEL};

#[inline]
pub fn aria_bool(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}

/// Which spotlight panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spotlight {
    #[default]
    Engineer,
    Director,
}

impl Spotlight {
    pub fn toggled(self) -> Self {
        match self {
            Self::Engineer => Self::Director,
            Self::Director => Self::Engineer,
        }
    }

    pub fn is_director(self) -> bool {
        self == Self::Director
    }

    pub fn engineer_active(self) -> bool {
        self == Self::Engineer
    }

    pub fn director_active(self) -> bool {
        self == Self::Director
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Engineer => "engineer",
            Self::Director => "director",
        }
    }
}

/// Everything the contact toggle and bar display for one state.
///
/// Produced from a single `ContactBar` value so the class, both aria
/// attributes and the label can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactView {
    pub open_class: bool,
    pub aria_expanded: &'static str,
    pub aria_hidden: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactBar {
    pub open: bool,
}

impl ContactBar {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn view(self) -> ContactView {
        ContactView {
            open_class: self.open,
            aria_expanded: aria_bool(self.open),
            aria_hidden: aria_bool(!self.open),
            label: if self.open {
                CONTACT_OPEN_LABEL
            } else {
                CONTACT_CLOSED_LABEL
            },
        }
    }
}
