//! Open/closed state for disclosure widgets
//!
//! Provides:
//! - `Disclosure` two-state toggle used by the dropdown and the accordion
//! - `DisclosureVariant` presentation variants (overlay, inline)
//! - `NavSheet` state of the mobile navigation sheet and its embedded accordion

use derive_more::Display;

/// Open/closed state of a single disclosure widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display)]
pub enum Disclosure {
    #[default]
    #[display("closed")]
    Closed,
    #[display("open")]
    Open,
}

impl Disclosure {
    /// Flip the state and return the new one
    pub fn toggle(&mut self) -> Disclosure {
        *self = self.toggled();
        *self
    }

    /// The state a toggle would produce, without mutating
    pub fn toggled(self) -> Disclosure {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Disclosure::Open)
    }
}

impl From<bool> for Disclosure {
    fn from(open: bool) -> Self {
        if open {
            Disclosure::Open
        } else {
            Disclosure::Closed
        }
    }
}

/// How a disclosure panel is laid out. Has no influence on the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureVariant {
    /// Panel floats over the page, anchored to its trigger (desktop dropdown)
    Overlay,
    /// Panel expands inline and pushes following content down (mobile accordion)
    Inline,
}

/// State of the mobile navigation sheet
///
/// The sheet and its embedded "Creator Hub" accordion are tracked separately.
/// Closing the sheet leaves the accordion as it was, so reopening the sheet
/// shows the accordion in its previous state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavSheet {
    sheet: Disclosure,
    accordion: Disclosure,
}

impl NavSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the sheet itself
    pub fn toggle(&mut self) -> Disclosure {
        self.sheet.toggle()
    }

    /// Toggle the embedded accordion
    pub fn toggle_accordion(&mut self) -> Disclosure {
        self.accordion.toggle()
    }

    pub fn sheet(&self) -> Disclosure {
        self.sheet
    }

    pub fn accordion(&self) -> Disclosure {
        self.accordion
    }

    pub fn is_open(&self) -> bool {
        self.sheet.is_open()
    }
}
