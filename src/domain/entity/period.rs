use std::fmt::{Display, Formatter, Result as FmtResult};

/// One phase of the work/rest cycle, or the stopped timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Unknown,
    Work,
    Rest,
    Stopped,
}

impl Period {
    /// Get the period that follows this one in the work/rest alternation.
    ///
    /// Anything that is not [`Period::Work`] is followed by work.
    pub fn opposite(self) -> Self {
        match self {
            Self::Work => Self::Rest,
            _ => Self::Work,
        }
    }

    /// Parse a label produced by [`Display`]. Unrecognized labels map to
    /// [`Period::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Work" => Self::Work,
            "Rest" => Self::Rest,
            "Stopped" => Self::Stopped,
            _ => Self::Unknown,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unknown => f.write_str("Unknown"),
            Self::Work => f.write_str("Work"),
            Self::Rest => f.write_str("Rest"),
            Self::Stopped => f.write_str("Stopped"),
        }
    }
}
