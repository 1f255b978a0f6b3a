/// How a point's iteration ended, before any colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orbit {
    /// `|z|` passed the escape radius at this iteration.
    Escaped(u32),
    /// Newton iteration reached a root at this iteration.
    Converged(u32),
    /// Neither escaped nor converged within the iteration budget.
    Bounded,
}

impl Orbit {
    /// The iteration count used for colouring, if the orbit has one.
    #[must_use]
    pub const fn iteration(self) -> Option<u32> {
        match self {
            Self::Escaped(iteration) | Self::Converged(iteration) => Some(iteration),
            Self::Bounded => None,
        }
    }
}
