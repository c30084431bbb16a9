//! Playback speed options.

/// Enumerated tick intervals offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speed {
    X1,
    X2,
    X3,
    X5,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::X1, Speed::X2, Speed::X3, Speed::X5];

    pub fn interval_ms(self) -> u64 {
        match self {
            Speed::X1 => 5_000,
            Speed::X2 => 3_000,
            Speed::X3 => 1_500,
            Speed::X5 => 1_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::X1 => "1x",
            Speed::X2 => "2x",
            Speed::X3 => "3x",
            Speed::X5 => "5x",
        }
    }

    pub fn from_interval_ms(ms: u64) -> Option<Speed> {
        Self::ALL.into_iter().find(|s| s.interval_ms() == ms)
    }

    /// Next faster option, wrapping back to the slowest.
    pub fn next(self) -> Speed {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals() {
        assert_eq!(Speed::X1.interval_ms(), 5_000);
        assert_eq!(Speed::X2.interval_ms(), 3_000);
        assert_eq!(Speed::X3.interval_ms(), 1_500);
        assert_eq!(Speed::X5.interval_ms(), 1_000);
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(Speed::X1.next(), Speed::X2);
        assert_eq!(Speed::X5.next(), Speed::X1);
    }

    #[test]
    fn lookup_by_interval() {
        assert_eq!(Speed::from_interval_ms(1_500), Some(Speed::X3));
        assert_eq!(Speed::from_interval_ms(2_000), None);
    }
}
