//! Birth/survival rule sets in `B<digits>/S<digits>` notation.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;

/// Largest neighbour count a Moore neighbourhood can produce.
pub const MAX_NEIGHBOURS: u8 = 8;

/// A set of neighbour counts in `[0, 8]`, stored as a 9-bit mask.
///
/// Bit `n` is set iff count `n` is a member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighbourSet(u16);

impl NeighbourSet {
    const MASK: u16 = (1 << (MAX_NEIGHBOURS + 1)) - 1;

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from raw bits; bits above 8 are discarded.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    /// Build a set from counts.
    ///
    /// Returns `Err(RuleError::CountOutOfRange)` for any count above 8.
    pub fn from_counts<I>(counts: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = u8>,
    {
        counts.into_iter().try_fold(Self::empty(), |set, count| {
            if count > MAX_NEIGHBOURS {
                Err(RuleError::CountOutOfRange { count })
            } else {
                Ok(set.with(count))
            }
        })
    }

    /// A copy of this set with `count` added. Counts above 8 are ignored.
    pub const fn with(self, count: u8) -> Self {
        if count > MAX_NEIGHBOURS {
            self
        } else {
            Self(self.0 | (1 << count))
        }
    }

    /// Whether `count` is a member.
    #[inline]
    pub const fn contains(self, count: u8) -> bool {
        count <= MAX_NEIGHBOURS && self.0 & (1 << count) != 0
    }

    /// The raw 9-bit mask.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Number of member counts.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set has no members.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member counts in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=MAX_NEIGHBOURS).filter(move |&n| self.contains(n))
    }
}

impl fmt::Display for NeighbourSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.iter() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// The transition rule: which counts give birth and which allow survival.
///
/// Parsed from and printed as `B<digits>/S<digits>`, e.g. `B3/S23` for
/// Conway's Life (the [`Default`]). Digit order and duplicates in the
/// input do not matter; output digits are ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    birth: NeighbourSet,
    survival: NeighbourSet,
}

impl RuleSet {
    /// Conway's Life, `B3/S23`.
    pub const CONWAY: RuleSet = RuleSet {
        birth: NeighbourSet::empty().with(3),
        survival: NeighbourSet::empty().with(2).with(3),
    };

    /// Create a rule set from its two count sets.
    pub const fn new(birth: NeighbourSet, survival: NeighbourSet) -> Self {
        Self { birth, survival }
    }

    /// Counts at which a dead cell comes alive.
    pub const fn birth(&self) -> NeighbourSet {
        self.birth
    }

    /// Counts at which a live cell stays alive.
    pub const fn survival(&self) -> NeighbourSet {
        self.survival
    }

    /// Whether this is the default `B3/S23` rule.
    pub fn is_default(&self) -> bool {
        *self == Self::CONWAY
    }

    /// Parse a `B<digits>/S<digits>` directive.
    ///
    /// The `B` and `S` markers are case-insensitive and either digit list
    /// may be empty (`B/S` never births and never survives).
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        let rest = text
            .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'B'))
            .ok_or(RuleError::MissingBirth)?;
        let (birth, survival) = rest.split_once('/').ok_or(RuleError::MissingSurvival)?;
        let survival = survival
            .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'S'))
            .ok_or(RuleError::MissingSurvival)?;
        Ok(Self::new(parse_counts(birth)?, parse_counts(survival)?))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_counts(digits: &str) -> Result<NeighbourSet, RuleError> {
    let counts = digits
        .chars()
        .map(|found| {
            found
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(RuleError::InvalidCharacter { found })
        })
        .collect::<Result<Vec<u8>, RuleError>>()?;
    NeighbourSet::from_counts(counts)
}
