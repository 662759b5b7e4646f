//! The shareable text form: an optional rule directive followed by a grid.
//!
//! ```text
//! [B<digits>/S<digits>]<braille-row>(|<braille-row>)*
//! ```

use std::fmt;
use std::str::FromStr;

use crate::braille;
use crate::error::DecodeError;
use crate::grid::Grid;
use crate::rule::RuleSet;

/// A grid together with the rules it evolves under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeState {
    /// Current generation.
    pub grid: Grid,
    /// Rules applied by [`step`](Self::step).
    pub rules: RuleSet,
}

impl LifeState {
    /// Pair a grid with a rule set.
    pub fn new(grid: Grid, rules: RuleSet) -> Self {
        Self { grid, rules }
    }

    /// The next state: same rules, grid advanced one generation.
    pub fn step(&self) -> LifeState {
        LifeState {
            grid: self.grid.advance(&self.rules),
            rules: self.rules,
        }
    }

    /// Serialize to the shareable text form.
    ///
    /// The directive is omitted when the rules are the default `B3/S23`.
    pub fn encode(&self) -> String {
        if self.rules.is_default() {
            self.grid.encode()
        } else {
            format!("{}{}", self.rules, self.grid.encode())
        }
    }

    /// Parse the shareable text form.
    ///
    /// Everything before the first glyph or `|` is the rule directive,
    /// with surrounding whitespace ignored. An empty directive means the
    /// default rules. A directive that does not parse also falls back to the
    /// default rules; only errors in the grid body are reported.
    pub fn decode(text: &str) -> Result<LifeState, DecodeError> {
        let split = text
            .find(|c: char| c == '|' || braille::mask_for_glyph(c).is_some())
            .unwrap_or(text.len());
        let (directive, body) = text.split_at(split);
        let directive = directive.trim();

        let rules = if directive.is_empty() {
            RuleSet::default()
        } else {
            match RuleSet::parse(directive) {
                Ok(rules) => rules,
                Err(e) => {
                    tracing::debug!(
                        directive,
                        error = %e,
                        "unparseable rule directive, using B3/S23"
                    );
                    RuleSet::default()
                }
            }
        };

        let grid = Grid::decode(body)?;
        Ok(LifeState { grid, rules })
    }
}

impl fmt::Display for LifeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for LifeState {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
