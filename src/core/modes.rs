//! Sort and filter selectors
//!
//! The UI and the CLI speak a small vocabulary of selector strings
//! (`">"`, `"alpha"`, `"p-1B+"`, `"asia"`, ...). Those strings are decoded
//! exactly once, here, into closed enums so the sorter and filter can match
//! exhaustively instead of inspecting raw text.

use std::fmt;

/// Prefix shared by every population bracket selector.
pub const POPULATION_PREFIX: &str = "p";

/// Selector that disables filtering.
pub const ALL_SELECTOR: &str = "all";

const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;

/// How the country list is ordered before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum SortMode {
    #[default]
    #[strum(to_string = "Population Desc")]
    PopulationDescending,
    #[strum(to_string = "Population Ascen")]
    PopulationAscending,
    #[strum(to_string = "Alphabetically")]
    Alphabetical,
    #[strum(to_string = "Shuffle")]
    Shuffled,
    /// Any selector outside the vocabulary; leaves the order untouched
    #[strum(to_string = "Unsorted")]
    Unrecognized,
}

impl SortMode {
    /// Modes offered in the sort picker, in display order.
    pub const OPTIONS: &'static [SortMode] = &[
        SortMode::PopulationDescending,
        SortMode::PopulationAscending,
        SortMode::Alphabetical,
        SortMode::Shuffled,
    ];

    /// Decodes a raw selector. Never fails; unknown text maps to
    /// [`SortMode::Unrecognized`].
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            ">" => Self::PopulationDescending,
            "<" => Self::PopulationAscending,
            "alpha" => Self::Alphabetical,
            "shuffle" => Self::Shuffled,
            _ => Self::Unrecognized,
        }
    }

    #[cfg(test)]
    pub const fn selector(self) -> Option<&'static str> {
        match self {
            Self::PopulationDescending => Some(">"),
            Self::PopulationAscending => Some("<"),
            Self::Alphabetical => Some("alpha"),
            Self::Shuffled => Some("shuffle"),
            Self::Unrecognized => None,
        }
    }
}

/// Population range used by the population filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum PopulationBracket {
    #[default]
    #[strum(to_string = "All")]
    All,
    #[strum(to_string = "Less than 100M")]
    Under100M,
    #[strum(to_string = "100M or more")]
    From100MTo200M,
    #[strum(to_string = "200M or more")]
    From200MTo500M,
    #[strum(to_string = "500M or more")]
    From500MTo1B,
    #[strum(to_string = "1B or more")]
    AtLeast1B,
    #[strum(to_string = "Unknown bracket")]
    Unrecognized,
}

impl PopulationBracket {
    pub const OPTIONS: &'static [PopulationBracket] = &[
        PopulationBracket::All,
        PopulationBracket::Under100M,
        PopulationBracket::From100MTo200M,
        PopulationBracket::From200MTo500M,
        PopulationBracket::From500MTo1B,
        PopulationBracket::AtLeast1B,
    ];

    /// Decodes a bracket selector such as `"p-<100M"`.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "p-all" => Self::All,
            "p-<100M" => Self::Under100M,
            "p-100M-200M" => Self::From100MTo200M,
            "p-200M-500M" => Self::From200MTo500M,
            "p-500M-1B" => Self::From500MTo1B,
            "p-1B+" => Self::AtLeast1B,
            _ => Self::Unrecognized,
        }
    }

    #[cfg(test)]
    pub const fn selector(self) -> Option<&'static str> {
        match self {
            Self::All => Some("p-all"),
            Self::Under100M => Some("p-<100M"),
            Self::From100MTo200M => Some("p-100M-200M"),
            Self::From200MTo500M => Some("p-200M-500M"),
            Self::From500MTo1B => Some("p-500M-1B"),
            Self::AtLeast1B => Some("p-1B+"),
            Self::Unrecognized => None,
        }
    }

    /// Whether a population falls inside this bracket.
    ///
    /// `Under100M` is inclusive of 100M, which therefore also matches
    /// `From100MTo200M`. `From500MTo1B` keeps the legacy predicate
    /// `P >= 500M && P >= 1B`, making it equal to `AtLeast1B`.
    pub const fn contains(self, population: u64) -> bool {
        match self {
            Self::All | Self::Unrecognized => true,
            Self::Under100M => population <= 100 * MILLION,
            Self::From100MTo200M => population >= 100 * MILLION && population < 200 * MILLION,
            Self::From200MTo500M => population >= 200 * MILLION && population < 500 * MILLION,
            // TODO: confirm with data owners whether the upper clause should be `< 1B`
            Self::From500MTo1B => population >= 500 * MILLION && population >= BILLION,
            Self::AtLeast1B => population >= BILLION,
        }
    }
}

/// Which subset of countries survives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    /// Case-insensitive continent name
    Continent(String),
    Population(PopulationBracket),
}

impl FilterMode {
    /// Decodes a raw filter selector.
    ///
    /// Anything starting with [`POPULATION_PREFIX`] is a population bracket,
    /// `"all"` disables filtering and every other value is a continent name.
    /// A continent whose name starts with `p` cannot be expressed as a
    /// selector; construct [`FilterMode::Continent`] directly instead.
    pub fn from_selector(selector: &str) -> Self {
        if selector.starts_with(POPULATION_PREFIX) {
            Self::Population(PopulationBracket::from_selector(selector))
        } else if selector == ALL_SELECTOR {
            Self::All
        } else {
            Self::Continent(selector.to_string())
        }
    }

    #[cfg(test)]
    pub fn selector(&self) -> Option<String> {
        match self {
            Self::All => Some(ALL_SELECTOR.to_string()),
            Self::Continent(name) => Some(name.to_lowercase()),
            Self::Population(bracket) => bracket.selector().map(str::to_string),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Continent(name) => f.write_str(name),
            Self::Population(bracket) => write!(f, "Population: {bracket}"),
        }
    }
}

/// Continents offered in the filter picker.
pub const CONTINENTS: &[&str] = &[
    "Asia",
    "Africa",
    "Europe",
    "North America",
    "South America",
];

/// Entry in the filter picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub mode: FilterMode,
    pub group: FilterGroup,
}

/// Picker section an option belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FilterGroup {
    #[strum(to_string = "By Continent")]
    Continent,
    #[strum(to_string = "By Population Size")]
    Population,
}

impl FilterOption {
    /// All picker entries: the continent group first, then population brackets.
    pub fn all() -> Vec<Self> {
        let continents = std::iter::once(FilterMode::All)
            .chain(
                CONTINENTS
                    .iter()
                    .map(|c| FilterMode::Continent((*c).to_string())),
            )
            .map(|mode| Self {
                mode,
                group: FilterGroup::Continent,
            });

        let brackets = PopulationBracket::OPTIONS.iter().map(|b| Self {
            mode: FilterMode::Population(*b),
            group: FilterGroup::Population,
        });

        continents.chain(brackets).collect()
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // iced pick lists have no sections, so the group is part of the label
        match (&self.group, &self.mode) {
            (FilterGroup::Continent, FilterMode::All) => f.write_str("All"),
            (group, FilterMode::Continent(name)) => write!(f, "{group}: {name}"),
            (group, FilterMode::Population(bracket)) => write!(f, "{group}: {bracket}"),
            (_, mode) => write!(f, "{mode}"),
        }
    }
}
