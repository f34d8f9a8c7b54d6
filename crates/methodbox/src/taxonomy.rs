//! The fixed classification vocabulary for method cards
//!
//! Every card in the catalog is classified along three axes: the design
//! process [`Phase`] it belongs to, the [`TimeBudget`] it needs, and the
//! [`SizeGroup`] it works best with. Phases are further grouped into two
//! display [`Zone`]s. All four enumerations are closed: the data file may
//! contain anything, but only these keywords take part in grouping and
//! filtering.

use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════
// PARSE ERROR
// ═══════════════════════════════════════════════════════════════════════

/// Error returned when a classification keyword is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyword {
    /// The rejected input
    pub input: String,

    /// Name of the vocabulary the input was parsed against
    pub vocabulary: &'static str,
}

impl UnknownKeyword {
    fn new(input: &str, vocabulary: &'static str) -> Self {
        Self {
            input: input.to_string(),
            vocabulary,
        }
    }
}

impl fmt::Display for UnknownKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a recognized {}", self.input, self.vocabulary)
    }
}

impl std::error::Error for UnknownKeyword {}

// ═══════════════════════════════════════════════════════════════════════
// PHASE
// ═══════════════════════════════════════════════════════════════════════

/// A stage of the design process.
///
/// The six phases are fixed and ordered; [`Phase::ALL`] lists them in
/// process order, which is also the order grouping queries report them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Build a shared understanding of the problem
    Understand,

    /// Observe real users in their context
    Observe,

    /// Condense observations into a point of view
    PointOfView,

    /// Generate solution ideas
    Ideate,

    /// Make ideas tangible
    Prototype,

    /// Test prototypes with users
    Test,
}

impl Phase {
    /// All phases, in process order.
    pub const ALL: [Phase; 6] = [
        Phase::Understand,
        Phase::Observe,
        Phase::PointOfView,
        Phase::Ideate,
        Phase::Prototype,
        Phase::Test,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Understand => "Understand",
            Phase::Observe => "Observe",
            Phase::PointOfView => "Point of view",
            Phase::Ideate => "Ideate",
            Phase::Prototype => "Prototype",
            Phase::Test => "Test",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Phase {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "understand" => Ok(Phase::Understand),
            "observe" => Ok(Phase::Observe),
            "point of view" | "point-of-view" | "pointofview" | "pov" => Ok(Phase::PointOfView),
            "ideate" => Ok(Phase::Ideate),
            "prototype" => Ok(Phase::Prototype),
            "test" => Ok(Phase::Test),
            _ => Err(UnknownKeyword::new(s, "phase")),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TIME BUDGET
// ═══════════════════════════════════════════════════════════════════════

/// How much time a method needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBudget {
    /// Up to about half an hour
    Short,

    /// A session of one to two hours
    Medium,

    /// Half a day or more
    Long,
}

impl TimeBudget {
    /// All time budgets, shortest first.
    pub const ALL: [TimeBudget; 3] = [TimeBudget::Short, TimeBudget::Medium, TimeBudget::Long];
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeBudget::Short => "short",
            TimeBudget::Medium => "medium",
            TimeBudget::Long => "long",
        };
        write!(f, "{name}")
    }
}

impl FromStr for TimeBudget {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(TimeBudget::Short),
            "medium" => Ok(TimeBudget::Medium),
            "long" => Ok(TimeBudget::Long),
            _ => Err(UnknownKeyword::new(s, "time budget")),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SIZE GROUP
// ═══════════════════════════════════════════════════════════════════════

/// How many participants a method works best with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeGroup {
    /// 2-5 participants
    Small,

    /// 6-10 participants
    Medium,

    /// More than 10 participants
    Large,
}

impl SizeGroup {
    /// All size groups, smallest first.
    pub const ALL: [SizeGroup; 3] = [SizeGroup::Small, SizeGroup::Medium, SizeGroup::Large];
}

impl fmt::Display for SizeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeGroup::Small => "small (2-5)",
            SizeGroup::Medium => "medium (6-10)",
            SizeGroup::Large => "large (10+)",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SizeGroup {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Older data files decorate the keyword with a head-count hint,
        // e.g. "small (2-5)". Only the keyword matters.
        let keyword = match s.split_once('(') {
            Some((head, _)) => head,
            None => s,
        };
        match keyword.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SizeGroup::Small),
            "medium" => Ok(SizeGroup::Medium),
            "large" => Ok(SizeGroup::Large),
            _ => Err(UnknownKeyword::new(s, "size group")),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ZONE
// ═══════════════════════════════════════════════════════════════════════

/// A named grouping of phases for display purposes.
///
/// The browser lays the six phases out in two zones of three columns each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Phases Understand, Observe, and Point of view
    UnderstandingTheProblem,

    /// Phases Ideate, Prototype, and Test
    IdeasToExecution,
}

impl Zone {
    /// Both zones, in display order.
    pub const ALL: [Zone; 2] = [Zone::UnderstandingTheProblem, Zone::IdeasToExecution];

    /// Human-readable zone title.
    pub fn title(&self) -> &'static str {
        match self {
            Zone::UnderstandingTheProblem => "Understanding the problem",
            Zone::IdeasToExecution => "Ideas to execution",
        }
    }

    /// One-line note displayed under the zone title.
    pub fn note(&self) -> &'static str {
        match self {
            Zone::UnderstandingTheProblem => {
                "The problem is still murky: understand it, observe people, and fix a point of view before creating."
            }
            Zone::IdeasToExecution => {
                "The creative stretch: widen the solution space, make ideas tangible, and test them in a structured way."
            }
        }
    }

    /// The three phases this zone covers, in process order.
    pub fn phases(&self) -> [Phase; 3] {
        match self {
            Zone::UnderstandingTheProblem => [Phase::Understand, Phase::Observe, Phase::PointOfView],
            Zone::IdeasToExecution => [Phase::Ideate, Phase::Prototype, Phase::Test],
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
