//! Data-kind catalogs: which table each kind lands in and which accessor feeds it.
//!
//! Catalog order is commit order. Game headers come first in the day catalog
//! so the satellite tables written after them have a header to refer to.

use crate::error::{Result, StatsError};
use crate::nba::{BoxScore, PlayByPlay, RowMap, Scoreboard};
use crate::storage::tables;
use crate::storage::TableSchema;
use std::fmt;
use std::str::FromStr;

/// One catalog row: a kind, its target table and the accessor producing its rows.
pub struct CatalogEntry<K, S> {
    pub kind: K,
    pub schema: &'static TableSchema,
    pub accessor: fn(&S) -> Result<Vec<RowMap>>,
}

impl<K: fmt::Debug, S> fmt::Debug for CatalogEntry<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("kind", &self.kind)
            .field("table", &self.schema.name)
            .finish()
    }
}

/// Scoreboard data collected once per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    Headers,
    LineScore,
    LastMeeting,
    SeriesStanding,
    EastStanding,
    WestStanding,
}

impl DayKind {
    pub const ALL: [DayKind; 6] = [
        DayKind::Headers,
        DayKind::LineScore,
        DayKind::LastMeeting,
        DayKind::SeriesStanding,
        DayKind::EastStanding,
        DayKind::WestStanding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Headers => "headers",
            DayKind::LineScore => "line_score",
            DayKind::LastMeeting => "last_meeting",
            DayKind::SeriesStanding => "series_standing",
            DayKind::EastStanding => "east_standing",
            DayKind::WestStanding => "west_standing",
        }
    }

    pub fn entry(&self) -> &'static CatalogEntry<DayKind, Scoreboard> {
        // DAY_CATALOG is declared in the same order as ALL
        &DAY_CATALOG[*self as usize]
    }
}

/// Box-score data collected per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxScoreKind {
    PlayerStats,
    TeamStats,
    StarterBenchStats,
}

impl BoxScoreKind {
    pub const ALL: [BoxScoreKind; 3] = [
        BoxScoreKind::PlayerStats,
        BoxScoreKind::TeamStats,
        BoxScoreKind::StarterBenchStats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoxScoreKind::PlayerStats => "player_stats",
            BoxScoreKind::TeamStats => "team_stats",
            BoxScoreKind::StarterBenchStats => "starter_bench_stats",
        }
    }
}

/// Play-by-play action classifications, one table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Period,
    Jumpball,
    Turnover,
    Steal,
    TwoPoint,
    Foul,
    FreeThrow,
    ThreePoint,
    Rebound,
    Block,
    Timeout,
    Substitution,
    Violation,
    Game,
}

impl ActionKind {
    pub const ALL: [ActionKind; 14] = [
        ActionKind::Period,
        ActionKind::Jumpball,
        ActionKind::Turnover,
        ActionKind::Steal,
        ActionKind::TwoPoint,
        ActionKind::Foul,
        ActionKind::FreeThrow,
        ActionKind::ThreePoint,
        ActionKind::Rebound,
        ActionKind::Block,
        ActionKind::Timeout,
        ActionKind::Substitution,
        ActionKind::Violation,
        ActionKind::Game,
    ];

    /// The feed's `actionType` value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Period => "period",
            ActionKind::Jumpball => "jumpball",
            ActionKind::Turnover => "turnover",
            ActionKind::Steal => "steal",
            ActionKind::TwoPoint => "2pt",
            ActionKind::Foul => "foul",
            ActionKind::FreeThrow => "freethrow",
            ActionKind::ThreePoint => "3pt",
            ActionKind::Rebound => "rebound",
            ActionKind::Block => "block",
            ActionKind::Timeout => "timeout",
            ActionKind::Substitution => "substitution",
            ActionKind::Violation => "violation",
            ActionKind::Game => "game",
        }
    }

    /// Exact, case-sensitive match on an `actionType` value.
    pub fn classify(action_type: &str) -> Option<ActionKind> {
        Self::ALL.into_iter().find(|k| k.as_str() == action_type)
    }
}

macro_rules! kind_name_impls {
    ($kind:ty, $catalog:literal) => {
        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $kind {
            type Err = StatsError;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .into_iter()
                    .find(|k| k.as_str() == s)
                    .ok_or_else(|| StatsError::UnknownDataKind {
                        catalog: $catalog,
                        name: s.to_string(),
                    })
            }
        }
    };
}

kind_name_impls!(DayKind, "day");
kind_name_impls!(BoxScoreKind, "box score");
kind_name_impls!(ActionKind, "play-by-play");

pub static DAY_CATALOG: [CatalogEntry<DayKind, Scoreboard>; 6] = [
    CatalogEntry {
        kind: DayKind::Headers,
        schema: &tables::GAME_HEADERS,
        accessor: Scoreboard::game_header,
    },
    CatalogEntry {
        kind: DayKind::LineScore,
        schema: &tables::GAME_LINE_SCORES,
        accessor: Scoreboard::line_score,
    },
    CatalogEntry {
        kind: DayKind::LastMeeting,
        schema: &tables::GAME_LAST_MEETING,
        accessor: Scoreboard::last_meeting,
    },
    CatalogEntry {
        kind: DayKind::SeriesStanding,
        schema: &tables::GAME_SERIES_STANDINGS,
        accessor: Scoreboard::series_standings,
    },
    CatalogEntry {
        kind: DayKind::EastStanding,
        schema: &tables::EAST_STANDING_BY_DATE,
        accessor: Scoreboard::east_standing,
    },
    CatalogEntry {
        kind: DayKind::WestStanding,
        schema: &tables::WEST_STANDING_BY_DATE,
        accessor: Scoreboard::west_standing,
    },
];

pub static BOX_SCORE_CATALOG: [CatalogEntry<BoxScoreKind, BoxScore>; 3] = [
    CatalogEntry {
        kind: BoxScoreKind::PlayerStats,
        schema: &tables::PLAYER_STATS_BY_GAME,
        accessor: BoxScore::player_stats,
    },
    CatalogEntry {
        kind: BoxScoreKind::TeamStats,
        schema: &tables::TEAM_STATS_BY_GAME,
        accessor: BoxScore::team_stats,
    },
    CatalogEntry {
        kind: BoxScoreKind::StarterBenchStats,
        schema: &tables::TEAM_STARTER_BENCH_STATS_BY_GAME,
        accessor: BoxScore::starter_bench_stats,
    },
];

pub static PLAY_BY_PLAY_CATALOG: [CatalogEntry<ActionKind, PlayByPlay>; 14] = [
    CatalogEntry {
        kind: ActionKind::Period,
        schema: &tables::PERIOD,
        accessor: PlayByPlay::period,
    },
    CatalogEntry {
        kind: ActionKind::Jumpball,
        schema: &tables::JUMPBALL,
        accessor: PlayByPlay::jumpball,
    },
    CatalogEntry {
        kind: ActionKind::Turnover,
        schema: &tables::TURNOVER,
        accessor: PlayByPlay::turnover,
    },
    CatalogEntry {
        kind: ActionKind::Steal,
        schema: &tables::STEAL,
        accessor: PlayByPlay::steal,
    },
    CatalogEntry {
        kind: ActionKind::TwoPoint,
        schema: &tables::TWO_POINT,
        accessor: PlayByPlay::two_point,
    },
    CatalogEntry {
        kind: ActionKind::Foul,
        schema: &tables::FOUL,
        accessor: PlayByPlay::foul,
    },
    CatalogEntry {
        kind: ActionKind::FreeThrow,
        schema: &tables::FREETHROW,
        accessor: PlayByPlay::freethrow,
    },
    CatalogEntry {
        kind: ActionKind::ThreePoint,
        schema: &tables::THREE_POINT,
        accessor: PlayByPlay::three_point,
    },
    CatalogEntry {
        kind: ActionKind::Rebound,
        schema: &tables::REBOUND,
        accessor: PlayByPlay::rebound,
    },
    CatalogEntry {
        kind: ActionKind::Block,
        schema: &tables::BLOCK,
        accessor: PlayByPlay::block,
    },
    CatalogEntry {
        kind: ActionKind::Timeout,
        schema: &tables::TIMEOUT,
        accessor: PlayByPlay::timeout,
    },
    CatalogEntry {
        kind: ActionKind::Substitution,
        schema: &tables::SUBSTITUTION,
        accessor: PlayByPlay::substitution,
    },
    CatalogEntry {
        kind: ActionKind::Violation,
        schema: &tables::VIOLATION,
        accessor: PlayByPlay::violation,
    },
    CatalogEntry {
        kind: ActionKind::Game,
        schema: &tables::GAME,
        accessor: PlayByPlay::game,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_kind_parse() {
        assert_eq!("headers".parse::<DayKind>().unwrap(), DayKind::Headers);
        assert_eq!(
            "west_standing".parse::<DayKind>().unwrap(),
            DayKind::WestStanding
        );
        match "box_score".parse::<DayKind>() {
            Err(StatsError::UnknownDataKind { catalog, name }) => {
                assert_eq!(catalog, "day");
                assert_eq!(name, "box_score");
            }
            other => panic!("Expected UnknownDataKind, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in DayKind::ALL {
            assert_eq!(kind.to_string().parse::<DayKind>().unwrap(), kind);
        }
        for kind in BoxScoreKind::ALL {
            assert_eq!(kind.to_string().parse::<BoxScoreKind>().unwrap(), kind);
        }
        for kind in ActionKind::ALL {
            assert_eq!(kind.to_string().parse::<ActionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_catalogs_follow_declaration_order() {
        let day: Vec<DayKind> = DAY_CATALOG.iter().map(|e| e.kind).collect();
        assert_eq!(day, DayKind::ALL.to_vec());
        assert_eq!(DAY_CATALOG[0].schema.name, "game_headers");

        let box_score: Vec<BoxScoreKind> = BOX_SCORE_CATALOG.iter().map(|e| e.kind).collect();
        assert_eq!(box_score, BoxScoreKind::ALL.to_vec());

        let actions: Vec<ActionKind> = PLAY_BY_PLAY_CATALOG.iter().map(|e| e.kind).collect();
        assert_eq!(actions, ActionKind::ALL.to_vec());
    }

    #[test]
    fn test_day_kind_entry_lookup() {
        for kind in DayKind::ALL {
            assert_eq!(kind.entry().kind, kind);
        }
        assert_eq!(DayKind::EastStanding.entry().schema.name, "east_standing_by_date");
    }

    #[test]
    fn test_action_classification_is_exact() {
        assert_eq!(ActionKind::classify("2pt"), Some(ActionKind::TwoPoint));
        assert_eq!(ActionKind::classify("foul"), Some(ActionKind::Foul));
        assert_eq!(ActionKind::classify("Foul"), None);
        assert_eq!(ActionKind::classify(" steal"), None);
        assert_eq!(ActionKind::classify("ejection"), None);
    }

    #[test]
    fn test_every_table_is_reached_once() {
        let mut names: Vec<&str> = DAY_CATALOG
            .iter()
            .map(|e| e.schema.name)
            .chain(BOX_SCORE_CATALOG.iter().map(|e| e.schema.name))
            .chain(PLAY_BY_PLAY_CATALOG.iter().map(|e| e.schema.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(total, 23);
        assert_eq!(names.len(), total);
    }
}
