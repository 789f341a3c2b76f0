//! The static list of NBA franchises used to seed the `teams` table.

use super::types::RowMap;
use serde::Serialize;

/// One franchise, shaped like the `teams` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: i64,
    pub full_name: &'static str,
    pub abbreviation: &'static str,
    pub nickname: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub year_founded: i64,
}

impl Team {
    const fn new(
        id: i64,
        full_name: &'static str,
        abbreviation: &'static str,
        nickname: &'static str,
        city: &'static str,
        state: &'static str,
        year_founded: i64,
    ) -> Self {
        Self {
            id,
            full_name,
            abbreviation,
            nickname,
            city,
            state,
            year_founded,
        }
    }

    pub fn to_row(&self) -> RowMap {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => RowMap::new(),
        }
    }
}

pub static TEAMS: [Team; 30] = [
    Team::new(1610612737, "Atlanta Hawks", "ATL", "Hawks", "Atlanta", "Georgia", 1949),
    Team::new(1610612738, "Boston Celtics", "BOS", "Celtics", "Boston", "Massachusetts", 1946),
    Team::new(1610612739, "Cleveland Cavaliers", "CLE", "Cavaliers", "Cleveland", "Ohio", 1970),
    Team::new(1610612740, "New Orleans Pelicans", "NOP", "Pelicans", "New Orleans", "Louisiana", 2002),
    Team::new(1610612741, "Chicago Bulls", "CHI", "Bulls", "Chicago", "Illinois", 1966),
    Team::new(1610612742, "Dallas Mavericks", "DAL", "Mavericks", "Dallas", "Texas", 1980),
    Team::new(1610612743, "Denver Nuggets", "DEN", "Nuggets", "Denver", "Colorado", 1976),
    Team::new(1610612744, "Golden State Warriors", "GSW", "Warriors", "Golden State", "California", 1946),
    Team::new(1610612745, "Houston Rockets", "HOU", "Rockets", "Houston", "Texas", 1967),
    Team::new(1610612746, "Los Angeles Clippers", "LAC", "Clippers", "Los Angeles", "California", 1970),
    Team::new(1610612747, "Los Angeles Lakers", "LAL", "Lakers", "Los Angeles", "California", 1948),
    Team::new(1610612748, "Miami Heat", "MIA", "Heat", "Miami", "Florida", 1988),
    Team::new(1610612749, "Milwaukee Bucks", "MIL", "Bucks", "Milwaukee", "Wisconsin", 1968),
    Team::new(1610612750, "Minnesota Timberwolves", "MIN", "Timberwolves", "Minnesota", "Minnesota", 1989),
    Team::new(1610612751, "Brooklyn Nets", "BKN", "Nets", "Brooklyn", "New York", 1976),
    Team::new(1610612752, "New York Knicks", "NYK", "Knicks", "New York", "New York", 1946),
    Team::new(1610612753, "Orlando Magic", "ORL", "Magic", "Orlando", "Florida", 1989),
    Team::new(1610612754, "Indiana Pacers", "IND", "Pacers", "Indiana", "Indiana", 1976),
    Team::new(1610612755, "Philadelphia 76ers", "PHI", "76ers", "Philadelphia", "Pennsylvania", 1949),
    Team::new(1610612756, "Phoenix Suns", "PHX", "Suns", "Phoenix", "Arizona", 1968),
    Team::new(1610612757, "Portland Trail Blazers", "POR", "Trail Blazers", "Portland", "Oregon", 1970),
    Team::new(1610612758, "Sacramento Kings", "SAC", "Kings", "Sacramento", "California", 1948),
    Team::new(1610612759, "San Antonio Spurs", "SAS", "Spurs", "San Antonio", "Texas", 1976),
    Team::new(1610612760, "Oklahoma City Thunder", "OKC", "Thunder", "Oklahoma City", "Oklahoma", 1967),
    Team::new(1610612761, "Toronto Raptors", "TOR", "Raptors", "Toronto", "Ontario", 1995),
    Team::new(1610612762, "Utah Jazz", "UTA", "Jazz", "Utah", "Utah", 1974),
    Team::new(1610612763, "Memphis Grizzlies", "MEM", "Grizzlies", "Memphis", "Tennessee", 1995),
    Team::new(1610612764, "Washington Wizards", "WAS", "Wizards", "Washington", "District of Columbia", 1961),
    Team::new(1610612765, "Detroit Pistons", "DET", "Pistons", "Detroit", "Michigan", 1948),
    Team::new(1610612766, "Charlotte Hornets", "CHA", "Hornets", "Charlotte", "North Carolina", 1988),
];

/// Every franchise as a source row, in ID order.
pub fn team_rows() -> Vec<RowMap> {
    TEAMS.iter().map(Team::to_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_team_keys_are_unique() {
        let ids: HashSet<i64> = TEAMS.iter().map(|t| t.id).collect();
        let names: HashSet<&str> = TEAMS.iter().map(|t| t.full_name).collect();
        let abbreviations: HashSet<&str> = TEAMS.iter().map(|t| t.abbreviation).collect();
        assert_eq!(ids.len(), 30);
        assert_eq!(names.len(), 30);
        assert_eq!(abbreviations.len(), 30);
    }

    #[test]
    fn test_team_row_matches_table_columns() {
        let row = TEAMS[0].to_row();
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["id", "full_name", "abbreviation", "nickname", "city", "state", "year_founded"]
        );
        assert_eq!(row["abbreviation"], "ATL");
    }
}
