use serde::{Serialize, Deserialize};

/// One of the two sides of a game. Every pick is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamChoice {
    A,
    B,
}

impl TeamChoice {
    /// Normalizes raw client input: trim, ignore case, reject everything
    /// that is not exactly one of the two sides.
    pub fn normalize(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("a") {
            Some(TeamChoice::A)
        } else if trimmed.eq_ignore_ascii_case("b") {
            Some(TeamChoice::B)
        } else {
            None
        }
    }

    /// Exact-match decode of the canonical wire value. Unlike [`normalize`]
    /// this accepts no variants; anything but "A" or "B" is unknown.
    ///
    /// [`normalize`]: TeamChoice::normalize
    pub fn from_canonical(value: &str) -> Option<Self> {
        match value {
            "A" => Some(TeamChoice::A),
            "B" => Some(TeamChoice::B),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TeamChoice::A => "A",
            TeamChoice::B => "B",
        }
    }
}

/// Read-time projection of all votes for a game plus the requesting viewer's
/// own pick. Never persisted; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    pub count_a: i64,
    pub count_b: i64,
    pub total: i64,
    pub pct_a: i32,
    pub pct_b: i32,
    pub viewer_choice: Option<TeamChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    #[serde(default)]
    pub choice: Option<String>,
}

/// Game metadata as delivered by the upstream metadata service. Two wire
/// shapes exist historically (camelCase and snake_case); the aliases fold
/// both into this one record so nothing downstream cares which one arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "home_team")]
    pub home_team: Option<String>,
    #[serde(alias = "away_team")]
    pub away_team: Option<String>,
}

/// Display names for the two sides of a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLabels {
    pub team_a: String,
    pub team_b: String,
}

impl Default for TeamLabels {
    fn default() -> Self {
        Self {
            team_a: "Team A".into(),
            team_b: "Team B".into(),
        }
    }
}

impl TeamLabels {
    pub fn for_choice(&self, choice: TeamChoice) -> &str {
        match choice {
            TeamChoice::A => &self.team_a,
            TeamChoice::B => &self.team_b,
        }
    }
}

impl GameInfo {
    /// Resolves display labels for the two sides: explicit team fields win,
    /// then a "Home vs Away" title split, then the generic fallback.
    pub fn team_labels(&self) -> TeamLabels {
        let home = non_empty(self.home_team.as_deref());
        let away = non_empty(self.away_team.as_deref());
        if let (Some(home), Some(away)) = (home, away) {
            return TeamLabels {
                team_a: home.to_string(),
                team_b: away.to_string(),
            };
        }

        if let Some(title) = non_empty(self.title.as_deref()) {
            if let Some((left, right)) = split_matchup(title) {
                return TeamLabels {
                    team_a: left,
                    team_b: right,
                };
            }
        }

        TeamLabels::default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Splits a "Home vs Away" style title. Case-insensitive on the separator,
/// ASCII only so byte offsets into the original title stay valid.
fn split_matchup(title: &str) -> Option<(String, String)> {
    let lowered = title.to_ascii_lowercase();
    for separator in [" vs. ", " vs "] {
        if let Some(idx) = lowered.find(separator) {
            let left = title[..idx].trim();
            let right = title[idx + separator.len()..].trim();
            if !left.is_empty() && !right.is_empty() {
                return Some((left.to_string(), right.to_string()));
            }
        }
    }
    None
}
