//! Program-side inputs: players, sponsors, and the team snapshot the engines read.
//!
//! These records are owned by the outer game loop. The engines only read them,
//! except for the reducer-style helpers here that return updated copies.

use serde::{Deserialize, Serialize};

use crate::collective::NilCollectiveProfile;
use crate::random::{pick, uniform_int, RandomSource};
use crate::registry::AlumniRegistry;

/// Fan morale assumed when a team snapshot carries none.
pub const DEFAULT_FAN_MORALE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }
}

/// Where scouts project a player to land in the professional draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftProjection {
    Lottery,
    FirstRound,
    SecondRound,
    Undrafted,
}

/// Personality traits that bend a player's willingness to stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityTrait {
    /// Eyes on the draft from day one. Raises the ask, resists long deals.
    OneAndDoneDNA,
    Mercenary,
    SpotlightSeeker,
    GymRat,
    LoyalToCoach,
    Homebody,
    LegacyBuilder,
}

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 7] = [
        PersonalityTrait::OneAndDoneDNA,
        PersonalityTrait::Mercenary,
        PersonalityTrait::SpotlightSeeker,
        PersonalityTrait::GymRat,
        PersonalityTrait::LoyalToCoach,
        PersonalityTrait::Homebody,
        PersonalityTrait::LegacyBuilder,
    ];

    /// Multiplier applied to a player's minimum ask (>1.0 = harder to keep).
    pub fn stay_modifier(self) -> f64 {
        match self {
            PersonalityTrait::OneAndDoneDNA => 1.3,
            PersonalityTrait::Mercenary => 1.15,
            PersonalityTrait::SpotlightSeeker => 1.08,
            PersonalityTrait::GymRat => 1.0,
            PersonalityTrait::LoyalToCoach => 0.95,
            PersonalityTrait::Homebody => 0.88,
            PersonalityTrait::LegacyBuilder => 0.92,
        }
    }
}

/// Roll one or two distinct traits for a player whose record carries none.
pub fn roll_traits(rng: &mut impl RandomSource) -> Vec<PersonalityTrait> {
    let count = uniform_int(rng, 1, 2) as usize;
    let mut traits: Vec<PersonalityTrait> = Vec::with_capacity(count);
    while traits.len() < count {
        let Some(&first) = pick(rng, &PersonalityTrait::ALL) else {
            break;
        };
        // Walk forward from a repeated draw so a degenerate source still terminates.
        let start = PersonalityTrait::ALL
            .iter()
            .position(|&t| t == first)
            .unwrap_or(0);
        let next = (0..PersonalityTrait::ALL.len())
            .map(|i| PersonalityTrait::ALL[(start + i) % PersonalityTrait::ALL.len()])
            .find(|t| !traits.contains(t));
        match next {
            Some(t) => traits.push(t),
            None => break,
        }
    }
    traits
}

/// Season totals. Per-game rates divide by games played, never by zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub games_played: u32,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

impl StatLine {
    fn divisor(&self) -> f64 {
        self.games_played.max(1) as f64
    }

    pub fn ppg(&self) -> f64 {
        self.points / self.divisor()
    }

    pub fn rpg(&self) -> f64 {
        self.rebounds / self.divisor()
    }

    pub fn apg(&self) -> f64 {
        self.assists / self.divisor()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub age: u8,
    /// Current rating, 0–100.
    pub overall: u8,
    /// Ceiling rating, 0–100.
    pub potential: u8,
    pub stats: StatLine,
    #[serde(default)]
    pub traits: Vec<PersonalityTrait>,
    /// Online following, 0–100.
    pub social_media_heat: f64,
    /// Hometown-kid factor, 0–100.
    pub local_heroism_factor: f64,
    pub draft_projection: DraftProjection,
    /// Final-year player expected to leave after this season.
    #[serde(default)]
    pub graduating: bool,
}

impl Player {
    pub fn has_trait(&self, t: PersonalityTrait) -> bool {
        self.traits.contains(&t)
    }

    /// Copy of this player with traits rolled if none are recorded.
    pub fn with_rolled_traits(&self, rng: &mut impl RandomSource) -> Player {
        if !self.traits.is_empty() {
            return self.clone();
        }
        Player {
            traits: roll_traits(rng),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SponsorTier {
    Local,
    Regional,
    National,
    Elite,
}

impl SponsorTier {
    pub fn weight(self) -> f64 {
        match self {
            SponsorTier::Local => 0.8,
            SponsorTier::Regional => 1.2,
            SponsorTier::National => 1.8,
            SponsorTier::Elite => 2.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    pub tier: SponsorTier,
    /// Positions the sponsor prefers to feature.
    pub preferred_positions: Vec<Position>,
}

impl Sponsor {
    pub fn prefers(&self, position: Position) -> bool {
        self.preferred_positions.contains(&position)
    }
}

/// Booster wealth summary carried on the team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WealthSummary {
    /// Booster giving level, 0–100.
    pub donation_level: f64,
    pub donor_momentum: f64,
}

/// The snapshot of a program the economy engines work from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub conference: String,
    /// Program prestige, 0–100.
    pub prestige: f64,
    /// Fan sentiment/morale, 0–100. `None` reads as [`DEFAULT_FAN_MORALE`].
    #[serde(default)]
    pub fan_sentiment: Option<f64>,
    pub sponsor: Sponsor,
    pub roster: Vec<Player>,
    pub wins: u32,
    pub losses: u32,
    pub wealth: WealthSummary,
    #[serde(default)]
    pub nil_budget: f64,
    #[serde(default)]
    pub nil_budget_used: f64,
    #[serde(default)]
    pub collective: Option<NilCollectiveProfile>,
    #[serde(default)]
    pub alumni: AlumniRegistry,
}

impl Team {
    pub fn fan_morale(&self) -> f64 {
        self.fan_sentiment.unwrap_or(DEFAULT_FAN_MORALE)
    }

    pub fn win_pct(&self) -> f64 {
        let games = self.wins + self.losses;
        if games == 0 {
            0.0
        } else {
            self.wins as f64 / games as f64
        }
    }

    pub fn nil_budget_remaining(&self) -> f64 {
        (self.nil_budget - self.nil_budget_used).max(0.0)
    }

    /// Copy of this team with `amount` recorded against the NIL budget.
    pub fn commit_nil_spend(&self, amount: f64) -> Team {
        Team {
            nil_budget_used: self.nil_budget_used + amount.max(0.0),
            ..self.clone()
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn player(name: &str, overall: u8, potential: u8) -> Player {
        Player {
            id: 1,
            name: name.to_string(),
            position: Position::SmallForward,
            age: 20,
            overall,
            potential,
            stats: StatLine {
                games_played: 30,
                points: 450.0,
                rebounds: 180.0,
                assists: 90.0,
            },
            traits: vec![PersonalityTrait::GymRat],
            social_media_heat: 40.0,
            local_heroism_factor: 10.0,
            draft_projection: DraftProjection::Undrafted,
            graduating: false,
        }
    }

    pub fn team(name: &str) -> Team {
        Team {
            name: name.to_string(),
            conference: "Big Ten".to_string(),
            prestige: 70.0,
            fan_sentiment: Some(60.0),
            sponsor: Sponsor {
                name: "Swoosh".to_string(),
                tier: SponsorTier::National,
                preferred_positions: vec![Position::PointGuard],
            },
            roster: Vec::new(),
            wins: 20,
            losses: 10,
            wealth: WealthSummary {
                donation_level: 50.0,
                donor_momentum: 5.0,
            },
            nil_budget: 2_000_000.0,
            nil_budget_used: 0.0,
            collective: None,
            alumni: AlumniRegistry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_stat_line_zero_games_divides_by_one() {
        let stats = StatLine {
            games_played: 0,
            points: 12.0,
            rebounds: 4.0,
            assists: 2.0,
        };
        assert_eq!(stats.ppg(), 12.0);
        assert_eq!(stats.rpg(), 4.0);
        assert_eq!(stats.apg(), 2.0);
    }

    #[test]
    fn test_missing_fan_morale_defaults() {
        let mut team = fixtures::team("State");
        team.fan_sentiment = None;
        assert_eq!(team.fan_morale(), DEFAULT_FAN_MORALE);
    }

    #[test]
    fn test_roll_traits_distinct() {
        let mut rng = SeededRandom::new(3);
        for _ in 0..50 {
            let traits = roll_traits(&mut rng);
            assert!(!traits.is_empty() && traits.len() <= 2);
            if traits.len() == 2 {
                assert_ne!(traits[0], traits[1]);
            }
        }
    }

    #[test]
    fn test_existing_traits_are_kept() {
        let p = fixtures::player("Keeper", 70, 80);
        let mut rng = ScriptedRandom::new(vec![0.9]);
        assert_eq!(p.with_rolled_traits(&mut rng).traits, p.traits);
    }

    #[test]
    fn test_empty_traits_are_rolled() {
        let mut p = fixtures::player("Blank", 70, 80);
        p.traits.clear();
        let mut rng = SeededRandom::new(11);
        assert!(!p.with_rolled_traits(&mut rng).traits.is_empty());
    }

    #[test]
    fn test_commit_spend_never_overdraws_remaining() {
        let team = fixtures::team("State");
        let spent = team.commit_nil_spend(2_500_000.0);
        assert_eq!(spent.nil_budget_remaining(), 0.0);
        assert_eq!(team.nil_budget_used, 0.0);
    }

    #[test]
    fn test_win_pct_no_games() {
        let mut team = fixtures::team("State");
        team.wins = 0;
        team.losses = 0;
        assert_eq!(team.win_pct(), 0.0);
    }
}
