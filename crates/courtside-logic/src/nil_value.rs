//! Athlete NIL valuation.
//!
//! Deterministic: the same player, team, and context always price the same.
//! Randomness only reaches this module through its inputs.

use serde::{Deserialize, Serialize};

use crate::roster::{Player, SponsorTier, Team};
use crate::tables::{ProComparable, SalaryTable};

pub const NIL_FLOOR: f64 = 25_000.0;
/// Share of the top professional salary an NIL deal may reach.
pub const NIL_CEILING_SHARE: f64 = 0.08;

const PREFERRED_POSITION_FIT: f64 = 40_000.0;
const OTHER_POSITION_FIT: f64 = 10_000.0;
/// Salary level at which the league scaling factor is 1.0.
const SALARY_SCALE_BASE: f64 = 10_000_000.0;
/// Smallest roster the budget is spread across.
const MIN_BUDGET_ROSTER: usize = 12;
const BUDGET_UNIT: f64 = 100_000.0;

/// Professional league salary levels that anchor NIL prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueContext {
    pub league_average_salary: f64,
    pub max_league_salary: f64,
}

impl LeagueContext {
    pub fn from_salary_table(table: &SalaryTable) -> Self {
        Self {
            league_average_salary: table.league_average(),
            max_league_salary: table.max_salary(),
        }
    }
}

/// Per-call valuation inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NilValuationOptions {
    pub fan_sentiment: f64,
    pub sponsor_tier: SponsorTier,
    pub unfinished_business_bonus: f64,
    #[serde(default)]
    pub comparable: Option<ProComparable>,
}

impl NilValuationOptions {
    /// Options read straight off the team snapshot.
    pub fn for_team(team: &Team) -> Self {
        Self {
            fan_sentiment: team.fan_morale(),
            sponsor_tier: team.sponsor.tier,
            unfinished_business_bonus: 0.0,
            comparable: None,
        }
    }
}

/// Every intermediate term, kept for negotiation rationale and UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NilValuation {
    pub performance: f64,
    pub marketability: f64,
    pub hero_bonus: f64,
    pub sponsor_bonus: f64,
    pub budget_multiplier: f64,
    pub value: f64,
}

/// Full valuation with every term; `value` is clamped and rounded.
pub fn value_breakdown(
    player: &Player,
    team: &Team,
    options: &NilValuationOptions,
    league: &LeagueContext,
) -> NilValuation {
    let stats = &player.stats;
    let performance = player.overall as f64 * 1200.0
        + player.potential as f64 * 600.0
        + stats.ppg() * 250.0
        + stats.rpg() * 110.0
        + stats.apg() * 150.0;

    let marketability = team.prestige * 350.0
        + team.wins as f64 * 120.0
        + options.fan_sentiment * 60.0
        + player.social_media_heat * 80.0;

    let hero_bonus = player.local_heroism_factor * 120.0;

    let positional_fit = if team.sponsor.prefers(player.position) {
        PREFERRED_POSITION_FIT
    } else {
        OTHER_POSITION_FIT
    };
    let sponsor_bonus = options.sponsor_tier.weight() * (performance * 0.08 + positional_fit);

    let mut raw = (performance
        + marketability
        + hero_bonus
        + sponsor_bonus
        + options.unfinished_business_bonus * 120.0)
        * (league.league_average_salary / SALARY_SCALE_BASE);

    if let Some(comp) = &options.comparable {
        let hype_weight = if player.potential > 85 { 0.4 } else { 0.2 };
        let anchored = comp.salary * 0.015 * comp.similarity_score;
        raw = raw * (1.0 - hype_weight) + anchored * hype_weight;
    }

    let per_player_budget = team.nil_budget / team.roster.len().max(MIN_BUDGET_ROSTER) as f64;
    let budget_multiplier = (per_player_budget / BUDGET_UNIT).clamp(0.5, 8.0);
    raw *= 0.5 + budget_multiplier * 0.5;

    let ceiling = (NIL_CEILING_SHARE * league.max_league_salary).max(NIL_FLOOR);
    let value = raw.clamp(NIL_FLOOR, ceiling).round();

    NilValuation {
        performance,
        marketability,
        hero_bonus,
        sponsor_bonus,
        budget_multiplier,
        value,
    }
}

/// Market NIL value for one athlete.
pub fn calculate_player_nil_value(
    player: &Player,
    team: &Team,
    options: &NilValuationOptions,
    league: &LeagueContext,
) -> f64 {
    value_breakdown(player, team, options, league).value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{fixtures, Position};

    fn league() -> LeagueContext {
        LeagueContext {
            league_average_salary: 10_000_000.0,
            max_league_salary: 50_000_000.0,
        }
    }

    fn options() -> NilValuationOptions {
        NilValuationOptions {
            fan_sentiment: 60.0,
            sponsor_tier: SponsorTier::National,
            unfinished_business_bonus: 0.0,
            comparable: None,
        }
    }

    #[test]
    fn test_formula_by_hand() {
        let player = fixtures::player("Wing", 80, 85);
        let mut team = fixtures::team("State");
        // per-player budget 100k → multiplier 1.0 → scale 1.0
        team.nil_budget = 1_200_000.0;
        let v = value_breakdown(&player, &team, &options(), &league());

        // 15/6/3 per game
        let performance: f64 =
            80.0 * 1200.0 + 85.0 * 600.0 + 15.0 * 250.0 + 6.0 * 110.0 + 3.0 * 150.0;
        let marketability: f64 = 70.0 * 350.0 + 20.0 * 120.0 + 60.0 * 60.0 + 40.0 * 80.0;
        let hero: f64 = 10.0 * 120.0;
        let sponsor = 1.8 * (performance * 0.08 + 10_000.0);
        let expected = (performance + marketability + hero + sponsor).round();

        assert!((v.performance - performance).abs() < 1e-6);
        assert!((v.marketability - marketability).abs() < 1e-6);
        assert_eq!(v.budget_multiplier, 1.0);
        assert!((v.value - expected).abs() <= 1.0);
    }

    #[test]
    fn test_preferred_position_raises_value() {
        let mut player = fixtures::player("Guard", 80, 85);
        let team = fixtures::team("State");
        let other = calculate_player_nil_value(&player, &team, &options(), &league());
        player.position = Position::PointGuard;
        let preferred = calculate_player_nil_value(&player, &team, &options(), &league());
        assert!(preferred > other);
    }

    #[test]
    fn test_floor_and_ceiling() {
        let mut weak = fixtures::player("Walk-on", 0, 0);
        weak.stats = Default::default();
        weak.social_media_heat = 0.0;
        weak.local_heroism_factor = 0.0;
        let mut team = fixtures::team("Tiny");
        team.prestige = 0.0;
        team.wins = 0;
        team.nil_budget = 0.0;
        let low_league = LeagueContext {
            league_average_salary: 100_000.0,
            max_league_salary: 50_000_000.0,
        };
        let mut opts = options();
        opts.fan_sentiment = 0.0;
        assert_eq!(calculate_player_nil_value(&weak, &team, &opts, &low_league), NIL_FLOOR);

        let star = fixtures::player("Star", 99, 99);
        let mut rich = fixtures::team("Rich");
        rich.nil_budget = 100_000_000.0;
        let hot_league = LeagueContext {
            league_average_salary: 50_000_000.0,
            max_league_salary: 50_000_000.0,
        };
        let value = calculate_player_nil_value(&star, &rich, &options(), &hot_league);
        assert_eq!(value, 4_000_000.0);
    }

    #[test]
    fn test_comparable_blend_uses_hype_weight() {
        let high = fixtures::player("Hype", 80, 90);
        let mut team = fixtures::team("State");
        team.nil_budget = 1_200_000.0;
        let base = calculate_player_nil_value(&high, &team, &options(), &league());

        let mut with_comp = options();
        with_comp.comparable = Some(ProComparable {
            name: "Big Pro".into(),
            salary: 40_000_000.0,
            similarity_score: 1.0,
        });
        let blended = calculate_player_nil_value(&high, &team, &with_comp, &league());
        // raw×0.6 + 600k×0.4
        let expected = (base * 0.6 + 600_000.0 * 0.4).round();
        assert!((blended - expected).abs() <= 1.0);
    }

    #[test]
    fn test_budget_multiplier_bounds() {
        let player = fixtures::player("Wing", 80, 85);
        let mut team = fixtures::team("State");
        team.nil_budget = 0.0;
        assert_eq!(value_breakdown(&player, &team, &options(), &league()).budget_multiplier, 0.5);
        team.nil_budget = 1e10;
        assert_eq!(value_breakdown(&player, &team, &options(), &league()).budget_multiplier, 8.0);
    }

    #[test]
    fn test_deterministic() {
        let player = fixtures::player("Wing", 77, 88);
        let team = fixtures::team("State");
        let a = calculate_player_nil_value(&player, &team, &options(), &league());
        let b = calculate_player_nil_value(&player, &team, &options(), &league());
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ceiling_below_floor() {
        let player = fixtures::player("Wing", 80, 85);
        let team = fixtures::team("State");
        let tiny = LeagueContext {
            league_average_salary: 10_000_000.0,
            max_league_salary: 1_000.0,
        };
        assert_eq!(calculate_player_nil_value(&player, &team, &options(), &tiny), NIL_FLOOR);
    }
}
