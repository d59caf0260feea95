//! Program-level NIL budget.
//!
//! Additive layers (alumni wealth, traditional program factors, year-over-year
//! momentum), then the school-identity multiplier and market variance, then
//! the conference soft cap and the hard floor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alumni::Profession;
use crate::random::{uniform, RandomSource};
use crate::roster::{SponsorTier, Team};
use crate::tables::ReferenceTables;

/// No program's budget drops below this.
pub const BUDGET_FLOOR: f64 = 150_000.0;
/// Share of the overage above a conference cap that is actually realized.
pub const SOFT_CAP_PASS_THROUGH: f64 = 0.5;
/// Half-width of the market variance band.
pub const MARKET_VARIANCE: f64 = 0.1;

/// Per-unit coefficients of the additive layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetWeights {
    /// Booster value of one alumnus in each profession.
    pub profession_weights: BTreeMap<Profession, f64>,
    pub titan_bonus: f64,
    pub per_prestige_point: f64,
    pub per_sponsor_weight: f64,
    pub per_fan_point: f64,
    pub per_tournament_point: f64,
    pub per_donation_point: f64,
}

impl Default for BudgetWeights {
    fn default() -> Self {
        let profession_weights = [
            (Profession::Finance, 40_000.0),
            (Profession::Tech, 35_000.0),
            (Profession::Medicine, 30_000.0),
            (Profession::Law, 30_000.0),
            (Profession::Education, 5_000.0),
            (Profession::Arts, 8_000.0),
            (Profession::PublicService, 10_000.0),
            (Profession::Entrepreneur, 50_000.0),
            (Profession::ProAthlete, 60_000.0),
            (Profession::Business, 25_000.0),
            (Profession::Media, 12_000.0),
            (Profession::Engineering, 20_000.0),
            (Profession::Sales, 15_000.0),
            (Profession::Coaching, 8_000.0),
            (Profession::Trades, 6_000.0),
        ]
        .into_iter()
        .collect();

        Self {
            profession_weights,
            titan_bonus: 500_000.0,
            per_prestige_point: 15_000.0,
            per_sponsor_weight: 200_000.0,
            per_fan_point: 5_000.0,
            per_tournament_point: 75_000.0,
            per_donation_point: 3_000.0,
        }
    }
}

/// Last season's results, when the program has a history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousSeason {
    pub win_pct: f64,
    pub recruiting_class_rank: Option<u32>,
    /// Last year's NIL budget, if one was set.
    pub nil_budget: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub school: String,
    pub conference: String,
    pub prestige: f64,
    pub sponsor_tier: SponsorTier,
    pub fan_sentiment: f64,
    pub tournament_bonus: f64,
    pub donation_level: f64,
    pub profession_counts: Vec<(Profession, u32)>,
    pub titan_count: u32,
    pub previous: Option<PreviousSeason>,
}

impl BudgetInputs {
    pub fn from_team(team: &Team, tournament_bonus: f64, previous: Option<PreviousSeason>) -> Self {
        Self {
            school: team.name.clone(),
            conference: team.conference.clone(),
            prestige: team.prestige,
            sponsor_tier: team.sponsor.tier,
            fan_sentiment: team.fan_morale(),
            tournament_bonus,
            donation_level: team.wealth.donation_level,
            profession_counts: team.alumni.summary().profession_counts.clone(),
            titan_count: team.alumni.titan_count(),
            previous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetOptions {
    pub market_variance: bool,
}

impl Default for BudgetOptions {
    fn default() -> Self {
        Self {
            market_variance: true,
        }
    }
}

/// Every layer of the computation, for the finance screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub alumni_base: f64,
    pub identity_multiplier: f64,
    pub traditional: f64,
    pub year_over_year: f64,
    pub variance_factor: f64,
    pub pre_cap: f64,
    pub conference_cap: Option<f64>,
    pub final_budget: f64,
}

pub fn alumni_wealth_base(inputs: &BudgetInputs, weights: &BudgetWeights) -> f64 {
    let professions: f64 = inputs
        .profession_counts
        .iter()
        .map(|(profession, count)| {
            *count as f64 * weights.profession_weights.get(profession).copied().unwrap_or(0.0)
        })
        .sum();
    professions + inputs.titan_count as f64 * weights.titan_bonus
}

pub fn traditional_factors(inputs: &BudgetInputs, weights: &BudgetWeights) -> f64 {
    inputs.prestige * weights.per_prestige_point
        + inputs.sponsor_tier.weight() * weights.per_sponsor_weight
        + inputs.fan_sentiment * weights.per_fan_point
        + inputs.tournament_bonus * weights.per_tournament_point
        + inputs.donation_level * weights.per_donation_point
}

pub fn year_over_year(inputs: &BudgetInputs) -> f64 {
    let Some(previous) = &inputs.previous else {
        return 0.0;
    };

    let mut adjustment = if previous.win_pct > 0.7 {
        150_000.0
    } else if previous.win_pct > 0.5 {
        50_000.0
    } else if previous.win_pct < 0.3 {
        -100_000.0
    } else {
        0.0
    };

    adjustment += match previous.recruiting_class_rank {
        Some(rank) if rank <= 5 => 200_000.0,
        Some(rank) if rank <= 15 => 100_000.0,
        Some(rank) if rank <= 30 => 50_000.0,
        _ => 0.0,
    };

    if previous.nil_budget.is_some() {
        adjustment += inputs.tournament_bonus * 40_000.0 * 0.5;
    }
    adjustment
}

/// Apply the conference soft cap: overage is only half realized.
pub fn apply_soft_cap(raw: f64, cap: Option<f64>) -> f64 {
    match cap {
        Some(cap) if raw > cap => cap + (raw - cap) * SOFT_CAP_PASS_THROUGH,
        _ => raw,
    }
}

pub fn budget_breakdown(
    inputs: &BudgetInputs,
    weights: &BudgetWeights,
    options: BudgetOptions,
    tables: &ReferenceTables,
    rng: &mut impl RandomSource,
) -> BudgetBreakdown {
    let alumni_base = alumni_wealth_base(inputs, weights);
    let identity_multiplier = tables.identity_multiplier(&inputs.school);
    let traditional = traditional_factors(inputs, weights);
    let yoy = year_over_year(inputs);

    let variance_factor = if options.market_variance {
        1.0 + uniform(rng, -MARKET_VARIANCE, MARKET_VARIANCE)
    } else {
        1.0
    };

    let pre_cap = (alumni_base + traditional + yoy) * identity_multiplier * variance_factor;

    let conference_cap = tables.conference_cap(&inputs.conference);
    if conference_cap.is_none() {
        log::warn!("no NIL cap for conference {}; budget uncapped", inputs.conference);
    }
    let capped = apply_soft_cap(pre_cap, conference_cap);
    if capped < pre_cap {
        log::debug!(
            "{} budget {:.0} over soft cap, realized {:.0}",
            inputs.school,
            pre_cap,
            capped
        );
    }

    BudgetBreakdown {
        alumni_base,
        identity_multiplier,
        traditional,
        year_over_year: yoy,
        variance_factor,
        pre_cap,
        conference_cap,
        final_budget: capped.max(BUDGET_FLOOR).round(),
    }
}

/// Program NIL spending ceiling for the coming season.
pub fn calculate_team_nil_budget(
    inputs: &BudgetInputs,
    weights: &BudgetWeights,
    options: BudgetOptions,
    tables: &ReferenceTables,
    rng: &mut impl RandomSource,
) -> f64 {
    budget_breakdown(inputs, weights, options, tables, rng).final_budget
}
