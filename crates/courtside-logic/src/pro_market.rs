//! Professional league layer: free-agent market value and team cap math.
//!
//! Everything here is computed on demand from the current contracts and
//! market inputs. Nothing is persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roster::{Player, Position};

/// Hard ceiling on any single market valuation.
pub const MARKET_VALUE_CEILING: f64 = 65_000_000.0;

/// Overall-rating bands and their base salaries, highest first.
const SALARY_BANDS: [(u8, f64); 6] = [
    (95, 55_000_000.0),
    (90, 45_000_000.0),
    (85, 35_000_000.0),
    (80, 25_000_000.0),
    (75, 15_000_000.0),
    (68, 6_000_000.0),
];

const YOUTH_AGE: u8 = 24;
const YOUTH_PREMIUM_PER_POINT: f64 = 0.02;
const DECLINE_AGE: u8 = 32;
const DECLINE_PER_YEAR: f64 = 0.08;
const DECLINE_FLOOR: f64 = 0.4;
const SUPPLY_DISCOUNT_PER_AGENT: f64 = 0.02;
const SUPPLY_DISCOUNT_FLOOR: f64 = 0.8;
const PHASE_DISCOUNT: f64 = 0.85;

/// League salary rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapRules {
    pub salary_cap: f64,
    pub luxury_tax: f64,
    /// Distance above the tax line where the first apron sits.
    pub apron_buffer: f64,
    pub league_minimum: f64,
    pub roster_minimum: usize,
    /// Salary floor as a share of the cap.
    pub floor_ratio: f64,
}

impl Default for CapRules {
    fn default() -> Self {
        Self {
            salary_cap: 140_588_000.0,
            luxury_tax: 170_814_000.0,
            apron_buffer: 7_300_000.0,
            league_minimum: 1_157_153.0,
            roster_minimum: 12,
            floor_ratio: 0.9,
        }
    }
}

impl CapRules {
    pub fn salary_floor(&self) -> f64 {
        self.salary_cap * self.floor_ratio
    }

    pub fn first_apron(&self) -> f64 {
        self.luxury_tax + self.apron_buffer
    }
}

/// Market conditions at the moment of a valuation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketContext {
    pub league_average_salary: f64,
    pub team_cap_space: BTreeMap<String, f64>,
    /// Missing positions read as 1.0.
    pub position_scarcity: BTreeMap<Position, f64>,
    pub free_agent_supply: u32,
    /// 0 is the open market; later phases discount.
    pub phase: u32,
}

impl MarketContext {
    pub fn scarcity(&self, position: Position) -> f64 {
        self.position_scarcity.get(&position).copied().unwrap_or(1.0)
    }
}

/// Salary tier for an overall rating; below the lowest band pays the league minimum.
pub fn base_salary(overall: u8, league_minimum: f64) -> f64 {
    SALARY_BANDS
        .iter()
        .find(|(min_overall, _)| overall >= *min_overall)
        .map(|&(_, salary)| salary)
        .unwrap_or(league_minimum)
}

/// Upside premium under 24 scaled by the potential gap, decline past 32.
pub fn age_multiplier(age: u8, overall: u8, potential: u8) -> f64 {
    if age < YOUTH_AGE {
        1.0 + YOUTH_PREMIUM_PER_POINT * potential.saturating_sub(overall) as f64
    } else if age > DECLINE_AGE {
        (1.0 - DECLINE_PER_YEAR * (age - DECLINE_AGE) as f64).max(DECLINE_FLOOR)
    } else {
        1.0
    }
}

/// Each available free agent shaves 2%, floored at 0.8.
pub fn supply_discount(free_agent_supply: u32) -> f64 {
    (1.0 - SUPPLY_DISCOUNT_PER_AGENT * free_agent_supply as f64).max(SUPPLY_DISCOUNT_FLOOR)
}

/// 0.85 per phase after the first.
pub fn phase_discount(phase: u32) -> f64 {
    if phase > 1 {
        PHASE_DISCOUNT.powi((phase - 1) as i32)
    } else {
        1.0
    }
}

/// What a free agent commands on the open market.
pub fn calculate_market_value(player: &Player, market: &MarketContext, rules: &CapRules) -> f64 {
    let value = base_salary(player.overall, rules.league_minimum)
        * age_multiplier(player.age, player.overall, player.potential)
        * market.scarcity(player.position)
        * supply_discount(market.free_agent_supply)
        * phase_discount(market.phase);
    let ceiling = MARKET_VALUE_CEILING.max(rules.league_minimum);
    value.clamp(rules.league_minimum, ceiling).round()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    Standard,
    /// Off the cap sheet entirely.
    TwoWay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterContract {
    pub player_id: u32,
    pub salary: f64,
    pub kind: ContractKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEligibility {
    pub mid_level: bool,
    pub bi_annual: bool,
    pub minimum: bool,
}

/// A team's position against the cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapState {
    pub guaranteed_salary: f64,
    /// Minimum salaries charged for empty roster spots.
    pub roster_charge: f64,
    pub total_salary: f64,
    /// Negative when over the cap.
    pub cap_space: f64,
    pub over_cap: bool,
    pub over_tax: bool,
    pub under_floor: bool,
    pub exceptions: ExceptionEligibility,
}

/// Payroll against the cap, tax line and floor. Two-way deals are not counted,
/// and a short roster is charged the league minimum per open spot.
pub fn calculate_cap_state(contracts: &[RosterContract], rules: &CapRules) -> CapState {
    let standard: Vec<&RosterContract> = contracts
        .iter()
        .filter(|c| c.kind == ContractKind::Standard)
        .collect();
    let guaranteed_salary: f64 = standard.iter().map(|c| c.salary).sum();
    let open_spots = rules.roster_minimum.saturating_sub(standard.len());
    let roster_charge = open_spots as f64 * rules.league_minimum;
    let total_salary = guaranteed_salary + roster_charge;

    let exceptions = ExceptionEligibility {
        mid_level: total_salary < rules.first_apron(),
        bi_annual: total_salary < rules.luxury_tax,
        minimum: true,
    };

    CapState {
        guaranteed_salary,
        roster_charge,
        total_salary,
        cap_space: rules.salary_cap - total_salary,
        over_cap: total_salary > rules.salary_cap,
        over_tax: total_salary > rules.luxury_tax,
        under_floor: total_salary < rules.salary_floor(),
        exceptions,
    }
}
