//! Booster-run NIL collective attached to a program.

use serde::{Deserialize, Serialize};

/// Regular-season weeks the sponsor match is spread across.
pub const WEEKS_PER_SEASON: u32 = 30;
/// Weekly alumni contribution per point of donor momentum.
pub const CONTRIBUTION_PER_MOMENTUM: f64 = 1_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectiveTier {
    Local,
    Regional,
    National,
    Elite,
}

impl CollectiveTier {
    /// Tier earned by a reputation score (0–100).
    pub fn from_reputation(reputation: f64) -> Self {
        if reputation >= 85.0 {
            CollectiveTier::Elite
        } else if reputation >= 65.0 {
            CollectiveTier::National
        } else if reputation >= 40.0 {
            CollectiveTier::Regional
        } else {
            CollectiveTier::Local
        }
    }

    /// Share of the base budget sponsors match over a season.
    pub fn match_rate(self) -> f64 {
        match self {
            CollectiveTier::Local => 0.05,
            CollectiveTier::Regional => 0.10,
            CollectiveTier::National => 0.15,
            CollectiveTier::Elite => 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NilCollectiveProfile {
    pub tier: CollectiveTier,
    pub reputation: f64,
    pub base_budget: f64,
    pub sponsor_match: f64,
    pub alumni_contribution: f64,
    /// Last week accrued; `None` before the first accrual.
    pub last_updated_week: Option<u32>,
}

impl NilCollectiveProfile {
    pub fn new(reputation: f64, base_budget: f64) -> Self {
        let reputation = reputation.clamp(0.0, 100.0);
        Self {
            tier: CollectiveTier::from_reputation(reputation),
            reputation,
            base_budget: base_budget.max(0.0),
            sponsor_match: 0.0,
            alumni_contribution: 0.0,
            last_updated_week: None,
        }
    }

    pub fn available_funds(&self) -> f64 {
        self.base_budget + self.sponsor_match + self.alumni_contribution
    }

    /// Copy with a new reputation and the tier it earns.
    pub fn with_reputation(&self, reputation: f64) -> Self {
        let reputation = reputation.clamp(0.0, 100.0);
        Self {
            tier: CollectiveTier::from_reputation(reputation),
            reputation,
            ..self.clone()
        }
    }

    /// Accrue one week of sponsor match and alumni giving.
    ///
    /// A week at or before `last_updated_week` is already counted and returns
    /// the profile unchanged.
    pub fn accrue_week(&self, week: u32, donor_momentum: f64) -> Self {
        if self.last_updated_week.is_some_and(|last| week <= last) {
            log::debug!("collective already accrued through week {week}");
            return self.clone();
        }
        let weekly_match = self.base_budget * self.tier.match_rate() / WEEKS_PER_SEASON as f64;
        let weekly_giving = donor_momentum.max(0.0) * CONTRIBUTION_PER_MOMENTUM;
        Self {
            sponsor_match: self.sponsor_match + weekly_match,
            alumni_contribution: self.alumni_contribution + weekly_giving,
            last_updated_week: Some(week),
            ..self.clone()
        }
    }
}
