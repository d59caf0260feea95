//! Alumni registry: a materialized view over a program's alumni.
//!
//! Summary stats and the influence vector are never edited directly. They are
//! produced by folding [`AlumniProfile`]s one at a time ([`AlumniRegistry::with_alumnus`])
//! and can be rebuilt from scratch at any point
//! ([`AlumniRegistry::recalculate_alumni_influence`]); both paths yield
//! identical values. Equity pools and the dilemma slot are the only state the
//! registry owns outright.

use serde::{Deserialize, Serialize};

use crate::alumni::{AlumniProfile, Archetype, DonationTier, ProStatus, Profession};

/// Ceiling for every per-archetype influence field.
pub const INFLUENCE_CAP: f64 = 100.0;
/// Per-alumnus bump to the archetype's influence field.
const ARCHETYPE_STEP: f64 = 1.0;
/// Titans push endowment and facilities harder than anyone.
const TITAN_STEP: f64 = 5.0;
/// Flat bonus for any professional-caliber alumnus.
const PRO_CALIBER_BONUS: f64 = 2.0;

const ACADEMIC_BONUS_CAP: u32 = 20;
const JOB_SECURITY_CAP: u32 = 15;

/// Pool growth per point of donation momentum, per season.
pub const POOL_ACCRUAL_PER_MOMENTUM: f64 = 2_500.0;

/// Bonuses alumni exert on the rest of the program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfluenceVector {
    pub scouting_efficiency: f64,
    pub endowment_yield: f64,
    pub facility_speed: f64,
    pub media_protection: f64,
    pub medical_efficiency: f64,
    pub fan_appeal: f64,
    pub academic_prestige_bonus: u32,
    pub job_security_bonus: u32,
}

impl InfluenceVector {
    fn bump(field: &mut f64, amount: f64) {
        *field = (*field + amount).min(INFLUENCE_CAP);
    }

    fn apply_archetype(&mut self, archetype: Archetype) {
        match archetype {
            Archetype::Tech => Self::bump(&mut self.scouting_efficiency, ARCHETYPE_STEP),
            Archetype::Finance => Self::bump(&mut self.endowment_yield, ARCHETYPE_STEP),
            Archetype::Political => Self::bump(&mut self.facility_speed, ARCHETYPE_STEP),
            Archetype::Local => Self::bump(&mut self.media_protection, ARCHETYPE_STEP),
            Archetype::Health => Self::bump(&mut self.medical_efficiency, ARCHETYPE_STEP),
            Archetype::Arts => Self::bump(&mut self.fan_appeal, ARCHETYPE_STEP),
            Archetype::Titan => {
                Self::bump(&mut self.endowment_yield, TITAN_STEP);
                Self::bump(&mut self.facility_speed, TITAN_STEP);
            }
        }
    }
}

/// Aggregates over the alumni list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Counts in first-seen order.
    pub profession_counts: Vec<(Profession, u32)>,
    pub donation_momentum: f64,
    pub notable_alumni: Vec<String>,
}

impl SummaryStats {
    pub fn profession_count(&self, profession: Profession) -> u32 {
        self.profession_counts
            .iter()
            .find(|(p, _)| *p == profession)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    fn increment_profession(&mut self, profession: Profession) {
        match self
            .profession_counts
            .iter_mut()
            .find(|(p, _)| *p == profession)
        {
            Some((_, n)) => *n += 1,
            None => self.profession_counts.push((profession, 1)),
        }
    }
}

fn momentum_for(tier: DonationTier) -> f64 {
    match tier {
        DonationTier::High => 5.0,
        DonationTier::Medium => 2.0,
        DonationTier::Low => 0.5,
        DonationTier::None => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    Active,
    Completed,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutType {
    Cash,
    Facility,
    Interest,
}

/// A named alumni fundraising pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPool {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub target: f64,
    pub status: PoolStatus,
    pub payout: PayoutType,
}

impl EquityPool {
    pub fn new(id: &str, name: &str, target: f64, payout: PayoutType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            balance: 0.0,
            target,
            status: PoolStatus::Active,
            payout,
        }
    }

    fn accrue(&self, momentum: f64) -> EquityPool {
        if self.status != PoolStatus::Active {
            return self.clone();
        }
        let balance = self.balance + momentum.max(0.0) * POOL_ACCRUAL_PER_MOMENTUM;
        if balance >= self.target {
            log::info!("equity pool {} reached its target of {:.0}", self.id, self.target);
            EquityPool {
                balance: self.target,
                status: PoolStatus::Completed,
                ..self.clone()
            }
        } else {
            EquityPool {
                balance,
                ..self.clone()
            }
        }
    }
}

/// A pending decision an influential alumnus has put in front of the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlumniDilemma {
    pub id: u32,
    pub alumni_id: u32,
    pub archetype: Archetype,
    pub title: String,
    pub description: String,
}

/// Stored shape of the registry. Derived fields are rebuilt on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RegistryRecord {
    all_alumni: Vec<AlumniProfile>,
    #[serde(default)]
    equity_pools: Vec<EquityPool>,
    #[serde(default)]
    active_dilemma: Option<AlumniDilemma>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RegistryRecord", into = "RegistryRecord")]
pub struct AlumniRegistry {
    all_alumni: Vec<AlumniProfile>,
    summary: SummaryStats,
    influence: InfluenceVector,
    equity_pools: Vec<EquityPool>,
    active_dilemma: Option<AlumniDilemma>,
}

impl From<RegistryRecord> for AlumniRegistry {
    fn from(record: RegistryRecord) -> Self {
        AlumniRegistry {
            equity_pools: record.equity_pools,
            active_dilemma: record.active_dilemma,
            ..AlumniRegistry::default()
        }
        .with_alumni_replaced(record.all_alumni)
    }
}

impl From<AlumniRegistry> for RegistryRecord {
    fn from(registry: AlumniRegistry) -> Self {
        RegistryRecord {
            all_alumni: registry.all_alumni,
            equity_pools: registry.equity_pools,
            active_dilemma: registry.active_dilemma,
        }
    }
}

impl AlumniRegistry {
    /// Fold a list of alumni into a fresh registry, in order.
    pub fn from_alumni<I: IntoIterator<Item = AlumniProfile>>(alumni: I) -> Self {
        alumni
            .into_iter()
            .fold(AlumniRegistry::default(), |registry, profile| {
                registry.with_alumnus(profile)
            })
    }

    pub fn all_alumni(&self) -> &[AlumniProfile] {
        &self.all_alumni
    }

    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    pub fn influence(&self) -> &InfluenceVector {
        &self.influence
    }

    pub fn equity_pools(&self) -> &[EquityPool] {
        &self.equity_pools
    }

    pub fn active_dilemma(&self) -> Option<&AlumniDilemma> {
        self.active_dilemma.as_ref()
    }

    pub fn titan_count(&self) -> u32 {
        self.all_alumni.iter().filter(|a| a.is_titan()).count() as u32
    }

    /// One fold step: the registry with `profile` appended.
    pub fn with_alumnus(&self, profile: AlumniProfile) -> AlumniRegistry {
        let mut next = self.clone();
        next.absorb(&profile);
        next.all_alumni.push(profile);
        next
    }

    /// Rebuild summary and influence by folding `all_alumni` from empty.
    pub fn recalculate_alumni_influence(&self) -> AlumniRegistry {
        self.with_alumni_replaced(self.all_alumni.clone())
    }

    /// Swap in a new alumni list and re-derive everything from it.
    pub fn with_alumni_replaced(&self, alumni: Vec<AlumniProfile>) -> AlumniRegistry {
        let folded = AlumniRegistry::from_alumni(alumni);
        AlumniRegistry {
            equity_pools: self.equity_pools.clone(),
            active_dilemma: self.active_dilemma.clone(),
            ..folded
        }
    }

    fn absorb(&mut self, profile: &AlumniProfile) {
        self.summary.increment_profession(profile.profession);
        self.summary.donation_momentum += momentum_for(profile.donation_tier);
        if profile.archetype == Archetype::Local && profile.pro_status == ProStatus::Drafted {
            self.summary.notable_alumni.push(profile.name.clone());
        }

        self.influence.apply_archetype(profile.archetype);
        if profile.pro_status.is_pro() {
            InfluenceVector::bump(&mut self.influence.endowment_yield, PRO_CALIBER_BONUS);
            InfluenceVector::bump(&mut self.influence.media_protection, PRO_CALIBER_BONUS);
        }

        let white_collar = self.summary.profession_count(Profession::Finance)
            + self.summary.profession_count(Profession::Tech);
        self.influence.academic_prestige_bonus = (white_collar / 5).min(ACADEMIC_BONUS_CAP);
        self.influence.job_security_bonus =
            (self.summary.notable_alumni.len() as u32).min(JOB_SECURITY_CAP);
    }

    pub fn with_equity_pool(&self, pool: EquityPool) -> AlumniRegistry {
        let mut next = self.clone();
        next.equity_pools.push(pool);
        next
    }

    /// Grow every active pool by one season of donation momentum.
    pub fn accrue_equity_pools(&self) -> AlumniRegistry {
        let momentum = self.summary.donation_momentum;
        AlumniRegistry {
            equity_pools: self
                .equity_pools
                .iter()
                .map(|pool| pool.accrue(momentum))
                .collect(),
            ..self.clone()
        }
    }

    /// Raise a dilemma. Returns `None` when one is already pending.
    pub fn raise_dilemma(&self, dilemma: AlumniDilemma) -> Option<AlumniRegistry> {
        if self.active_dilemma.is_some() {
            return None;
        }
        Some(AlumniRegistry {
            active_dilemma: Some(dilemma),
            ..self.clone()
        })
    }

    /// Clear the pending dilemma, returning it alongside the new registry.
    pub fn resolve_dilemma(&self) -> (AlumniRegistry, Option<AlumniDilemma>) {
        let resolved = self.active_dilemma.clone();
        (
            AlumniRegistry {
                active_dilemma: None,
                ..self.clone()
            },
            resolved,
        )
    }
}
