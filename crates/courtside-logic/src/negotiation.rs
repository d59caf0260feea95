//! Offseason NIL retention negotiations.
//!
//! A candidate is seeded per returning player each offseason. Offers are
//! judged one shot at a time against a personality-adjusted threshold; there
//! is no counter-offer state. Once accepted or declined a candidate is final.

use serde::{Deserialize, Serialize};

use crate::error::NegotiationError;
use crate::nil_value::{value_breakdown, LeagueContext, NilValuationOptions};
use crate::random::RandomSource;
use crate::roster::{DraftProjection, PersonalityTrait, Player, Position, Team};

/// Gross-up players apply for taxes when naming their ask.
pub const TAX_GROSS_UP: f64 = 0.10;
/// Threshold discount when a multi-year offer honors a stated preference.
pub const MULTI_YEAR_DISCOUNT: f64 = 0.92;
/// Threshold penalty when a one-and-done player is asked to commit.
pub const COMMITMENT_PENALTY: f64 = 1.2;
/// Sponsor subsidy per point of tier weight for a preferred-position player.
const SUBSIDY_PER_TIER_WEIGHT: f64 = 10_000.0;
/// Growth gap that makes a player want to develop in place.
const DEVELOPMENT_GAP: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NilNegotiationCandidate {
    pub player_id: u32,
    pub name: String,
    pub position: Position,
    pub overall: u8,
    pub potential: u8,
    pub draft_projection: DraftProjection,
    /// Market estimate.
    pub expected_nil_value: f64,
    /// What the player will actually take.
    pub minimum_ask: f64,
    pub prefers_multi_year: bool,
    /// Credited toward an offer, not charged to the team budget.
    pub sponsor_subsidy: f64,
    pub reason: String,
    pub status: CandidateStatus,
}

impl NilNegotiationCandidate {
    pub fn is_final(&self) -> bool {
        self.status != CandidateStatus::Pending
    }

    /// Apply an evaluation: `pending → accepted | declined`. Terminal states
    /// reject any further transition.
    pub fn finalize(
        &self,
        evaluation: &OfferEvaluation,
        log: &mut NegotiationLog,
    ) -> Result<NilNegotiationCandidate, NegotiationError> {
        if self.is_final() {
            return Err(NegotiationError::AlreadyFinalized {
                player_id: self.player_id,
                status: self.status,
            });
        }
        let status = if evaluation.accepted {
            CandidateStatus::Accepted
        } else {
            CandidateStatus::Declined
        };
        log.record(format!("{}: {}", self.name, evaluation.message));
        log::info!("negotiation with {} finalized as {:?}", self.name, status);
        Ok(NilNegotiationCandidate {
            status,
            ..self.clone()
        })
    }
}

/// Free-text negotiation history, appended in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NegotiationLog {
    entries: Vec<String>,
}

impl NegotiationLog {
    pub fn record(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Result of one offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferEvaluation {
    pub accepted: bool,
    pub amount: f64,
    pub years: u32,
    pub personality_modifier: f64,
    /// Amount the net offer had to reach.
    pub threshold: f64,
    pub net_offer: f64,
    pub shortfall: f64,
    pub message: String,
}

/// Product of every trait's stay modifier. No traits reads as 1.0.
pub fn personality_modifier(traits: &[PersonalityTrait]) -> f64 {
    traits.iter().map(|t| t.stay_modifier()).product()
}

/// Judge a cash + years offer.
pub fn evaluate_nil_offer(
    candidate: &NilNegotiationCandidate,
    amount: f64,
    years: u32,
    player: &Player,
) -> OfferEvaluation {
    let modifier = personality_modifier(&player.traits);
    let one_and_done = player.has_trait(PersonalityTrait::OneAndDoneDNA);

    let mut threshold = candidate.minimum_ask * modifier;
    if years > 1 && candidate.prefers_multi_year && !one_and_done {
        threshold *= MULTI_YEAR_DISCOUNT;
    }
    if years > 1 && one_and_done {
        threshold *= COMMITMENT_PENALTY;
    }

    let net_offer = amount + candidate.sponsor_subsidy;
    let accepted = net_offer >= threshold;
    let shortfall = if accepted { 0.0 } else { threshold - net_offer };

    let term = if years == 1 {
        "1 year".to_string()
    } else {
        format!("{years} years")
    };
    let message = if accepted {
        format!(
            "accepted ${:.0} for {} (needed ${:.0})",
            net_offer, term, threshold
        )
    } else {
        format!(
            "declined ${:.0} for {}, ${:.0} short of ${:.0}",
            net_offer, term, shortfall, threshold
        )
    };

    OfferEvaluation {
        accepted,
        amount,
        years,
        personality_modifier: modifier,
        threshold,
        net_offer,
        shortfall,
        message,
    }
}

/// Fresh candidates plus the roster with any missing traits rolled in.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSeeding {
    pub candidates: Vec<NilNegotiationCandidate>,
    pub roster: Vec<Player>,
}

/// Build one pending candidate per returning (non-graduating) player.
pub fn seed_candidates(
    team: &Team,
    league: &LeagueContext,
    rng: &mut impl RandomSource,
) -> CandidateSeeding {
    let options = NilValuationOptions::for_team(team);
    let mut roster = Vec::with_capacity(team.roster.len());
    let mut candidates = Vec::new();

    for player in &team.roster {
        let player = player.with_rolled_traits(rng);
        if !player.graduating {
            candidates.push(build_candidate(&player, team, &options, league));
        }
        roster.push(player);
    }

    log::debug!("seeded {} negotiation candidates for {}", candidates.len(), team.name);
    CandidateSeeding { candidates, roster }
}

fn build_candidate(
    player: &Player,
    team: &Team,
    options: &NilValuationOptions,
    league: &LeagueContext,
) -> NilNegotiationCandidate {
    let valuation = value_breakdown(player, team, options, league);
    let expected = valuation.value;
    let modifier = personality_modifier(&player.traits);
    let minimum_ask = (expected * (1.0 + TAX_GROSS_UP) * modifier)
        .max(expected)
        .round();

    let one_and_done = player.has_trait(PersonalityTrait::OneAndDoneDNA);
    let prefers_multi_year = !one_and_done
        && (player.has_trait(PersonalityTrait::LegacyBuilder)
            || player.has_trait(PersonalityTrait::Homebody)
            || player.potential.saturating_sub(player.overall) >= DEVELOPMENT_GAP);

    let sponsor_subsidy = if team.sponsor.prefers(player.position) {
        (team.sponsor.tier.weight() * SUBSIDY_PER_TIER_WEIGHT).round()
    } else {
        0.0
    };

    let mut reasons = Vec::new();
    match player.draft_projection {
        DraftProjection::Lottery => reasons.push("projected lottery pick".to_string()),
        DraftProjection::FirstRound => reasons.push("projected first-rounder".to_string()),
        DraftProjection::SecondRound | DraftProjection::Undrafted => {}
    }
    if one_and_done {
        reasons.push("has one foot out the door".to_string());
    } else if modifier < 1.0 {
        reasons.push("wants to stay".to_string());
    } else if modifier > 1.0 {
        reasons.push("knows what the market pays".to_string());
    }
    if prefers_multi_year {
        reasons.push("wants a multi-year commitment".to_string());
    }
    if sponsor_subsidy > 0.0 {
        reasons.push(format!(
            "{} will cover ${:.0}",
            team.sponsor.name, sponsor_subsidy
        ));
    }
    let reason = if reasons.is_empty() {
        "asking for market value".to_string()
    } else {
        reasons.join("; ")
    };

    NilNegotiationCandidate {
        player_id: player.id,
        name: player.name.clone(),
        position: player.position,
        overall: player.overall,
        potential: player.potential,
        draft_projection: player.draft_projection,
        expected_nil_value: expected,
        minimum_ask,
        prefers_multi_year,
        sponsor_subsidy,
        reason,
        status: CandidateStatus::Pending,
    }
}

/// True when any candidate carries a non-numeric or negative money field.
pub fn candidates_corrupted(candidates: &[NilNegotiationCandidate]) -> bool {
    candidates.iter().any(|c| {
        !c.expected_nil_value.is_finite()
            || !c.minimum_ask.is_finite()
            || c.expected_nil_value < 0.0
            || c.minimum_ask < 0.0
    })
}

/// Keep a healthy list; re-seed the whole list if it is empty or corrupt.
/// Corrupt entries are never repaired in place.
pub fn ensure_candidates(
    existing: Vec<NilNegotiationCandidate>,
    team: &Team,
    league: &LeagueContext,
    rng: &mut impl RandomSource,
) -> CandidateSeeding {
    if !existing.is_empty() && !candidates_corrupted(&existing) {
        return CandidateSeeding {
            candidates: existing,
            roster: team.roster.clone(),
        };
    }
    if !existing.is_empty() {
        log::warn!(
            "corrupted negotiation candidates for {}; re-seeding all {}",
            team.name,
            existing.len()
        );
    }
    seed_candidates(team, league, rng)
}
