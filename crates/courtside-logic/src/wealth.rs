//! Yearly wealth appreciation for every alumnus.
//!
//! Not idempotent: each call advances one simulated season. The registry's
//! derived state is rebuilt from scratch afterwards, since tier and archetype
//! changes invalidate earlier increments.

use serde::{Deserialize, Serialize};

use crate::alumni::{
    AlumniProfile, Archetype, DonationTier, Profession, TITAN_EARNINGS_THRESHOLD,
};
use crate::random::{chance, uniform, RandomSource};
use crate::registry::{AlumniDilemma, AlumniRegistry};

/// Probability of each rare event per alumnus per season.
pub const RARE_EVENT_CHANCE: f64 = 0.001;
pub const LIQUIDITY_MULTIPLIER: f64 = 1.5;
pub const CRISIS_MULTIPLIER: f64 = 0.7;

const DEFAULT_VOLATILITY: f64 = 0.05;

/// Base growth and volatility for an alumnus's standing.
pub fn growth_profile(profile: &AlumniProfile) -> (f64, f64) {
    if profile.archetype == Archetype::Titan {
        return (0.08, 0.15);
    }
    match profile.donation_tier {
        DonationTier::High => (0.06, 0.10),
        DonationTier::Medium => (0.04, DEFAULT_VOLATILITY),
        DonationTier::Low | DonationTier::None => (0.02, DEFAULT_VOLATILITY),
    }
}

/// What happened to one alumnus this season.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppreciationOutcome {
    pub liquidity_event: bool,
    pub crisis: bool,
    pub promoted_to_titan: bool,
}

/// Advance one alumnus by a season.
pub fn appreciate_alumnus(
    profile: &AlumniProfile,
    rng: &mut impl RandomSource,
) -> (AlumniProfile, AppreciationOutcome) {
    let (growth_rate, volatility) = growth_profile(profile);
    let variance = uniform(rng, -1.0, 1.0) * volatility;
    let mut earnings = profile.career_earnings * (1.0 + growth_rate + variance);

    let mut outcome = AppreciationOutcome::default();
    if chance(rng, RARE_EVENT_CHANCE) {
        earnings *= LIQUIDITY_MULTIPLIER;
        outcome.liquidity_event = true;
    }
    if chance(rng, RARE_EVENT_CHANCE) {
        earnings *= CRISIS_MULTIPLIER;
        outcome.crisis = true;
    }

    let mut next = AlumniProfile {
        career_earnings: earnings.max(0.0),
        ..profile.clone()
    }
    .with_rederived_wealth();

    if next.archetype != Archetype::Titan
        && next.career_earnings > TITAN_EARNINGS_THRESHOLD
        && next.profession != Profession::ProAthlete
    {
        next.archetype = Archetype::Titan;
        outcome.promoted_to_titan = true;
    }

    (next, outcome)
}

/// Season summary returned alongside the updated registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppreciationReport {
    pub liquidity_events: u32,
    pub crises: u32,
    pub promoted_titans: Vec<u32>,
    pub total_earnings_before: f64,
    pub total_earnings_after: f64,
}

/// Advance every alumnus one season and rebuild the registry's derived state.
///
/// A newly promoted Titan raises a dilemma if none is pending.
pub fn appreciate_registry(
    registry: &AlumniRegistry,
    rng: &mut impl RandomSource,
) -> (AlumniRegistry, AppreciationReport) {
    let mut report = AppreciationReport::default();
    let mut alumni = Vec::with_capacity(registry.all_alumni().len());

    for profile in registry.all_alumni() {
        report.total_earnings_before += profile.career_earnings;
        let (next, outcome) = appreciate_alumnus(profile, rng);
        if outcome.liquidity_event {
            report.liquidity_events += 1;
        }
        if outcome.crisis {
            report.crises += 1;
        }
        if outcome.promoted_to_titan {
            log::info!(
                "{} crossed ${:.0} and is now a Titan",
                next.name,
                next.career_earnings
            );
            report.promoted_titans.push(next.id);
        }
        report.total_earnings_after += next.career_earnings;
        alumni.push(next);
    }

    let mut updated = registry.with_alumni_replaced(alumni);

    if let Some(&titan_id) = report.promoted_titans.first() {
        let name = updated
            .all_alumni()
            .iter()
            .find(|a| a.id == titan_id)
            .map(|a| a.name.clone())
            .unwrap_or_default();
        let dilemma = AlumniDilemma {
            id: titan_id,
            alumni_id: titan_id,
            archetype: Archetype::Titan,
            title: format!("{name} wants a seat at the table"),
            description: format!(
                "{name} has become one of the program's wealthiest alumni \
                 and expects a voice in how the money is spent."
            ),
        };
        if let Some(with_dilemma) = updated.raise_dilemma(dilemma) {
            updated = with_dilemma;
        }
    }

    log::debug!(
        "appreciated {} alumni: {} liquidity, {} crises, {} new titans",
        updated.all_alumni().len(),
        report.liquidity_events,
        report.crises,
        report.promoted_titans.len()
    );

    (updated, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alumni::ProStatus;
    use crate::random::{ConstantRandom, ScriptedRandom, SeededRandom};

    fn alum(earnings: f64, archetype: Archetype, profession: Profession) -> AlumniProfile {
        AlumniProfile {
            id: 1,
            name: "Alum".into(),
            graduation_season: -10,
            profession,
            pro_status: ProStatus::None,
            career_earnings: earnings,
            wealth_score: 0,
            donation_tier: DonationTier::None,
            archetype,
            sentiment: 50.0,
        }
        .with_rederived_wealth()
    }

    #[test]
    fn test_growth_profiles_by_tier() {
        assert_eq!(
            growth_profile(&alum(1e9, Archetype::Titan, Profession::Entrepreneur)),
            (0.08, 0.15)
        );
        assert_eq!(
            growth_profile(&alum(9_000_000.0, Archetype::Finance, Profession::Finance)),
            (0.06, 0.10)
        );
        assert_eq!(
            growth_profile(&alum(5_000_000.0, Archetype::Finance, Profession::Finance)),
            (0.04, 0.05)
        );
        assert_eq!(
            growth_profile(&alum(100_000.0, Archetype::Local, Profession::Trades)),
            (0.02, 0.05)
        );
    }

    #[test]
    fn test_midpoint_draw_applies_base_growth_only() {
        // variance draw 0.5 → 0; event rolls 0.5 → no events
        let profile = alum(1_000_000.0, Archetype::Local, Profession::Trades);
        let (next, outcome) = appreciate_alumnus(&profile, &mut ConstantRandom(0.5));
        assert!((next.career_earnings - 1_020_000.0).abs() < 1e-6);
        assert_eq!(outcome, AppreciationOutcome::default());
        assert_eq!(next.wealth_score, 10);
        assert_eq!(next.donation_tier, DonationTier::Low);
    }

    #[test]
    fn test_both_rare_events_in_order() {
        // variance draw 0.5, then both event rolls hit
        let profile = alum(1_000_000.0, Archetype::Local, Profession::Trades);
        let mut rng = ScriptedRandom::new(vec![0.5, 0.0, 0.0]);
        let (next, outcome) = appreciate_alumnus(&profile, &mut rng);
        assert!(outcome.liquidity_event && outcome.crisis);
        assert!((next.career_earnings - 1_020_000.0 * 1.5 * 0.7).abs() < 1e-3);
    }

    #[test]
    fn test_promotion_to_titan() {
        let profile = alum(499_000_000.0, Archetype::Finance, Profession::Finance);
        let (next, outcome) = appreciate_alumnus(&profile, &mut ConstantRandom(0.5));
        assert!(outcome.promoted_to_titan);
        assert_eq!(next.archetype, Archetype::Titan);
    }

    #[test]
    fn test_pro_athletes_never_promoted() {
        let profile = alum(600_000_000.0, Archetype::Local, Profession::ProAthlete);
        let (next, _) = appreciate_alumnus(&profile, &mut ConstantRandom(0.5));
        assert_eq!(next.archetype, Archetype::Local);
    }

    #[test]
    fn test_titan_never_demoted_after_crash() {
        let mut profile = alum(600_000_000.0, Archetype::Titan, Profession::Entrepreneur);
        // Worst variance plus a crisis, repeatedly.
        let mut rng = ScriptedRandom::new(vec![0.0, 0.9, 0.0]);
        for _ in 0..30 {
            profile = appreciate_alumnus(&profile, &mut rng).0;
        }
        assert!(profile.career_earnings < TITAN_EARNINGS_THRESHOLD);
        assert_eq!(profile.archetype, Archetype::Titan);
    }

    #[test]
    fn test_registry_pass_recalculates_and_raises_dilemma() {
        let registry = AlumniRegistry::from_alumni(vec![
            alum(499_500_000.0, Archetype::Finance, Profession::Finance),
            alum(50_000.0, Archetype::Local, Profession::Trades),
        ]);
        let (next, report) = appreciate_registry(&registry, &mut ConstantRandom(0.5));
        assert_eq!(report.promoted_titans, vec![1]);
        assert_eq!(next.titan_count(), 1);
        assert!(next.active_dilemma().is_some());
        assert_eq!(next, next.recalculate_alumni_influence());
        assert!(report.total_earnings_after > report.total_earnings_before);
    }

    #[test]
    fn test_earnings_never_negative_over_many_seasons() {
        let mut registry = AlumniRegistry::from_alumni(vec![
            alum(0.0, Archetype::Local, Profession::Trades),
            alum(10.0, Archetype::Local, Profession::Trades),
            alum(3e9, Archetype::Titan, Profession::Entrepreneur),
        ]);
        let mut rng = SeededRandom::new(99);
        for _ in 0..100 {
            registry = appreciate_registry(&registry, &mut rng).0;
        }
        assert!(registry.all_alumni().iter().all(|a| a.career_earnings >= 0.0));
    }
}
