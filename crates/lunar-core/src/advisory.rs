//! Lunar-influence advisory selection.
//!
//! Advisories are chosen from the moon phase and, when the profile is
//! complete, from the user's age, BMI and gender. Selection is pure: the
//! output is an ordered list of typed advisories, and the caller maps each
//! [`AdvisoryKind`] to display text.
//!
//! | Area | Waxing | Waning | Near full (position 4-6) |
//! |------|--------|--------|--------------------------|
//! | Career | start projects | finish projects | |
//! | Finance | plan purchases | save money (caution) | |
//! | Relationships | | | patience (caution), otherwise open communication |
//! | Gardening | plant above ground | root crops and pruning | |

use chrono::NaiveDate;
use lunar_types::{
    Advisory, AdvisoryKind, AdvisoryStatus, Gender, LifeArea, MoonPhase, UserProfile,
};
use tracing::debug;

use crate::profile;

/// BMI above which a waxing moon suggests a detox programme.
pub const HIGH_BMI: f64 = 25.0;

/// BMI below which a waning moon suggests extra nutrition.
pub const LOW_BMI: f64 = 18.5;

/// Age above which the full-moon window brings a rest advisory.
pub const REST_ADVISORY_AGE: u32 = 40;

/// Select advisories for a phase and profile, personal ones first.
pub fn advisories(phase: &MoonPhase, user: &UserProfile, today: NaiveDate) -> Vec<Advisory> {
    let mut selected = Vec::with_capacity(7);

    if user.is_complete() {
        selected.extend(personal_advisories(phase, user, today));
    }

    selected.extend(general_advisories(phase));

    debug!(
        phase = phase.name(),
        personal = selected.iter().filter(|a| a.personal).count(),
        total = selected.len(),
        "Advisories selected"
    );
    selected
}

fn personal_advisories(phase: &MoonPhase, user: &UserProfile, today: NaiveDate) -> Vec<Advisory> {
    let waxing = phase.is_waxing();
    let bmi = profile::bmi(user);
    let mut selected = Vec::with_capacity(3);

    let health = match bmi {
        Some(value) if value > HIGH_BMI && waxing => {
            personal(LifeArea::Health, AdvisoryKind::DetoxProgram, AdvisoryStatus::Caution)
        }
        Some(value) if value < LOW_BMI && !waxing => {
            personal(LifeArea::Health, AdvisoryKind::BoostNutrition, AdvisoryStatus::Caution)
        }
        _ if waxing => personal(LifeArea::Health, AdvisoryKind::ActiveTraining, AdvisoryStatus::Good),
        _ => personal(LifeArea::Health, AdvisoryKind::Cleansing, AdvisoryStatus::Good),
    };
    selected.push(health);

    let over_rest_age = profile::age_on(user, today).is_some_and(|age| age > REST_ADVISORY_AGE);
    if over_rest_age && phase.is_near_full() {
        selected.push(personal(
            LifeArea::Wellbeing,
            AdvisoryKind::RestAndSleep,
            AdvisoryStatus::Caution,
        ));
    }

    if user.gender == Some(Gender::Female) && waxing {
        selected.push(personal(
            LifeArea::Beauty,
            AdvisoryKind::BeautyTreatments,
            AdvisoryStatus::Good,
        ));
    }

    selected
}

fn general_advisories(phase: &MoonPhase) -> [Advisory; 4] {
    let waxing = phase.is_waxing();
    let near_full = phase.is_near_full();

    [
        general(
            LifeArea::Career,
            if waxing {
                AdvisoryKind::StartProjects
            } else {
                AdvisoryKind::FinishProjects
            },
            AdvisoryStatus::Good,
        ),
        if waxing {
            general(LifeArea::Finance, AdvisoryKind::PlanPurchases, AdvisoryStatus::Good)
        } else {
            general(LifeArea::Finance, AdvisoryKind::SaveMoney, AdvisoryStatus::Caution)
        },
        if near_full {
            general(
                LifeArea::Relationships,
                AdvisoryKind::PatienceWithLovedOnes,
                AdvisoryStatus::Caution,
            )
        } else {
            general(
                LifeArea::Relationships,
                AdvisoryKind::OpenCommunication,
                AdvisoryStatus::Good,
            )
        },
        general(
            LifeArea::Gardening,
            if waxing {
                AdvisoryKind::PlantAboveGround
            } else {
                AdvisoryKind::RootCropsAndPruning
            },
            AdvisoryStatus::Good,
        ),
    ]
}

const fn personal(area: LifeArea, kind: AdvisoryKind, status: AdvisoryStatus) -> Advisory {
    Advisory {
        area,
        kind,
        status,
        personal: true,
    }
}

const fn general(area: LifeArea, kind: AdvisoryKind, status: AdvisoryStatus) -> Advisory {
    Advisory {
        area,
        kind,
        status,
        personal: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 12, 1)
    }

    /// Waxing crescent (position 1.6).
    fn waxing() -> MoonPhase {
        MoonPhase::from_cycle_fraction(0.2)
    }

    /// Full moon (position 4.4), inside the near-full window.
    fn full() -> MoonPhase {
        MoonPhase::from_cycle_fraction(0.55)
    }

    /// Last quarter (position 6.4), waning but past the near-full window.
    fn waning() -> MoonPhase {
        MoonPhase::from_cycle_fraction(0.8)
    }

    fn user(weight_kg: f64, height_cm: f64, born: NaiveDate, gender: Option<Gender>) -> UserProfile {
        UserProfile {
            birth_date: Some(born),
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            gender,
        }
    }

    fn kinds(list: &[Advisory]) -> Vec<AdvisoryKind> {
        list.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn incomplete_profile_gets_only_general_advice() {
        let list = advisories(&waxing(), &UserProfile::default(), today());
        assert_eq!(
            kinds(&list),
            vec![
                AdvisoryKind::StartProjects,
                AdvisoryKind::PlanPurchases,
                AdvisoryKind::OpenCommunication,
                AdvisoryKind::PlantAboveGround,
            ]
        );
        assert!(list.iter().all(|a| !a.personal));
    }

    #[test]
    fn waning_general_advice_cautions_on_spending() {
        let list = advisories(&waning(), &UserProfile::default(), today());
        assert_eq!(
            kinds(&list),
            vec![
                AdvisoryKind::FinishProjects,
                AdvisoryKind::SaveMoney,
                AdvisoryKind::OpenCommunication,
                AdvisoryKind::RootCropsAndPruning,
            ]
        );
        let finance = list.iter().find(|a| a.area == LifeArea::Finance).unwrap();
        assert_eq!(finance.status, AdvisoryStatus::Caution);
    }

    #[test]
    fn near_full_moon_cautions_relationships() {
        let list = advisories(&full(), &UserProfile::default(), today());
        let relationships = list
            .iter()
            .find(|a| a.area == LifeArea::Relationships)
            .unwrap();
        assert_eq!(relationships.kind, AdvisoryKind::PatienceWithLovedOnes);
        assert_eq!(relationships.status, AdvisoryStatus::Caution);
    }

    #[test]
    fn high_bmi_on_waxing_moon_suggests_detox() {
        // 95 / 1.80^2 = 29.3
        let profile = user(95.0, 180.0, date(1995, 1, 1), None);
        let list = advisories(&waxing(), &profile, today());
        let health = list.first().unwrap();
        assert_eq!(health.kind, AdvisoryKind::DetoxProgram);
        assert_eq!(health.status, AdvisoryStatus::Caution);
        assert!(health.personal);
    }

    #[test]
    fn high_bmi_on_waning_moon_falls_back_to_cleansing() {
        let profile = user(95.0, 180.0, date(1995, 1, 1), None);
        let list = advisories(&waning(), &profile, today());
        assert_eq!(list.first().unwrap().kind, AdvisoryKind::Cleansing);
    }

    #[test]
    fn low_bmi_on_waning_moon_suggests_nutrition() {
        // 50 / 1.75^2 = 16.3
        let profile = user(50.0, 175.0, date(1995, 1, 1), None);
        let list = advisories(&waning(), &profile, today());
        assert_eq!(list.first().unwrap().kind, AdvisoryKind::BoostNutrition);
    }

    #[test]
    fn bmi_threshold_uses_rounded_value() {
        // 76.6 / 1.75^2 = 25.012, rounds to 25.0 which is not above 25.
        let profile = user(76.6, 175.0, date(1995, 1, 1), None);
        let list = advisories(&waxing(), &profile, today());
        assert_eq!(list.first().unwrap().kind, AdvisoryKind::ActiveTraining);
    }

    #[test]
    fn older_users_get_rest_advice_near_full_moon() {
        let profile = user(70.0, 175.0, date(1970, 3, 3), None);
        let list = advisories(&full(), &profile, today());
        assert!(kinds(&list).contains(&AdvisoryKind::RestAndSleep));

        let list = advisories(&waning(), &profile, today());
        assert!(!kinds(&list).contains(&AdvisoryKind::RestAndSleep));

        let young = user(70.0, 175.0, date(2000, 3, 3), None);
        let list = advisories(&full(), &young, today());
        assert!(!kinds(&list).contains(&AdvisoryKind::RestAndSleep));
    }

    #[test]
    fn beauty_advice_only_for_female_on_waxing_moon() {
        let female = user(60.0, 168.0, date(1990, 1, 1), Some(Gender::Female));
        assert!(kinds(&advisories(&waxing(), &female, today()))
            .contains(&AdvisoryKind::BeautyTreatments));
        assert!(!kinds(&advisories(&waning(), &female, today()))
            .contains(&AdvisoryKind::BeautyTreatments));

        let male = user(60.0, 168.0, date(1990, 1, 1), Some(Gender::Male));
        assert!(!kinds(&advisories(&waxing(), &male, today()))
            .contains(&AdvisoryKind::BeautyTreatments));
    }

    #[test]
    fn personal_advice_precedes_general_advice() {
        let female = user(60.0, 168.0, date(1970, 1, 1), Some(Gender::Female));
        let list = advisories(&waxing(), &female, today());
        let first_general = list.iter().position(|a| !a.personal).unwrap();
        assert!(list.iter().skip(first_general).all(|a| !a.personal));
        assert_eq!(list.iter().filter(|a| !a.personal).count(), 4);
    }
}
