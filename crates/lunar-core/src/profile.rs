//! Metrics derived from a [`UserProfile`].

use chrono::NaiveDate;
use lunar_types::{ProfileMetrics, UserProfile};

/// Age in whole years on `today`.
///
/// The count drops by one until the birthday has passed in the current year.
/// `None` when no birth date is set or it lies after `today`.
pub fn age_on(profile: &UserProfile, today: NaiveDate) -> Option<u32> {
    today.years_since(profile.birth_date?)
}

/// Body mass index, `kg / m^2`, rounded to one decimal place.
///
/// The rounded value is the one advisory thresholds compare against.
/// `None` unless both weight and height are positive and finite.
pub fn bmi(profile: &UserProfile) -> Option<f64> {
    let weight_kg = profile.weight_kg.filter(|w| w.is_finite() && *w > 0.0)?;
    let height_m = profile.height_cm.filter(|h| h.is_finite() && *h > 0.0)? / 100.0;
    let raw = weight_kg / (height_m * height_m);
    Some((raw * 10.0).round() / 10.0)
}

/// Age and BMI together.
pub fn metrics(profile: &UserProfile, today: NaiveDate) -> ProfileMetrics {
    ProfileMetrics {
        age: age_on(profile, today),
        bmi: bmi(profile),
    }
}
