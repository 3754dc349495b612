//! Future-risk projection over 3/6/12-month horizons.

use crate::core::{round1, FutureRisk, PatientRecord, Severity, Trend};

const PROJECTION_CAP: f64 = 0.95;

/// Extrapolate the current composite score into future risk probabilities.
pub fn project(record: &PatientRecord, severity: Severity, risk_score: f64) -> FutureRisk {
    let base = risk_score / 100.0;

    let mut modifiers = 0.0;
    if record.flag("family_history_anemia") {
        modifiers += 0.10;
    }
    if record.flag("chronic_disease") {
        modifiers += 0.10;
    }
    if record.value_or("diet_quality", 1.0) == 0.0 {
        modifiers += 0.10;
    }
    if record.flag("pregnancy") {
        modifiers += 0.05;
    }

    let age = record.value_or("age", 30.0);
    if age > 60.0 {
        modifiers += 0.08;
    } else if age < 5.0 {
        modifiers += 0.08;
    }

    FutureRisk {
        three_months: to_percent(base * 0.8 + modifiers * 0.5),
        six_months: to_percent(base * 0.9 + modifiers * 0.7),
        twelve_months: to_percent(base + modifiers),
        trend: if severity > Severity::Normal {
            Trend::Increasing
        } else {
            Trend::Stable
        },
        preventable: risk_score < 60.0,
    }
}

fn to_percent(probability: f64) -> f64 {
    round1(probability.min(PROJECTION_CAP) * 100.0)
}
