//! Per-factor normal-range analysis.

use crate::config::NormalRanges;
use crate::core::{FactorImpact, PatientRecord, RiskFactor};
use im::Vector;

/// Compare the five tracked lab/vital values against their normal ranges.
///
/// Output order is fixed and part of the contract: Hemoglobin, Iron Level,
/// Ferritin, RBC Count, BMI.
pub fn analyze(record: &PatientRecord, ranges: &NormalRanges) -> Vector<RiskFactor> {
    let gender = record.value_or("gender", 0.0);
    let mut factors = Vector::new();

    factors.push_back(RiskFactor::new(
        "Hemoglobin",
        record.value_or("hemoglobin", 14.0),
        "g/dL",
        ranges.hemoglobin(gender),
        FactorImpact::High,
    ));
    factors.push_back(RiskFactor::new(
        "Iron Level",
        record.value_or("iron_level", 80.0),
        "µg/dL",
        ranges.iron,
        FactorImpact::High,
    ));
    factors.push_back(RiskFactor::new(
        "Ferritin",
        record.value_or("ferritin", 100.0),
        "ng/mL",
        ranges.ferritin,
        FactorImpact::Medium,
    ));
    factors.push_back(RiskFactor::new(
        "RBC Count",
        record.value_or("rbc_count", 4.5),
        "M/µL",
        ranges.rbc(gender),
        FactorImpact::Medium,
    ));
    factors.push_back(RiskFactor::new(
        "BMI",
        record.value_or("bmi", 24.0),
        "",
        ranges.bmi,
        FactorImpact::Low,
    ));

    factors
}
