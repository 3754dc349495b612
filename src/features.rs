//! Feature adapter: turns a partial patient record into the complete,
//! ordered feature vector the classifier expects.

use crate::core::{round2, PatientRecord};

/// Canonical feature order consumed by the classifier: 20 raw fields followed
/// by the 5 derived CBC indices. Artifact metadata must declare this exact
/// order.
pub const FEATURE_COLUMNS: [&str; 25] = [
    "age",
    "gender",
    "hemoglobin",
    "rbc_count",
    "mcv",
    "mch",
    "mchc",
    "hematocrit",
    "iron_level",
    "ferritin",
    "diet_quality",
    "chronic_disease",
    "pregnancy",
    "family_history_anemia",
    "fatigue",
    "pale_skin",
    "shortness_of_breath",
    "dizziness",
    "cold_hands_feet",
    "bmi",
    "mentzer_index",
    "hb_rbc_ratio",
    "mcv_mch_ratio",
    "mchc_mch_diff",
    "hct_hb_ratio",
];

// Division guards: a zero or missing divisor is replaced by its clinical
// baseline so the derived indices stay finite.
const RBC_BASELINE: f64 = 4.5;
const MCH_BASELINE: f64 = 27.0;
const HEMOGLOBIN_BASELINE: f64 = 12.0;

/// The five derived CBC clinical indices, computed from raw lab values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedIndices {
    /// mcv / rbc_count; <13 suggests thalassemia, >13 iron deficiency.
    pub mentzer_index: f64,
    /// hemoglobin / rbc_count, proportional to MCV.
    pub hb_rbc_ratio: f64,
    /// mcv / mch, hypochromia indicator.
    pub mcv_mch_ratio: f64,
    /// mchc - mch, saturation gap.
    pub mchc_mch_diff: f64,
    /// hematocrit / hemoglobin, approximates MCHC.
    pub hct_hb_ratio: f64,
}

impl DerivedIndices {
    pub fn compute(record: &PatientRecord) -> Self {
        let rbc = divisor(record, "rbc_count", RBC_BASELINE);
        let mch = divisor(record, "mch", MCH_BASELINE);
        let hb = divisor(record, "hemoglobin", HEMOGLOBIN_BASELINE);
        let mcv = record.value_or("mcv", 0.0);
        let mchc = record.value_or("mchc", 0.0);
        let hct = record.value_or("hematocrit", 0.0);

        Self {
            mentzer_index: round2(mcv / rbc),
            hb_rbc_ratio: round2(hb / rbc),
            mcv_mch_ratio: round2(mcv / mch),
            mchc_mch_diff: round2(mchc - mch),
            hct_hb_ratio: round2(hct / hb),
        }
    }

    fn get(&self, name: &str) -> Option<f64> {
        match name {
            "mentzer_index" => Some(self.mentzer_index),
            "hb_rbc_ratio" => Some(self.hb_rbc_ratio),
            "mcv_mch_ratio" => Some(self.mcv_mch_ratio),
            "mchc_mch_diff" => Some(self.mchc_mch_diff),
            "hct_hb_ratio" => Some(self.hct_hb_ratio),
            _ => None,
        }
    }
}

fn divisor(record: &PatientRecord, field: &str, baseline: f64) -> f64 {
    match record.value(field) {
        Some(v) if v != 0.0 => v,
        _ => baseline,
    }
}

/// Build the complete feature vector in [`FEATURE_COLUMNS`] order.
///
/// Total function: missing raw fields contribute 0.0, the derived indices use
/// baseline-guarded divisors, and the result is finite for any record.
pub fn feature_vector(record: &PatientRecord) -> Vec<f64> {
    let derived = DerivedIndices::compute(record);
    FEATURE_COLUMNS
        .iter()
        .map(|&name| derived.get(name).unwrap_or_else(|| record.value_or(name, 0.0)))
        .collect()
}
