//! Rule-based recommendation generation.
//!
//! Branch order is behaviorally significant: it fixes the output order, and
//! the healthy short-circuit suppresses every other rule. Do not reorder.

use crate::core::{PatientRecord, Recommendation, RecommendationKind, Severity};
use im::Vector;

/// Generate the ordered recommendation sequence for an assessed patient.
pub fn generate(record: &PatientRecord, severity: Severity, risk_score: f64) -> Vector<Recommendation> {
    let mut recommendations = Vector::new();

    if severity == Severity::Normal && risk_score < 20.0 {
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Info,
            "✅",
            "Healthy Status",
            "Your blood parameters are within normal range. Continue maintaining \
             a balanced diet rich in iron and vitamins.",
        ));
        return recommendations;
    }

    if record.value_or("diet_quality", 1.0) < 2.0 {
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Diet,
            "🥗",
            "Improve Dietary Iron Intake",
            "Include iron-rich foods: spinach, lentils, red meat, fortified \
             cereals, beans, and dark chocolate. Pair with Vitamin C sources \
             for better absorption.",
        ));
    }

    let hb = record.value_or("hemoglobin", 14.0);
    if hb < 10.0 {
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Urgent,
            "🏥",
            "Seek Immediate Medical Attention",
            format!(
                "Your hemoglobin level ({hb} g/dL) is critically low. Please \
                 consult a hematologist immediately for proper treatment."
            ),
        ));
    } else if hb < 12.0 {
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Medical,
            "👨‍⚕️",
            "Medical Consultation Recommended",
            format!(
                "Your hemoglobin ({hb} g/dL) is below optimal. Schedule a visit \
                 with your healthcare provider for a complete blood panel."
            ),
        ));
    }

    if record.value_or("iron_level", 80.0) < 60.0 || record.value_or("ferritin", 100.0) < 30.0 {
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Supplement,
            "💊",
            "Consider Iron Supplementation",
            "Your iron stores appear low. Consult your doctor about iron \
             supplements. Take them with Vitamin C on an empty stomach for \
             best absorption.",
        ));
    }

    if record.flag("pregnancy") {
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Pregnancy,
            "🤰",
            "Prenatal Anemia Management",
            "Anemia during pregnancy requires careful monitoring. Ensure \
             regular prenatal checkups and consider folic acid + iron \
             supplementation as advised by your OB-GYN.",
        ));
    }

    if ["fatigue", "dizziness", "shortness_of_breath"]
        .iter()
        .any(|s| record.flag(s))
    {
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Lifestyle,
            "🏃",
            "Manage Symptoms",
            "Rest when fatigued, stay hydrated, avoid sudden position changes, \
             and engage in light physical activity. Avoid strenuous exercise \
             until hemoglobin levels improve.",
        ));
    }

    if severity >= Severity::Mild {
        let interval = if severity >= Severity::Severe {
            "2 weeks"
        } else if severity >= Severity::Moderate {
            "1 month"
        } else {
            "3 months"
        };
        recommendations.push_back(Recommendation::new(
            RecommendationKind::Followup,
            "📅",
            "Schedule Follow-Up Testing",
            format!("Recommended re-testing in {interval}. Track hemoglobin trends over time."),
        ));
    }

    recommendations
}
