//! Alert generation for critical conditions, independent of recommendations.

use crate::core::{Alert, AlertLevel, PatientRecord, Severity};
use im::Vector;

/// Evaluate every alert condition; order follows evaluation order.
pub fn generate(record: &PatientRecord, severity: Severity, risk_score: f64) -> Vector<Alert> {
    let mut alerts = Vector::new();

    if severity == Severity::Severe {
        alerts.push_back(Alert::new(
            AlertLevel::Critical,
            "🚨 CRITICAL: Severe anemia detected. Immediate medical intervention recommended.",
            "Refer to hematologist immediately",
        ));
    }

    if record.value_or("hemoglobin", 14.0) < 7.0 {
        alerts.push_back(Alert::new(
            AlertLevel::Emergency,
            "⚠️ EMERGENCY: Hemoglobin critically low. Blood transfusion may be required.",
            "Emergency department referral",
        ));
    }

    if risk_score >= 80.0 {
        alerts.push_back(Alert::new(
            AlertLevel::High,
            "🔴 HIGH RISK: Multiple risk factors identified. Comprehensive evaluation needed.",
            "Complete blood count + iron studies recommended",
        ));
    }

    if record.flag("pregnancy") && severity >= Severity::Moderate {
        alerts.push_back(Alert::new(
            AlertLevel::Warning,
            "⚠️ Moderate-to-severe anemia during pregnancy. Close monitoring required.",
            "Refer to high-risk obstetrics",
        ));
    }

    alerts
}
