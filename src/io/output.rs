use crate::core::{AlertLevel, FactorStatus, RiskAssessment, RiskLevel};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_assessment(&mut self, assessment: &RiskAssessment) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_assessment(&mut self, assessment: &RiskAssessment) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(assessment)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_assessment(&mut self, assessment: &RiskAssessment) -> anyhow::Result<()> {
        print_header();
        print_classification(assessment);
        print_alerts(assessment);
        print_risk_factors(assessment);
        print_recommendations(assessment);
        print_future_risk(assessment);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "HemoScan Risk Assessment".bold().blue());
    println!("{}", "========================".blue());
    println!(
        "Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

fn print_classification(assessment: &RiskAssessment) {
    let severity = colorize_severity(&assessment.severity_label, assessment.risk_level);
    println!("Severity: {severity} (confidence {:.1}%)", assessment.confidence);
    println!(
        "  Normal {:.2}% | Mild {:.2}% | Moderate {:.2}% | Severe {:.2}%",
        assessment.probabilities.normal,
        assessment.probabilities.mild,
        assessment.probabilities.moderate,
        assessment.probabilities.severe,
    );
    println!(
        "Risk score: {} ({})",
        format!("{:.1}", assessment.risk_score).bold(),
        colorize_level(assessment.risk_level),
    );
    println!("Model accuracy: {:.2}%", assessment.model_accuracy);
    println!();
}

fn print_alerts(assessment: &RiskAssessment) {
    if assessment.alerts.is_empty() {
        return;
    }

    println!("{} Alerts:", "⚠".red().bold());
    for alert in &assessment.alerts {
        let level = match alert.level {
            AlertLevel::Critical | AlertLevel::Emergency => {
                format!("{:?}", alert.level).to_uppercase().red().bold()
            }
            AlertLevel::High => "HIGH".red(),
            AlertLevel::Warning => "WARNING".yellow(),
        };
        println!("  [{level}] {}", alert.message);
        println!("          Action: {}", alert.action);
    }
    println!();
}

fn print_risk_factors(assessment: &RiskAssessment) {
    println!("Risk factors:");
    for factor in &assessment.risk_factors {
        let status = match factor.status {
            FactorStatus::Normal => "normal".green(),
            FactorStatus::Low => "low".red(),
            FactorStatus::High => "high".yellow(),
        };
        let unit = if factor.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", factor.unit)
        };
        println!(
            "  {:<12} {}{} (normal {}{}) - {} [{:?} impact]",
            factor.name, factor.value, unit, factor.normal_range, unit, status, factor.impact
        );
    }
    println!();
}

fn print_recommendations(assessment: &RiskAssessment) {
    println!("Recommendations:");
    for (i, recommendation) in assessment.recommendations.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            recommendation.icon,
            recommendation.title.bold()
        );
        println!("     {}", recommendation.text);
    }
    println!();
}

fn print_future_risk(assessment: &RiskAssessment) {
    let future = &assessment.future_risk;
    println!("Future risk:");
    println!(
        "  3 months: {:.1}% | 6 months: {:.1}% | 12 months: {:.1}%",
        future.three_months, future.six_months, future.twelve_months
    );
    println!(
        "  Trend: {:?}, preventable: {}",
        future.trend,
        if future.preventable { "yes" } else { "no" }
    );
}

fn colorize_severity(label: &str, level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => label.green(),
        RiskLevel::Moderate => label.yellow(),
        _ => label.red().bold(),
    }
}

fn colorize_level(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => level.label().green(),
        RiskLevel::Moderate => level.label().yellow(),
        RiskLevel::High => level.label().red(),
        RiskLevel::VeryHigh | RiskLevel::Critical => level.label().red().bold(),
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
