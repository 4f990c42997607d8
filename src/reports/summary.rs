//! Summary report generator for shell output.
//!
//! Provides a compact, aligned summary for terminal usage.

use unicode_width::UnicodeWidthStr;

use super::{out_of_100, percent, AssessmentReport, ReportError, ReportFormat, ReportGenerator};
use crate::fusion::FusionResult;
use crate::governance::GovernanceReport;
use crate::purple::PurpleReport;

/// Width of the label column
const LABEL_WIDTH: usize = 34;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    if used >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - used))
    }
}

/// Color for a score in [0, 1]
fn score_color(score: f64) -> &'static str {
    if score >= 0.8 {
        "green"
    } else if score >= 0.6 {
        "yellow"
    } else {
        "red"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// One aligned `label  value` row; padding happens before coloring so
    /// escape codes do not skew the columns.
    fn row(&self, indent: usize, label: &str, value: &str, color: &str) -> String {
        let label = pad(label, LABEL_WIDTH.saturating_sub(indent));
        format!("{}{}{}", " ".repeat(indent), label, self.color(value, color))
    }

    fn heading(&self, title: &str, value: &str, color: &str) -> String {
        format!(
            "{}{}",
            self.color(&pad(title, LABEL_WIDTH), "bold"),
            self.color(value, color)
        )
    }

    fn governance(&self, lines: &mut Vec<String>, report: &GovernanceReport) {
        lines.push(String::new());
        lines.push(self.heading("Governance", &percent(report.score), score_color(report.score)));

        for domain in &report.domains {
            let label = format!("{} (×{:.2})", domain.name, domain.weight);
            match domain.score {
                Some(score) => lines.push(self.row(2, &label, &percent(score), score_color(score))),
                None => lines.push(self.row(2, &label, "not scored", "dim")),
            }
            for component in &domain.components {
                let mut label = format!("{} (×{:.2})", component.name, component.weight);
                if component.critical {
                    label.push_str(" [critical]");
                }
                let value = match component.score {
                    Some(score) => format!(
                        "{}  {}/{}",
                        percent(score),
                        component.answered,
                        component.questions
                    ),
                    None => "not scored".to_string(),
                };
                lines.push(self.row(4, &label, &value, "dim"));
            }
        }

        let c = &report.counts;
        lines.push(format!(
            "  {}  {} answered, {} not applicable, {} unanswered",
            self.color("Answers:", "cyan"),
            c.answered,
            c.not_applicable,
            c.unanswered
        ));
    }

    fn purple(&self, lines: &mut Vec<String>, report: &PurpleReport) {
        let p = &report.pillars;
        lines.push(String::new());
        lines.push(self.heading(
            "Purple Team",
            &out_of_100(report.score),
            score_color(report.normalized_score()),
        ));
        for (name, score) in [
            ("Coverage", p.coverage),
            ("Detection", p.detection),
            ("Response", p.response),
            ("Collaboration", p.collaboration),
        ] {
            lines.push(self.row(2, name, &out_of_100(score), score_color(score / 100.0)));
        }
        lines.push(self.row(2, "Level", &report.level.display_name(), "cyan"));
    }

    fn fusion(&self, lines: &mut Vec<String>, fusion: &FusionResult) {
        lines.push(String::new());
        lines.push(self.color("Fused maturity", "bold"));
        lines.push(self.row(
            2,
            &format!("Governance (α={:.2})", fusion.weights.governance),
            &percent(fusion.governance),
            "dim",
        ));
        lines.push(self.row(
            2,
            &format!("Purple Team (β={:.2})", fusion.weights.purple),
            &percent(fusion.purple),
            "dim",
        ));
        lines.push(self.row(
            2,
            "Fused index",
            &percent(fusion.fused),
            score_color(fusion.fused),
        ));
        let tier_color = if fusion.tier.is_determined() {
            "cyan"
        } else {
            "red"
        };
        lines.push(self.row(2, "Tier", &fusion.tier.to_string(), tier_color));
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("SOC Maturity Assessment", "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
        if let Some(respondent) = &report.metadata.respondent {
            lines.push(format!("{}  {}", self.color("Respondent:", "cyan"), respondent));
        }
        lines.push(format!(
            "{}  {}",
            self.color("Generated:", "cyan"),
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        if let Some(governance) = &report.governance {
            self.governance(&mut lines, governance);
        }
        if let Some(purple) = &report.purple {
            self.purple(&mut lines, purple);
        }
        if let Some(fusion) = &report.fusion {
            self.fusion(&mut lines, fusion);
        }
        if report.governance.is_none() && report.purple.is_none() && report.fusion.is_none() {
            lines.push(String::new());
            lines.push(self.color("Nothing assessed", "dim"));
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
