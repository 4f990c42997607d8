//! Markdown report generator.

use std::fmt::Write;

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{out_of_100, percent, AssessmentReport, ReportError, ReportFormat, ReportGenerator};

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include component rows under each domain
    include_components: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_components: true,
        }
    }

    /// Only list domains in the governance table
    #[must_use]
    pub const fn domains_only(mut self) -> Self {
        self.include_components = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn optional_percent(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), percent)
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# SOC Maturity Assessment")?;
        writeln!(md)?;
        writeln!(
            md,
            "_Generated {} by soc-maturity {}_",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.tool_version
        )?;
        if let Some(respondent) = &report.metadata.respondent {
            writeln!(md)?;
            writeln!(md, "**Respondent:** {}", escape_markdown_inline(respondent))?;
        }

        if let Some(governance) = &report.governance {
            writeln!(md)?;
            writeln!(md, "## Governance")?;
            writeln!(md)?;
            writeln!(md, "**Global score:** {}", percent(governance.score))?;
            writeln!(md)?;
            writeln!(md, "| Domain | Component | Weight | Critical | Answered | Score |")?;
            writeln!(md, "|--------|-----------|-------:|:--------:|---------:|------:|")?;
            for domain in &governance.domains {
                writeln!(
                    md,
                    "| **{}** | | {:.2} | | | {} |",
                    escape_markdown_table(&domain.name),
                    domain.weight,
                    optional_percent(domain.score)
                )?;
                if !self.include_components {
                    continue;
                }
                for component in &domain.components {
                    writeln!(
                        md,
                        "| | {} | {:.2} | {} | {}/{} | {} |",
                        escape_markdown_table(&component.name),
                        component.weight,
                        if component.critical { "yes" } else { "" },
                        component.answered,
                        component.questions,
                        optional_percent(component.score)
                    )?;
                }
            }
            let c = &governance.counts;
            writeln!(md)?;
            writeln!(
                md,
                "{} answered, {} not applicable, {} unanswered.",
                c.answered, c.not_applicable, c.unanswered
            )?;
        }

        if let Some(purple) = &report.purple {
            let p = &purple.pillars;
            writeln!(md)?;
            writeln!(md, "## Purple Team")?;
            writeln!(md)?;
            writeln!(md, "| Pillar | Score |")?;
            writeln!(md, "|--------|------:|")?;
            writeln!(md, "| Coverage | {} |", out_of_100(p.coverage))?;
            writeln!(md, "| Detection | {} |", out_of_100(p.detection))?;
            writeln!(md, "| Response | {} |", out_of_100(p.response))?;
            writeln!(md, "| Collaboration | {} |", out_of_100(p.collaboration))?;
            writeln!(md, "| **Global** | **{}** |", out_of_100(purple.score))?;
            writeln!(md)?;
            writeln!(md, "**Level:** {}", purple.level.display_name())?;
        }

        if let Some(fusion) = &report.fusion {
            writeln!(md)?;
            writeln!(md, "## Fused Maturity")?;
            writeln!(md)?;
            writeln!(md, "| Input | Weight | Score |")?;
            writeln!(md, "|-------|-------:|------:|")?;
            writeln!(
                md,
                "| Governance | {:.2} | {} |",
                fusion.weights.governance,
                percent(fusion.governance)
            )?;
            writeln!(
                md,
                "| Purple Team | {:.2} | {} |",
                fusion.weights.purple,
                percent(fusion.purple)
            )?;
            writeln!(md, "| **Fused index** | | **{}** |", percent(fusion.fused))?;
            writeln!(md)?;
            writeln!(md, "**Tier:** {}", fusion.tier)?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::{fuse, FusionWeights};
    use crate::governance::{AnswerCounts, ComponentScore, DomainScore, GovernanceReport};

    fn governance() -> GovernanceReport {
        GovernanceReport {
            score: 0.5,
            respondent: Some("SOC | N1".to_string()),
            domains: vec![DomainScore {
                name: "Processus|Gouvernance".to_string(),
                weight: 1.0,
                score: None,
                components: vec![ComponentScore {
                    name: "Pilotage".to_string(),
                    weight: 1.1,
                    critical: true,
                    score: None,
                    answered: 0,
                    questions: 2,
                }],
            }],
            counts: AnswerCounts {
                answered: 0,
                not_applicable: 2,
                unanswered: 0,
            },
        }
    }

    #[test]
    fn test_markdown_escapes_names() {
        let report = AssessmentReport::new().with_governance(governance());
        let md = MarkdownReporter::new().generate(&report).unwrap();
        assert!(md.contains("Processus\\|Gouvernance"));
        assert!(md.contains("**Respondent:** SOC \\| N1"));
        assert!(md.contains("| | Pilotage | 1.10 | yes | 0/2 | - |"));
    }

    #[test]
    fn test_domains_only() {
        let report = AssessmentReport::new().with_governance(governance());
        let md = MarkdownReporter::new().domains_only().generate(&report).unwrap();
        assert!(!md.contains("Pilotage"));
    }

    #[test]
    fn test_fusion_section() {
        let report =
            AssessmentReport::new().with_fusion(fuse(0.82, 0.75, FusionWeights::default()));
        let md = MarkdownReporter::new().generate(&report).unwrap();
        assert!(md.contains("## Fused Maturity"));
        assert!(md.contains("**79.2%**"));
        assert!(md.contains("**Tier:** Niveau 3 (Piloté)"));
        assert!(!md.contains("## Governance"));
    }
}
