//! Interactive acquisition of exercise metrics.
//!
//! Every question is a bounded retry loop: invalid or out-of-range answers are
//! rejected with a message and asked again, up to a fixed number of attempts.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use crate::error::{MaturityError, OptionContext, Result};
use crate::purple::{
    CollaborationMetrics, CoverageMetrics, DetectionMetrics, PurpleMetrics, ResponseMetrics,
    ATTACK_TACTICS,
};

/// Attempts per question before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Bounds for counts of techniques, events, scenarios and recommendations
pub const COUNT_RANGE: RangeInclusive<f64> = 0.0..=1000.0;

/// Bounds for mean times, in seconds (one day)
pub const DURATION_RANGE: RangeInclusive<f64> = 0.0..=86_400.0;

/// Line-oriented number prompter.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: usize,
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompter reading stdin; questions go to stderr so stdout stays free
    /// for the report.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Write a line that is not a question, such as a section heading
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    /// Ask for a number within `range`.
    ///
    /// A comma is accepted as decimal separator. Fails with a validation error
    /// once the attempts are used up, or when input ends.
    pub fn ask_number(&mut self, question: &str, range: RangeInclusive<f64>) -> Result<f64> {
        let mut accepted = None;

        for _ in 0..self.max_attempts {
            write!(self.writer, "→ {question} : ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(MaturityError::validation(format!(
                    "saisie interrompue avant une réponse à '{question}'"
                )));
            }

            match parse_number(&line) {
                Some(value) if range.contains(&value) => {
                    accepted = Some(value);
                    break;
                }
                Some(_) => writeln!(
                    self.writer,
                    "Veuillez saisir une valeur entre {} et {}.",
                    range.start(),
                    range.end()
                )?,
                None => writeln!(self.writer, "Saisie invalide, veuillez entrer un nombre.")?,
            }
        }

        accepted.with_context_none(|| {
            format!(
                "aucune réponse valide à '{question}' après {} tentatives",
                self.max_attempts
            )
        })
    }
}

fn parse_number(line: &str) -> Option<f64> {
    line.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Ask for all fourteen exercise metrics, pillar by pillar.
pub fn prompt_purple_metrics<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<PurpleMetrics> {
    prompter.say("=== Données de l'exercice Purple Team ===")?;

    let coverage = CoverageMetrics {
        techniques_tested: prompter.ask_number("Nombre de techniques MITRE testées", COUNT_RANGE)?,
        techniques_targeted: prompter
            .ask_number("Nombre de techniques cibles définies", COUNT_RANGE)?,
        tactics_covered: prompter.ask_number(
            "Nombre de tactiques ATT&CK couvertes (max 14)",
            1.0..=ATTACK_TACTICS,
        )?,
    };

    let detection = DetectionMetrics {
        events_detected: prompter.ask_number("Nombre d'événements détectés", COUNT_RANGE)?,
        red_team_actions: prompter.ask_number("Nombre total d'actions Red Team", COUNT_RANGE)?,
        true_positives: prompter.ask_number("Nombre de vrais positifs (VP)", COUNT_RANGE)?,
        false_positives: prompter.ask_number("Nombre de faux positifs (FP)", COUNT_RANGE)?,
        mttd_secs: prompter.ask_number("Temps moyen de détection (secondes)", DURATION_RANGE)?,
    };

    let response = ResponseMetrics {
        mttr_secs: prompter.ask_number("Temps moyen de réponse (secondes)", DURATION_RANGE)?,
        missed_actions: prompter.ask_number(
            "Nombre d'actions Red Team non traitées",
            0.0..=detection.red_team_actions,
        )?,
    };

    let collaboration = CollaborationMetrics {
        scenarios_documented: prompter.ask_number("Nombre de scénarios documentés", COUNT_RANGE)?,
        scenarios_executed: prompter.ask_number("Nombre de scénarios exécutés", COUNT_RANGE)?,
        recommendations_applied: prompter
            .ask_number("Nombre de recommandations appliquées", COUNT_RANGE)?,
        recommendations_proposed: prompter
            .ask_number("Nombre de recommandations proposées", COUNT_RANGE)?,
    };

    let metrics = PurpleMetrics {
        coverage,
        detection,
        response,
        collaboration,
    };
    metrics.validate()?;
    Ok(metrics)
}

/// Ask for an already computed Purple Team score in [0, 1].
pub fn prompt_purple_score<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<f64> {
    prompter.ask_number("Score Purple Team (entre 0 et 1)", 0.0..=1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_accepts_comma_decimal() {
        let mut p = prompter("0,75\n");
        assert_eq!(prompt_purple_score(&mut p).unwrap(), 0.75);
    }

    #[test]
    fn test_retries_until_valid() {
        let mut p = prompter("abc\n1.5\n\n0.4\n");
        assert_eq!(prompt_purple_score(&mut p).unwrap(), 0.4);
        let out = String::from_utf8(p.writer).unwrap();
        assert_eq!(out.matches("Saisie invalide").count(), 2);
        assert!(out.contains("Veuillez saisir une valeur entre 0 et 1"));
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let mut p = prompter("x\nx\nx\n0.5\n").with_max_attempts(3);
        let err = prompt_purple_score(&mut p).unwrap_err();
        assert!(matches!(err, MaturityError::Validation(_)));
        assert!(err.to_string().contains("après 3 tentatives"));
    }

    #[test]
    fn test_end_of_input_fails() {
        let mut p = prompter("");
        assert!(prompt_purple_score(&mut p).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut p = prompter("NaN\ninf\n0.2\n");
        assert_eq!(prompt_purple_score(&mut p).unwrap(), 0.2);
    }

    #[test]
    fn test_prompt_metrics_in_sheet_order() {
        let input = "8\n10\n7\n90\n100\n80\n20\n600\n1200\n10\n9\n10\n6\n8\n";
        let mut p = prompter(input);
        let m = prompt_purple_metrics(&mut p).unwrap();
        assert_eq!(m.coverage.tactics_covered, 7.0);
        assert_eq!(m.detection.red_team_actions, 100.0);
        assert_eq!(m.detection.mttd_secs, 600.0);
        assert_eq!(m.response.missed_actions, 10.0);
        assert_eq!(m.collaboration.recommendations_proposed, 8.0);
    }

    #[test]
    fn test_missed_actions_bounded_by_red_actions() {
        // 150 missed is rejected against 100 red team actions, then 10 accepted
        let input = "8\n10\n7\n90\n100\n80\n20\n600\n1200\n150\n10\n9\n10\n6\n8\n";
        let mut p = prompter(input);
        let m = prompt_purple_metrics(&mut p).unwrap();
        assert_eq!(m.response.missed_actions, 10.0);
    }

    #[test]
    fn test_tactics_bounds_enforced() {
        let input = "8\n10\n15\n0\n14\n";
        let mut p = prompter(input);
        // runs out of input after tactics
        let err = prompt_purple_metrics(&mut p).unwrap_err();
        assert!(err.to_string().contains("saisie interrompue"), "{err}");
        let out = String::from_utf8(p.writer).unwrap();
        assert_eq!(out.matches("entre 1 et 14").count(), 2);
    }
}
