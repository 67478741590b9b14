//! Terminal rendering of reports

use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, ContentArrangement, Row, Table};
use lotto_stats_core::tests::{
    ChiSquareResult, EntropyResult, RandomnessOutcome, RunsTestResult, SerialCorrelationResult,
};
use lotto_stats_core::{BaselineReport, FrequencyTable, NextDrawScore, PairCount, TripletCount};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn right<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

pub fn frequency_table(freq: &FrequencyTable) -> Table {
    let mut out = table(&["Number", "Count"]);
    for row in freq.rows() {
        out.add_row(vec![right(row.number), right(row.count)]);
    }
    out
}

pub fn pair_table(pairs: &[PairCount]) -> Table {
    let mut out = table(&["Num1", "Num2", "Count"]);
    for p in pairs {
        out.add_row(vec![right(p.num1), right(p.num2), right(p.count)]);
    }
    out
}

pub fn triplet_table(triplets: &[TripletCount]) -> Table {
    let mut out = table(&["Num1", "Num2", "Num3", "Count"]);
    for t in triplets {
        out.add_row(vec![right(t.num1), right(t.num2), right(t.num3), right(t.count)]);
    }
    out
}

fn verdict(consistent: bool, consistent_text: &str, flagged_text: &str) -> String {
    format!("Result: {}", if consistent { consistent_text } else { flagged_text })
}

fn chi_square_lines(r: &ChiSquareResult) -> Vec<String> {
    vec![
        "Chi-square test for main numbers:".to_string(),
        format!("Chi2 statistic: {:.2}", r.statistic),
        format!("p-value: {:.4}", r.p_value),
        verdict(
            !r.reject,
            "No significant deviation from randomness (fail to reject H0).",
            "Significant deviation from randomness (reject H0).",
        ),
    ]
}

fn runs_lines(r: &RunsTestResult) -> Vec<String> {
    vec![
        "Runs test for high/low sequence:".to_string(),
        format!("Number of runs: {}", r.runs),
        format!("Expected runs: {:.2}", r.expected_runs),
        format!("Z-score: {:.2}", r.z),
        format!("p-value: {:.4}", r.p_value),
        verdict(
            !r.reject,
            "No significant deviation from randomness (fail to reject H0).",
            "Significant deviation from randomness (reject H0).",
        ),
    ]
}

fn serial_lines(r: &SerialCorrelationResult) -> Vec<String> {
    let coefficient = if r.defined {
        format!("Correlation coefficient: {:.4}", r.r)
    } else {
        "Correlation coefficient: undefined (constant sequence)".to_string()
    };
    vec![
        "Serial correlation test (lag-1):".to_string(),
        coefficient,
        verdict(
            !r.significant,
            "No significant serial correlation (consistent with randomness).",
            "Significant serial correlation (possible non-randomness).",
        ),
    ]
}

fn entropy_lines(r: &EntropyResult) -> Vec<String> {
    vec![
        "Shannon entropy test:".to_string(),
        format!("Observed entropy: {:.4}", r.entropy),
        format!("Maximum possible entropy: {:.4}", r.max_entropy),
        format!("Relative entropy: {:.2}%", r.relative_percent),
        verdict(
            r.near_maximal,
            "Entropy is close to maximum (consistent with randomness).",
            "Entropy is lower than expected (possible non-randomness).",
        ),
    ]
}

/// Report lines for one randomness test
pub fn outcome_lines(outcome: &RandomnessOutcome) -> Vec<String> {
    match outcome {
        RandomnessOutcome::ChiSquare(r) => chi_square_lines(r),
        RandomnessOutcome::Runs(r) => runs_lines(r),
        RandomnessOutcome::SerialCorrelation(r) => serial_lines(r),
        RandomnessOutcome::Entropy(r) => entropy_lines(r),
    }
}

fn auc_text(auc: Option<f64>) -> String {
    auc.map(|v| format!("{v:.3}")).unwrap_or_else(|| "N/A".to_string())
}

pub fn baseline_table(report: &BaselineReport) -> Table {
    let mut out = table(&["Number", "Accuracy", "ROC-AUC"]);
    for m in &report.per_number {
        let mut row = Row::new();
        row.add_cell(Cell::new(format!("num_{}", m.number)));
        row.add_cell(right(format!("{:.3}", m.accuracy)));
        row.add_cell(right(auc_text(m.roc_auc)));
        out.add_row(row);
    }
    out
}

pub fn baseline_summary(report: &BaselineReport) -> Vec<String> {
    vec![
        format!(
            "Trained on {} rows, tested on {} rows, {} lag(s)",
            report.n_train, report.n_test, report.n_lags
        ),
        format!("Average accuracy across all numbers: {:.3}", report.mean_accuracy),
        format!(
            "Average ROC-AUC across all numbers: {}",
            auc_text(report.mean_roc_auc)
        ),
    ]
}

pub fn score_table(scores: &[NextDrawScore]) -> Table {
    let mut out = table(&["Rank", "Number", "Probability"]);
    for (rank, s) in scores.iter().enumerate() {
        out.add_row(vec![
            right(rank + 1),
            right(s.number),
            right(format!("{:.4}", s.probability)),
        ]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_stats_core::NumberMetrics;

    #[test]
    fn test_frequency_table_rows() {
        let freq = FrequencyTable::from_counts([(7, 2), (3, 5)]);
        let text = frequency_table(&freq).to_string();
        let three = text.find(" 3 |").unwrap();
        let seven = text.find(" 7 |").unwrap();
        assert!(three < seven);
        assert!(text.contains("Count"));
    }

    #[test]
    fn test_undefined_auc_is_na() {
        let report = BaselineReport {
            per_number: vec![NumberMetrics {
                number: 50,
                accuracy: 1.0,
                roc_auc: None,
            }],
            mean_accuracy: 1.0,
            mean_roc_auc: None,
            n_train: 10,
            n_test: 5,
            n_lags: 1,
        };
        assert!(baseline_table(&report).to_string().contains("N/A"));
        assert_eq!(
            baseline_summary(&report)[2],
            "Average ROC-AUC across all numbers: N/A"
        );
    }

    #[test]
    fn test_entropy_verdict() {
        let lines = outcome_lines(&RandomnessOutcome::Entropy(EntropyResult {
            entropy: 5.0,
            max_entropy: 50f64.log2(),
            relative_percent: 88.6,
            near_maximal: false,
        }));
        assert_eq!(lines[0], "Shannon entropy test:");
        assert!(lines[4].contains("lower than expected"));
    }
}
