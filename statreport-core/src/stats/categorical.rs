//! Categorical estimators.
//!
//! Categories are compared by exact string equality. Tables are ordered by
//! key so reports iterate them deterministically.

use tracing::trace;

use crate::error::{Result, StatReportError};
use crate::models::{CategoricalSample, FrequencyTable, ProportionTable};

use super::models::CategoricalSummary;

/// Counts occurrences of each distinct category.
pub fn frequency(sample: &CategoricalSample) -> Result<FrequencyTable> {
    if sample.is_empty() {
        return Err(StatReportError::empty_sample("frequency"));
    }

    let mut table = FrequencyTable::new();
    for value in sample.values() {
        let count = table.entry(value.clone()).or_insert(0);
        *count = count.saturating_add(1);
    }
    trace!("{} distinct categories", table.len());
    Ok(table)
}

/// Share of the sample taken by each distinct category.
///
/// The total is the sample size, so the proportions sum to 1.
pub fn proportion(sample: &CategoricalSample) -> Result<ProportionTable> {
    if sample.is_empty() {
        return Err(StatReportError::empty_sample("proportion"));
    }
    Ok(proportions_of(&frequency(sample)?, sample.len()))
}

fn proportions_of(frequencies: &FrequencyTable, total: usize) -> ProportionTable {
    let total = total as f64;
    frequencies
        .iter()
        .map(|(key, &count)| (key.clone(), count as f64 / total))
        .collect()
}

fn mode_of(frequencies: &FrequencyTable) -> Option<&str> {
    let mut best: Option<(&str, u64)> = None;
    // Ascending key iteration with a strict comparison keeps the first key
    // among equal counts.
    for (key, &count) in frequencies {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

/// Most frequent category.
///
/// Ties resolve to the first tied category in ascending key order,
/// regardless of where the categories first appear in the sample.
pub fn mode(sample: &CategoricalSample) -> Result<String> {
    let frequencies = frequency(sample).map_err(|_| StatReportError::empty_sample("mode"))?;
    mode_of(&frequencies)
        .map(str::to_string)
        .ok_or_else(|| StatReportError::empty_sample("mode"))
}

/// Runs the full categorical battery.
pub fn summarize(sample: &CategoricalSample) -> Result<CategoricalSummary> {
    if sample.is_empty() {
        return Err(StatReportError::empty_sample("categorical summary"));
    }

    let frequencies = frequency(sample)?;
    let proportions = proportions_of(&frequencies, sample.len());
    let mode = mode_of(&frequencies)
        .map(str::to_string)
        .ok_or_else(|| StatReportError::empty_sample("mode"))?;

    Ok(CategoricalSummary {
        count: sample.len(),
        mode,
        frequencies,
        proportions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[&str]) -> CategoricalSample {
        values.iter().copied().collect()
    }

    #[test]
    fn test_frequency_counts() {
        let table = frequency(&sample(&["red", "blue", "red", "green", "red"])).unwrap();

        assert_eq!(table.get("red"), Some(&3));
        assert_eq!(table.get("blue"), Some(&1));
        assert_eq!(table.get("green"), Some(&1));
        assert_eq!(table.values().sum::<u64>(), 5);
    }

    #[test]
    fn test_frequency_iterates_in_key_order() {
        let table = frequency(&sample(&["zeta", "alpha", "mid"])).unwrap();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_frequency_exact_equality() {
        let table = frequency(&sample(&["a", "A", " a", "a"])).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a"), Some(&2));
    }

    #[test]
    fn test_proportion_sums_to_one() {
        let table = proportion(&sample(&["x", "y", "y", "z", "z", "z"])).unwrap();

        assert!((table["x"] - 1.0 / 6.0).abs() < 1e-12);
        assert!((table["z"] - 0.5).abs() < 1e-12);
        assert!((table.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_mode_tie_break_is_key_order() {
        assert_eq!(mode(&sample(&["b", "a", "a", "b"])).unwrap(), "a");
        assert_eq!(mode(&sample(&["b", "b", "a", "a"])).unwrap(), "a");
    }

    #[test]
    fn test_mode_clear_winner() {
        assert_eq!(mode(&sample(&["b", "c", "c", "a"])).unwrap(), "c");
        assert_eq!(mode(&sample(&["only"])).unwrap(), "only");
    }

    #[test]
    fn test_empty_sample_errors() {
        let empty = CategoricalSample::default();

        assert!(matches!(
            frequency(&empty),
            Err(StatReportError::EmptySample {
                statistic: "frequency"
            })
        ));
        assert!(matches!(
            proportion(&empty),
            Err(StatReportError::EmptySample {
                statistic: "proportion"
            })
        ));
        assert!(matches!(
            mode(&empty),
            Err(StatReportError::EmptySample { statistic: "mode" })
        ));
        assert!(summarize(&empty).is_err());
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&sample(&["b", "a", "a", "b", "c"])).unwrap();

        assert_eq!(summary.count, 5);
        assert_eq!(summary.mode, "a");
        assert_eq!(summary.frequencies.values().sum::<u64>(), 5);
        assert!((summary.proportions["c"] - 0.2).abs() < 1e-12);
    }
}
