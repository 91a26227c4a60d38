//! Output formatting for CLI

use crate::guess::GuessConfig;
use crate::inference::InferenceStats;

/// Summary printed to stderr after a guess run
pub fn format_summary(stats: &InferenceStats, config: &GuessConfig, emitted: usize) -> String {
    let mut output = String::new();

    let heuristics: Vec<&str> = config.selected().iter().map(|k| k.as_str()).collect();
    output.push_str(&format!("Heuristics: {}\n", heuristics.join(", ")));
    output.push_str(&format!(
        "Index groups: {} ({} composite skipped)\n",
        stats.index_groups_scanned, stats.composite_groups_skipped
    ));
    output.push_str(&format!("Candidate pairs: {}\n", stats.candidate_pairs));

    if emitted == stats.relationships_found {
        output.push_str(&format!("Relationships: {}", emitted));
    } else {
        output.push_str(&format!(
            "Relationships: {} ({} before dedup)",
            emitted, stats.relationships_found
        ));
    }

    output
}
