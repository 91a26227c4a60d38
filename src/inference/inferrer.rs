//! Relationship inference engine

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::guess::{GuessConfig, GuessError, Heuristic};
use crate::models::{Catalog, Column, IndexColumnGroup, Indexes, InferredRelationship, PrimaryKeys};

/// Counters from one inference pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Index groups visited
    pub index_groups_scanned: usize,
    /// Index groups skipped for having more than one column
    pub composite_groups_skipped: usize,
    /// (index column, primary key) pairs handed to the heuristics
    pub candidate_pairs: usize,
    /// Relationships emitted, duplicates included
    pub relationships_found: usize,
}

impl InferenceStats {
    #[cfg(feature = "parallel")]
    fn merge(&mut self, other: &InferenceStats) {
        self.index_groups_scanned += other.index_groups_scanned;
        self.composite_groups_skipped += other.composite_groups_skipped;
        self.candidate_pairs += other.candidate_pairs;
        self.relationships_found += other.relationships_found;
    }
}

/// Guess foreign keys from indexes and primary keys
///
/// Every single-column index of every table is tested against the
/// single-column primary key of every other table, and each heuristic that
/// matches contributes one relationship. Composite indexes, composite primary
/// keys and self references are never candidates. Results are not
/// deduplicated and their order follows map iteration order.
pub fn guess_constraints(
    indexes: &Indexes,
    primary_keys: &PrimaryKeys,
    heuristics: &[Box<dyn Heuristic>],
) -> Vec<InferredRelationship> {
    let mut relationships = Vec::new();
    let mut stats = InferenceStats::default();
    for (table, groups) in indexes {
        scan_table(table, groups, primary_keys, heuristics, &mut relationships, &mut stats);
    }
    log_summary(&stats);
    relationships
}

/// Same as [`guess_constraints`], with referencing tables scanned on the rayon
/// thread pool
#[cfg(feature = "parallel")]
pub fn guess_constraints_parallel(
    indexes: &Indexes,
    primary_keys: &PrimaryKeys,
    heuristics: &[Box<dyn Heuristic>],
) -> Vec<InferredRelationship> {
    use rayon::prelude::*;

    let partials: Vec<(Vec<InferredRelationship>, InferenceStats)> = indexes
        .par_iter()
        .map(|(table, groups)| {
            let mut relationships = Vec::new();
            let mut stats = InferenceStats::default();
            scan_table(table, groups, primary_keys, heuristics, &mut relationships, &mut stats);
            (relationships, stats)
        })
        .collect();

    let mut stats = InferenceStats::default();
    let mut relationships = Vec::new();
    for (partial, partial_stats) in partials {
        relationships.extend(partial);
        stats.merge(&partial_stats);
    }
    log_summary(&stats);
    relationships
}

fn scan_table(
    table: &str,
    groups: &[IndexColumnGroup],
    primary_keys: &PrimaryKeys,
    heuristics: &[Box<dyn Heuristic>],
    relationships: &mut Vec<InferredRelationship>,
    stats: &mut InferenceStats,
) {
    for group in groups {
        stats.index_groups_scanned += 1;
        let column = match single_column(group) {
            Some(column) => column,
            None => {
                stats.composite_groups_skipped += 1;
                debug!(table, columns = group.len(), "Skipping composite index");
                continue;
            }
        };

        for (pk_table, pk) in primary_keys {
            if pk_table == table {
                continue;
            }
            let Some(pk_column) = single_column(pk) else {
                continue;
            };

            stats.candidate_pairs += 1;
            for heuristic in heuristics {
                if heuristic.matches(column, pk_table, pk_column) {
                    debug!(
                        heuristic = heuristic.name(),
                        "Guessed {}.{} -> {}.{}",
                        table,
                        column.name,
                        pk_table,
                        pk_column.name
                    );
                    relationships.push(InferredRelationship::new(
                        table,
                        &column.name,
                        pk_table,
                        &pk_column.name,
                    ));
                    stats.relationships_found += 1;
                }
            }
        }
    }
}

fn single_column(group: &[Column]) -> Option<&Column> {
    match group {
        [column] => Some(column),
        _ => None,
    }
}

fn log_summary(stats: &InferenceStats) {
    info!(
        "Guessed {} relationships from {} candidate pairs ({} index groups, {} composite skipped)",
        stats.relationships_found,
        stats.candidate_pairs,
        stats.index_groups_scanned,
        stats.composite_groups_skipped
    );
}

/// Holds a heuristic selection and runs it against catalogs
#[derive(Default)]
pub struct RelationshipInferrer {
    heuristics: Vec<Box<dyn Heuristic>>,
}

impl RelationshipInferrer {
    /// Create an inferrer with no heuristics; it guesses nothing until some are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferrer from an already compiled heuristic list
    pub fn with_heuristics(heuristics: Vec<Box<dyn Heuristic>>) -> Self {
        Self { heuristics }
    }

    /// Compile the heuristics named by `config`
    pub fn from_config(config: &GuessConfig) -> Result<Self, GuessError> {
        Ok(Self::with_heuristics(config.build_heuristics()?))
    }

    /// Append a heuristic
    pub fn with_heuristic(mut self, heuristic: impl Heuristic + 'static) -> Self {
        self.heuristics.push(Box::new(heuristic));
        self
    }

    pub fn heuristics(&self) -> &[Box<dyn Heuristic>] {
        &self.heuristics
    }

    /// Run one inference pass over `catalog`
    pub fn infer(&self, catalog: &Catalog) -> Vec<InferredRelationship> {
        guess_constraints(&catalog.indexes, &catalog.primary_keys, &self.heuristics)
    }

    /// Run one inference pass over `catalog` on the rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn infer_parallel(&self, catalog: &Catalog) -> Vec<InferredRelationship> {
        guess_constraints_parallel(&catalog.indexes, &catalog.primary_keys, &self.heuristics)
    }

    /// Run one inference pass and report its counters
    pub fn infer_with_stats(&self, catalog: &Catalog) -> (Vec<InferredRelationship>, InferenceStats) {
        let mut relationships = Vec::new();
        let mut stats = InferenceStats::default();
        for (table, groups) in &catalog.indexes {
            scan_table(
                table,
                groups,
                &catalog.primary_keys,
                &self.heuristics,
                &mut relationships,
                &mut stats,
            );
        }
        log_summary(&stats);
        (relationships, stats)
    }
}

impl std::fmt::Debug for RelationshipInferrer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationshipInferrer")
            .field(
                "heuristics",
                &self.heuristics.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
