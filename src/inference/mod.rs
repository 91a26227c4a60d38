//! Foreign-key inference over catalog metadata
//!
//! ## Example
//!
//! ```rust
//! use fk_guess::inference::RelationshipInferrer;
//! use fk_guess::guess::{PrimaryKeyHeuristic, TableColumnHeuristic};
//! use fk_guess::models::{Catalog, Column, InferredRelationship};
//!
//! let mut catalog = Catalog::default();
//! catalog.add_index("orders", vec![Column::new("customer_id", "int")]);
//! catalog.set_primary_key("customers", vec![Column::new("id", "int")]);
//!
//! let inferrer = RelationshipInferrer::new()
//!     .with_heuristic(PrimaryKeyHeuristic::new())
//!     .with_heuristic(TableColumnHeuristic::new());
//!
//! assert_eq!(
//!     inferrer.infer(&catalog),
//!     vec![InferredRelationship::new("orders", "customer_id", "customers", "id")]
//! );
//! ```

mod inferrer;

#[cfg(feature = "parallel")]
pub use inferrer::guess_constraints_parallel;
pub use inferrer::{InferenceStats, RelationshipInferrer, guess_constraints};
