//! mcgi: adaptive per-node pruning coefficients for disk-based ANN builds.
//!
//! Graph-based ANN indexes in the Vamana/DiskANN family prune candidate
//! edges with a single coefficient `alpha` for the entire index. One fixed
//! setting wastes edges in easy regions of the dataset and starves hard
//! ones. This crate derives a per-node alpha from precomputed LID (Local
//! Intrinsic Dimensionality) estimates: points in locally complex
//! neighborhoods get a relaxed alpha near the configured upper bound,
//! points in simple neighborhoods a strict one near the lower bound.
//!
//! The engine is deliberately narrow. It consumes a LID file produced by an
//! external estimation pipeline, builds one bounded coefficient per node,
//! and serves O(1) lock-free lookups to the builder's pruning workers:
//!
//! ```text
//! LID file ──► lid::read_lid_file ──► stats ──► mapping ──► alpha table
//!                                                               │
//!              pruning workers ──► McgiContext::get_alpha ──────┘
//! ```
//!
//! Estimating LID from raw vectors, the pruning algorithm itself, and
//! query-time search belong to external collaborators; the seam toward the
//! builder is [`AlphaProvider`].
//!
//! # Lifecycle
//!
//! A [`McgiContext`] is created disabled, enabled by a successful
//! initialization, shared read-only with the pruning workers, and released
//! with [`McgiContext::teardown`] at the end of the build. Initialization
//! failures are recoverable: the context stays disabled and lookups serve
//! the configured fallback coefficient, so a build never aborts because its
//! LID file was bad.
//!
//! # Example
//!
//! ```no_run
//! use mcgi::{McgiContext, McgiParams};
//! use std::path::Path;
//!
//! let params = McgiParams {
//!     alpha_min: 1.0,
//!     alpha_max: 1.4,
//!     ..Default::default()
//! };
//! let ctx = McgiContext::from_lid_file(Path::new("data/points_lid.bin"), params);
//!
//! if ctx.is_enabled() {
//!     // one lookup per node inside the robust-pruning step
//!     let alpha = ctx.get_alpha(42);
//!     assert!((1.0..=1.4).contains(&alpha));
//! }
//! ```

pub mod context;
pub mod error;
pub mod lid;
pub mod mapping;
pub mod stats;
pub mod synthetic;

pub use context::{AlphaProvider, FixedAlpha, McgiContext, McgiParams, DEFAULT_FALLBACK_ALPHA};
pub use error::{McgiError, McgiResult};
pub use mapping::AlphaStrategy;
