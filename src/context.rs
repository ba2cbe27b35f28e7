//! Build-scoped context owning the per-node alpha table.
//!
//! Lifecycle: a context is constructed disabled, [`McgiContext::initialize`]
//! loads the LID file and installs the table, pruning workers read it
//! through [`McgiContext::get_alpha`], and [`McgiContext::teardown`]
//! releases it at the end of the build. A failed initialization leaves the
//! context disabled so the build proceeds with its fixed coefficient.
//!
//! # Concurrency
//!
//! The table is built single-threaded before the parallel pruning phase and
//! is immutable until teardown. Workers hold `&McgiContext` (or
//! `&dyn AlphaProvider`) and need no locking; the caller provides the
//! happens-before edge by initializing before spawning workers. `initialize`
//! only flips `enabled` after the table is fully built, so no partially
//! populated table is ever observable.

use crate::error::{McgiError, McgiResult};
use crate::lid::read_lid_file;
use crate::mapping::{build_alpha_table, sigmoid_alpha, AlphaStrategy};
use crate::stats::{NormalStats, SPREAD_FLOOR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Alpha served when the context is disabled, uninitialized, in advanced
/// mode, or asked for an out-of-range node. Overridable per build via
/// [`McgiParams::fallback_alpha`].
pub const DEFAULT_FALLBACK_ALPHA: f32 = 1.2;

/// Configuration for adaptive pruning.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct McgiParams {
    /// Strictest pruning coefficient (lower bound)
    pub alpha_min: f32,
    /// Most relaxed pruning coefficient (upper bound)
    pub alpha_max: f32,
    /// LID-to-alpha mapping strategy
    pub strategy: AlphaStrategy,
    /// Alpha served whenever no per-node value is available
    pub fallback_alpha: f32,
}

impl Default for McgiParams {
    fn default() -> Self {
        Self {
            alpha_min: 1.0,
            alpha_max: 1.2,
            strategy: AlphaStrategy::Sigmoid,
            fallback_alpha: DEFAULT_FALLBACK_ALPHA,
        }
    }
}

/// Per-node alpha source consumed by the builder's pruning step.
///
/// Implemented by [`McgiContext`] and by [`FixedAlpha`] (the classic
/// one-coefficient-per-index behavior), so the pruning workers take either
/// through the same seam.
pub trait AlphaProvider: Sync {
    /// Whether adaptive per-node values are being served.
    fn is_enabled(&self) -> bool;

    /// Pruning coefficient for `node_id`. Total: never fails, never blocks.
    fn alpha(&self, node_id: u32) -> f32;
}

/// Fixed pruning coefficient, the non-adaptive fallback.
#[derive(Debug, Clone, Copy)]
pub struct FixedAlpha(pub f32);

impl AlphaProvider for FixedAlpha {
    fn is_enabled(&self) -> bool {
        false
    }

    fn alpha(&self, _node_id: u32) -> f32 {
        self.0
    }
}

/// Process state for adaptive pruning, owned by the builder for the
/// duration of one build invocation.
///
/// Invariant: the alpha table is non-empty exactly when the context is
/// enabled in table-backed (non-advanced) mode, and its length equals the
/// LID point count. Advanced mode keeps the table empty and serves
/// per-node adaptivity through [`McgiContext::alpha_for_lid`] instead.
#[derive(Debug)]
pub struct McgiContext {
    enabled: bool,
    advanced: bool,
    alpha_table: Vec<f32>,
    alpha_min: f32,
    alpha_max: f32,
    strategy: AlphaStrategy,
    fallback_alpha: f32,
    lid_avg: f32,
    lid_std: f32,
}

impl McgiContext {
    /// Create a disabled context with validated bounds.
    ///
    /// # Errors
    ///
    /// [`McgiError::InvalidRange`] if `alpha_max < alpha_min` (a NaN bound
    /// is rejected the same way).
    pub fn new(params: McgiParams) -> McgiResult<Self> {
        if !(params.alpha_min <= params.alpha_max) {
            return Err(McgiError::InvalidRange {
                alpha_min: params.alpha_min,
                alpha_max: params.alpha_max,
            });
        }

        Ok(Self::disabled(params))
    }

    fn disabled(params: McgiParams) -> Self {
        Self {
            enabled: false,
            advanced: false,
            alpha_table: Vec::new(),
            alpha_min: params.alpha_min,
            alpha_max: params.alpha_max,
            strategy: params.strategy,
            fallback_alpha: params.fallback_alpha,
            lid_avg: 0.0,
            lid_std: 1.0,
        }
    }

    /// Load the LID file, build the alpha table, and enable the context.
    ///
    /// Called once per build, before the parallel pruning phase. On any
    /// error the context stays disabled with an empty table; the error is
    /// recoverable and the build can continue non-adaptively.
    ///
    /// # Errors
    ///
    /// [`McgiError::AlreadyInitialized`] if the context is enabled (tear it
    /// down first; the installed table is left untouched), plus any
    /// [`read_lid_file`] failure.
    pub fn initialize(&mut self, lid_path: &Path) -> McgiResult<()> {
        if self.enabled {
            return Err(McgiError::AlreadyInitialized);
        }

        let lids = read_lid_file(lid_path)?;
        // Fully built before publication
        self.alpha_table = build_alpha_table(&lids, self.strategy, self.alpha_min, self.alpha_max);
        self.enabled = true;

        Ok(())
    }

    /// Enable the statistics-free variant: no LID file, no table, mean/std
    /// supplied directly by the caller.
    ///
    /// Per-node adaptivity then flows through [`McgiContext::alpha_for_lid`]
    /// with LID values the builder produces on the fly;
    /// [`McgiContext::get_alpha`] serves the fallback. A supplied std below
    /// the degenerate-input floor clamps to 1.0.
    ///
    /// # Errors
    ///
    /// [`McgiError::AlreadyInitialized`] if the context is enabled.
    pub fn initialize_advanced(&mut self, lid_avg: f32, lid_std: f32) -> McgiResult<()> {
        if self.enabled {
            return Err(McgiError::AlreadyInitialized);
        }

        self.lid_avg = lid_avg;
        self.lid_std = if lid_std < SPREAD_FLOOR { 1.0 } else { lid_std };
        self.advanced = true;
        self.enabled = true;

        Ok(())
    }

    /// Non-fatal bootstrap for the build front-end: any failure is reported
    /// as a diagnostic and yields a disabled context, so the surrounding
    /// build falls back to its fixed pruning coefficient instead of
    /// aborting.
    pub fn from_lid_file(lid_path: &Path, params: McgiParams) -> Self {
        let mut ctx = match Self::new(params) {
            Ok(ctx) => ctx,
            Err(e) => {
                tracing::warn!("adaptive pruning disabled: {e}");
                return Self::disabled(params);
            }
        };

        match ctx.initialize(lid_path) {
            Ok(()) => {
                tracing::debug!(
                    points = ctx.num_points(),
                    alpha_min = ctx.alpha_min,
                    alpha_max = ctx.alpha_max,
                    "alpha table installed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %lid_path.display(),
                    "adaptive pruning disabled: {e}"
                );
            }
        }

        ctx
    }

    /// Whether adaptive pruning is active. Pure query, safe to call with no
    /// prior initialization.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the context runs in the statistics-free (supplied mean/std)
    /// mode.
    pub fn is_advanced(&self) -> bool {
        self.advanced
    }

    /// Number of points covered by the installed table (0 when disabled or
    /// in advanced mode).
    pub fn num_points(&self) -> usize {
        self.alpha_table.len()
    }

    /// Pruning coefficient for `node_id`.
    ///
    /// Hot path, queried once per node during edge pruning: total,
    /// branch-cheap, allocation-free. Serves the fallback when disabled or
    /// when `node_id` is out of range.
    #[inline]
    pub fn get_alpha(&self, node_id: u32) -> f32 {
        if !self.enabled {
            return self.fallback_alpha;
        }
        self.alpha_table
            .get(node_id as usize)
            .copied()
            .unwrap_or(self.fallback_alpha)
    }

    /// Map an externally produced LID value through the supplied statistics
    /// (advanced mode). Serves the fallback unless the context is enabled
    /// in advanced mode.
    #[inline]
    pub fn alpha_for_lid(&self, lid: f32) -> f32 {
        if !(self.enabled && self.advanced) {
            return self.fallback_alpha;
        }
        let stats = NormalStats {
            mean: self.lid_avg,
            std_dev: self.lid_std,
        };
        sigmoid_alpha(lid, stats, self.alpha_min, self.alpha_max)
    }

    /// Release the table and return to the disabled state. Idempotent; safe
    /// to call without prior initialization. Required before reusing the
    /// context for a different point set, so stale alphas are never served.
    pub fn teardown(&mut self) {
        self.alpha_table = Vec::new();
        self.enabled = false;
        self.advanced = false;
        self.lid_avg = 0.0;
        self.lid_std = 1.0;
    }
}

impl AlphaProvider for McgiContext {
    fn is_enabled(&self) -> bool {
        McgiContext::is_enabled(self)
    }

    fn alpha(&self, node_id: u32) -> f32 {
        self.get_alpha(node_id)
    }
}
