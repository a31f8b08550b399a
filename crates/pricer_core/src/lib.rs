//! # pricer_core: Numerical Foundation for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Root finders for inverting pricing functions (`math::solvers`)
//! - The error taxonomy shared by every layer (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - tracing: Solver diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_inv_cdf};
//! use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
//! use pricer_core::types::ErrorCategory;
//!
//! let p = norm_cdf(1.5_f64);
//! let x = norm_inv_cdf(p).unwrap();
//! assert!((x - 1.5).abs() < 1e-9);
//!
//! let err = norm_inv_cdf(1.0_f64).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::InvalidDomain);
//!
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let root = solver.find_root(|v: f64| v * v, 9.0, 0.0, 5.0).unwrap();
//! assert!((root.root - 3.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error categories and solver metadata

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
