//! Deterministic cutting-layout optimization for fixed-width fabric rolls.
//!
//! Given a bill of garment pieces (by size, with quantities) and the geometry
//! of a fabric roll, `cutplan` expands the bill into individual seam-inflated
//! pieces, shelf-packs them onto one or more cut sheets, derives utilization,
//! waste, time and cost metrics, scores the layout for production gating and
//! renders operator-facing cutting instructions.
//!
//! The optimizer is a pure function of its inputs: no I/O, no shared state,
//! identical input yields an identical layout down to the coordinates.

pub mod advisory;
pub mod entities;
pub mod expand;
pub mod instructions;
pub mod io;
pub mod metrics;
pub mod optimize;
pub mod pack;
pub mod util;
