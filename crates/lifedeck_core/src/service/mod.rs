//! Cross-store read services.
//!
//! # Responsibility
//! - Compose feature repositories into derived values (points, chart series).
//! - Keep feature screens decoupled from slot layout and codec details.
//!
//! # Invariants
//! - Services here never write to the stores they aggregate, except for the
//!   explicit reward claim.

pub mod rewards;
pub mod summary;
