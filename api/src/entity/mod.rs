//! SeaORM table models
//!
//! Database-shaped models, separate from the domain entities in
//! `domain::entities`. Adapters convert between the two.

pub mod clubs;
pub mod day_pass_rates;
pub mod events;
pub mod interests;
