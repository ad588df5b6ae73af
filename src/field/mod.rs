//! Electrostatics of fixed point charges.
//!
//! The evaluator in [`coulomb`] is a pair of pure functions over a charge
//! slice. [`grid`] samples it on the fixed visualization grid and turns each
//! sample into an arrow glyph description.

/// Point charges and the Coulomb field/potential evaluator.
pub mod coulomb;
/// Grid sampling and arrow glyph derivation.
pub mod grid;

pub use coulomb::{
    dipole, electric_field, potential, PointCharge, Polarity, COULOMB_K,
};
pub use grid::{FieldArrow, FieldGrid};
