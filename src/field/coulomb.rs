use glam::Vec2;

/// Coulomb constant times the unit charge magnitude. Every charge in the
/// model carries the same magnitude; only the polarity differs.
pub const COULOMB_K: f32 = 1.0;

/// Polarity of a unit point charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Field points away from the charge.
    Positive,
    /// Field points toward the charge.
    Negative,
}

impl Polarity {
    /// Signed unit multiplier (+1 or −1).
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// The opposite polarity.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// A fixed unit point charge embedded in the z = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    /// Position in world units.
    pub position: Vec2,
    /// Charge polarity.
    pub polarity: Polarity,
}

impl PointCharge {
    /// Charge at `(x, y)` with the given polarity.
    #[must_use]
    pub fn new(x: f32, y: f32, polarity: Polarity) -> Self {
        Self {
            position: Vec2::new(x, y),
            polarity,
        }
    }

    /// Same position, opposite polarity.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            polarity: self.polarity.flipped(),
            ..self
        }
    }
}

/// The default configuration: a positive charge at (+5, 0) and a negative
/// charge at (−5, 0).
#[must_use]
pub fn dipole() -> Vec<PointCharge> {
    vec![
        PointCharge::new(5.0, 0.0, Polarity::Positive),
        PointCharge::new(-5.0, 0.0, Polarity::Negative),
    ]
}

/// Net electric field at `(x, y)`, summed over all charges.
///
/// Querying exactly on top of a charge yields a non-finite vector. The
/// result is not clamped; callers choose sample points that avoid charges.
#[must_use]
pub fn electric_field(charges: &[PointCharge], x: f32, y: f32) -> Vec2 {
    let mut e = Vec2::ZERO;
    for c in charges {
        let d = Vec2::new(x, y) - c.position;
        let r = d.length();
        e += d * (c.polarity.sign() * COULOMB_K / (r * r * r));
    }
    e
}

/// Electrostatic potential at `(x, y)`, summed over all charges.
///
/// Same singularity behavior as [`electric_field`]: a coincident query
/// returns an infinite value.
#[must_use]
pub fn potential(charges: &[PointCharge], x: f32, y: f32) -> f32 {
    charges
        .iter()
        .map(|c| {
            let r = (Vec2::new(x, y) - c.position).length();
            c.polarity.sign() * COULOMB_K / r
        })
        .sum()
}
