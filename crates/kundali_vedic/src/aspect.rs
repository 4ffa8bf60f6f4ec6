//! Angular aspects and a simplified sign-position strength.

use tracing::warn;

/// Default orb for conjunction, opposition, trine and square.
pub const DEFAULT_ORB_DEG: f64 = 8.0;

/// Default orb for sextile.
pub const SEXTILE_ORB_DEG: f64 = 6.0;

/// Exaltation reference degree used when a sign number is out of range.
pub const DEFAULT_EXALTATION_DEG: f64 = 15.0;

/// Major aspects between two longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspects in order of increasing angle.
pub const ALL_ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
];

impl Aspect {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }

    /// Exact separation of the aspect, degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn default_orb_deg(self) -> f64 {
        match self {
            Self::Sextile => SEXTILE_ORB_DEG,
            _ => DEFAULT_ORB_DEG,
        }
    }

    /// Whether two longitudes form this aspect within `orb_deg`.
    ///
    /// The aspect holds for the separation in either direction, so a trine
    /// matches 120° and 240°.
    pub fn holds(self, lon1: f64, lon2: f64, orb_deg: f64) -> bool {
        let diff = (lon1 - lon2).abs();
        let angle = self.angle_deg();
        [angle, 360.0 - angle].into_iter().any(|a| {
            let off = (diff - a)
                .abs()
                .min((diff - a + 360.0).abs())
                .min((diff - a - 360.0).abs());
            off <= orb_deg
        })
    }
}

/// Shortest arc between two longitudes, degrees in [0, 180].
pub fn angular_distance(lon1: f64, lon2: f64) -> f64 {
    let diff = (lon1 - lon2).abs();
    diff.min(360.0 - diff)
}

pub fn is_conjunction(lon1: f64, lon2: f64, orb_deg: f64) -> bool {
    angular_distance(lon1, lon2) <= orb_deg
}

pub fn is_opposition(lon1: f64, lon2: f64, orb_deg: f64) -> bool {
    Aspect::Opposition.holds(lon1, lon2, orb_deg)
}

pub fn is_trine(lon1: f64, lon2: f64, orb_deg: f64) -> bool {
    Aspect::Trine.holds(lon1, lon2, orb_deg)
}

pub fn is_square(lon1: f64, lon2: f64, orb_deg: f64) -> bool {
    Aspect::Square.holds(lon1, lon2, orb_deg)
}

pub fn is_sextile(lon1: f64, lon2: f64, orb_deg: f64) -> bool {
    Aspect::Sextile.holds(lon1, lon2, orb_deg)
}

/// Every aspect formed between two longitudes at default orbs.
pub fn aspects_between(lon1: f64, lon2: f64) -> Vec<Aspect> {
    ALL_ASPECTS
        .into_iter()
        .filter(|a| a.holds(lon1, lon2, a.default_orb_deg()))
        .collect()
}

/// Reference exaltation degree within a 1-based sign.
pub fn exaltation_degree(sign: u8) -> f64 {
    match sign {
        1 => 10.0,
        2 => 27.0,
        3 => 28.0,
        4 => 5.0,
        5 => 10.0,
        6 => 15.0,
        7 => 20.0,
        8 => 28.0,
        9 => 5.0,
        10 => 28.0,
        11 => 20.0,
        12 => 27.0,
        _ => {
            warn!(sign, "no exaltation degree for sign number, using default");
            DEFAULT_EXALTATION_DEG
        }
    }
}

/// Strength from distance to the sign's exaltation degree:
/// 100 − 2·|deg − exalt|, clamped to [0, 100].
pub fn planetary_strength(longitude: f64, sign: u8) -> f64 {
    let degree = longitude.rem_euclid(30.0);
    let strength = 100.0 - (degree - exaltation_degree(sign)).abs() * 2.0;
    strength.clamp(0.0, 100.0)
}
