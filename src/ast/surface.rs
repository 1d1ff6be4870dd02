//! Surface leaves.
//!
//! The parser hands surfaces over either as a bare signed number (the sign
//! carries the sense) or as a full description with the surface card data.
//! Classification never looks inside either form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a surface a cell lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sense {
    #[default]
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
}

impl Sense {
    /// Sense encoded by the sign of an MCNP surface number.
    pub fn of(signed_id: i64) -> Self {
        if signed_id < 0 {
            Sense::Negative
        } else {
            Sense::Positive
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Sense::Positive => Sense::Negative,
            Sense::Negative => Sense::Positive,
        }
    }
}

/// A surface as described on an MCNP surface card.
///
/// # Examples
///
/// ```rust
/// use t4_geom_convert::ast::{Sense, SurfaceDescription};
/// let so = SurfaceDescription::new(7, Sense::Negative, "SO", vec![5.0]);
/// assert_eq!(so.signed_id(), -7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDescription {
    pub id: u32,
    #[serde(default)]
    pub sense: Sense,
    #[serde(default)]
    pub mnemonic: String,
    #[serde(default)]
    pub coefficients: Vec<f64>,
}

impl SurfaceDescription {
    pub fn new(
        id: u32,
        sense: Sense,
        mnemonic: impl Into<String>,
        coefficients: Vec<f64>,
    ) -> Self {
        Self {
            id,
            sense,
            mnemonic: mnemonic.into(),
            coefficients,
        }
    }

    /// The surface number with the sense folded into its sign.
    pub fn signed_id(&self) -> i64 {
        let id = i64::from(self.id);
        match self.sense {
            Sense::Positive => id,
            Sense::Negative => -id,
        }
    }
}

/// A terminal naming a physical surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceLeaf {
    /// Bare MCNP surface number, negative for the inner side.
    Id(i64),
    Described(SurfaceDescription),
}

impl SurfaceLeaf {
    pub fn signed_id(&self) -> i64 {
        match self {
            SurfaceLeaf::Id(id) => *id,
            SurfaceLeaf::Described(desc) => desc.signed_id(),
        }
    }

    pub fn sense(&self) -> Sense {
        match self {
            SurfaceLeaf::Id(id) => Sense::of(*id),
            SurfaceLeaf::Described(desc) => desc.sense,
        }
    }
}

impl fmt::Display for SurfaceLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed_id())
    }
}
