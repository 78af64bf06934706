use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type PriceTierPrimitive = u8;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PriceTier {
    Budget  = 1,
    Casual  = 2,
    Upscale = 3,
    Splurge = 4,
}

impl PriceTier {
    /// The usual dollar-sign shorthand, one `$` per tier.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Casual => "$$",
            Self::Upscale => "$$$",
            Self::Splurge => "$$$$",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid price tier primitive: {0}")]
pub struct InvalidPriceTierPrimitive(PriceTierPrimitive);

impl TryFrom<u8> for PriceTier {
    type Error = InvalidPriceTierPrimitive;
    fn try_from(from: PriceTierPrimitive) -> Result<Self, Self::Error> {
        Self::from_u8(from).ok_or(InvalidPriceTierPrimitive(from))
    }
}

impl From<PriceTier> for PriceTierPrimitive {
    fn from(from: PriceTier) -> Self {
        from.to_u8().expect("Price tier primitive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_roundtrip() {
        for tier in [
            PriceTier::Budget,
            PriceTier::Casual,
            PriceTier::Upscale,
            PriceTier::Splurge,
        ] {
            let primitive = PriceTierPrimitive::from(tier);
            assert_eq!(tier, PriceTier::try_from(primitive).unwrap());
        }
    }

    #[test]
    fn invalid_primitives() {
        assert!(PriceTier::try_from(0).is_err());
        assert!(PriceTier::try_from(5).is_err());
    }

    #[test]
    fn from_name() {
        use std::str::FromStr;
        assert_eq!(PriceTier::Budget, PriceTier::from_str("budget").unwrap());
        assert_eq!(PriceTier::Splurge, PriceTier::from_str("SPLURGE").unwrap());
        assert!(PriceTier::from_str("luxurious").is_err());
    }

    #[test]
    fn symbols() {
        assert_eq!("$", PriceTier::Budget.symbol());
        assert_eq!("$$$$", PriceTier::Splurge.symbol());
    }
}
