/// A star rating between zero and five, half steps allowed but not enforced.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct StarRating(f64);

impl StarRating {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for StarRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<StarRating> for f64 {
    fn from(from: StarRating) -> Self {
        from.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_rating() {
        assert_eq!(StarRating::from(5.0), StarRating::from(7.3).clamp());
        assert_eq!(StarRating::from(0.0), StarRating::from(-2.0).clamp());
        assert_eq!(StarRating::from(4.5), StarRating::from(4.5).clamp());
    }

    #[test]
    fn validity() {
        assert!(StarRating::from(0.0).is_valid());
        assert!(StarRating::from(5.0).is_valid());
        assert!(!StarRating::from(5.1).is_valid());
        assert!(!StarRating::from(-0.1).is_valid());
        assert!(!StarRating::from(f64::NAN).is_valid());
    }
}
