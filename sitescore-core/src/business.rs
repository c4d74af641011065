//! Business records and the categories the scorer cares about.
//!
//! Supermarkets are competitors; a fixed set of complementary kinds counts
//! as correlated businesses. Everything else is carried as
//! [`BusinessKind::Other`] and ignored by the scorer.
//!
//! # Examples
//! ```
//! use sitescore_core::BusinessKind;
//!
//! let kind: BusinessKind = "bakery".parse().unwrap_or(BusinessKind::Supermarket);
//! assert!(kind.is_correlated());
//! assert_eq!(BusinessKind::ShoppingMall.to_string(), "shopping_mall");
//! ```

use std::convert::Infallible;

use geo::{Coord, Point};

/// Category tag of a business record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum BusinessKind {
    /// Supermarket; the only competitor kind.
    Supermarket,
    /// Pharmacy.
    Pharmacy,
    /// Shopping mall.
    ShoppingMall,
    /// Convenience store.
    ConvenienceStore,
    /// Bakery.
    Bakery,
    /// Restaurant.
    Restaurant,
    /// Liquor store.
    LiquorStore,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl BusinessKind {
    /// Kinds counted by the correlated-business criterion.
    pub const CORRELATED: [Self; 6] = [
        Self::Pharmacy,
        Self::ShoppingMall,
        Self::ConvenienceStore,
        Self::Bakery,
        Self::Restaurant,
        Self::LiquorStore,
    ];

    /// Return the snake-case tag for this kind.
    ///
    /// # Examples
    /// ```
    /// use sitescore_core::BusinessKind;
    ///
    /// assert_eq!(BusinessKind::LiquorStore.as_str(), "liquor_store");
    /// assert_eq!(BusinessKind::Other("gym".into()).as_str(), "gym");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Supermarket => "supermarket",
            Self::Pharmacy => "pharmacy",
            Self::ShoppingMall => "shopping_mall",
            Self::ConvenienceStore => "convenience_store",
            Self::Bakery => "bakery",
            Self::Restaurant => "restaurant",
            Self::LiquorStore => "liquor_store",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this kind competes with a new supermarket.
    #[must_use]
    pub const fn is_competitor(&self) -> bool {
        matches!(self, Self::Supermarket)
    }

    /// Whether this kind draws the footfall a supermarket benefits from.
    #[must_use]
    pub const fn is_correlated(&self) -> bool {
        matches!(
            self,
            Self::Pharmacy
                | Self::ShoppingMall
                | Self::ConvenienceStore
                | Self::Bakery
                | Self::Restaurant
                | Self::LiquorStore
        )
    }
}

impl std::fmt::Display for BusinessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BusinessKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "supermarket" => Self::Supermarket,
            "pharmacy" => Self::Pharmacy,
            "shopping_mall" => Self::ShoppingMall,
            "convenience_store" => Self::ConvenienceStore,
            "bakery" => Self::Bakery,
            "restaurant" => Self::Restaurant,
            "liquor_store" => Self::LiquorStore,
            _ => Self::Other(s.to_owned()),
        })
    }
}

impl From<String> for BusinessKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<BusinessKind> for String {
    fn from(kind: BusinessKind) -> Self {
        match kind {
            BusinessKind::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

/// A business listed near candidate sites.
///
/// # Examples
/// ```
/// use sitescore_core::{Business, BusinessKind};
///
/// let shop = Business::new("Super Bom", BusinessKind::Supermarket, -22.31, -49.05);
/// assert!(shop.kind.is_competitor());
/// assert_eq!(shop.location().x(), -49.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Business {
    /// Display name.
    pub name: String,
    /// Category tag.
    pub kind: BusinessKind,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Business {
    /// Construct a business record.
    pub fn new(name: impl Into<String>, kind: BusinessKind, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            latitude,
            longitude,
        }
    }

    /// Location as a `geo` point with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn location(&self) -> Point<f64> {
        Point(Coord {
            x: self.longitude,
            y: self.latitude,
        })
    }
}
