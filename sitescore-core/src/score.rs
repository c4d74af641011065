//! Five-criterion scoring of a candidate supermarket site.
//!
//! Each criterion maps a measurement onto `0.0..=10.0`:
//!
//! | Criterion | Measurement | Sub-score |
//! |-----------|-------------|-----------|
//! | Competitors | supermarkets within the competitor radius | `max(0, 10 - count)` |
//! | Correlated businesses | complementary kinds within the correlated radius | `min(10, count)` |
//! | Population density | density of the containing zone | `min(10, d / min * 10)` when `d > 0` |
//! | Accessibility | metres to the nearest qualifying road | `max(0, 10 - m / 1000 * 10)` |
//! | Income | income of the containing zone | `min(10, i / min * 10)` when `i >= min` |
//!
//! The final score is the unweighted mean of the five sub-scores. Business
//! distances are geodesic on the WGS84 ellipsoid and the radius is inclusive.

use std::cmp::Ordering;

use geo::{Distance, Geodesic};

use crate::{Business, BusinessKind, ScoreError, SiteLayers, SitePoint, ThresholdError};

const MAX_SCORE: f64 = 10.0;
const METRES_PER_KM: f64 = 1000.0;

/// Radii and minimums the scorer compares measurements against.
///
/// Every value is finite and strictly positive.
///
/// # Examples
/// ```
/// use sitescore_core::{ThresholdError, Thresholds};
///
/// let thresholds = Thresholds::new(2.0, 0.5, 4000.0, 1500.0);
/// assert!(thresholds.is_ok());
///
/// let invalid = Thresholds::new(1.0, 1.0, 0.0, 1000.0);
/// assert!(matches!(
///     invalid,
///     Err(ThresholdError::NotPositive { field: "min_density", .. })
/// ));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Thresholds {
    competitor_radius_km: f64,
    correlated_radius_km: f64,
    min_density: f64,
    min_income: f64,
}

impl Thresholds {
    /// Validate and bundle the thresholds.
    ///
    /// # Errors
    /// Returns [`ThresholdError::NotPositive`] naming the first value that is
    /// zero, negative, or not finite.
    pub fn new(
        competitor_radius_km: f64,
        correlated_radius_km: f64,
        min_density: f64,
        min_income: f64,
    ) -> Result<Self, ThresholdError> {
        Ok(Self {
            competitor_radius_km: positive("competitor_radius_km", competitor_radius_km)?,
            correlated_radius_km: positive("correlated_radius_km", correlated_radius_km)?,
            min_density: positive("min_density", min_density)?,
            min_income: positive("min_income", min_income)?,
        })
    }

    /// Radius, in kilometres, within which supermarkets count as competitors.
    #[must_use]
    pub const fn competitor_radius_km(&self) -> f64 {
        self.competitor_radius_km
    }

    /// Radius, in kilometres, within which correlated businesses count.
    #[must_use]
    pub const fn correlated_radius_km(&self) -> f64 {
        self.correlated_radius_km
    }

    /// Density, in inhabitants per km², that earns a full density score.
    #[must_use]
    pub const fn min_density(&self) -> f64 {
        self.min_density
    }

    /// Income below which the income score is zero.
    #[must_use]
    pub const fn min_income(&self) -> f64 {
        self.min_income
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            competitor_radius_km: 1.0,
            correlated_radius_km: 1.0,
            min_density: 5000.0,
            min_income: 1000.0,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ThresholdError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ThresholdError::NotPositive { field, value })
    }
}

/// The five scoring criteria in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// Supermarkets nearby; fewer is better.
    Competitors,
    /// Complementary businesses nearby; more is better.
    Correlated,
    /// Population density of the containing zone.
    Density,
    /// Distance to the nearest qualifying road.
    Accessibility,
    /// Income of the containing zone.
    Income,
}

impl Criterion {
    /// Every criterion, in display order.
    pub const ALL: [Self; 5] = [
        Self::Competitors,
        Self::Correlated,
        Self::Density,
        Self::Accessibility,
        Self::Income,
    ];

    /// Human-readable label.
    ///
    /// # Examples
    /// ```
    /// use sitescore_core::Criterion;
    ///
    /// assert_eq!(Criterion::Correlated.label(), "Correlated businesses");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Competitors => "Competitors",
            Self::Correlated => "Correlated businesses",
            Self::Density => "Population density",
            Self::Accessibility => "Accessibility",
            Self::Income => "Income per capita",
        }
    }

    /// Machine-readable key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Competitors => "competitors",
            Self::Correlated => "correlated",
            Self::Density => "density",
            Self::Accessibility => "accessibility",
            Self::Income => "income",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sub-scores of one site and their mean.
///
/// # Examples
/// ```
/// use sitescore_core::{Criterion, ScoreCard};
///
/// let card = ScoreCard::new(10.0, 5.0, 0.0, 10.0, 0.0);
/// assert_eq!(card.get(Criterion::Correlated), 5.0);
/// assert_eq!(card.final_score(), 5.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreCard {
    competitors: f64,
    correlated: f64,
    density: f64,
    accessibility: f64,
    income: f64,
    final_score: f64,
}

impl ScoreCard {
    /// Assemble a scorecard and compute its final score.
    #[expect(clippy::float_arithmetic, reason = "the final score is a mean")]
    #[must_use]
    pub fn new(
        competitors: f64,
        correlated: f64,
        density: f64,
        accessibility: f64,
        income: f64,
    ) -> Self {
        let final_score = (competitors + correlated + density + accessibility + income) / 5.0;
        Self {
            competitors,
            correlated,
            density,
            accessibility,
            income,
            final_score,
        }
    }

    /// Sub-score for `criterion`.
    #[must_use]
    pub const fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Competitors => self.competitors,
            Criterion::Correlated => self.correlated,
            Criterion::Density => self.density,
            Criterion::Accessibility => self.accessibility,
            Criterion::Income => self.income,
        }
    }

    /// Criteria paired with their sub-scores, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(move |criterion| (criterion, self.get(criterion)))
    }

    /// Mean of the five sub-scores.
    #[must_use]
    pub const fn final_score(&self) -> f64 {
        self.final_score
    }
}

fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

/// Competitor sub-score: ten minus one point per competitor, floored at zero.
///
/// # Examples
/// ```
/// use sitescore_core::competitor_score;
///
/// assert_eq!(competitor_score(0), 10.0);
/// assert_eq!(competitor_score(3), 7.0);
/// assert_eq!(competitor_score(15), 0.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "sub-scores are linear in the count")]
#[must_use]
pub fn competitor_score(count: usize) -> f64 {
    (MAX_SCORE - count_as_f64(count)).max(0.0)
}

/// Correlated-business sub-score: one point per business, capped at ten.
#[must_use]
pub fn correlated_score(count: usize) -> f64 {
    count_as_f64(count).min(MAX_SCORE)
}

/// Density sub-score.
///
/// Zero unless `density` is positive; otherwise the ratio to `min_density`
/// scaled to ten and capped there.
///
/// # Examples
/// ```
/// use sitescore_core::density_score;
///
/// assert_eq!(density_score(2500.0, 5000.0), 5.0);
/// assert_eq!(density_score(5000.0, 5000.0), 10.0);
/// assert_eq!(density_score(0.0, 5000.0), 0.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "sub-scores scale a ratio")]
#[must_use]
pub fn density_score(density: f64, min_density: f64) -> f64 {
    if density > 0.0 {
        (density / min_density * MAX_SCORE).min(MAX_SCORE)
    } else {
        0.0
    }
}

/// Accessibility sub-score: ten at the road, losing one point per 100 m and
/// reaching zero at 1 km.
///
/// # Examples
/// ```
/// use sitescore_core::accessibility_score;
///
/// assert_eq!(accessibility_score(0.0), 10.0);
/// assert_eq!(accessibility_score(250.0), 7.5);
/// assert_eq!(accessibility_score(1000.0), 0.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "sub-scores decay linearly with distance")]
#[must_use]
pub fn accessibility_score(distance_m: f64) -> f64 {
    (MAX_SCORE - distance_m / METRES_PER_KM * MAX_SCORE).max(0.0)
}

/// Income sub-score.
///
/// Zero below `min_income`; at or above it the ratio is scaled to ten and
/// capped, which in practice yields a full score.
///
/// # Examples
/// ```
/// use sitescore_core::income_score;
///
/// assert_eq!(income_score(999.0, 1000.0), 0.0);
/// assert_eq!(income_score(1000.0, 1000.0), 10.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "sub-scores scale a ratio")]
#[must_use]
pub fn income_score(income: f64, min_income: f64) -> f64 {
    if income >= min_income {
        (income / min_income * MAX_SCORE).min(MAX_SCORE)
    } else {
        0.0
    }
}

#[expect(clippy::float_arithmetic, reason = "radii are given in kilometres")]
fn radius_m(radius_km: f64) -> f64 {
    radius_km * METRES_PER_KM
}

fn distance_m(site: SitePoint, business: &Business) -> f64 {
    Geodesic.distance(site.to_geo(), business.location())
}

fn count_within<P>(site: SitePoint, businesses: &[Business], radius_km: f64, mut keep: P) -> usize
where
    P: FnMut(&Business) -> bool,
{
    let limit = radius_m(radius_km);
    businesses
        .iter()
        .filter(|business| keep(business))
        .filter(|business| distance_m(site, business) <= limit)
        .count()
}

/// A business found inside a search radius.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NearbyBusiness {
    /// Business name.
    pub name: String,
    /// Business category.
    pub kind: BusinessKind,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Geodesic distance from the site, in metres.
    pub distance_m: f64,
}

fn businesses_within<P>(
    site: SitePoint,
    businesses: &[Business],
    radius_km: f64,
    mut keep: P,
) -> Vec<NearbyBusiness>
where
    P: FnMut(&Business) -> bool,
{
    let limit = radius_m(radius_km);
    let mut nearby: Vec<NearbyBusiness> = businesses
        .iter()
        .filter(|business| keep(business))
        .filter_map(|business| {
            let distance = distance_m(site, business);
            (distance <= limit).then(|| NearbyBusiness {
                name: business.name.clone(),
                kind: business.kind.clone(),
                latitude: business.latitude,
                longitude: business.longitude,
                distance_m: distance,
            })
        })
        .collect();
    nearby.sort_by(|a, b| match a.distance_m.total_cmp(&b.distance_m) {
        Ordering::Equal => a.name.cmp(&b.name),
        unequal => unequal,
    });
    nearby
}

/// Competitors within `radius_km` of `site`, nearest first.
///
/// Ties on distance are broken by name.
///
/// # Examples
/// ```
/// use sitescore_core::{Business, BusinessKind, SitePoint, competitors_within};
///
/// let businesses = vec![
///     Business::new("Far", BusinessKind::Supermarket, 0.0, 0.5),
///     Business::new("Near", BusinessKind::Supermarket, 0.0, 0.001),
///     Business::new("Bakery", BusinessKind::Bakery, 0.0, 0.001),
/// ];
///
/// let nearby = competitors_within(SitePoint::new(0.0, 0.0), &businesses, 1.0);
/// let names: Vec<_> = nearby.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Near"]);
/// ```
#[must_use]
pub fn competitors_within(
    site: SitePoint,
    businesses: &[Business],
    radius_km: f64,
) -> Vec<NearbyBusiness> {
    businesses_within(site, businesses, radius_km, |business| {
        business.kind.is_competitor()
    })
}

/// Correlated businesses within `radius_km` of `site`, nearest first.
///
/// These are the businesses the correlated sub-score counts. Ties on
/// distance are broken by name.
#[must_use]
pub fn correlated_within(
    site: SitePoint,
    businesses: &[Business],
    radius_km: f64,
) -> Vec<NearbyBusiness> {
    businesses_within(site, businesses, radius_km, |business| {
        business.kind.is_correlated()
    })
}

/// The raw values each sub-score is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SiteMeasurements {
    /// Supermarkets within the competitor radius.
    pub competitors: usize,
    /// Correlated businesses within the correlated radius.
    pub correlated: usize,
    /// Density of the containing zone, or zero outside every zone.
    pub density: f64,
    /// Income of the containing zone, or zero outside every zone.
    pub income: f64,
    /// Planar distance to the nearest qualifying road, in metres.
    pub road_distance_m: f64,
}

impl SiteMeasurements {
    /// Whether the zone density reaches `thresholds.min_density()`.
    #[must_use]
    pub const fn meets_min_density(&self, thresholds: &Thresholds) -> bool {
        self.density >= thresholds.min_density()
    }

    /// Whether the zone income reaches `thresholds.min_income()`.
    #[must_use]
    pub const fn meets_min_income(&self, thresholds: &Thresholds) -> bool {
        self.income >= thresholds.min_income()
    }

    /// Map the measurements onto a scorecard.
    ///
    /// # Examples
    /// ```
    /// use sitescore_core::{Criterion, SiteMeasurements, Thresholds};
    ///
    /// let measurements = SiteMeasurements {
    ///     competitors: 2,
    ///     correlated: 3,
    ///     density: 2500.0,
    ///     income: 1200.0,
    ///     road_distance_m: 250.0,
    /// };
    /// let card = measurements.score(&Thresholds::default());
    /// assert_eq!(card.get(Criterion::Competitors), 8.0);
    /// assert_eq!(card.get(Criterion::Density), 5.0);
    /// assert_eq!(card.get(Criterion::Accessibility), 7.5);
    /// ```
    #[must_use]
    pub fn score(&self, thresholds: &Thresholds) -> ScoreCard {
        ScoreCard::new(
            competitor_score(self.competitors),
            correlated_score(self.correlated),
            density_score(self.density, thresholds.min_density()),
            accessibility_score(self.road_distance_m),
            income_score(self.income, thresholds.min_income()),
        )
    }
}

/// Take the five measurements for `site` from `layers`.
///
/// # Errors
/// Returns [`ScoreError::NoQualifyingRoads`] when the road layer is empty.
pub fn measure_site(
    site: SitePoint,
    layers: &SiteLayers,
    thresholds: &Thresholds,
) -> Result<SiteMeasurements, ScoreError> {
    let road_distance_m = layers
        .road_index()
        .nearest_distance(site)
        .ok_or(ScoreError::NoQualifyingRoads)?;
    let point = site.to_geo();

    let measurements = SiteMeasurements {
        competitors: count_within(
            site,
            layers.businesses(),
            thresholds.competitor_radius_km(),
            |business| business.kind.is_competitor(),
        ),
        correlated: count_within(
            site,
            layers.businesses(),
            thresholds.correlated_radius_km(),
            |business| business.kind.is_correlated(),
        ),
        density: layers.density().attribute_at(point),
        income: layers.income().attribute_at(point),
        road_distance_m,
    };

    log::debug!(
        "site ({}, {}): {} competitors, {} correlated, density {}, income {}, \
         nearest road {:.1} m",
        site.latitude,
        site.longitude,
        measurements.competitors,
        measurements.correlated,
        measurements.density,
        measurements.income,
        measurements.road_distance_m,
    );
    Ok(measurements)
}

/// Score `site` against `layers`.
///
/// # Errors
/// Returns [`ScoreError::NoQualifyingRoads`] when the road layer is empty,
/// since accessibility cannot be measured.
///
/// # Examples
/// ```
/// use geo::LineString;
/// use sitescore_core::{
///     Business, BusinessKind, Criterion, Road, RoadClass, RoadLayer, SiteLayers, SitePoint,
///     Thresholds, ZoneLayer, score_site,
/// };
///
/// let road = Road::new(
///     RoadClass::Secondary,
///     LineString::from(vec![(0.0, -0.01), (0.0, 0.01)]),
/// );
/// let layers = SiteLayers::new(
///     vec![Business::new("Rival", BusinessKind::Supermarket, 0.0, 0.001)],
///     ZoneLayer::default(),
///     ZoneLayer::default(),
///     road.into_iter().collect::<RoadLayer>(),
/// );
///
/// let card = score_site(SitePoint::new(0.0, 0.0), &layers, &Thresholds::default())?;
/// assert_eq!(card.get(Criterion::Competitors), 9.0);
/// assert_eq!(card.get(Criterion::Density), 0.0);
/// assert_eq!(card.get(Criterion::Accessibility), 10.0);
/// # Ok::<(), sitescore_core::ScoreError>(())
/// ```
pub fn score_site(
    site: SitePoint,
    layers: &SiteLayers,
    thresholds: &Thresholds,
) -> Result<ScoreCard, ScoreError> {
    measure_site(site, layers, thresholds).map(|measurements| measurements.score(thresholds))
}
