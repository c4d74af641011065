//! End-to-end scoring of a site at the origin against hand-built layers.

use geo::{LineString, MultiPolygon, Rect};
use rstest::{fixture, rstest};
use sitescore_core::{
    Business, BusinessKind, Criterion, Road, RoadClass, RoadLayer, ScoreError, SiteLayers,
    SitePoint, Thresholds, Zone, ZoneKey, ZoneLayer, projection::EARTH_RADIUS_M, score_site,
};

const ORIGIN: SitePoint = SitePoint::new(0.0, 0.0);

#[expect(clippy::float_arithmetic, reason = "converts metres to degrees")]
fn degrees_for(metres: f64) -> f64 {
    (metres / EARTH_RADIUS_M).to_degrees()
}

fn zone_around_origin(value: Option<f64>) -> ZoneLayer {
    let rect = Rect::new((-0.5, -0.5), (0.5, 0.5));
    ZoneLayer::new(vec![Zone::new(
        ZoneKey(0),
        MultiPolygon::new(vec![rect.to_polygon()]),
        value,
    )])
}

fn road_east_of_origin(metres: f64) -> RoadLayer {
    let x = degrees_for(metres);
    let line = LineString::from(vec![(x, -0.05), (x, 0.05)]);
    match Road::new(RoadClass::Secondary, line) {
        Ok(road) => std::iter::once(road).collect(),
        Err(err) => panic!("valid road rejected: {err}"),
    }
}

#[expect(clippy::float_arithmetic, reason = "spreads businesses along a meridian")]
fn cluster(kind: &BusinessKind, count: u32) -> Vec<Business> {
    (0..count)
        .map(|n| {
            let latitude = f64::from(n) * 0.000_05;
            Business::new(format!("{kind} {n}"), kind.clone(), latitude, 0.0)
        })
        .collect()
}

fn layers(businesses: Vec<Business>, density: ZoneLayer, income: ZoneLayer) -> SiteLayers {
    SiteLayers::new(businesses, density, income, road_east_of_origin(0.0))
}

fn score(layers: &SiteLayers) -> sitescore_core::ScoreCard {
    match score_site(ORIGIN, layers, &Thresholds::default()) {
        Ok(card) => card,
        Err(err) => panic!("scoring failed: {err}"),
    }
}

/// Layers with nothing but a road through the site.
#[fixture]
fn bare_layers() -> SiteLayers {
    layers(Vec::new(), ZoneLayer::default(), ZoneLayer::default())
}

#[rstest]
fn bare_site_scores_only_competitors_and_access(bare_layers: SiteLayers) {
    let card = score(&bare_layers);

    assert_eq!(card.get(Criterion::Competitors), 10.0);
    assert_eq!(card.get(Criterion::Correlated), 0.0);
    assert_eq!(card.get(Criterion::Density), 0.0);
    assert_eq!(card.get(Criterion::Accessibility), 10.0);
    assert_eq!(card.get(Criterion::Income), 0.0);
    assert_eq!(card.final_score(), 4.0);
}

#[rstest]
fn no_competitors_and_twelve_correlated_score_full_marks() {
    let site = layers(
        cluster(&BusinessKind::Restaurant, 12),
        ZoneLayer::default(),
        ZoneLayer::default(),
    );
    let card = score(&site);

    assert_eq!(card.get(Criterion::Competitors), 10.0);
    assert_eq!(card.get(Criterion::Correlated), 10.0);
}

#[rstest]
fn fifteen_competitors_score_zero() {
    let site = layers(
        cluster(&BusinessKind::Supermarket, 15),
        ZoneLayer::default(),
        ZoneLayer::default(),
    );
    assert_eq!(score(&site).get(Criterion::Competitors), 0.0);
}

#[rstest]
fn businesses_outside_the_radius_are_ignored() {
    let far = degrees_for(1500.0);
    let site = layers(
        vec![
            Business::new("Far Mart", BusinessKind::Supermarket, 0.0, far),
            Business::new("Far Pharmacy", BusinessKind::Pharmacy, 0.0, -far),
            Business::new("Gym", BusinessKind::Other("gym".into()), 0.0, 0.0),
        ],
        ZoneLayer::default(),
        ZoneLayer::default(),
    );
    let card = score(&site);

    assert_eq!(card.get(Criterion::Competitors), 10.0);
    assert_eq!(card.get(Criterion::Correlated), 0.0);
}

#[rstest]
#[case(Some(5000.0), 10.0)]
#[case(Some(2500.0), 5.0)]
#[case(Some(20_000.0), 10.0)]
#[case(None, 0.0)]
fn density_scores_against_minimum(#[case] density: Option<f64>, #[case] expected: f64) {
    let site = layers(Vec::new(), zone_around_origin(density), ZoneLayer::default());
    assert_eq!(score(&site).get(Criterion::Density), expected);
}

#[rstest]
#[case(Some(999.0), 0.0)]
#[case(Some(1000.0), 10.0)]
#[case(Some(4000.0), 10.0)]
#[case(None, 0.0)]
fn income_is_gated_by_minimum(#[case] income: Option<f64>, #[case] expected: f64) {
    let site = layers(Vec::new(), ZoneLayer::default(), zone_around_origin(income));
    assert_eq!(score(&site).get(Criterion::Income), expected);
}

// The road is placed by degree conversion, so these cases carry a tolerance.
// `accessibility_score(1000.0) == 0.0` in the score unit tests pins the exact
// boundary.
#[rstest]
#[case(1000.0, 0.0)]
#[case(2000.0, 0.0)]
#[case(400.0, 6.0)]
#[expect(clippy::float_arithmetic, reason = "compares projected distances")]
fn accessibility_follows_road_distance(#[case] metres: f64, #[case] expected: f64) {
    let site = SiteLayers::new(
        Vec::new(),
        ZoneLayer::default(),
        ZoneLayer::default(),
        road_east_of_origin(metres),
    );
    let actual = score(&site).get(Criterion::Accessibility);
    assert!((actual - expected).abs() < 1e-6, "got {actual}");
}

#[rstest]
fn empty_road_layer_is_an_error() {
    let site = SiteLayers::new(
        Vec::new(),
        ZoneLayer::default(),
        ZoneLayer::default(),
        RoadLayer::default(),
    );
    assert_eq!(
        score_site(ORIGIN, &site, &Thresholds::default()),
        Err(ScoreError::NoQualifyingRoads)
    );
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "recomputes the mean")]
fn final_score_is_the_mean() {
    let site = layers(
        cluster(&BusinessKind::Bakery, 5),
        zone_around_origin(Some(5000.0)),
        zone_around_origin(Some(1500.0)),
    );
    let card = score(&site);
    let sum: f64 = card.iter().map(|(_, value)| value).sum();

    assert_eq!(card.final_score(), sum / 5.0);
    assert_eq!(card.final_score(), 9.0);
}

#[rstest]
fn wider_radius_counts_more_competitors() {
    let near = degrees_for(500.0);
    let far = degrees_for(1800.0);
    let site = layers(
        vec![
            Business::new("Near", BusinessKind::Supermarket, 0.0, near),
            Business::new("Far", BusinessKind::Supermarket, 0.0, far),
        ],
        ZoneLayer::default(),
        ZoneLayer::default(),
    );
    let Ok(wide) = Thresholds::new(2.0, 1.0, 5000.0, 1000.0) else {
        panic!("valid thresholds rejected");
    };

    assert_eq!(score(&site).get(Criterion::Competitors), 9.0);
    let Ok(card) = score_site(ORIGIN, &site, &wide) else {
        panic!("scoring failed");
    };
    assert_eq!(card.get(Criterion::Competitors), 8.0);
}
