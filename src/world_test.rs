use super::*;

const SQUARE: &str = "[[0,0],[10,0],[10,10],[0,10],[0,0]]";

fn feature(geometry: &str) -> String {
    format!(r#"{{"type":"Feature","properties":{{"name":"x"}},"geometry":{geometry}}}"#)
}

#[test]
fn feature_collection_with_polygon_and_multipolygon() {
    let text = format!(
        r#"{{"type":"FeatureCollection","features":[{},{}]}}"#,
        feature(&format!(r#"{{"type":"Polygon","coordinates":[{SQUARE}]}}"#)),
        feature(&format!(r#"{{"type":"MultiPolygon","coordinates":[[{SQUARE}],[{SQUARE},{SQUARE}]]}}"#)),
    );
    let world = WorldMap::parse(&text).unwrap();
    assert_eq!(world.countries.len(), 2);
    assert_eq!(world.countries[0].rings.len(), 1);
    assert_eq!(world.countries[1].rings.len(), 3);
    assert_eq!(world.countries[0].rings[0][1], (10.0, 0.0));
}

#[test]
fn bare_feature_is_accepted() {
    let text = feature(&format!(r#"{{"type":"Polygon","coordinates":[{SQUARE}]}}"#));
    let world = WorldMap::parse(&text).unwrap();
    assert_eq!(world.countries.len(), 1);
}

#[test]
fn bare_geometry_is_accepted() {
    let text = format!(r#"{{"type":"Polygon","coordinates":[{SQUARE}]}}"#);
    let world = WorldMap::parse(&text).unwrap();
    assert_eq!(world.countries.len(), 1);
}

#[test]
fn geometry_collection_is_flattened() {
    let text = format!(
        r#"{{"type":"GeometryCollection","geometries":[{{"type":"Polygon","coordinates":[{SQUARE}]}},{{"type":"Point","coordinates":[1,2]}},{{"type":"Polygon","coordinates":[{SQUARE}]}}]}}"#
    );
    let world = WorldMap::parse(&text).unwrap();
    assert_eq!(world.countries.len(), 2);
}

#[test]
fn lines_points_and_null_geometry_are_ignored() {
    let text = format!(
        r#"{{"type":"FeatureCollection","features":[{},{},{{"type":"Feature","properties":null,"geometry":null}}]}}"#,
        feature(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#),
        feature(r#"{"type":"Point","coordinates":[0,0]}"#),
    );
    let world = WorldMap::parse(&text).unwrap();
    assert!(world.countries.is_empty());
}

#[test]
fn degenerate_rings_are_dropped() {
    let text = r#"{"type":"Polygon","coordinates":[[[0,0],[1,1]]]}"#;
    let world = WorldMap::parse(text).unwrap();
    assert!(world.countries.is_empty());
}

#[test]
fn invalid_geojson_is_an_error() {
    assert!(matches!(WorldMap::parse("{}"), Err(MapError::GeoJson(_))));
    assert!(matches!(WorldMap::parse("not json"), Err(MapError::GeoJson(_))));
}

#[test]
fn project_preserves_structure() {
    let text = format!(r#"{{"type":"MultiPolygon","coordinates":[[{SQUARE},{SQUARE}]]}}"#);
    let world = WorldMap::parse(&text).unwrap();
    let projection = Projection::fit(&[(0.0, 0.0), (10.0, 10.0)], 200.0, 200.0);
    let shapes = world.project(&projection);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].rings.len(), 2);
    assert_eq!(shapes[0].rings[0].len(), 5);
    assert_eq!(shapes[0].rings[0][0], projection.project(0.0, 0.0));
}
