use std::path::PathBuf;

use pretty_assertions::assert_eq;
use road_paths::{
    error::{GraphError, InputError},
    graphs::graph_factory::{GraphFactory, RoadGraph},
    plan_route,
    search::{dijkstra::Dijkstra, report::RouteReport, travel_time::SpeedTable},
};

fn roads_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/roads.txt")
}

fn roads() -> RoadGraph {
    GraphFactory::from_file(&roads_file()).unwrap()
}

fn route(graph: &mut RoadGraph, source: &str, target: &str) -> Option<(u64, Vec<String>)> {
    Dijkstra::new(graph)
        .shortest_path(&source.to_string(), &target.to_string())
        .unwrap()
        .map(|path| (path.distance, path.vertices))
}

fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

#[test]
fn road_file_is_loaded_completely() {
    let graph = roads();
    assert_eq!(graph.count(), 23);
    assert_eq!(graph.number_of_edges(), 29);
    assert_eq!(graph.check_invariants(), Ok(()));
}

#[test]
fn interstate_corridor() {
    let mut graph = roads();
    assert_eq!(
        route(&mut graph, "Seattle", "Portland"),
        Some((
            181,
            labels(&["Seattle", "Tacoma", "Olympia", "Centralia", "Longview", "Portland"])
        ))
    );
}

#[test]
fn coast_route_through_the_valley() {
    let mut graph = roads();
    assert_eq!(
        route(&mut graph, "Portland", "Newport"),
        Some((138, labels(&["Portland", "Salem", "Corvallis", "Newport"])))
    );
    assert_eq!(
        route(&mut graph, "Newport", "Portland"),
        Some((138, labels(&["Newport", "Corvallis", "Salem", "Portland"])))
    );
}

#[test]
fn long_routes() {
    let mut graph = roads();
    assert_eq!(
        route(&mut graph, "Seattle", "Bend"),
        Some((
            359,
            labels(&[
                "Seattle",
                "Tacoma",
                "Olympia",
                "Centralia",
                "Longview",
                "Portland",
                "Salem",
                "Bend"
            ])
        ))
    );
    assert_eq!(
        route(&mut graph, "Medford", "Bend"),
        Some((213, labels(&["Medford", "Klamath Falls", "Bend"])))
    );
}

#[test]
fn other_component_is_unreachable() {
    let mut graph = roads();
    assert_eq!(route(&mut graph, "Seattle", "Spokane"), None);
    assert_eq!(
        route(&mut graph, "Spokane", "Coeur d'Alene"),
        Some((33, labels(&["Spokane", "Coeur d'Alene"])))
    );
}

#[test]
fn removing_places_and_roads_reroutes() {
    let mut graph = roads();

    graph.remove_vertex(&"Corvallis".to_string()).unwrap();
    assert_eq!(
        route(&mut graph, "Portland", "Newport"),
        Some((142, labels(&["Portland", "Tillamook", "Newport"])))
    );

    graph
        .remove_edge(&"Portland".to_string(), &"Longview".to_string())
        .unwrap();
    assert_eq!(
        route(&mut graph, "Seattle", "Portland"),
        Some((
            287,
            labels(&["Seattle", "Tacoma", "Olympia", "Aberdeen", "Astoria", "Portland"])
        ))
    );
    assert_eq!(graph.check_invariants(), Ok(()));
}

#[test]
fn report_for_interstate_trip() {
    let report = plan_route(&roads_file(), "Seattle", "Portland", &SpeedTable::default()).unwrap();

    assert_eq!(report.distance, Some(181));
    assert!((report.estimated_minutes - 181.0 / 65.0 * 60.0).abs() < 1e-9);
}

#[test]
fn report_mixes_road_speeds() {
    let mut graph = roads();
    let report = RouteReport::plan(
        &mut graph,
        &"Portland".to_string(),
        &"Newport".to_string(),
        &SpeedTable::default(),
    )
    .unwrap();

    let expected_hours = 47.0 / 65.0 + 37.0 / 55.0 + 54.0 / 55.0;
    assert!((report.estimated_minutes - expected_hours * 60.0).abs() < 1e-9);

    let custom = SpeedTable::new("US-20", 45.0, 60.0).unwrap();
    let report = RouteReport::plan(
        &mut graph,
        &"Portland".to_string(),
        &"Newport".to_string(),
        &custom,
    )
    .unwrap();
    let expected_hours = 47.0 / 60.0 + 37.0 / 60.0 + 54.0 / 45.0;
    assert!((report.estimated_minutes - expected_hours * 60.0).abs() < 1e-9);
}

#[test]
fn unknown_places_are_reported() {
    let err = plan_route(&roads_file(), "Boise", "Portland", &SpeedTable::default()).unwrap_err();
    assert!(matches!(
        err,
        InputError::Graph(GraphError::SourceNotFound { ref label }) if label == "Boise"
    ));

    let err = plan_route(&roads_file(), "Portland", "Boise", &SpeedTable::default()).unwrap_err();
    assert!(matches!(
        err,
        InputError::Graph(GraphError::DestinationNotFound { .. })
    ));
}

#[test]
fn traversals_cover_both_components() {
    let mut graph = roads();

    let mut depth_first = Vec::new();
    graph
        .depth_first(|label| depth_first.push(label.clone()))
        .unwrap();
    let mut breadth_first = Vec::new();
    graph
        .breadth_first(|label| breadth_first.push(label.clone()))
        .unwrap();

    assert_eq!(depth_first.len(), 23);
    assert_eq!(breadth_first.len(), 23);
    assert_eq!(depth_first[0], "Seattle");
    assert_eq!(breadth_first[..3].to_vec(), labels(&["Seattle", "Tacoma", "Olympia"]));
    assert_eq!(depth_first[21..].to_vec(), labels(&["Spokane", "Coeur d'Alene"]));
}
