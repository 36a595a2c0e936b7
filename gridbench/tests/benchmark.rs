use std::fs;

use gridbench::{
    BenchConfig, BenchError, BenchmarkRunner, CsvDirSink, DirMapSource, MapSpec, NO_PATH_COST,
    TrialHarness, generate_maps, sample_endpoints,
};
use gridbench_core::{DiagonalMovement, WeightedGrid, read_grid};
use gridbench_paths::{AStarSearch, DijkstraSearch, PathCostMode, SearchAlgorithm};
use gridbench_terrain::TerrainConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn parse_line(text: &str) -> Vec<f64> {
    text.split(',').map(|v| v.parse().unwrap()).collect()
}

#[test]
fn generate_run_and_export() {
    let root = tempfile::tempdir().unwrap();
    let maps_dir = root.path().join("maps");
    let out_dir = root.path().join("output");

    let specs: Vec<MapSpec> = ["alpha=30x20", "beta=16x16"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    generate_maps(&maps_dir, &specs, &TerrainConfig::default()).unwrap();

    let config = BenchConfig {
        maps: vec!["alpha".into(), "beta".into()],
        trial_count: 30,
        seed: Some(2024),
        ..BenchConfig::default()
    };
    config.validate().unwrap();
    let algorithms = config.build_algorithms();

    let mut runner = BenchmarkRunner::new(
        CsvDirSink::new(&out_dir),
        StdRng::seed_from_u64(2024),
    );
    let reports = runner.run(
        &mut DirMapSource::new(&maps_dir),
        &config.maps,
        &algorithms,
        config.trial_count,
    );
    assert!(reports.iter().all(|r| r.is_ok()), "{reports:?}");

    for map in ["alpha", "beta"] {
        let astar = out_dir.join(map).join("A-Star");
        let dijkstra = out_dir.join(map).join("Dijkstra");
        for name in ["time.csv", "distance.csv", "path_distance.csv"] {
            let text = fs::read_to_string(astar.join(name)).unwrap();
            assert!(!text.ends_with('\n'));
            assert_eq!(parse_line(&text).len(), 30, "{map}/{name}");
        }
        // Same endpoints, same optimal costs.
        for name in ["distance.csv", "path_distance.csv"] {
            assert_eq!(
                fs::read_to_string(astar.join(name)).unwrap(),
                fs::read_to_string(dijkstra.join(name)).unwrap(),
            );
        }
        let times = parse_line(&fs::read_to_string(astar.join("time.csv")).unwrap());
        assert!(times.iter().all(|&t| t >= 0.0));
        let costs = parse_line(&fs::read_to_string(astar.join("path_distance.csv")).unwrap());
        assert!(costs.iter().all(|&c| c == NO_PATH_COST || c > 0.0));
    }
}

#[test]
fn blocked_center_scenario() {
    let mut grid = read_grid("111\n101\n111\n".as_bytes()).unwrap();
    let start = grid.node(0, 0).unwrap();
    let end = grid.node(2, 2).unwrap();
    let movement = DiagonalMovement::IfAtMostOneObstacle;
    let algorithms: [Box<dyn SearchAlgorithm>; 2] = [
        Box::new(AStarSearch::new(movement)),
        Box::new(DijkstraSearch::new(movement)),
    ];
    for algo in &algorithms {
        grid.cleanup();
        let result = algo.find_path(start, end, &mut grid).unwrap();
        assert_eq!(result.path.len(), 4, "{}", algo.name());
        assert_eq!(result.path[0], start);
        assert_eq!(result.path[3], end);
        assert!(result.path.iter().all(|c| c.walkable()));
        assert_eq!(result.cost(PathCostMode::Full), 3.0);

        let overlay = grid.burn_path(&result.path, 999);
        let marked = overlay.iter().flatten().filter(|&&w| w == 999).count();
        assert_eq!(marked, 4);
        assert_eq!(overlay[1][1], 0);
    }
}

#[test]
fn single_walkable_cell_scenario() {
    let grid = read_grid("000\n030\n000\n".as_bytes()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        sample_endpoints(&grid, &mut rng),
        Err(BenchError::InsufficientWalkableCells { walkable: 1 })
    ));
    assert!(TrialHarness::sample(&grid, 10, &mut rng).is_err());
}

#[test]
fn open_five_by_five_scenario() {
    let mut grid = WeightedGrid::filled(5, 5, 1).unwrap();
    let start = grid.node(0, 0).unwrap();
    let end = grid.node(4, 4).unwrap();
    let series = TrialHarness::from_endpoints(vec![(start, end)])
        .run_trials(&mut grid, &AStarSearch::new(DiagonalMovement::Always))
        .unwrap();
    assert_eq!(series.distances, [32f64.sqrt()]);
    // Four diagonal steps of weight 1.
    assert_eq!(series.path_costs, [4.0]);
}
