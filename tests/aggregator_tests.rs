use pretty_assertions::assert_eq;
use xhprof_callgraph::aggregator::{average, compute_nearest_family, flatten, subtract, MetricField};
use xhprof_callgraph::parser::{Call, EdgeKey, NearestFamily, PairCall, PairCallMap};
use xhprof_callgraph::utils::ProfileError;

// ============================================================================
// SHARED TEST HELPERS
// ============================================================================

fn map(edges: &[(&str, i64, f64, f64, f64)]) -> PairCallMap {
    edges
        .iter()
        .map(|(key, count, wall, cpu, mem)| (*key, PairCall::new(*count, *wall, *cpu, *mem)))
        .collect()
}

/// main() -> foo -> bar, with (count, wall, cpu, memory) per edge
fn three_level_map() -> PairCallMap {
    map(&[
        ("main()", 1, 1000.0, 400.0, 1500.0),
        ("main()==>foo", 2, 500.0, 200.0, 700.0),
        ("foo==>bar", 10, 200.0, 100.0, 300.0),
    ])
}

fn wider_map() -> PairCallMap {
    map(&[
        ("main()", 1, 5000.0, 3000.0, 9000.0),
        ("main()==>router", 1, 4000.0, 2500.0, 6000.0),
        ("main()==>log", 3, 300.0, 100.0, 200.0),
        ("router==>db_query", 12, 2500.0, 600.0, 1200.0),
        ("router==>render", 1, 900.0, 850.0, 3000.0),
        ("render==>log", 5, 120.0, 60.0, 80.0),
        ("db_query==>log", 12, 240.0, 30.0, 96.0),
    ])
}

// ============================================================================
// FLATTEN
// ============================================================================

#[test]
fn test_flatten_three_level_fixture() {
    let expected = vec![
        Call {
            name: "main()".to_string(),
            count: 1,
            wall_time: 1000.0,
            exclusive_wall_time: 500.0,
            cpu_time: 400.0,
            exclusive_cpu_time: 200.0,
            memory: 1500.0,
            exclusive_memory: 800.0,
            io_time: 600.0,
            exclusive_io_time: 300.0,
        },
        Call {
            name: "foo".to_string(),
            count: 2,
            wall_time: 500.0,
            exclusive_wall_time: 300.0,
            cpu_time: 200.0,
            exclusive_cpu_time: 100.0,
            memory: 700.0,
            exclusive_memory: 400.0,
            io_time: 300.0,
            exclusive_io_time: 200.0,
        },
        Call {
            name: "bar".to_string(),
            count: 10,
            wall_time: 200.0,
            exclusive_wall_time: 200.0,
            cpu_time: 100.0,
            exclusive_cpu_time: 100.0,
            memory: 300.0,
            exclusive_memory: 300.0,
            io_time: 100.0,
            exclusive_io_time: 100.0,
        },
    ];

    let mut profile = flatten(&three_level_map());
    profile.sort_by("WallTime").unwrap();

    assert_eq!(profile.main().unwrap().wall_time, 1000.0);
    assert_eq!(profile.calls, expected);
}

#[test]
fn test_flatten_conservation() {
    let edges = wider_map();
    let profile = flatten(&edges);

    for call in &profile.calls {
        let outgoing: PairCall = edges
            .iter()
            .filter(|(key, _)| EdgeKey::parse(key).parent == Some(call.name.as_str()))
            .fold(PairCall::default(), |acc, (_, c)| acc + *c);

        assert_eq!(call.wall_time, call.exclusive_wall_time + outgoing.wall_time, "{}", call.name);
        assert_eq!(call.cpu_time, call.exclusive_cpu_time + outgoing.cpu_time, "{}", call.name);
        assert_eq!(call.memory, call.exclusive_memory + outgoing.memory, "{}", call.name);
    }
}

#[test]
fn test_flatten_io_time_identity() {
    let profile = flatten(&wider_map());

    for call in &profile.calls {
        assert_eq!(call.io_time, call.wall_time - call.cpu_time);
        assert_eq!(call.exclusive_io_time, call.exclusive_wall_time - call.exclusive_cpu_time);
    }
}

#[test]
fn test_flatten_every_name_once() {
    let profile = flatten(&wider_map());

    let mut names: Vec<&str> = profile.calls.iter().map(|c| c.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["db_query", "log", "main()", "render", "router"]);

    let log = profile.get("log").unwrap();
    assert_eq!(log.count, 20);
    assert_eq!(log.wall_time, 660.0);
}

#[test]
fn test_flatten_multi_separator_key() {
    // Split on the first separator: parent "a", child "b==>c"
    let edges = map(&[("main()", 1, 10.0, 0.0, 0.0), ("main()==>a==>b", 1, 4.0, 0.0, 0.0)]);
    let profile = flatten(&edges);

    assert!(profile.get("a==>b").is_some());
    assert_eq!(profile.get("main()").unwrap().exclusive_wall_time, 6.0);
}

#[test]
fn test_sort_by_every_field() {
    let mut profile = flatten(&wider_map());
    for field in MetricField::ALL {
        profile.sort_by(field.as_str()).unwrap();
        let values: Vec<f64> = profile.calls.iter().map(|c| c.metric(field)).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]), "{} not descending", field);
    }
}

#[test]
fn test_sort_by_invalid_field() {
    let mut profile = flatten(&three_level_map());
    assert_eq!(
        profile.sort_by("Latency"),
        Err(ProfileError::InvalidField("Latency".to_string()))
    );
}

// ============================================================================
// AVERAGE
// ============================================================================

#[test]
fn test_average_three_snapshots() {
    let expected = map(&[
        ("main()", 1, 600.0, 300.0, 700.0),
        ("main()==>foo", 2, 300.0, 170.0, 500.0),
        ("foo==>bar", 3, 100.0, 50.0, 100.0),
    ]);

    let m1 = map(&[
        ("main()", 1, 800.0, 400.0, 1000.0),
        ("main()==>foo", 2, 600.0, 300.0, 900.0),
        ("foo==>bar", 10, 300.0, 150.0, 300.0),
    ]);
    let m2 = map(&[("main()", 1, 300.0, 100.0, 200.0)]);
    let m3 = map(&[
        ("main()", 1, 700.0, 400.0, 900.0),
        ("main()==>foo", 4, 300.0, 210.0, 600.0),
    ]);

    let res = average([&m1, &m2, &m3]).unwrap();
    assert_eq!(res, expected);
}

#[test]
fn test_average_singleton_is_identity() {
    let m = wider_map();
    assert_eq!(average([&m]).unwrap(), m);
}

#[test]
fn test_average_empty_input() {
    let none: Vec<PairCallMap> = vec![];
    assert_eq!(average(&none), Err(ProfileError::EmptyInput));
}

#[test]
fn test_average_key_union() {
    let a = map(&[("main()", 1, 1.0, 1.0, 1.0)]);
    let b = map(&[("main()==>x", 1, 1.0, 1.0, 1.0)]);
    let c = map(&[("x==>y", 1, 1.0, 1.0, 1.0)]);

    let res = average([&a, &b, &c]).unwrap();
    let mut keys: Vec<&String> = res.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["main()", "main()==>x", "x==>y"]);
}

// ============================================================================
// SUBTRACT
// ============================================================================

#[test]
fn test_subtract_fixture() {
    let expected = map(&[
        ("main()", 0, 500.0, 300.0, 800.0),
        ("main()==>foo", 2, 600.0, 300.0, 900.0),
        ("foo==>bar", -10, -300.0, -150.0, -300.0),
    ]);

    let m1 = map(&[
        ("main()", 1, 800.0, 400.0, 1000.0),
        ("main()==>foo", 2, 600.0, 300.0, 900.0),
    ]);
    let m2 = map(&[
        ("main()", 1, 300.0, 100.0, 200.0),
        ("foo==>bar", 10, 300.0, 150.0, 300.0),
    ]);

    let diff = m1.subtract(&m2);
    assert_eq!(diff, expected);
}

#[test]
fn test_subtract_antisymmetric() {
    let m1 = wider_map();
    let m2 = three_level_map();

    let forward = subtract(&m1, &m2);
    let backward = subtract(&m2, &m1);

    let negated: PairCallMap = forward.iter().map(|(k, c)| (k.clone(), -*c)).collect();
    assert_eq!(negated, backward);
}

#[test]
fn test_subtract_self_is_zero() {
    let m = wider_map();
    let diff = subtract(&m, &m);

    assert_eq!(diff.len(), m.len());
    assert!(diff.iter().all(|(_, c)| *c == PairCall::default()));
}

// ============================================================================
// NEAREST FAMILY
// ============================================================================

#[test]
fn test_nearest_family_fixture() {
    let expected = NearestFamily {
        children: map(&[("bar", 10, 200.0, 0.0, 0.0)]),
        parents: map(&[("main()", 2, 500.0, 0.0, 0.0)]),
        children_count: 10,
        parents_count: 2,
    };

    let f = three_level_map().compute_nearest_family("foo");
    assert_eq!(f, expected);
}

#[test]
fn test_nearest_family_partition() {
    let edges = wider_map();

    for name in ["main()", "router", "log", "db_query", "render"] {
        let family = compute_nearest_family(&edges, name);

        let child_edges: i64 = edges
            .iter()
            .filter(|(k, _)| EdgeKey::parse(k).parent == Some(name))
            .map(|(_, c)| c.count)
            .sum();
        let parent_edges: i64 = edges
            .iter()
            .filter(|(k, _)| EdgeKey::parse(k).child == name)
            .map(|(_, c)| c.count)
            .sum();

        assert_eq!(family.children_count, child_edges, "{}", name);
        assert_eq!(family.parents_count, parent_edges, "{}", name);
    }
}

#[test]
fn test_nearest_family_of_shared_callee() {
    let family = compute_nearest_family(&wider_map(), "log");

    assert!(family.children.is_empty());
    assert_eq!(family.parents.len(), 3);
    assert_eq!(family.parents.get("db_query"), Some(&PairCall::new(12, 240.0, 0.0, 0.0)));
    assert_eq!(family.parents_count, 20);
}
