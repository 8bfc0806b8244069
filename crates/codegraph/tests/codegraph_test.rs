use codegraph::graph::Error as GraphError;
use codegraph::{
    CodeGraph, CodeGraphOptions, Error, Location, Point, Position, Range, SymbolInformation,
    SymbolKind, Uri,
};

fn function(name: &str, line: u32) -> SymbolInformation {
    SymbolInformation {
        name: name.to_string(),
        detail: "void ()".to_string(),
        kind: SymbolKind::Function,
        location: Location::new(
            Uri::file("/src/main.cpp"),
            Range::new(Position::new(line, 0), Position::new(line + 3, 1)),
        ),
    }
}

fn call_site(line: u32) -> Option<Location> {
    Some(Location::new(
        Uri::file("/src/main.cpp"),
        Range::new(Position::new(line, 4), Position::new(line, 20)),
    ))
}

fn names(symbols: Vec<&SymbolInformation>) -> Vec<&str> {
    symbols.into_iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn add_symbol_is_idempotent() {
    let mut cg = CodeGraph::new();
    let main = cg.add_symbol(function("main", 75));
    let again = cg.add_symbol(function("main", 75));
    let other = cg.add_symbol(function("helper", 10));

    assert_eq!(main, again);
    assert_ne!(main, other);
    assert_eq!(cg.symbol_count(), 2);
    assert_eq!(cg.find_node(&function("main", 75)), Some(main));
    assert_eq!(cg.find_node(&function("main", 80)), None);
    assert_eq!(cg.symbol(other).unwrap().name, "helper");
}

#[test]
fn add_reference_adds_missing_symbols() {
    let mut cg = CodeGraph::new();
    let edge = cg
        .add_reference(function("main", 75), function("helper", 10), call_site(76))
        .unwrap();

    assert_eq!(cg.symbol_count(), 2);
    assert_eq!(cg.reference_count(), 1);

    let main = cg.find_node(&function("main", 75)).unwrap();
    let helper = cg.find_node(&function("helper", 10)).unwrap();
    assert_eq!(cg.graph().edge_nodes(edge), Ok((main, helper)));
    assert_eq!(cg.graph().edge_get(edge).unwrap().location, call_site(76));
}

#[test]
fn simple_graph_deduplicates_references() {
    let mut cg = CodeGraph::with_options(CodeGraphOptions::simple());
    let first = cg
        .add_reference(function("main", 75), function("helper", 10), call_site(76))
        .unwrap();
    let second = cg
        .add_reference(function("main", 75), function("helper", 10), call_site(77))
        .unwrap();
    let back = cg
        .add_reference(function("helper", 10), function("main", 75), None)
        .unwrap();

    assert_eq!(first, second);
    assert_ne!(first, back);
    assert_eq!(cg.reference_count(), 2);
}

#[test]
fn multigraph_keeps_every_reference() {
    let mut cg = CodeGraph::with_options(CodeGraphOptions::multigraph());
    assert!(cg.options().multigraph);
    let first = cg
        .add_reference(function("main", 75), function("helper", 10), call_site(76))
        .unwrap();
    let second = cg
        .add_reference(function("main", 75), function("helper", 10), call_site(77))
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(cg.reference_count(), 2);
    assert_eq!(
        names(cg.references_from(&function("main", 75)).unwrap()),
        vec!["helper", "helper"]
    );
}

#[test]
fn references_follow_insertion_order() {
    let mut cg = CodeGraph::new();
    let main = function("main", 75);
    for (callee, line) in [("init", 1), ("run", 20), ("shutdown", 40)] {
        cg.add_reference(main.clone(), function(callee, line), None)
            .unwrap();
    }
    cg.add_reference(function("run", 20), function("shutdown", 40), None)
        .unwrap();

    assert_eq!(
        names(cg.references_from(&main).unwrap()),
        vec!["init", "run", "shutdown"]
    );
    assert_eq!(
        names(cg.references_to(&function("shutdown", 40)).unwrap()),
        vec!["main", "run"]
    );
    assert!(cg.references_to(&main).unwrap().is_empty());
}

#[test]
fn recursive_function_references_itself() {
    let mut cg = CodeGraph::new();
    let fact = function("factorial", 5);
    cg.add_reference(fact.clone(), fact.clone(), call_site(6))
        .unwrap();

    assert_eq!(cg.symbol_count(), 1);
    assert_eq!(names(cg.references_from(&fact).unwrap()), vec!["factorial"]);
    assert_eq!(names(cg.references_to(&fact).unwrap()), vec!["factorial"]);
}

#[test]
fn remove_symbol_cascades() {
    let mut cg = CodeGraph::new();
    let main = function("main", 75);
    let helper = function("helper", 10);
    let util = function("util", 30);
    cg.add_reference(main.clone(), helper.clone(), None).unwrap();
    cg.add_reference(helper.clone(), util.clone(), None).unwrap();
    cg.add_reference(main.clone(), util.clone(), None).unwrap();

    let removed = cg.remove_symbol(&helper).unwrap();
    assert_eq!(removed.symbol, helper);

    assert_eq!(cg.symbol_count(), 2);
    assert_eq!(cg.reference_count(), 1);
    assert_eq!(cg.find_node(&helper), None);
    assert_eq!(names(cg.references_from(&main).unwrap()), vec!["util"]);
    assert_eq!(names(cg.references_to(&util).unwrap()), vec!["main"]);

    // Re-adding gets a fresh vertex.
    let old = cg.graph().vertices().collect::<Vec<_>>();
    let fresh = cg.add_symbol(helper.clone());
    assert!(!old.contains(&fresh));
}

#[test]
fn unknown_symbols_are_reported() {
    let mut cg = CodeGraph::new();
    let ghost = function("ghost", 1);

    let err = cg.remove_symbol(&ghost).unwrap_err();
    assert!(matches!(err, Error::UnknownSymbol { ref name } if name == "ghost"));
    assert!(cg.references_from(&ghost).is_err());
    assert!(cg.references_to(&ghost).is_err());
}

#[test]
fn move_node_updates_renderer_position() {
    let mut cg = CodeGraph::new();
    let node = cg.add_symbol(function("main", 75));
    assert_eq!(cg.node(node).unwrap().position, None);

    cg.move_node(node, Point::new(12.5, -4.0)).unwrap();
    assert_eq!(cg.node(node).unwrap().position, Some(Point::new(12.5, -4.0)));

    cg.remove_symbol(&function("main", 75)).unwrap();
    let err = cg.move_node(node, Point::default()).unwrap_err();
    assert!(matches!(err, Error::Graph(GraphError::VertexNotFound(v)) if v == node));
}

#[test]
fn renderer_walks_the_graph() {
    let mut cg = CodeGraph::new();
    cg.add_reference(function("a", 1), function("b", 10), None)
        .unwrap();
    cg.add_reference(function("b", 10), function("c", 20), None)
        .unwrap();

    let g = cg.graph();
    let labels: Vec<&str> = g
        .vertices()
        .map(|v| g.vertex_get(v).unwrap().symbol.name.as_str())
        .collect();
    assert_eq!(labels, vec!["a", "b", "c"]);

    let edges: Vec<(&str, &str)> = g
        .edges()
        .map(|e| {
            let (from, to) = g.edge_nodes(e).unwrap();
            (
                cg.symbol(from).unwrap().name.as_str(),
                cg.symbol(to).unwrap().name.as_str(),
            )
        })
        .collect();
    assert_eq!(edges, vec![("a", "b"), ("b", "c")]);
}
