//! Phase 2 tests: components, subgraphs, links, views, deletion, copying.

use std::collections::HashSet;

use digraph::types::error::GraphError;
use digraph::types::{EdgeSpec, Key, VertexId, VertexSpec};
use digraph::{CopyOptions, Graph, GraphCopyOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn add_vertices(graph: &mut Graph, count: usize) -> Vec<VertexId> {
    (0..count)
        .map(|i| graph.add_vertex(VertexSpec::with_id(i as i64)).unwrap())
        .collect()
}

/// Union-find reference for undirected connectivity.
fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

// ==================== Components ====================

#[test]
fn test_new_vertex_gets_singleton_component() {
    let mut graph = Graph::new();
    let v = graph.add_vertex(VertexSpec::new()).unwrap();
    let c = graph.component_of(v).unwrap();
    assert_eq!(graph.component_count(), 1);
    assert_eq!(graph[c].vertices(), &[v]);
}

#[test]
fn test_component_merging_scenario() {
    init_logger();
    let mut graph = Graph::new();
    let v = add_vertices(&mut graph, 4);
    assert_eq!(graph.component_count(), 4);

    graph.edge_to_vertex(v[0], v[1], EdgeSpec::new()).unwrap();
    assert_eq!(graph.component_count(), 3);
    graph.edge_to_vertex(v[2], v[3], EdgeSpec::new()).unwrap();
    assert_eq!(graph.component_count(), 2);
    graph.edge_to_vertex(v[1], v[2], EdgeSpec::new()).unwrap();
    assert_eq!(graph.component_count(), 1);

    let c = graph.component_of(v[0]).unwrap();
    assert_eq!(graph[c].vertex_count(), 4);
    for &vertex in &v {
        assert_eq!(graph.component_of(vertex).unwrap(), c);
        assert!(graph[c].contains(vertex));
    }
}

#[test]
fn test_merge_keeps_larger_component() {
    let mut graph = Graph::new();
    let v = add_vertices(&mut graph, 4);
    graph.edge_to_vertex(v[1], v[2], EdgeSpec::new()).unwrap();
    graph.edge_to_vertex(v[2], v[3], EdgeSpec::new()).unwrap();
    let big = graph.component_of(v[1]).unwrap();

    // v0 alone joins the three-vertex component, which survives
    graph.edge_to_vertex(v[0], v[1], EdgeSpec::new()).unwrap();
    assert_eq!(graph.component_of(v[0]).unwrap(), big);
    assert_eq!(graph.iter_components().collect::<Vec<_>>(), vec![big]);
}

#[test]
fn test_edge_removal_does_not_split_component() {
    let mut graph = Graph::new();
    let v = add_vertices(&mut graph, 2);
    let e = graph.edge_to_vertex(v[0], v[1], EdgeSpec::new()).unwrap();
    graph.delete_edge(e).unwrap();
    assert_eq!(graph.component_count(), 1);
    assert_eq!(
        graph.component_of(v[0]).unwrap(),
        graph.component_of(v[1]).unwrap()
    );
}

#[test]
fn test_component_name_and_attributes() {
    let mut graph = Graph::new();
    let v = graph.add_vertex(VertexSpec::new()).unwrap();
    let c = graph.component_of(v).unwrap();
    let component = graph.component_mut(c).unwrap();
    component.set_name(Some("main".to_owned()));
    component.attributes_mut().set("rank", 1);
    assert_eq!(graph[c].name(), Some("main"));
    assert_eq!(graph[c].attributes().get("rank").unwrap(), &json!(1));
}

#[test]
fn test_components_match_undirected_connectivity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let n = rng.gen_range(2..30);
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, n);
        let mut parent: Vec<usize> = (0..n).collect();

        for _ in 0..rng.gen_range(0..n * 2) {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            graph.edge_to_vertex(v[a], v[b], EdgeSpec::new()).unwrap();
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            parent[ra] = rb;
        }

        let roots: HashSet<usize> = (0..n).map(|i| find(&mut parent, i)).collect();
        assert_eq!(graph.component_count(), roots.len());

        let total: usize = graph
            .iter_components()
            .map(|c| graph[c].vertex_count())
            .sum();
        assert_eq!(total, n);

        for a in 0..n {
            let ca = graph.component_of(v[a]).unwrap();
            assert!(graph[ca].contains(v[a]));
            for b in 0..n {
                let same = find(&mut parent, a) == find(&mut parent, b);
                assert_eq!(same, ca == graph.component_of(v[b]).unwrap());
            }
        }
    }
}

// ==================== Subgraphs and links ====================

struct Scoped {
    graph: Graph,
    s1: digraph::SubgraphId,
    s2: digraph::SubgraphId,
    a: VertexId,
    b: VertexId,
    c: VertexId,
    top: VertexId,
    other_top: VertexId,
}

fn scoped_fixture() -> Scoped {
    let mut graph = Graph::new();
    let s1 = graph.add_subgraph(Some("left"));
    let s2 = graph.add_subgraph(Some("right"));
    let a = graph
        .add_vertex(VertexSpec::with_id("a").subgraph(s1))
        .unwrap();
    let b = graph
        .add_vertex(VertexSpec::with_id("b").subgraph(s1))
        .unwrap();
    let c = graph
        .add_vertex(VertexSpec::with_id("c").subgraph(s2))
        .unwrap();
    let top = graph.add_vertex(VertexSpec::with_id("top")).unwrap();
    let other_top = graph.add_vertex(VertexSpec::with_id("top2")).unwrap();
    Scoped {
        graph,
        s1,
        s2,
        a,
        b,
        c,
        top,
        other_top,
    }
}

#[test]
fn test_edge_scope_rules() {
    let Scoped {
        mut graph,
        a,
        b,
        c,
        top,
        other_top,
        ..
    } = scoped_fixture();

    graph.edge_to_vertex(a, b, EdgeSpec::new()).unwrap();
    graph.edge_to_vertex(top, other_top, EdgeSpec::new()).unwrap();

    assert!(matches!(
        graph.edge_to_vertex(a, c, EdgeSpec::new()),
        Err(GraphError::EdgeAcrossScopes { .. })
    ));
    assert!(matches!(
        graph.edge_to_vertex(top, a, EdgeSpec::new()),
        Err(GraphError::EdgeAcrossScopes { .. })
    ));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_link_scope_rules() {
    let Scoped {
        mut graph,
        a,
        b,
        c,
        top,
        other_top,
        ..
    } = scoped_fixture();

    graph.link_to_vertex(a, c, EdgeSpec::new()).unwrap();
    graph.link_from_vertex(a, top, EdgeSpec::new()).unwrap();

    assert!(matches!(
        graph.link_to_vertex(a, b, EdgeSpec::new()),
        Err(GraphError::LinkWithinScope { .. })
    ));
    assert!(matches!(
        graph.link_to_vertex(top, other_top, EdgeSpec::new()),
        Err(GraphError::LinkWithinScope { .. })
    ));
    assert_eq!(graph.link_count(), 2);
}

#[test]
fn test_links_do_not_merge_components() {
    let Scoped {
        mut graph, a, c, ..
    } = scoped_fixture();
    let before = graph.component_count();
    graph.link_to_vertex(a, c, EdgeSpec::new()).unwrap();
    assert_eq!(graph.component_count(), before);
    assert_ne!(
        graph.component_of(a).unwrap(),
        graph.component_of(c).unwrap()
    );
}

#[test]
fn test_subgraph_registries() {
    let Scoped {
        mut graph,
        s1,
        s2,
        a,
        b,
        c,
        top,
        ..
    } = scoped_fixture();

    let e = graph.edge_to_vertex(a, b, EdgeSpec::new().id("ab")).unwrap();
    let l1 = graph.link_to_vertex(a, c, EdgeSpec::new()).unwrap();
    let l2 = graph.link_to_vertex(top, b, EdgeSpec::new()).unwrap();
    let l3 = graph.link_to_vertex(c, b, EdgeSpec::new()).unwrap();

    // A link belongs to the scope of its source vertex
    assert_eq!(graph[s1].vertex_count(), 2);
    assert_eq!(graph[s1].edge_count(), 1);
    assert_eq!(graph[s1].link_count(), 1);
    assert_eq!(graph[s2].vertex_count(), 1);
    assert_eq!(graph[s2].edge_count(), 0);
    assert_eq!(graph[s2].link_count(), 1);
    assert_eq!(graph.link_count(), 3);

    assert_eq!(graph[s1].iter_edges().collect::<Vec<_>>(), vec![e]);
    assert_eq!(graph[s1].iter_links().collect::<Vec<_>>(), vec![l1]);
    assert_eq!(graph[s2].iter_links().collect::<Vec<_>>(), vec![l3]);
    assert_eq!(graph[l1].subgraph(), Some(s1));
    assert_eq!(graph[l2].subgraph(), None);
    assert_eq!(graph[s1].vertex_by_key("a").unwrap(), a);
    assert!(graph[s2].vertex_by_key("a").is_err());
    assert_eq!(graph[e].subgraph(), Some(s1));

    // Graph-wide lookups see scoped entities too
    assert_eq!(graph.vertex_by_key("c").unwrap(), c);
    assert_eq!(graph.edge_by_key("ab").unwrap(), e);
    assert_eq!(graph.subgraph_count(), 2);
    assert_eq!(graph.iter_subgraphs().collect::<Vec<_>>(), vec![s1, s2]);
    assert_eq!(graph[s1].name(), Some("left"));
}

#[test]
fn test_vertex_ids_unique_per_scope() {
    let Scoped {
        mut graph,
        s1,
        s2,
        a,
        b,
        top,
        ..
    } = scoped_fixture();

    // Same ID in a sibling subgraph and at top level
    let a2 = graph
        .add_vertex(VertexSpec::with_id("a").subgraph(s2))
        .unwrap();
    let a_top = graph.add_vertex(VertexSpec::with_id("a")).unwrap();
    let top_in_s1 = graph
        .add_vertex(VertexSpec::with_id("top").subgraph(s1))
        .unwrap();
    assert_eq!(graph.vertex_count(), 8);

    // Within one scope the ID is still taken
    assert!(matches!(
        graph.add_vertex(VertexSpec::with_id("a").subgraph(s1)),
        Err(GraphError::DuplicateVertex(key)) if key == Key::from("a")
    ));
    assert!(matches!(
        graph.add_vertex(VertexSpec::with_id("top")),
        Err(GraphError::DuplicateVertex(_))
    ));
    assert!(matches!(
        graph.add_vertex(VertexSpec::with_id("a").subgraph(s2)),
        Err(GraphError::DuplicateVertex(_))
    ));
    assert_eq!(graph.vertex_count(), 8);

    assert_eq!(graph.scoped_vertex_by_key(Some(s1), "a").unwrap(), a);
    assert_eq!(graph.scoped_vertex_by_key(Some(s2), "a").unwrap(), a2);
    assert_eq!(graph.scoped_vertex_by_key(None, "a").unwrap(), a_top);
    assert_eq!(graph.scoped_vertex_by_key(None, "top").unwrap(), top);
    assert_eq!(graph[s1].vertex_by_key("top").unwrap(), top_in_s1);
    assert_eq!(graph[s2].vertex_by_key("a").unwrap(), a2);
    assert!(matches!(
        graph.scoped_vertex_by_key(Some(s2), "b"),
        Err(GraphError::VertexKeyNotFound(_))
    ));

    // Unqualified lookups need the ID to be used in a single scope
    assert_eq!(graph.vertex_by_key("b").unwrap(), b);
    assert!(matches!(
        graph.vertex_by_key("a"),
        Err(GraphError::AmbiguousKey { entity: "vertex", count: 3, .. })
    ));

    graph.delete_vertex(a_top).unwrap();
    graph.delete_vertex(a2).unwrap();
    assert_eq!(graph.vertex_by_key("a").unwrap(), a);
    assert!(graph[s2].vertex_by_key("a").is_err());

    // A freed ID can be reused in its scope
    let again = graph
        .add_vertex(VertexSpec::with_id("a").subgraph(s2))
        .unwrap();
    assert_eq!(graph.scoped_vertex_by_key(Some(s2), "a").unwrap(), again);
}

#[test]
fn test_connection_ids_unique_per_scope() {
    init_logger();
    let Scoped {
        mut graph,
        s1,
        s2,
        a,
        b,
        c,
        top,
        other_top,
    } = scoped_fixture();

    let e1 = graph.edge_to_vertex(a, b, EdgeSpec::new().id("e")).unwrap();
    let e2 = graph
        .edge_to_vertex(top, other_top, EdgeSpec::new().id("e"))
        .unwrap();
    assert!(matches!(
        graph.edge_to_vertex(b, a, EdgeSpec::new().id("e")),
        Err(GraphError::DuplicateEdge(_))
    ));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.scoped_edge_by_key(Some(s1), "e").unwrap(), e1);
    assert_eq!(graph.scoped_edge_by_key(None, "e").unwrap(), e2);
    assert!(matches!(
        graph.edge_by_key("e"),
        Err(GraphError::AmbiguousKey { entity: "edge", count: 2, .. })
    ));

    // The new-vertex shortcut checks the edge ID in the new vertex's scope
    let (created, e3) = graph
        .edge_to_new_vertex(c, VertexSpec::new(), EdgeSpec::new().id("e"))
        .unwrap();
    assert_eq!(graph[created].subgraph(), Some(s2));
    assert_eq!(graph[e3].subgraph(), Some(s2));
    let vertices = graph.vertex_count();
    assert!(matches!(
        graph.edge_from_new_vertex(a, VertexSpec::new(), EdgeSpec::new().id("e")),
        Err(GraphError::DuplicateEdge(_))
    ));
    assert_eq!(graph.vertex_count(), vertices);

    // Links are owned by the scope of their source vertex
    let l1 = graph.link_to_vertex(a, c, EdgeSpec::new().id("l")).unwrap();
    let l2 = graph.link_to_vertex(c, a, EdgeSpec::new().id("l")).unwrap();
    let l3 = graph.link_to_vertex(top, c, EdgeSpec::new().id("l")).unwrap();
    assert!(matches!(
        graph.link_to_vertex(b, top, EdgeSpec::new().id("l")),
        Err(GraphError::DuplicateLink(_))
    ));
    assert_eq!(graph.link_count(), 3);
    assert_eq!(graph.scoped_link_by_key(Some(s1), "l").unwrap(), l1);
    assert_eq!(graph.scoped_link_by_key(Some(s2), "l").unwrap(), l2);
    assert_eq!(graph.scoped_link_by_key(None, "l").unwrap(), l3);
    assert!(matches!(
        graph.link_by_key("l"),
        Err(GraphError::AmbiguousKey { entity: "link", count: 3, .. })
    ));

    // Reversal keeps the owning scope
    graph.reverse_link(l1).unwrap();
    assert_eq!(graph[l1].source(), c);
    assert_eq!(graph[l1].subgraph(), Some(s1));
    assert_eq!(graph.scoped_link_by_key(Some(s1), "l").unwrap(), l1);

    graph.delete_link(l1).unwrap();
    graph.delete_link(l3).unwrap();
    assert!(graph.scoped_link_by_key(Some(s1), "l").is_err());
    assert_eq!(graph.link_by_key("l").unwrap(), l2);
    assert_eq!(graph[s1].link_count(), 0);
    assert_eq!(graph[s2].link_count(), 1);
}

#[test]
fn test_new_vertex_inherits_scope() {
    let Scoped {
        mut graph, s1, a, ..
    } = scoped_fixture();
    let (created, _) = graph
        .edge_to_new_vertex(a, VertexSpec::with_id("d"), EdgeSpec::new())
        .unwrap();
    assert_eq!(graph[created].subgraph(), Some(s1));
    assert_eq!(graph[s1].vertex_count(), 3);
}

#[test]
fn test_link_lifecycle() {
    let Scoped {
        mut graph, s1, s2, a, c, ..
    } = scoped_fixture();
    let link = graph.link_to_vertex(a, c, EdgeSpec::new().id("ac")).unwrap();
    assert!(graph.has_link_to(a, c));
    assert!(graph.has_link_from(c, a));
    assert_eq!(graph.link_by_key("ac").unwrap(), link);
    assert_eq!(graph[a].outbound_links(), &[link]);
    assert_eq!(graph.iter_inbound_links(c).collect::<Vec<_>>(), vec![link]);
    assert_eq!(graph[a].out_link_degree(), 1);
    assert_eq!(graph[c].in_link_degree(), 1);
    // Links do not count as edges
    assert!(graph[a].is_leaf());
    assert!(graph[c].is_root());

    graph.reverse_link(link).unwrap();
    assert_eq!(graph[link].source(), c);
    assert!(graph.has_link_to(c, a));

    graph.delete_link_to(c, a).unwrap();
    assert_eq!(graph.link_count(), 0);
    assert_eq!(graph[s1].link_count(), 0);
    assert_eq!(graph[s2].link_count(), 0);
    assert!(matches!(
        graph.delete_link_from(a, c),
        Err(GraphError::NoLinkBetween { .. })
    ));
}

#[test]
fn test_foreign_subgraph_rejected() {
    let mut g1 = Graph::new();
    let mut g2 = Graph::new();
    let s = g2.add_subgraph(None);
    assert!(matches!(
        g1.add_vertex(VertexSpec::new().subgraph(s)),
        Err(GraphError::ForeignHandle(_))
    ));
    assert_eq!(g1.vertex_count(), 0);
}

// ==================== Views ====================

#[test]
fn test_views() {
    let mut graph = Graph::new();
    let v = add_vertices(&mut graph, 5);
    let explicit = graph
        .add_view(Some("first"), [v[0], v[1], v[0]])
        .unwrap();
    let even = graph.add_view_where(Some("even"), |vertex| {
        vertex.key().and_then(Key::as_int).is_some_and(|k| k % 2 == 0)
    });

    assert_eq!(graph.view_count(), 2);
    assert_eq!(graph[explicit].vertices(), &[v[0], v[1]]);
    assert_eq!(graph[even].vertices(), &[v[0], v[2], v[4]]);
    assert_eq!(graph[even].name(), Some("even"));

    assert!(graph.add_to_view(explicit, v[3]).unwrap());
    assert!(!graph.add_to_view(explicit, v[3]).unwrap());
    assert!(graph.remove_from_view(explicit, v[1]).unwrap());
    assert!(!graph.remove_from_view(explicit, v[1]).unwrap());
    assert_eq!(graph[explicit].vertices(), &[v[0], v[3]]);

    // A view does not own its vertices
    graph.delete_vertex(v[0]).unwrap();
    assert!(!graph[explicit].contains(v[0]));
    assert!(!graph[even].contains(v[0]));
    assert_eq!(graph.vertex_count(), 4);
}

#[test]
fn test_view_rejects_deleted_vertex() {
    let mut graph = Graph::new();
    let v = add_vertices(&mut graph, 2);
    graph.delete_vertex(v[1]).unwrap();
    assert!(matches!(
        graph.add_view(None, [v[0], v[1]]),
        Err(GraphError::VertexNotFound(_))
    ));
    assert_eq!(graph.view_count(), 0);
}

// ==================== Vertex deletion ====================

#[test]
fn test_delete_vertex_cascades() {
    init_logger();
    let mut graph = Graph::new();
    let p = graph.add_vertex(VertexSpec::with_id("p")).unwrap();
    let x = graph.add_vertex(VertexSpec::with_id("x")).unwrap();
    let a = graph.add_vertex(VertexSpec::with_id("a")).unwrap();
    let b = graph.add_vertex(VertexSpec::with_id("b")).unwrap();
    graph.edge_to_vertex(p, x, EdgeSpec::new()).unwrap();
    graph.edge_to_vertex(x, a, EdgeSpec::new().id("xa")).unwrap();
    graph.edge_to_vertex(x, b, EdgeSpec::new()).unwrap();
    let ab = graph.edge_to_vertex(a, b, EdgeSpec::new()).unwrap();
    assert_eq!(graph.edge_count(), 4);

    graph.delete_vertex(x).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.vertex(x).is_none());
    assert!(graph.vertex_by_key("x").is_err());
    assert!(graph.edge_by_key("xa").is_err());
    assert!(graph[p].outbound_edges().is_empty());
    assert!(graph[a].inbound_edges().is_empty());
    assert_eq!(graph[b].inbound_edges(), &[ab]);

    // The remaining vertices keep their (unsplit) component
    assert_eq!(graph.component_count(), 1);
    let c = graph.component_of(p).unwrap();
    assert_eq!(graph[c].vertex_count(), 3);
    assert!(!graph[c].contains(x));

    assert!(matches!(
        graph.delete_vertex(x),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_delete_vertex_discards_empty_component() {
    let mut graph = Graph::new();
    let v = add_vertices(&mut graph, 2);
    graph.delete_vertex(v[0]).unwrap();
    assert_eq!(graph.component_count(), 1);
    assert_eq!(graph.iter_components().count(), 1);
}

#[test]
fn test_delete_scoped_vertex_with_links() {
    let Scoped {
        mut graph, s1, s2, a, b, c, ..
    } = scoped_fixture();
    graph.edge_to_vertex(a, b, EdgeSpec::new()).unwrap();
    graph.link_to_vertex(c, a, EdgeSpec::new()).unwrap();

    graph.delete_vertex(a).unwrap();
    assert_eq!(graph[s1].vertex_count(), 1);
    assert_eq!(graph[s1].edge_count(), 0);
    assert_eq!(graph[s1].link_count(), 0);
    assert_eq!(graph[s2].link_count(), 0);
    assert!(graph[c].outbound_links().is_empty());
    assert!(graph[b].inbound_edges().is_empty());
}

// ==================== Copying ====================

#[test]
fn test_copy_vertex_with_cross_references() {
    let mut source = Graph::new();
    let mut target = Graph::new();
    let s = source.add_subgraph(None);
    let v = source
        .add_vertex(
            VertexSpec::with_id("v")
                .value("payload")
                .weight(3.0)
                .attribute("color", "red")
                .subgraph(s),
        )
        .unwrap();

    let options = CopyOptions {
        copy_attributes: true,
        link_key_forward: Some(Key::from("copy")),
        link_key_backward: Some(Key::from("original")),
    };
    let copy = source.copy_vertex(v, &mut target, &options).unwrap();

    let copied = &target[copy];
    assert_eq!(copied.key(), Some(&Key::from("v")));
    assert_eq!(copied.value(), Some(&json!("payload")));
    assert_eq!(copied.weight(), Some(3.0));
    assert_eq!(copied.subgraph(), None);
    assert_eq!(copied.attributes().get("color").unwrap(), &json!("red"));
    assert_eq!(
        copied.attributes().get("original").unwrap(),
        &serde_json::Value::from(v)
    );
    assert_eq!(
        source[v].attributes().get("copy").unwrap(),
        &serde_json::Value::from(copy)
    );
}

#[test]
fn test_copy_vertex_without_attributes() {
    let mut source = Graph::new();
    let mut target = Graph::new();
    let v = source
        .add_vertex(VertexSpec::new().attribute("color", "red"))
        .unwrap();
    let copy = source
        .copy_vertex(v, &mut target, &CopyOptions::default())
        .unwrap();
    assert!(target[copy].attributes().is_empty());
    assert_eq!(source[v].attributes().len(), 1);
}

#[test]
fn test_copy_vertex_duplicate_in_target() {
    let mut source = Graph::new();
    let mut target = Graph::new();
    let v = source.add_vertex(VertexSpec::with_id(1)).unwrap();
    target.add_vertex(VertexSpec::with_id(1)).unwrap();
    assert!(matches!(
        source.copy_vertex(v, &mut target, &CopyOptions::default()),
        Err(GraphError::DuplicateVertex(_))
    ));
}

#[test]
fn test_copy_vertices_filtered() {
    let mut graph = Graph::with_name("orig");
    graph.attributes_mut().set("kind", "demo");
    let v = add_vertices(&mut graph, 6);
    for pair in v.windows(2) {
        graph.edge_to_vertex(pair[0], pair[1], EdgeSpec::new()).unwrap();
    }
    graph
        .vertex_mut(v[2])
        .unwrap()
        .attributes_mut()
        .set("tag", true);

    let options = GraphCopyOptions {
        copy_graph_attributes: true,
        copy_vertex_attributes: true,
    };
    let copy = graph
        .copy_vertices(
            |vertex| vertex.key().and_then(Key::as_int).is_some_and(|k| k < 3),
            &options,
        )
        .unwrap();

    assert_eq!(copy.name(), Some("orig"));
    assert_eq!(copy.attributes().get("kind").unwrap(), &json!("demo"));
    assert_eq!(copy.vertex_count(), 3);
    assert_eq!(copy.edge_count(), 0);
    assert_eq!(copy.component_count(), 3);
    let two = copy.vertex_by_key(2).unwrap();
    assert_eq!(copy[two].attributes().get("tag").unwrap(), &json!(true));

    // Source untouched
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 5);
}
