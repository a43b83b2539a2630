use trip_core::prelude::*;

fn main() {
    env_logger::init();

    // A -> B: 6, A -> D: 7, B -> C: 5, B -> E: -4, C -> B: -2, D -> C: -3
    let g = generate_negative_weight_graph();
    g.print_info();

    let mut bf = BellmanFord::new(&g);
    let result = bf.run(vertex_index(0)).expect("Graph has no negative cycle");

    if let Some(source) = g.vertex(result.source()) {
        println!("Cheapest prices from {}", source.label);
    }
    for vertex in g.vertices() {
        let path: Vec<&str> = result
            .path_to(vertex.index)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|v| g.vertex(v).map(|v| v.label))
            .collect();
        println!(
            "{}: {:?} via {}",
            vertex.label,
            result.distance_to(vertex.index),
            path.join(" -> ")
        );
    }
    println!("{}", bf.stats);
}
