use tracing::debug;

use crate::{
    core::Neighbors,
    visit::{DfsEvent, DfsEvents},
};

use super::ConnectedComponents;

/// Labels every vertex reached from a root with the same component id, taking
/// undiscovered roots in the given order. Vertices not reachable from any
/// root end up in component 0, so `roots` must cover all vertices.
pub fn dfs<G, I>(graph: &G, roots: I) -> ConnectedComponents
where
    G: Neighbors,
    I: IntoIterator<Item = usize>,
{
    let mut id = vec![0; graph.vertex_count()];
    let mut count = 0;
    let mut events = DfsEvents::new(graph);

    for root in roots {
        if events.is_discovered(root) {
            continue;
        }

        events.add_root(root);

        for event in events.by_ref() {
            if let DfsEvent::Open { vertex } = event {
                id[vertex] = count;
            }
        }

        count += 1;
    }

    debug!(vertices = id.len(), components = count, "components labeled");

    ConnectedComponents::new(id, count)
}
