/*!
Shortest-path search over the campus graph.

- `dijkstra`: single-source Dijkstra producing a `ShortestPathTree`, plus the
  `find_shortest_path` entry point used by the menu.
*/

pub mod dijkstra;

pub use dijkstra::{Route, find_shortest_path};
