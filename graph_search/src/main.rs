use priority_queue::PriorityQueue;

const NODE_COUNT: usize = 6;

struct Graph {
    adjacent: [[bool; NODE_COUNT]; NODE_COUNT],
}

impl Graph {
    fn new() -> Self {
        Self {
            adjacent: [[false; NODE_COUNT]; NODE_COUNT],
        }
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        self.adjacent[from][to] = true;
        self.adjacent[to][from] = true;
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (0..NODE_COUNT).filter(move |&to| self.adjacent[node][to])
    }
}

struct Traversal {
    distances: [Option<usize>; NODE_COUNT],
    parents: [Option<usize>; NODE_COUNT],
}

// level-order walk with the queue as the frontier; lower node numbers
// leave the frontier first
fn breadth_first(graph: &Graph, start: usize) -> Traversal {
    let mut distances = [None; NODE_COUNT];
    let mut parents = [None; NODE_COUNT];
    let mut frontier = PriorityQueue::new();
    distances[start] = Some(0);
    frontier.push(start).unwrap();
    while let Some(node) = frontier.pop_min() {
        println!(
            "visiting node {} (distance: {})",
            node,
            distances[node].unwrap()
        );
        for neighbor in graph.neighbors(node) {
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(distances[node].unwrap() + 1);
                parents[neighbor] = Some(node);
                frontier.push(neighbor).unwrap();
            }
        }
    }
    Traversal { distances, parents }
}

fn path_to(traversal: &Traversal, start: usize, target: usize) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut node = target;
    while node != start {
        node = traversal.parents[node]?;
        path.push(node);
    }
    path.reverse();
    Some(path)
}

fn depth_first(graph: &Graph, start: usize) -> Vec<usize> {
    let mut visited = [false; NODE_COUNT];
    let mut stack = vec![start];
    let mut order = vec![];
    visited[start] = true;
    while let Some(node) = stack.pop() {
        order.push(node);
        for neighbor in graph.neighbors(node) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                stack.push(neighbor);
            }
        }
    }
    order
}

fn joined(nodes: &[usize], separator: &str) -> String {
    let hops: Vec<String> = nodes.iter().map(|node| node.to_string()).collect();
    hops.join(separator)
}

fn main() {
    let mut graph = Graph::new();
    for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (3, 5), (4, 5)] {
        graph.add_edge(from, to);
    }

    println!("breadth-first traversal:");
    let traversal = breadth_first(&graph, 0);

    match path_to(&traversal, 0, 5) {
        Some(path) => println!(
            "\nshortest path from 0 to 5 (distance {}): {}",
            traversal.distances[5].unwrap(),
            joined(&path, " -> ")
        ),
        None => println!("\nno path exists from 0 to 5"),
    }

    println!("\ndepth-first visit order: {}", joined(&depth_first(&graph, 0), " "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (3, 5), (4, 5)] {
            graph.add_edge(from, to);
        }
        graph
    }

    #[test]
    fn breadth_first_finds_level_distances() {
        let traversal = breadth_first(&sample_graph(), 0);
        assert_eq!(
            traversal.distances,
            [Some(0), Some(1), Some(1), Some(2), Some(2), Some(3)]
        );
    }

    #[test]
    fn shortest_path_walks_the_parent_chain() {
        let traversal = breadth_first(&sample_graph(), 0);
        let path = path_to(&traversal, 0, 5).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], 0);
        assert_eq!(path[3], 5);
    }

    #[test]
    fn disconnected_node_has_no_path() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1);
        let traversal = breadth_first(&graph, 0);
        assert_eq!(path_to(&traversal, 0, 5), None);
    }

    #[test]
    fn depth_first_visits_every_reachable_node_once() {
        let mut order = depth_first(&sample_graph(), 0);
        assert_eq!(order[0], 0);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }
}
