use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first means the start node, last means the end node
    route: Vec<T>,
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph. An edge `from -> to` means `to` depends on `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    nodes: BTreeSet<Node>,
    routes: Vec<(Node, Node)>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            routes: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    pub fn route_to(&mut self, from: Node, to: Node) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.routes.push((from, to));
    }

    /// Kahn's algorithm. Returns every node, dependencies before dependents.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> =
            self.nodes.iter().map(|node| (*node, 0)).collect();
        let mut adjacency: BTreeMap<Node, BTreeSet<Node>> = BTreeMap::new();

        for &(from, to) in &self.routes {
            if !adjacency.entry(from).or_default().insert(to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![from, to],
                }));
            }
            *in_degree.entry(to).or_insert(0) += 1;
        }

        let mut order = Vec::with_capacity(in_degree.len());
        while let Some(node) = in_degree
            .iter()
            .find(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
        {
            in_degree.remove(&node);
            order.push(node);
            for connected in adjacency.get(&node).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(connected) {
                    *degree -= 1;
                }
            }
        }

        if in_degree.is_empty() {
            Ok(order)
        } else {
            let remaining: Vec<Node> = in_degree.keys().copied().collect();
            let route = Self::find_cycle(&remaining, &adjacency).unwrap_or_default();
            Err(TopologyError::CycleDetected(DepRoute { route }))
        }
    }

    fn find_cycle(
        nodes: &[Node],
        adjacency: &BTreeMap<Node, BTreeSet<Node>>,
    ) -> Option<Vec<Node>> {
        let neighbors_of = |node: Node| -> std::vec::IntoIter<Node> {
            adjacency
                .get(&node)
                .into_iter()
                .flatten()
                .copied()
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        let mut visited = BTreeSet::new();
        let mut path_set = BTreeSet::new();
        let mut path = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        for &start in nodes {
            if visited.contains(&start) {
                continue;
            }

            stack.push((start, neighbors_of(start)));
            visited.insert(start);
            path_set.insert(start);
            path.push(start);

            while let Some((current, neighbors)) = stack.last_mut() {
                if let Some(neighbor) = neighbors.next() {
                    if path_set.contains(&neighbor) {
                        let pos = path.iter().position(|&x| x == neighbor)?;
                        let mut cycle = path[pos..].to_vec();
                        cycle.push(neighbor);
                        return Some(cycle);
                    } else if visited.insert(neighbor) {
                        path_set.insert(neighbor);
                        path.push(neighbor);
                        stack.push((neighbor, neighbors_of(neighbor)));
                    }
                } else {
                    let finished = *current;
                    stack.pop();
                    path_set.remove(&finished);
                    path.pop();
                }
            }
        }
        None
    }
}
