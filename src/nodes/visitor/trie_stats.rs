use hdrhistogram::Histogram;

use crate::{
    visitor::{Visitable, Visitor},
    Node, Trie,
};
use std::fmt;

/// A visitor of the trie which collects statistics about the tree, like how
/// many nodes there are, how many of them are terminal, and how long the
/// member sequences are.
#[derive(Debug)]
pub struct TrieStatsCollector {
    stats: TrieStats,
    depth: usize,
}

impl TrieStatsCollector {
    /// Run the stats collection on the given trie, then return the
    /// accumulated stats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtrie::{visitor::TrieStatsCollector, Trie};
    ///
    /// let mut trie: Trie<char> = ["cat", "car", "ca"].into_iter().map(str::chars).collect();
    /// trie.remove("car".chars());
    ///
    /// let stats = TrieStatsCollector::collect(&trie);
    /// assert_eq!(stats.node_count(), 5);
    /// assert_eq!(stats.member_count(), 2);
    /// assert_eq!(stats.dead_node_count(), 1);
    /// assert_eq!(stats.max_depth(), 3);
    /// ```
    pub fn collect<E, S>(trie: &Trie<E, S>) -> TrieStats {
        let mut collector = TrieStatsCollector {
            stats: TrieStats::new(),
            depth: 0,
        };

        trie.visit_with(&mut collector);

        collector.stats
    }

    /// Iterate through the given trie and return the number of nodes,
    /// including the root.
    pub fn count_nodes<E, S>(trie: &Trie<E, S>) -> usize {
        struct NodeCounter;

        impl<E, S> Visitor<E, S> for NodeCounter {
            type Output = usize;

            fn default_output(&self) -> Self::Output {
                0
            }

            fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output {
                o1 + o2
            }

            fn visit_node(&mut self, t: &Node<E, S>) -> Self::Output {
                1 + t.super_visit_with(self)
            }
        }

        trie.visit_with(&mut NodeCounter)
    }
}

/// Collection of stats about the shape of a trie.
#[derive(Debug, Clone, PartialEq)]
pub struct TrieStats {
    node_count: u64,
    dead_node_count: u64,
    max_depth: u64,
    member_length: Histogram<u64>,
    num_children: Histogram<u64>,
}

impl fmt::Display for TrieStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct HistogramAsDebug<'a>(&'a Histogram<u64>);

        impl fmt::Debug for HistogramAsDebug<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entry(&"min", &self.0.min())
                    .entry(&"mean", &self.0.mean())
                    .entry(&"stdev", &self.0.stdev())
                    .entry(&"max", &self.0.max())
                    .entry(&"p50", &self.0.value_at_quantile(0.5))
                    .entry(&"p90", &self.0.value_at_quantile(0.90))
                    .entry(&"p99", &self.0.value_at_quantile(0.99))
                    .finish()
            }
        }

        f.debug_struct("TrieStats")
            .field("node_count", &self.node_count)
            .field("member_count", &self.member_count())
            .field("dead_node_count", &self.dead_node_count)
            .field("max_depth", &self.max_depth)
            .field("total_member_elements", &self.total_member_elements())
            .field("member_length", &HistogramAsDebug(&self.member_length))
            .field("num_children", &HistogramAsDebug(&self.num_children))
            .finish()
    }
}

impl TrieStats {
    fn new() -> Self {
        Self {
            node_count: 0,
            dead_node_count: 0,
            max_depth: 0,
            member_length: Histogram::new(3)
                .expect("should be able to create a default histogram with no bounds and 3 sigfig"),
            num_children: Histogram::new(3)
                .expect("should be able to create a default histogram with no bounds and 3 sigfig"),
        }
    }

    fn record_node(&mut self, depth: usize, is_terminal: bool, is_dead: bool, num_children: usize) {
        let depth = depth as u64;

        self.node_count += 1;
        self.max_depth = self.max_depth.max(depth);
        if is_terminal {
            self.member_length
                .record(depth)
                .expect("auto-resizing histogram should accept any value");
        }
        if is_dead && depth > 0 {
            self.dead_node_count += 1;
        }
        self.num_children
            .record(num_children as u64)
            .expect("auto-resizing histogram should accept any value");
    }

    /// Number of nodes present in the trie, including the root.
    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    /// Number of terminal nodes, which is the number of member sequences.
    pub fn member_count(&self) -> u64 {
        self.member_length.len()
    }

    /// Number of nodes below the root which are neither terminal nor have
    /// children.
    ///
    /// This value is useful to measure how much space removals have left
    /// behind; [`Trie::prune`] brings it back to zero.
    pub fn dead_node_count(&self) -> u64 {
        self.dead_node_count
    }

    /// Length of the longest path from the root, which bounds the length of
    /// the longest member.
    pub fn max_depth(&self) -> u64 {
        self.max_depth
    }

    /// Sum of the lengths of all member sequences.
    ///
    /// Comparing this to [`TrieStats::node_count`] shows how much the shared
    /// prefixes save.
    pub fn total_member_elements(&self) -> u64 {
        self.member_length
            .iter_recorded()
            .map(|bucket| bucket.value_iterated_to() * bucket.count_at_value())
            .sum()
    }

    /// Histogram of member sequence lengths.
    pub fn member_length(&self) -> &Histogram<u64> {
        &self.member_length
    }

    /// Histogram of the number of children per node.
    pub fn num_children(&self) -> &Histogram<u64> {
        &self.num_children
    }
}

impl<E, S> Visitor<E, S> for TrieStatsCollector {
    type Output = ();

    fn default_output(&self) -> Self::Output {}

    fn combine_output(&self, _: Self::Output, _: Self::Output) -> Self::Output {}

    fn visit_node(&mut self, t: &Node<E, S>) -> Self::Output {
        self.stats
            .record_node(self.depth, t.is_terminal(), t.is_dead(), t.num_children());

        t.super_visit_with(self)
    }

    fn visit_edge(&mut self, _: &E, child: &Node<E, S>) -> Self::Output {
        self.depth += 1;
        child.visit_with(self);
        self.depth -= 1;
    }
}
