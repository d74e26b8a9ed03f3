use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug, PartialEq, Eq)]
struct Ranked {
    count: u32,
    token: String,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher count ranks first; equal counts rank the lexicographically
        // smaller token first.
        self.count
            .cmp(&other.count)
            .then_with(|| other.token.cmp(&self.token))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `n` highest-count entries of a frequency table, descending by count,
/// ties broken by ascending token order.
///
/// Keeps a min-heap of at most `n` entries, so the full table is never
/// sorted.
pub fn top_n(counts: &HashMap<String, u32>, n: usize) -> Vec<(u32, String)> {
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<Ranked>> = BinaryHeap::with_capacity(n + 1);
    for (token, &count) in counts {
        if heap.len() == n {
            if let Some(Reverse(weakest)) = heap.peek() {
                let outranks = count > weakest.count
                    || (count == weakest.count && token.as_str() < weakest.token.as_str());
                if !outranks {
                    continue;
                }
            }
        }
        heap.push(Reverse(Ranked {
            count,
            token: token.clone(),
        }));
        if heap.len() > n {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(ranked)| (ranked.count, ranked.token))
        .collect()
}
