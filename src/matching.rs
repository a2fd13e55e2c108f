//! Longest-matching-block similarity between two strings.
//!
//! The ratio is `2 * M / T` where `M` is the total number of characters in
//! the matching-block decomposition (take the longest common block, then
//! recurse on the pieces left and right of it) and `T` is the combined
//! length of both inputs. Case handling is left to the caller.

use std::collections::HashMap;

/// Similarity in `[0.0, 1.0]`; `1.0` when both inputs are empty.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Positions of every char of `b`, ascending.
    let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b_index.entry(ch).or_default().push(j);
    }

    let mut matched = 0usize;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(&a, &b_index, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            pending.push((alo, i, blo, j));
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Longest block `a[i..i+size] == b[j..j+size]` within the given window;
/// ties resolve to the earliest position in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b_index: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run_lengths[j] = length of the common run ending at a[i], b[j].
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs = HashMap::new();
        if let Some(positions) = b_index.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = match j.checked_sub(1) {
                    Some(prev) => run_lengths.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                next_runs.insert(j, len);
                if len > best_size {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_size = len;
                }
            }
        }
        run_lengths = next_runs;
    }
    (best_i, best_j, best_size)
}
