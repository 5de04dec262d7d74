//! Name matching by string similarity.
//!
//! Package and artifact names are paired by the Ratcliff/Obershelp "gestalt"
//! ratio: the longest common block is matched first, then the same is done
//! recursively on the unmatched pieces to its left and right.

/// A candidate name selected by [`best_match`], with its similarity ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    pub name: String,
    pub ratio: f64,
}

/// Similarity of two strings in `[0.0, 1.0]`.
///
/// Computed as `2 * M / T`, where `T` is the total number of characters in
/// both strings and `M` the number of characters in matching blocks. Two
/// empty strings are identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Pick the candidate most similar to `target`.
///
/// `key` maps a candidate to the string that is compared (for example a
/// lowercased form). The first candidate with the maximal ratio wins, so
/// callers control tie-breaking through the order of `candidates`.
pub fn best_match<'a, I, F>(candidates: I, target: &str, key: F) -> Option<NameMatch>
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> String,
{
    let mut best: Option<NameMatch> = None;

    for candidate in candidates {
        let ratio = similarity_ratio(&key(candidate), target);
        let better = match &best {
            Some(current) => ratio > current.ratio,
            None => true,
        };
        if better {
            best = Some(NameMatch {
                name: candidate.clone(),
                ratio,
            });
        }
    }

    best
}

/// Total size of the matching blocks of `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, k)` with `a[i..i+k] == b[j..j+k]`. Among equally long
/// blocks the one starting earliest in `a`, then earliest in `b`, is chosen.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);

    // prev[off + 1] = length of the block ending at (i - 1, blo + off)
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];

    for i in alo..ahi {
        let mut cur = vec![0usize; width + 1];
        for (off, j) in (blo..bhi).enumerate() {
            if a[i] != b[j] {
                continue;
            }
            let k = prev[off] + 1;
            cur[off + 1] = k;
            if k > best_k {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_k = k;
            }
        }
        prev = cur;
    }

    (best_i, best_j, best_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn assert_ratio(a: &str, b: &str, expected: f64) {
        let ratio = similarity_ratio(a, b);
        assert!(
            (ratio - expected).abs() < 1e-9,
            "ratio({:?}, {:?}) = {}, expected {}",
            a,
            b,
            ratio,
            expected
        );
    }

    #[test]
    fn test_ratio_known_values() {
        assert_ratio("abcd", "bcde", 0.75);
        assert_ratio("walk", "walk", 1.0);
        assert_ratio("abc", "xyz", 0.0);
        assert_ratio("", "", 1.0);
        assert_ratio("", "walk", 0.0);
        // "crawler" is a full block inside "webcrawler": 2 * 7 / 17
        assert_ratio("webcrawler", "crawler", 14.0 / 17.0);
    }

    #[test]
    fn test_ratio_recurses_on_both_sides() {
        // blocks "b" .. "cd" .. "f" around the longest match
        assert_ratio("abxcdyf", "bcdf", 2.0 * 4.0 / 11.0);
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b, 0, 4, 0, 2), (0, 0, 2));
    }

    #[test]
    fn test_best_match_picks_highest_ratio() {
        let candidates = names(&["ArraySet", "Implementor", "Walk", "WebCrawler"]);
        let best = best_match(&candidates, "walk", |s| s.to_lowercase()).unwrap();
        assert_eq!(best.name, "Walk");
        assert_eq!(best.ratio, 1.0);

        let best = best_match(&candidates, "crawler", |s| s.to_lowercase()).unwrap();
        assert_eq!(best.name, "WebCrawler");
    }

    #[test]
    fn test_best_match_key_is_applied() {
        let candidates = names(&["Walk"]);
        let exact = best_match(&candidates, "walk", |s| s.to_string()).unwrap();
        assert!(exact.ratio < 1.0);
    }

    #[test]
    fn test_best_match_ties_resolve_to_first() {
        let candidates = names(&["xa", "ya"]);
        let best = best_match(&candidates, "ab", |s| s.to_string()).unwrap();
        assert_eq!(best.name, "xa");
        assert_eq!(best.ratio, 0.5);

        let reversed = names(&["ya", "xa"]);
        let best = best_match(&reversed, "ab", |s| s.to_string()).unwrap();
        assert_eq!(best.name, "ya");
    }

    #[test]
    fn test_best_match_empty() {
        let candidates: Vec<String> = Vec::new();
        assert!(best_match(&candidates, "walk", |s| s.to_string()).is_none());
    }
}
