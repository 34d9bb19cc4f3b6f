//! Token-level Levenshtein distance.
//!
//! Tokens are compared as atoms: a one-letter misspelling costs a full
//! substitution, same as an entirely different word.

/// Minimum number of token insertions, deletions and substitutions that
/// turn `a` into `b`.
///
/// Runs in `O(|a|·|b|)` time with a single row of `O(min(|a|, |b|))` memory.
pub fn levenshtein_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, long_tok) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_tok) in short.iter().enumerate() {
            let sub_cost = usize::from(long_tok != short_tok);
            let del = prev[j + 1] + 1;
            let ins = curr[j] + 1;
            let sub = prev[j] + sub_cost;
            curr[j + 1] = del.min(ins).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
