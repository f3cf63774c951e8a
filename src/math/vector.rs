/// Element-wise `a - b`. Panics on length mismatch.
pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "cannot subtract vectors of len {} and {}", a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

/// Element-wise (Hadamard) product. Panics on length mismatch.
pub fn hadamard(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "cannot multiply vectors of len {} and {}", a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).collect()
}

/// Index of the maximum element; the first index wins ties.
///
/// Returns 0 for an empty slice. NaN entries never win.
pub fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for i in 1..v.len() {
        if v[i] > v[best] {
            best = i;
        }
    }
    best
}
