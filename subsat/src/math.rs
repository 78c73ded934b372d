pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn apply<T: Copy, R>(x: &[T], func: impl Fn(T) -> R) -> Vec<R> {
    x.iter().map(|x| func(*x)).collect()
}

pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![a];
    }
    if n == 2 {
        return vec![a, b];
    }
    (0..n)
        .map(|i| {
            if i == n - 1 {
                return b;
            }
            let t = i as f64 / (n - 1) as f64;
            lerp(a, b, t)
        })
        .collect()
}

/// (computed - expected) / expected
pub fn relative_error(computed: f64, expected: f64) -> f64 {
    (computed - expected) / expected
}
