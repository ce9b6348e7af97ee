use std::f64::consts::E;

pub fn norm<const N: usize>(p: f64, values: [f64; N]) -> f64 {
    values
        .into_iter()
        .map(|x| f64::powf(x, p))
        .sum::<f64>()
        .powf(p.recip())
}

pub fn bell_curve(x: f64, mean: f64, width: f64, multiplier: Option<f64>) -> f64 {
    multiplier.unwrap_or(1.0) * f64::exp(E * -(f64::powf(x - mean, 2.0) / f64::powf(width, 2.0)))
}

/// Falls from `middle + height / 2` to `middle - height / 2` around `center`.
pub fn inverted_sigmoid(value: f64, center: f64, width: f64, middle: f64, height: f64) -> f64 {
    f64::tanh(E * -(value - center) / width) * (height / 2.0) + middle
}

/// Rises from `middle - height / 2` to `middle + height / 2` around `center`.
pub fn sigmoid(value: f64, center: f64, width: f64, middle: f64, height: f64) -> f64 {
    2.0 * middle - inverted_sigmoid(value, center, width, middle, height)
}
