use std::f64::consts::PI;

/// Oscillation frequency of the exponent in Hz.
pub const FREQUENCY_HZ: f64 = 1.0;

/// Evaluate `h(t) = 3·π·exp(−λ(t))` with `λ(t) = 5·sin(2·π·f·t)`.
///
/// Defined for every finite `t`; the result lies in `[3π·e⁻⁵, 3π·e⁵]`.
/// The operations are evaluated left to right so exported values stay
/// comparable with other double-precision implementations.
pub fn sample(t: f64) -> f64 {
    let lambda = 5.0 * (2.0 * PI * FREQUENCY_HZ * t).sin();
    3.0 * PI * (-lambda).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_three_pi() {
        assert_eq!(sample(0.0), 3.0 * PI);
    }

    #[test]
    fn extremes_at_quarter_periods() {
        let min = 3.0 * PI * (-5.0f64).exp();
        let max = 3.0 * PI * 5.0f64.exp();
        assert!((sample(0.25) - min).abs() < 1e-12);
        assert!((sample(0.75) - max).abs() / max < 1e-12);
    }
}
