//! Continuous probability distributions.

mod exponential;
mod laplace;
mod normal;
mod uniform;
mod weibull;

pub use exponential::Exponential;
pub use laplace::Laplace;
pub use normal::Normal;
pub use uniform::Uniform;
pub use weibull::Weibull;

/// Helper module for special functions used in distributions.
pub(crate) mod special {
    use statrs::function::{erf as statrs_erf, gamma as statrs_gamma};

    /// Standard normal PDF constant: 1/sqrt(2π)
    pub const INV_SQRT_2PI: f64 = 0.3989422804014327;

    /// ln(sqrt(2π))
    pub const LN_SQRT_2PI: f64 = 0.9189385332046727;

    /// Complementary error function: erfc(x) = 1 - erf(x)
    pub fn erfc(x: f64) -> f64 {
        statrs_erf::erfc(x)
    }

    /// Inverse error function.
    pub fn erfinv(x: f64) -> f64 {
        statrs_erf::erf_inv(x)
    }

    /// Standard normal PDF: φ(x)
    pub fn norm_pdf(x: f64) -> f64 {
        INV_SQRT_2PI * (-0.5 * x * x).exp()
    }

    /// Standard normal CDF: Φ(x)
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal quantile function: Φ⁻¹(p)
    pub fn norm_ppf(p: f64) -> f64 {
        std::f64::consts::SQRT_2 * erfinv(2.0 * p - 1.0)
    }

    /// Gamma function.
    pub fn gamma(x: f64) -> f64 {
        statrs_gamma::gamma(x)
    }

    /// 10-point Gauss-Legendre nodes on [-1, 1].
    const GL_NODES: [f64; 10] = [
        -0.9739065285171717,
        -0.8650633666889845,
        -0.6794095682990244,
        -0.4333953941292472,
        -0.1488743389816312,
        0.1488743389816312,
        0.4333953941292472,
        0.6794095682990244,
        0.8650633666889845,
        0.9739065285171717,
    ];

    /// 10-point Gauss-Legendre weights on [-1, 1].
    const GL_WEIGHTS: [f64; 10] = [
        0.0666713443086881,
        0.1494513491505806,
        0.2190863625159820,
        0.2692667193099963,
        0.2955242247147529,
        0.2955242247147529,
        0.2692667193099963,
        0.2190863625159820,
        0.1494513491505806,
        0.0666713443086881,
    ];

    /// Standard bivariate normal CDF: P(X ≤ h, Y ≤ k) for correlation ρ.
    ///
    /// Drezner-Wesolowsky single-integral form,
    ///
    /// Φ₂(h, k, ρ) = Φ(h)Φ(k)
    ///   + (1/2π) ∫₀^ρ exp(-(h² - 2thk + k²)/(2(1-t²))) / √(1-t²) dt,
    ///
    /// evaluated with a 10-point Gauss-Legendre rule. The |ρ| → 1 limits
    /// are handled exactly.
    pub fn bivariate_norm_cdf(h: f64, k: f64, rho: f64) -> f64 {
        if rho >= 0.9999 {
            return norm_cdf(h.min(k));
        }
        if rho <= -0.9999 {
            return (norm_cdf(h) + norm_cdf(k) - 1.0).max(0.0);
        }

        let mut integral = 0.0;
        let half = rho / 2.0;
        for (&node, &weight) in GL_NODES.iter().zip(GL_WEIGHTS.iter()) {
            let t = half + half * node;
            let omt2 = 1.0 - t * t;
            let expo = -(h * h - 2.0 * t * h * k + k * k) / (2.0 * omt2);
            integral += weight * expo.exp() / omt2.sqrt();
        }
        integral *= half / (2.0 * std::f64::consts::PI);

        (norm_cdf(h) * norm_cdf(k) + integral).clamp(0.0, 1.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_norm_cdf_ppf_roundtrip() {
            for p in [0.01, 0.1, 0.5, 0.9, 0.975] {
                assert!((norm_cdf(norm_ppf(p)) - p).abs() < 1e-10);
            }
            assert!((norm_ppf(0.975) - 1.959964).abs() < 1e-5);
        }

        #[test]
        fn test_bivariate_independent() {
            // ρ = 0 factorizes
            for (h, k) in [(0.0, 0.0), (1.0, -0.5), (-2.0, 1.5)] {
                let p = bivariate_norm_cdf(h, k, 0.0);
                assert!((p - norm_cdf(h) * norm_cdf(k)).abs() < 1e-10);
            }
        }

        #[test]
        fn test_bivariate_known_values() {
            // Φ₂(0, 0, ρ) = 1/4 + asin(ρ)/2π
            for rho in [-0.8, -0.3, 0.0, 0.3, 0.5, 0.8] {
                let expected = 0.25 + (rho as f64).asin() / (2.0 * std::f64::consts::PI);
                let got = bivariate_norm_cdf(0.0, 0.0, rho);
                assert!(
                    (got - expected).abs() < 1e-6,
                    "rho={}: got {}, expected {}",
                    rho,
                    got,
                    expected
                );
            }
        }

        #[test]
        fn test_bivariate_limits() {
            assert!((bivariate_norm_cdf(0.5, 1.0, 1.0) - norm_cdf(0.5)).abs() < 1e-12);
            let p = bivariate_norm_cdf(0.5, 1.0, -1.0);
            assert!((p - (norm_cdf(0.5) + norm_cdf(1.0) - 1.0)).abs() < 1e-12);
        }
    }
}
