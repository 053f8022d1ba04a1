//! Closed-form link performance for BPSK over AWGN
//!
//! The curve the Monte-Carlo estimate is judged against:
//! Pb = Q(sqrt(2*Eb/No)) = 0.5 * erfc(sqrt(Eb/No)).
//!
//! The error function here is W. J. Cody's rational approximation, accurate
//! to a few ulp across the whole range. The common Abramowitz & Stegun
//! polynomial is only good to ~1.5e-7 absolute, which is useless at high
//! SNR where the BER itself sits below 1e-8.

/// Convert a dB quantity to linear scale: `10^(db/10)`
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Theoretical BPSK bit error probability at linear Eb/No
pub fn bpsk_ber(snr_linear: f64) -> f64 {
    0.5 * erfc(snr_linear.sqrt())
}

// Cody's coefficients for erf on |x| <= 0.46875
const ERF_A: [f64; 5] = [
    3.16112374387056560e0,
    1.13864154151050156e2,
    3.77485237685302021e2,
    3.20937758913846947e3,
    1.85777706184603153e-1,
];
const ERF_B: [f64; 4] = [
    2.36012909523441209e1,
    2.44024637934444173e2,
    1.28261652607737228e3,
    2.84423683343917062e3,
];

// Coefficients for erfc on 0.46875 < x <= 4.0
const ERFC_C: [f64; 9] = [
    5.64188496988670089e-1,
    8.88314979438837594e0,
    6.61191906371416295e1,
    2.98635138197400131e2,
    8.81952221241769090e2,
    1.71204761263407058e3,
    2.05107837782607147e3,
    1.23033935479799725e3,
    2.15311535474403846e-8,
];
const ERFC_D: [f64; 8] = [
    1.57449261107098347e1,
    1.17693950891312499e2,
    5.37181101862009858e2,
    1.62138957456669019e3,
    3.29079923573345963e3,
    4.36261909014324716e3,
    3.43936767414372164e3,
    1.23033935480374942e3,
];

// Coefficients for erfc on x > 4.0
const ERFC_P: [f64; 6] = [
    3.05326634961232344e-1,
    3.60344899949804439e-1,
    1.25781726111229246e-1,
    1.60837851487422766e-2,
    6.58749161529837803e-4,
    1.63153871373020978e-2,
];
const ERFC_Q: [f64; 5] = [
    2.56852019228982242e0,
    1.87295284992346047e0,
    5.27905102951428412e-1,
    6.05183413124413191e-2,
    2.33520497626869185e-3,
];

/// 1/sqrt(pi)
const FRAC_1_SQRT_PI: f64 = 5.641_895_835_477_562_9e-1;

/// Gauss error function
pub fn erf(x: f64) -> f64 {
    if x.abs() <= 0.46875 {
        erf_core(x)
    } else {
        1.0 - erfc(x)
    }
}

/// Complementary error function, `1 - erf(x)`, without cancellation loss
/// for large arguments
pub fn erfc(x: f64) -> f64 {
    let y = x.abs();
    if y <= 0.46875 {
        return 1.0 - erf_core(x);
    }

    let raw = if y <= 4.0 { erfc_mid(y) } else { erfc_far(y) };

    // exp(-y^2) in two factors keeps the argument rounding error small
    let ysq = (y * 16.0).floor() / 16.0;
    let del = (y - ysq) * (y + ysq);
    let result = (-ysq * ysq).exp() * (-del).exp() * raw;

    if x < 0.0 {
        2.0 - result
    } else {
        result
    }
}

/// erf on the central interval |x| <= 0.46875
fn erf_core(x: f64) -> f64 {
    let z = if x.abs() > f64::EPSILON { x * x } else { 0.0 };
    let mut num = ERF_A[4] * z;
    let mut den = z;
    for i in 0..3 {
        num = (num + ERF_A[i]) * z;
        den = (den + ERF_B[i]) * z;
    }
    x * (num + ERF_A[3]) / (den + ERF_B[3])
}

/// exp(y^2) * erfc(y) on 0.46875 < y <= 4.0
fn erfc_mid(y: f64) -> f64 {
    let mut num = ERFC_C[8] * y;
    let mut den = y;
    for i in 0..7 {
        num = (num + ERFC_C[i]) * y;
        den = (den + ERFC_D[i]) * y;
    }
    (num + ERFC_C[7]) / (den + ERFC_D[7])
}

/// exp(y^2) * erfc(y) on y > 4.0
fn erfc_far(y: f64) -> f64 {
    let z = 1.0 / (y * y);
    let mut num = ERFC_P[5] * z;
    let mut den = z;
    for i in 0..4 {
        num = (num + ERFC_P[i]) * z;
        den = (den + ERFC_Q[i]) * z;
    }
    let r = z * (num + ERFC_P[4]) / (den + ERFC_Q[4]);
    (FRAC_1_SQRT_PI - r) / y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rel_tol: f64, what: &str) {
        let err = (actual - expected).abs() / expected.abs().max(f64::MIN_POSITIVE);
        assert!(
            err < rel_tol,
            "{}: got {:e}, expected {:e} (rel err {:e})",
            what,
            actual,
            expected,
            err
        );
    }

    #[test]
    fn test_erf_reference_values() {
        assert_eq!(erf(0.0), 0.0);
        assert_close(erf(0.5), 0.5204998778130465, 1e-14, "erf(0.5)");
        assert_close(erf(1.0), 0.8427007929497149, 1e-14, "erf(1.0)");
        assert_close(erf(2.0), 0.9953222650189527, 1e-14, "erf(2.0)");
        assert_close(erf(-1.0), -0.8427007929497149, 1e-14, "erf(-1.0)");
    }

    #[test]
    fn test_erfc_reference_values() {
        assert_close(erfc(0.0), 1.0, 1e-15, "erfc(0)");
        assert_close(erfc(1.0), 0.15729920705028513, 1e-14, "erfc(1.0)");
        // Deep tail, where absolute-error approximations fall apart
        assert_close(erfc(4.0), 1.541725790028002e-8, 1e-12, "erfc(4.0)");
        assert_close(erfc(-2.0), 1.9953222650189527, 1e-14, "erfc(-2.0)");
    }

    #[test]
    fn test_erfc_far_tail_stays_accurate() {
        // Arguments above 4.0 switch to the asymptotic branch; these pin
        // its full rational fit, not just the crossover point.
        assert_close(erfc(4.5), 1.9661604415428873e-10, 1e-13, "erfc(4.5)");
        assert_close(erfc(5.0), 1.5374597944280351e-12, 1e-13, "erfc(5.0)");
        assert_close(erfc(6.0), 2.1519736712498916e-17, 1e-13, "erfc(6.0)");
    }

    #[test]
    fn test_erf_erfc_complementary() {
        for i in 0..100 {
            let x = -5.0 + 0.1 * f64::from(i);
            let sum = erf(x) + erfc(x);
            assert!(
                (sum - 1.0).abs() < 1e-13,
                "erf + erfc = {} at x = {}",
                sum,
                x
            );
        }
    }

    #[test]
    fn test_db_to_linear() {
        assert_close(db_to_linear(0.0), 1.0, 1e-15, "0 dB");
        assert_close(db_to_linear(10.0), 10.0, 1e-15, "10 dB");
        assert_close(db_to_linear(-3.0), 0.5011872336272722, 1e-14, "-3 dB");
    }

    #[test]
    fn test_bpsk_ber_closed_form_table() {
        // 0.5 * erfc(sqrt(10^(dB/10))) at the reference sweep points
        let expected = [
            (0.0, 7.864960352514257e-2),
            (2.0, 3.750612835892598e-2),
            (4.0, 1.2500818040737556e-2),
            (6.0, 2.3882907809328075e-3),
            (8.0, 1.9090777407599314e-4),
            (10.0, 3.872108215522037e-6),
            (12.0, 9.00601035062875e-9),
            // Above ~12.04 dB the erfc argument crosses 4.0 into the
            // asymptotic branch
            (13.0, 1.33293101753005e-10),
            (14.0, 6.810189128780765e-13),
        ];
        for (db, value) in expected {
            assert_close(
                bpsk_ber(db_to_linear(db)),
                value,
                1e-10,
                &format!("BER at {} dB", db),
            );
        }
    }

    #[test]
    fn test_bpsk_ber_monotonically_non_increasing() {
        let mut prev = f64::INFINITY;
        for i in 0..=560 {
            let db = -40.0 + 0.1 * f64::from(i);
            let ber = bpsk_ber(db_to_linear(db));
            assert!(
                ber <= prev,
                "BER increased from {:e} to {:e} at {} dB",
                prev,
                ber,
                db
            );
            prev = ber;
        }
    }

    #[test]
    fn test_bpsk_ber_bounded_below_half() {
        for i in 0..=560 {
            let db = -40.0 + 0.1 * f64::from(i);
            let ber = bpsk_ber(db_to_linear(db));
            assert!(
                ber > 0.0 && ber <= 0.5,
                "BER {:e} out of (0, 0.5] at {} dB",
                ber,
                db
            );
        }
    }
}
