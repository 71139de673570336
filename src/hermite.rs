//! Evaluation of a single cubic Hermite segment.

/// Value at normalized position `t` of the cubic matching values `y0`, `y1`
/// and slopes `m0`, `m1` at the ends of a segment of width `dx`.
pub(crate) fn evaluate(t: f64, dx: f64, y0: f64, m0: f64, y1: f64, m1: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * y0 + h10 * dx * m0 + h01 * y1 + h11 * dx * m1
}

#[cfg(test)]
mod tests {

    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(1.25, evaluate(0.0, 2.0, 1.25, 3.0, 5.5, -1.0));
        assert_eq!(5.5, evaluate(1.0, 2.0, 1.25, 3.0, 5.5, -1.0));
    }

    #[test]
    fn midpoint_value() {
        // h00 = h01 = 0.5 and h10 = -h11 = 0.125 at t = 0.5.
        assert_eq!(4.0, evaluate(0.5, 2.0, 1.0, 3.0, 5.0, -1.0));
    }

    #[test]
    fn reproduces_a_line() {
        let eps = 1e-12;
        let y0 = 2.0;
        let m = 1.5;
        let dx = 0.8;
        let y1 = y0 + m * dx;

        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_approx_eq!(y0 + m * dx * t, evaluate(t, dx, y0, m, y1, m), eps);
        }
    }
}
