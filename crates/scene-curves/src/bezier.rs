//! Scalar cubic Bezier easing.

/// Cubic Bezier easing evaluator.
///
/// Treats the curve `(0,0) (x1,y1) (x2,y2) (1,1)` as a function of x and
/// evaluates y at a given x, the way CSS timing functions do.
pub struct BezierCurve;

impl BezierCurve {
    /// Returns the y of the easing curve at `gradient` in [0, 1].
    ///
    /// Inverts x(t) with five Newton steps seeded at `gradient`, clamping
    /// each step into [0, 1], then evaluates y at the refined t. Five
    /// iterations hold visual accuracy for animation easing without a
    /// convergence check.
    pub fn interpolate(gradient: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
        let f0 = 1.0 - 3.0 * x2 + 3.0 * x1;
        let f1 = 3.0 * x2 - 6.0 * x1;
        let f2 = 3.0 * x1;

        let mut refined_t = gradient;
        for _ in 0..5 {
            let refined_t2 = refined_t * refined_t;
            let refined_t3 = refined_t2 * refined_t;

            let x = f0 * refined_t3 + f1 * refined_t2 + f2 * refined_t;
            let slope = 1.0 / (3.0 * f0 * refined_t2 + 2.0 * f1 * refined_t + f2);
            refined_t -= (x - gradient) * slope;
            refined_t = refined_t.clamp(0.0, 1.0);
        }

        3.0 * (1.0 - refined_t).powi(2) * refined_t * y1
            + 3.0 * (1.0 - refined_t) * refined_t.powi(2) * y2
            + refined_t.powi(3)
    }
}
