//! # Darcy Friction Factor
//!
//! Solves the implicit Colebrook-White relation for the Darcy friction
//! factor from Reynolds number and relative roughness.
//!
//! ## Algorithm Overview
//!
//! 1. Below the laminar limit, return the exact `64/Re`
//! 2. Otherwise seed with the explicit Haaland approximation
//! 3. Iterate the Colebrook fixed point, flooring any non-positive iterate
//! 4. Stop on convergence or at the iteration cap; return the last iterate
//!
//! The iteration cap and tolerance live in [`crate::constants`] so callers
//! and tests can reason about termination. The loop is bounded, so the
//! solver always returns in bounded time; slow convergence is not an error.
//!
//! ## References
//!
//! - Colebrook, C.F. (1939), J. Inst. Civil Engineers 11
//! - Haaland, S.E. (1983), J. Fluids Engineering 105

use crate::constants::{
    COLEBROOK_MAX_ITERATIONS, COLEBROOK_TOLERANCE, FRICTION_FACTOR_FLOOR, LAMINAR_RE_LIMIT,
};

/// Darcy friction factor for the given Reynolds number and relative
/// roughness ε/D (clamped to ≥ 0).
///
/// Laminar flow (`Re < 2000`) returns `64/Re` exactly, or 0 for `Re ≤ 0`.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> f64 {
    if reynolds < LAMINAR_RE_LIMIT {
        if reynolds <= 0.0 {
            return 0.0;
        }
        return 64.0 / reynolds;
    }

    let rr = relative_roughness.max(0.0);

    // Haaland explicit seed: 1/√f = -1.8·log10((ε/D/3.7)^1.11 + 6.9/Re)
    let haaland = -1.8 * ((rr / 3.7).powf(1.11) + 6.9 / reynolds).log10();
    let mut f = if haaland > 0.0 {
        1.0 / (haaland * haaland)
    } else {
        FRICTION_FACTOR_FLOOR
    };

    for _ in 0..COLEBROOK_MAX_ITERATIONS {
        // 1/√f = -2·log10(ε/D/3.7 + 2.51/(Re·√f))
        let inv_sqrt = -2.0 * (rr / 3.7 + 2.51 / (reynolds * f.sqrt())).log10();
        let mut next = 1.0 / (inv_sqrt * inv_sqrt);
        if !next.is_finite() || next <= 0.0 {
            next = FRICTION_FACTOR_FLOOR;
        }
        let converged = (next - f).abs() < COLEBROOK_TOLERANCE;
        f = next;
        if converged {
            break;
        }
    }

    f
}
