//! VENUS96 native units and their conversion to GROMACS units.
//!
//! VENUS96 reports coordinates in Å, momenta in amu·Å/(10⁻¹⁴ s) and times
//! in 10⁻¹⁴ s. Every output format works in nm, nm/ps and ps.

/// Å → nm.
pub const ANGSTROM_TO_NM: f64 = 0.1;

/// nm → Å.
pub const NM_TO_ANGSTROM: f64 = 10.0;

/// 10⁻¹⁴ s → ps.
pub const VENUS_TIME_TO_PS: f64 = 1.0e-2;

/// (amu·Å/10⁻¹⁴ s) / amu → nm/ps.
pub const VENUS_VELOCITY_TO_NM_PER_PS: f64 = 10.0;

#[inline]
pub fn angstrom_to_nm(v: [f64; 3]) -> [f64; 3] {
    scale(v, ANGSTROM_TO_NM)
}

#[inline]
pub fn nm_to_angstrom(v: [f64; 3]) -> [f64; 3] {
    scale(v, NM_TO_ANGSTROM)
}

#[inline]
pub fn venus_time_to_ps(time: f64) -> f64 {
    time * VENUS_TIME_TO_PS
}

/// Converts a momentum in amu·Å/(10⁻¹⁴ s) of an atom of `mass` amu into a
/// velocity in nm/ps.
#[inline]
pub fn momentum_to_velocity(momentum: [f64; 3], mass: f64) -> [f64; 3] {
    scale(momentum, VENUS_VELOCITY_TO_NM_PER_PS / mass)
}

#[inline]
fn scale(v: [f64; 3], factor: f64) -> [f64; 3] {
    [v[0] * factor, v[1] * factor, v[2] * factor]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn assert_vec_eq(actual: [f64; 3], expected: [f64; 3]) {
        for k in 0..3 {
            assert!(
                approx_eq(actual[k], expected[k], 1e-12),
                "component {k}: {} vs {}",
                actual[k],
                expected[k]
            );
        }
    }

    #[test]
    fn positions_convert_to_nanometres() {
        assert_vec_eq(angstrom_to_nm([10.0, 20.0, 30.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn nanometres_convert_back_to_angstrom() {
        assert_vec_eq(nm_to_angstrom([0.1, -0.25, 1.5]), [1.0, -2.5, 15.0]);
    }

    #[test]
    fn time_converts_to_picoseconds() {
        assert!(approx_eq(venus_time_to_ps(250.0), 2.5, 1e-12));
        assert!(approx_eq(venus_time_to_ps(0.0), 0.0, 1e-12));
    }

    #[test]
    fn unit_mass_momentum_gives_ten_nm_per_ps() {
        let mass = 12.011;
        assert_vec_eq(
            momentum_to_velocity([mass, 0.0, 0.0], mass),
            [10.0, 0.0, 0.0],
        );
    }

    #[test]
    fn velocity_scales_inversely_with_mass() {
        assert_vec_eq(momentum_to_velocity([4.0, -2.0, 1.0], 2.0), [20.0, -10.0, 5.0]);
    }
}
