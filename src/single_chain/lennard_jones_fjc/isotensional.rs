//! Isotensional thermodynamics of the Lennard-Jones freely-jointed chain.
//!
//! The single-link partition function has no closed form, so the exact
//! quantities integrate `∫ λ·sinh(ηλ)·e^(−u(λ)) dλ` over the stable stretch
//! range by the midpoint rule. The asymptotic facet is a Laplace expansion
//! about the mechanical stretch `λ(η)`, valid for stiff links; the reduced
//! facet drops the Gaussian-fluctuation logarithm.

use super::link_potential::{
    mechanical_stretch, potential, potential_curvature, potential_third_derivative, stretch_max,
};
use crate::math::constants::{rotational_partition_factor, BOLTZMANN_CONSTANT};
use crate::math::quadrature::integrate;
use crate::math::special::{langevin, ln_sinhc};

/// Cells of the midpoint grid for the link partition integrals.
const INTEGRATION_CELLS: usize = 10_000;

/// Force below which the exact extension switches to its Maclaurin series.
const SERIES_BOUND: f64 = 1e-3;

/// Weighted stretch moment `∫ λ^p e^(−u(λ)) dλ` over the stable range.
#[inline]
fn stretch_moment(exponent: i32, kappa: f64) -> f64 {
    integrate(
        |stretch| stretch.powi(exponent) * (-potential(stretch, kappa)).exp(),
        0.0,
        stretch_max(),
        INTEGRATION_CELLS,
    )
}

/// Exact nondimensional extension per link, `B₂(η)/B₁(η) − 1/η`.
pub(super) fn exact_extension(eta: f64, kappa: f64) -> f64 {
    if eta.abs() < SERIES_BOUND {
        // The 1/η pieces of the ratio cancel; keep the leading odd term.
        eta * stretch_moment(4, kappa) / (3.0 * stretch_moment(2, kappa))
    } else {
        let odd = integrate(
            |stretch| stretch * (eta * stretch).sinh() * (-potential(stretch, kappa)).exp(),
            0.0,
            stretch_max(),
            INTEGRATION_CELLS,
        );
        let even = integrate(
            |stretch| stretch.powi(2) * (eta * stretch).cosh() * (-potential(stretch, kappa)).exp(),
            0.0,
            stretch_max(),
            INTEGRATION_CELLS,
        );
        even / odd - 1.0 / eta
    }
}

/// Exact nondimensional relative Gibbs free energy per link, `−ln(z(η)/z(0))`.
pub(super) fn exact_relative_gibbs(eta: f64, kappa: f64) -> f64 {
    let odd = integrate(
        |stretch| stretch * (eta * stretch).sinh() * (-potential(stretch, kappa)).exp(),
        0.0,
        stretch_max(),
        INTEGRATION_CELLS,
    );
    -(odd / (eta * stretch_moment(2, kappa))).ln()
}

/// Asymptotic nondimensional extension per link, `L(η) + (λ−1) − u‴(λ)/(2u″(λ)²)`.
pub(super) fn asymptotic_extension(eta: f64, kappa: f64) -> f64 {
    let stretch = mechanical_stretch(eta, kappa);
    langevin(eta) + stretch - 1.0
        - potential_third_derivative(stretch, kappa)
            / (2.0 * potential_curvature(stretch, kappa).powi(2))
}

/// Asymptotic nondimensional relative Gibbs free energy per link.
pub(super) fn asymptotic_relative_gibbs(eta: f64, kappa: f64) -> f64 {
    let stretch = mechanical_stretch(eta, kappa);
    potential(stretch, kappa) - eta * (stretch - 1.0) - ln_sinhc(eta)
        + 0.5 * (potential_curvature(stretch, kappa) / kappa).ln()
}

/// Reduced nondimensional extension per link, `L(η) + λ(η) − 1`.
pub(super) fn reduced_extension(eta: f64, kappa: f64) -> f64 {
    langevin(eta) + mechanical_stretch(eta, kappa) - 1.0
}

/// Reduced nondimensional relative Gibbs free energy per link.
pub(super) fn reduced_relative_gibbs(eta: f64, kappa: f64) -> f64 {
    let stretch = mechanical_stretch(eta, kappa);
    potential(stretch, kappa) - eta * (stretch - 1.0) - ln_sinhc(eta)
}

/// Per-link reference of the absolute free energies, `ln Λ(T) + ½·ln(2π/κ)`.
#[inline]
pub(super) fn reference_scale(hinge_mass: f64, link_length: f64, kappa: f64, temperature: f64) -> f64 {
    rotational_partition_factor(hinge_mass, link_length, temperature).ln()
        + 0.5 * (2.0 * std::f64::consts::PI / kappa).ln()
}

/// The isotensional view of the Lennard-Jones chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotensional {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
    /// Legendre transform into Helmholtz quantities as functions of force.
    pub legendre: IsotensionalLegendre,
    /// Stiff-link asymptotic expansion of the exact quantities.
    pub asymptotic: IsotensionalAsymptotic,
}

impl Isotensional {
    pub(super) fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        link_stiffness: f64,
    ) -> Self {
        Self {
            number_of_links,
            link_length,
            hinge_mass,
            link_stiffness,
            legendre: IsotensionalLegendre {
                number_of_links,
                link_length,
                hinge_mass,
                link_stiffness,
            },
            asymptotic: IsotensionalAsymptotic {
                number_of_links,
                link_length,
                link_stiffness,
                reduced: IsotensionalAsymptoticReduced {
                    number_of_links,
                    link_length,
                    link_stiffness,
                },
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Peak force the link potential can sustain, in J/(mol·nm).
    pub fn maximum_force(&self, temperature: f64) -> f64 {
        super::link_potential::force_max(self.kappa(temperature)) * BOLTZMANN_CONSTANT * temperature
            / self.link_length
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * exact_extension(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.links() * exact_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        exact_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Gibbs free energy under fixed force.
    pub fn gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Gibbs free energy per link under fixed force.
    pub fn gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_gibbs_free_energy_per_link(self.eta(force, temperature), temperature)
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * exact_relative_gibbs(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional Gibbs free energy.
    pub fn nondimensional_gibbs_free_energy(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.nondimensional_gibbs_free_energy_per_link(nondimensional_force, temperature) * self.links()
    }

    /// Nondimensional Gibbs free energy per link.
    pub fn nondimensional_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        exact_relative_gibbs(nondimensional_force, kappa)
            - reference_scale(self.hinge_mass, self.link_length, kappa, temperature)
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.links() * exact_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy per link.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        exact_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }
}

/// Helmholtz quantities of the Lennard-Jones chain as functions of force.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalLegendre {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
}

impl IsotensionalLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Helmholtz free energy at the extension conjugate to `force`.
    pub fn helmholtz_free_energy(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_helmholtz_free_energy(self.eta(force, temperature), temperature)
    }

    /// Helmholtz free energy per link at the extension conjugate to `force`.
    pub fn helmholtz_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.helmholtz_free_energy(force, temperature) / self.links()
    }

    /// Relative Helmholtz free energy at the extension conjugate to `force`.
    pub fn relative_helmholtz_free_energy(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_helmholtz_free_energy(self.eta(force, temperature), temperature)
    }

    /// Per-link relative Helmholtz free energy at the extension conjugate to `force`.
    pub fn relative_helmholtz_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.relative_helmholtz_free_energy(force, temperature) / self.links()
    }

    /// Nondimensional Helmholtz free energy.
    pub fn nondimensional_helmholtz_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_force, temperature)
            - (self.links() - 1.0)
                * reference_scale(self.hinge_mass, self.link_length, kappa, temperature)
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_force, temperature) / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `N·(η·γ(η) + ḡ_rel(η))`.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        self.links()
            * (nondimensional_force * exact_extension(nondimensional_force, kappa)
                + exact_relative_gibbs(nondimensional_force, kappa))
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_force, temperature)
            / self.links()
    }
}

/// Stiff-link asymptotic expansion of the isotensional quantities.
///
/// The Laplace expansion about the mechanical stretch carries a residual of
/// order `κ⁻¹` in the extension map over `[0, η_max]`; the nested `reduced`
/// facet drops the Gaussian-fluctuation logarithm and degrades to `κ⁻¹ᐟ²`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalAsymptotic {
    number_of_links: u8,
    link_length: f64,
    link_stiffness: f64,
    /// Leading-order truncation of the expansion.
    pub reduced: IsotensionalAsymptoticReduced,
}

impl IsotensionalAsymptotic {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * asymptotic_extension(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.links() * asymptotic_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        asymptotic_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * asymptotic_relative_gibbs(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.links() * asymptotic_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy per link.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        asymptotic_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }
}

/// Leading-order truncation of the stiff-link expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalAsymptoticReduced {
    number_of_links: u8,
    link_length: f64,
    link_stiffness: f64,
}

impl IsotensionalAsymptoticReduced {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link, `ℓ·(L(η) + λ(η) − 1)`.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * reduced_extension(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.links() * reduced_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        reduced_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * reduced_relative_gibbs(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.links() * reduced_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy per link.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        reduced_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadrature::{log_log_slope, rms_relative_error};
    use approx::assert_relative_eq;

    const KAPPA: f64 = 500.0;

    #[test]
    fn test_exact_extension_is_gibbs_derivative() {
        let h = 1e-6;
        for eta in [0.5, 2.0, 8.0] {
            let fd = -(exact_relative_gibbs(eta + h, KAPPA) - exact_relative_gibbs(eta - h, KAPPA))
                / (2.0 * h);
            assert_relative_eq!(exact_extension(eta, KAPPA), fd, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_asymptotic_extension_is_gibbs_derivative() {
        let h = 1e-6;
        for eta in [0.5, 2.0, 8.0] {
            let fd = -(asymptotic_relative_gibbs(eta + h, KAPPA)
                - asymptotic_relative_gibbs(eta - h, KAPPA))
                / (2.0 * h);
            assert_relative_eq!(asymptotic_extension(eta, KAPPA), fd, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_asymptotic_tracks_exact_for_stiff_links() {
        for eta in [0.5, 2.0, 8.0] {
            assert_relative_eq!(
                asymptotic_extension(eta, 5e3),
                exact_extension(eta, 5e3),
                max_relative = 1e-2
            );
        }
    }

    #[test]
    fn test_convergence_orders_over_the_force_window() {
        // Each chain is measured over its own stable force window; the
        // stiffness is high enough to reach the power-law regime of the
        // Laplace expansion.
        let stiff = 1.4e3;
        let residual = |kappa: f64, reduced: bool| {
            rms_relative_error(
                |eta| {
                    if reduced {
                        reduced_extension(eta, kappa)
                    } else {
                        asymptotic_extension(eta, kappa)
                    }
                },
                |eta| exact_extension(eta, kappa),
                1e-2,
                super::super::link_potential::force_max(kappa),
                100,
            )
        };
        let slope = log_log_slope(
            stiff,
            residual(stiff, false),
            1.2 * stiff,
            residual(1.2 * stiff, false),
        );
        assert!((slope + 1.0).abs() < 0.2, "asymptotic slope {slope}");
        let slope = log_log_slope(
            stiff,
            residual(stiff, true),
            1.2 * stiff,
            residual(1.2 * stiff, true),
        );
        assert!((slope + 0.5).abs() < 0.2, "reduced slope {slope}");
    }
}
