//! The square-well freely-jointed chain.
//!
//! Each link length fluctuates freely inside a square well `[ℓ, ℓ + w]` at
//! zero energy and is forbidden outside it. The single-link isotensional
//! partition function integrates the rotational `sinh` kernel over the well,
//! `z(η) ∝ (1/η)·[s·cosh(ηs)/η − sinh(ηs)/η²]` evaluated between the
//! nondimensional well bounds `s = 1` and `s = 1 + w̃`, `w̃ = w/ℓ`. The
//! isometric ensemble is reached through the Legendre facet by inverting the
//! force–extension map, which saturates at `γ = 1 + w̃`.

use crate::error::{check_number_of_links, check_positive, ChainError};
use crate::math::constants::{rotational_partition_factor, BOLTZMANN_CONSTANT};
use crate::math::rootfind::invert_monotone;
use crate::math::special::langevin_derivative;

/// Force below which the well integrals switch to their Maclaurin series.
///
/// The direct forms lose roughly `η⁻³` digits to cancellation, so the switch
/// sits where their noise matches the series truncation error, keeping the
/// two branches within a few parts in `10⁷` of each other.
const SERIES_BOUND: f64 = 1e-2;

/// Difference of `s·cosh(ηs)/η − sinh(ηs)/η²` across the well `[1, 1 + w̃]`.
#[inline]
fn well_factor(eta: f64, width: f64) -> f64 {
    let outer = 1.0 + width;
    if eta.abs() < SERIES_BOUND {
        let cubes = outer.powi(3) - 1.0;
        let fifths = outer.powi(5) - 1.0;
        eta * cubes / 3.0 + eta.powi(3) * fifths / 30.0
    } else {
        let b = |s: f64| s * (eta * s).cosh() / eta - (eta * s).sinh() / eta.powi(2);
        b(outer) - b(1.0)
    }
}

/// Force derivative of [`well_factor`].
#[inline]
fn well_factor_derivative(eta: f64, width: f64) -> f64 {
    let outer = 1.0 + width;
    if eta.abs() < SERIES_BOUND {
        let cubes = outer.powi(3) - 1.0;
        let fifths = outer.powi(5) - 1.0;
        cubes / 3.0 + eta.powi(2) * fifths / 10.0
    } else {
        let db = |s: f64| {
            s.powi(2) * (eta * s).sinh() / eta - 2.0 * s * (eta * s).cosh() / eta.powi(2)
                + 2.0 * (eta * s).sinh() / eta.powi(3)
        };
        db(outer) - db(1.0)
    }
}

/// Nondimensional extension per link, `−1/η + ∂η ln(well factor)`.
#[inline]
fn extension(eta: f64, width: f64) -> f64 {
    if eta.abs() < SERIES_BOUND {
        let cubes = (1.0 + width).powi(3) - 1.0;
        let fifths = (1.0 + width).powi(5) - 1.0;
        let sevenths = (1.0 + width).powi(7) - 1.0;
        // Maclaurin series through the cubic term; the direct form loses
        // the 1/η cancellation.
        eta * fifths / (5.0 * cubes)
            + eta.powi(3) * (sevenths / (70.0 * cubes) - fifths.powi(2) / (50.0 * cubes.powi(2)))
    } else {
        -1.0 / eta + well_factor_derivative(eta, width) / well_factor(eta, width)
    }
}

/// Nondimensional relative Gibbs free energy per link, `−ln(z(η)/z(0))`.
#[inline]
fn relative_gibbs(eta: f64, width: f64) -> f64 {
    let outer = 1.0 + width;
    let zero_scale = (outer.powi(3) - 1.0) / 3.0;
    if eta.abs() < SERIES_BOUND {
        let cubes = outer.powi(3) - 1.0;
        let fifths = outer.powi(5) - 1.0;
        let sevenths = outer.powi(7) - 1.0;
        -(1.0 + eta.powi(2) * fifths / (10.0 * cubes)
            + eta.powi(4) * sevenths / (280.0 * cubes))
            .ln()
    } else {
        -(well_factor(eta, width) / (eta * zero_scale)).ln()
    }
}

/// Per-link reference of the absolute free energies, `ln Λ(T) + ln(((1+w̃)³−1)/3)`.
#[inline]
fn reference_scale(hinge_mass: f64, link_length: f64, width: f64, temperature: f64) -> f64 {
    rotational_partition_factor(hinge_mass, link_length, temperature).ln()
        + (((1.0 + width).powi(3) - 1.0) / 3.0).ln()
}

/// The square-well freely-jointed chain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Swfjc {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    well_width: f64,
    /// Ensemble facets of the model.
    pub thermodynamics: Thermodynamics,
}

impl Swfjc {
    /// Creates a square-well freely-jointed chain, validating all parameters.
    pub fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        well_width: f64,
    ) -> Result<Self, ChainError> {
        let number_of_links = check_number_of_links(number_of_links)?;
        let link_length = check_positive("link_length", link_length)?;
        let hinge_mass = check_positive("hinge_mass", hinge_mass)?;
        let well_width = check_positive("well_width", well_width)?;
        Ok(Self {
            number_of_links,
            link_length,
            hinge_mass,
            well_width,
            thermodynamics: Thermodynamics::new(number_of_links, link_length, hinge_mass, well_width),
        })
    }

    /// The number of links in the chain.
    pub fn number_of_links(&self) -> u8 {
        self.number_of_links
    }

    /// The link length in nm.
    pub fn link_length(&self) -> f64 {
        self.link_length
    }

    /// The hinge mass in kg/mol.
    pub fn hinge_mass(&self) -> f64 {
        self.hinge_mass
    }

    /// The square-well width in nm.
    pub fn well_width(&self) -> f64 {
        self.well_width
    }
}

/// Ensemble facets of the square-well freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermodynamics {
    /// The fixed-force ensemble.
    pub isotensional: Isotensional,
    /// The fixed-length ensemble.
    pub isometric: Isometric,
}

impl Thermodynamics {
    fn new(number_of_links: u8, link_length: f64, hinge_mass: f64, well_width: f64) -> Self {
        Self {
            isotensional: Isotensional::new(number_of_links, link_length, hinge_mass, well_width),
            isometric: Isometric::new(number_of_links, link_length, hinge_mass, well_width),
        }
    }
}

/// The isotensional view of the square-well chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotensional {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    well_width: f64,
    /// Legendre transform into Helmholtz quantities as functions of force.
    pub legendre: IsotensionalLegendre,
}

impl Isotensional {
    fn new(number_of_links: u8, link_length: f64, hinge_mass: f64, well_width: f64) -> Self {
        Self {
            number_of_links,
            link_length,
            hinge_mass,
            well_width,
            legendre: IsotensionalLegendre {
                number_of_links,
                link_length,
                hinge_mass,
                well_width,
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn width(&self) -> f64 {
        self.well_width / self.link_length
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * extension(self.eta(force, temperature), self.width())
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64) -> f64 {
        self.links() * extension(nondimensional_force, self.width())
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(&self, nondimensional_force: f64) -> f64 {
        extension(nondimensional_force, self.width())
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
        BOLTZMANN_CONSTANT * temperature * relative_gibbs(self.eta(force, temperature), self.width())
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
        relative_gibbs(nondimensional_force, self.width())
            - reference_scale(self.hinge_mass, self.link_length, self.width(), temperature)
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(&self, nondimensional_force: f64) -> f64 {
        self.links() * relative_gibbs(nondimensional_force, self.width())
    }

    /// Nondimensional relative Gibbs free energy per link.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(&self, nondimensional_force: f64) -> f64 {
        relative_gibbs(nondimensional_force, self.width())
    }
}

/// Helmholtz quantities of the square-well chain as functions of force.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalLegendre {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    well_width: f64,
}

impl IsotensionalLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn width(&self) -> f64 {
        self.well_width / self.link_length
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
            * self.nondimensional_relative_helmholtz_free_energy(self.eta(force, temperature))
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
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_force)
            - (self.links() - 1.0)
                * reference_scale(self.hinge_mass, self.link_length, self.width(), temperature)
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
    pub fn nondimensional_relative_helmholtz_free_energy(&self, nondimensional_force: f64) -> f64 {
        self.links()
            * self.nondimensional_relative_helmholtz_free_energy_per_link(nondimensional_force)
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
    ) -> f64 {
        let width = self.width();
        nondimensional_force * extension(nondimensional_force, width)
            + relative_gibbs(nondimensional_force, width)
    }
}

/// The isometric view of the square-well chain, reached through its Legendre facet.
#[derive(Debug, Clone, PartialEq)]
pub struct Isometric {
    /// Quantities from inverting the isotensional map.
    pub legendre: IsometricLegendre,
}

impl Isometric {
    fn new(number_of_links: u8, link_length: f64, hinge_mass: f64, well_width: f64) -> Self {
        Self {
            legendre: IsometricLegendre {
                number_of_links,
                link_length,
                hinge_mass,
                well_width,
            },
        }
    }
}

/// Force and free energies of the square-well chain at fixed end-to-end length.
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricLegendre {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    well_width: f64,
}

impl IsometricLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    fn width(&self) -> f64 {
        self.well_width / self.link_length
    }

    /// Inverts the extension map on a bracket grown until it contains the root.
    fn conjugate_force(&self, gamma: f64) -> f64 {
        let width = self.width();
        let mut upper = 1.0;
        let mut doublings = 0;
        while extension(upper, width) < gamma && doublings < 64 {
            upper *= 2.0;
            doublings += 1;
        }
        invert_monotone(
            |eta| extension(eta, width),
            langevin_derivative,
            gamma,
            0.0,
            upper,
        )
    }

    /// Force recovered by inverting the isotensional extension map.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length)) * BOLTZMANN_CONSTANT * temperature
            / self.link_length
    }

    /// Nondimensional force conjugate to the given extension.
    pub fn nondimensional_force(&self, nondimensional_end_to_end_length_per_link: f64) -> f64 {
        self.conjugate_force(nondimensional_end_to_end_length_per_link)
    }

    /// Helmholtz free energy via the Legendre transform.
    pub fn helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_helmholtz_free_energy(self.gamma(end_to_end_length), temperature)
    }

    /// Helmholtz free energy per link via the Legendre transform.
    pub fn helmholtz_free_energy_per_link(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Relative Helmholtz free energy via the Legendre transform.
    pub fn relative_helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_helmholtz_free_energy(self.gamma(end_to_end_length))
    }

    /// Per-link relative Helmholtz free energy via the Legendre transform.
    pub fn relative_helmholtz_free_energy_per_link(
        &self,
        end_to_end_length: f64,
        temperature: f64,
    ) -> f64 {
        self.relative_helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Nondimensional Helmholtz free energy.
    pub fn nondimensional_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            - (self.links() - 1.0)
                * reference_scale(self.hinge_mass, self.link_length, self.width(), temperature)
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_end_to_end_length_per_link, temperature)
            / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `N·(η*γ + ḡ_rel(η*))`.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        let gamma = nondimensional_end_to_end_length_per_link;
        let eta = self.conjugate_force(gamma);
        self.links() * (eta * gamma + relative_gibbs(eta, self.width()))
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            / self.links()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WIDTH: f64 = 0.25;

    #[test]
    fn test_extension_is_gibbs_derivative() {
        let h = 1e-6;
        for eta in [0.3, 1.0, 4.0] {
            let fd = -(relative_gibbs(eta + h, WIDTH) - relative_gibbs(eta - h, WIDTH)) / (2.0 * h);
            assert_relative_eq!(extension(eta, WIDTH), fd, max_relative = 1e-7);
        }
    }

    #[test]
    fn test_extension_saturates_inside_the_well() {
        let low = extension(1.0, WIDTH);
        let high = extension(500.0, WIDTH);
        assert!(low < high);
        assert!(high < 1.0 + WIDTH);
        assert!(high > 1.0);
    }

    #[test]
    fn test_small_force_branches_agree() {
        let cubes = (1.0 + WIDTH).powi(3) - 1.0;
        let fifths = (1.0 + WIDTH).powi(5) - 1.0;
        let sevenths = (1.0 + WIDTH).powi(7) - 1.0;
        // Straddle the series switch point from both sides.
        for eta in [8e-3f64, 1.2e-2, 2e-2] {
            let series = eta * fifths / (5.0 * cubes)
                + eta.powi(3)
                    * (sevenths / (70.0 * cubes) - fifths.powi(2) / (50.0 * cubes.powi(2)));
            assert_relative_eq!(extension(eta, WIDTH), series, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_isometric_legendre_inverts_isotensional() {
        let model = Swfjc::new(8, 1.0, 1.0, 0.25).unwrap();
        let eta = 2.4;
        let gamma = model
            .thermodynamics
            .isotensional
            .nondimensional_end_to_end_length_per_link(eta);
        assert_relative_eq!(
            model.thermodynamics.isometric.legendre.nondimensional_force(gamma),
            eta,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_relative_gibbs_vanishes_at_zero_force() {
        assert!(relative_gibbs(1e-6, WIDTH).abs() < 1e-9);
    }
}
