//! Modified-canonical thermodynamics of the freely-jointed chain.
//!
//! One chain end is fixed and the other is tethered to an anchor at distance
//! `x_p` by a harmonic restraint of stiffness `k`. The restrained partition
//! integral follows from the Treloar density after the angular average of the
//! restraint Boltzmann factor,
//! `Z(x_p) ∝ (1/x_p)·∫ S(r)·[e^(−βk(r−x_p)²/2) − e^(−βk(r+x_p)²/2)] dr`,
//! with `S(r) = r·W(r)` the radial configurational weight. The expected force
//! is `−kB·T·∂ln Z/∂x_p` and the expected end-to-end length follows from the
//! force balance `⟨f⟩ = k·(x_p − ⟨x⟩)`. A stiff restraint pins the end near
//! the anchor and recovers the isometric ensemble; a soft one applies a nearly
//! constant force `k·x_p` and recovers the isotensional ensemble.

use super::isometric::treloar_sum;
use crate::math::constants::BOLTZMANN_CONSTANT;
use crate::math::quadrature::integrate;
use crate::math::special::{langevin, langevin_derivative, langevin_second_derivative};

/// Cells of the midpoint grid for the restrained partition integrals.
const INTEGRATION_CELLS: usize = 5000;

/// Half-width of the integration window in units of the restraint width `1/√κ̃`.
const WINDOW_WIDTHS: f64 = 8.0;

/// The harmonically restrained view of the freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedCanonical {
    number_of_links: u8,
    link_length: f64,
    /// First-order expansions about the strong- and weak-restraint limits.
    pub asymptotic: ModifiedCanonicalAsymptotic,
}

impl ModifiedCanonical {
    pub(super) fn new(number_of_links: u8, link_length: f64) -> Self {
        Self {
            number_of_links,
            link_length,
            asymptotic: ModifiedCanonicalAsymptotic {
                strong_potential: StrongPotential {
                    number_of_links,
                    link_length,
                },
                weak_potential: WeakPotential {
                    number_of_links,
                    link_length,
                },
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn nondimensionalize(&self, potential_distance: f64, potential_stiffness: f64, temperature: f64) -> (f64, f64) {
        let gamma_p = potential_distance / (self.links() * self.link_length);
        let kappa = potential_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature);
        (gamma_p, kappa)
    }

    /// Expected force transmitted through the restraint.
    pub fn force(&self, potential_distance: f64, potential_stiffness: f64, temperature: f64) -> f64 {
        let (gamma_p, kappa) = self.nondimensionalize(potential_distance, potential_stiffness, temperature);
        self.nondimensional_force(gamma_p, kappa) * BOLTZMANN_CONSTANT * temperature / self.link_length
    }

    /// Nondimensional expected force, `−∂ln Z̃/∂p` at `p = Nγ_p` in link units.
    pub fn nondimensional_force(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        let p = self.links() * nondimensional_potential_distance_per_link;
        let kappa = nondimensional_potential_stiffness;
        let n = self.number_of_links as i32;
        let window = WINDOW_WIDTHS / kappa.sqrt();
        let lower = (p - window).max(0.0);
        let upper = (p + window).min(self.links());
        let weight = |rho: f64| treloar_sum(self.number_of_links, rho, n - 2);
        let restraint = |rho: f64| {
            (-0.5 * kappa * (rho - p).powi(2)).exp() - (-0.5 * kappa * (rho + p).powi(2)).exp()
        };
        let partition = integrate(|rho| weight(rho) * restraint(rho), lower, upper, INTEGRATION_CELLS);
        let partition_derivative = integrate(
            |rho| {
                weight(rho)
                    * kappa
                    * ((rho - p) * (-0.5 * kappa * (rho - p).powi(2)).exp()
                        + (rho + p) * (-0.5 * kappa * (rho + p).powi(2)).exp())
            },
            lower,
            upper,
            INTEGRATION_CELLS,
        );
        1.0 / p - partition_derivative / partition
    }

    /// Expected end-to-end length, from the force balance against the restraint.
    pub fn end_to_end_length(&self, potential_distance: f64, potential_stiffness: f64, temperature: f64) -> f64 {
        potential_distance - self.force(potential_distance, potential_stiffness, temperature) / potential_stiffness
    }

    /// Expected end-to-end length per link.
    pub fn end_to_end_length_per_link(
        &self,
        potential_distance: f64,
        potential_stiffness: f64,
        temperature: f64,
    ) -> f64 {
        self.end_to_end_length(potential_distance, potential_stiffness, temperature) / self.links()
    }

    /// Nondimensional expected end-to-end length in link units, `p − η/κ̃`.
    pub fn nondimensional_end_to_end_length(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        let p = self.links() * nondimensional_potential_distance_per_link;
        p - self.nondimensional_force(
            nondimensional_potential_distance_per_link,
            nondimensional_potential_stiffness,
        ) / nondimensional_potential_stiffness
    }

    /// Nondimensional expected end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        self.nondimensional_end_to_end_length(
            nondimensional_potential_distance_per_link,
            nondimensional_potential_stiffness,
        ) / self.links()
    }
}

/// First-order expansions of the restrained ensemble about its two limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedCanonicalAsymptotic {
    /// Laplace expansion about the stiff-restraint (isometric) limit.
    pub strong_potential: StrongPotential,
    /// Expansion about the soft-restraint (isotensional) limit.
    pub weak_potential: WeakPotential,
}

/// Stiff-restraint expansion of the modified-canonical ensemble.
///
/// A Laplace expansion of the partition integral about `r = x_p` gives the
/// isometric quantities plus corrections of order `1/κ̃` built from the log
/// derivatives of the radial weight `h(r) = r·W(r)`.
#[derive(Debug, Clone, PartialEq)]
pub struct StrongPotential {
    number_of_links: u8,
    link_length: f64,
}

impl StrongPotential {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    /// Expected force in the stiff-restraint expansion.
    pub fn force(&self, potential_distance: f64, potential_stiffness: f64, temperature: f64) -> f64 {
        let gamma_p = potential_distance / (self.links() * self.link_length);
        let kappa = potential_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature);
        self.nondimensional_force(gamma_p, kappa) * BOLTZMANN_CONSTANT * temperature / self.link_length
    }

    /// Nondimensional expected force, the isometric force plus the `1/κ̃` Laplace correction.
    pub fn nondimensional_force(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        let p = self.links() * nondimensional_potential_distance_per_link;
        let n = self.number_of_links as i32;
        let scale = self.links() - 2.0;
        let h = treloar_sum(self.number_of_links, p, n - 2);
        let h1 = -scale * treloar_sum(self.number_of_links, p, n - 3);
        let h2 = scale * (scale - 1.0) * treloar_sum(self.number_of_links, p, n - 4);
        let h3 = -scale * (scale - 1.0) * (scale - 2.0) * treloar_sum(self.number_of_links, p, n - 5);
        let isometric = 1.0 / p - h1 / h;
        isometric - (h3 / h - h1 * h2 / h.powi(2)) / (2.0 * nondimensional_potential_stiffness)
    }

    /// Expected end-to-end length, `x_p − f_isometric/k` to first order.
    pub fn end_to_end_length(&self, potential_distance: f64, potential_stiffness: f64, temperature: f64) -> f64 {
        let gamma_p = potential_distance / (self.links() * self.link_length);
        let p = self.links() * gamma_p;
        let n = self.number_of_links as i32;
        let h = treloar_sum(self.number_of_links, p, n - 2);
        let h1 = -(self.links() - 2.0) * treloar_sum(self.number_of_links, p, n - 3);
        let isometric_force = (1.0 / p - h1 / h) * BOLTZMANN_CONSTANT * temperature / self.link_length;
        potential_distance - isometric_force / potential_stiffness
    }

    /// Expected end-to-end length per link.
    pub fn end_to_end_length_per_link(
        &self,
        potential_distance: f64,
        potential_stiffness: f64,
        temperature: f64,
    ) -> f64 {
        self.end_to_end_length(potential_distance, potential_stiffness, temperature) / self.links()
    }

    /// Nondimensional expected end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        let p = self.links() * nondimensional_potential_distance_per_link;
        let n = self.number_of_links as i32;
        let h = treloar_sum(self.number_of_links, p, n - 2);
        let h1 = -(self.links() - 2.0) * treloar_sum(self.number_of_links, p, n - 3);
        p - (1.0 / p - h1 / h) / nondimensional_potential_stiffness
    }

    /// Nondimensional expected end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        self.nondimensional_end_to_end_length(
            nondimensional_potential_distance_per_link,
            nondimensional_potential_stiffness,
        ) / self.links()
    }
}

/// Soft-restraint expansion of the modified-canonical ensemble.
///
/// A soft restraint applies an almost constant effective force `φ = κ̃·p` to
/// the free end, so the chain responds isotensionally, `⟨ρ⟩ ≈ N·L(φ)`, with a
/// Gaussian-tilt correction of order `κ̃` built from the log derivatives of
/// `B(φ) = φ·(sinh φ/φ)^N`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeakPotential {
    number_of_links: u8,
    link_length: f64,
}

impl WeakPotential {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    /// Second log derivative of the effective single-force partition function.
    #[inline]
    fn tilt(&self, phi: f64) -> f64 {
        let n = self.links();
        let b1 = 1.0 / phi + n * langevin(phi);
        let b1_prime = -1.0 / phi.powi(2) + n * langevin_derivative(phi);
        let b1_second = 2.0 / phi.powi(3) + n * langevin_second_derivative(phi);
        b1_second + 2.0 * b1 * b1_prime
    }

    /// Expected force in the soft-restraint expansion.
    pub fn force(&self, potential_distance: f64, potential_stiffness: f64, temperature: f64) -> f64 {
        let gamma_p = potential_distance / (self.links() * self.link_length);
        let kappa = potential_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature);
        self.nondimensional_force(gamma_p, kappa) * BOLTZMANN_CONSTANT * temperature / self.link_length
    }

    /// Nondimensional expected force, `κ̃·(p − N·L(φ))` plus the O(κ̃²) tilt term.
    pub fn nondimensional_force(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        let p = self.links() * nondimensional_potential_distance_per_link;
        let kappa = nondimensional_potential_stiffness;
        let phi = kappa * p;
        kappa * (p - self.links() * langevin(phi)) + 0.5 * kappa.powi(2) * self.tilt(phi)
    }

    /// Expected end-to-end length in the soft-restraint expansion.
    pub fn end_to_end_length(&self, potential_distance: f64, potential_stiffness: f64, temperature: f64) -> f64 {
        let gamma_p = potential_distance / (self.links() * self.link_length);
        let kappa = potential_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature);
        self.nondimensional_end_to_end_length(gamma_p, kappa) * self.link_length
    }

    /// Expected end-to-end length per link.
    pub fn end_to_end_length_per_link(
        &self,
        potential_distance: f64,
        potential_stiffness: f64,
        temperature: f64,
    ) -> f64 {
        self.end_to_end_length(potential_distance, potential_stiffness, temperature) / self.links()
    }

    /// Nondimensional expected end-to-end length in link units, `N·L(φ)` plus the tilt term.
    pub fn nondimensional_end_to_end_length(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        let p = self.links() * nondimensional_potential_distance_per_link;
        let kappa = nondimensional_potential_stiffness;
        let phi = kappa * p;
        self.links() * langevin(phi) - 0.5 * kappa * self.tilt(phi)
    }

    /// Nondimensional expected end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_potential_distance_per_link: f64,
        nondimensional_potential_stiffness: f64,
    ) -> f64 {
        self.nondimensional_end_to_end_length(
            nondimensional_potential_distance_per_link,
            nondimensional_potential_stiffness,
        ) / self.links()
    }
}
