use std::{fmt, str::FromStr};

use tracing::info;

use crate::{
    config::{HydroParameters, InitialConditionParameters},
    error::{InitError, Result},
    hydro::{
        eos::EquationOfState,
        grid::{Fields, GHOST},
        solutions::{constant, glauber, gubser, implosion, pulse, rayleigh_taylor, riemann, sound},
        EnergyInit, Init,
    },
};

use self::{
    dissipative::set_pimunu_initial_condition, longitudinal::longitudinal_energy_density,
    transverse::TransverseProfile, velocity::set_fluid_velocity_initial_condition,
};

pub mod dissipative;
pub mod longitudinal;
pub mod transverse;
pub mod velocity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    ConstantEnergyDensity,
    ViscousGubser,
    OpticalGlauber,
    IdealGubser,
    MonteCarloGlauber,
    SodShockTube,
    ImplosionInABox,
    RayleighTaylor,
    SodShockTube2d,
    GaussianPulse,
    SoundWave,
}

impl Scenario {
    pub const ALL: [Scenario; 11] = [
        Scenario::ConstantEnergyDensity,
        Scenario::ViscousGubser,
        Scenario::OpticalGlauber,
        Scenario::IdealGubser,
        Scenario::MonteCarloGlauber,
        Scenario::SodShockTube,
        Scenario::ImplosionInABox,
        Scenario::RayleighTaylor,
        Scenario::SodShockTube2d,
        Scenario::GaussianPulse,
        Scenario::SoundWave,
    ];

    pub fn from_code(code: i64) -> Result<Self> {
        Ok(match code {
            0 => Scenario::ConstantEnergyDensity,
            1 => Scenario::ViscousGubser,
            2 => Scenario::OpticalGlauber,
            3 => Scenario::IdealGubser,
            4 => Scenario::MonteCarloGlauber,
            5 => Scenario::SodShockTube,
            6 => Scenario::ImplosionInABox,
            7 => Scenario::RayleighTaylor,
            9 => Scenario::SodShockTube2d,
            _ => return Err(InitError::UnknownScenario(code.to_string())),
        })
    }

    /// Integer selector, `None` for the scenarios only reachable by name.
    pub fn code(&self) -> Option<i64> {
        match self {
            Scenario::ConstantEnergyDensity => Some(0),
            Scenario::ViscousGubser => Some(1),
            Scenario::OpticalGlauber => Some(2),
            Scenario::IdealGubser => Some(3),
            Scenario::MonteCarloGlauber => Some(4),
            Scenario::SodShockTube => Some(5),
            Scenario::ImplosionInABox => Some(6),
            Scenario::RayleighTaylor => Some(7),
            Scenario::SodShockTube2d => Some(9),
            Scenario::GaussianPulse | Scenario::SoundWave => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::ConstantEnergyDensity => "constant",
            Scenario::ViscousGubser => "viscous-gubser",
            Scenario::OpticalGlauber => "optical-glauber",
            Scenario::IdealGubser => "ideal-gubser",
            Scenario::MonteCarloGlauber => "monte-carlo-glauber",
            Scenario::SodShockTube => "sod-shock-tube",
            Scenario::ImplosionInABox => "implosion",
            Scenario::RayleighTaylor => "rayleigh-taylor",
            Scenario::SodShockTube2d => "sod-shock-tube-2d",
            Scenario::GaussianPulse => "gaussian-pulse",
            Scenario::SoundWave => "sound-wave",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::ConstantEnergyDensity => "constant energy density",
            Scenario::ViscousGubser => "Israel-Stewart hydrodynamic Gubser flow test",
            Scenario::OpticalGlauber => "continuous optical Glauber",
            Scenario::IdealGubser => "ideal hydrodynamic Gubser flow test",
            Scenario::MonteCarloGlauber => "Monte Carlo Glauber",
            Scenario::SodShockTube => "relativistic Sod shock-tube test",
            Scenario::ImplosionInABox => "implosion in a box test",
            Scenario::RayleighTaylor => "Rayleigh-Taylor instability test",
            Scenario::SodShockTube2d => "relativistic 2d Sod shock-tube test",
            Scenario::GaussianPulse => "Gaussian pulse test",
            Scenario::SoundWave => "sound propagation test",
        }
    }

    /// Scenarios that only set `e` and `p`, leaving flow and dissipative fields to the
    /// dedicated initializers.
    pub fn needs_flow_and_dissipative(&self) -> bool {
        matches!(
            self,
            Scenario::ConstantEnergyDensity
                | Scenario::OpticalGlauber
                | Scenario::MonteCarloGlauber
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = InitError;

    /// Accepts an integer code or a scenario name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Scenario::from_code(code);
        }
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| InitError::UnknownScenario(s.to_string()))
    }
}

/// External models the collision-geometry scenarios draw on.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub eos: &'a dyn EquationOfState,
    pub optical: Option<&'a dyn TransverseProfile>,
    pub monte_carlo: Option<&'a dyn TransverseProfile>,
}

impl<'a> Collaborators<'a> {
    pub fn new(eos: &'a dyn EquationOfState) -> Self {
        Collaborators {
            eos,
            optical: None,
            monte_carlo: None,
        }
    }
}

fn unpadded([i, j, k]: [usize; 3]) -> [usize; 3] {
    [i - GHOST, j - GHOST, k - GHOST]
}

/// Writes a complete cell state into every physical cell. Present bulk fields are set to 0.
pub fn fill(fields: &mut Fields, init: Init) {
    let lattice = fields.lattice;
    for [i, j, k] in lattice.physical() {
        let s = lattice.index(i, j, k);
        let cell = init(unpadded([i, j, k]), lattice.coordinates(i, j, k));
        fields.e[s] = cell.e;
        fields.p[s] = cell.p;
        fields.u.set(s, cell.u);
        if let Some(pi) = fields.pi.as_mut() {
            pi.set(s, cell.pi);
        }
        if let Some(bulk) = fields.bulk.as_mut() {
            bulk[s] = 0.0;
        }
    }
}

/// Writes `e` and `p = eos.p(e)` into every physical cell.
pub fn fill_energy(fields: &mut Fields, eos: &dyn EquationOfState, init: EnergyInit) {
    let lattice = fields.lattice;
    for [i, j, k] in lattice.physical() {
        let s = lattice.index(i, j, k);
        let e = init(unpadded([i, j, k]), lattice.coordinates(i, j, k));
        fields.e[s] = e;
        fields.p[s] = eos.p(e);
    }
}

fn glauber_profile(
    fields: &Fields,
    scenario: Scenario,
    initial: &InitialConditionParameters,
    profile: Option<&dyn TransverseProfile>,
    collaborator: &'static str,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let profile = profile.ok_or(InitError::MissingCollaborator {
        scenario: scenario.name(),
        collaborator,
    })?;
    let lattice = fields.lattice;
    let transverse = profile.energy_density(&lattice)?;
    let longitudinal = longitudinal_energy_density(
        lattice.nz,
        lattice.dz,
        initial.rapidity_plateau,
        initial.rapidity_variance,
    )?;
    Ok((transverse, longitudinal))
}

/// Runs the pipeline of `scenario` over the physical cells of `fields`.
pub fn set_initial_conditions(
    fields: &mut Fields,
    scenario: Scenario,
    initial: &InitialConditionParameters,
    hydro: &HydroParameters,
    collaborators: &Collaborators,
) -> Result<()> {
    info!("Setting initial conditions: {}.", scenario.description());
    let eos = collaborators.eos;
    let lattice = fields.lattice;
    let t0 = hydro.t0;
    match scenario {
        Scenario::ConstantEnergyDensity => {
            fill_energy(fields, eos, constant::init_constant(eos));
        }
        Scenario::OpticalGlauber => {
            let (transverse, longitudinal) = glauber_profile(
                fields,
                scenario,
                initial,
                collaborators.optical,
                "optical Glauber transverse profile",
            )?;
            let init = glauber::init_optical_glauber(&lattice, eos, transverse, longitudinal)?;
            fill_energy(fields, eos, init);
        }
        Scenario::MonteCarloGlauber => {
            let (transverse, longitudinal) = glauber_profile(
                fields,
                scenario,
                initial,
                collaborators.monte_carlo,
                "Monte Carlo Glauber transverse profile",
            )?;
            let init = glauber::init_monte_carlo_glauber(&lattice, eos, transverse, longitudinal)?;
            fill_energy(fields, eos, init);
        }
        Scenario::ViscousGubser => {
            if fields.pi.is_none() {
                return Err(InitError::MissingCapability {
                    scenario: scenario.name(),
                    field: "shear-stress",
                });
            }
            let rows = gubser::load_reference_solution(&initial.reference_solution, &lattice)?;
            fill(fields, gubser::init_viscous_gubser(rows, lattice.ny));
        }
        Scenario::IdealGubser => {
            fill(fields, gubser::init_ideal_gubser(t0, initial.initial_energy_density));
        }
        Scenario::SodShockTube => fill(fields, riemann::init_sod_shock_tube()),
        Scenario::SodShockTube2d => fill(fields, riemann::init_sod_shock_tube_2d()),
        Scenario::ImplosionInABox => fill(fields, implosion::init_implosion()),
        Scenario::RayleighTaylor => fill(fields, rayleigh_taylor::init_rayleigh_taylor()),
        Scenario::GaussianPulse => {
            let init = pulse::init_gaussian_pulse(&lattice)?;
            fill(fields, init);
        }
        Scenario::SoundWave => {
            let init = sound::init_sound_wave(&lattice, initial.initial_energy_density, eos)?;
            fill(fields, init);
        }
    }

    if scenario.needs_flow_and_dissipative() {
        set_fluid_velocity_initial_condition(fields, t0);
        set_pimunu_initial_condition(fields, hydro.dissipative, t0, eos);
    }
    Ok(())
}
