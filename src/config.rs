use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{InitError, Result},
    hydro::{
        eos::EOSs,
        grid::{Capabilities, Lattice},
        init::{dissipative::DissipativeInit, Scenario},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydroParameters {
    /// Initial proper time [fm].
    pub t0: f64,
    /// Shear viscosity over entropy density, forwarded to the solver.
    pub etaovers: f64,
    pub dissipative: DissipativeInit,
    pub shear: bool,
    pub bulk: bool,
    pub eos: String,
}

impl Default for HydroParameters {
    fn default() -> Self {
        HydroParameters {
            t0: 0.5,
            etaovers: 0.2,
            dissipative: DissipativeInit::Zero,
            shear: true,
            bulk: false,
            eos: EOSs::Conformal.to_string(),
        }
    }
}

impl HydroParameters {
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            shear: self.shear,
            bulk: self.bulk,
        }
    }
}

/// Scenario written either as its integer code or as its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScenarioSelector {
    Code(i64),
    Name(String),
}

impl ScenarioSelector {
    pub fn resolve(&self) -> Result<Scenario> {
        match self {
            ScenarioSelector::Code(code) => Scenario::from_code(*code),
            ScenarioSelector::Name(name) => name.parse(),
        }
    }
}

impl Default for ScenarioSelector {
    fn default() -> Self {
        ScenarioSelector::Code(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditionParameters {
    pub scenario: ScenarioSelector,
    /// Energy-density scale of the Gubser and sound-wave scenarios.
    pub initial_energy_density: f64,
    /// Full width of the flat rapidity region.
    pub rapidity_plateau: f64,
    pub rapidity_variance: f64,
    /// Viscous Gubser reference solution.
    pub reference_solution: PathBuf,
    pub optical_profile: Option<PathBuf>,
    pub monte_carlo_profile: Option<PathBuf>,
}

impl Default for InitialConditionParameters {
    fn default() -> Self {
        InitialConditionParameters {
            scenario: ScenarioSelector::default(),
            initial_energy_density: 1.0,
            rapidity_plateau: 5.9,
            rapidity_variance: 0.16,
            reference_solution: PathBuf::from("resources/gubser/viscous/gubserIC.dat"),
            optical_profile: None,
            monte_carlo_profile: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lattice: Lattice,
    pub hydro: HydroParameters,
    pub initial: InitialConditionParameters,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| InitError::io(path, err))?;
        let config: Config = serde_yaml::from_str(&contents)?;
        debug!(?config, "configuration loaded from \"{}\"", path.display());
        Ok(config)
    }

    /// Rejects parameters no scenario can work with.
    pub fn validate(&self) -> Result<()> {
        self.lattice.check()?;
        let t0 = self.hydro.t0;
        if !(t0 > 0.0 && t0.is_finite()) {
            return Err(InitError::InvalidParameter(format!(
                "initial proper time must be positive, got {t0}"
            )));
        }
        EOSs::parse(&self.hydro.eos)?;
        self.initial.scenario.resolve()?;
        Ok(())
    }
}
