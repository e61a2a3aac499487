use std::path::Path;

use tracing::{info, warn};

use crate::{
    config::Config,
    error::Result,
    hydro::{
        eos::EOSs,
        grid::Fields,
        init::{
            set_initial_conditions,
            transverse::{ProfileFile, TransverseProfile},
            Collaborators,
        },
        utils::{save_fields, Info},
        validate::{validate, Validation},
    },
};

/// Builds the initial state described by `config`, checks it and, when `output` is given,
/// writes it there.
pub fn run(config: &Config, output: Option<&Path>) -> Result<(Fields, Validation)> {
    config.validate()?;
    let scenario = config.initial.scenario.resolve()?;
    let eos = EOSs::parse(&config.hydro.eos)?.build();
    let optical = config.initial.optical_profile.as_ref().map(ProfileFile::new);
    let monte_carlo = config
        .initial
        .monte_carlo_profile
        .as_ref()
        .map(ProfileFile::new);

    let collaborators = Collaborators {
        eos: &eos,
        optical: optical.as_ref().map(|p| p as &dyn TransverseProfile),
        monte_carlo: monte_carlo.as_ref().map(|p| p as &dyn TransverseProfile),
    };

    let lattice = config.lattice;
    info!(
        "{}x{}x{} cells, dx = {}, dy = {}, dz = {}, t0 = {} fm",
        lattice.nx, lattice.ny, lattice.nz, lattice.dx, lattice.dy, lattice.dz, config.hydro.t0
    );
    let mut fields = Fields::new(lattice, config.hydro.capabilities());
    set_initial_conditions(
        &mut fields,
        scenario,
        &config.initial,
        &config.hydro,
        &collaborators,
    )?;

    let validation = validate(&fields, config.hydro.t0)?;
    if validation.max_normalization_error > 1e-10 {
        warn!(
            error = validation.max_normalization_error,
            "four-velocity normalization violated"
        );
    }
    if validation.min_energy_density < 0.0 {
        warn!(
            min = validation.min_energy_density,
            "negative energy density in the initial state"
        );
    }

    if let Some(dir) = output {
        let info = Info::new(scenario.name(), config.hydro.t0, config.hydro.etaovers, &fields);
        save_fields(dir, &fields, &info)?;
    }
    Ok((fields, validation))
}
