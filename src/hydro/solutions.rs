pub mod constant;
pub mod glauber;
pub mod gubser;
pub mod implosion;
pub mod pulse;
pub mod rayleigh_taylor;
pub mod riemann;
pub mod sound;
