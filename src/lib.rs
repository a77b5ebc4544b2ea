//! AR Style binary support: bootstrap and the scripted session runner.

pub mod bootstrap;
