//! Command-line interface for the `talentfit` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `talentfit-app` crate.

fn main() -> anyhow::Result<()> {
    talentfit_app::run()
}
