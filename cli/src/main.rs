use cancionero_lib::config::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
  cancionero_lib::run(Cli::parse())
}
