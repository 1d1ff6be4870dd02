use clap::Parser;
use t4_geom_convert::cli::{self, args::GeomArgs};

fn main() -> miette::Result<()> {
    let args = GeomArgs::parse();
    cli::init_tracing(&args);
    cli::run(&args)?;
    Ok(())
}
