mod beacon;
mod draw;
mod seed;

use color_eyre::Report;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub enum Cli {
    /// Run the prize draw over a population file
    Run(draw::RunDraw),
    /// Print the seed a beacon value folds into
    Seed(seed::ShowSeed),
    /// Fetch the beacon value published for a given time
    Beacon(beacon::FetchBeacon),
}

impl Cli {
    pub fn exec(self) -> Result<(), Report> {
        match self {
            Self::Run(cmd) => cmd.exec(),
            Self::Seed(cmd) => cmd.exec(),
            Self::Beacon(cmd) => cmd.exec(),
        }
    }
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Cli::from_args().exec()
}
