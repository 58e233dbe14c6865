use super::beacon::BeaconSource;
use color_eyre::Report;
use prize_draw::{config::load_tiers, population::load_population, results::write_results};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct RunDraw {
    /// Population csv file path (identifier,spend)
    from: PathBuf,

    /// Results file output path
    to: PathBuf,

    /// Json file with the prize tiers, in draw order. Defaults to the reference tiers
    #[structopt(long)]
    tiers: Option<PathBuf>,

    #[structopt(flatten)]
    source: BeaconSource,
}

impl RunDraw {
    pub fn exec(self) -> Result<(), Report> {
        let Self {
            from,
            to,
            tiers,
            source,
        } = self;
        let tiers = load_tiers(tiers.as_deref())?;
        let population = load_population(&from)?;
        // inputs are fully loaded before the beacon is even looked at
        let beacon = source.resolve()?;

        let outcome = draw_lib::draw(&beacon, &population, &tiers)?;
        for summary in outcome.tiers() {
            println!(
                "{}: {}/{} winners, {} paid",
                summary.name, summary.awarded, summary.configured, summary.total_paid
            );
        }
        println!("total paid: {}", outcome.total_paid());

        write_results(outcome.results(&population), &to)?;
        Ok(())
    }
}
