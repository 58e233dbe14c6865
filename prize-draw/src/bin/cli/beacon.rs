use color_eyre::{eyre::eyre, Report};
use prize_draw::beacon::{BeaconValue, DrandChain};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct ChainArgs {
    /// Base url of the drand http api
    #[structopt(long, default_value = "https://api.drand.sh")]
    drand_url: String,

    /// Unix time of the first round of the chain
    #[structopt(long, default_value = "1595431050")]
    genesis_time: u64,

    /// Seconds between two rounds
    #[structopt(long, default_value = "30")]
    period: u64,
}

impl ChainArgs {
    pub fn chain(&self) -> DrandChain {
        DrandChain {
            base_url: self.drand_url.clone(),
            genesis_time: self.genesis_time,
            period_secs: self.period,
        }
    }
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct BeaconSource {
    /// Beacon value to use as is, no network access
    #[structopt(long, conflicts_with_all = &["round", "time"])]
    beacon: Option<String>,

    /// Beacon round to fetch
    #[structopt(long, conflicts_with = "time")]
    round: Option<u64>,

    /// Unix time, the latest round published at that time is fetched
    #[structopt(long)]
    time: Option<u64>,

    #[structopt(flatten)]
    chain: ChainArgs,
}

impl BeaconSource {
    /// Resolves the beacon string the draw is seeded with.
    pub fn resolve(&self) -> Result<String, Report> {
        if let Some(beacon) = &self.beacon {
            return Ok(beacon.clone());
        }
        let chain = self.chain.chain();
        let BeaconValue { round, randomness } = match (self.round, self.time) {
            (Some(round), _) => chain.fetch_round(round)?,
            (None, Some(time)) => chain.fetch_at(time)?,
            (None, None) => return Err(eyre!("one of --beacon, --round or --time is required")),
        };
        tracing::info!(round, %randomness, "using beacon round");
        Ok(randomness)
    }
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct FetchBeacon {
    /// Unix time, the latest round published at that time is fetched
    time: u64,

    #[structopt(flatten)]
    chain: ChainArgs,
}

impl FetchBeacon {
    pub fn exec(self) -> Result<(), Report> {
        let BeaconValue { round, randomness } = self.chain.chain().fetch_at(self.time)?;
        println!("{} {}", round, randomness);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prize_draw::beacon::{DEFAULT_DRAND_URL, DEFAULT_GENESIS_TIME, DEFAULT_PERIOD_SECS};

    #[test]
    fn chain_defaults_match_library() {
        let args = ChainArgs::from_iter_safe(["chain"]).unwrap();
        assert_eq!(
            args.chain(),
            DrandChain {
                base_url: DEFAULT_DRAND_URL.to_owned(),
                genesis_time: DEFAULT_GENESIS_TIME,
                period_secs: DEFAULT_PERIOD_SECS,
            }
        );
    }

    #[test]
    fn literal_beacon_skips_the_network() {
        let source = BeaconSource::from_iter_safe(["source", "--beacon", "cafe"]).unwrap();
        assert_eq!(source.resolve().unwrap(), "cafe");

        let source = BeaconSource::from_iter_safe(["source"]).unwrap();
        assert!(source.resolve().is_err());

        assert!(
            BeaconSource::from_iter_safe(["source", "--beacon", "cafe", "--round", "3"]).is_err()
        );
    }
}
