use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DRAND_URL: &str = "https://api.drand.sh";
/// League of Entropy mainnet chain.
pub const DEFAULT_GENESIS_TIME: u64 = 1595431050;
pub const DEFAULT_PERIOD_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("time {time} is before the beacon genesis at {genesis}")]
    BeforeGenesis { time: u64, genesis: u64 },

    #[error("beacon period must be positive")]
    ZeroPeriod,

    #[error("beacon returned round {received}, expected {requested}")]
    RoundMismatch { requested: u64, received: u64 },

    #[error("beacon randomness `{0}` is not a non-empty hex string")]
    MalformedRandomness(String),
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BeaconResponse {
    pub round: u64,
    pub randomness: String,
    #[serde(default)]
    pub signature: String,
}

/// Public randomness published for a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeaconValue {
    pub round: u64,
    pub randomness: String,
}

impl BeaconResponse {
    fn into_value(self, requested: u64) -> Result<BeaconValue, Error> {
        if self.round != requested {
            return Err(Error::RoundMismatch {
                requested,
                received: self.round,
            });
        }
        match hex::decode(&self.randomness) {
            Ok(bytes) if !bytes.is_empty() => Ok(BeaconValue {
                round: self.round,
                randomness: self.randomness,
            }),
            _ => Err(Error::MalformedRandomness(self.randomness)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrandChain {
    pub base_url: String,
    pub genesis_time: u64,
    pub period_secs: u64,
}

impl Default for DrandChain {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DRAND_URL.to_owned(),
            genesis_time: DEFAULT_GENESIS_TIME,
            period_secs: DEFAULT_PERIOD_SECS,
        }
    }
}

impl DrandChain {
    /// Latest round published at `unix_time`. Round 1 is emitted at genesis.
    pub fn round_at(&self, unix_time: u64) -> Result<u64, Error> {
        if self.period_secs == 0 {
            return Err(Error::ZeroPeriod);
        }
        if unix_time < self.genesis_time {
            return Err(Error::BeforeGenesis {
                time: unix_time,
                genesis: self.genesis_time,
            });
        }
        Ok((unix_time - self.genesis_time) / self.period_secs + 1)
    }

    fn round_url(&self, round: u64) -> String {
        format!("{}/public/{}", self.base_url.trim_end_matches('/'), round)
    }

    pub fn fetch_round(&self, round: u64) -> Result<BeaconValue, Error> {
        let url = self.round_url(round);
        tracing::info!(%url, round, "fetching beacon value");
        let response: BeaconResponse = reqwest::blocking::get(&url)?
            .error_for_status()?
            .json()?;
        response.into_value(round)
    }

    pub fn fetch_at(&self, unix_time: u64) -> Result<BeaconValue, Error> {
        self.fetch_round(self.round_at(unix_time)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANDOMNESS: &str = "101297f1ca7dc44ef6088d94ad5fb7ba03455dc33d53ddb412bbc4564ed986ec";

    #[test]
    fn rounds_follow_the_period() {
        let chain = DrandChain::default();
        assert_eq!(chain.round_at(DEFAULT_GENESIS_TIME).unwrap(), 1);
        assert_eq!(chain.round_at(DEFAULT_GENESIS_TIME + 29).unwrap(), 1);
        assert_eq!(chain.round_at(DEFAULT_GENESIS_TIME + 30).unwrap(), 2);
        assert_eq!(chain.round_at(DEFAULT_GENESIS_TIME + 3000).unwrap(), 101);
        assert!(matches!(
            chain.round_at(DEFAULT_GENESIS_TIME - 1),
            Err(Error::BeforeGenesis { .. })
        ));

        let broken = DrandChain {
            period_secs: 0,
            ..DrandChain::default()
        };
        assert!(matches!(broken.round_at(DEFAULT_GENESIS_TIME), Err(Error::ZeroPeriod)));
    }

    #[test]
    fn round_url_ignores_trailing_slash() {
        let chain = DrandChain {
            base_url: "http://localhost:8080/".to_owned(),
            ..DrandChain::default()
        };
        assert_eq!(chain.round_url(42), "http://localhost:8080/public/42");
    }

    #[test]
    fn response_is_validated() {
        let body = format!(
            r#"{{"round": 7, "randomness": "{}", "signature": "ab"}}"#,
            RANDOMNESS
        );
        let response: BeaconResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(
            response.clone().into_value(7).unwrap(),
            BeaconValue {
                round: 7,
                randomness: RANDOMNESS.to_owned(),
            }
        );
        assert!(matches!(
            response.into_value(8),
            Err(Error::RoundMismatch {
                requested: 8,
                received: 7
            })
        ));

        for randomness in ["", "xyz", "abc"] {
            let response = BeaconResponse {
                round: 1,
                randomness: randomness.to_owned(),
                signature: String::new(),
            };
            assert!(matches!(
                response.into_value(1),
                Err(Error::MalformedRandomness(_))
            ));
        }
    }
}
