use color_eyre::Report;
use draw_lib::{Mulberry32, Seed};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct ShowSeed {
    /// Beacon value to fold
    beacon: String,

    /// Also print this many leading stream values
    #[structopt(long, default_value = "0")]
    values: usize,
}

impl ShowSeed {
    pub fn exec(self) -> Result<(), Report> {
        let seed = Seed::from_beacon(&self.beacon)?;
        println!("seed {} (state {:#010x})", seed, seed.to_bits());
        let mut stream = Mulberry32::new(seed);
        for i in 0..self.values {
            println!("{} {}", i, stream.next_f64());
        }
        Ok(())
    }
}
