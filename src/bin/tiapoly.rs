use tiapoly::*;

use log::warn;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tiapoly",
    about = "Atari VCS TIA polynomial counter, bit list and packed side by side."
)]
struct Args {
    /// Initial counter state (0-62).
    #[structopt(short = "s", long = "seed", default_value = "0", allow_hyphen_values = true)]
    seed: i64,

    /// Number of shifts to show.
    #[structopt(short = "n", long = "steps", default_value = "64")]
    steps: usize,

    /// Also print the cycle structure of the feedback rule.
    #[structopt(short = "c", long = "cycles")]
    cycles: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::from_args();

    let rows = demo::lockstep(args.seed, args.steps).map_err(|e| e.to_string())?;

    println!();
    for line in demo::HEADER.iter() {
        println!("{}", line);
    }
    let mut mismatches = 0usize;
    for row in rows {
        if !row.matched {
            mismatches += 1;
        }
        println!("{}", row);
    }
    if mismatches > 0 {
        warn!("{} of {} steps disagree", mismatches, args.steps);
    }
    println!("\n");

    if args.cycles {
        println!("{}", cycle::analyze::<Packed>());
    }

    Ok(())
}
