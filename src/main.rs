use clap::Parser;
use log::{debug, LevelFilter};

use date_stamp::clock::{Clock, FixedClock, SystemClock};
use date_stamp::date_to_string;
use date_stamp::stamp::{self, Stamp};

/// Prints two tokens followed by today's UTC date as YYYY-MM-DD.
#[derive(Parser)]
struct Arg {
    /// Use this date instead of reading the clock
    #[arg(short, long)]
    date: Option<String>,

    #[arg(short, long, default_value = stamp::DEFAULT_FIRST)]
    first: String,

    #[arg(short, long, default_value = stamp::DEFAULT_SECOND)]
    second: String,

    /// Fail unless the output equals this line
    #[arg(short, long)]
    check: Option<String>,
}

fn init_logging() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Arg::parse();

    let clock: Box<dyn Clock> = match args.date {
        Some(d) => {
            let date = date_to_string::parse_date(&d)?;
            debug!("using fixed clock at {}", date_to_string::to_iso_date_string(&date));
            Box::new(FixedClock(date))
        }
        None => {
            debug!("using system clock");
            Box::new(SystemClock)
        }
    };

    let stamp = Stamp::capture(clock.as_ref(), &args.first, &args.second);
    if let Some(expected) = args.check {
        stamp.check(&expected)?;
    }

    println!("{}", stamp.render());
    return Ok(());
}
