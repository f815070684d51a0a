use anyhow::bail;
use datetime::LocalDate;
use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::date_to_string;

pub const DEFAULT_FIRST: &str = "test";
pub const DEFAULT_SECOND: &str = "test2";

pub struct Stamp {
    pub first: String,
    pub second: String,
    pub date: LocalDate,
}

impl Stamp {
    // One clock read per stamp.
    pub fn capture<C: Clock + ?Sized>(clock: &C, first: &str, second: &str) -> Stamp {
        let date = clock.today();
        debug!("captured date snapshot {:?}", date);
        return Stamp {
            first: first.to_string(),
            second: second.to_string(),
            date,
        };
    }

    pub fn render(&self) -> String {
        return [
            self.first.clone(),
            self.second.clone(),
            date_to_string::to_iso_date_string(&self.date),
        ]
        .join(" ");
    }

    pub fn check(&self, expected: &str) -> anyhow::Result<()> {
        let output = self.render();
        if output != expected {
            bail!("stamp mismatch: expected {:?}, got {:?}", expected, output);
        }
        info!("stamp matches expectation");
        return Ok(());
    }
}

pub fn stamp_today() -> String {
    return Stamp::capture(&SystemClock, DEFAULT_FIRST, DEFAULT_SECOND).render();
}
