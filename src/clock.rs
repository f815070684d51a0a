use datetime::convenience::Today;
use datetime::LocalDate;

pub trait Clock {
    fn today(&self) -> LocalDate;
}

// UTC: LocalDate::today counts from the Unix epoch.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> LocalDate {
        return LocalDate::today();
    }
}

pub struct FixedClock(pub LocalDate);

impl Clock for FixedClock {
    fn today(&self) -> LocalDate {
        return self.0;
    }
}
