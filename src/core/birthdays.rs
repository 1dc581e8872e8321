use crate::core::store::ContactStore;
use crate::domain::model::{
    BirthdayReport, LeapDayPolicy, SkipReason, SkippedBirthday, UpcomingBirthday,
};
use chrono::{Datelike, Days, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindowQuery {
    window_days: u32,
    leap_day: LeapDayPolicy,
}

impl Default for BirthdayWindowQuery {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS, LeapDayPolicy::default())
    }
}

impl BirthdayWindowQuery {
    pub fn new(window_days: u32, leap_day: LeapDayPolicy) -> Self {
        Self {
            window_days,
            leap_day,
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Contacts whose next birthday is after `today` and at most
    /// `window_days` later, ordered by date.
    pub fn run(&self, store: &ContactStore, today: NaiveDate) -> BirthdayReport {
        let mut report = BirthdayReport::default();
        let Some(last_day) = today.checked_add_days(Days::new(u64::from(self.window_days))) else {
            return report;
        };

        for contact in store.contacts() {
            let Some(birthday) = contact.birthday() else {
                continue;
            };

            let born = match birthday.date() {
                Ok(date) => date,
                Err(_) => {
                    tracing::warn!("Invalid birthday format for {}. Skipping.", contact.name());
                    report.skipped.push(SkippedBirthday {
                        name: contact.name().to_string(),
                        reason: SkipReason::InvalidBirthday,
                    });
                    continue;
                }
            };

            match self.next_anniversary(born, today) {
                Ok(next) => {
                    if today < next && next <= last_day {
                        report.upcoming.push(UpcomingBirthday {
                            name: contact.name().to_string(),
                            date: next,
                        });
                    }
                }
                Err(reason) => {
                    tracing::warn!("Skipping birthday of {}: {:?}", contact.name(), reason);
                    report.skipped.push(SkippedBirthday {
                        name: contact.name().to_string(),
                        reason,
                    });
                }
            }
        }

        // stable: equal dates keep store order
        report.upcoming.sort_by_key(|b| b.date);
        report
    }

    fn next_anniversary(
        &self,
        born: NaiveDate,
        today: NaiveDate,
    ) -> Result<NaiveDate, SkipReason> {
        let year = if clamp_to_year(born, today.year()) < Some(today) {
            today.year() + 1
        } else {
            today.year()
        };

        match born.with_year(year) {
            Some(date) => Ok(date),
            // only 29 February can fail to exist in another year
            None => match self.leap_day {
                LeapDayPolicy::Clamp => {
                    clamp_to_year(born, year).ok_or(SkipReason::NoLeapDay { year })
                }
                LeapDayPolicy::Skip => Err(SkipReason::NoLeapDay { year }),
            },
        }
    }
}

fn clamp_to_year(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    born.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}
