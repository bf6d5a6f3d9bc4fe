use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

use crate::models::MarketClock;

/// Why a run may proceed or stop at the gates
#[derive(Debug, Clone, PartialEq)]
pub enum GateStatus {
    Open,
    NotTradingDay,
    MarketClosed {
        next_open: Option<chrono::DateTime<chrono::Utc>>,
    },
}

/// Exchange calendar: weekends plus an injected holiday set
///
/// The holiday list comes from configuration so it can be refreshed without
/// touching code.
#[derive(Debug, Clone)]
pub struct TradingCalendar {
    holidays: HashSet<NaiveDate>,
}

impl TradingCalendar {
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday();
        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            return false;
        }
        !self.holidays.contains(&date)
    }
}

/// Combine both gates into one status for the run driver
///
/// The calendar takes precedence: a holiday reads as NotTradingDay even if
/// the clock claims the market is open.
pub fn gate_status(calendar: &TradingCalendar, date: NaiveDate, clock: &MarketClock) -> GateStatus {
    if !calendar.is_trading_day(date) {
        return GateStatus::NotTradingDay;
    }
    if !clock.is_open {
        return GateStatus::MarketClosed {
            next_open: clock.next_open,
        };
    }
    GateStatus::Open
}
