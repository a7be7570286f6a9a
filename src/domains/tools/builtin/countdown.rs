//! New Year countdown.
//!
//! Fills the `ny-*` elements of its fragment with the time left until the
//! next first of January, and refreshes them every second until torn down.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::document::Document;
use crate::domains::router::{ToolContext, ToolError, ToolModule};

/// Id of the countdown tool.
pub const COUNTDOWN_ID: &str = "countdown-to-new-year";

const YEAR_ID: &str = "ny-year";
const DAYS_ID: &str = "ny-days";
const HOURS_ID: &str = "ny-hours";
const MINUTES_ID: &str = "ny-minutes";
const SECONDS_ID: &str = "ny-seconds";

const REQUIRED_IDS: [&str; 5] = [YEAR_ID, DAYS_ID, HOURS_ID, MINUTES_ID, SECONDS_ID];

/// Time left until the next new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub year: i32,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Countdown from `now` to midnight on the first of January after it.
    pub fn until_new_year(now: NaiveDateTime) -> Self {
        let year = now.year() + 1;
        let target = NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(now);
        let left = (target - now).num_seconds().max(0);

        Self {
            year,
            days: left / 86_400,
            hours: left % 86_400 / 3_600,
            minutes: left % 3_600 / 60,
            seconds: left % 60,
        }
    }
}

type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Behavior module of the countdown tool.
pub struct NewYearCountdown {
    clock: Clock,
    timer: Option<JoinHandle<()>>,
}

impl Default for NewYearCountdown {
    fn default() -> Self {
        Self::new()
    }
}

impl NewYearCountdown {
    pub fn new() -> Self {
        Self::with_clock(local_now)
    }

    /// Use `clock` instead of the local wall clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock, timer: None }
    }
}

/// Write one frame. Returns `false` once the fragment is gone.
async fn render(document: &Document, countdown: Countdown) -> bool {
    let fields = [
        (YEAR_ID, countdown.year.to_string()),
        (DAYS_ID, countdown.days.to_string()),
        (HOURS_ID, countdown.hours.to_string()),
        (MINUTES_ID, countdown.minutes.to_string()),
        (SECONDS_ID, countdown.seconds.to_string()),
    ];
    for (id, text) in fields {
        if !document.set_text(id, &text).await {
            return false;
        }
    }
    true
}

#[async_trait]
impl ToolModule for NewYearCountdown {
    async fn init(&mut self, ctx: &ToolContext) -> Result<(), ToolError> {
        for id in REQUIRED_IDS {
            if !ctx.document.contains(id).await {
                return Err(ToolError::missing_element(id));
            }
        }

        let clock = self.clock;
        render(&ctx.document, Countdown::until_new_year(clock())).await;

        let document = ctx.document.clone();
        self.timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; that frame is already drawn.
            interval.tick().await;
            loop {
                interval.tick().await;
                if !render(&document, Countdown::until_new_year(clock())).await {
                    debug!("Countdown fragment detached; stopping");
                    break;
                }
            }
        }));
        Ok(())
    }

    async fn cleanup(&mut self) -> Result<(), ToolError> {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        Ok(())
    }
}
