//! The poll-check-notify loop.
//!
//! One sequential task: fetch statuses, validate, translate the newest
//! record, notify on change, sleep, repeat. All per-cycle failures are
//! contained here; nothing past startup terminates the process.


use hwbot_api::{check_response, parse_status};
use hwbot_core::{
    error::HwbotError,
    traits::{Notifier, StatusSource},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

pub struct Watcher {
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    /// Lower bound for the next API query (Unix seconds). Never decreases.
    cursor: i64,
    /// Last notification delivered, for duplicate suppression.
    last_message: String,
    /// Last error report delivered, so sustained failures are reported once.
    last_error_report: String,
}

impl Watcher {
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        poll_interval_secs: u64,
    ) -> Self {
        Self {
            source,
            notifier,
            poll_interval: Duration::from_secs(poll_interval_secs),
            cursor: chrono::Utc::now().timestamp(),
            last_message: String::new(),
            last_error_report: String::new(),
        }
    }

    /// Run the loop until the process is killed. The sleep is
    /// unconditional, failed cycles included.
    pub async fn run(mut self) {
        info!(
            "watching for status changes every {}s via {}",
            self.poll_interval.as_secs(),
            self.notifier.name()
        );
        loop {
            if let Err(e) = self.cycle().await {
                self.report_failure(&e).await;
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One poll cycle. Any error propagates to [`report_failure`].
    async fn cycle(&mut self) -> Result<(), HwbotError> {
        let response = self.source.homework_statuses(self.cursor).await?;
        let snapshot = check_response(&response)?;

        let Some(newest) = snapshot.homeworks.first() else {
            debug!("no status change");
            return Ok(());
        };

        let message = parse_status(newest)?;
        if message == self.last_message {
            debug!("status unchanged, suppressing duplicate notification");
        } else {
            self.notifier.notify(&message).await?;
            info!("notification sent: {message}");
            self.last_message = message;
        }

        // Server time moves the cursor forward whether or not a
        // notification went out this cycle.
        self.cursor = snapshot.current_date;
        Ok(())
    }

    /// Log a cycle failure and report it to the chat, once per distinct
    /// error text. A failing report send is logged and swallowed.
    async fn report_failure(&mut self, err: &HwbotError) {
        error!("poll cycle failed: {err}");

        let report = format!("Сбой в работе программы: {err}");
        if report == self.last_error_report {
            debug!("error already reported, skipping");
            return;
        }
        match self.notifier.notify(&report).await {
            Ok(()) => self.last_error_report = report,
            Err(send_err) => error!("failed to report error to chat: {send_err}"),
        }
    }
}
