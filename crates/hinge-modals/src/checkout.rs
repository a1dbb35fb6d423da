//! Checkout hand-off.
//!
//! The wizard never performs an upgrade itself. It hands a human-readable
//! plan description to an opaque handler and ignores whatever the handler
//! does with it.

use std::sync::{Arc, Mutex};

/// Receiver of upgrade requests.
pub trait UpgradeHandler: Send {
    /// Start checkout for the described plan.
    fn upgrade(&mut self, plan: &str);
}

impl<F> UpgradeHandler for F
where
    F: FnMut(&str) + Send,
{
    fn upgrade(&mut self, plan: &str) {
        self(plan);
    }
}

/// Handler that records every plan it receives.
///
/// Cloning shares the underlying log, so one clone can be handed to a
/// wizard while another inspects what was requested.
#[derive(Clone, Debug, Default)]
pub struct RecordingCheckout {
    plans: Arc<Mutex<Vec<String>>>,
}

impl RecordingCheckout {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plans requested so far, oldest first.
    pub fn plans(&self) -> Vec<String> {
        match self.plans.lock() {
            Ok(plans) => plans.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl UpgradeHandler for RecordingCheckout {
    fn upgrade(&mut self, plan: &str) {
        tracing::info!(plan, "Checkout requested");
        match self.plans.lock() {
            Ok(mut plans) => plans.push(plan.to_string()),
            Err(poisoned) => poisoned.into_inner().push(plan.to_string()),
        }
    }
}

/// Format a monthly price given in cents, e.g. `"$4.99/month"`.
#[must_use]
pub fn format_price(monthly_cents: u32) -> String {
    format!("${}.{:02}/month", monthly_cents / 100, monthly_cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(499), "$4.99/month");
        assert_eq!(format_price(2000), "$20.00/month");
        assert_eq!(format_price(5), "$0.05/month");
    }

    #[test]
    fn test_recording_checkout_shares_log() {
        let recorder = RecordingCheckout::new();
        let mut handle = recorder.clone();
        handle.upgrade("Premium Bundle - $24.99/month");
        assert_eq!(recorder.plans(), vec!["Premium Bundle - $24.99/month"]);
    }

    #[test]
    fn test_closure_handler() {
        let mut seen = Vec::new();
        {
            let mut handler = |plan: &str| seen.push(plan.to_string());
            handler.upgrade("Jobs Pro - $9.99/month");
        }
        assert_eq!(seen, vec!["Jobs Pro - $9.99/month"]);
    }
}
