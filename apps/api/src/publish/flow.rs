//! Publication flow state machine.
//!
//! One flow exists per resume while its publish dialog is open:
//!
//! ```text
//! Idle -> CheckingDomain -> DomainChecked{available|unavailable}
//!      -> Publishing -> Published | Failed
//! ```
//!
//! The transitions are pure and synchronous; the async handlers drive them
//! around their network calls. Two invariants live here, not in the
//! handlers:
//!
//! - Publishing is reachable only from a positive `DomainChecked` verdict
//!   for the same domain — anything else is a precondition violation
//!   rejected before any network call.
//! - Domain registration is not idempotent, so a second publish while one
//!   is in flight is rejected, never queued.
//!
//! Every mutation bumps an epoch. An async check captures the epoch before
//! suspending and presents it on completion; a stale epoch (the user
//! cancelled, retyped, or dismissed the dialog meanwhile) means the result
//! is discarded instead of being applied to state it no longer describes.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum PublishState {
    Idle,
    CheckingDomain {
        domain: String,
    },
    DomainChecked {
        domain: String,
        available: bool,
        price: Option<f64>,
    },
    Publishing {
        domain: String,
    },
    Published {
        domain: String,
        website_url: String,
        published_at: DateTime<Utc>,
    },
    Failed {
        domain: String,
        message: String,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum FlowError {
    #[error("Domain availability has not been checked yet")]
    NotChecked,

    #[error("Domain {0} is not available")]
    DomainUnavailable(String),

    #[error("Availability was checked for {checked}, not {requested}")]
    DomainMismatch { checked: String, requested: String },

    #[error("A publish for this resume is already in progress")]
    PublishInFlight,
}

#[derive(Debug)]
pub struct PublishFlow {
    state: PublishState,
    epoch: u64,
}

impl PublishFlow {
    pub fn new() -> Self {
        PublishFlow {
            state: PublishState::Idle,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &PublishState {
        &self.state
    }

    /// Starts an availability check. Allowed from any state except an
    /// in-flight publish; re-checking discards any earlier verdict. Returns
    /// the epoch token the completion must present.
    pub fn begin_check(&mut self, domain: &str) -> Result<u64, FlowError> {
        if matches!(self.state, PublishState::Publishing { .. }) {
            return Err(FlowError::PublishInFlight);
        }
        self.epoch += 1;
        self.state = PublishState::CheckingDomain {
            domain: domain.to_string(),
        };
        Ok(self.epoch)
    }

    /// Applies a check result. Returns false when the token is stale — the
    /// flow moved on while the call was in flight and the result is dropped.
    pub fn complete_check(
        &mut self,
        epoch: u64,
        domain: &str,
        available: bool,
        price: Option<f64>,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.state = PublishState::DomainChecked {
            domain: domain.to_string(),
            available,
            price,
        };
        true
    }

    /// Rolls back a failed check. Stale tokens are ignored the same way.
    pub fn fail_check(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.state = PublishState::Idle;
        true
    }

    /// Guards the transition into `Publishing`. No network call may happen
    /// before this succeeds.
    pub fn begin_publish(&mut self, domain: &str) -> Result<(), FlowError> {
        match &self.state {
            PublishState::Publishing { .. } => Err(FlowError::PublishInFlight),
            PublishState::DomainChecked {
                domain: checked,
                available,
                ..
            } => {
                if checked != domain {
                    return Err(FlowError::DomainMismatch {
                        checked: checked.clone(),
                        requested: domain.to_string(),
                    });
                }
                if !available {
                    return Err(FlowError::DomainUnavailable(domain.to_string()));
                }
                self.epoch += 1;
                self.state = PublishState::Publishing {
                    domain: domain.to_string(),
                };
                Ok(())
            }
            _ => Err(FlowError::NotChecked),
        }
    }

    pub fn complete_publish(
        &mut self,
        domain: &str,
        website_url: &str,
        published_at: DateTime<Utc>,
    ) {
        self.epoch += 1;
        self.state = PublishState::Published {
            domain: domain.to_string(),
            website_url: website_url.to_string(),
            published_at,
        };
    }

    pub fn fail_publish(&mut self, domain: &str, message: &str) {
        self.epoch += 1;
        self.state = PublishState::Failed {
            domain: domain.to_string(),
            message: message.to_string(),
        };
    }

    /// The user dismissed the dialog: any in-flight result becomes stale and
    /// the flow returns to rest. An in-flight publish is deliberately not
    /// interruptible — the registration side effect is already underway.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.state, PublishState::Publishing { .. }) {
            return false;
        }
        self.epoch += 1;
        self.state = PublishState::Idle;
        true
    }
}

impl Default for PublishFlow {
    fn default() -> Self {
        Self::new()
    }
}
