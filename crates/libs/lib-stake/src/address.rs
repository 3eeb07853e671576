//! # Destination Address Resolution
//!
//! The staking client can derive the destination address, but only after the sign
//! session is complete. [`AddressResolver`] is the reactive subscription over the two
//! inputs `(client present, session signed)`:
//!
//! - a fetch is started only when the inputs *change* and both are true;
//! - re-observing the same inputs never starts another fetch;
//! - any input change retires the outstanding fetch, so a late result from an
//!   older fetch is dropped instead of overwriting newer state.
//!
//! Failures are surfaced on the resolver (and logged) rather than swallowed. There is
//! no automatic retry; the address field stays editable so the user can type one.

use tracing::{debug, info, warn};

use crate::error::{ClientError, Result, StakeError};

/// Inputs that gate address resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveInputs {
    pub client_present: bool,
    pub signed: bool,
}

impl ResolveInputs {
    pub fn new(client_present: bool, signed: bool) -> Self {
        Self {
            client_present,
            signed,
        }
    }

    /// Whether an address may be requested.
    pub fn ready(&self) -> bool {
        self.client_present && self.signed
    }
}

/// Handle for one started fetch; completing with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the ticket is needed to complete the resolution"]
pub struct ResolveTicket(u64);

/// Destination address state plus the de-duplicating fetch trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressResolver {
    last_inputs: Option<ResolveInputs>,
    generation: u64,
    in_flight: Option<u64>,
    address: String,
    error: Option<StakeError>,
}

impl AddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current destination address (resolved or typed); empty when unknown.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Last resolution failure, cleared by the next resolution or a manual edit.
    pub fn error(&self) -> Option<&StakeError> {
        self.error.as_ref()
    }

    pub fn is_resolving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Manual edit of the address field.
    pub fn set_address(&mut self, raw: &str) {
        self.address = raw.to_string();
        self.error = None;
    }

    /// Feed the current inputs. Returns a ticket when a fetch should start.
    pub fn observe(&mut self, inputs: ResolveInputs) -> Option<ResolveTicket> {
        if self.last_inputs == Some(inputs) {
            return None;
        }
        self.last_inputs = Some(inputs);
        self.generation += 1;
        self.in_flight = None;

        if !inputs.ready() {
            debug!(?inputs, "address resolution not ready");
            return None;
        }

        debug!(generation = self.generation, "starting address resolution");
        self.in_flight = Some(self.generation);
        Some(ResolveTicket(self.generation))
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `Ok(true)` when the address was updated and `Ok(false)` when the
    /// ticket was stale and the result ignored.
    pub fn complete(
        &mut self,
        ticket: ResolveTicket,
        result: std::result::Result<String, ClientError>,
    ) -> Result<bool> {
        if self.in_flight != Some(ticket.0) {
            debug!(generation = ticket.0, "dropping stale address resolution");
            return Ok(false);
        }
        self.in_flight = None;

        match result {
            Ok(address) => {
                info!(%address, "staking address resolved");
                self.address = address;
                self.error = None;
                Ok(true)
            }
            Err(err) => {
                warn!(error = %err, "staking address resolution failed");
                let err = StakeError::AddressResolution(err);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
