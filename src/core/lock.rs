pub const PIN_LEN: usize = 4;

/// How long the mismatch indicator stays up before the pad resets for retry.
pub const ERROR_CLEAR_MS: u64 = 1000;

/// Result of feeding one digit into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    /// Buffer not full yet.
    Pending,
    /// Buffer matched the configured PIN; the gate has reset itself.
    Accepted,
    /// Buffer was full and wrong. `attempt` tags the error window so a timed
    /// clear for a superseded attempt can be ignored.
    Rejected { attempt: u64 },
}

/// Finite acceptor over the digit pad: fills a 4-digit buffer, compares on
/// the fourth digit, and recovers automatically from the rejecting branch.
/// Unlimited retries; the bypass path lives in the application, not here.
#[derive(Debug, Default)]
pub struct LockGate {
    buffer: String,
    error: bool,
    attempt: u64,
}

impl LockGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entered(&self) -> usize {
        self.buffer.len()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Feed one digit (0-9). Input during the error window is dropped; the
    /// timed clear will reopen the pad.
    pub fn push_digit(&mut self, digit: u8, pin: &str) -> PinOutcome {
        if self.error || digit > 9 || self.buffer.len() >= PIN_LEN {
            return PinOutcome::Pending;
        }
        self.buffer.push((b'0' + digit) as char);
        if self.buffer.len() < PIN_LEN {
            return PinOutcome::Pending;
        }
        if self.buffer == pin {
            self.reset();
            PinOutcome::Accepted
        } else {
            self.error = true;
            self.attempt += 1;
            PinOutcome::Rejected { attempt: self.attempt }
        }
    }

    pub fn backspace(&mut self) {
        if !self.error {
            self.buffer.pop();
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.error = false;
    }

    /// Timed recovery from a rejection. Stale attempt tokens are ignored so
    /// only the most recent timer wins.
    pub fn clear_rejected(&mut self, attempt: u64) {
        if self.error && self.attempt == attempt {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIN: &str = "1234";

    fn enter(gate: &mut LockGate, digits: &[u8]) -> PinOutcome {
        let mut last = PinOutcome::Pending;
        for &d in digits {
            last = gate.push_digit(d, PIN);
        }
        last
    }

    #[test]
    fn correct_pin_is_accepted_and_gate_resets() {
        let mut gate = LockGate::new();
        assert_eq!(enter(&mut gate, &[1, 2, 3]), PinOutcome::Pending);
        assert_eq!(gate.entered(), 3);
        assert_eq!(gate.push_digit(4, PIN), PinOutcome::Accepted);
        assert_eq!(gate.entered(), 0);
        assert!(!gate.has_error());
    }

    #[test]
    fn wrong_pin_rejects_then_timed_clear_allows_retry() {
        let mut gate = LockGate::new();
        let PinOutcome::Rejected { attempt } = enter(&mut gate, &[9, 9, 9, 9]) else {
            panic!("expected rejection");
        };
        assert!(gate.has_error());

        // Input during the error window is dropped.
        assert_eq!(gate.push_digit(1, PIN), PinOutcome::Pending);
        assert_eq!(gate.entered(), 4);

        gate.clear_rejected(attempt);
        assert!(!gate.has_error());
        assert_eq!(gate.entered(), 0);
        assert_eq!(enter(&mut gate, &[1, 2, 3, 4]), PinOutcome::Accepted);
    }

    #[test]
    fn stale_clear_token_is_ignored() {
        let mut gate = LockGate::new();
        let PinOutcome::Rejected { attempt: first } = enter(&mut gate, &[0, 0, 0, 0]) else {
            panic!("expected rejection");
        };
        gate.clear_rejected(first);
        let PinOutcome::Rejected { attempt: second } = enter(&mut gate, &[0, 0, 0, 1]) else {
            panic!("expected rejection");
        };
        assert_ne!(first, second);

        // The first attempt's timer firing late must not clear the new error.
        gate.clear_rejected(first);
        assert!(gate.has_error());
        gate.clear_rejected(second);
        assert!(!gate.has_error());
    }

    #[test]
    fn backspace_then_completion_unlocks() {
        let mut gate = LockGate::new();
        enter(&mut gate, &[1, 2]);
        gate.backspace();
        assert_eq!(gate.entered(), 1);
        assert_eq!(enter(&mut gate, &[2, 3, 4]), PinOutcome::Accepted);
    }

    #[test]
    fn buffer_never_exceeds_pin_length() {
        let mut gate = LockGate::new();
        enter(&mut gate, &[5, 5, 5, 5]);
        assert_eq!(gate.entered(), PIN_LEN);
        gate.push_digit(5, PIN);
        assert_eq!(gate.entered(), PIN_LEN);
    }

    #[test]
    fn reset_clears_buffer_and_error() {
        let mut gate = LockGate::new();
        enter(&mut gate, &[7, 7, 7, 7]);
        gate.reset();
        assert_eq!(gate.entered(), 0);
        assert!(!gate.has_error());
    }
}
