/// Membership test against the one process-wide access code.
///
/// Failures re-prompt indefinitely; there is deliberately no lockout. A
/// session that passes the check stays authenticated until process restart.
pub struct AccessGate {
    code: String,
}

impl AccessGate {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn check(&self, submitted: &str) -> bool {
        submitted == self.code
    }
}
