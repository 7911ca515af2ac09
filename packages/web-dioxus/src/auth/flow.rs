//! Login flow state machine for the user OTP/TOTP flow.
//!
//! Pure and synchronous: the login page owns a `Signal<LoginFlow>` and drives
//! transitions from its event handlers, so the phone-entry, code-entry,
//! resend-cooldown, and enrollment branches are all testable without a
//! network or a renderer.

use portal_client::OtpChallenge;

/// Seconds a user must wait between OTP requests for the same number.
pub const RESEND_COOLDOWN_SECS: u32 = 30;

const MAX_MOBILE_DIGITS: usize = 15;
const CODE_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginStep {
    #[default]
    PhoneEntry,
    CodeEntry,
}

/// Which path the request-OTP response put us on.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EnrollMode {
    /// TOTP is already set up; the user just enters the current code.
    #[default]
    Returning,
    /// First-time setup: show the QR image and manual secret.
    FirstTime {
        qr_base64: Option<String>,
        secret: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LoginFlow {
    step: LoginStep,
    mobile: String,
    code: String,
    mode: EnrollMode,
    cooldown: u32,
    pending: bool,
    error: Option<String>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn mode(&self) -> &EnrollMode {
        &self.mode
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_enrollment(&self) -> bool {
        matches!(self.mode, EnrollMode::FirstTime { .. })
    }

    /// Accept an edit to the mobile field. Only digits, spaces, parens,
    /// hyphens, and a plus sign are kept; edits that would exceed
    /// [`MAX_MOBILE_DIGITS`] digits are rejected outright.
    pub fn set_mobile(&mut self, input: &str) {
        let filtered: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+'))
            .collect();

        if digit_count(&filtered) > MAX_MOBILE_DIGITS {
            return;
        }

        self.mobile = filtered;
        self.error = None;
    }

    /// Accept an edit to the code field: non-digits stripped, truncated to
    /// six characters.
    pub fn set_code(&mut self, input: &str) {
        self.code = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(CODE_LEN)
            .collect();
        self.error = None;
    }

    /// The entered mobile number in canonical country-coded form.
    pub fn normalized_mobile(&self) -> String {
        normalize_mobile(&self.mobile)
    }

    pub fn can_submit_mobile(&self) -> bool {
        !self.pending && digit_count(&self.mobile) > 0
    }

    /// Submit is enabled iff exactly six digits are present.
    pub fn can_submit_code(&self) -> bool {
        !self.pending && self.code.len() == CODE_LEN
    }

    /// Mark a request-OTP call as outstanding. Returns false (and does
    /// nothing) while another call is in flight.
    pub fn begin_request(&mut self) -> bool {
        if self.pending || digit_count(&self.mobile) == 0 {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Apply a successful request-OTP response. Advances to code entry with a
    /// fresh cooldown on either the returning-user branch (`enabled`) or the
    /// enrollment branch (`qr_data` present). A response carrying neither
    /// leaves the flow where it was.
    pub fn apply_challenge(&mut self, challenge: &OtpChallenge) -> bool {
        self.pending = false;

        if challenge.enabled {
            self.mode = EnrollMode::Returning;
        } else if let Some(qr) = &challenge.qr_data {
            self.mode = EnrollMode::FirstTime {
                qr_base64: qr.base64.clone(),
                secret: challenge.secret.clone(),
            };
        } else {
            return false;
        }

        self.step = LoginStep::CodeEntry;
        self.cooldown = RESEND_COOLDOWN_SECS;
        true
    }

    /// Mark a verify call as outstanding. Requires six digits and no call in
    /// flight.
    pub fn begin_verify(&mut self) -> bool {
        if self.step != LoginStep::CodeEntry || !self.can_submit_code() {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    pub fn can_resend(&self) -> bool {
        self.step == LoginStep::CodeEntry && self.cooldown == 0 && !self.pending
    }

    /// Start a resend. A no-op unless the cooldown has reached zero.
    pub fn begin_resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// One second of cooldown elapsed. Returns the remaining seconds.
    pub fn tick(&mut self) -> u32 {
        self.cooldown = self.cooldown.saturating_sub(1);
        self.cooldown
    }

    /// A remote call failed: surface the message, stay on the current step.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.error = Some(message.into());
    }

    /// Back to phone entry with everything cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Normalize a typed mobile number to a canonical country-coded form:
/// 10 digits get a `+1` prefix, 11 digits starting with `1` get a `+`, and
/// anything longer gets a `+` with digit content unchanged. Shorter inputs
/// pass through as typed.
pub fn normalize_mobile(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == 10 {
        format!("+1{digits}")
    } else if digits.len() == 11 && digits.starts_with('1') {
        format!("+{digits}")
    } else if digits.len() > 10 {
        format!("+{digits}")
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_client::QrData;

    fn enrollment_challenge() -> OtpChallenge {
        OtpChallenge {
            method: Some("totp".to_string()),
            qr_data: Some(QrData {
                base64: Some("data:image/png;base64,abc".to_string()),
            }),
            secret: Some("ABC123".to_string()),
            enabled: false,
        }
    }

    fn returning_challenge() -> OtpChallenge {
        OtpChallenge {
            method: Some("totp".to_string()),
            qr_data: None,
            secret: None,
            enabled: true,
        }
    }

    #[test]
    fn normalizes_ten_digit_numbers_with_default_country_code() {
        assert_eq!(normalize_mobile("5551234567"), "+15551234567");
        assert_eq!(normalize_mobile("555-123-4567"), "+15551234567");
    }

    #[test]
    fn normalizes_eleven_digit_numbers_starting_with_one() {
        assert_eq!(normalize_mobile("15551234567"), "+15551234567");
    }

    #[test]
    fn longer_numbers_get_a_plus_with_digits_unchanged() {
        assert_eq!(normalize_mobile("4915512345678"), "+4915512345678");
    }

    #[test]
    fn short_input_passes_through_as_typed() {
        assert_eq!(normalize_mobile("12345"), "12345");
    }

    #[test]
    fn mobile_field_rejects_disallowed_characters_and_overlong_edits() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("+1 (555) abc123-4567");
        assert_eq!(flow.mobile(), "+1 (555) 123-4567");

        // 16 digits: the edit is rejected, previous value stays.
        flow.set_mobile("1234567890123456");
        assert_eq!(flow.mobile(), "+1 (555) 123-4567");
    }

    #[test]
    fn code_field_strips_non_digits_and_truncates_to_six() {
        let mut flow = LoginFlow::new();
        flow.set_code("12a3-4b5");
        assert_eq!(flow.code(), "12345");
        assert!(!flow.can_submit_code());

        flow.set_code("1234567890");
        assert_eq!(flow.code(), "123456");
        assert!(flow.can_submit_code());
    }

    #[test]
    fn returning_user_branch_advances_with_cooldown() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("5551234567");
        assert!(flow.begin_request());
        assert!(flow.apply_challenge(&returning_challenge()));

        assert_eq!(flow.step(), LoginStep::CodeEntry);
        assert_eq!(flow.cooldown(), RESEND_COOLDOWN_SECS);
        assert!(!flow.is_enrollment());
    }

    #[test]
    fn enrollment_branch_records_qr_and_secret() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("555-123-4567");
        assert_eq!(flow.normalized_mobile(), "+15551234567");
        assert!(flow.begin_request());
        assert!(flow.apply_challenge(&enrollment_challenge()));

        assert_eq!(flow.step(), LoginStep::CodeEntry);
        assert_eq!(flow.cooldown(), 30);
        match flow.mode() {
            EnrollMode::FirstTime { qr_base64, secret } => {
                assert_eq!(qr_base64.as_deref(), Some("data:image/png;base64,abc"));
                assert_eq!(secret.as_deref(), Some("ABC123"));
            }
            other => panic!("expected enrollment mode, got {other:?}"),
        }
    }

    #[test]
    fn challenge_with_neither_branch_stays_on_phone_entry() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("5551234567");
        assert!(flow.begin_request());

        let challenge = OtpChallenge {
            method: None,
            qr_data: None,
            secret: None,
            enabled: false,
        };
        assert!(!flow.apply_challenge(&challenge));
        assert_eq!(flow.step(), LoginStep::PhoneEntry);
        assert!(!flow.is_pending());
    }

    #[test]
    fn second_request_is_blocked_while_one_is_outstanding() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("5551234567");
        assert!(flow.begin_request());
        assert!(!flow.begin_request());
    }

    #[test]
    fn resend_is_a_noop_while_cooldown_is_positive() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("5551234567");
        flow.begin_request();
        flow.apply_challenge(&returning_challenge());

        let before = flow.clone();
        assert!(!flow.begin_resend());
        assert_eq!(flow, before);
    }

    #[test]
    fn resend_fires_at_zero_and_resets_cooldown() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("5551234567");
        flow.begin_request();
        flow.apply_challenge(&returning_challenge());

        for _ in 0..RESEND_COOLDOWN_SECS {
            flow.tick();
        }
        assert_eq!(flow.cooldown(), 0);
        assert!(flow.begin_resend());
        assert!(flow.apply_challenge(&returning_challenge()));
        assert_eq!(flow.cooldown(), RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn cooldown_stops_at_zero() {
        let mut flow = LoginFlow::new();
        flow.begin_request();
        flow.apply_challenge(&returning_challenge());

        for _ in 0..100 {
            flow.tick();
        }
        assert_eq!(flow.cooldown(), 0);
    }

    #[test]
    fn failure_keeps_the_current_step_and_surfaces_the_message() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("5551234567");
        flow.begin_request();
        flow.apply_challenge(&returning_challenge());

        flow.set_code("123456");
        assert!(flow.begin_verify());
        flow.fail("Invalid OTP code");

        assert_eq!(flow.step(), LoginStep::CodeEntry);
        assert_eq!(flow.error(), Some("Invalid OTP code"));
        assert!(!flow.is_pending());

        // Editing the field clears the banner.
        flow.set_code("654321");
        assert!(flow.error().is_none());
    }

    #[test]
    fn reset_returns_to_a_clean_phone_entry() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("5551234567");
        flow.begin_request();
        flow.apply_challenge(&enrollment_challenge());
        flow.set_code("123456");

        flow.reset();
        assert_eq!(flow, LoginFlow::default());
    }

    #[test]
    fn enrollment_end_to_end() {
        let mut flow = LoginFlow::new();
        flow.set_mobile("555-123-4567");
        assert!(flow.begin_request());
        assert_eq!(flow.normalized_mobile(), "+15551234567");

        assert!(flow.apply_challenge(&enrollment_challenge()));
        assert!(flow.is_enrollment());
        assert_eq!(flow.cooldown(), 30);

        flow.set_code("123456");
        assert!(flow.begin_verify());
        // Verify succeeded remotely; the page sets the session and navigates.
    }
}
