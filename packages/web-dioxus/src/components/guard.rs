//! Route-guard evaluation.
//!
//! Both layouts gate navigation the same way; the decision is a pure
//! function of the session state so it cannot drift between renders.

/// What a guard renders for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still in flight: show a placeholder, never redirect
    /// (redirecting here causes a flicker to the login page on refresh).
    Loading,
    /// No principal of the required kind: redirect to its login entry point.
    RedirectToLogin,
    /// Render the protected content.
    Allow,
}

pub fn evaluate(loading: bool, authenticated: bool) -> GuardDecision {
    if loading {
        GuardDecision::Loading
    } else if !authenticated {
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_everything() {
        assert_eq!(evaluate(true, false), GuardDecision::Loading);
        assert_eq!(evaluate(true, true), GuardDecision::Loading);
    }

    #[test]
    fn unauthenticated_redirects_once_loaded() {
        assert_eq!(evaluate(false, false), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn authenticated_renders_content() {
        assert_eq!(evaluate(false, true), GuardDecision::Allow);
    }

    #[test]
    fn decision_is_idempotent_for_unchanged_state() {
        for loading in [false, true] {
            for authenticated in [false, true] {
                let first = evaluate(loading, authenticated);
                for _ in 0..10 {
                    assert_eq!(evaluate(loading, authenticated), first);
                }
            }
        }
    }
}
