//! Copy and click routing for the restricted-access interstitial. The overlay
//! itself is stateless; everything it shows comes from these constants and the
//! caller's close callback.

pub const RESTRICTED_TITLE: &str = "Access Restricted";
pub const RESTRICTED_MESSAGE: &str =
    "This part of the site is reserved for the couple and their planners. \
     Your invitation gives you access to the guest dashboard.";
pub const DISMISS_LABEL: &str = "Back to my dashboard";

/// Where a click on the interstitial landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Scrim,
    Panel,
    DismissButton,
}

/// Whether a click dismisses the interstitial. Views enforce the `Panel` case
/// by stopping propagation at the panel, so its clicks never reach the scrim
/// handler.
#[must_use]
pub const fn dismisses(target: ClickTarget) -> bool {
    match target {
        ClickTarget::Scrim | ClickTarget::DismissButton => true,
        ClickTarget::Panel => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_clicks_are_contained() {
        assert!(dismisses(ClickTarget::Scrim));
        assert!(dismisses(ClickTarget::DismissButton));
        assert!(!dismisses(ClickTarget::Panel));
    }
}
