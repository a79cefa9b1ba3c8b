//! Two-step onboarding wizard state machine.

use crate::registration::{OnboardingError, Registration};
use crate::role::Role;

/// Wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Step 1: pick one of the fixed roles.
    SelectingRole,
    /// Step 2: fill the role-specific profile.
    FillingProfile,
}

/// Role onboarding flow: role selection, then a role-tagged profile form.
///
/// The flow itself is pure. Persisting the chosen role, notifying the
/// user and navigating to the dashboard are the shell's responsibility
/// (`blockgst-app`), driven by the outcome of [`submit_registration`].
///
/// [`submit_registration`]: OnboardingFlow::submit_registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    selected: Option<Role>,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::SelectingRole,
            selected: None,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.selected
    }

    /// Record the role choice. Selecting again overwrites.
    pub fn select_role(&mut self, role: Role) {
        self.selected = Some(role);
    }

    /// `SelectingRole → FillingProfile`, guarded by a recorded choice.
    ///
    /// Returns whether the flow moved. Advancing without a selection is a
    /// no-op, as is advancing from the profile step.
    pub fn advance(&mut self) -> bool {
        if self.step == OnboardingStep::SelectingRole && self.selected.is_some() {
            self.step = OnboardingStep::FillingProfile;
            true
        } else {
            false
        }
    }

    /// `FillingProfile → SelectingRole`, unconditional.
    ///
    /// The selection is retained, as is whatever form state the caller
    /// holds; nothing is discarded by going back.
    pub fn back(&mut self) {
        self.step = OnboardingStep::SelectingRole;
    }

    /// Validate the submitted profile and yield the role to persist.
    ///
    /// The form is the source of truth: its tag decides the required
    /// fields and becomes the registered role. On failure the flow stays
    /// in `FillingProfile` for another attempt.
    pub fn submit_registration(&self, form: &Registration) -> Result<Role, OnboardingError> {
        form.validate()?;
        Ok(form.role())
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::BuyerProfile;

    #[test]
    fn starts_selecting_with_nothing_chosen() {
        let flow = OnboardingFlow::new();
        assert_eq!(flow.step(), OnboardingStep::SelectingRole);
        assert_eq!(flow.selected_role(), None);
    }

    #[test]
    fn cannot_advance_without_a_selection() {
        let mut flow = OnboardingFlow::new();
        assert!(!flow.advance());
        assert_eq!(flow.step(), OnboardingStep::SelectingRole);
    }

    #[test]
    fn advances_once_a_role_is_chosen() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Officer);
        assert!(flow.advance());
        assert_eq!(flow.step(), OnboardingStep::FillingProfile);
        // A second advance has nowhere to go.
        assert!(!flow.advance());
    }

    #[test]
    fn back_retains_the_selection() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Buyer);
        flow.advance();
        flow.back();
        assert_eq!(flow.step(), OnboardingStep::SelectingRole);
        assert_eq!(flow.selected_role(), Some(Role::Buyer));
        // Re-advancing still works with the retained choice.
        assert!(flow.advance());
    }

    #[test]
    fn submit_yields_the_forms_tagged_role() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Buyer);
        flow.advance();

        let form = Registration::Buyer(BuyerProfile {
            company_name: "Digital Innovations Inc".to_string(),
            contact_person: "Vikram Shah".to_string(),
            email: "contact@company.com".to_string(),
            phone: None,
            address: None,
        });
        assert_eq!(flow.submit_registration(&form).unwrap(), Role::Buyer);
    }

    #[test]
    fn failed_submit_leaves_the_flow_filling() {
        let mut flow = OnboardingFlow::new();
        flow.select_role(Role::Buyer);
        flow.advance();

        let form = Registration::Buyer(BuyerProfile::default());
        assert!(flow.submit_registration(&form).is_err());
        assert_eq!(flow.step(), OnboardingStep::FillingProfile);
    }
}
