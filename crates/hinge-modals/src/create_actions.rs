//! # Create Actions
//!
//! The "+" modal for starting or joining a workspace: create or join an
//! organization, create or join a project. None of its views carries a
//! selection, so the selection type is the unit type.

use hinge_wizard::{ViewCopy, WizardController, WizardFlow, WizardView};
use serde::{Deserialize, Serialize};

/// Views of the Create Actions wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CreateActionView {
    /// Menu of the four actions
    #[default]
    Initial,
    /// Create a new organization
    CreateOrganization,
    /// Join an existing organization
    JoinOrganization,
    /// Create a new project
    CreateProject,
    /// Join an existing project
    JoinProject,
}

impl WizardView for CreateActionView {
    const ROOT: Self = Self::Initial;

    fn all() -> &'static [Self] {
        &[
            Self::Initial,
            Self::CreateOrganization,
            Self::JoinOrganization,
            Self::CreateProject,
            Self::JoinProject,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::CreateOrganization => "createOrganization",
            Self::JoinOrganization => "joinOrganization",
            Self::CreateProject => "createProject",
            Self::JoinProject => "joinProject",
        }
    }
}

/// Create Actions flow definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreateActionsFlow;

impl WizardFlow for CreateActionsFlow {
    type View = CreateActionView;
    type Selection = ();

    fn describe(&self, view: CreateActionView, _selection: Option<&()>) -> ViewCopy {
        match view {
            CreateActionView::Initial => ViewCopy::new(
                "Create or Join",
                "Start something new or join your team",
            ),
            CreateActionView::CreateOrganization => ViewCopy::new(
                "Create Organization",
                "Set up a home for your company or community",
            ),
            CreateActionView::JoinOrganization => ViewCopy::new(
                "Join Organization",
                "Enter an invite code to join an organization",
            ),
            CreateActionView::CreateProject => ViewCopy::new(
                "Create Project",
                "Start a project and invite collaborators",
            ),
            CreateActionView::JoinProject => ViewCopy::new(
                "Join Project",
                "Enter an invite code to join a project",
            ),
        }
    }
}

/// Controller type backing the Create Actions modal.
pub type CreateActionsModal = WizardController<CreateActionsFlow>;
