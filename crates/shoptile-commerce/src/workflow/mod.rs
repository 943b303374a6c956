//! Cart submission workflow module.
//!
//! The attempt state machine, the injected collaborator seams, and the
//! submit coordinator that ties a tile to the shared cart.

mod notify;
mod remote;
mod state;
mod submit;

pub use notify::{NotificationService, TracingNotifier};
pub use remote::{CartRemote, SimulatedRemote};
pub use state::WorkflowState;
pub use submit::{CartSubmissionWorkflow, SubmitOutcome};
