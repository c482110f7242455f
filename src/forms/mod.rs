pub mod dependent;
pub mod engine;
pub mod scheduler;
pub mod schema;
pub mod session;
pub mod token;

pub use dependent::DependentOptions;
pub use engine::{AddListingForm, FormError, SubmitPhase, VisibleField};
pub use schema::{FieldKind, ListingType};
pub use session::{FormHandle, FormSessions, SubmitDelays, FORM_COOKIE};
