pub mod form;
pub mod loaders;
pub mod payload;
pub mod schedule;
pub mod subject;

pub use form::{FormEdit, FormState};
pub use loaders::{load_plan_file, parse_plan};
pub use payload::{CleanSubject, SubmissionPayload};
pub use schedule::{Schedule, ScheduleResponse, Task};
pub use subject::{Subject, SubjectField};
