pub mod renderer;
pub mod schedule_client;
pub mod validator;

pub use schedule_client::{HttpScheduleClient, ScheduleService};
pub use validator::normalize;
