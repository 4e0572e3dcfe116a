pub mod profile;
pub mod record;

pub use profile::{Gender, UserProfile};
pub use record::UserRecord;
