pub mod link;
pub mod otp;
pub mod user;

pub use link::StoredLink;
pub use otp::OtpRecord;
pub use user::{User, UserRecord};
