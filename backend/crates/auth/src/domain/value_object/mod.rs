//! Value Object Module

pub mod availability_status;
pub mod email;
pub mod specialty;
pub mod user_type;

pub use availability_status::AvailabilityStatus;
pub use email::Email;
pub use user_type::UserType;
