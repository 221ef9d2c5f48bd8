pub mod email;
pub mod user_role;

pub use email::Email;
pub use user_role::UserRole;
