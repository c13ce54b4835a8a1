pub mod contact;
mod not_found;

pub use not_found::NotFound;
