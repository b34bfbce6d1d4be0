pub mod checkin;

pub use checkin::*;
