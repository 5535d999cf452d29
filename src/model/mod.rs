pub mod case;
pub mod message;
pub mod persona;
pub mod phase;
pub mod session;
