//! Trait definitions for the sshring public API

pub mod ring;
pub mod serialize;

pub use ring::RingScheme;
pub use serialize::Serialize;
