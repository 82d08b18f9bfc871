//! DTOs for the thermostat API
//!
//! Request and response envelopes exchanged between the CLI/client and the
//! server, one submodule per API area. Field names on the wire are
//! camelCase.

pub mod adjust;
pub mod history;
pub mod yes_no;
