pub mod initialize;
pub mod create_lockup;
pub mod release;
pub mod revoke;
pub mod transfer_ownership;
pub mod emit_lockup_quote;

pub use initialize::*;
pub use create_lockup::*;
pub use release::*;
pub use revoke::*;
pub use transfer_ownership::*;
pub use emit_lockup_quote::*;
