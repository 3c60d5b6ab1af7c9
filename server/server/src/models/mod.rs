pub mod clock;
pub mod equipment;
pub mod production;
pub mod quality;
pub mod stats;
pub mod store;

/// An `action` value no dispatcher recognises. Treated as a no-op.
#[derive(Debug)]
pub struct UnknownAction(pub String);
