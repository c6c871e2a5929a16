pub mod clock;
pub mod id;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::{IdGenerator, UuidV7Generator};

pub mod error_codes {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_ERROR: i32 = 1000;
    pub const SESSION_NOT_FOUND: i32 = 1002;
    pub const STORE_UNAVAILABLE: i32 = 5001;
    pub const CORRUPT_SESSION: i32 = 5002;
    pub const INTERNAL_ERROR: i32 = 5000;
}
