//! Configuration types for each CLI command

mod audition;
mod soundcheck;
mod trace;

pub use audition::{AuditionConfig, AuditionConfigBuilder};
pub use soundcheck::{SoundcheckConfig, SoundcheckConfigBuilder};
pub use trace::{TraceConfig, TraceConfigBuilder};
