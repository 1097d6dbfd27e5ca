mod engine;
mod record;
mod store;
mod tag;

pub use engine::{now_ms, Intent, TickReport, TimerEngine};
pub use record::{
    check_name, TimerKind, TimerRecord, TimerSettings, DEFAULT_INITIAL_MS, DEFAULT_NOTIFY_MS,
    NAME_SOFT_LIMIT,
};
pub use store::{TimerStore, MAX_TIMERS};
pub use tag::Tag;
