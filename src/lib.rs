pub mod active;
pub mod board;
pub mod city;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod face;
pub mod logging;
pub mod presenter;
pub mod row;
pub mod segment;
pub mod storage;
pub mod ticker;

pub use active::ActiveSet;
pub use board::{Board, Card, Input};
pub use city::{City, CITIES, DEFAULT_CITIES, MAX_CLOCKS};
pub use clock::{current_time, Clock, WallTime};
pub use config::Config;
pub use controller::{Phase, WorldClocks};
pub use error::{Error, Result};
pub use face::{format_digital, hand_angles, HandAngles};
pub use presenter::Presenter;
pub use segment::Segment;
pub use storage::{FileStorage, MemoryStorage, Persistence, Storage, STORAGE_KEY};
pub use ticker::{Scheduler, Ticker, UPDATE_PERIOD};
