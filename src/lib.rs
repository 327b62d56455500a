pub mod bit;
pub mod cast;
pub mod error;
pub mod iface;
pub mod port;
pub mod signal;
pub mod trace;
pub mod unsigned;

pub mod prelude {
    pub use crate::{
        bit::{Bit, H, L},
        cast::{Cast, CastFrom},
        error::Error,
        iface::{TrimChannel, TrimPortInterface, TRIM_CHANNELS},
        port::{Direction, Port},
        signal::{SignalValue, Wire, WireState},
        trace::{Timescale, Tracer},
        unsigned::Unsigned,
    };
}
