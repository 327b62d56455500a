use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use derive_where::derive_where;
use rustc_hash::FxHashMap;
pub use vcd::{IdCode, Value as TraceValue};
use vcd::{TimescaleUnit, VarType, Writer as VcdWriter};

use crate::{
    bit::Bit,
    iface::{TrimPortInterface, TRIM_CHANNELS},
    port::Port,
    unsigned::Unsigned,
};

const MOD_NAME: &str = "ckout_trim";

#[derive(Debug, Clone, Copy)]
pub enum Timescale {
    S(u32),
    MS(u32),
    US(u32),
    NS(u32),
    PS(u32),
    FS(u32),
}

impl Timescale {
    fn into_pair(self) -> (u32, TimescaleUnit) {
        match self {
            Self::S(ts) => (ts, TimescaleUnit::S),
            Self::MS(ts) => (ts, TimescaleUnit::MS),
            Self::US(ts) => (ts, TimescaleUnit::US),
            Self::NS(ts) => (ts, TimescaleUnit::NS),
            Self::PS(ts) => (ts, TimescaleUnit::PS),
            Self::FS(ts) => (ts, TimescaleUnit::FS),
        }
    }
}

impl Default for Timescale {
    fn default() -> Self {
        Self::PS(1)
    }
}

fn bit_to_vcd(bit: Option<Bit>) -> TraceValue {
    match bit {
        Some(bit) => {
            if bool::from(bit) {
                TraceValue::V1
            } else {
                TraceValue::V0
            }
        }
        None => TraceValue::X,
    }
}

// MSB first, as VCD vectors are written.
fn bus_to_vcd<const N: usize>(value: Option<Unsigned<N>>) -> Vec<TraceValue> {
    match value {
        Some(value) => (0..N)
            .rev()
            .map(|n| {
                if value.bit(n) {
                    TraceValue::V1
                } else {
                    TraceValue::V0
                }
            })
            .collect(),
        None => vec![TraceValue::X; N],
    }
}

/// Dumps the pin state of a [`TrimPortInterface`] into a VCD waveform. Wires
/// without a defining write are rendered as `x`, never as zero.
#[derive_where(Debug)]
pub struct Tracer {
    ids: FxHashMap<String, IdCode>,
    timescale: Timescale,
    #[derive_where(skip)]
    vcd: VcdWriter<Box<dyn Write>>,
}

impl Tracer {
    pub fn open_vcd<P: AsRef<Path>>(
        path: P,
        timescale: Option<Timescale>,
    ) -> io::Result<Self> {
        let mut vcd = VcdWriter::new(
            Box::new(BufWriter::new(File::create(path)?)) as Box<dyn Write>
        );
        let timescale = timescale.unwrap_or_default();
        let (ts, unit) = timescale.into_pair();
        vcd.timescale(ts, unit)?;
        vcd.add_module(MOD_NAME)?;

        let mut ids: FxHashMap<String, IdCode> = Default::default();
        for port in Port::all() {
            let var_ty = match port.width() {
                1 => VarType::Wire,
                _ => VarType::Integer,
            };
            let id = vcd.add_var(var_ty, port.width(), port.name().as_ref(), None)?;
            ids.insert(port.name().into_owned(), id);
        }
        vcd.upscope()?;
        vcd.enddefinitions()?;

        Ok(Self {
            ids,
            timescale,
            vcd,
        })
    }

    #[inline]
    pub fn mod_name(&self) -> &'static str {
        MOD_NAME
    }

    #[inline]
    pub fn timescale(&self) -> Timescale {
        self.timescale
    }

    /// Writes a timestamp and the current value of every pin.
    pub fn dump(&mut self, iface: &TrimPortInterface, time: u64) -> io::Result<()> {
        self.vcd.timestamp(time)?;

        for lane in 0..TRIM_CHANNELS {
            let trim = iface
                .trim_outputs(lane)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
            self.change_wire(&format!("pu_trim_{lane}"), bit_to_vcd(Some(trim.pu_trim)))?;
            self.change_wire(
                &format!("weakpu_trim_{lane}"),
                bit_to_vcd(Some(trim.weakpu_trim)),
            )?;
            self.change_wire(
                &format!("weakpd_trim_{lane}"),
                bit_to_vcd(Some(trim.weakpd_trim)),
            )?;
        }

        self.change_bus("trim_din", bus_to_vcd(iface.trim_control().ok()))?;
        self.change_bus(
            "ckouta_dr_en",
            bus_to_vcd(iface.clock_output_enable_bus().ok()),
        )?;
        self.change_wire(
            "ckout_ocv_monitor",
            bit_to_vcd(iface.monitor_input().ok()),
        )?;
        self.change_wire("ana_en", bit_to_vcd(iface.analog_enable().ok()))?;
        self.change_bus("lvcmos_en_din", bus_to_vcd(iface.lvcmos_enable().ok()))?;

        Ok(())
    }

    fn change_wire(&mut self, name: &str, value: TraceValue) -> io::Result<()> {
        if let Some(id) = self.ids.get(name) {
            self.vcd.change_scalar(*id, value)?;
        }

        Ok(())
    }

    fn change_bus(&mut self, name: &str, values: Vec<TraceValue>) -> io::Result<()> {
        if let Some(id) = self.ids.get(name) {
            self.vcd.change_vector(*id, values)?;
        }

        Ok(())
    }

    #[inline]
    pub fn flush(&mut self) -> io::Result<()> {
        self.vcd.flush()
    }
}
