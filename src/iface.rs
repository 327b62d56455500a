use crate::{
    bit::{Bit, L},
    error::Error,
    signal::Wire,
    unsigned::Unsigned,
};

pub const TRIM_CHANNELS: usize = 3;

/// One analog trim lane. All three bits are permanently tied to the disabled
/// value; the block has no path that drives them high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimChannel {
    pub pu_trim: Bit,
    pub weakpu_trim: Bit,
    pub weakpd_trim: Bit,
}

impl TrimChannel {
    const fn tied_off() -> Self {
        Self {
            pu_trim: L,
            weakpu_trim: L,
            weakpd_trim: L,
        }
    }
}

/// Software model of the port block. The three trim lanes are constant
/// tie-offs; `ckouta_dr_en` and `ana_en` have no defining write anywhere in
/// the block, so reading them always fails with the unassigned sentinel.
#[derive(Debug, Clone)]
pub struct TrimPortInterface {
    trim_din: Wire<Unsigned<3>>,
    ckout_ocv_monitor: Wire<Bit>,
    lvcmos_en_din: Wire<Unsigned<4>>,
    ckouta_dr_en: Wire<Unsigned<5>>,
    ana_en: Wire<Bit>,
}

impl TrimPortInterface {
    pub fn new() -> Self {
        Self {
            trim_din: Wire::unassigned("trim_din"),
            ckout_ocv_monitor: Wire::unassigned("ckout_ocv_monitor"),
            lvcmos_en_din: Wire::unassigned("lvcmos_en_din"),
            ckouta_dr_en: Wire::unassigned("ckouta_dr_en"),
            ana_en: Wire::unassigned("ana_en"),
        }
    }

    pub fn trim_outputs(&self, channel: usize) -> Result<TrimChannel, Error> {
        if channel >= TRIM_CHANNELS {
            return Err(Error::ChannelOutOfRange(channel));
        }

        Ok(TrimChannel::tied_off())
    }

    /// Accepts the trim control word. The block references it combinationally
    /// without assigning any target, so the value is stored for observability
    /// and no output changes.
    pub fn set_trim_control(&mut self, value: Unsigned<3>) {
        self.trim_din.drive(value);
    }

    pub fn trim_control(&self) -> Result<Unsigned<3>, Error> {
        self.trim_din.sample()
    }

    pub fn clock_output_enable_bus(&self) -> Result<Unsigned<5>, Error> {
        self.ckouta_dr_en.sample()
    }

    pub fn analog_enable(&self) -> Result<Bit, Error> {
        self.ana_en.sample()
    }

    pub fn set_monitor_input(&mut self, value: Bit) {
        self.ckout_ocv_monitor.drive(value);
    }

    pub fn monitor_input(&self) -> Result<Bit, Error> {
        self.ckout_ocv_monitor.sample()
    }

    pub fn set_lvcmos_enable(&mut self, value: Unsigned<4>) {
        self.lvcmos_en_din.drive(value);
    }

    pub fn lvcmos_enable(&self) -> Result<Unsigned<4>, Error> {
        self.lvcmos_en_din.sample()
    }
}

impl Default for TrimPortInterface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_tied_off() {
        let iface = TrimPortInterface::new();

        for channel in 0..TRIM_CHANNELS {
            let lane = iface.trim_outputs(channel).unwrap();
            assert_eq!(lane.pu_trim, L);
            assert_eq!(lane.weakpu_trim, L);
            assert_eq!(lane.weakpd_trim, L);
        }
    }

    #[test]
    fn channel_out_of_range() {
        let iface = TrimPortInterface::new();

        assert_eq!(iface.trim_outputs(3), Err(Error::ChannelOutOfRange(3)));
        assert_eq!(
            iface.trim_outputs(usize::MAX),
            Err(Error::ChannelOutOfRange(usize::MAX))
        );
    }

    #[test]
    fn undriven_outputs_stay_undriven() {
        let iface = TrimPortInterface::new();

        assert_eq!(
            iface.clock_output_enable_bus(),
            Err(Error::UnassignedSignal("ckouta_dr_en"))
        );
        assert_eq!(
            iface.analog_enable(),
            Err(Error::UnassignedSignal("ana_en"))
        );
    }
}
