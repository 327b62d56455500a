use std::borrow::Cow;

use strum::{Display, EnumString};

use crate::iface::TRIM_CHANNELS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
}

/// The fixed pin contract of the block. Widths and directions are bit-exact
/// to the generated port list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    PuTrim(usize),
    WeakpuTrim(usize),
    WeakpdTrim(usize),
    TrimDin,
    CkoutaDrEn,
    CkoutOcvMonitor,
    AnaEn,
    LvcmosEnDin,
}

impl Port {
    /// Every pin of the block, in declaration order.
    pub fn all() -> impl Iterator<Item = Port> {
        (0..TRIM_CHANNELS)
            .flat_map(|lane| {
                [
                    Self::PuTrim(lane),
                    Self::WeakpuTrim(lane),
                    Self::WeakpdTrim(lane),
                ]
            })
            .chain([
                Self::TrimDin,
                Self::CkoutaDrEn,
                Self::CkoutOcvMonitor,
                Self::AnaEn,
                Self::LvcmosEnDin,
            ])
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::PuTrim(lane) => format!("pu_trim_{lane}").into(),
            Self::WeakpuTrim(lane) => format!("weakpu_trim_{lane}").into(),
            Self::WeakpdTrim(lane) => format!("weakpd_trim_{lane}").into(),
            Self::TrimDin => "trim_din".into(),
            Self::CkoutaDrEn => "ckouta_dr_en".into(),
            Self::CkoutOcvMonitor => "ckout_ocv_monitor".into(),
            Self::AnaEn => "ana_en".into(),
            Self::LvcmosEnDin => "lvcmos_en_din".into(),
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::TrimDin | Self::CkoutOcvMonitor | Self::LvcmosEnDin => {
                Direction::Input
            }
            _ => Direction::Output,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::TrimDin => 3,
            Self::CkoutaDrEn => 5,
            Self::LvcmosEnDin => 4,
            _ => 1,
        }
    }

    pub fn count_by_direction(dir: Direction) -> usize {
        Self::all().filter(|port| port.direction() == dir).count()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn pin_count() {
        assert_eq!(Port::all().count(), 14);
    }

    #[test]
    fn direction_counts() {
        assert_eq!(Port::count_by_direction(Direction::Input), 3);
        assert_eq!(Port::count_by_direction(Direction::Output), 11);
    }

    #[test]
    fn widths() {
        assert_eq!(Port::TrimDin.width(), 3);
        assert_eq!(Port::LvcmosEnDin.width(), 4);
        assert_eq!(Port::CkoutaDrEn.width(), 5);
        assert_eq!(Port::PuTrim(0).width(), 1);
    }

    #[test]
    fn names() {
        assert_eq!(Port::WeakpdTrim(2).name(), "weakpd_trim_2");
        assert_eq!(Port::AnaEn.name(), "ana_en");
    }

    #[test]
    fn direction_from_str() {
        assert_eq!(Direction::from_str("input").unwrap(), Direction::Input);
        assert_eq!(Direction::Output.to_string(), "output");
    }
}
