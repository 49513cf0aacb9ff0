use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::LutError;

/// The lookup tables this workspace knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    /// ctxIdxInc assignment by mode and frame/field status.
    CtxIdxInc,
    /// CABAC context initialization values (m, n) for all slice types.
    CabacInit,
    /// rangeTabLPS indexed by pStateIdx and qCodIRangeIdx.
    RangeTabLps,
    /// CAVLC coeff_token codewords.
    Cavlc,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::CtxIdxInc,
        TableKind::CabacInit,
        TableKind::RangeTabLps,
        TableKind::Cavlc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableKind::CtxIdxInc => "ctxidxinc",
            TableKind::CabacInit => "cabac-init",
            TableKind::RangeTabLps => "range-tab-lps",
            TableKind::Cavlc => "cavlc",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TableKind::CtxIdxInc => "ctxIdxInc assignment (switch/case)",
            TableKind::CabacInit => "CABAC context initialization (m, n) values",
            TableKind::RangeTabLps => "rangeTabLPS",
            TableKind::Cavlc => "CAVLC coeff_token bit patterns",
        }
    }

    /// Number of fields per entry, `None` when the row width varies.
    pub fn fields_per_entry(self) -> Option<usize> {
        match self {
            TableKind::CtxIdxInc => Some(3),
            TableKind::CabacInit => Some(8),
            TableKind::RangeTabLps => Some(4),
            TableKind::Cavlc => None,
        }
    }

    /// Size of the contiguous index domain that must be fully covered.
    pub fn domain_size(self) -> Option<usize> {
        match self {
            TableKind::CabacInit => Some(1024),
            _ => None,
        }
    }

    /// Historical input location, relative to the repository root.
    pub fn default_input(self) -> &'static str {
        match self {
            TableKind::CtxIdxInc => "scripts/gen/h264/cabac-lut/assign-ctxidxinc.txt",
            TableKind::CabacInit => "scripts/gen/h264/cabac-lut/cabac-lut.txt",
            TableKind::RangeTabLps => "scripts/gen/h264/cabac-lut/rangetablps.txt",
            TableKind::Cavlc => "scripts/gen/h264/cavlc-lut/cavlc-lut.txt",
        }
    }

    /// Historical output location, relative to the repository root.
    pub fn default_output(self) -> &'static str {
        match self {
            TableKind::CtxIdxInc => "scripts/gen/h264/cabac-lut/assign-ctxidxinc-output.txt",
            TableKind::CabacInit => "scripts/gen/h264/cabac-lut/cabac-output.txt",
            TableKind::RangeTabLps => "scripts/gen/h264/cabac-lut/rangetablps-output.txt",
            TableKind::Cavlc => "scripts/gen/h264/cavlc-lut/cavlc-output.txt",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown table: {value}"))
    }
}

/// Output flavour of the CAVLC table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CavlcMode {
    /// Codewords as binary literals.
    Lut,
    /// Bit width of every column.
    Sizes,
}

impl CavlcMode {
    /// Resolve the interactive selector: `1` is the LUT, `2` the sizes.
    pub fn from_choice(input: &str) -> Result<Self, LutError> {
        match input.trim() {
            "1" => Ok(CavlcMode::Lut),
            "2" => Ok(CavlcMode::Sizes),
            other => Err(LutError::InvalidChoice {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in TableKind::ALL {
            assert_eq!(kind.name().parse::<TableKind>(), Ok(kind));
        }
        assert!("cabac".parse::<TableKind>().is_err());
    }

    #[test]
    fn only_cabac_init_declares_a_domain() {
        assert_eq!(TableKind::CabacInit.domain_size(), Some(1024));
        assert_eq!(TableKind::CtxIdxInc.domain_size(), None);
        assert_eq!(TableKind::RangeTabLps.domain_size(), None);
        assert_eq!(TableKind::Cavlc.domain_size(), None);
    }

    #[test]
    fn cavlc_choice() {
        assert_eq!(CavlcMode::from_choice("1\n").unwrap(), CavlcMode::Lut);
        assert_eq!(CavlcMode::from_choice(" 2 ").unwrap(), CavlcMode::Sizes);
        let err = CavlcMode::from_choice("3").unwrap_err();
        assert!(matches!(err, LutError::InvalidChoice { input } if input == "3"));
    }
}
