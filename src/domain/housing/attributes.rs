use crate::domain::errors::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HDB flat type. 1-room flats are not offered: the training set had too few
/// transactions for them to be predicted reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FlatType {
    #[default]
    TwoRoom,
    ThreeRoom,
    FourRoom,
    FiveRoom,
    Executive,
    MultiGeneration,
}

impl FlatType {
    pub const ALL: [FlatType; 6] = [
        FlatType::TwoRoom,
        FlatType::ThreeRoom,
        FlatType::FourRoom,
        FlatType::FiveRoom,
        FlatType::Executive,
        FlatType::MultiGeneration,
    ];

    /// Label as it appears in the resale dataset
    pub fn label(&self) -> &'static str {
        match self {
            FlatType::TwoRoom => "2 room",
            FlatType::ThreeRoom => "3 room",
            FlatType::FourRoom => "4 room",
            FlatType::FiveRoom => "5 room",
            FlatType::Executive => "executive",
            FlatType::MultiGeneration => "multi generation",
        }
    }

    /// Position in `ALL`, ordered from smallest to largest flat
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FlatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlatType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        FlatType::ALL
            .into_iter()
            .find(|t| t.label() == wanted)
            .ok_or(FeatureError::UnknownLabel {
                field: "flat_type",
                value: s.to_string(),
            })
    }
}

/// HDB town
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Town {
    #[default]
    AngMoKio,
    Bedok,
    Bishan,
    BukitBatok,
    BukitMerah,
    BukitPanjang,
    BukitTimah,
    CentralArea,
    ChoaChuKang,
    Clementi,
    Geylang,
    Hougang,
    JurongEast,
    JurongWest,
    KallangWhampoa,
    MarineParade,
    PasirRis,
    Punggol,
    Queenstown,
    Sengkang,
    Serangoon,
    Tampines,
    ToaPayoh,
    Woodlands,
    Yishun,
}

impl Town {
    pub const ALL: [Town; 25] = [
        Town::AngMoKio,
        Town::Bedok,
        Town::Bishan,
        Town::BukitBatok,
        Town::BukitMerah,
        Town::BukitPanjang,
        Town::BukitTimah,
        Town::CentralArea,
        Town::ChoaChuKang,
        Town::Clementi,
        Town::Geylang,
        Town::Hougang,
        Town::JurongEast,
        Town::JurongWest,
        Town::KallangWhampoa,
        Town::MarineParade,
        Town::PasirRis,
        Town::Punggol,
        Town::Queenstown,
        Town::Sengkang,
        Town::Serangoon,
        Town::Tampines,
        Town::ToaPayoh,
        Town::Woodlands,
        Town::Yishun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Town::AngMoKio => "ang mo kio",
            Town::Bedok => "bedok",
            Town::Bishan => "bishan",
            Town::BukitBatok => "bukit batok",
            Town::BukitMerah => "bukit merah",
            Town::BukitPanjang => "bukit panjang",
            Town::BukitTimah => "bukit timah",
            Town::CentralArea => "central area",
            Town::ChoaChuKang => "choa chu kang",
            Town::Clementi => "clementi",
            Town::Geylang => "geylang",
            Town::Hougang => "hougang",
            Town::JurongEast => "jurong east",
            Town::JurongWest => "jurong west",
            Town::KallangWhampoa => "kallang whampoa",
            Town::MarineParade => "marine parade",
            Town::PasirRis => "pasir ris",
            Town::Punggol => "punggol",
            Town::Queenstown => "queenstown",
            Town::Sengkang => "sengkang",
            Town::Serangoon => "serangoon",
            Town::Tampines => "tampines",
            Town::ToaPayoh => "toa payoh",
            Town::Woodlands => "woodlands",
            Town::Yishun => "yishun",
        }
    }

    /// Alphabetical position in `ALL`
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Town {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Town::ALL
            .into_iter()
            .find(|t| t.label() == wanted)
            .ok_or(FeatureError::UnknownLabel {
                field: "town",
                value: s.to_string(),
            })
    }
}

/// Three-storey band, from "01 TO 03" up to "49 TO 51".
///
/// Stored as the zero-based band index so every value is a valid band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StoreyRange(u8);

impl StoreyRange {
    pub const BAND_COUNT: usize = 17;
    const STOREYS_PER_BAND: u32 = 3;

    pub const ALL: [StoreyRange; Self::BAND_COUNT] = {
        let mut bands = [StoreyRange(0); Self::BAND_COUNT];
        let mut i = 0;
        while i < Self::BAND_COUNT {
            bands[i] = StoreyRange(i as u8);
            i += 1;
        }
        bands
    };

    pub fn lowest_storey(&self) -> u32 {
        self.0 as u32 * Self::STOREYS_PER_BAND + 1
    }

    pub fn highest_storey(&self) -> u32 {
        self.lowest_storey() + Self::STOREYS_PER_BAND - 1
    }

    /// Middle storey of the band, e.g. 5.0 for "04 TO 06"
    pub fn midpoint(&self) -> f64 {
        (self.lowest_storey() + self.highest_storey()) as f64 / 2.0
    }

    pub fn ordinal(&self) -> usize {
        self.0 as usize
    }

    pub fn label(&self) -> String {
        format!("{:02} TO {:02}", self.lowest_storey(), self.highest_storey())
    }
}

impl fmt::Display for StoreyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for StoreyRange {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s).to_uppercase();
        StoreyRange::ALL
            .into_iter()
            .find(|band| band.label() == wanted)
            .ok_or(FeatureError::UnknownLabel {
                field: "storey_range",
                value: s.to_string(),
            })
    }
}

// Serialized by label so JSON output matches the resale dataset
macro_rules! label_serde {
    ($ty:ty) => {
        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.label().to_string()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FeatureError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

label_serde!(FlatType);
label_serde!(Town);
label_serde!(StoreyRange);

/// Lowercases and collapses runs of whitespace so "  Ang  Mo Kio " matches "ang mo kio"
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_type_parsing_is_case_insensitive() {
        assert_eq!("4 Room".parse::<FlatType>(), Ok(FlatType::FourRoom));
        assert_eq!(
            "  MULTI   generation ".parse::<FlatType>(),
            Ok(FlatType::MultiGeneration)
        );
        assert!("1 room".parse::<FlatType>().is_err());
    }

    #[test]
    fn test_town_labels_round_trip() {
        for town in Town::ALL {
            assert_eq!(town.label().parse::<Town>(), Ok(town));
        }
        assert_eq!(Town::ALL.len(), 25);
        assert_eq!(Town::Bedok.ordinal(), 1);
    }

    #[test]
    fn test_unknown_town_names_field() {
        let err = "atlantis".parse::<Town>().unwrap_err();
        assert_eq!(
            err,
            FeatureError::UnknownLabel {
                field: "town",
                value: "atlantis".to_string()
            }
        );
    }

    #[test]
    fn test_storey_bands() {
        let first = StoreyRange::ALL[0];
        let last = StoreyRange::ALL[StoreyRange::BAND_COUNT - 1];

        assert_eq!(first.label(), "01 TO 03");
        assert_eq!(last.label(), "49 TO 51");
        assert_eq!(StoreyRange::ALL[1].midpoint(), 5.0);
        assert_eq!("04 to 06".parse::<StoreyRange>(), Ok(StoreyRange::ALL[1]));
        assert!("52 TO 54".parse::<StoreyRange>().is_err());
    }

    #[test]
    fn test_serializes_as_labels() {
        assert_eq!(serde_json::to_string(&FlatType::FourRoom).unwrap(), "\"4 room\"");
        assert_eq!(serde_json::to_string(&Town::AngMoKio).unwrap(), "\"ang mo kio\"");
        assert_eq!(
            serde_json::to_string(&StoreyRange::ALL[1]).unwrap(),
            "\"04 TO 06\""
        );
    }

    #[test]
    fn test_deserialization_goes_through_label_parsing() {
        assert_eq!(
            serde_json::from_str::<StoreyRange>("\"10 TO 12\"").unwrap(),
            StoreyRange::ALL[3]
        );
        assert_eq!(
            serde_json::from_str::<FlatType>("\"Executive\"").unwrap(),
            FlatType::Executive
        );
        assert!(serde_json::from_str::<StoreyRange>("200").is_err());
        assert!(serde_json::from_str::<StoreyRange>("\"601 TO 603\"").is_err());
        assert!(serde_json::from_str::<FlatType>("\"FourRoom\"").is_err());
        assert!(serde_json::from_str::<Town>("\"atlantis\"").is_err());
    }
}
