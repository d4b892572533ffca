//! Garment catalog and measurement templates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Garment types the shop takes orders for.
///
/// Items store their garment as free text (`Item::cloth_type`); this enum is
/// the recognised catalog. Text that does not parse is an unmapped garment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GarmentType {
    Kurti,
    Pant,
    Blouse,
    Salwar,
    Chudi,
    Jacket,
    Saree,
    Other,
}

/// Stitching family a garment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarmentCategory {
    Blouse,
    Dress,
    /// Goes straight to finishing, never cut or stitched
    Saree,
}

impl GarmentType {
    pub const ALL: [GarmentType; 8] = [
        GarmentType::Kurti,
        GarmentType::Pant,
        GarmentType::Blouse,
        GarmentType::Salwar,
        GarmentType::Chudi,
        GarmentType::Jacket,
        GarmentType::Saree,
        GarmentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::Kurti => "Kurti",
            GarmentType::Pant => "Pant",
            GarmentType::Blouse => "Blouse",
            GarmentType::Salwar => "Salwar",
            GarmentType::Chudi => "Chudi",
            GarmentType::Jacket => "Jacket",
            GarmentType::Saree => "Saree",
            GarmentType::Other => "Other",
        }
    }

    pub fn category(&self) -> GarmentCategory {
        match self {
            GarmentType::Blouse => GarmentCategory::Blouse,
            GarmentType::Saree => GarmentCategory::Saree,
            GarmentType::Kurti
            | GarmentType::Pant
            | GarmentType::Salwar
            | GarmentType::Chudi
            | GarmentType::Jacket
            | GarmentType::Other => GarmentCategory::Dress,
        }
    }

    /// Measurement fields taken at intake for this garment.
    pub fn measurement_fields(&self) -> &'static [&'static str] {
        match self {
            GarmentType::Kurti => &[
                "Length",
                "Shoulder",
                "Sleeve",
                "Chest",
                "Waist",
                "Hips",
                "Front Neck",
                "Back Neck",
            ],
            GarmentType::Pant | GarmentType::Chudi => {
                &["Length", "Waist", "Hips", "Thigh", "Knee", "Bottom"]
            }
            GarmentType::Blouse => &[
                "Length",
                "Shoulder",
                "Sleeve",
                "Chest",
                "Waist",
                "Front Neck",
                "Back Neck",
            ],
            GarmentType::Salwar => &["Length", "Bottom"],
            GarmentType::Jacket => &["Length", "Shoulder", "Chest", "Waist", "Hips"],
            GarmentType::Other => &["Custom Measurements"],
            GarmentType::Saree => &[],
        }
    }

    /// Parses a stored garment name, `None` when it is not in the catalog.
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl FromStr for GarmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GarmentType::ALL
            .into_iter()
            .find(|garment| garment.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown garment type: {s}"))
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
