use serde::{Deserialize, Serialize};

/// Gear labels the rental forms offer; stored verbatim by the backend.
pub const ITEM_OPTIONS: [&str; 12] = [
    "Wakeboard",
    "Bindings",
    "Helmet",
    "GoPro Mount",
    "Wetsuit",
    "Rash Guard",
    "Water Ski",
    "Paddleboard",
    "Paddle",
    "Goggles",
    "Life Jacket",
    "Life Vest",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wakeboard,
    Ski,
    Paddle,
    Kayak,
    Sup,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wakeboard => "wakeboard",
            Category::Ski => "ski",
            Category::Paddle => "paddle",
            Category::Kayak => "kayak",
            Category::Sup => "sup",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Wakeboard => "Wakeboarding",
            Category::Ski => "Water Skiing",
            Category::Paddle => "Paddleboarding",
            Category::Kayak => "Kayaking",
            Category::Sup => "Stand-Up Paddle (SUP)",
            Category::Other => "Other Gear",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPackage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub items_included: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipmentPackage {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub items_included: Vec<String>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
