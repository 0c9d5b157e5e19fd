/// Procurement category assigned to a tender record.
///
/// The variant order mirrors the rule evaluation order in
/// [`crate::categorizer`]; `Others` is the fallthrough when no keyword
/// group matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Consumable,
    Pharma,
    InjectionInfusion,
    Implants,
    Imaging,
    Device,
    Testing,
    Vaccine,
    Others,
}

/// All categories, in rule order with the fallthrough last.
pub const ALL_CATEGORIES: &[Category] = &[
    Category::Consumable,
    Category::Pharma,
    Category::InjectionInfusion,
    Category::Implants,
    Category::Imaging,
    Category::Device,
    Category::Testing,
    Category::Vaccine,
    Category::Others,
];

impl Category {
    /// Returns a human-readable name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Consumable => "Consumable",
            Self::Pharma => "Pharma",
            Self::InjectionInfusion => "Injection & Infusion",
            Self::Implants => "Implants",
            Self::Imaging => "Imaging",
            Self::Device => "Device",
            Self::Testing => "Testing",
            Self::Vaccine => "Vaccine",
            Self::Others => "Others",
        }
    }

    /// Parses a user-supplied category name, case-insensitively.
    ///
    /// Accepts the display name plus short aliases for the multi-word
    /// variants. Returns `None` for anything unrecognized so that a typo in
    /// a filter does not silently select the wrong category.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "consumable" | "consumables" => Some(Self::Consumable),
            "pharma" => Some(Self::Pharma),
            "injection & infusion" | "injection&infusion" | "injection" | "infusion" => {
                Some(Self::InjectionInfusion)
            }
            "implants" | "implant" => Some(Self::Implants),
            "imaging" => Some(Self::Imaging),
            "device" | "devices" => Some(Self::Device),
            "testing" => Some(Self::Testing),
            "vaccine" | "vaccines" => Some(Self::Vaccine),
            "others" | "other" => Some(Self::Others),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw tabular data extracted from the first `<table>` of a fetched page.
///
/// Rows are kept exactly as scraped (header and boilerplate rows included);
/// the cleaner decides what survives.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One cleaned tender award record.
///
/// All fields are plain text as scraped; `category` is derived from
/// `subject` by the ordered keyword rules and never stored upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderRecord {
    pub hospital: String,
    pub tender_reference: String,
    pub subject: String,
    pub tendering_procedure: String,
    pub contractors: String,
    pub item: String,
    pub contract_period: String,
    pub estimated_amount: String,
    pub date_of_award: String,
    pub category: Category,
}
