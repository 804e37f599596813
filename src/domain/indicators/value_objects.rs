use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - the three indicators the widget converts into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum IndicatorCode {
    #[strum(serialize = "uf")]
    Uf,

    #[strum(serialize = "dolar")]
    Dolar,

    #[strum(serialize = "euro")]
    Euro,
}

impl IndicatorCode {
    /// Selection order of the dropdown
    pub const ALLOWED: [IndicatorCode; 3] = [IndicatorCode::Uf, IndicatorCode::Dolar, IndicatorCode::Euro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uf => "uf",
            Self::Dolar => "dolar",
            Self::Euro => "euro",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Dolar => "$",
            Self::Euro => "€",
            Self::Uf => "UF",
        }
    }

    /// Parses a raw `<select>` value; `None` for empty or unknown codes.
    pub fn from_selection(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

/// Symbol for any raw code string. Unknown codes map to an empty symbol.
pub fn currency_symbol(raw: &str) -> &'static str {
    raw.parse::<IndicatorCode>().map(|code| code.symbol()).unwrap_or("")
}

/// Value Object - dropdown entry
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOption {
    pub value: IndicatorCode,
    pub label: String,
}
