/// Decimal size units, each a power of 1000 of the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    Bytes,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

impl SizeUnit {
    /// Smallest to largest.
    pub const ALL: [SizeUnit; 7] = [
        SizeUnit::Bytes,
        SizeUnit::Kilo,
        SizeUnit::Mega,
        SizeUnit::Giga,
        SizeUnit::Tera,
        SizeUnit::Peta,
        SizeUnit::Exa,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Bytes => "B",
            SizeUnit::Kilo => "kB",
            SizeUnit::Mega => "MB",
            SizeUnit::Giga => "GB",
            SizeUnit::Tera => "TB",
            SizeUnit::Peta => "PB",
            SizeUnit::Exa => "EB",
        }
    }

    /// Number of bytes in one of this unit (`1000^i`).
    pub fn multiplier(self) -> u64 {
        match self {
            SizeUnit::Bytes => 1,
            SizeUnit::Kilo => 1_000,
            SizeUnit::Mega => 1_000_000,
            SizeUnit::Giga => 1_000_000_000,
            SizeUnit::Tera => 1_000_000_000_000,
            SizeUnit::Peta => 1_000_000_000_000_000,
            SizeUnit::Exa => 1_000_000_000_000_000_000,
        }
    }

    /// Case-sensitive lookup. The kilo prefix is the only one accepted in
    /// either case ("kB" and "KB").
    pub fn from_suffix(suffix: &str) -> Option<SizeUnit> {
        match suffix {
            "KB" => Some(SizeUnit::Kilo),
            _ => SizeUnit::ALL.into_iter().find(|unit| unit.suffix() == suffix),
        }
    }

    /// Largest unit that fits at least once into `bytes`.
    pub fn for_bytes(bytes: u64) -> SizeUnit {
        SizeUnit::ALL
            .into_iter()
            .rev()
            .find(|unit| bytes >= unit.multiplier())
            .unwrap_or(SizeUnit::Bytes)
    }
}
