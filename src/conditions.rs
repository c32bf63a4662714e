use std::fmt;
use std::fmt::Formatter;

/// Sky conditions understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    MostlyCloudy,
    Fair,
    FewClouds,
    PartlyCloudy,
    Overcast,
    Fog,
    Smoke,
    FreezingRain,
    IcePellets,
    RainIce,
    RainSnow,
    RainShowers,
    Thunderstorm,
    Snow,
    Windy,
    ShowersInVicinity,
    HeavyFreezingRain,
    ThunderstormInVicinity,
    LightRain,
    HeavyRain,
    FunnelCloud,
    Dust,
    Haze,
    Hot,
    Cold,
    Unknown,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Code used for conditions MeteoSwiss has no icon for. It never shows up in real data.
const UNMAPPED: i64 = 999;

/// MeteoSwiss icon codes to conditions, evaluated top to bottom with the first match winning.
/// Some codes are listed more than once (5, 17, 33) so the order must not change.
static CONDITION_TABLE: [(&[i64], Condition); 25] = [
    (&[5, 35], Condition::MostlyCloudy),
    (&[1], Condition::Fair),
    (&[2, 26, 27], Condition::FewClouds),
    (&[3], Condition::PartlyCloudy),
    (&[4, 5, 33], Condition::Overcast),
    (&[28], Condition::Fog),
    (&[UNMAPPED], Condition::Smoke),
    (&[UNMAPPED], Condition::FreezingRain),
    (&[UNMAPPED], Condition::IcePellets),
    (&[UNMAPPED], Condition::RainIce),
    (&[7, 10, 15, 18, 21, 31], Condition::RainSnow),
    (&[17], Condition::RainShowers),
    (&[23, 24, 25], Condition::Thunderstorm),
    (&[8, 11, 16, 19, 22, 30, 34], Condition::Snow),
    (&[UNMAPPED], Condition::Windy),
    (&[6, 29, 32, 33], Condition::ShowersInVicinity),
    (&[UNMAPPED], Condition::HeavyFreezingRain),
    (&[12, 13], Condition::ThunderstormInVicinity),
    (&[9, 14], Condition::LightRain),
    (&[17, 20], Condition::HeavyRain),
    (&[UNMAPPED], Condition::FunnelCloud),
    (&[UNMAPPED], Condition::Dust),
    (&[UNMAPPED], Condition::Haze),
    (&[UNMAPPED], Condition::Hot),
    (&[UNMAPPED], Condition::Cold),
];

/// Translates a MeteoSwiss day icon code to a condition.
/// A missing code or a code not present in the table gives Unknown.
///
/// # Arguments
///
/// * 'symbol' - the iconDay value from the forecast document
pub fn convert(symbol: Option<i64>) -> Condition {
    let Some(symbol) = symbol else {
        return Condition::Unknown;
    };

    CONDITION_TABLE
        .iter()
        .find(|(codes, _)| codes.contains(&symbol))
        .map_or(Condition::Unknown, |(_, condition)| *condition)
}
