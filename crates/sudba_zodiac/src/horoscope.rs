//! Daily horoscope sentence per sign.

use crate::sign::ZodiacSign;

/// Shown when a stored sign label does not name a sign.
pub const HOROSCOPE_UNAVAILABLE: &str = "Horoscope is temporarily unavailable for your sign.";

/// Horoscope sentence for a sign.
pub const fn horoscope(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => {
            "A great day for new beginnings! The energy of Mars fills you with strength and resolve."
        }
        ZodiacSign::Taurus => {
            "A day of stability and harmony. A good time for money matters and strengthening relationships."
        }
        ZodiacSign::Gemini => {
            "Conversation and new acquaintances bring luck. Be open to unexpected meetings."
        }
        ZodiacSign::Cancer => {
            "An emotional day. Listen to your intuition, it will point to the right decision."
        }
        ZodiacSign::Leo => "Your charisma is at its peak! Use it to push creative projects forward.",
        ZodiacSign::Virgo => {
            "Attention to detail brings success. An ideal day for planning and analysis."
        }
        ZodiacSign::Libra => "Harmony in relationships. Settle old conflicts and find compromises.",
        ZodiacSign::Scorpio => {
            "Deep transformations. The day suits letting go of what is old and unneeded."
        }
        ZodiacSign::Sagittarius => {
            "Travel and learning bring new opportunities. Broaden your horizons!"
        }
        ZodiacSign::Capricorn => {
            "Career growth and reaching goals. Your persistence will be rewarded."
        }
        ZodiacSign::Aquarius => {
            "Innovation and original ideas. Share your thoughts with the people around you."
        }
        ZodiacSign::Pisces => {
            "Creative inspiration and spiritual growth. An ideal time for meditation."
        }
    }
}

/// Horoscope for a stored sign label.
///
/// `None` when no label is stored (nothing to show); the unavailable
/// notice when the label is not a known sign.
pub fn horoscope_for_name(name: Option<&str>) -> Option<&'static str> {
    let name = name.map(str::trim).filter(|n| !n.is_empty())?;
    Some(ZodiacSign::from_name(name).map_or(HOROSCOPE_UNAVAILABLE, horoscope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ALL_SIGNS;

    #[test]
    fn every_sign_has_text() {
        for s in ALL_SIGNS {
            assert!(!horoscope(s).is_empty());
            assert_ne!(horoscope(s), HOROSCOPE_UNAVAILABLE);
        }
    }

    #[test]
    fn missing_label_shows_nothing() {
        assert_eq!(horoscope_for_name(None), None);
        assert_eq!(horoscope_for_name(Some("   ")), None);
    }

    #[test]
    fn unknown_label_shows_notice() {
        assert_eq!(horoscope_for_name(Some("Dragon")), Some(HOROSCOPE_UNAVAILABLE));
    }

    #[test]
    fn known_label() {
        assert_eq!(
            horoscope_for_name(Some("Virgo")),
            Some(horoscope(ZodiacSign::Virgo))
        );
    }
}
