//! XP display formatting.

/// Abbreviate an XP total for compact display.
///
/// Totals of a million or more render as `"{x.x}M"`, a thousand or more as
/// `"{x.x}K"`, everything else as the literal integer. Locale-aware
/// thousands separators are a presentation concern layered on top.
///
/// # Examples
///
/// ```
/// use projektl_domain::common::format_xp;
///
/// assert_eq!(format_xp(875), "875");
/// assert_eq!(format_xp(1_500), "1.5K");
/// assert_eq!(format_xp(2_300_000), "2.3M");
/// ```
pub fn format_xp(xp: i64) -> String {
    if xp >= 1_000_000 {
        format!("{:.1}M", xp as f64 / 1_000_000.0)
    } else if xp >= 1_000 {
        format!("{:.1}K", xp as f64 / 1_000.0)
    } else {
        xp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_totals_render_literally() {
        assert_eq!(format_xp(0), "0");
        assert_eq!(format_xp(42), "42");
        assert_eq!(format_xp(999), "999");
    }

    #[test]
    fn thousands_abbreviate() {
        assert_eq!(format_xp(1_000), "1.0K");
        assert_eq!(format_xp(1_500), "1.5K");
        assert_eq!(format_xp(10_400), "10.4K");
    }

    #[test]
    fn millions_abbreviate() {
        assert_eq!(format_xp(1_000_000), "1.0M");
        assert_eq!(format_xp(2_300_000), "2.3M");
    }

    #[test]
    fn negative_totals_render_literally() {
        // Penalties can momentarily show a negative delta in the feed
        assert_eq!(format_xp(-150), "-150");
    }
}
