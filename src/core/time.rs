use time::{format_description::well_known::Rfc3339, OffsetDateTime, UtcOffset};

/// Current UTC time without sub-second noise, as stored on submissions.
pub(crate) fn now_utc() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(0).unwrap_or(now)
}

pub(crate) fn format_utc(value: OffsetDateTime) -> String {
    let utc = value.to_offset(UtcOffset::UTC);
    utc.format(&Rfc3339).unwrap_or_else(|_| utc.to_string())
}

#[cfg(test)]
pub(crate) fn parse_rfc3339(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn format_utc_outputs_z_suffix() {
        let value = datetime!(2024-01-15 14:30:00 UTC);
        assert_eq!(format_utc(value), "2024-01-15T14:30:00Z");
    }

    #[test]
    fn format_utc_normalises_offset() {
        let parsed = parse_rfc3339("2024-01-16T14:20:00+03:00").unwrap();
        assert_eq!(format_utc(parsed), "2024-01-16T11:20:00Z");
    }

    #[test]
    fn now_utc_has_no_nanoseconds() {
        assert_eq!(now_utc().nanosecond(), 0);
    }
}
