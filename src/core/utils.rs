//! Small shared helpers

/// Formats an ISO-8601 duration from the YouTube API (`PT1H2M3S`) as a
/// human-readable track length: `h:mm:ss` when hours are present,
/// `m:ss` otherwise.
///
/// Components may be missing (`PT4M`, `PT58S`, `PT2H`). Input that does not
/// parse as a `PT…` duration is returned verbatim so the keyboard still
/// renders something.
pub fn format_iso8601_duration(iso: &str) -> String {
    let Some(total) = parse_iso8601_seconds(iso) else {
        return iso.to_string();
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Parses `PT#H#M#S` into total seconds. Returns `None` for anything that
/// is not of that shape.
fn parse_iso8601_seconds(iso: &str) -> Option<u64> {
    let body = iso.strip_prefix("PT")?;
    if body.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let mut number = String::new();
    for c in body.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        let value: u64 = number.parse().ok()?;
        number.clear();
        match c {
            'H' => total += value * 3600,
            'M' => total += value * 60,
            'S' => total += value,
            _ => return None,
        }
    }
    // Trailing digits without a unit designator
    if !number.is_empty() {
        return None;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_iso8601_duration("PT3M45S"), "3:45");
        assert_eq!(format_iso8601_duration("PT58S"), "0:58");
        assert_eq!(format_iso8601_duration("PT4M"), "4:00");
    }

    #[test]
    fn formats_hours_with_padded_minutes() {
        assert_eq!(format_iso8601_duration("PT1H2M3S"), "1:02:03");
        assert_eq!(format_iso8601_duration("PT2H"), "2:00:00");
        assert_eq!(format_iso8601_duration("PT1H5S"), "1:00:05");
    }

    #[test]
    fn unparseable_input_is_returned_verbatim() {
        assert_eq!(format_iso8601_duration(""), "");
        assert_eq!(format_iso8601_duration("P1DT2H"), "P1DT2H");
        assert_eq!(format_iso8601_duration("PT"), "PT");
        assert_eq!(format_iso8601_duration("PT12"), "PT12");
        assert_eq!(format_iso8601_duration("garbage"), "garbage");
    }
}
