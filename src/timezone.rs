//! 日期编码使用的时区。

use time::{Duration, OffsetDateTime, PrimitiveDateTime};

/// 日期编码时读取墙上时间所用的时区。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeZone {
    /// 使用日期自身携带的 offset。
    #[default]
    Local,
    Utc,
    /// 相对 UTC 的分钟偏移。
    Offset(i32),
}

impl TimeZone {
    /// 按字符串解析时区，永不失败：`local`、`Z`、`±HH`、`±HHMM`、`±HH:MM`，其余一律视为 UTC。
    pub fn parse(tz: &str) -> Self {
        match tz {
            "local" => Self::Local,
            "Z" => Self::Utc,
            _ => match parse_offset(tz) {
                Some(minutes) => Self::Offset(minutes),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(time_zone = tz, "unrecognized time zone, using UTC");
                    Self::Utc
                }
            },
        }
    }

    /// 把时刻换算为该时区下的墙上时间；结果超出可表示范围时返回 `None`。
    pub(crate) fn wall_clock(&self, dt: OffsetDateTime) -> Option<PrimitiveDateTime> {
        let shifted = match self {
            Self::Local => dt,
            Self::Utc => OffsetDateTime::from_unix_timestamp_nanos(dt.unix_timestamp_nanos()).ok()?,
            Self::Offset(minutes) => {
                OffsetDateTime::from_unix_timestamp_nanos(dt.unix_timestamp_nanos())
                    .ok()?
                    .checked_add(Duration::minutes(i64::from(*minutes)))?
            }
        };
        Some(PrimitiveDateTime::new(shifted.date(), shifted.time()))
    }
}

impl From<&str> for TimeZone {
    fn from(tz: &str) -> Self {
        Self::parse(tz)
    }
}

impl From<&String> for TimeZone {
    fn from(tz: &String) -> Self {
        Self::parse(tz)
    }
}

/// 解析 `±HH`、`±HHMM`、`±HH:MM`，返回分钟偏移；不认识的格式返回 `None`。
///
/// 前导空格等同于 `+`（URL 解码后的 `+` 会变成空格）。
pub fn parse_offset(tz: &str) -> Option<i32> {
    let bytes = tz.as_bytes();
    let sign = match bytes.first()? {
        b'+' | b' ' => 1,
        b'-' => -1,
        _ => return None,
    };

    let digits = |s: &[u8]| -> Option<i32> {
        if s.len() == 2 && s.iter().all(u8::is_ascii_digit) {
            Some(i32::from(s[0] - b'0') * 10 + i32::from(s[1] - b'0'))
        } else {
            None
        }
    };

    let rest = &bytes[1..];
    let (hours, minutes) = match rest.len() {
        2 => (digits(rest)?, 0),
        4 => (digits(&rest[..2])?, digits(&rest[2..])?),
        5 if rest[2] == b':' => (digits(&rest[..2])?, digits(&rest[3..])?),
        _ => return None,
    };

    Some(sign * (hours * 60 + minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[test]
    fn parse_offset_forms() {
        assert_eq!(parse_offset("+01"), Some(60));
        assert_eq!(parse_offset("+0200"), Some(120));
        assert_eq!(parse_offset("-05:00"), Some(-300));
        assert_eq!(parse_offset("+05:30"), Some(330));
        assert_eq!(parse_offset(" 08"), Some(480));
    }

    #[test]
    fn parse_offset_rejects_garbage() {
        for tz in ["", "+", "+1", "+123", "01", "+ab", "+01:0", "+01-00", "foo"] {
            assert_eq!(parse_offset(tz), None, "{tz}");
        }
    }

    #[test]
    fn parse_time_zone_is_total() {
        assert_eq!(TimeZone::parse("local"), TimeZone::Local);
        assert_eq!(TimeZone::parse("Z"), TimeZone::Utc);
        assert_eq!(TimeZone::parse("-05:00"), TimeZone::Offset(-300));
        assert_eq!(TimeZone::parse("foo"), TimeZone::Utc);
        assert_eq!(TimeZone::from("+01"), TimeZone::Offset(60));
    }

    #[test]
    fn wall_clock_shifts_instant() {
        let dt = datetime!(2012-05-07 11:42:03.002 +08:00);
        assert_eq!(
            TimeZone::Local.wall_clock(dt),
            Some(datetime!(2012-05-07 11:42:03.002))
        );
        assert_eq!(
            TimeZone::Utc.wall_clock(dt),
            Some(datetime!(2012-05-07 03:42:03.002))
        );
        assert_eq!(
            TimeZone::Offset(60).wall_clock(dt),
            Some(datetime!(2012-05-07 04:42:03.002))
        );
    }
}
