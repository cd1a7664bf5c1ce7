use std::time::Duration;

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use pscan_common::network::port::ProbeResult;

pub const RESULT_COLUMNS: &str = "Port\tState\tService\tProtocol";

/// `port state service protocol`, tab separated.
pub fn result_row(result: &ProbeResult) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        result.port, result.state, result.service, result.protocol
    )
}

/// Unix `date` style, e.g. `Mon Jan  2 15:04:05 UTC 2006`.
///
/// The zone is whatever chrono names the offset: `UTC` for [`chrono::Utc`],
/// a numeric offset such as `+02:00` for [`chrono::Local`].
pub fn start_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%a %b %e %H:%M:%S %Z %Y").to_string()
}

pub fn elapsed(duration: Duration) -> String {
    format!("{duration:.3?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use pscan_common::network::protocol::Protocol;

    #[test]
    fn open_row_lists_port_state_service_protocol() {
        let row = result_row(&ProbeResult::open(22, Protocol::Tcp));
        assert_eq!(row, "22\topen\tssh\ttcp");
    }

    #[test]
    fn unlisted_open_port_shows_dash() {
        let row = result_row(&ProbeResult::open(9999, Protocol::Udp));
        assert_eq!(row, "9999\topen\t-\tudp");
    }

    #[test]
    fn start_time_in_utc_names_the_zone() {
        let at = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(start_time(&at), "Mon Jan  2 15:04:05 UTC 2006");
    }

    #[test]
    fn start_time_with_local_style_offset_prints_it_numerically() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2026, 10, 14, 9, 34, 12).unwrap();
        assert_eq!(start_time(&at), "Wed Oct 14 09:34:12 +02:00 2026");
    }

    #[test]
    fn elapsed_keeps_millisecond_precision() {
        assert_eq!(elapsed(Duration::from_millis(1500)), "1.500s");
    }
}
