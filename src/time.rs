use hifitime::Epoch;

use crate::constants::{JDTOMJD, JD};

/// Expand a truncated barycentric Julian date (t − bjd0) to a full Julian date.
///
/// Argument
/// --------
/// * `t`: truncated epoch, in days past `bjd0`
/// * `bjd0`: zero point of the dataset's day scale
///
/// Return
/// ------
/// * the full Julian date
pub fn truncated_to_jd(t: JD, bjd0: f64) -> JD {
    t + bjd0
}

/// Truncate a full Julian date to the dataset's day scale (t − bjd0).
pub fn jd_to_truncated(jd: JD, bjd0: f64) -> JD {
    jd - bjd0
}

/// Transformation from julian date (JD) to modified julian date (MJD).
pub fn jd_to_mjd(jd: JD) -> JD {
    jd - JDTOMJD
}

/// Transformation from modified julian date (MJD) to julian date (JD).
pub fn mjd_to_jd(mjd: JD) -> JD {
    mjd + JDTOMJD
}

/// Calendar (UTC) rendering of a full Julian date, for setup summaries.
pub fn jd_to_calendar(jd: JD) -> String {
    Epoch::from_jde_utc(jd).to_string()
}

#[cfg(test)]
mod test_time {
    use super::*;
    use crate::constants::BJD0_CONVENTION;

    #[test]
    fn test_jd_mjd_offset() {
        assert_eq!(jd_to_mjd(2450000.5), 50000.0);
        assert_eq!(mjd_to_jd(50000.0), 2450000.5);
    }

    #[test]
    fn test_truncated_scale_roundtrip() {
        let jd = truncated_to_jd(5848.0, BJD0_CONVENTION);
        assert_eq!(jd, 2455848.0);
        assert_eq!(jd_to_truncated(jd, BJD0_CONVENTION), 5848.0);
    }

    #[test]
    fn test_calendar_rendering() {
        // JD 2451545.0 is the J2000 epoch
        assert!(jd_to_calendar(2451545.0).starts_with("2000-01-01"));
    }
}
