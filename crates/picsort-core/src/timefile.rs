use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// Stem layout: YYYYMMDD_HHMMSS, exactly 15 characters.
static STEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{8}_\d{6}$").unwrap());

/// A file whose name encodes its capture timestamp.
#[derive(Debug, Clone)]
pub struct Timefile {
    /// Where the file currently lives.
    pub path: PathBuf,
    /// Base name including extension, carried into the sorted tree unchanged.
    pub filename: String,
    /// Extension as written on disk (case preserved).
    pub extension: String,
    /// Timestamp decoded from the stem.
    pub date: NaiveDateTime,
}

impl Timefile {
    /// Decode a file name into a timestamp. Returns None for anything that is
    /// not a strict `YYYYMMDD_HHMMSS.<ext>` name with a real calendar date;
    /// out-of-range fields are rejected, never clamped.
    pub fn classify(path: &Path) -> Option<Timefile> {
        let filename = path.file_name()?.to_str()?;
        let stem = Path::new(filename).file_stem()?.to_str()?;
        let extension = Path::new(filename).extension()?.to_str()?;

        if !STEM_RE.is_match(stem) {
            return None;
        }

        // The regex guarantees an all-ASCII stem, slicing is safe.
        let year: i32 = stem[0..4].parse().ok()?;
        let month: u32 = stem[4..6].parse().ok()?;
        let day: u32 = stem[6..8].parse().ok()?;
        let hour: u32 = stem[9..11].parse().ok()?;
        let minute: u32 = stem[11..13].parse().ok()?;
        let second: u32 = stem[13..15].parse().ok()?;

        // from_ymd_opt covers month/day ranges and leap years.
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;

        Some(Timefile {
            path: path.to_path_buf(),
            filename: filename.to_string(),
            extension: extension.to_string(),
            date: NaiveDateTime::new(date, time),
        })
    }

    /// Sorted location: `<destination>/<year>/<MonthName year>/<filename>`.
    pub fn sorted_path(&self, destination: &Path) -> PathBuf {
        let year = self.date.format("%Y").to_string();
        let month_year = self.date.format("%B %Y").to_string();
        destination.join(year).join(month_year).join(&self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_classify_valid() {
        let t = Timefile::classify(Path::new("photos/20160113_072355.jpg")).unwrap();
        assert_eq!(t.date.year(), 2016);
        assert_eq!(t.date.month(), 1);
        assert_eq!(t.date.day(), 13);
        assert_eq!(t.date.hour(), 7);
        assert_eq!(t.date.minute(), 23);
        assert_eq!(t.date.second(), 55);
        assert_eq!(t.extension, "jpg");
        assert_eq!(t.filename, "20160113_072355.jpg");
    }

    #[test]
    fn test_classify_preserves_extension_case() {
        let t = Timefile::classify(Path::new("20160113_072355.JPG")).unwrap();
        assert_eq!(t.extension, "JPG");
    }

    #[test]
    fn test_classify_rejects_bad_shapes() {
        // 14-char stem
        assert!(Timefile::classify(Path::new("2016011_072355.jpg")).is_none());
        // wrong separator
        assert!(Timefile::classify(Path::new("2016-1-072355.jpg")).is_none());
        assert!(Timefile::classify(Path::new("20160113-072355.jpg")).is_none());
        // trailing garbage
        assert!(Timefile::classify(Path::new("20160113_0723551.jpg")).is_none());
        assert!(Timefile::classify(Path::new("vacation.jpg")).is_none());
        // no extension
        assert!(Timefile::classify(Path::new("20160113_072355")).is_none());
    }

    #[test]
    fn test_classify_rejects_bad_calendar_fields() {
        assert!(Timefile::classify(Path::new("20161305_072355.jpg")).is_none()); // month 13
        assert!(Timefile::classify(Path::new("20160230_072355.jpg")).is_none()); // Feb 30
        assert!(Timefile::classify(Path::new("20160431_072355.jpg")).is_none()); // Apr 31
        assert!(Timefile::classify(Path::new("20160113_242355.jpg")).is_none()); // hour 24
        assert!(Timefile::classify(Path::new("20160113_076055.jpg")).is_none()); // minute 60
        assert!(Timefile::classify(Path::new("20160113_072360.jpg")).is_none()); // second 60
        assert!(Timefile::classify(Path::new("20160100_072355.jpg")).is_none()); // day 0
    }

    #[test]
    fn test_classify_leap_years() {
        assert!(Timefile::classify(Path::new("20160229_000000.jpg")).is_some());
        assert!(Timefile::classify(Path::new("20150229_000000.jpg")).is_none());
        assert!(Timefile::classify(Path::new("20000229_000000.jpg")).is_some());
        assert!(Timefile::classify(Path::new("19000229_000000.jpg")).is_none());
    }

    #[test]
    fn test_sorted_path() {
        let t = Timefile::classify(Path::new("photos/20160202_175535.mp4")).unwrap();
        assert_eq!(
            t.sorted_path(Path::new("out")),
            Path::new("out/2016/February 2016/20160202_175535.mp4")
        );
    }
}
