//! Comma-separated pole and photo record parsing.
//!
//! Files are line-lenient but value-strict: blank lines and lines with too
//! few fields are skipped, while a single unparseable number fails the whole
//! file and no records are returned.

use csv::{Position, ReaderBuilder, Trim};

use crate::error::ParseError;
use crate::models::{PhotoRecord, PoleRecord};

/// Options controlling how a record file is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop the first non-blank line as a column header.
    pub has_header: bool,
}

/// A record type that can be built from positional text fields.
pub trait FieldRecord: Sized {
    /// Column names, in file order. Lines with fewer fields are skipped.
    const FIELDS: &'static [&'static str];

    fn from_fields(fields: &[&str], line: usize) -> Result<Self, ParseError>;
}

/// Records parsed from one file, plus the lines that were skipped as short.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<T> {
    pub records: Vec<T>,
    /// 1-based line numbers of lines with too few fields
    pub short_lines: Vec<usize>,
}

impl FieldRecord for PoleRecord {
    const FIELDS: &'static [&'static str] = &["id", "latitude", "longitude", "altitude"];

    fn from_fields(fields: &[&str], line: usize) -> Result<Self, ParseError> {
        Ok(Self {
            id: identifier(fields[0], line)?,
            latitude: number::<Self>(fields, 1, line)?,
            longitude: number::<Self>(fields, 2, line)?,
            altitude: number::<Self>(fields, 3, line)?,
        })
    }
}

impl FieldRecord for PhotoRecord {
    const FIELDS: &'static [&'static str] = &[
        "pole_id",
        "relative_latitude",
        "relative_longitude",
        "relative_altitude",
        "camera_tilt",
    ];

    fn from_fields(fields: &[&str], line: usize) -> Result<Self, ParseError> {
        Ok(Self {
            pole_id: identifier(fields[0], line)?,
            relative_latitude: number::<Self>(fields, 1, line)?,
            relative_longitude: number::<Self>(fields, 2, line)?,
            relative_altitude: number::<Self>(fields, 3, line)?,
            camera_tilt: number::<Self>(fields, 4, line)?,
        })
    }
}

/// Parse `id,latitude,longitude,altitude[,...]` lines.
pub fn parse_poles(text: &str, options: ParseOptions) -> Result<RecordSet<PoleRecord>, ParseError> {
    parse_records(text, options)
}

/// Parse `poleId,relLat,relLon,relAlt,cameraTilt[,...]` lines.
pub fn parse_photos(
    text: &str,
    options: ParseOptions,
) -> Result<RecordSet<PhotoRecord>, ParseError> {
    parse_records(text, options)
}

/// Parse every non-blank line of `text` into a record of type `T`.
pub fn parse_records<T: FieldRecord>(
    text: &str,
    options: ParseOptions,
) -> Result<RecordSet<T>, ParseError> {
    // Header skipping happens after blank-line filtering, so the reader
    // itself never consumes a header row.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(text.as_bytes());

    let line_starts = line_starts(text);
    let mut records = Vec::new();
    let mut short_lines = Vec::new();
    let mut header_pending = options.has_header;

    for result in reader.records() {
        let record = result.map_err(|err| ParseError::Read {
            line: line_at(text, &line_starts, err.position()),
            message: err.to_string(),
        })?;
        let line = line_at(text, &line_starts, record.position());

        if record.len() <= 1 && record.iter().all(str::is_empty) {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        if fields.len() < T::FIELDS.len() {
            short_lines.push(line);
            continue;
        }
        records.push(T::from_fields(&fields, line)?);
    }

    Ok(RecordSet {
        records,
        short_lines,
    })
}

/// Byte offsets at which each line of `text` starts.
fn line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

/// 1-based line of the first non-blank byte at or after `pos`.
///
/// The reader reports a record's position before any empty lines it skipped.
fn line_at(text: &str, line_starts: &[usize], pos: Option<&Position>) -> usize {
    let start = pos.map_or(0, |p| p.byte() as usize);
    let rest = text.get(start..).unwrap_or("");
    let offset = start + rest.find(|c: char| !c.is_whitespace()).unwrap_or(0);
    line_starts.partition_point(|&s| s <= offset)
}

fn identifier(field: &str, line: usize) -> Result<String, ParseError> {
    if field.is_empty() {
        return Err(ParseError::EmptyIdentifier { line });
    }
    Ok(field.to_string())
}

/// Parse a finite decimal number; `NaN` and infinities are rejected.
fn number<T: FieldRecord>(fields: &[&str], col: usize, line: usize) -> Result<f64, ParseError> {
    let value = fields[col];
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::MalformedNumericField {
            line,
            field: T::FIELDS[col],
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_pole() {
        let set = parse_poles("P1,10.0,20.0,5.0", ParseOptions::default()).unwrap();
        assert_eq!(
            set.records,
            vec![PoleRecord {
                id: "P1".to_string(),
                latitude: 10.0,
                longitude: 20.0,
                altitude: 5.0,
            }]
        );
        assert!(set.short_lines.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed_and_extra_fields_ignored() {
        let text = "  P1 ,  10.5 ,\t-20.25 , 5 , extra, more\r\n";
        let set = parse_poles(text, ParseOptions::default()).unwrap();
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.records[0].id, "P1");
        assert_eq!(set.records[0].longitude, -20.25);
    }

    #[test]
    fn test_blank_lines_skipped_silently() {
        let text = "\n   \nP1,1,2,3\n\t\n\nP2,4,5,6\n";
        let set = parse_poles(text, ParseOptions::default()).unwrap();
        let ids: Vec<_> = set.records.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2"]);
        assert!(set.short_lines.is_empty());
    }

    #[test]
    fn test_short_line_skipped_without_aborting() {
        let text = "P1,1,2,3\nbad,line\nP2,4,5,6";
        let set = parse_poles(text, ParseOptions::default()).unwrap();
        assert_eq!(set.records.len(), 2);
        assert_eq!(set.short_lines, vec![2]);
    }

    #[test]
    fn test_malformed_number_fails_whole_file() {
        let text = "P1,1,2,3\nP4,notanumber,20.0,5.0\nP2,4,5,6";
        let err = parse_poles(text, ParseOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedNumericField {
                line: 2,
                field: "latitude",
                value: "notanumber".to_string(),
            }
        );
    }

    #[test]
    fn test_photo_needs_five_fields() {
        let text = "P1,0.001,0.002,1.0\nP1,0.001,0.002,1.0,-10";
        let set = parse_photos(text, ParseOptions::default()).unwrap();
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.records[0].camera_tilt, -10.0);
        assert_eq!(set.short_lines, vec![1]);
    }

    #[test]
    fn test_photo_tilt_error_names_field() {
        let err = parse_photos("P1,0,0,0,down", ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedNumericField { field: "camera_tilt", .. }
        ));
    }

    #[test]
    fn test_header_row_fails_unless_declared() {
        let text = "id,lat,lon,alt\nP1,1,2,3\n";
        assert!(parse_poles(text, ParseOptions::default()).is_err());

        let set = parse_poles(text, ParseOptions { has_header: true }).unwrap();
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.records[0].id, "P1");
    }

    #[test]
    fn test_header_skip_ignores_leading_blank_lines() {
        let text = "\n\nid,lat,lon,alt\nP1,1,2,3";
        let set = parse_poles(text, ParseOptions { has_header: true }).unwrap();
        assert_eq!(set.records.len(), 1);
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let err = parse_poles("P1,1,2,3\n ,1,2,3", ParseOptions::default()).unwrap_err();
        assert_eq!(err, ParseError::EmptyIdentifier { line: 2 });
    }

    #[test]
    fn test_whitespace_only_lines_are_not_short() {
        let text = "P1,1,2,3\n   \n\t\r\nP2,4,5,6\n  \n";
        let set = parse_poles(text, ParseOptions::default()).unwrap();
        assert_eq!(set.records.len(), 2);
        assert!(set.short_lines.is_empty());
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let text = "\nP1,1,2,3\n\nshort\nP2,x,5,6";
        let set = parse_poles("\nP1,1,2,3\n\nshort", ParseOptions::default()).unwrap();
        assert_eq!(set.short_lines, vec![4]);

        let err = parse_poles(text, ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedNumericField { line: 5, .. }));
    }

    #[test]
    fn test_quotes_are_taken_literally() {
        let set = parse_poles("\"P1\",1,2,3", ParseOptions::default()).unwrap();
        assert_eq!(set.records[0].id, "\"P1\"");
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for text in ["P1,NaN,20.0,5.0", "P1,10.0,inf,5.0", "P1,10.0,20.0,-infinity"] {
            let err = parse_poles(text, ParseOptions::default()).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedNumericField { line: 1, .. }),
                "{text} should be rejected"
            );
        }

        let err = parse_photos("P1,0,0,0,NaN", ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedNumericField { field: "camera_tilt", .. }
        ));
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let set = parse_photos("", ParseOptions::default()).unwrap();
        assert!(set.records.is_empty());
    }
}
