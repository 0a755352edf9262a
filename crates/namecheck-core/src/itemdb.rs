//! Field extraction for server-side item database records

use crate::error::LineError;
use std::ops::Range;

/// A field view into one server database line
///
/// The server database is comma-separated: field 0 is the item ID and field 2
/// is the English name. `name_span` is the byte range of the name field within
/// the source line, so callers can splice a replacement without touching any
/// other field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord<'a> {
    /// Item ID (field 0)
    pub id: u32,
    /// English name (field 2)
    pub name: &'a str,
    /// Byte range of the name field within the source line
    pub name_span: Range<usize>,
}

/// Extract the ID and English name fields from a server database line
///
/// The ID is the substring before the first comma; the name sits between the
/// second and third commas. No trimming is applied to either field.
pub fn parse_item_line(line: &str) -> Result<ItemRecord<'_>, LineError> {
    let first = line.find(',').ok_or(LineError::MissingDelimiter(','))?;

    let raw_id = &line[..first];
    let id: u32 = raw_id
        .parse()
        .map_err(|_| LineError::InvalidId(raw_id.to_string()))?;

    let second = line[first + 1..]
        .find(',')
        .map(|i| first + 1 + i)
        .ok_or(LineError::MissingDelimiter(','))?;

    let start = second + 1;
    let end = line[start..]
        .find(',')
        .map(|i| start + i)
        .ok_or(LineError::MissingDelimiter(','))?;

    Ok(ItemRecord {
        id,
        name: &line[start..end],
        name_span: start..end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_line() {
        let record = parse_item_line("501,Red_Potion,Red Potion,0,50,10").unwrap();
        assert_eq!(record.id, 501);
        assert_eq!(record.name, "Red Potion");
    }

    #[test]
    fn test_parse_item_line_name_span() {
        let line = "501,Red_Potion,Red Potion,0,50,10";
        let record = parse_item_line(line).unwrap();
        assert_eq!(&line[record.name_span], "Red Potion");
    }

    #[test]
    fn test_parse_item_line_bad_id() {
        assert_eq!(
            parse_item_line("abc,Foo,Bar"),
            Err(LineError::InvalidId("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_item_line_missing_commas() {
        assert_eq!(
            parse_item_line("501"),
            Err(LineError::MissingDelimiter(','))
        );
        assert_eq!(
            parse_item_line("501,Red_Potion"),
            Err(LineError::MissingDelimiter(','))
        );
        assert_eq!(
            parse_item_line("501,Red_Potion,Red Potion"),
            Err(LineError::MissingDelimiter(','))
        );
    }

    #[test]
    fn test_parse_item_line_no_field_trimming() {
        let record = parse_item_line("501, Red_Potion , Red Potion ,0").unwrap();
        assert_eq!(record.name, " Red Potion ");
    }

    #[test]
    fn test_parse_item_line_empty_name() {
        let record = parse_item_line("501,Red_Potion,,0").unwrap();
        assert_eq!(record.name, "");
    }
}
