/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Reader/writer for the "v2.0 raw" text ROM/RAM image format consumed by
//! the downstream logic simulator: a literal `v2.0 raw` header line
//! followed by one lowercase, unpadded hexadecimal value per line.

use crate::errors::RawImageError;
use std::io::Write;

const HEADER: &str = "v2.0 raw";

/// Writes `values` as a "v2.0 raw" image to `writer`, one lowercase hex
/// value per line with no padding and no `0x` prefix.
pub fn write_raw_image<W: Write>(writer: &mut W, values: &[u32]) -> Result<(), RawImageError> {
    writeln!(writer, "{HEADER}")?;
    for value in values {
        writeln!(writer, "{value:x}")?;
    }
    Ok(())
}

/// Parses a "v2.0 raw" image back into its data values, validating the
/// header is present.
pub fn read_raw_image(text: &str) -> Result<Vec<u32>, RawImageError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim() == HEADER => {}
        _ => return Err(RawImageError::MissingHeader),
    }

    let mut values = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = u32::from_str_radix(line, 16).map_err(|_| RawImageError::BadHexValue {
            line: index + 2,
            value: line.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values() {
        let mut buf = Vec::new();
        write_raw_image(&mut buf, &[0, 255, 0xabcd]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("v2.0 raw\n"));
        assert_eq!(read_raw_image(&text).unwrap(), vec![0, 255, 0xabcd]);
    }

    #[test]
    fn hex_values_are_lowercase_and_unpadded() {
        let mut buf = Vec::new();
        write_raw_image(&mut buf, &[0xFF]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "v2.0 raw\nff\n");
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(matches!(
            read_raw_image("0\nff\n"),
            Err(RawImageError::MissingHeader)
        ));
    }
}
