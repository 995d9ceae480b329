//! # Process Version Packing
//!
//! Process versions are stored on the server as a single integer with the
//! three dotted segments packed into fixed-width bit fields. The major
//! segment gets 8 bits, the minor 10 and the patch 14, filling a `u32`.

use crate::error::SdkError;

/// Bit widths of the version segments, major first.
const VERSION_NUMBER_BITS: [u32; 3] = [8, 10, 14];

/// Pack a dot-separated version string into its integer form.
///
/// Missing trailing segments default to zero, so `"12.6"` packs the same as
/// `"12.6.0"`.
pub fn version_string_to_int(version: &str) -> Result<u32, SdkError> {
    let segments = version
        .split('.')
        .map(|segment| {
            segment
                .parse::<u32>()
                .map_err(|_| SdkError::Validation(format!("Invalid version segment `{segment}`.")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if segments.len() > VERSION_NUMBER_BITS.len() {
        return Err(SdkError::NotImplemented(
            "versions with more than 2 decimal places",
        ));
    }

    let mut packed = 0u32;
    let mut total_bits = 0;
    for (index, &bits) in VERSION_NUMBER_BITS.iter().enumerate().rev() {
        let segment = segments.get(index).copied().unwrap_or(0);
        if segment >= 1 << bits {
            return Err(SdkError::Validation(format!(
                "Number {segment} cannot be stored with only {bits} bits. Max is {}.",
                (1u32 << bits) - 1
            )));
        }
        packed += segment << total_bits;
        total_bits += bits;
    }

    Ok(packed)
}

/// Unpack an integer version into its dot-separated string form.
pub fn version_int_to_string(mut number: u32) -> String {
    let mut segments = Vec::with_capacity(VERSION_NUMBER_BITS.len());
    let mut total_bits: u32 = VERSION_NUMBER_BITS.iter().sum();
    for &bits in &VERSION_NUMBER_BITS {
        let shift = total_bits - bits;
        let segment = number >> shift;
        segments.push(segment.to_string());
        number -= segment << shift;
        total_bits -= bits;
    }
    segments.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;

    #[test]
    fn packs_known_versions() {
        assert_eq!(version_string_to_int("1.2.3").unwrap(), 16_809_987);
        assert_eq!(version_string_to_int("12.6").unwrap(), 201_424_896);
    }

    #[test]
    fn unpacks_known_versions() {
        assert_eq!(version_int_to_string(16_809_987), "1.2.3");
        assert_eq!(version_int_to_string(201_424_896), "12.6.0");
    }

    #[test]
    fn rejects_too_many_segments() {
        let err = version_string_to_int("1.2.3.4").unwrap_err();
        assert!(matches!(err, SdkError::NotImplemented(_)));
    }

    #[test]
    fn rejects_segment_overflow() {
        // 1000 does not fit in the 8-bit major segment.
        let err = version_string_to_int("1000.2.3").unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
        assert!(err.to_string().contains("8 bits"));
    }

    #[test]
    fn round_trips() {
        for version in ["0.0.0", "255.1023.16383", "3.14.159"] {
            let packed = version_string_to_int(version).unwrap();
            assert_eq!(version_int_to_string(packed), version);
        }
    }
}
