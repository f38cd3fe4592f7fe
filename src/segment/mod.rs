//! SMS segment arithmetic
//!
//! A message that fits one SMS gets the full payload (160 GSM-7 / 70 UCS-2
//! characters). Once it is split, every part carries a User Data Header for
//! reassembly, which shrinks the payload to 153 / 67 characters per part.

use crate::charset::is_gsm7;
use crate::domain::{Encoding, SegmentInfo};
use crate::utils::sms_length;

pub const GSM7_SINGLE: usize = 160;
pub const GSM7_CONCAT: usize = 153;
pub const UNICODE_SINGLE: usize = 70;
pub const UNICODE_CONCAT: usize = 67;

impl Encoding {
    /// Payload of a message sent as a single SMS.
    pub fn single_limit(self) -> usize {
        match self {
            Encoding::Gsm7 => GSM7_SINGLE,
            Encoding::Unicode => UNICODE_SINGLE,
        }
    }

    /// Payload of each part of a concatenated SMS.
    pub fn concat_limit(self) -> usize {
        match self {
            Encoding::Gsm7 => GSM7_CONCAT,
            Encoding::Unicode => UNICODE_CONCAT,
        }
    }
}

/// Classify `message` and compute its segment layout.
pub fn calculate(message: &str) -> SegmentInfo {
    let encoding = if is_gsm7(message) { Encoding::Gsm7 } else { Encoding::Unicode };
    let info = layout(encoding, sms_length(message));
    tracing::trace!(
        encoding = %info.encoding,
        segments = info.segments,
        chars_per_segment = info.chars_per_segment,
        total_chars = info.total_chars,
        "calculated segments"
    );
    info
}

/// Segment layout for `total_chars` units sent with `encoding`.
pub fn layout(encoding: Encoding, total_chars: usize) -> SegmentInfo {
    let single = encoding.single_limit();
    let (segments, chars_per_segment) = if total_chars <= single {
        (1, single)
    } else {
        let per = encoding.concat_limit();
        (total_chars.div_ceil(per), per)
    };

    SegmentInfo { encoding, segments, chars_per_segment, total_chars }
}
