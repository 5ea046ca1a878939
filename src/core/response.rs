//! Host response types
//!
//! Responses mirror portal conventions: a numeric status code followed by
//! the payload, so hosts can branch on the code without parsing the region.

use serde::Serialize;

use crate::domain::PhysicalRegion;

/// Response status codes
pub const RESPONSE_SUCCESS: u32 = 0;
pub const RESPONSE_CANCELLED: u32 = 1;

/// Terminal answer of a capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureResponse {
    Success(PhysicalRegion),
    Cancelled,
}

impl Serialize for CaptureResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(region) => (RESPONSE_SUCCESS, region).serialize(serializer),
            Self::Cancelled => (RESPONSE_CANCELLED, ()).serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_with_code() {
        let json = serde_json::to_string(&CaptureResponse::Success(PhysicalRegion::new(
            -5, 10, 300, 200,
        )))
        .unwrap();
        assert_eq!(json, r#"[0,{"x":-5,"y":10,"width":300,"height":200}]"#);
    }

    #[test]
    fn test_cancelled_serializes_with_code() {
        let json = serde_json::to_string(&CaptureResponse::Cancelled).unwrap();
        assert_eq!(json, "[1,null]");
    }
}
