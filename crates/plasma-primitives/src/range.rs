//! Half-open ranges over the numeric key space

use serde::{Deserialize, Serialize};

use crate::sol::{from_sol_uint, to_sol_uint, SolUint, SolValue};
use crate::{DecodeError, U256};

/// Half-open interval `[start, end)` with `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr")]
pub struct Range {
    pub start: U256,
    pub end: U256,
}

#[derive(Deserialize)]
struct RangeRepr {
    start: U256,
    end: U256,
}

impl TryFrom<RangeRepr> for Range {
    type Error = DecodeError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        Range::new(repr.start, repr.end)
    }
}

impl Range {
    pub fn new(start: U256, end: U256) -> Result<Self, DecodeError> {
        if start >= end {
            return Err(DecodeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn len(&self) -> U256 {
        self.end - self.start
    }

    pub fn contains(&self, point: U256) -> bool {
        self.start <= point && point < self.end
    }

    pub fn intersects(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn is_subrange_of(&self, other: &Range) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// `abi.encode(uint256 start, uint256 end)`
    pub fn encode(&self) -> Vec<u8> {
        (to_sol_uint(self.start), to_sol_uint(self.end)).abi_encode_params()
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (start, end) = <(SolUint, SolUint)>::abi_decode_params(data, true)
            .map_err(|err| DecodeError::abi("range", err))?;
        Range::new(from_sol_uint(start), from_sol_uint(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u64, end: u64) -> Range {
        Range::new(U256::from(start), U256::from(end)).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_inverted() {
        assert!(Range::new(U256::from(5), U256::from(5)).is_err());
        assert!(Range::new(U256::from(6), U256::from(5)).is_err());
    }

    #[test]
    fn test_half_open_semantics() {
        let r = range(10, 25);
        assert!(r.contains(U256::from(10)));
        assert!(!r.contains(U256::from(25)));
        assert_eq!(r.len(), U256::from(15));
        assert!(!r.intersects(&range(25, 30)));
        assert!(r.intersects(&range(24, 30)));
        assert!(range(12, 20).is_subrange_of(&r));
        assert!(!range(12, 26).is_subrange_of(&r));
    }

    #[test]
    fn test_decode_rejects_inverted_range() {
        let data = (to_sol_uint(U256::from(9)), to_sol_uint(U256::from(3))).abi_encode_params();
        assert!(matches!(
            Range::decode(&data),
            Err(DecodeError::InvalidRange { .. })
        ));
        assert_eq!(Range::decode(&range(3, 9).encode()).unwrap(), range(3, 9));
    }

    #[test]
    fn test_json_validates_bounds() {
        let ok: Range = serde_json::from_str(r#"{"start":"0x0","end":"0xa"}"#).unwrap();
        assert_eq!(ok, range(0, 10));
        assert!(serde_json::from_str::<Range>(r#"{"start":"0xa","end":"0xa"}"#).is_err());
    }
}
