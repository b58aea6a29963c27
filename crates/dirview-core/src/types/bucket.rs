//! LDAP server buckets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::SettingEntry;

/// One LDAP server profile: the shared/default settings or one of the five
/// numbered servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BucketId {
    Default,
    Ldap1,
    Ldap2,
    Ldap3,
    Ldap4,
    Ldap5,
}

impl BucketId {
    pub const ALL: [BucketId; 6] = [
        BucketId::Default,
        BucketId::Ldap1,
        BucketId::Ldap2,
        BucketId::Ldap3,
        BucketId::Ldap4,
        BucketId::Ldap5,
    ];

    pub const NUMBERED: [BucketId; 5] = [
        BucketId::Ldap1,
        BucketId::Ldap2,
        BucketId::Ldap3,
        BucketId::Ldap4,
        BucketId::Ldap5,
    ];

    pub fn number(&self) -> Option<u8> {
        match self {
            Self::Default => None,
            Self::Ldap1 => Some(1),
            Self::Ldap2 => Some(2),
            Self::Ldap3 => Some(3),
            Self::Ldap4 => Some(4),
            Self::Ldap5 => Some(5),
        }
    }

    /// Reserved key prefix of a numbered server (`AUTH_LDAP_<n>_`).
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Ldap1 => Some("AUTH_LDAP_1_"),
            Self::Ldap2 => Some("AUTH_LDAP_2_"),
            Self::Ldap3 => Some("AUTH_LDAP_3_"),
            Self::Ldap4 => Some("AUTH_LDAP_4_"),
            Self::Ldap5 => Some("AUTH_LDAP_5_"),
        }
    }

    /// Route segment: `default`, `1` .. `5`.
    pub fn as_route(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ldap1 => "1",
            Self::Ldap2 => "2",
            Self::Ldap3 => "3",
            Self::Ldap4 => "4",
            Self::Ldap5 => "5",
        }
    }

    pub fn from_route(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_route() == segment)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Ldap1 => "LDAP1",
            Self::Ldap2 => "LDAP2",
            Self::Ldap3 => "LDAP3",
            Self::Ldap4 => "LDAP4",
            Self::Ldap5 => "LDAP5",
        }
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_route())
    }
}

impl FromStr for BucketId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_route(s).ok_or_else(|| crate::Error::InvalidCategory(s.to_string()))
    }
}

/// Bucket a setting key belongs to.
///
/// The first numbered server whose prefix occurs in the key wins; keys with
/// no reserved prefix are shared settings.
pub fn classify(key: &str) -> BucketId {
    BucketId::NUMBERED
        .into_iter()
        .find(|b| b.prefix().is_some_and(|p| key.contains(p)))
        .unwrap_or(BucketId::Default)
}

/// Ordered settings of one bucket
pub type Bucket = Vec<SettingEntry>;

/// Settings grouped per bucket. A missing bucket means "not loaded yet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    buckets: BTreeMap<BucketId, Bucket>,
}

impl LoadResult {
    /// Result with every bucket still unloaded.
    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: BucketId, bucket: Bucket) {
        self.buckets.insert(id, bucket);
    }

    pub fn get(&self, id: BucketId) -> Option<&[SettingEntry]> {
        self.buckets.get(&id).map(Vec::as_slice)
    }

    /// True once all six buckets hold data.
    pub fn is_complete(&self) -> bool {
        BucketId::ALL.iter().all(|b| self.buckets.contains_key(b))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (BucketId, &[SettingEntry])> {
        self.buckets.iter().map(|(id, b)| (*id, b.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trip() {
        for bucket in BucketId::ALL {
            assert_eq!(BucketId::from_route(bucket.as_route()), Some(bucket));
        }
        assert_eq!(BucketId::from_route("6"), None);
        assert_eq!(BucketId::from_route("Default"), None);
        assert_eq!(BucketId::from_route(""), None);
    }

    #[test]
    fn test_from_str_reports_category() {
        let err = "ldap7".parse::<BucketId>().unwrap_err();
        assert_eq!(err, crate::Error::InvalidCategory("ldap7".into()));
        assert_eq!("3".parse::<BucketId>().unwrap(), BucketId::Ldap3);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("AUTH_LDAP_SERVER_URI"), BucketId::Default);
        assert_eq!(classify("AUTH_LDAP_1_SERVER_URI"), BucketId::Ldap1);
        assert_eq!(classify("AUTH_LDAP_5_CONNECTION_OPTIONS"), BucketId::Ldap5);
        // Prefix match is a substring match, not an anchored one.
        assert_eq!(classify("X_AUTH_LDAP_2_BIND_DN"), BucketId::Ldap2);
        assert_eq!(classify("AUTH_LDAP_10_SERVER_URI"), BucketId::Default);
        assert_eq!(classify("AUTH_LDAP_6_SERVER_URI"), BucketId::Default);
    }

    #[test]
    fn test_labels() {
        assert_eq!(BucketId::Default.label(), "Default");
        assert_eq!(BucketId::Ldap4.label(), "LDAP4");
        assert_eq!(BucketId::Ldap4.number(), Some(4));
        assert_eq!(BucketId::Default.prefix(), None);
    }

    #[test]
    fn test_unloaded_result() {
        let mut result = LoadResult::unloaded();
        assert!(!result.is_complete());
        assert!(result.get(BucketId::Default).is_none());

        for bucket in BucketId::ALL {
            result.insert(bucket, Vec::new());
        }
        assert!(result.is_complete());
        assert!(result.is_empty());
        assert_eq!(result.get(BucketId::Ldap2), Some(&[][..]));
    }
}
