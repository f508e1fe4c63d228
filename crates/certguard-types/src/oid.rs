use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// ASN.1 object identifier held as normalized decimal arcs.
///
/// Arcs are unbounded (UUID OIDs under `2.25` carry 128-bit arcs) and stored without leading
/// zeros, so two OIDs are equal when their arcs are numerically equal: `1.3.6.01` == `1.3.6.1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid(Vec<Box<str>>);

/// `id-qt-cps`: the CPS pointer policy qualifier (RFC 5280 4.2.1.4).
pub const ID_QT_CPS: &[u64] = &[1, 3, 6, 1, 5, 5, 7, 2, 1];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OidParseError {
    #[error("object identifier is empty")]
    Empty,
    #[error("object identifier `{0}` needs at least two arcs")]
    TooShort(String),
    #[error("object identifier `{oid}` has an invalid arc `{arc}`")]
    InvalidArc { oid: String, arc: String },
    #[error("object identifier `{0}` must start with 0, 1 or 2")]
    InvalidRoot(String),
    #[error("object identifier `{0}` has a second arc above 39 under root 0 or 1")]
    InvalidSecondArc(String),
}

impl Oid {
    /// Build an OID from raw arcs. The caller is responsible for arc validity.
    pub fn from_arcs(arcs: &[u64]) -> Self {
        Self(arcs.iter().map(|a| a.to_string().into_boxed_str()).collect())
    }

    /// Arcs in decimal form, without leading zeros.
    pub fn arcs(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| &**a)
    }

    /// The CPS pointer qualifier OID.
    pub fn id_qt_cps() -> Self {
        Self::from_arcs(ID_QT_CPS)
    }
}

/// Strip leading zeros, keeping a lone `0`.
fn normalize_arc(arc: &str) -> &str {
    let trimmed = arc.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

/// Numeric order on normalized decimal strings: shorter is smaller, then digit by digit.
fn cmp_arc(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(&other.0) {
            match cmp_arc(a, b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Oid {
    type Err = OidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OidParseError::Empty);
        }

        let mut arcs: Vec<Box<str>> = Vec::new();
        for arc in s.split('.') {
            if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
                return Err(OidParseError::InvalidArc {
                    oid: s.to_string(),
                    arc: arc.to_string(),
                });
            }
            arcs.push(normalize_arc(arc).into());
        }

        if arcs.len() < 2 {
            return Err(OidParseError::TooShort(s.to_string()));
        }
        if !matches!(&*arcs[0], "0" | "1" | "2") {
            return Err(OidParseError::InvalidRoot(s.to_string()));
        }
        if &*arcs[0] != "2" && cmp_arc(&arcs[1], "39") == Ordering::Greater {
            return Err(OidParseError::InvalidSecondArc(s.to_string()));
        }

        Ok(Self(arcs))
    }
}

impl TryFrom<String> for Oid {
    type Error = OidParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Oid> for String {
    fn from(value: Oid) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}
