//! Certificate classification facts: EV policy recognition.

use certguard_types::Oid;
use std::collections::BTreeSet;

/// CA/Browser Forum reserved EV policy OID plus long-standing CA-specific EV OIDs.
const BUILTIN_EV_POLICY_ARCS: &[&[u64]] = &[
    &[2, 23, 140, 1, 1],
    &[1, 3, 159, 1, 17, 1],
    &[1, 3, 6, 1, 4, 1, 34697, 2, 1],
    &[1, 3, 6, 1, 4, 1, 34697, 2, 2],
    &[1, 3, 6, 1, 4, 1, 34697, 2, 3],
    &[1, 3, 6, 1, 4, 1, 34697, 2, 4],
    &[2, 16, 578, 1, 26, 1, 3, 3],
    &[1, 3, 6, 1, 4, 1, 6449, 1, 2, 1, 5, 1],
    &[2, 16, 840, 1, 114412, 2, 1],
    &[2, 16, 840, 1, 114412, 1, 3, 0, 2],
    &[2, 16, 840, 1, 114028, 10, 1, 2],
    &[1, 3, 6, 1, 4, 1, 14370, 1, 6],
    &[1, 3, 6, 1, 4, 1, 4146, 1, 1],
    &[2, 16, 840, 1, 114413, 1, 7, 23, 3],
    &[2, 16, 840, 1, 114414, 1, 7, 23, 3],
    &[1, 3, 6, 1, 4, 1, 782, 1, 2, 1, 8, 1],
    &[1, 3, 6, 1, 4, 1, 8024, 0, 2, 100, 1, 2],
    &[2, 16, 840, 1, 114404, 1, 1, 2, 4, 1],
    &[2, 16, 756, 1, 89, 1, 2, 1, 1],
    &[1, 3, 6, 1, 4, 1, 7879, 13, 24, 1],
    &[2, 16, 840, 1, 113733, 1, 7, 23, 6],
    &[2, 16, 840, 1, 113733, 1, 7, 48, 1],
];

/// Set of policy OIDs that mark a certificate as Extended Validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvPolicyTable {
    oids: BTreeSet<Oid>,
}

impl Default for EvPolicyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EvPolicyTable {
    pub fn builtin() -> Self {
        Self {
            oids: BUILTIN_EV_POLICY_ARCS
                .iter()
                .map(|arcs| Oid::from_arcs(arcs))
                .collect(),
        }
    }

    /// Built-in table extended with operator-supplied EV OIDs.
    pub fn with_extra<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = Oid>,
    {
        let mut table = Self::builtin();
        table.oids.extend(extra);
        table
    }

    pub fn contains(&self, oid: &Oid) -> bool {
        self.oids.contains(oid)
    }

    /// True when any asserted policy is a recognized EV policy.
    pub fn is_ev(&self, policy_identifiers: &[Oid]) -> bool {
        policy_identifiers.iter().any(|oid| self.contains(oid))
    }

    pub fn len(&self) -> usize {
        self.oids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oids.is_empty()
    }
}
