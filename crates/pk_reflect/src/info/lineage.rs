use std::collections::VecDeque;

use pk_utils::TypeIdSet;

use crate::info::TypeInfo;

/// How an ancestor was reached from its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Supertype,
    Capability,
}

impl TypeInfo {
    /// Returns every ancestor of this type, nearest first.
    ///
    /// The walk is breadth-first. For each visited type its supertypes
    /// come before its capabilities, both in declaration order. A type
    /// reachable along several routes appears once, tagged with the
    /// relation of the first edge that reached it.
    pub fn lineage(&'static self) -> Vec<(Relation, &'static TypeInfo)> {
        let mut visited = TypeIdSet::new();
        visited.insert(self.id());

        let mut queue = VecDeque::from([self]);
        let mut lineage = Vec::new();

        while let Some(info) = queue.pop_front() {
            let parents = info
                .supertypes()
                .iter()
                .map(|parent| (Relation::Supertype, *parent))
                .chain(info.capabilities().iter().map(|cap| (Relation::Capability, *cap)));

            for (relation, parent) in parents {
                if visited.insert(parent.id()) {
                    lineage.push((relation, parent));
                    queue.push_back(parent);
                }
            }
        }

        lineage
    }

    /// Returns `true` if a value of this type may be used where `other`
    /// is expected.
    pub fn is_assignable_to(&'static self, other: &TypeInfo) -> bool {
        self == other || self.lineage().iter().any(|(_, ancestor)| *ancestor == other)
    }
}
