use crate::types::{MemberRecord, MemberStatus, MemberType, Metadata};

/// Active/inactive split for one member type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSplit {
    pub active: usize,
    pub inactive: usize,
}

impl StatusSplit {
    pub fn total(&self) -> usize {
        self.active + self.inactive
    }
}

/// Counts over the member list. Members of `Unknown` type are counted in
/// `total` and in their status but in no type bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub companies: StatusSplit,
    pub individual_entrepreneurs: StatusSplit,
    pub private_persons: StatusSplit,
}

impl Statistics {
    pub fn from_members(members: &[MemberRecord]) -> Self {
        let mut stats = Statistics {
            total: members.len(),
            ..Default::default()
        };

        for member in members {
            match member.status {
                MemberStatus::Active => stats.active += 1,
                MemberStatus::Inactive => stats.inactive += 1,
            }

            let bucket = match member.member_type {
                MemberType::Company => &mut stats.companies,
                MemberType::Ie => &mut stats.individual_entrepreneurs,
                MemberType::Person => &mut stats.private_persons,
                MemberType::Unknown => continue,
            };
            match member.status {
                MemberStatus::Active => bucket.active += 1,
                MemberStatus::Inactive => bucket.inactive += 1,
            }
        }
        stats
    }

    pub fn to_metadata(&self, last_updated: String, source_file: String) -> Metadata {
        Metadata {
            total_members: self.total,
            active_members: self.active,
            inactive_members: self.inactive,
            companies: self.companies.total(),
            individual_entrepreneurs: self.individual_entrepreneurs.total(),
            private_persons: self.private_persons.total(),
            last_updated,
            source_file,
        }
    }
}
