//! Member directory

use std::collections::{HashMap, HashSet};

use chrono::Utc;

use crate::models::{CreateMember, Member, MemberId};

/// First id handed out by the directory.
const FIRST_MEMBER_ID: MemberId = 1;

/// Hash-backed directory of registered members. No ordering guarantee
/// when enumerating.
#[derive(Debug)]
pub struct MemberDirectory {
    members: HashMap<MemberId, Member>,
    next_id: MemberId,
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            next_id: FIRST_MEMBER_ID,
        }
    }

    /// Register a member, assigning the next id. Request validation
    /// happens in the service layer before this is called.
    pub fn register(&mut self, new: CreateMember) -> &Member {
        let id = self.next_id;
        self.next_id += 1;

        let member = Member {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            registration_date: Utc::now().date_naive(),
            current_borrowed_books: HashSet::new(),
            pending_fines: 0.0,
        };
        self.members.entry(id).or_insert(member)
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.get_mut(&id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn remove(&mut self, id: MemberId) -> Option<Member> {
        self.members.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> + '_ {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for MemberDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_sequential_ids_from_one() {
        let mut directory = MemberDirectory::new();
        let first = directory
            .register(CreateMember::new("Asha", "asha@example.com", "9123456789"))
            .id;
        let second = directory
            .register(CreateMember::new("Ravi", "ravi@example.com", "8123456789"))
            .id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn removal_frees_the_entry_but_not_the_id() {
        let mut directory = MemberDirectory::new();
        let id = directory
            .register(CreateMember::new("Asha", "asha@example.com", "9123456789"))
            .id;
        assert!(directory.remove(id).is_some());
        assert!(!directory.contains(id));

        let next = directory
            .register(CreateMember::new("Ravi", "ravi@example.com", "8123456789"))
            .id;
        assert_eq!(next, id + 1);
    }
}
