use crate::error::{CoreError, LookupKind};
use crate::models::{Contact, Group};

/// Read-only lookup of community groups and chat contacts.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    groups: Vec<Group>,
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn new(groups: Vec<Group>, contacts: Vec<Contact>) -> Self {
        Self { groups, contacts }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn group(&self, name: &str) -> Result<&Group, CoreError> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| CoreError::not_found(LookupKind::Group, name))
    }

    pub fn contact(&self, name: &str) -> Result<&Contact, CoreError> {
        self.contacts
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CoreError::not_found(LookupKind::Contact, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn directory() -> Directory {
        Directory::new(seed::groups(), seed::contacts())
    }

    #[test]
    fn test_group_lookup() {
        let dir = directory();
        let group = dir.group("Healthy Recipes").unwrap();
        assert_eq!(group.members, 892);
        assert_eq!(group.posts.len(), 3);
        assert_eq!(
            dir.group("Chess Club"),
            Err(CoreError::not_found(LookupKind::Group, "Chess Club"))
        );
    }

    #[test]
    fn test_contact_lookup() {
        let dir = directory();
        assert!(dir.contact("Liam").unwrap().unread);
        assert_eq!(dir.contact("Lana").unwrap().initial(), 'L');
        assert!(matches!(
            dir.contact("liam"),
            Err(CoreError::NotFound { kind: LookupKind::Contact, .. })
        ));
    }
}
