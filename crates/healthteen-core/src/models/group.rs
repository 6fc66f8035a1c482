/// A read-only post inside a community group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPost {
    pub author: String,
    pub posted_at: String,
    pub body: String,
    pub like_count: u32,
    pub comment_count: u32,
}

/// A community group shown on the community tab and in the group detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub members: u32,
    pub description: String,
    pub posts: Vec<GroupPost>,
}
