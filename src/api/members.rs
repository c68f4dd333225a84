use uuid::Uuid;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::Member;

impl ShortcutClient {
    /// Member owning the API token
    pub fn get_current_member(&self) -> Result<Member> {
        self.get("/member")
    }

    /// Every member of the workspace, disabled ones included
    pub fn list_members(&self) -> Result<Vec<Member>> {
        self.get("/members")
    }

    pub fn get_member(&self, member_id: Uuid) -> Result<Member> {
        self.get(&resource_path("members", member_id))
    }
}
