use serde::{Deserialize, Serialize};

/// 投稿リソースのレスポンス型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// 作成・更新時に送るリクエストボディ
///
/// `id` は作成時には送らず、更新時のみ送る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(user_id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            id: None,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// 送ったフィールドがすべてレスポンスと一致するか
    pub fn matches(&self, post: &Post) -> bool {
        self.user_id == post.user_id
            && self.id.map_or(true, |id| id == post.id)
            && self.title == post.title
            && self.body == post.body
    }
}
