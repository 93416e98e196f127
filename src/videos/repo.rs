use sqlx::{FromRow, SqlitePool};

/// Video record in the database. `file_path` points into the file store
/// and is written only after the bytes are on disk.
#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub file_path: String,
    pub owner_id: i64,
}

impl Video {
    /// Record an uploaded video. The caller has already verified the owner
    /// exists and written the file.
    pub async fn create(
        db: &SqlitePool,
        title: &str,
        file_path: &str,
        owner_id: i64,
    ) -> anyhow::Result<Video> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (title, file_path, owner_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, title, file_path, owner_id
            "#,
        )
        .bind(title)
        .bind(file_path)
        .bind(owner_id)
        .fetch_one(db)
        .await?;
        Ok(video)
    }

    /// All videos belonging to one user, in insertion order.
    pub async fn list_by_owner(db: &SqlitePool, owner_id: i64) -> anyhow::Result<Vec<Video>> {
        let rows = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, title, file_path, owner_id
            FROM videos
            WHERE owner_id = ?1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Video>> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, title, file_path, owner_id
            FROM videos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(video)
    }
}

#[cfg(test)]
mod repo_tests {
    use super::*;
    use crate::auth::repo::User;
    use crate::state::AppState;

    #[tokio::test]
    async fn list_by_owner_is_scoped_and_in_insertion_order() {
        let state = AppState::for_tests("video-list").await;
        let alice = User::create(&state.db, "alice@x.com", "p").await.expect("user");
        let bob = User::create(&state.db, "bob@x.com", "p").await.expect("user");

        Video::create(&state.db, "first", "videos/user1_a.mp4", alice.id)
            .await
            .expect("video");
        Video::create(&state.db, "other", "videos/user2_b.mp4", bob.id)
            .await
            .expect("video");
        Video::create(&state.db, "second", "videos/user1_c.mp4", alice.id)
            .await
            .expect("video");

        let mine = Video::list_by_owner(&state.db, alice.id).await.expect("list");
        let titles: Vec<_> = mine.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);

        let none = Video::list_by_owner(&state.db, 999).await.expect("list");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_misses_cleanly() {
        let state = AppState::for_tests("video-miss").await;
        assert!(Video::find_by_id(&state.db, 42).await.expect("query").is_none());
    }
}
